/// Animated point chain state: rest/current spines and link rest lengths.
pub mod chain;

/// Target-seek with forward-propagating distance constraints.
pub mod follower;

/// Per-frame sinusoidal spine perturbation.
pub mod wave;

/// One-shot hover bob pulse.
pub mod bob;
