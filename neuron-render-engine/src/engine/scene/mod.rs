/// Ground reference grid and origin axis gizmos.
pub mod grid;

/// The animated neuron: body tube, head shell, sheaths, terminal fan.
pub mod neuron;

/// Glowing interactive planet with hover bob.
pub mod planet;
