/// Shared tuning constants for the neuron scene.
///
/// Kept in a leaf crate so scene assembly, animation systems and tests
/// agree on the same values without circular dependencies.
pub mod animation;
pub mod render_settings;
pub mod scene;
