/// Procedural mesh builders. Each emits a `bevy::Mesh` from raw vertex and
/// index buffers; uploading and drawing is the renderer's concern.
pub mod dome;
pub mod quadrant_surface;
pub mod tube;
