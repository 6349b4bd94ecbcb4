/// Pure parametric curve evaluation: quadratic Bezier and the Catmull-Rom
/// spline the chain meshes are rebuilt from every frame.
pub mod curve;

/// Tangent-alignment rotation helper shared by all spine attachments.
pub mod align;
