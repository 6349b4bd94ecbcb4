use bevy::prelude::*;

/// Quadratic Bezier control points for the head shell base curve (XZ plane).
pub const HEAD_BASE_P0: Vec3 = Vec3::new(-3.0, 0.0, 0.0);
pub const HEAD_BASE_P1: Vec3 = Vec3::new(-1.0, 0.0, 1.0);
pub const HEAD_BASE_P2: Vec3 = Vec3::new(0.0, 0.0, 3.0);

/// Sample count for the head shell base curve.
pub const HEAD_BASE_SEGMENTS: usize = 100;

/// Roof opening of the head shell: a semicircular arc lifted above the base.
pub const HEAD_ROOF_RADIUS: f32 = 0.5664;
pub const HEAD_ROOF_HEIGHT: f32 = 1.0;
pub const HEAD_ROOF_SEGMENTS: usize = 50;

/// Hemispherical dome nested inside the head shell.
pub const HEAD_DOME_RADIUS: f32 = 0.85;
pub const HEAD_DOME_WIDTH_SEGMENTS: usize = 32;
pub const HEAD_DOME_HEIGHT_SEGMENTS: usize = 16;

/// Sheath decoration geometry: a sphere flattened into an ellipsoid.
pub const SHEATH_RADIUS: f32 = 0.5;
pub const SHEATH_SCALE: Vec3 = Vec3::new(0.5, 0.5, 1.0);

/// Tip bulb radius as a multiple of the terminal tube radius.
pub const BULB_RADIUS_SCALE: f32 = 1.5;

/// Halo shell radius as a multiple of the planet radius.
pub const PLANET_HALO_SCALE: f32 = 1.3;
