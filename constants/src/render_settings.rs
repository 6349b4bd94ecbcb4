use bevy::prelude::*;

/// Scene background: near-black studio backdrop.
pub const CLEAR_COLOUR: Color = Color::srgb(0.066, 0.066, 0.066);

/// Ground grid extent and divisions.
pub const GRID_SIZE: f32 = 100.0;
pub const GRID_DIVISIONS: usize = 100;
pub const GRID_OPACITY: f32 = 0.25;

/// Axis gizmo line length.
pub const AXIS_GIZMO_LENGTH: f32 = 3.0;

/// Head shell overlay rendering.
pub const SHELL_LINE_OPACITY: f32 = 0.05;
pub const SHELL_SURFACE_OPACITY: f32 = 0.1;

/// Isometric camera framing: start position and visible height of the
/// orthographic frustum.
pub const CAMERA_START_POSITION: Vec3 = Vec3::new(-45.0, 45.0, 45.0);
pub const CAMERA_VIEWPORT_HEIGHT: f32 = 100.0;

/// Smoothing factor applied to orbit input each second.
pub const CAMERA_LERP_SPEED: f32 = 12.0;
