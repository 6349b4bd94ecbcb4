/// Isometric orbit camera and mouse-ray ground picking.
pub mod viewport_camera;

/// Eased camera flights for planet focus and return.
pub mod focus_tween;

pub use focus_tween::{FocusTween, focus_tween_system};
pub use viewport_camera::{ViewportCamera, camera_controller};
