use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use constants::render_settings::{CAMERA_LERP_SPEED, CAMERA_START_POSITION};

use super::focus_tween::FocusTween;

/// Isometric viewport camera orbiting the scene origin.
///
/// Holds the orbit angles and zoom as the canonical state; the camera
/// transform is damped toward them every frame. Also owns the mouse-ray
/// ground-plane resolution the interaction tools consume.
#[derive(Resource)]
pub struct ViewportCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub zoom: f32,
    pub ground_height: f32,
}

impl ViewportCamera {
    /// Resolve the cursor position to a world point on the ground plane.
    /// Returns None when the ray runs parallel to the plane or points away
    /// from it.
    pub fn mouse_to_ground_plane(
        &self,
        cursor_pos: Vec2,
        camera: &Camera,
        camera_transform: &GlobalTransform,
    ) -> Option<Vec3> {
        let ray = camera.viewport_to_world(camera_transform, cursor_pos).ok()?;
        self.flat_plane_intersection(&ray)
    }

    fn flat_plane_intersection(&self, ray: &Ray3d) -> Option<Vec3> {
        if ray.direction.y.abs() < 0.001 {
            return None;
        }
        let t = (self.ground_height - ray.origin.y) / ray.direction.y;
        if t > 0.0 {
            Some(ray.origin + ray.direction * t)
        } else {
            None
        }
    }
}

impl Default for ViewportCamera {
    fn default() -> Self {
        let start = CAMERA_START_POSITION;
        let horizontal = Vec2::new(start.x, start.z).length();
        Self {
            yaw: start.x.atan2(start.z),
            pitch: -(start.y.atan2(horizontal)),
            distance: start.length(),
            zoom: 1.0,
            ground_height: 0.0,
        }
    }
}

/// Orbit and zoom input, with damped easing toward the target pose.
/// Suspended while a focus tween owns the camera transform.
pub fn camera_controller(
    mut cameras: Query<(&mut Transform, &mut Projection), With<Camera3d>>,
    mut viewport_camera: ResMut<ViewportCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    tween: Res<FocusTween>,
    time: Res<Time>,
) {
    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();
    let mut scroll_accum = 0.0;
    for ev in scroll_events.read() {
        scroll_accum += match ev.unit {
            MouseScrollUnit::Line => ev.y * 1.0,
            MouseScrollUnit::Pixel => ev.y * 0.05,
        };
    }

    if tween.is_active() {
        return;
    }

    let Ok((mut camera_transform, mut projection)) = cameras.single_mut() else {
        return;
    };

    // Right-drag orbits around the origin.
    if mouse_button.pressed(MouseButton::Right) && mouse_delta != Vec2::ZERO {
        let yaw_sens = 0.0035;
        let pitch_sens = 0.0030;
        viewport_camera.yaw -= mouse_delta.x * yaw_sens;
        viewport_camera.pitch = (viewport_camera.pitch - mouse_delta.y * pitch_sens)
            .clamp(-1.55, -0.05);
    }

    // Wheel zooms by scaling the orthographic frustum.
    if scroll_accum.abs() > f32::EPSILON {
        viewport_camera.zoom = (viewport_camera.zoom * (1.0 + scroll_accum * 0.1)).clamp(0.2, 5.0);
    }
    if let Projection::Orthographic(ref mut ortho) = *projection {
        ortho.scale = 1.0 / viewport_camera.zoom;
    }

    let rotation = Quat::from_euler(
        EulerRot::YXZ,
        viewport_camera.yaw,
        viewport_camera.pitch,
        0.0,
    );
    let target_pos = rotation * Vec3::Z * viewport_camera.distance;

    let lerp_amount = (CAMERA_LERP_SPEED * time.delta_secs()).min(1.0);
    camera_transform.translation = camera_transform.translation.lerp(target_pos, lerp_amount);
    camera_transform.look_at(Vec3::ZERO, Vec3::Y);
}
