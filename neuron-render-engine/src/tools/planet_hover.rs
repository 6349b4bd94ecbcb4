use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use constants::animation::{FOCUS_TWEEN_DURATION, FOCUS_ZOOM_FACTOR};

use crate::engine::animation::bob::BobState;
use crate::engine::camera::{FocusTween, ViewportCamera};
use crate::engine::scene::planet::Planet;

/// Whether the cursor ray currently hits the planet. Read by the focus
/// tool and the ground target picker, which yields to planet clicks.
#[derive(Resource, Default)]
pub struct PlanetHoverState {
    pub hovered: bool,
}

/// Camera position remembered at focus time, restored on Escape.
#[derive(Resource, Default)]
pub struct FocusHome {
    position: Option<Vec3>,
}

/// Analytic ray-sphere intersection; returns the nearest positive hit
/// distance.
pub fn ray_sphere_distance(origin: Vec3, direction: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let to_origin = origin - center;
    let b = to_origin.dot(direction);
    let c = to_origin.length_squared() - radius * radius;
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }
    let sqrt_d = discriminant.sqrt();
    let near = -b - sqrt_d;
    let far = -b + sqrt_d;
    if near > 0.0 {
        Some(near)
    } else if far > 0.0 {
        Some(far)
    } else {
        None
    }
}

/// Cursor-ray hover test against the planet. A hovering cursor keeps
/// re-firing the bob pulse every frame; `BobState` ignores triggers while
/// one is in flight, so a resting cursor produces a repeating bob.
pub fn planet_hover_system(
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    mut planets: Query<(&Planet, &GlobalTransform, &mut BobState)>,
    mut hover: ResMut<PlanetHoverState>,
    time: Res<Time>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor_pos) = window.cursor_position() else {
        hover.hovered = false;
        return;
    };
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };
    let Ok(ray) = camera.viewport_to_world(camera_transform, cursor_pos) else {
        return;
    };

    let Ok((planet, planet_transform, mut bob)) = planets.single_mut() else {
        return;
    };

    let hit = ray_sphere_distance(
        ray.origin,
        *ray.direction,
        planet_transform.translation(),
        planet.radius,
    )
    .is_some();

    if hit {
        bob.trigger(time.elapsed_secs());
    }
    hover.hovered = hit;
}

/// Click the hovered planet to fly the camera out by the zoom factor;
/// Escape flies it back to where it was when the focus began.
pub fn planet_focus_system(
    mouse_button: Res<ButtonInput<MouseButton>>,
    keyboard: Res<ButtonInput<KeyCode>>,
    hover: Res<PlanetHoverState>,
    mut tween: ResMut<FocusTween>,
    mut home: ResMut<FocusHome>,
    mut viewport_camera: ResMut<ViewportCamera>,
    cameras: Query<&Transform, With<Camera3d>>,
    time: Res<Time>,
) {
    let Ok(camera_transform) = cameras.single() else {
        return;
    };
    let now = time.elapsed_secs();

    if mouse_button.just_pressed(MouseButton::Left)
        && hover.hovered
        && !tween.is_active()
        && home.position.is_none()
    {
        let start = camera_transform.translation;
        home.position = Some(start);
        // Scale the orbit distance in step with the flight so the
        // controller's rest pose is the zoomed-out framing once the tween
        // lands, instead of easing back to the pre-focus pose.
        viewport_camera.distance *= FOCUS_ZOOM_FACTOR;
        tween.begin(start, start * FOCUS_ZOOM_FACTOR, FOCUS_TWEEN_DURATION, now);
        return;
    }

    if keyboard.just_pressed(KeyCode::Escape) {
        if let Some(position) = home.position.take() {
            viewport_camera.distance /= FOCUS_ZOOM_FACTOR;
            tween.begin(
                camera_transform.translation,
                position,
                FOCUS_TWEEN_DURATION,
                now,
            );
        }
    }
}
