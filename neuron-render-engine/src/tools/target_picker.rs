use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::engine::camera::ViewportCamera;
use crate::engine::scene::neuron::{Neuron, NeuronBody};
use crate::tools::planet_hover::PlanetHoverState;

/// Left-click ground picking: resolve the cursor to a ground-plane point,
/// express it in the neuron's local space and hand it to the body chain as
/// a seek target. Clicks on the planet belong to the focus tool and are
/// ignored here.
pub fn target_picker_system(
    mouse_button: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    viewport_camera: Res<ViewportCamera>,
    hover: Res<PlanetHoverState>,
    roots: Query<&GlobalTransform, With<Neuron>>,
    mut bodies: Query<&mut NeuronBody>,
) {
    if !mouse_button.just_pressed(MouseButton::Left) || hover.hovered {
        return;
    }

    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor_pos) = window.cursor_position() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };
    let Some(world_target) =
        viewport_camera.mouse_to_ground_plane(cursor_pos, camera, camera_transform)
    else {
        return;
    };

    let Ok(root_transform) = roots.single() else {
        return;
    };
    let Ok(mut body) = bodies.single_mut() else {
        return;
    };

    // Seek targets live in the neuron's local frame so the chain maths
    // stays independent of where the whole neuron is planted.
    let local_target = root_transform
        .compute_matrix()
        .inverse()
        .transform_point3(world_target);
    body.chain.set_target(local_target);
    info!("Neuron seek target set: {local_target:?}");
}
