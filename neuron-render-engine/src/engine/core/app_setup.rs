// Standard library and external crates
use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy::render::camera::ScalingMode;
use bevy_common_assets::json::JsonAssetPlugin;

use constants::render_settings::{CAMERA_START_POSITION, CAMERA_VIEWPORT_HEIGHT, CLEAR_COLOUR};

// Crate engine modules
use crate::engine::assets::SceneConfig;
use crate::engine::camera::{FocusTween, ViewportCamera, camera_controller, focus_tween_system};
use crate::engine::core::app_state::{AppState, FpsText};
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::config_loader::{ConfigLoader, load_config_system, start_loading};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::grid::create_ground_grid;
use crate::engine::scene::neuron::{
    neuron_seek_system, neuron_wave_system, regenerate_chain_meshes, spawn_neuron,
    update_bulb_positions, update_head_attachment, update_sheath_attachments,
    update_terminal_cluster,
};
use crate::engine::scene::planet::{planet_bob_system, spawn_planet};
use crate::engine::systems::fps_tracking::fps_text_update_system;
// Crate tools modules
use crate::tools::planet_hover::{
    FocusHome, PlanetHoverState, planet_focus_system, planet_hover_system,
};
use crate::tools::target_picker::target_picker_system;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers SceneConfig as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<SceneConfig>::new(&["json"]))
        .insert_resource(ClearColor(CLEAR_COLOUR))
        .insert_resource(AmbientLight {
            color: Color::WHITE,
            brightness: 300.0,
            ..default()
        });

    // Initialise resources early
    app.init_resource::<LoadingProgress>()
        .init_resource::<ConfigLoader>()
        .init_resource::<ViewportCamera>()
        .init_resource::<FocusTween>()
        .init_resource::<PlanetHoverState>()
        .init_resource::<FocusHome>();

    // State-based system scheduling
    app.add_systems(Startup, (setup, start_loading).chain())
        .add_systems(
            Update,
            load_config_system.run_if(in_state(AppState::Loading)),
        )
        .add_systems(OnEnter(AppState::Running), (spawn_neuron, spawn_planet));

    // Animation pipeline: seek moves the rest spine, the wave rewrites the
    // current spine, meshes rebuild from it, then everything riding the
    // chains is repositioned. The order is load-bearing.
    let animation_systems = (
        neuron_seek_system,
        neuron_wave_system,
        regenerate_chain_meshes,
        update_head_attachment,
        update_sheath_attachments,
        update_terminal_cluster,
        update_bulb_positions,
        planet_bob_system,
    )
        .chain();

    let interaction_systems = (
        planet_hover_system,
        planet_focus_system,
        target_picker_system,
        camera_controller,
        focus_tween_system,
    );

    app.add_systems(
        Update,
        (animation_systems, interaction_systems).run_if(in_state(AppState::Running)),
    );

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(Update, fps_text_update_system);
    }

    app
}

fn spawn_lighting(commands: &mut Commands) {
    commands.spawn((
        DirectionalLight {
            shadows_enabled: false,
            illuminance: 8_000.0,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::ZYX,
            0.0,
            1.0,
            -std::f32::consts::FRAC_PI_4,
        )),
    ));
}

fn create_viewport_camera(commands: &mut Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::Orthographic(OrthographicProjection {
            scaling_mode: ScalingMode::FixedVertical {
                viewport_height: CAMERA_VIEWPORT_HEIGHT,
            },
            ..OrthographicProjection::default_3d()
        }),
        Transform::from_translation(CAMERA_START_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

// Startup system that only handles basic initialisation
fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    spawn_lighting(&mut commands);
    create_viewport_camera(&mut commands);
    create_ground_grid(&mut commands, &mut meshes, &mut materials);

    #[cfg(not(target_arch = "wasm32"))]
    {
        create_native_overlays(&mut commands);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn create_native_overlays(commands: &mut Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("FPS: "),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(1., 0., 0.)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
                FpsText,
            ));
        });
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
