use bevy::pbr::NotShadowCaster;
use bevy::prelude::*;
use bevy::render::render_resource::Face;

use constants::scene::PLANET_HALO_SCALE;

use crate::engine::animation::bob::BobState;
use crate::engine::assets::SceneConfig;

/// Glowing interactive sphere far out in the scene. Carries its pick radius
/// so the hover tool can ray-test it without touching mesh data.
#[derive(Component)]
pub struct Planet {
    pub radius: f32,
}

pub fn spawn_planet(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<SceneConfig>,
) {
    let planet = &config.planet;
    let position = planet.position_vec();
    let colour = planet.colour_value();

    let core_material = materials.add(StandardMaterial {
        base_color: colour,
        emissive: colour.to_linear() * 2.0,
        unlit: true,
        ..default()
    });

    // Back-face halo shell: rendered inside-out and additively so the rim
    // glows around the silhouette.
    let halo_material = materials.add(StandardMaterial {
        base_color: colour.with_alpha(0.35),
        emissive: colour.to_linear(),
        unlit: true,
        cull_mode: Some(Face::Front),
        alpha_mode: AlphaMode::Add,
        ..default()
    });

    commands
        .spawn((
            Planet {
                radius: planet.radius,
            },
            BobState::new(planet.bob_duration, position.y, position.z),
            Mesh3d(meshes.add(Sphere::new(planet.radius))),
            MeshMaterial3d(core_material),
            NotShadowCaster,
            Transform::from_translation(position),
        ))
        .with_children(|parent| {
            parent.spawn((
                Mesh3d(meshes.add(Sphere::new(planet.radius * PLANET_HALO_SCALE))),
                MeshMaterial3d(halo_material),
                NotShadowCaster,
                Transform::IDENTITY,
            ));
            parent.spawn((
                PointLight {
                    color: colour,
                    intensity: 2_000_000.0,
                    range: 60.0,
                    shadows_enabled: false,
                    ..default()
                },
                Transform::IDENTITY,
            ));
        });
}

/// Drive any in-flight bob pulse on the planet transform.
pub fn planet_bob_system(
    time: Res<Time>,
    mut planets: Query<(&mut Transform, &mut BobState), With<Planet>>,
) {
    for (mut transform, mut bob) in &mut planets {
        bob.update(time.elapsed_secs(), &mut transform);
    }
}
