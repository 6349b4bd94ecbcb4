use bevy::prelude::*;
use bevy::render::mesh::Indices;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::PrimitiveTopology;
use bevy::render::view::NoFrustumCulling;

use constants::render_settings::{AXIS_GIZMO_LENGTH, GRID_DIVISIONS, GRID_OPACITY, GRID_SIZE};

#[derive(Component)]
pub struct GroundGrid;

/// Flat reference grid on the ground plane plus RGB axis gizmos at the
/// origin.
pub fn create_ground_grid(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
) {
    let grid_material = materials.add(StandardMaterial {
        base_color: Color::srgba(1.0, 1.0, 1.0, GRID_OPACITY),
        unlit: true,
        alpha_mode: AlphaMode::Blend,
        ..default()
    });

    let grid_mesh = create_grid_line_mesh(GRID_SIZE, GRID_DIVISIONS);
    spawn_grid_line_entity(commands, meshes, grid_material, grid_mesh);

    create_axis_gizmos(commands, meshes, materials);
}

/// Single LineList mesh holding every grid line in both directions.
fn create_grid_line_mesh(size: f32, divisions: usize) -> Mesh {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    let half = size / 2.0;
    let spacing = size / divisions as f32;

    for i in 0..=divisions {
        let offset = -half + i as f32 * spacing;

        // Line running along Z at fixed X.
        let base = vertices.len() as u32;
        vertices.push([offset, 0.0, -half]);
        vertices.push([offset, 0.0, half]);
        indices.extend_from_slice(&[base, base + 1]);

        // Line running along X at fixed Z.
        let base = vertices.len() as u32;
        vertices.push([-half, 0.0, offset]);
        vertices.push([half, 0.0, offset]);
        indices.extend_from_slice(&[base, base + 1]);
    }

    let mut mesh = Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::RENDER_WORLD);
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, vertices);
    mesh.insert_indices(Indices::U32(indices));
    mesh
}

/// Three origin-anchored axis lines: X red, Y green, Z blue.
fn create_axis_gizmos(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
) {
    let axes = [
        (Vec3::X, Color::srgb(1.0, 0.2, 0.2)),
        (Vec3::Y, Color::srgb(0.2, 1.0, 0.2)),
        (Vec3::Z, Color::srgb(0.2, 0.4, 1.0)),
    ];

    for (direction, colour) in axes {
        let end = direction * AXIS_GIZMO_LENGTH;
        let mut mesh = Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::RENDER_WORLD);
        mesh.insert_attribute(
            Mesh::ATTRIBUTE_POSITION,
            vec![[0.0, 0.0, 0.0], [end.x, end.y, end.z]],
        );
        mesh.insert_indices(Indices::U32(vec![0, 1]));

        let material = materials.add(StandardMaterial {
            base_color: colour,
            unlit: true,
            ..default()
        });

        spawn_grid_line_entity(commands, meshes, material, mesh);
    }
}

fn spawn_grid_line_entity(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    material: Handle<StandardMaterial>,
    line_mesh: Mesh,
) {
    commands.spawn((
        Mesh3d(meshes.add(line_mesh)),
        MeshMaterial3d(material),
        Visibility::Visible,
        NoFrustumCulling,
        Transform::IDENTITY,
        GroundGrid,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_mesh_has_a_line_pair_per_division() {
        let mesh = create_grid_line_mesh(100.0, 100);
        let positions = mesh
            .attribute(Mesh::ATTRIBUTE_POSITION)
            .and_then(|a| a.as_float3())
            .unwrap();
        // 101 lines in each direction, two vertices per line.
        assert_eq!(positions.len(), 101 * 2 * 2);
    }

    #[test]
    fn grid_lines_sit_on_the_ground_plane() {
        let mesh = create_grid_line_mesh(10.0, 4);
        let positions = mesh
            .attribute(Mesh::ATTRIBUTE_POSITION)
            .and_then(|a| a.as_float3())
            .unwrap();
        assert!(positions.iter().all(|p| p[1] == 0.0));
    }
}
