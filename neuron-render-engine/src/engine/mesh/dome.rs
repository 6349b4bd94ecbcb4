use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};

/// Upper-half UV sphere with an open flat base, used for the dome nested in
/// the head shell. Bevy's sphere primitives only produce full spheres, so
/// the latitude sweep is generated directly.
pub fn build_dome_mesh(radius: f32, width_segments: usize, height_segments: usize) -> Mesh {
    let ring = width_segments + 1;
    let mut positions: Vec<[f32; 3]> = Vec::with_capacity((height_segments + 1) * ring);
    let mut normals: Vec<[f32; 3]> = Vec::with_capacity(positions.capacity());

    for row in 0..=height_segments {
        // Latitude from the pole (0) down to the equator (PI/2).
        let theta = row as f32 / height_segments as f32 * std::f32::consts::FRAC_PI_2;
        for col in 0..=width_segments {
            let phi = col as f32 / width_segments as f32 * std::f32::consts::TAU;
            let dir = Vec3::new(
                theta.sin() * phi.cos(),
                theta.cos(),
                theta.sin() * phi.sin(),
            );
            positions.push((dir * radius).to_array());
            normals.push(dir.to_array());
        }
    }

    let mut indices = Vec::with_capacity(height_segments * width_segments * 6);
    for row in 0..height_segments {
        for col in 0..width_segments {
            let a = (row * ring + col) as u32;
            let b = a + ring as u32;
            // Pole row produces degenerate first triangles; harmless and
            // keeps the index layout uniform.
            indices.extend_from_slice(&[a, b, a + 1, b, b + 1, a + 1]);
        }
    }

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD,
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_indices(Indices::U32(indices));
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn dome_vertices_lie_on_upper_hemisphere() {
        let radius = 0.85;
        let mesh = build_dome_mesh(radius, 32, 16);
        let positions = match mesh.attribute(Mesh::ATTRIBUTE_POSITION).unwrap() {
            bevy::render::mesh::VertexAttributeValues::Float32x3(values) => values.clone(),
            other => panic!("unexpected attribute format: {other:?}"),
        };

        assert_eq!(positions.len(), 17 * 33);
        for p in positions {
            let v = Vec3::from_array(p);
            assert_abs_diff_eq!(v.length(), radius, epsilon = 1e-4);
            assert!(v.y >= -1e-6, "vertex below the flat base: {v:?}");
        }
    }

    #[test]
    fn equator_row_sits_on_base_plane() {
        let mesh = build_dome_mesh(1.0, 8, 4);
        let positions = match mesh.attribute(Mesh::ATTRIBUTE_POSITION).unwrap() {
            bevy::render::mesh::VertexAttributeValues::Float32x3(values) => values.clone(),
            other => panic!("unexpected attribute format: {other:?}"),
        };
        for p in &positions[4 * 9..] {
            assert_abs_diff_eq!(p[1], 0.0, epsilon = 1e-6);
        }
    }
}
