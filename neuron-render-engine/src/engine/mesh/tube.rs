use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};

use crate::engine::geometry::curve::CatmullRomSpline;

/// Sweep a circular cross-section along a spline, producing a closed-sided
/// open-ended tube: `segments + 1` rings of `radial_segments + 1` vertices
/// (seam vertex duplicated for clean normals).
///
/// Rebuilt wholesale every frame for the animated chains; at ≤50 segments a
/// full rebuild is cheaper to maintain than incremental vertex updates.
pub fn build_tube_mesh(
    spline: &CatmullRomSpline,
    segments: usize,
    radius: f32,
    radial_segments: usize,
) -> Mesh {
    let frames = transport_frames(spline, segments);

    let ring = radial_segments + 1;
    let mut positions = Vec::with_capacity((segments + 1) * ring);
    let mut normals = Vec::with_capacity((segments + 1) * ring);

    for frame in &frames {
        for j in 0..=radial_segments {
            let theta = j as f32 / radial_segments as f32 * std::f32::consts::TAU;
            let dir = frame.normal * theta.cos() + frame.binormal * theta.sin();
            let vertex = frame.center + dir * radius;
            positions.push([vertex.x, vertex.y, vertex.z]);
            normals.push([dir.x, dir.y, dir.z]);
        }
    }

    let mut indices = Vec::with_capacity(segments * radial_segments * 6);
    for i in 0..segments {
        for j in 0..radial_segments {
            let a = (i * ring + j) as u32;
            let b = a + ring as u32;
            indices.extend_from_slice(&[a, b, a + 1, b, b + 1, a + 1]);
        }
    }

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::default(),
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_indices(Indices::U32(indices));
    mesh
}

struct SweepFrame {
    center: Vec3,
    normal: Vec3,
    binormal: Vec3,
}

/// Parallel-transport frames along the spline: the initial normal is chosen
/// against the least-aligned world axis, then rotated ring-to-ring by the
/// tangent change, which avoids the sudden flips a naive Frenet frame shows
/// on near-straight chains.
fn transport_frames(spline: &CatmullRomSpline, segments: usize) -> Vec<SweepFrame> {
    let mut frames = Vec::with_capacity(segments + 1);

    let mut tangents = Vec::with_capacity(segments + 1);
    for i in 0..=segments {
        tangents.push(spline.tangent_at(i as f32 / segments as f32));
    }

    let mut normal = initial_normal(tangents[0]);
    for (i, tangent) in tangents.iter().enumerate() {
        if i > 0 {
            let axis = tangents[i - 1].cross(*tangent);
            if axis.length_squared() > f32::EPSILON {
                let angle = tangents[i - 1].dot(*tangent).clamp(-1.0, 1.0).acos();
                normal = Quat::from_axis_angle(axis.normalize(), angle) * normal;
            }
        }
        // Re-orthogonalise against accumulated floating error.
        normal = (normal - *tangent * normal.dot(*tangent)).normalize_or(initial_normal(*tangent));
        frames.push(SweepFrame {
            center: spline.point_at(i as f32 / segments as f32),
            normal,
            binormal: tangent.cross(normal).normalize_or(Vec3::Y),
        });
    }

    frames
}

fn initial_normal(tangent: Vec3) -> Vec3 {
    let abs = tangent.abs();
    let axis = if abs.x <= abs.y && abs.x <= abs.z {
        Vec3::X
    } else if abs.y <= abs.z {
        Vec3::Y
    } else {
        Vec3::Z
    };
    tangent.cross(axis).normalize_or(Vec3::X)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn straight_spline() -> CatmullRomSpline {
        let points: Vec<Vec3> = (0..=20).map(|i| Vec3::new(0.0, 0.0, -(i as f32) * 0.5)).collect();
        CatmullRomSpline::new(&points)
    }

    #[test]
    fn tube_has_expected_vertex_and_index_counts() {
        let mesh = build_tube_mesh(&straight_spline(), 20, 0.05, 8);
        let positions = mesh.attribute(Mesh::ATTRIBUTE_POSITION).unwrap();
        assert_eq!(positions.len(), 21 * 9);
        let indices = mesh.indices().unwrap();
        assert_eq!(indices.len(), 20 * 8 * 6);
    }

    #[test]
    fn ring_vertices_sit_at_tube_radius() {
        let spline = straight_spline();
        let segments = 20;
        let radius = 0.25;
        let frames = transport_frames(&spline, segments);
        let mesh = build_tube_mesh(&spline, segments, radius, 8);
        let positions = match mesh.attribute(Mesh::ATTRIBUTE_POSITION).unwrap() {
            bevy::render::mesh::VertexAttributeValues::Float32x3(values) => values.clone(),
            other => panic!("unexpected attribute format: {other:?}"),
        };

        for (i, frame) in frames.iter().enumerate() {
            for j in 0..=8 {
                let p = positions[i * 9 + j];
                let vertex = Vec3::from_array(p);
                assert_abs_diff_eq!(vertex.distance(frame.center), radius, epsilon = 1e-4);
            }
        }
    }

    #[test]
    fn frames_stay_orthonormal() {
        let points = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.5, -1.0),
            Vec3::new(2.0, -0.5, -2.0),
            Vec3::new(3.0, 0.0, -3.5),
        ];
        let spline = CatmullRomSpline::new(&points);
        for frame in transport_frames(&spline, 30) {
            assert_abs_diff_eq!(frame.normal.length(), 1.0, epsilon = 1e-4);
            assert_abs_diff_eq!(frame.binormal.length(), 1.0, epsilon = 1e-4);
            assert_abs_diff_eq!(frame.normal.dot(frame.binormal), 0.0, epsilon = 1e-4);
        }
    }
}
