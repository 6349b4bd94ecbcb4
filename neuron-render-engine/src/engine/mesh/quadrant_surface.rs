use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};

/// Mesh set for one quadrant of the head shell: a translucent wall strip,
/// the roof cap fan, and the faint vertical line overlay.
pub struct QuadrantSurface {
    pub wall: Mesh,
    pub cap: Mesh,
    pub lines: Mesh,
}

/// Rotate a point into one of the four quadrants about the vertical axis.
///
/// The rotation is an exact coordinate permutation with sign flips, not a
/// floating-point matrix multiply, so the four quadrants are congruent to
/// the bit.
pub fn rotate_quadrant(p: Vec3, quadrant: usize) -> Vec3 {
    match quadrant % 4 {
        0 => p,
        1 => Vec3::new(p.z, p.y, -p.x),
        2 => Vec3::new(-p.x, p.y, -p.z),
        _ => Vec3::new(-p.z, p.y, p.x),
    }
}

/// Semicircular roof arc of `roof_segments + 1` points at `roof_height`,
/// rotated into `quadrant`.
pub fn roof_arc(
    roof_radius: f32,
    roof_height: f32,
    roof_segments: usize,
    quadrant: usize,
) -> Vec<Vec3> {
    (0..=roof_segments)
        .map(|i| {
            let angle = i as f32 / roof_segments as f32 * std::f32::consts::PI;
            let point = Vec3::new(
                angle.cos() * roof_radius,
                roof_height,
                angle.sin() * roof_radius,
            );
            rotate_quadrant(point, quadrant)
        })
        .collect()
}

/// Nearest roof-arc point by Euclidean distance. Linear scan, first minimum
/// wins; ties follow arc order, an accepted approximation rather than a
/// precise triangulation. Panics on an empty arc.
pub fn nearest_roof_point(point: Vec3, arc: &[Vec3]) -> Vec3 {
    assert!(!arc.is_empty(), "roof arc must not be empty");
    let mut closest = arc[0];
    let mut best = f32::INFINITY;
    for candidate in arc {
        let dist = candidate.distance(point);
        if dist < best {
            best = dist;
            closest = *candidate;
        }
    }
    closest
}

/// Build the wall, cap and line meshes for one quadrant from the planar
/// base curve. The base curve is given unrotated; both it and the roof arc
/// are rotated into place here.
///
/// A degenerate base curve (coincident points) produces zero-area walls; it
/// is not validated, the caller owns its geometry parameters.
pub fn build_quadrant_surface(
    base_curve: &[Vec3],
    roof_radius: f32,
    roof_height: f32,
    roof_segments: usize,
    quadrant: usize,
) -> QuadrantSurface {
    let base: Vec<Vec3> = base_curve
        .iter()
        .map(|p| rotate_quadrant(*p, quadrant))
        .collect();
    let arc = roof_arc(roof_radius, roof_height, roof_segments, quadrant);

    QuadrantSurface {
        wall: build_wall(&base, &arc),
        cap: build_cap(&arc, roof_height),
        lines: build_lines(&base, &arc),
    }
}

/// Quadrilateral strip connecting each base point to its nearest roof-arc
/// point: two triangles per consecutive base pair.
fn build_wall(base: &[Vec3], arc: &[Vec3]) -> Mesh {
    let mut positions: Vec<[f32; 3]> = Vec::with_capacity(base.len() * 2);
    let mut indices = Vec::new();

    for (index, point) in base.iter().enumerate() {
        let top = nearest_roof_point(*point, arc);
        positions.push(point.to_array());
        positions.push(top.to_array());

        if index + 1 < base.len() {
            let i = (index * 2) as u32;
            indices.extend_from_slice(&[i, i + 1, i + 2]);
            indices.extend_from_slice(&[i + 1, i + 3, i + 2]);
        }
    }

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD,
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_indices(Indices::U32(indices));
    mesh.compute_smooth_normals();
    mesh
}

/// Triangle fan from the arc centre over the roof opening.
fn build_cap(arc: &[Vec3], roof_height: f32) -> Mesh {
    let mut positions: Vec<[f32; 3]> = Vec::with_capacity(arc.len() + 1);
    positions.push([0.0, roof_height, 0.0]);
    for point in arc {
        positions.push(point.to_array());
    }

    let mut indices = Vec::with_capacity((arc.len() - 1) * 3);
    for i in 1..arc.len() as u32 {
        indices.extend_from_slice(&[0, i, i + 1]);
    }

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD,
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_indices(Indices::U32(indices));
    mesh.compute_smooth_normals();
    mesh
}

/// Faint vertical segments from each base point up to its roof anchor.
fn build_lines(base: &[Vec3], arc: &[Vec3]) -> Mesh {
    let mut positions: Vec<[f32; 3]> = Vec::with_capacity(base.len() * 2);
    for point in base {
        let top = nearest_roof_point(*point, arc);
        positions.push(point.to_array());
        positions.push(top.to_array());
    }

    let mut mesh = Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::RENDER_WORLD);
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quadrant_rotation_is_exact_permutation() {
        let p = Vec3::new(1.5, 0.0, -2.25);
        assert_eq!(rotate_quadrant(p, 0), p);
        assert_eq!(rotate_quadrant(p, 1), Vec3::new(-2.25, 0.0, -1.5));
        assert_eq!(rotate_quadrant(p, 2), Vec3::new(-1.5, 0.0, 2.25));
        assert_eq!(rotate_quadrant(p, 3), Vec3::new(2.25, 0.0, 1.5));
    }

    #[test]
    fn four_rotations_return_to_start() {
        let p = Vec3::new(0.3, 1.0, 0.7);
        let mut rotated = p;
        for _ in 0..4 {
            rotated = rotate_quadrant(rotated, 1);
        }
        assert_eq!(rotated, p);
    }

    #[test]
    fn nearest_roof_point_takes_first_minimum() {
        // Two arc points equidistant from the query; arc order decides.
        let arc = vec![Vec3::new(1.0, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0)];
        assert_eq!(nearest_roof_point(Vec3::ZERO, &arc), arc[0]);
    }

    #[test]
    #[should_panic(expected = "roof arc must not be empty")]
    fn nearest_roof_point_rejects_empty_arc() {
        nearest_roof_point(Vec3::ZERO, &[]);
    }

    #[test]
    fn wall_counts_match_base_curve() {
        let base: Vec<Vec3> = (0..=10)
            .map(|i| Vec3::new(-3.0 + 0.3 * i as f32, 0.0, 0.3 * i as f32))
            .collect();
        let surface = build_quadrant_surface(&base, 0.5664, 1.0, 50, 0);

        let wall_positions = surface.wall.attribute(Mesh::ATTRIBUTE_POSITION).unwrap();
        assert_eq!(wall_positions.len(), base.len() * 2);
        // Two triangles per consecutive base pair.
        assert_eq!(surface.wall.indices().unwrap().len(), (base.len() - 1) * 6);
    }

    #[test]
    fn cap_fan_has_one_triangle_per_roof_segment() {
        let base = vec![Vec3::new(-3.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 3.0)];
        let roof_segments = 50;
        let surface = build_quadrant_surface(&base, 0.5664, 1.0, roof_segments, 2);
        assert_eq!(surface.cap.indices().unwrap().len(), roof_segments * 3);
    }

    #[test]
    fn roof_arc_rotates_with_quadrant() {
        let arc0 = roof_arc(1.0, 1.0, 4, 0);
        let arc1 = roof_arc(1.0, 1.0, 4, 1);
        for (a, b) in arc0.iter().zip(&arc1) {
            assert_eq!(rotate_quadrant(*a, 1), *b);
        }
    }
}
