use bevy::prelude::*;

const PARALLEL_EPSILON: f32 = 1e-6;

/// Minimal rotation mapping the canonical `forward` axis onto `direction`.
///
/// Used to orient sheaths, the head shell and the terminal cluster along a
/// spine tangent. Degenerate inputs never produce NaN: a zero-length
/// direction yields the identity, and an antiparallel direction yields a
/// half-turn about a fixed perpendicular axis.
pub fn align_to(forward: Vec3, direction: Vec3) -> Quat {
    let direction = direction.normalize_or_zero();
    if direction == Vec3::ZERO {
        return Quat::IDENTITY;
    }
    let forward = forward.normalize_or_zero();
    if forward == Vec3::ZERO {
        return Quat::IDENTITY;
    }

    let dot = forward.dot(direction);
    if dot > 1.0 - PARALLEL_EPSILON {
        Quat::IDENTITY
    } else if dot < -1.0 + PARALLEL_EPSILON {
        Quat::from_axis_angle(fixed_perpendicular(forward), std::f32::consts::PI)
    } else {
        Quat::from_rotation_arc(forward, direction)
    }
}

/// Deterministic unit vector perpendicular to `v`.
fn fixed_perpendicular(v: Vec3) -> Vec3 {
    let candidate = if v.x.abs() < 0.9 { Vec3::X } else { Vec3::Y };
    v.cross(candidate).normalize()
}
