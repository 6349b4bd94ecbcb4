use bevy::prelude::*;

/// Sample count for the arc-length lookup table. Matches the resolution the
/// spline is rebuilt at every frame; fine enough for chains of ≤50 segments.
const ARC_LENGTH_DIVISIONS: usize = 200;

/// Evaluate a quadratic Bezier curve at parameter `t`.
///
/// Not clamped: callers are expected to pass t in [0, 1]; values outside
/// simply extrapolate.
pub fn quadratic_bezier(p0: Vec3, p1: Vec3, p2: Vec3, t: f32) -> Vec3 {
    let u = 1.0 - t;
    p0 * (u * u) + p1 * (2.0 * u * t) + p2 * (t * t)
}

/// Sample a quadratic Bezier into `segments + 1` uniformly spaced points.
pub fn sample_quadratic_bezier(p0: Vec3, p1: Vec3, p2: Vec3, segments: usize) -> Vec<Vec3> {
    (0..=segments)
        .map(|i| quadratic_bezier(p0, p1, p2, i as f32 / segments as f32))
        .collect()
}

/// Interpolating Catmull-Rom spline through an ordered point sequence.
///
/// C¹-continuous, passes exactly through every input point, and cheap to
/// rebuild once per frame from a mutated spine. `point_at` / `tangent_at`
/// are arc-length parameterised so decorations spread evenly along the
/// curve regardless of control point spacing.
pub struct CatmullRomSpline {
    points: Vec<Vec3>,
    /// Cumulative arc length at `ARC_LENGTH_DIVISIONS + 1` curve-space samples.
    cumulative: Vec<f32>,
}

impl CatmullRomSpline {
    /// Build a spline through `points`. Panics on fewer than two points;
    /// that is a construction-time programmer error, not a runtime state.
    pub fn new(points: &[Vec3]) -> Self {
        assert!(
            points.len() >= 2,
            "spline requires at least two control points, got {}",
            points.len()
        );

        let mut spline = Self {
            points: points.to_vec(),
            cumulative: Vec::with_capacity(ARC_LENGTH_DIVISIONS + 1),
        };

        let mut total = 0.0;
        let mut prev = spline.point_at_curve(0.0);
        spline.cumulative.push(0.0);
        for i in 1..=ARC_LENGTH_DIVISIONS {
            let sample = spline.point_at_curve(i as f32 / ARC_LENGTH_DIVISIONS as f32);
            total += sample.distance(prev);
            spline.cumulative.push(total);
            prev = sample;
        }

        spline
    }

    /// Total arc length of the spline.
    pub fn length(&self) -> f32 {
        *self.cumulative.last().unwrap_or(&0.0)
    }

    /// Position at arc-length parameter `u` in [0, 1].
    pub fn point_at(&self, u: f32) -> Vec3 {
        self.point_at_curve(self.curve_param_for_arc(u))
    }

    /// Unit tangent at arc-length parameter `u` in [0, 1].
    pub fn tangent_at(&self, u: f32) -> Vec3 {
        self.tangent_at_curve(self.curve_param_for_arc(u))
    }

    /// Position in raw curve-space parameterisation (uniform per segment).
    fn point_at_curve(&self, t: f32) -> Vec3 {
        let (i, local) = self.segment_for(t);
        let (p0, p1, p2, p3) = self.control_points(i);
        catmull_rom(p0, p1, p2, p3, local)
    }

    fn tangent_at_curve(&self, t: f32) -> Vec3 {
        let (i, local) = self.segment_for(t);
        let (p0, p1, p2, p3) = self.control_points(i);
        let derivative = catmull_rom_derivative(p0, p1, p2, p3, local);
        // A coincident-point spine has no defined tangent; fall back to the
        // overall chord direction rather than produce NaN.
        derivative.normalize_or(
            (self.points[self.points.len() - 1] - self.points[0]).normalize_or(Vec3::Z),
        )
    }

    fn segment_for(&self, t: f32) -> (usize, f32) {
        let n = self.points.len() - 1;
        let p = t.clamp(0.0, 1.0) * n as f32;
        let i = (p.floor() as usize).min(n - 1);
        (i, p - i as f32)
    }

    /// Control points for segment `i`, with clamped duplicates at both ends
    /// so the spline passes through the first and last input points.
    fn control_points(&self, i: usize) -> (Vec3, Vec3, Vec3, Vec3) {
        let n = self.points.len() - 1;
        let p0 = self.points[i.saturating_sub(1)];
        let p1 = self.points[i];
        let p2 = self.points[i + 1];
        let p3 = self.points[(i + 2).min(n)];
        (p0, p1, p2, p3)
    }

    /// Map an arc-length fraction `u` onto the curve-space parameter via the
    /// precomputed cumulative table.
    fn curve_param_for_arc(&self, u: f32) -> f32 {
        let target = u.clamp(0.0, 1.0) * self.length();
        let idx = self
            .cumulative
            .partition_point(|&len| len < target)
            .clamp(1, ARC_LENGTH_DIVISIONS);
        let before = self.cumulative[idx - 1];
        let after = self.cumulative[idx];
        let span = after - before;
        let frac = if span > f32::EPSILON {
            (target - before) / span
        } else {
            0.0
        };
        ((idx - 1) as f32 + frac) / ARC_LENGTH_DIVISIONS as f32
    }
}

/// Uniform Catmull-Rom basis (tension 0.5).
fn catmull_rom(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let t2 = t * t;
    let t3 = t2 * t;
    (p1 * 2.0
        + (p2 - p0) * t
        + (p0 * 2.0 - p1 * 5.0 + p2 * 4.0 - p3) * t2
        + (p1 * 3.0 - p0 - p2 * 3.0 + p3) * t3)
        * 0.5
}

fn catmull_rom_derivative(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let t2 = t * t;
    ((p2 - p0) + (p0 * 2.0 - p1 * 5.0 + p2 * 4.0 - p3) * (2.0 * t)
        + (p1 * 3.0 - p0 - p2 * 3.0 + p3) * (3.0 * t2))
        * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_vec3_close(a: Vec3, b: Vec3, epsilon: f32) {
        assert_abs_diff_eq!(a.x, b.x, epsilon = epsilon);
        assert_abs_diff_eq!(a.y, b.y, epsilon = epsilon);
        assert_abs_diff_eq!(a.z, b.z, epsilon = epsilon);
    }

    #[test]
    fn bezier_hits_endpoints_and_weighted_midpoint() {
        let p0 = Vec3::new(-3.0, 0.0, 0.0);
        let p1 = Vec3::new(-1.0, 0.0, 1.0);
        let p2 = Vec3::new(0.0, 0.0, 3.0);

        assert_eq!(quadratic_bezier(p0, p1, p2, 0.0), p0);
        assert_eq!(quadratic_bezier(p0, p1, p2, 1.0), p2);

        let mid = p0 * 0.25 + p1 * 0.5 + p2 * 0.25;
        assert_vec3_close(quadratic_bezier(p0, p1, p2, 0.5), mid, 1e-6);
    }

    #[test]
    fn bezier_sampling_returns_inclusive_point_count() {
        let p0 = Vec3::ZERO;
        let p1 = Vec3::new(1.0, 2.0, 0.0);
        let p2 = Vec3::new(2.0, 0.0, 0.0);

        let samples = sample_quadratic_bezier(p0, p1, p2, 100);
        assert_eq!(samples.len(), 101);
        assert_vec3_close(samples[0], p0, 1e-6);
        assert_vec3_close(samples[100], p2, 1e-6);
    }

    #[test]
    fn spline_passes_through_control_points() {
        let points = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(2.0, 0.0, 1.0),
            Vec3::new(3.0, -1.0, 0.0),
        ];
        let spline = CatmullRomSpline::new(&points);

        let n = (points.len() - 1) as f32;
        for (i, expected) in points.iter().enumerate() {
            let sampled = spline.point_at_curve(i as f32 / n);
            assert_vec3_close(sampled, *expected, 1e-5);
        }
    }

    #[test]
    fn straight_spline_length_matches_chord() {
        let points: Vec<Vec3> = (0..=10).map(|i| Vec3::new(0.0, 0.0, -(i as f32))).collect();
        let spline = CatmullRomSpline::new(&points);
        assert_abs_diff_eq!(spline.length(), 10.0, epsilon = 1e-3);
    }

    #[test]
    fn straight_spline_tangent_points_along_chain() {
        let points: Vec<Vec3> = (0..=10).map(|i| Vec3::new(0.0, 0.0, -(i as f32))).collect();
        let spline = CatmullRomSpline::new(&points);
        for u in [0.0, 0.25, 0.5, 0.75, 1.0] {
            assert_vec3_close(spline.tangent_at(u), Vec3::NEG_Z, 1e-4);
        }
    }

    #[test]
    fn arc_length_sampling_spreads_points_evenly() {
        // Control points bunched at one end; arc-length sampling must still
        // distribute evenly in space.
        let points = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.1, 0.0, 0.0),
            Vec3::new(0.2, 0.0, 0.0),
            Vec3::new(10.0, 0.0, 0.0),
        ];
        let spline = CatmullRomSpline::new(&points);
        let half = spline.point_at(0.5);
        assert!((half.x - 5.0).abs() < 1.0, "midpoint was {half:?}");
    }

    #[test]
    #[should_panic(expected = "at least two control points")]
    fn spline_rejects_single_point() {
        CatmullRomSpline::new(&[Vec3::ZERO]);
    }
}
