use bevy::prelude::*;

/// Which world axes receive the sinusoidal offset.
pub enum WaveAxes {
    /// Body ripple: sine on x, cosine on z (same phase argument), y intact.
    BodyXz,
    /// Tentacle flutter: the offset acts along the direction perpendicular
    /// to the terminal's base angle in the XY plane.
    Perpendicular { base_angle: f32 },
}

/// Per-point scaling of the wave along the spine.
pub enum IntensityCurve {
    Uniform,
    /// `t²`: quiet at the root, strongest at the free tip.
    QuadraticTip,
}

pub struct WaveParams {
    pub amplitude: f32,
    /// Spatial frequency in half-turns over the spine (multiplied by π).
    pub frequency: f32,
    pub phase_speed: f32,
    pub axes: WaveAxes,
    pub intensity: IntensityCurve,
}

/// Rewrite `current` from `rest` plus the wave offset at `time`.
///
/// Pure function of (rest, time): applying it twice with the same inputs
/// yields the same output, so transient wave motion never leaks into the
/// canonical spine.
pub fn apply_wave(rest: &[Vec3], current: &mut [Vec3], time: f32, params: &WaveParams) {
    debug_assert_eq!(rest.len(), current.len());
    let n = (rest.len() - 1).max(1) as f32;

    for (i, (rest_point, current_point)) in rest.iter().zip(current.iter_mut()).enumerate() {
        let t = i as f32 / n;
        let phase = t * std::f32::consts::PI * params.frequency + time * params.phase_speed;
        let intensity = match params.intensity {
            IntensityCurve::Uniform => 1.0,
            IntensityCurve::QuadraticTip => t * t,
        };
        let swing = params.amplitude * intensity;

        *current_point = match params.axes {
            WaveAxes::BodyXz => Vec3::new(
                rest_point.x + phase.sin() * swing,
                rest_point.y,
                rest_point.z + phase.cos() * swing,
            ),
            WaveAxes::Perpendicular { base_angle } => {
                let perp = base_angle + std::f32::consts::FRAC_PI_2;
                let wave = phase.sin() * swing;
                Vec3::new(
                    rest_point.x + perp.cos() * wave,
                    rest_point.y + perp.sin() * wave,
                    rest_point.z,
                )
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rest_spine() -> Vec<Vec3> {
        (0..=20).map(|i| Vec3::new(0.0, 0.0, -(i as f32) * 0.2)).collect()
    }

    fn body_params() -> WaveParams {
        WaveParams {
            amplitude: 0.03,
            frequency: 6.0,
            phase_speed: -3.0,
            axes: WaveAxes::BodyXz,
            intensity: IntensityCurve::Uniform,
        }
    }

    #[test]
    fn reapplying_at_same_time_is_idempotent() {
        let rest = rest_spine();
        let mut first = rest.clone();
        let mut second = rest.clone();
        apply_wave(&rest, &mut first, 5.0, &body_params());
        apply_wave(&rest, &mut second, 5.0, &body_params());
        apply_wave(&rest, &mut second, 5.0, &body_params());
        assert_eq!(first, second);
    }

    #[test]
    fn zero_amplitude_leaves_spine_at_rest() {
        let rest = rest_spine();
        let mut current = rest.clone();
        let params = WaveParams {
            amplitude: 0.0,
            ..body_params()
        };
        apply_wave(&rest, &mut current, 2.5, &params);
        assert_eq!(current, rest);
    }

    #[test]
    fn quadratic_tip_keeps_root_anchored() {
        let rest = rest_spine();
        let mut current = rest.clone();
        let params = WaveParams {
            amplitude: 0.6,
            frequency: 1.2,
            phase_speed: 2.0,
            axes: WaveAxes::Perpendicular { base_angle: 0.7 },
            intensity: IntensityCurve::QuadraticTip,
        };
        apply_wave(&rest, &mut current, 3.0, &params);

        assert_eq!(current[0], rest[0]);
        let tip_offset = current[20] - rest[20];
        let mid_offset = current[10] - rest[10];
        assert!(tip_offset.length() >= mid_offset.length());
    }

    #[test]
    fn body_wave_never_touches_y() {
        let rest = rest_spine();
        let mut current = rest.clone();
        apply_wave(&rest, &mut current, 1.7, &body_params());
        for (c, r) in current.iter().zip(&rest) {
            assert_eq!(c.y, r.y);
        }
    }

    #[test]
    fn perpendicular_wave_never_touches_z() {
        let rest = rest_spine();
        let mut current = rest.clone();
        let params = WaveParams {
            amplitude: 0.5,
            frequency: 1.0,
            phase_speed: 2.0,
            axes: WaveAxes::Perpendicular { base_angle: 1.3 },
            intensity: IntensityCurve::QuadraticTip,
        };
        apply_wave(&rest, &mut current, 4.2, &params);
        for (c, r) in current.iter().zip(&rest) {
            assert_eq!(c.z, r.z);
        }
    }
}
