use bevy::prelude::*;

/// Cubic ease-out: fast start, decelerating into the endpoint.
pub fn ease_out_cubic(progress: f32) -> f32 {
    1.0 - (1.0 - progress.clamp(0.0, 1.0)).powi(3)
}

/// Eased linear interpolation between two points over a fixed duration.
/// Generic over what is being moved; the camera uses it for its focus
/// zoom-out and the matching return flight.
pub struct Tween {
    pub start: Vec3,
    pub end: Vec3,
    pub duration: f32,
}

impl Tween {
    /// Sample the tween at `elapsed` seconds. Returns the interpolated
    /// point and whether the tween has finished. At or past the duration
    /// the endpoint is returned exactly.
    pub fn sample(&self, elapsed: f32) -> (Vec3, bool) {
        let progress = (elapsed / self.duration).min(1.0);
        if progress >= 1.0 {
            return (self.end, true);
        }
        let t = ease_out_cubic(progress);
        (self.start.lerp(self.end, t), false)
    }
}

/// The camera's active tween, if any. Orbit input is suspended while a
/// flight is in progress.
#[derive(Resource, Default)]
pub struct FocusTween {
    flight: Option<(Tween, f32)>,
}

impl FocusTween {
    /// Begin a flight; replaces any tween already in progress.
    pub fn begin(&mut self, start: Vec3, end: Vec3, duration: f32, now: f32) {
        self.flight = Some((
            Tween {
                start,
                end,
                duration,
            },
            now,
        ));
    }

    pub fn is_active(&self) -> bool {
        self.flight.is_some()
    }

    /// Advance the flight, returning the current camera position. `None`
    /// once the flight has landed (including the frame it lands on, after
    /// snapping to the endpoint).
    pub fn advance(&mut self, now: f32) -> Option<Vec3> {
        let (tween, start_time) = self.flight.as_ref()?;
        let (position, finished) = tween.sample(now - start_time);
        if finished {
            self.flight = None;
        }
        Some(position)
    }
}

/// Apply an in-flight focus tween to the camera transform.
pub fn focus_tween_system(
    time: Res<Time>,
    mut tween: ResMut<FocusTween>,
    mut cameras: Query<&mut Transform, With<Camera3d>>,
) {
    if !tween.is_active() {
        return;
    }
    let Ok(mut camera_transform) = cameras.single_mut() else {
        return;
    };
    if let Some(position) = tween.advance(time.elapsed_secs()) {
        camera_transform.translation = position;
        camera_transform.look_at(Vec3::ZERO, Vec3::Y);
    }
}
