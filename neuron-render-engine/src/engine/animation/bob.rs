use bevy::prelude::*;

use constants::animation::{BOB_SCALE_DELTA, BOB_Y_DELTA, BOB_Z_DELTA};

/// One-shot hover pulse: scale and position swell along a half sine and
/// settle back. Self-terminating; cannot be retriggered while active.
#[derive(Component)]
pub struct BobState {
    active: bool,
    start_time: f32,
    duration: f32,
    rest_y: f32,
    rest_z: f32,
}

impl BobState {
    pub fn new(duration: f32, rest_y: f32, rest_z: f32) -> Self {
        Self {
            active: false,
            start_time: 0.0,
            duration,
            rest_y,
            rest_z,
        }
    }

    /// Start the pulse. A no-op while one is already running.
    pub fn trigger(&mut self, now: f32) {
        if !self.active {
            self.active = true;
            self.start_time = now;
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Advance the pulse and write scale and position for `now`.
    ///
    /// On completion the transform is forced back to the exact rest pose so
    /// floating-point drift cannot leave a residual offset.
    pub fn update(&mut self, now: f32, transform: &mut Transform) {
        if !self.active {
            return;
        }

        let progress = ((now - self.start_time) / self.duration).min(1.0);
        let wave = (progress * std::f32::consts::PI).sin();

        transform.scale = Vec3::splat(1.0 + BOB_SCALE_DELTA * wave);
        transform.translation.y = self.rest_y + BOB_Y_DELTA * wave;
        transform.translation.z = self.rest_z + BOB_Z_DELTA * wave;

        if progress >= 1.0 {
            self.active = false;
            transform.scale = Vec3::ONE;
            transform.translation.y = self.rest_y;
            transform.translation.z = self.rest_z;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transform_at(y: f32, z: f32) -> Transform {
        Transform::from_translation(Vec3::new(50.0, y, z))
    }

    #[test]
    fn pulse_swells_mid_flight() {
        let mut bob = BobState::new(1.0, 5.0, -10.0);
        let mut transform = transform_at(5.0, -10.0);
        bob.trigger(10.0);
        bob.update(10.5, &mut transform);

        assert!(transform.scale.x > 1.0);
        assert!(transform.translation.y > 5.0);
        assert!(bob.is_active());
    }

    #[test]
    fn completion_restores_exact_rest_pose() {
        let mut bob = BobState::new(1.0, 5.0, -10.0);
        let mut transform = transform_at(5.0, -10.0);
        bob.trigger(0.0);
        // Uneven steps so intermediate floating error would show up if the
        // final pose were not forced.
        for step in [0.13, 0.41, 0.77, 0.9999, 1.3] {
            bob.update(step, &mut transform);
        }

        assert!(!bob.is_active());
        assert_eq!(transform.scale, Vec3::ONE);
        assert_eq!(transform.translation.y, 5.0);
        assert_eq!(transform.translation.z, -10.0);
    }

    #[test]
    fn trigger_is_ignored_while_active() {
        let mut bob = BobState::new(1.0, 0.0, 0.0);
        let mut transform = transform_at(0.0, 0.0);
        bob.trigger(0.0);
        bob.trigger(0.9);
        bob.update(1.05, &mut transform);
        // The second trigger must not have restarted the clock.
        assert!(!bob.is_active());
    }

    #[test]
    fn pulse_restarts_when_triggered_after_completion() {
        let mut bob = BobState::new(1.0, 5.0, -10.0);
        let mut transform = transform_at(5.0, -10.0);

        bob.trigger(0.0);
        bob.update(1.2, &mut transform);
        assert!(!bob.is_active());

        // A held hover keeps triggering every frame; the next trigger after
        // completion starts a fresh pulse.
        bob.trigger(1.2);
        assert!(bob.is_active());
        bob.update(1.7, &mut transform);
        assert!(transform.scale.x > 1.0);
        assert!(transform.translation.y > 5.0);
    }

    #[test]
    fn idle_update_leaves_transform_untouched() {
        let mut bob = BobState::new(1.0, 2.0, 3.0);
        let mut transform = transform_at(2.0, 3.0);
        bob.update(42.0, &mut transform);
        assert_eq!(transform.translation, Vec3::new(50.0, 2.0, 3.0));
        assert_eq!(transform.scale, Vec3::ONE);
    }
}
