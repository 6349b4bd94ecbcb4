use bevy::prelude::*;

/// An animated point chain: the canonical `rest` spine, the displayed
/// `current` spine, and the per-link rest lengths captured at construction.
///
/// Ownership discipline: `rest` is mutated only by the seek step, `current`
/// is recomputed every frame as rest plus wave offsets. Attachments read
/// `current` and never write back.
pub struct Chain {
    pub(super) rest: Vec<Vec3>,
    pub(super) current: Vec<Vec3>,
    pub(super) rest_lengths: Vec<f32>,
    pub(super) target: Option<Vec3>,
    pub move_speed: f32,
    pub stop_epsilon: f32,
}

impl Chain {
    pub fn new(points: Vec<Vec3>, move_speed: f32, stop_epsilon: f32) -> Self {
        let rest_lengths = points
            .windows(2)
            .map(|pair| pair[0].distance(pair[1]))
            .collect();
        Self {
            current: points.clone(),
            rest: points,
            rest_lengths,
            target: None,
            move_speed,
            stop_epsilon,
        }
    }

    pub fn segment_count(&self) -> usize {
        self.rest.len() - 1
    }

    pub fn rest(&self) -> &[Vec3] {
        &self.rest
    }

    pub fn current(&self) -> &[Vec3] {
        &self.current
    }

    /// Mutable spine pair for the wave step: `current` is rewritten from
    /// `rest` in full, never accumulated.
    pub fn spines_mut(&mut self) -> (&[Vec3], &mut [Vec3]) {
        (&self.rest, &mut self.current)
    }

    pub fn rest_length(&self, link: usize) -> f32 {
        self.rest_lengths[link]
    }

    /// Set a new seek target. Last write wins; any in-flight target is
    /// simply overwritten.
    pub fn set_target(&mut self, target: Vec3) {
        self.target = Some(target);
    }

    pub fn target(&self) -> Option<Vec3> {
        self.target
    }

    pub fn is_seeking(&self) -> bool {
        self.target.is_some()
    }
}
