use bevy::prelude::*;

use super::chain::Chain;

/// One seek step: advance the chain head toward its target and propagate
/// the rest-length constraint down the links.
///
/// The head moves a fixed `move_speed` along the normalised direction; each
/// following point is re-anchored at its captured rest length from the
/// already-updated predecessor, along the direction from the predecessor to
/// the point's previous position. A single forward pass per frame, not a
/// converging solver; drift across frames is an accepted visual
/// approximation.
///
/// Returns true while the chain is still seeking. Once the head comes
/// within `stop_epsilon` of the target the target is cleared and the chain
/// goes idle.
pub fn seek_step(chain: &mut Chain) -> bool {
    let Some(target) = chain.target else {
        return false;
    };

    let head = chain.rest[0];
    let to_target = target - head;
    if to_target.length() <= chain.stop_epsilon {
        chain.target = None;
        return false;
    }

    chain.rest[0] += to_target.normalize() * chain.move_speed;

    for i in 1..chain.rest.len() {
        let prev = chain.rest[i - 1];
        // Coincident points fall back to the chain's canonical backwards
        // direction instead of propagating NaN.
        let dir = (chain.rest[i] - prev).normalize_or(Vec3::NEG_Z);
        chain.rest[i] = prev + dir * chain.rest_lengths[i - 1];
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn straight_chain(links: usize, link_length: f32) -> Chain {
        let points = (0..=links)
            .map(|i| Vec3::new(0.0, 0.0, -(i as f32) * link_length))
            .collect();
        Chain::new(points, 0.1, 0.5)
    }

    #[test]
    fn idle_chain_does_nothing() {
        let mut chain = straight_chain(10, 0.2);
        let before = chain.rest().to_vec();
        assert!(!seek_step(&mut chain));
        assert_eq!(chain.rest(), before.as_slice());
    }

    #[test]
    fn head_converges_monotonically_without_overshooting_epsilon() {
        let mut chain = straight_chain(50, 0.2);
        let target = Vec3::new(2.0, 0.0, 1.0);
        chain.set_target(target);

        let mut last_distance = chain.rest()[0].distance(target);
        let mut steps = 0;
        while seek_step(&mut chain) {
            let distance = chain.rest()[0].distance(target);
            assert!(
                distance < last_distance,
                "distance grew from {last_distance} to {distance}"
            );
            last_distance = distance;
            steps += 1;
            assert!(steps < 1000, "seek failed to terminate");
        }

        // The terminating frame stops inside epsilon without skipping past
        // the target: the step length is smaller than the stop distance.
        assert!(last_distance < chain.stop_epsilon);
        assert!(last_distance > 0.0);
        assert!(!chain.is_seeking());
    }

    #[test]
    fn link_lengths_are_preserved_through_seeking() {
        let mut chain = straight_chain(20, 0.3);
        chain.set_target(Vec3::new(1.5, 0.4, -0.5));

        for _ in 0..40 {
            seek_step(&mut chain);
        }

        for i in 1..chain.rest().len() {
            let length = chain.rest()[i - 1].distance(chain.rest()[i]);
            assert_abs_diff_eq!(length, chain.rest_length(i - 1), epsilon = 1e-4);
        }
    }

    #[test]
    fn new_target_supersedes_old_one_mid_flight() {
        let mut chain = straight_chain(10, 0.2);
        chain.set_target(Vec3::new(5.0, 0.0, 0.0));
        for _ in 0..5 {
            seek_step(&mut chain);
        }
        let second = Vec3::new(0.0, 0.0, 0.4);
        chain.set_target(second);

        let mut steps = 0;
        while seek_step(&mut chain) {
            steps += 1;
            assert!(steps < 1000);
        }
        assert!(chain.rest()[0].distance(second) < chain.stop_epsilon);
    }
}
