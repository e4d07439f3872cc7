//! Pairwise per-axis impulse step
//!
//! Every unordered pair of bodies exchanges a fixed-magnitude impulse along
//! each axis where their positions differ: the body with the greater
//! coordinate is pushed further up, the other further down. Axes are
//! evaluated independently rather than as a radial force - three comparisons
//! and at most six adds per pair, no square roots, no division.

use super::Body;

/// Apply the impulse exchange to one unordered pair.
///
/// Per axis the impulses are equal and opposite, so the pair's summed
/// velocity delta is always zero. Axes where the coordinates are equal get
/// no impulse at all.
pub fn pair_impulse(a: &mut Body, b: &mut Body, impulse: f32) {
    for k in 0..3 {
        if a.step_end[k] > b.step_end[k] {
            a.velocity[k] += impulse;
            b.velocity[k] -= impulse;
        } else if a.step_end[k] < b.step_end[k] {
            a.velocity[k] -= impulse;
            b.velocity[k] += impulse;
        }
    }
}

/// One full force pass: every unordered pair, exactly once.
///
/// Callers must have called [`Body::begin_step`] on every body first, and
/// must not integrate any body until the whole pass is done - impulses are
/// computed from `step_end` positions left over from the prior tick.
pub fn pairwise_step(bodies: &mut [Body], impulse: f32) {
    for i in 0..bodies.len() {
        let (head, tail) = bodies.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            pair_impulse(a, b, impulse);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use proptest::prelude::*;

    fn body_at(x: f32, y: f32, z: f32) -> Body {
        Body::new(Vec3::new(x, y, z), 1.0, [1.0; 4])
    }

    #[test]
    fn impulse_pushes_pair_apart() {
        let mut a = body_at(0.0, 0.0, 0.0);
        let mut b = body_at(10.0, 0.0, 0.0);
        pair_impulse(&mut a, &mut b, 1.0);

        assert_eq!(a.velocity, Vec3::new(-1.0, 0.0, 0.0));
        assert_eq!(b.velocity, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn equal_axis_gets_no_impulse() {
        let mut a = body_at(3.0, 7.0, -2.0);
        let mut b = body_at(5.0, 7.0, -2.0);
        pair_impulse(&mut a, &mut b, 4.0);

        assert_eq!(a.velocity.y, 0.0);
        assert_eq!(a.velocity.z, 0.0);
        assert_eq!(b.velocity.y, 0.0);
        assert_eq!(b.velocity.z, 0.0);
    }

    #[test]
    fn full_pass_visits_every_pair_once() {
        // Three collinear bodies on x: the middle one is pushed down by the
        // upper and up by the lower, cancelling exactly.
        let mut bodies = vec![
            body_at(0.0, 0.0, 0.0),
            body_at(10.0, 0.0, 0.0),
            body_at(20.0, 0.0, 0.0),
        ];
        pairwise_step(&mut bodies, 1.0);

        assert_eq!(bodies[0].velocity.x, -2.0);
        assert_eq!(bodies[1].velocity.x, 0.0);
        assert_eq!(bodies[2].velocity.x, 2.0);
    }

    proptest! {
        #[test]
        fn impulses_equal_and_opposite(
            ax in -50i32..50, ay in -50i32..50, az in -50i32..50,
            bx in -50i32..50, by in -50i32..50, bz in -50i32..50,
        ) {
            let mut a = body_at(ax as f32, ay as f32, az as f32);
            let mut b = body_at(bx as f32, by as f32, bz as f32);
            pair_impulse(&mut a, &mut b, 5.0);

            for k in 0..3 {
                prop_assert_eq!(a.velocity[k] + b.velocity[k], 0.0);
            }
        }
    }
}
