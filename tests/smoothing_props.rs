//! Property tests for the smoothing and view-control math.

use proptest::prelude::*;

use astrodeck::search::display_distance;
use astrodeck::types::{
    approach, wrap_degrees, Orientation, ViewControl, MAX_ZOOM, MIN_ZOOM,
};
use bevy::math::Vec2;

use astrodeck::catalog::Catalog;

proptest! {
    /// Each smoothing step shrinks the error toward the target.
    #[test]
    fn approach_never_overshoots(
        current in -1e4f32..1e4,
        target in -1e4f32..1e4,
        k in 0.01f32..0.99,
    ) {
        let next = approach(current, target, k);
        let before = (target - current).abs();
        let after = (target - next).abs();
        prop_assert!(after <= before + 1e-3);
        // And the step never crosses to the far side of the target.
        prop_assert!((target - next).signum() == (target - current).signum() || after < 1e-3);
    }

    /// Repeated smoothing converges for any valid blend factor.
    #[test]
    fn approach_converges(
        start in -1e4f32..1e4,
        target in -1e4f32..1e4,
        k in 0.05f32..0.95,
    ) {
        let mut current = start;
        for _ in 0..2000 {
            current = approach(current, target, k);
        }
        prop_assert!((target - current).abs() < 1.0);
    }

    /// Wrapped angles always land in the canonical range.
    #[test]
    fn wrap_degrees_stays_in_range(angle in -7200.0f32..7200.0) {
        let wrapped = wrap_degrees(angle);
        prop_assert!((-180.0..=180.0).contains(&wrapped));
    }

    /// Zoom stays clamped regardless of the sequence of adjustments.
    #[test]
    fn zoom_always_in_bounds(steps in proptest::collection::vec(-5.0f32..5.0, 0..64)) {
        let mut control = ViewControl::default();
        control.reset();
        for step in steps {
            control.zoom_by(step);
            prop_assert!((MIN_ZOOM..=MAX_ZOOM).contains(&control.zoom()));
        }
    }

    /// Dragging never pushes the tilt out of its valid band.
    #[test]
    fn drag_keeps_inclination_in_band(
        deltas in proptest::collection::vec((-500.0f32..500.0, -500.0f32..500.0), 0..64),
    ) {
        let mut orientation = Orientation::default();
        for (dx, dy) in deltas {
            orientation.apply_drag(Vec2::new(dx, dy));
            prop_assert!((0.0..=90.0).contains(&orientation.inclination));
            prop_assert!((-180.0..=180.0).contains(&orientation.rotation));
        }
    }

    /// The distance readout is symmetric over arbitrary catalog pairs.
    #[test]
    fn display_distance_is_symmetric(a in 0usize..44, b in 0usize..44) {
        let catalog = Catalog::default();
        let bodies: Vec<_> = catalog.all().collect();
        let a = bodies[a % bodies.len()];
        let b = bodies[b % bodies.len()];
        prop_assert_eq!(display_distance(a, b), display_distance(b, a));
    }
}
