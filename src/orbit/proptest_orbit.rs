//! Property-based tests for the orbital integrator.

use std::f64::consts::TAU;

use proptest::prelude::*;

use super::*;
use crate::bodies::BodyDescriptor;

fn single_body(orbital_period_days: f64, rotation_period_days: f64) -> BodyRegistry {
    let mut registry = BodyRegistry::default();
    let descriptor = BodyDescriptor {
        name: "Probe",
        distance: 500.0,
        orbital_period_days,
        rotation_period_days,
        ..BodyDescriptor::TEMPLATE
    };
    registry
        .insert(&descriptor, None, 0.0)
        .expect("valid descriptor");
    registry
}

fn period() -> impl Strategy<Value = f64> {
    prop_oneof![1.0f64..70000.0, -70000.0f64..-1.0]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The phase advances by exactly (dt / period) * 2π per step.
    #[test]
    fn prop_angle_delta_matches_period(
        orbital in period(),
        rotation in period(),
        dt in 0.0f64..100.0,
        start in -100.0f64..100.0,
    ) {
        let mut registry = single_body(orbital, rotation);
        let id = registry.id_of("Probe").unwrap();
        registry.get_mut(id).unwrap().angle = start;

        advance(&mut registry, dt);

        let body = registry.get(id).unwrap();
        let expected = dt / orbital * TAU;
        prop_assert!((body.angle - start - expected).abs() <= 1e-9 * (1.0 + start.abs()));
    }

    /// Stopped bodies hold their phase but keep spinning.
    #[test]
    fn prop_stopped_body_keeps_angle(
        orbital in period(),
        rotation in period(),
        dt in 0.001f64..100.0,
    ) {
        let mut registry = single_body(orbital, rotation);
        let id = registry.id_of("Probe").unwrap();
        registry.get_mut(id).unwrap().is_stopped = true;

        advance(&mut registry, dt);

        let body = registry.get(id).unwrap();
        prop_assert_eq!(body.angle, 0.0);
        prop_assert!(body.rotation != 0.0);
    }

    /// Spin direction follows the sign of the rotation period.
    #[test]
    fn prop_rotation_sign_follows_period(
        rotation in period(),
        dt in 0.001f64..100.0,
    ) {
        let mut registry = single_body(100.0, rotation);
        advance(&mut registry, dt);
        let body = registry.by_name("Probe").unwrap();
        prop_assert_eq!(body.rotation.signum(), rotation.signum());
    }

    /// Distance to the parent is preserved for any phase.
    #[test]
    fn prop_orbit_radius_is_constant(
        distance in 0.0f64..100000.0,
        angle in -50.0f64..50.0,
        inclination in -90.0f64..90.0,
    ) {
        let plane = orbit_plane(DQuat::IDENTITY, inclination);
        let offset = orbital_offset(distance, angle, 0.0, plane);
        prop_assert!((offset.length() - distance).abs() <= 1e-9 * (1.0 + distance));
    }
}
