//! Common test utilities for integration tests.

#![allow(dead_code)]

use bevy::math::DVec3;
use orrery::bodies::{BodyDescriptor, BodyId, BodyKind, BodyRegistry, SOLAR_SYSTEM};
use orrery::camera::{CameraDirector, OrbitControls};
use orrery::ui::port::RecordingPort;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// The full solar system with deterministic moon phases.
pub fn solar_system() -> BodyRegistry {
    let mut rng = StdRng::seed_from_u64(7);
    BodyRegistry::from_descriptor(&SOLAR_SYSTEM, &mut rng).expect("solar system table is valid")
}

/// A sun with one planet, and that planet's moon.
pub fn sun_planet_moon(
    planet: BodyDescriptor,
    moon: BodyDescriptor,
) -> (BodyRegistry, BodyId, BodyId) {
    let mut registry = BodyRegistry::default();
    let sun = registry
        .insert(
            &BodyDescriptor {
                name: "Sun",
                kind: BodyKind::Star,
                radius: 20.0,
                orbital_period_days: f64::INFINITY,
                rotation_period_days: f64::INFINITY,
                ..BodyDescriptor::TEMPLATE
            },
            None,
            0.0,
        )
        .expect("sun inserts");
    let planet = registry
        .insert(&planet, Some(sun), 0.0)
        .expect("planet inserts");
    let moon = registry
        .insert(
            &BodyDescriptor {
                kind: BodyKind::Moon,
                ..moon
            },
            Some(planet),
            0.0,
        )
        .expect("moon inserts");
    orrery::orbit::update_positions(&mut registry);
    (registry, planet, moon)
}

/// Director, controls and a recording UI port for driving flights by hand.
pub struct Cockpit {
    pub director: CameraDirector,
    pub controls: OrbitControls,
    pub ui: RecordingPort,
    pub camera: DVec3,
}

impl Default for Cockpit {
    fn default() -> Self {
        Self {
            director: CameraDirector::default(),
            controls: OrbitControls::default(),
            ui: RecordingPort::default(),
            camera: orrery::types::DEFAULT_CAMERA_POSITION,
        }
    }
}
