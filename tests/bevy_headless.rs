//! Headless Bevy integration tests.
//!
//! These tests verify resources and systems work correctly without a GPU.

mod common;

use std::time::Duration;

use approx::assert_relative_eq;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use orrery::bodies::BodyRegistry;
use orrery::orbit::{BeltRotation, advance_belt, advance_bodies, angular_step};
use orrery::render::{GuideSettings, LabelSettings};
use orrery::time::{ClockSystemSet, TimePlugin as ClockPlugin};
use orrery::types::SimulationClock;

fn create_minimal_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app
}

fn clock_with_step(dt: f64) -> SimulationClock {
    SimulationClock {
        last_dt: dt,
        ..default()
    }
}

#[test]
fn test_advance_bodies_system_moves_planets() {
    let mut app = create_minimal_app();
    let registry = common::solar_system();
    let mars = registry.id_of("Mars").unwrap();
    let start = registry.get(mars).unwrap().angle;
    app.insert_resource(registry);
    app.insert_resource(clock_with_step(10.0));
    app.add_systems(Update, advance_bodies);

    app.update();

    let registry = app.world().resource::<BodyRegistry>();
    let angle = registry.get(mars).unwrap().angle;
    assert_relative_eq!(angle, start + angular_step(10.0, 687.0), epsilon = 1e-12);
}

#[test]
fn test_paused_clock_freezes_orbits() {
    let mut app = create_minimal_app();
    let registry = common::solar_system();
    let before: Vec<f64> = registry.iter().map(|b| b.angle).collect();
    app.insert_resource(registry);
    app.insert_resource(clock_with_step(0.0));
    app.add_systems(Update, advance_bodies);

    for _ in 0..5 {
        app.update();
    }

    let registry = app.world().resource::<BodyRegistry>();
    let after: Vec<f64> = registry.iter().map(|b| b.angle).collect();
    assert_eq!(before, after);
}

#[test]
fn test_belt_rotates_with_the_clock() {
    let mut app = create_minimal_app();
    app.insert_resource(BeltRotation {
        angle: 0.0,
        rate: 0.05,
    });
    app.insert_resource(clock_with_step(2.0));
    app.add_systems(Update, advance_belt);

    app.update();
    app.update();

    assert_relative_eq!(app.world().resource::<BeltRotation>().angle, 0.2);
}

#[test]
fn test_clock_ticks_scaled_time() {
    let mut clock = SimulationClock::default();
    clock.faster();
    assert_relative_eq!(clock.tick(0.5), 1.0);
    clock.paused = true;
    assert_eq!(clock.tick(0.5), 0.0);
    assert_relative_eq!(clock.elapsed, 1.0);
}

#[test]
fn test_orbits_use_the_same_frame_clock_step() {
    let mut app = create_minimal_app();
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)));
    app.init_resource::<ButtonInput<KeyCode>>();
    app.init_resource::<GuideSettings>();
    app.init_resource::<LabelSettings>();
    app.add_plugins(ClockPlugin);
    let registry = common::solar_system();
    let mars = registry.id_of("Mars").unwrap();
    let start = registry.get(mars).unwrap().angle;
    app.insert_resource(registry);
    app.add_systems(Update, advance_bodies.after(ClockSystemSet));

    for _ in 0..4 {
        app.update();
    }

    let elapsed = app.world().resource::<SimulationClock>().elapsed;
    assert!(elapsed > 0.0);
    let angle = app.world().resource::<BodyRegistry>().get(mars).unwrap().angle;
    assert_relative_eq!(angle, start + angular_step(elapsed, 687.0), epsilon = 1e-9);
}
