//! Per-frame orbital integrator.
//!
//! Orbits are circular and purely kinematic: each body's phase advances at a
//! constant rate set by its orbital period, and its world position follows
//! from its parent's position, its orbital plane and its distance. Parents are
//! stored before their children in the registry, so a single forward pass
//! updates every body against an already-updated parent.

use std::f64::consts::TAU;

use bevy::math::{DQuat, DVec3};
use bevy::prelude::*;

use crate::bodies::BodyRegistry;
use crate::types::{DEG_TO_RAD, ROTATION_SCALE, SimulationClock};

#[cfg(test)]
mod proptest_orbit;

/// Phase change over `dt` days for a body with the given period.
///
/// Negative periods give negative steps; infinite periods give none.
pub fn angular_step(dt: f64, period_days: f64) -> f64 {
    dt / period_days * TAU
}

/// Self-rotation change over `dt` days.
pub fn rotation_step(dt: f64, rotation_period_days: f64) -> f64 {
    angular_step(dt, rotation_period_days) * ROTATION_SCALE
}

/// Rotation of a body's orbital plane given its parent's plane.
pub fn orbit_plane(parent_plane: DQuat, inclination_degrees: f64) -> DQuat {
    parent_plane * DQuat::from_rotation_x(inclination_degrees * DEG_TO_RAD)
}

/// Offset of a body from its parent.
pub fn orbital_offset(distance: f64, angle: f64, y_offset: f64, plane: DQuat) -> DVec3 {
    plane * DVec3::new(distance * angle.cos(), y_offset, distance * angle.sin())
}

/// Advance every body by `dt` days and recompute world positions.
pub fn advance(registry: &mut BodyRegistry, dt: f64) {
    for body in registry.bodies_mut() {
        if !body.is_stopped {
            body.angle += angular_step(dt, body.orbital_period_days);
        }
        body.rotation += rotation_step(dt, body.rotation_period_days);
    }
    update_positions(registry);
}

/// Recompute planes and world positions from current angles.
pub fn update_positions(registry: &mut BodyRegistry) {
    let bodies = registry.bodies_mut();
    for i in 0..bodies.len() {
        let (parent_position, parent_plane) = match bodies[i].parent {
            Some(parent) => {
                let parent = &bodies[parent.index()];
                (parent.position, parent.plane)
            }
            None => (DVec3::ZERO, DQuat::IDENTITY),
        };
        let body = &mut bodies[i];
        body.plane = match body.parent {
            Some(_) => orbit_plane(parent_plane, body.inclination_degrees),
            None => DQuat::IDENTITY,
        };
        body.position = parent_position
            + orbital_offset(body.distance, body.angle, body.y_offset, body.plane);
    }
}

/// Rigid rotation of the asteroid belt group.
#[derive(Resource, Clone, Debug)]
pub struct BeltRotation {
    pub angle: f64,
    /// Radians per day of scaled time.
    pub rate: f64,
}

impl Default for BeltRotation {
    fn default() -> Self {
        Self {
            angle: 0.0,
            rate: 0.05,
        }
    }
}

impl BeltRotation {
    pub fn advance(&mut self, dt: f64) {
        self.angle += self.rate * dt;
    }
}

/// Advance the registry with the clock's step for this frame.
pub fn advance_bodies(mut registry: ResMut<BodyRegistry>, clock: Res<SimulationClock>) {
    advance(&mut registry, clock.last_dt);
}

pub fn advance_belt(mut belt: ResMut<BeltRotation>, clock: Res<SimulationClock>) {
    belt.advance(clock.last_dt);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::{BodyDescriptor, BodyId};
    use approx::assert_relative_eq;

    fn registry_with(descriptors: &[(BodyDescriptor, Option<usize>)]) -> (BodyRegistry, Vec<BodyId>) {
        let mut registry = BodyRegistry::default();
        let mut ids: Vec<BodyId> = Vec::new();
        for (descriptor, parent) in descriptors {
            let parent = parent.map(|i| ids[i]);
            ids.push(registry.insert(descriptor, parent, 0.0).unwrap());
        }
        update_positions(&mut registry);
        (registry, ids)
    }

    fn sun() -> BodyDescriptor {
        BodyDescriptor {
            name: "Sun",
            orbital_period_days: f64::INFINITY,
            rotation_period_days: f64::INFINITY,
            ..BodyDescriptor::TEMPLATE
        }
    }

    #[test]
    fn test_mars_completes_one_orbit() {
        let mars = BodyDescriptor {
            name: "Mars",
            distance: 3500.0,
            orbital_period_days: 687.0,
            ..BodyDescriptor::TEMPLATE
        };
        let (mut registry, ids) = registry_with(&[(sun(), None), (mars, Some(0))]);
        let start = registry.get(ids[1]).unwrap().position;

        advance(&mut registry, 687.0);

        let mars = registry.get(ids[1]).unwrap();
        assert_relative_eq!(mars.angle, TAU, epsilon = 1e-9);
        assert_relative_eq!(mars.position.x, start.x, epsilon = 1e-6);
        assert_relative_eq!(mars.position.z, start.z, epsilon = 1e-6);
    }

    #[test]
    fn test_stopped_body_still_spins() {
        let planet = BodyDescriptor {
            name: "Venus",
            distance: 100.0,
            orbital_period_days: 224.7,
            rotation_period_days: 10.0,
            ..BodyDescriptor::TEMPLATE
        };
        let (mut registry, ids) = registry_with(&[(planet, None)]);
        registry.get_mut(ids[0]).unwrap().is_stopped = true;

        advance(&mut registry, 5.0);

        let venus = registry.get(ids[0]).unwrap();
        assert_eq!(venus.angle, 0.0);
        assert_relative_eq!(venus.rotation, 0.5 * TAU * ROTATION_SCALE);
    }

    #[test]
    fn test_retrograde_rotation_is_negative() {
        let planet = BodyDescriptor {
            name: "Venus",
            rotation_period_days: -243.0,
            ..BodyDescriptor::TEMPLATE
        };
        let (mut registry, ids) = registry_with(&[(planet, None)]);
        advance(&mut registry, 1.0);
        assert!(registry.get(ids[0]).unwrap().rotation < 0.0);
    }

    #[test]
    fn test_moon_follows_parent_in_same_frame() {
        let earth = BodyDescriptor {
            name: "Earth",
            distance: 1000.0,
            orbital_period_days: 365.25,
            ..BodyDescriptor::TEMPLATE
        };
        let moon = BodyDescriptor {
            name: "Moon",
            distance: 10.0,
            orbital_period_days: 27.3,
            ..BodyDescriptor::TEMPLATE
        };
        let (mut registry, ids) =
            registry_with(&[(sun(), None), (earth, Some(0)), (moon, Some(1))]);

        advance(&mut registry, 12.0);

        let earth = registry.get(ids[1]).unwrap();
        let moon = registry.get(ids[2]).unwrap();
        assert_relative_eq!(moon.position.distance(earth.position), 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_inclination_tilts_orbit_out_of_plane() {
        let tilted = BodyDescriptor {
            name: "Mercury",
            distance: 100.0,
            inclination_degrees: 90.0,
            ..BodyDescriptor::TEMPLATE
        };
        let (mut registry, ids) = registry_with(&[(sun(), None), (tilted, Some(0))]);
        registry.get_mut(ids[1]).unwrap().angle = TAU / 4.0;
        update_positions(&mut registry);

        // A quarter turn in a plane rotated 90° about X lands on the Y axis.
        let p = registry.get(ids[1]).unwrap().position;
        assert_relative_eq!(p.y.abs(), 100.0, epsilon = 1e-9);
        assert_relative_eq!(p.z, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_sun_never_moves() {
        let (mut registry, ids) = registry_with(&[(sun(), None)]);
        advance(&mut registry, 1000.0);
        let sun = registry.get(ids[0]).unwrap();
        assert_eq!(sun.position, DVec3::ZERO);
        assert_eq!(sun.rotation, 0.0);
    }

    #[test]
    fn test_belt_rotates_with_scaled_time() {
        let mut belt = BeltRotation::default();
        belt.advance(10.0);
        assert_relative_eq!(belt.angle, 0.5);
    }
}
