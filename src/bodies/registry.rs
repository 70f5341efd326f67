//! Runtime state of every body in a scene.

use std::collections::HashMap;

use bevy::math::{DQuat, DVec3};
use bevy::prelude::*;
use rand::Rng;
use thiserror::Error;

use super::data::{BodyDescriptor, BodyKind, InitialAngle, RingDescriptor};

/// How far the camera stands back from a body, in body radii.
pub const VIEW_DISTANCE_FACTOR: f64 = 5.0;

/// Index of a body inside its [`BodyRegistry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(usize);

impl BodyId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    #[error("a body named {0:?} is already registered")]
    DuplicateName(String),
    #[error("parent {parent:?} of {name:?} is not registered")]
    UnknownParent { name: String, parent: BodyId },
    #[error("invalid {field} for {name:?}: {value}")]
    InvalidParameter {
        name: String,
        field: &'static str,
        value: f64,
    },
}

/// One body: immutable parameters from its descriptor plus live state.
#[derive(Clone, Debug)]
pub struct Body {
    pub id: BodyId,
    pub name: String,
    pub kind: BodyKind,
    pub radius: f64,
    pub distance: f64,
    pub orbital_period_days: f64,
    pub rotation_period_days: f64,
    pub inclination_degrees: f64,
    /// Height of the body above its orbital plane.
    pub y_offset: f64,
    pub texture: &'static str,
    pub beat: Option<&'static str>,
    pub ring: Option<RingDescriptor>,
    pub color: [f32; 3],

    pub parent: Option<BodyId>,
    pub children: Vec<BodyId>,

    /// Orbital phase in radians. Never wrapped.
    pub angle: f64,
    /// Self-rotation in radians. Never wrapped.
    pub rotation: f64,
    pub is_stopped: bool,
    /// Whether the outline ring around the body is drawn.
    pub guide_visible: bool,

    /// World position, written only by the integrator.
    pub position: DVec3,
    /// Rotation of the plane this body orbits in.
    pub plane: DQuat,
}

impl Body {
    pub fn view_distance(&self) -> f64 {
        self.radius * VIEW_DISTANCE_FACTOR
    }

    /// World rotation of the body's mesh: orbital plane, then spin about Y.
    pub fn orientation(&self) -> DQuat {
        self.plane * DQuat::from_rotation_y(self.rotation)
    }
}

/// Every body of the active scene, parents stored before their children.
#[derive(Resource, Default, Debug)]
pub struct BodyRegistry {
    bodies: Vec<Body>,
    by_name: HashMap<String, BodyId>,
}

impl BodyRegistry {
    /// Build a registry from a descriptor tree rooted at `root`.
    ///
    /// Random initial phases are drawn from `rng`.
    pub fn from_descriptor<R: Rng + ?Sized>(
        root: &BodyDescriptor,
        rng: &mut R,
    ) -> Result<Self, RegistryError> {
        let mut registry = Self::default();
        registry.insert_tree(root, None, rng)?;
        crate::orbit::update_positions(&mut registry);
        Ok(registry)
    }

    fn insert_tree<R: Rng + ?Sized>(
        &mut self,
        descriptor: &BodyDescriptor,
        parent: Option<BodyId>,
        rng: &mut R,
    ) -> Result<BodyId, RegistryError> {
        let angle = match descriptor.initial_angle {
            InitialAngle::Fixed(angle) => angle,
            InitialAngle::Random => rng.gen_range(0.0..std::f64::consts::TAU),
        };
        let id = self.insert(descriptor, parent, angle)?;
        for satellite in descriptor.satellites {
            self.insert_tree(satellite, Some(id), rng)?;
        }
        Ok(id)
    }

    /// Register a single body under `parent` with the given starting phase.
    ///
    /// Satellites listed in the descriptor are not registered.
    pub fn insert(
        &mut self,
        descriptor: &BodyDescriptor,
        parent: Option<BodyId>,
        angle: f64,
    ) -> Result<BodyId, RegistryError> {
        if self.by_name.contains_key(descriptor.name) {
            return Err(RegistryError::DuplicateName(descriptor.name.to_string()));
        }
        if let Some(parent) = parent.filter(|p| p.0 >= self.bodies.len()) {
            return Err(RegistryError::UnknownParent {
                name: descriptor.name.to_string(),
                parent,
            });
        }
        validate(descriptor)?;

        let id = BodyId(self.bodies.len());
        self.bodies.push(Body {
            id,
            name: descriptor.name.to_string(),
            kind: descriptor.kind,
            radius: descriptor.radius,
            distance: descriptor.distance,
            orbital_period_days: descriptor.orbital_period_days,
            rotation_period_days: descriptor.rotation_period_days,
            inclination_degrees: descriptor.inclination_degrees,
            y_offset: 0.0,
            texture: descriptor.texture,
            beat: descriptor.beat,
            ring: descriptor.ring,
            color: descriptor.color,
            parent,
            children: Vec::new(),
            angle,
            rotation: 0.0,
            is_stopped: false,
            guide_visible: true,
            position: DVec3::ZERO,
            plane: DQuat::IDENTITY,
        });
        self.by_name.insert(descriptor.name.to_string(), id);
        if let Some(parent) = parent {
            self.bodies[parent.0].children.push(id);
        }
        Ok(id)
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id.0)
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.get_mut(id.0)
    }

    pub fn id_of(&self, name: &str) -> Option<BodyId> {
        self.by_name.get(name).copied()
    }

    pub fn by_name(&self, name: &str) -> Option<&Body> {
        self.id_of(name).and_then(|id| self.get(id))
    }

    /// Bodies in registration order; every parent precedes its children.
    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }

    pub(crate) fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Position of the first root body, which the camera flies away from.
    pub fn sun_position(&self) -> DVec3 {
        self.bodies
            .iter()
            .find(|b| b.parent.is_none())
            .map(|b| b.position)
            .unwrap_or(DVec3::ZERO)
    }
}

fn validate(descriptor: &BodyDescriptor) -> Result<(), RegistryError> {
    let invalid = |field, value| RegistryError::InvalidParameter {
        name: descriptor.name.to_string(),
        field,
        value,
    };
    if !(descriptor.radius.is_finite() && descriptor.radius > 0.0) {
        return Err(invalid("radius", descriptor.radius));
    }
    if !(descriptor.distance.is_finite() && descriptor.distance >= 0.0) {
        return Err(invalid("distance", descriptor.distance));
    }
    // Infinite periods are fine (no motion), zero or NaN are not.
    if descriptor.orbital_period_days == 0.0 || descriptor.orbital_period_days.is_nan() {
        return Err(invalid("orbital period", descriptor.orbital_period_days));
    }
    if descriptor.rotation_period_days == 0.0 || descriptor.rotation_period_days.is_nan() {
        return Err(invalid("rotation period", descriptor.rotation_period_days));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::data::SOLAR_SYSTEM;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn planet(name: &'static str) -> BodyDescriptor {
        BodyDescriptor {
            name,
            distance: 100.0,
            ..BodyDescriptor::TEMPLATE
        }
    }

    #[test]
    fn test_solar_system_registers_every_body() {
        let mut rng = StdRng::seed_from_u64(7);
        let registry = BodyRegistry::from_descriptor(&SOLAR_SYSTEM, &mut rng).unwrap();
        // Sun, 8 planets, 1 + 2 + 4 + 5 + 4 + 4 moons
        assert_eq!(registry.len(), 29);
        let earth = registry.by_name("Earth").unwrap();
        let moon = registry.by_name("Moon").unwrap();
        assert_eq!(moon.parent, Some(earth.id));
        assert!(earth.children.contains(&moon.id));
    }

    #[test]
    fn test_parents_precede_children() {
        let mut rng = StdRng::seed_from_u64(7);
        let registry = BodyRegistry::from_descriptor(&SOLAR_SYSTEM, &mut rng).unwrap();
        for body in registry.iter() {
            if let Some(parent) = body.parent {
                assert!(parent < body.id);
            }
        }
    }

    #[test]
    fn test_duplicate_name_is_rejected() {
        let mut registry = BodyRegistry::default();
        registry.insert(&planet("Mars"), None, 0.0).unwrap();
        let err = registry.insert(&planet("Mars"), None, 0.0).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateName("Mars".into()));
    }

    #[test]
    fn test_child_before_parent_is_rejected() {
        let mut registry = BodyRegistry::default();
        let err = registry
            .insert(&planet("Phobos"), Some(BodyId(3)), 0.0)
            .unwrap_err();
        assert!(matches!(err, RegistryError::UnknownParent { .. }));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_zero_period_is_rejected() {
        let mut registry = BodyRegistry::default();
        let bad = BodyDescriptor {
            orbital_period_days: 0.0,
            ..planet("Broken")
        };
        assert!(matches!(
            registry.insert(&bad, None, 0.0),
            Err(RegistryError::InvalidParameter { field: "orbital period", .. })
        ));
    }

    #[test]
    fn test_view_distance_is_five_radii() {
        let mut registry = BodyRegistry::default();
        let id = registry
            .insert(&BodyDescriptor { radius: 6.0, ..planet("Earth") }, None, 0.0)
            .unwrap();
        assert_eq!(registry.get(id).unwrap().view_distance(), 30.0);
    }
}
