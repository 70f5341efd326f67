//! Static body tables for the explorer scene.
//!
//! Sizes are relative to Earth (Earth radius = 1 unit). Orbital and rotation
//! periods are in days; negative periods run retrograde.

use std::f64::consts::PI;

/// Earth's radius in miles, used to normalize the other body sizes.
const EARTH_MILES: f64 = 3959.0;

pub const SUN_SIZE: f64 = 864950.0 / EARTH_MILES;
pub const MERCURY_SIZE: f64 = 1516.0 / EARTH_MILES;
pub const VENUS_SIZE: f64 = 3760.0 / EARTH_MILES;
pub const EARTH_SIZE: f64 = 1.0;
pub const MARS_SIZE: f64 = 2106.0 / EARTH_MILES;
pub const JUPITER_SIZE: f64 = 43441.0 / EARTH_MILES;
pub const SATURN_SIZE: f64 = 36184.0 / EARTH_MILES;
pub const URANUS_SIZE: f64 = 15759.0 / EARTH_MILES;
pub const NEPTUNE_SIZE: f64 = 15299.0 / EARTH_MILES;

/// Inner edge shared by all planet distances.
pub const BASE_DISTANCE: f64 = 3000.0;

/// Spread applied to each planet's slot on top of [`BASE_DISTANCE`].
pub const DISTANCE_SCALE: f64 = 10.0;

const fn slot(offset: f64) -> f64 {
    BASE_DISTANCE + offset * DISTANCE_SCALE
}

/// Inner and outer radius of the asteroid belt.
pub const BELT_INNER: f64 = slot(4000.0);
pub const BELT_OUTER: f64 = slot(5000.0);

/// Broad classification used for menus and labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyKind {
    Star,
    Planet,
    Moon,
}

/// Starting orbital phase of a body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InitialAngle {
    Fixed(f64),
    /// Uniformly random in `[0, 2π)`, chosen once at bootstrap.
    Random,
}

/// Flat ring around a body (Saturn).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingDescriptor {
    /// Inner radius as a multiple of the body radius.
    pub inner_factor: f64,
    /// Outer radius as a multiple of the body radius.
    pub outer_factor: f64,
    pub texture: &'static str,
    pub opacity: f32,
}

/// Declarative description of one body and its satellites.
#[derive(Clone, Copy, Debug)]
pub struct BodyDescriptor {
    pub name: &'static str,
    pub kind: BodyKind,
    pub radius: f64,
    pub distance: f64,
    pub orbital_period_days: f64,
    pub rotation_period_days: f64,
    pub inclination_degrees: f64,
    pub initial_angle: InitialAngle,
    pub texture: &'static str,
    /// Audio clip played while the body is selected.
    pub beat: Option<&'static str>,
    pub ring: Option<RingDescriptor>,
    /// Fallback color shown until the texture arrives.
    pub color: [f32; 3],
    pub satellites: &'static [BodyDescriptor],
}

impl BodyDescriptor {
    /// Template with neutral values, meant for struct-update syntax.
    pub const TEMPLATE: BodyDescriptor = BodyDescriptor {
        name: "",
        kind: BodyKind::Planet,
        radius: 1.0,
        distance: 0.0,
        orbital_period_days: 1.0,
        rotation_period_days: 1.0,
        inclination_degrees: 0.0,
        initial_angle: InitialAngle::Fixed(0.0),
        texture: "",
        beat: None,
        ring: None,
        color: [0.7, 0.7, 0.7],
        satellites: &[],
    };

    /// Moon orbiting at `distance` with a tidally locked spin.
    const fn moon(
        name: &'static str,
        radius: f64,
        distance: f64,
        orbital_period_days: f64,
        rotation_period_days: f64,
        texture: &'static str,
    ) -> BodyDescriptor {
        BodyDescriptor {
            name,
            kind: BodyKind::Moon,
            radius,
            distance,
            orbital_period_days,
            rotation_period_days,
            initial_angle: InitialAngle::Random,
            texture,
            ..Self::TEMPLATE
        }
    }
}

const EARTH_MOONS: &[BodyDescriptor] = &[BodyDescriptor {
    initial_angle: InitialAngle::Fixed(0.0),
    ..BodyDescriptor::moon(
        "Moon",
        EARTH_SIZE * 0.27,
        EARTH_SIZE * 10.0,
        27.3,
        27.3,
        "textures/moons/moon.jpg",
    )
}];

const MARS_MOONS: &[BodyDescriptor] = &[
    BodyDescriptor::moon("Phobos", MARS_SIZE * 0.056, MARS_SIZE * 2.76, 6.3, 0.031891, "textures/moons/phobos.jpg"),
    BodyDescriptor::moon("Deimos", MARS_SIZE * 0.031, MARS_SIZE * 6.92, 12.263, 1.263, "textures/moons/deimos.jpg"),
];

const JUPITER_MOONS: &[BodyDescriptor] = &[
    BodyDescriptor::moon("Io", JUPITER_SIZE * 0.026, JUPITER_SIZE * 2.82, 1.769, 1.769, "textures/moons/io.jpg"),
    BodyDescriptor::moon("Europa", JUPITER_SIZE * 0.0245, JUPITER_SIZE * 4.49, 3.551, 3.551, "textures/moons/europa.jpg"),
    BodyDescriptor::moon("Ganymede", JUPITER_SIZE * 0.0413, JUPITER_SIZE * 7.16, 7.155, 7.155, "textures/moons/ganymede.jpg"),
    BodyDescriptor::moon("Callisto", JUPITER_SIZE * 0.0378, JUPITER_SIZE * 12.59, 16.689, 16.689, "textures/moons/callisto.jpg"),
];

const SATURN_MOONS: &[BodyDescriptor] = &[
    BodyDescriptor::moon("Titan", SATURN_SIZE * 0.06, SATURN_SIZE * 4.95, 15.945, 15.945, "textures/moons/titan.png"),
    BodyDescriptor::moon("Rhea", SATURN_SIZE * 0.05, SATURN_SIZE * 3.52, 4.518, 4.518, "textures/moons/rhea.webp"),
    BodyDescriptor::moon("Iapetus", SATURN_SIZE * 0.07, SATURN_SIZE * 15.47, 79.322, 79.322, "textures/moons/iapetus.webp"),
    BodyDescriptor::moon("Dione", SATURN_SIZE * 0.01, SATURN_SIZE * 3.53, 2.737, 2.737, "textures/moons/dione.webp"),
    BodyDescriptor::moon("Tethys", SATURN_SIZE * 0.005, SATURN_SIZE * 6.97, 1.888, 1.888, "textures/moons/tethys.webp"),
];

const URANUS_MOONS: &[BodyDescriptor] = &[
    BodyDescriptor::moon("Titania", URANUS_SIZE * 0.031, URANUS_SIZE * 4.36, 8.706, 8.706, "textures/moons/titania.jpg"),
    BodyDescriptor::moon("Oberon", URANUS_SIZE * 0.030, URANUS_SIZE * 5.83, 13.463, 13.463, "textures/moons/oberon.jpg"),
    BodyDescriptor::moon("Umbriel", URANUS_SIZE * 0.023, URANUS_SIZE * 2.66, 4.144, 4.144, "textures/moons/umbriel.webp"),
    BodyDescriptor::moon("Ariel", URANUS_SIZE * 0.029, URANUS_SIZE * 1.91, 2.520, 2.520, "textures/moons/ariel.jpg"),
];

// Triton's negative orbital period makes it orbit retrograde.
const NEPTUNE_MOONS: &[BodyDescriptor] = &[
    BodyDescriptor::moon("Triton", NEPTUNE_SIZE * 0.054, NEPTUNE_SIZE * 3.54, -5.877, 5.877, "textures/moons/triton.jpg"),
    BodyDescriptor::moon("Nereid", NEPTUNE_SIZE * 0.014, NEPTUNE_SIZE * 10.13, 360.13, 360.13, "textures/moons/nereid.webp"),
    BodyDescriptor::moon("Naiad", NEPTUNE_SIZE * 0.003, NEPTUNE_SIZE * 0.48, 0.294, 0.294, "textures/moons/nereid.webp"),
    BodyDescriptor::moon("Thalassa", NEPTUNE_SIZE * 0.004, NEPTUNE_SIZE * 0.50, 0.311, 0.311, "textures/moons/nereid.webp"),
];

const PLANETS: &[BodyDescriptor] = &[
    BodyDescriptor {
        name: "Mercury",
        radius: MERCURY_SIZE,
        distance: slot(200.0),
        orbital_period_days: 88.0,
        rotation_period_days: 58.65,
        inclination_degrees: 7.0,
        initial_angle: InitialAngle::Fixed(0.0),
        texture: "textures/planets/mercury.jpg",
        beat: Some("audio/mercury.ogg"),
        color: [0.67, 0.67, 0.67],
        ..BodyDescriptor::TEMPLATE
    },
    BodyDescriptor {
        name: "Venus",
        radius: VENUS_SIZE,
        distance: slot(500.0),
        orbital_period_days: 224.7,
        rotation_period_days: -243.0,
        inclination_degrees: 3.4,
        initial_angle: InitialAngle::Fixed(PI / 4.0),
        texture: "textures/planets/venus_surface.jpg",
        beat: Some("audio/venus.ogg"),
        color: [1.0, 0.84, 0.0],
        ..BodyDescriptor::TEMPLATE
    },
    BodyDescriptor {
        name: "Earth",
        radius: EARTH_SIZE,
        distance: slot(2500.0),
        orbital_period_days: 365.25,
        rotation_period_days: 1.0,
        inclination_degrees: 0.0,
        initial_angle: InitialAngle::Fixed(PI / 2.0),
        texture: "textures/planets/earth_daymap.jpg",
        beat: Some("audio/earth.ogg"),
        color: [0.0, 1.0, 0.0],
        satellites: EARTH_MOONS,
        ..BodyDescriptor::TEMPLATE
    },
    BodyDescriptor {
        name: "Mars",
        radius: MARS_SIZE,
        distance: slot(3500.0),
        orbital_period_days: 687.0,
        rotation_period_days: 1.03,
        inclination_degrees: 1.9,
        initial_angle: InitialAngle::Fixed(PI),
        texture: "textures/planets/mars.jpg",
        beat: Some("audio/mars.ogg"),
        color: [1.0, 0.27, 0.0],
        satellites: MARS_MOONS,
        ..BodyDescriptor::TEMPLATE
    },
    BodyDescriptor {
        name: "Jupiter",
        radius: JUPITER_SIZE,
        distance: slot(5500.0),
        orbital_period_days: 4333.0,
        rotation_period_days: 0.41,
        inclination_degrees: 1.3,
        initial_angle: InitialAngle::Fixed(PI * 1.5),
        texture: "textures/planets/jupiter.jpg",
        beat: Some("audio/jupiter.ogg"),
        color: [1.0, 0.65, 0.0],
        satellites: JUPITER_MOONS,
        ..BodyDescriptor::TEMPLATE
    },
    BodyDescriptor {
        name: "Saturn",
        radius: SATURN_SIZE,
        distance: slot(6500.0),
        orbital_period_days: 10759.0,
        rotation_period_days: 0.44,
        inclination_degrees: 2.5,
        initial_angle: InitialAngle::Fixed(PI * 2.0),
        texture: "textures/planets/saturn.jpg",
        beat: Some("audio/saturn.ogg"),
        ring: Some(RingDescriptor {
            inner_factor: 1.5,
            outer_factor: 2.3,
            texture: "textures/planets/saturn_rings.jpeg",
            opacity: 0.9,
        }),
        color: [1.0, 0.84, 0.0],
        satellites: SATURN_MOONS,
        ..BodyDescriptor::TEMPLATE
    },
    BodyDescriptor {
        name: "Uranus",
        radius: URANUS_SIZE,
        distance: slot(7000.0),
        orbital_period_days: 30687.0,
        rotation_period_days: -0.72,
        inclination_degrees: 0.8,
        initial_angle: InitialAngle::Fixed(PI * 2.5),
        texture: "textures/planets/uranus.jpg",
        beat: Some("audio/uranus.ogg"),
        color: [0.0, 1.0, 1.0],
        satellites: URANUS_MOONS,
        ..BodyDescriptor::TEMPLATE
    },
    BodyDescriptor {
        name: "Neptune",
        radius: NEPTUNE_SIZE,
        distance: slot(8500.0),
        orbital_period_days: 60190.0,
        rotation_period_days: 0.67,
        inclination_degrees: 1.8,
        initial_angle: InitialAngle::Fixed(PI * 3.0),
        texture: "textures/planets/neptune.jpg",
        beat: Some("audio/neptune.ogg"),
        color: [0.0, 0.0, 1.0],
        satellites: NEPTUNE_MOONS,
        ..BodyDescriptor::TEMPLATE
    },
];

/// The explorer scene's root: the sun with every planet as a satellite.
///
/// The sun neither orbits nor spins, so both periods are infinite.
pub const SOLAR_SYSTEM: BodyDescriptor = BodyDescriptor {
    name: "Sun",
    kind: BodyKind::Star,
    radius: SUN_SIZE,
    distance: 0.0,
    orbital_period_days: f64::INFINITY,
    rotation_period_days: f64::INFINITY,
    texture: "textures/planets/sun.jpg",
    color: [1.0, 0.95, 0.4],
    satellites: PLANETS,
    ..BodyDescriptor::TEMPLATE
};

/// Names of the planets in menu order.
pub fn planet_names() -> impl Iterator<Item = &'static str> {
    PLANETS.iter().map(|p| p.name)
}

/// Facts shown on the info card once a focus flight lands.
#[derive(Clone, Debug)]
pub struct BodyFacts {
    /// Number of known moons
    pub known_moons: u32,
    pub has_rings: bool,
    /// Surface gravity in Earth g's
    pub surface_gravity_g: f64,
    /// Length of a solar day in hours
    pub day_length_hours: f64,
    /// Average distance from the Sun in AU
    pub distance_au: f64,
    pub fun_fact: &'static str,
}

/// Look up the info card facts for a body by name.
pub fn body_facts(name: &str) -> Option<BodyFacts> {
    let facts = match name {
        "Sun" => BodyFacts {
            known_moons: 0,
            has_rings: false,
            surface_gravity_g: 28.0,
            day_length_hours: 609.0,
            distance_au: 0.0,
            fun_fact: "Contains 99.86% of the solar system's mass",
        },
        "Mercury" => BodyFacts {
            known_moons: 0,
            has_rings: false,
            surface_gravity_g: 0.38,
            day_length_hours: 4222.6,
            distance_au: 0.38,
            fun_fact: "Extreme temperature swings: -180°C to 430°C",
        },
        "Venus" => BodyFacts {
            known_moons: 0,
            has_rings: false,
            surface_gravity_g: 0.91,
            day_length_hours: 2802.0,
            distance_au: 0.72,
            fun_fact: "Rotates backwards compared to most planets",
        },
        "Earth" => BodyFacts {
            known_moons: 1,
            has_rings: false,
            surface_gravity_g: 1.0,
            day_length_hours: 24.0,
            distance_au: 1.0,
            fun_fact: "The only known world with life",
        },
        "Mars" => BodyFacts {
            known_moons: 2,
            has_rings: false,
            surface_gravity_g: 0.38,
            day_length_hours: 24.7,
            distance_au: 1.52,
            fun_fact: "Home to Olympus Mons, the tallest volcano",
        },
        "Jupiter" => BodyFacts {
            known_moons: 95,
            has_rings: true,
            surface_gravity_g: 2.53,
            day_length_hours: 9.9,
            distance_au: 5.2,
            fun_fact: "The Great Red Spot is a storm larger than Earth",
        },
        "Saturn" => BodyFacts {
            known_moons: 146,
            has_rings: true,
            surface_gravity_g: 1.07,
            day_length_hours: 10.7,
            distance_au: 9.58,
            fun_fact: "Less dense than water",
        },
        "Uranus" => BodyFacts {
            known_moons: 28,
            has_rings: true,
            surface_gravity_g: 0.89,
            day_length_hours: 17.2,
            distance_au: 19.14,
            fun_fact: "Tilted 98°, it rolls around the Sun",
        },
        "Neptune" => BodyFacts {
            known_moons: 16,
            has_rings: true,
            surface_gravity_g: 1.14,
            day_length_hours: 16.1,
            distance_au: 30.2,
            fun_fact: "Fastest winds in the solar system, up to 2100 km/h",
        },
        _ => return None,
    };
    Some(facts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_descriptors() -> Vec<&'static BodyDescriptor> {
        let mut out = vec![&SOLAR_SYSTEM];
        for planet in SOLAR_SYSTEM.satellites {
            out.push(planet);
            out.extend(planet.satellites.iter());
        }
        out
    }

    #[test]
    fn test_names_are_unique() {
        let names: Vec<_> = all_descriptors().iter().map(|d| d.name).collect();
        let mut sorted = names.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(names.len(), sorted.len());
    }

    #[test]
    fn test_planets_are_ordered_outward() {
        let distances: Vec<f64> = SOLAR_SYSTEM.satellites.iter().map(|p| p.distance).collect();
        assert!(distances.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_retrograde_bodies_have_negative_periods() {
        let find = |name: &str| {
            all_descriptors()
                .into_iter()
                .find(|d| d.name == name)
                .copied()
        };
        assert!(find("Venus").unwrap().rotation_period_days < 0.0);
        assert!(find("Uranus").unwrap().rotation_period_days < 0.0);
        assert!(find("Triton").unwrap().orbital_period_days < 0.0);
    }

    #[test]
    fn test_only_saturn_has_ring() {
        let ringed: Vec<_> = SOLAR_SYSTEM
            .satellites
            .iter()
            .filter(|p| p.ring.is_some())
            .map(|p| p.name)
            .collect();
        assert_eq!(ringed, vec!["Saturn"]);
    }

    #[test]
    fn test_every_planet_has_facts_and_beat() {
        for name in planet_names() {
            assert!(body_facts(name).is_some(), "missing facts for {name}");
        }
        assert!(SOLAR_SYSTEM.satellites.iter().all(|p| p.beat.is_some()));
    }

    #[test]
    fn test_belt_sits_between_mars_and_jupiter() {
        let mars = SOLAR_SYSTEM.satellites[3].distance;
        let jupiter = SOLAR_SYSTEM.satellites[4].distance;
        assert!(BELT_INNER > mars && BELT_OUTER < jupiter);
    }
}
