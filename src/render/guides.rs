//! Orbit guide lines and focus outline rings, drawn with Bevy gizmos.

use std::f64::consts::TAU;

use bevy::math::{DQuat, DVec3};
use bevy::prelude::*;

use crate::bodies::{BodyKind, BodyRegistry};
use crate::orbit::orbital_offset;

/// Settings for guide rendering.
#[derive(Resource, Clone, Debug)]
pub struct GuideSettings {
    /// Whether orbit guides are drawn at all (G toggles).
    pub visible: bool,
    /// Segments of a planet's orbit guide.
    pub planet_segments: u32,
    /// Segments of a moon's orbit guide.
    pub moon_segments: u32,
    pub alpha: f32,
    /// Radius of the outline ring drawn around unfocused planets.
    pub outline_radius: f64,
    pub outline_segments: u32,
}

impl Default for GuideSettings {
    fn default() -> Self {
        Self {
            visible: true,
            planet_segments: 600,
            moon_segments: 64,
            alpha: 0.3,
            outline_radius: 130.0,
            outline_segments: 64,
        }
    }
}

/// Closed circle of `segments` segments around `center` in `plane`.
///
/// Returns `segments + 1` points; the last repeats the first.
pub fn circle_points(center: DVec3, radius: f64, plane: DQuat, segments: u32) -> Vec<DVec3> {
    let segments = segments.max(3);
    (0..=segments)
        .map(|i| {
            let angle = i as f64 / segments as f64 * TAU;
            center + orbital_offset(radius, angle, 0.0, plane)
        })
        .collect()
}

/// Draw every orbit guide plus the outline ring of each visible planet.
pub fn draw_guides(mut gizmos: Gizmos, registry: Res<BodyRegistry>, settings: Res<GuideSettings>) {
    if !settings.visible {
        return;
    }

    for body in registry.iter() {
        let Some(parent) = body.parent.and_then(|id| registry.get(id)) else {
            continue;
        };
        let [r, g, b] = body.color;
        let color = Color::srgba(r, g, b, settings.alpha);

        let segments = match body.kind {
            BodyKind::Moon => settings.moon_segments,
            _ => settings.planet_segments,
        };
        let orbit = circle_points(parent.position, body.distance, body.plane, segments);
        gizmos.linestrip(orbit.into_iter().map(|p| p.as_vec3()), color);

        if body.kind == BodyKind::Planet && body.guide_visible {
            let lift = body.plane * DVec3::new(0.0, body.radius, 0.0);
            let ring = circle_points(
                body.position + lift,
                settings.outline_radius,
                body.orientation(),
                settings.outline_segments,
            );
            gizmos.linestrip(
                ring.into_iter().map(|p| p.as_vec3()),
                Color::srgba(r, g, b, 0.8),
            );
        }
    }
}
