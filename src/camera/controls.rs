//! Orbit-style camera controls: rotate around a target, zoom along the view ray.

use bevy::math::DVec3;
use bevy::prelude::*;

/// Distance bounds for zooming toward the target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomBounds {
    pub min: f64,
    pub max: f64,
}

impl ZoomBounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, distance: f64) -> f64 {
        distance.clamp(self.min, self.max)
    }
}

/// Default explorer zoom bounds when no body is focused.
pub const DEFAULT_ZOOM_BOUNDS: ZoomBounds = ZoomBounds::new(1000.0, 122000.0);

/// Keeps the polar angle away from the poles so `looking_at` stays stable.
const POLAR_MARGIN: f64 = 0.01;

/// Camera controller state shared between user input and the camera director.
#[derive(Resource, Clone, Debug)]
pub struct OrbitControls {
    /// Master switch; the director turns this off during flights.
    pub enabled: bool,
    pub rotate_enabled: bool,
    pub zoom_enabled: bool,
    pub bounds: ZoomBounds,
    /// Point the camera orbits and looks at.
    pub target: DVec3,
    /// Radians per pixel of mouse drag.
    pub rotate_speed: f64,
    /// Fractional distance change per scroll line.
    pub zoom_speed: f64,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self {
            enabled: true,
            rotate_enabled: true,
            zoom_enabled: true,
            bounds: DEFAULT_ZOOM_BOUNDS,
            target: DVec3::ZERO,
            rotate_speed: 0.005,
            zoom_speed: 0.1,
        }
    }
}

impl OrbitControls {
    /// Orbit `position` around the target by yaw/pitch deltas in pixels.
    pub fn rotate(&self, position: DVec3, delta_x: f64, delta_y: f64) -> DVec3 {
        let offset = position - self.target;
        let radius = offset.length();
        if radius == 0.0 {
            return position;
        }
        let mut theta = offset.x.atan2(offset.z);
        let mut phi = (offset.y / radius).clamp(-1.0, 1.0).acos();
        theta -= delta_x * self.rotate_speed;
        phi = (phi - delta_y * self.rotate_speed)
            .clamp(POLAR_MARGIN, std::f64::consts::PI - POLAR_MARGIN);
        self.target
            + DVec3::new(
                radius * phi.sin() * theta.sin(),
                radius * phi.cos(),
                radius * phi.sin() * theta.cos(),
            )
    }

    /// Move `position` along the view ray by `scroll` lines, within bounds.
    pub fn zoom(&self, position: DVec3, scroll: f64) -> DVec3 {
        let offset = position - self.target;
        let Some(direction) = offset.try_normalize() else {
            return position;
        };
        let distance = self.bounds.clamp(offset.length() * (1.0 - scroll * self.zoom_speed));
        self.target + direction * distance
    }

    /// Move the target to `target`, carrying the camera along by the same offset.
    pub fn retarget(&mut self, target: DVec3, position: DVec3) -> DVec3 {
        let shift = target - self.target;
        self.target = target;
        position + shift
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zoom_respects_bounds() {
        let controls = OrbitControls {
            bounds: ZoomBounds::new(10.0, 25.0),
            ..Default::default()
        };
        let start = DVec3::new(0.0, 0.0, 20.0);
        let near = controls.zoom(start, 100.0);
        assert_relative_eq!(near.length(), 10.0);
        let far = controls.zoom(start, -100.0);
        assert_relative_eq!(far.length(), 25.0);
    }

    #[test]
    fn test_rotate_preserves_distance() {
        let controls = OrbitControls {
            target: DVec3::new(5.0, 0.0, 0.0),
            ..Default::default()
        };
        let start = DVec3::new(5.0, 30.0, 40.0);
        let moved = controls.rotate(start, 120.0, -45.0);
        assert_relative_eq!(moved.distance(controls.target), 50.0, epsilon = 1e-9);
        assert!(moved.distance(start) > 1.0);
    }

    #[test]
    fn test_retarget_carries_camera() {
        let mut controls = OrbitControls::default();
        let camera = controls.retarget(DVec3::new(1.0, 2.0, 3.0), DVec3::new(0.0, 0.0, 10.0));
        assert_eq!(camera, DVec3::new(1.0, 2.0, 13.0));
        assert_eq!(controls.target, DVec3::new(1.0, 2.0, 3.0));
    }
}
