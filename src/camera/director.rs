//! Camera director: eased flights between the free view and focused bodies.
//!
//! The director is plain data driven by explicit calls, so the state machine
//! can be exercised without a running app:
//!
//! ```text
//! Free --select_body--> Transitioning(Focus) --10 s--> Focused
//!  ^                                                     |
//!  +------ 2 s <-- Transitioning(Reset) <--reset_view----+
//! ```

use std::f64::consts::PI;

use bevy::math::DVec3;
use bevy::prelude::*;
use thiserror::Error;

use super::controls::{OrbitControls, ZoomBounds};
use super::ease::ease_in_out_cubic;
use crate::bodies::{BodyId, BodyRegistry};
use crate::types::{DEFAULT_CAMERA_POSITION, DEFAULT_LOOK_AT};
use crate::ui::port::UiPort;

/// Elevation of the focus viewpoint above the sun-body line.
const FOCUS_ELEVATION: f64 = PI / 6.0;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DirectorError {
    #[error("no body named {0:?}")]
    UnknownBody(String),
    #[error("cannot focus {requested:?} while another flight is in progress")]
    TransitionInProgress { requested: String },
}

/// Result of a director command that was accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// A new flight began.
    Started,
    /// The request matched the current selection; nothing changed.
    Unchanged,
    /// The request is meaningless in the current mode.
    Ignored,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlightKind {
    Focus,
    Reset,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CameraMode {
    #[default]
    Free,
    Transitioning(FlightKind),
    Focused,
}

/// Camera position plus the point it looks at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: DVec3,
    pub look_at: DVec3,
}

impl CameraPose {
    pub fn lerp(&self, other: &CameraPose, s: f64) -> CameraPose {
        CameraPose {
            position: self.position.lerp(other.position, s),
            look_at: self.look_at.lerp(other.look_at, s),
        }
    }
}

/// Director tuning.
#[derive(Clone, Debug)]
pub struct CameraSettings {
    /// Seconds a focus flight takes.
    pub focus_duration: f64,
    /// Seconds a reset flight takes.
    pub reset_duration: f64,
    pub default_pose: CameraPose,
    pub default_bounds: ZoomBounds,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            focus_duration: 10.0,
            reset_duration: 2.0,
            default_pose: CameraPose {
                position: DEFAULT_CAMERA_POSITION,
                look_at: DEFAULT_LOOK_AT,
            },
            default_bounds: super::controls::DEFAULT_ZOOM_BOUNDS,
        }
    }
}

#[derive(Clone, Debug)]
struct Flight {
    kind: FlightKind,
    started_at: f64,
    duration: f64,
    start: CameraPose,
    target: CameraPose,
    /// A reset that interrupted a focus flight has no focused view to return to.
    from_focused: bool,
}

impl Flight {
    /// Linear progress in `[0, 1]`.
    fn progress(&self, now: f64) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.started_at) / self.duration).clamp(0.0, 1.0)
    }

    fn pose_at(&self, now: f64) -> CameraPose {
        self.start
            .lerp(&self.target, ease_in_out_cubic(self.progress(now)))
    }
}

/// Viewpoint for a focus flight on a body at `body` as seen from `sun`.
///
/// The camera stands `2·view` out along the sun-body line, lifted by
/// `sin(π/6)·view`. A body sitting on the sun falls back to the +Z axis.
pub fn focus_position(body: DVec3, view_distance: f64, sun: DVec3) -> DVec3 {
    let outward = (body - sun).try_normalize().unwrap_or(DVec3::Z);
    body + outward * (FOCUS_ELEVATION.cos() * view_distance * 2.0)
        + DVec3::Y * (FOCUS_ELEVATION.sin() * view_distance)
}

/// Camera session for the explorer scene.
#[derive(Resource, Debug, Default)]
pub struct CameraDirector {
    pub settings: CameraSettings,
    mode: CameraMode,
    selected: Option<BodyId>,
    flight: Option<Flight>,
}

impl CameraDirector {
    pub fn new(settings: CameraSettings) -> Self {
        Self {
            settings,
            ..Default::default()
        }
    }

    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    pub fn selected(&self) -> Option<BodyId> {
        self.selected
    }

    /// Pose the current flight is heading to, if any.
    pub fn flight_target(&self) -> Option<CameraPose> {
        self.flight.as_ref().map(|f| f.target)
    }

    /// Live position of the focused body, which the controls should track.
    pub fn focus_point(&self, registry: &BodyRegistry) -> Option<DVec3> {
        if self.mode != CameraMode::Focused {
            return None;
        }
        self.selected
            .and_then(|id| registry.get(id))
            .map(|b| b.position)
    }

    /// Linear progress of the current flight, if any.
    pub fn progress(&self, now: f64) -> Option<f64> {
        self.flight.as_ref().map(|f| f.progress(now))
    }

    /// Start a focus flight toward `name`.
    pub fn select_body(
        &mut self,
        name: &str,
        now: f64,
        camera_position: DVec3,
        registry: &mut BodyRegistry,
        controls: &mut OrbitControls,
        ui: &mut impl UiPort,
    ) -> Result<Transition, DirectorError> {
        let id = registry
            .id_of(name)
            .ok_or_else(|| DirectorError::UnknownBody(name.to_string()))?;

        match self.mode {
            CameraMode::Transitioning(FlightKind::Focus) if self.selected == Some(id) => {
                return Ok(Transition::Unchanged);
            }
            CameraMode::Transitioning(_) => {
                return Err(DirectorError::TransitionInProgress {
                    requested: name.to_string(),
                });
            }
            CameraMode::Focused if self.selected == Some(id) => {
                return Ok(Transition::Unchanged);
            }
            CameraMode::Focused => self.release_selected(registry),
            CameraMode::Free => {}
        }

        let sun = registry.sun_position();
        let Some(body) = registry.get_mut(id) else {
            return Err(DirectorError::UnknownBody(name.to_string()));
        };
        body.is_stopped = true;
        body.guide_visible = true;

        let target = CameraPose {
            position: focus_position(body.position, body.view_distance(), sun),
            look_at: body.position,
        };
        let start = CameraPose {
            position: camera_position,
            look_at: controls.target,
        };
        controls.enabled = false;

        self.flight = Some(Flight {
            kind: FlightKind::Focus,
            started_at: now,
            duration: self.settings.focus_duration,
            start,
            target,
            from_focused: false,
        });
        self.mode = CameraMode::Transitioning(FlightKind::Focus);
        self.selected = Some(id);

        ui.hide_info_panel();
        ui.highlight_body(Some(name));
        info!("Flying to {}", name);
        Ok(Transition::Started)
    }

    /// Start a flight back to the default overview.
    pub fn reset_view(
        &mut self,
        now: f64,
        camera_position: DVec3,
        registry: &mut BodyRegistry,
        controls: &mut OrbitControls,
        ui: &mut impl UiPort,
    ) -> Transition {
        let from_focused = self.mode == CameraMode::Focused;
        let start = match (self.mode, &self.flight) {
            (CameraMode::Free, _) | (CameraMode::Transitioning(FlightKind::Reset), _) => {
                return Transition::Ignored;
            }
            (CameraMode::Transitioning(FlightKind::Focus), Some(flight)) => flight.pose_at(now),
            _ => CameraPose {
                position: camera_position,
                look_at: controls.target,
            },
        };

        self.release_selected(registry);
        controls.enabled = false;
        controls.zoom_enabled = false;

        self.flight = Some(Flight {
            kind: FlightKind::Reset,
            started_at: now,
            duration: self.settings.reset_duration,
            start,
            target: self.settings.default_pose,
            from_focused,
        });
        self.mode = CameraMode::Transitioning(FlightKind::Reset);

        ui.hide_info_panel();
        ui.highlight_body(None);
        info!("Returning to overview");
        Transition::Started
    }

    /// Snap the current flight to whichever end is closer in eased progress.
    ///
    /// A reset that began mid-focus always completes, since its start was
    /// never a settled view. Returns the pose the camera should jump to, or
    /// `None` when idle.
    pub fn cancel(
        &mut self,
        now: f64,
        registry: &mut BodyRegistry,
        controls: &mut OrbitControls,
        ui: &mut impl UiPort,
    ) -> Option<CameraPose> {
        let flight = self.flight.clone()?;
        let interrupted_reset = flight.kind == FlightKind::Reset && !flight.from_focused;
        if interrupted_reset || ease_in_out_cubic(flight.progress(now)) >= 0.5 {
            self.finish(&flight, registry, controls, ui);
            return Some(flight.target);
        }

        self.flight = None;
        match flight.kind {
            FlightKind::Focus => {
                self.release_selected(registry);
                self.selected = None;
                self.mode = CameraMode::Free;
                controls.enabled = true;
                controls.zoom_enabled = true;
                controls.target = flight.start.look_at;
                ui.highlight_body(None);
            }
            FlightKind::Reset => {
                self.enter_focused(registry, controls, ui);
            }
        }
        info!("Camera flight cancelled");
        Some(flight.start)
    }

    /// Advance the director to `now`.
    ///
    /// Returns the pose to apply while a flight is running, or `None` when the
    /// orbit controls own the camera.
    pub fn update(
        &mut self,
        now: f64,
        registry: &mut BodyRegistry,
        controls: &mut OrbitControls,
        ui: &mut impl UiPort,
    ) -> Option<CameraPose> {
        match self.mode {
            CameraMode::Free => None,
            CameraMode::Focused => {
                if let Some(body) = self.selected.and_then(|id| registry.get_mut(id)) {
                    body.guide_visible = false;
                }
                None
            }
            CameraMode::Transitioning(_) => {
                let flight = self.flight.clone()?;
                if flight.progress(now) >= 1.0 {
                    self.finish(&flight, registry, controls, ui);
                    Some(flight.target)
                } else {
                    Some(flight.pose_at(now))
                }
            }
        }
    }

    fn finish(
        &mut self,
        flight: &Flight,
        registry: &mut BodyRegistry,
        controls: &mut OrbitControls,
        ui: &mut impl UiPort,
    ) {
        self.flight = None;
        match flight.kind {
            FlightKind::Focus => {
                self.enter_focused(registry, controls, ui);
                controls.target = flight.target.look_at;
            }
            FlightKind::Reset => {
                self.mode = CameraMode::Free;
                self.selected = None;
                controls.enabled = true;
                controls.zoom_enabled = true;
                controls.bounds = self.settings.default_bounds;
                controls.target = self.settings.default_pose.look_at;
                ui.hide_info_panel();
            }
        }
    }

    fn enter_focused(
        &mut self,
        registry: &mut BodyRegistry,
        controls: &mut OrbitControls,
        ui: &mut impl UiPort,
    ) {
        self.mode = CameraMode::Focused;
        controls.enabled = true;
        controls.zoom_enabled = true;
        let Some(body) = self.selected.and_then(|id| registry.get_mut(id)) else {
            return;
        };
        body.is_stopped = true;
        body.guide_visible = false;
        controls.bounds = ZoomBounds::new(body.radius * 1.5, body.view_distance() * 10.0);
        controls.target = body.position;
        ui.on_focus_complete(&body.name);
        ui.highlight_body(Some(&body.name));
        info!("Focused on {}", body.name);
    }

    fn release_selected(&mut self, registry: &mut BodyRegistry) {
        if let Some(body) = self.selected.and_then(|id| registry.get_mut(id)) {
            body.is_stopped = false;
            body.guide_visible = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::BodyDescriptor;
    use crate::ui::port::RecordingPort;
    use approx::assert_relative_eq;

    struct Fixture {
        director: CameraDirector,
        registry: BodyRegistry,
        controls: OrbitControls,
        ui: RecordingPort,
    }

    fn fixture() -> Fixture {
        let mut registry = BodyRegistry::default();
        let sun = registry
            .insert(
                &BodyDescriptor {
                    name: "Sun",
                    radius: 20.0,
                    ..BodyDescriptor::TEMPLATE
                },
                None,
                0.0,
            )
            .unwrap();
        for (name, distance) in [("Earth", 1000.0), ("Mars", 1500.0)] {
            registry
                .insert(
                    &BodyDescriptor {
                        name,
                        radius: 6.0,
                        distance,
                        orbital_period_days: 100.0,
                        ..BodyDescriptor::TEMPLATE
                    },
                    Some(sun),
                    0.0,
                )
                .unwrap();
        }
        crate::orbit::update_positions(&mut registry);
        Fixture {
            director: CameraDirector::default(),
            registry,
            controls: OrbitControls::default(),
            ui: RecordingPort::default(),
        }
    }

    impl Fixture {
        fn select(&mut self, name: &str, now: f64) -> Result<Transition, DirectorError> {
            self.director.select_body(
                name,
                now,
                DEFAULT_CAMERA_POSITION,
                &mut self.registry,
                &mut self.controls,
                &mut self.ui,
            )
        }

        fn reset(&mut self, now: f64) -> Transition {
            self.director.reset_view(
                now,
                DEFAULT_CAMERA_POSITION,
                &mut self.registry,
                &mut self.controls,
                &mut self.ui,
            )
        }

        fn update(&mut self, now: f64) -> Option<CameraPose> {
            self.director
                .update(now, &mut self.registry, &mut self.controls, &mut self.ui)
        }
    }

    #[test]
    fn test_focus_position_geometry() {
        let p = focus_position(DVec3::new(100.0, 0.0, 0.0), 30.0, DVec3::ZERO);
        assert_relative_eq!(p.x, 100.0 + (PI / 6.0).cos() * 60.0, epsilon = 1e-9);
        assert_relative_eq!(p.y, 15.0, epsilon = 1e-9);
        assert_relative_eq!(p.z, 0.0);
    }

    #[test]
    fn test_focus_position_on_sun_falls_back() {
        let p = focus_position(DVec3::ZERO, 10.0, DVec3::ZERO);
        assert!(p.is_finite());
        assert!(p.z > 0.0);
    }

    #[test]
    fn test_select_unknown_body() {
        let mut f = fixture();
        assert_eq!(
            f.select("Pluto", 0.0),
            Err(DirectorError::UnknownBody("Pluto".into()))
        );
        assert_eq!(f.director.mode(), CameraMode::Free);
    }

    #[test]
    fn test_select_stops_body_and_disables_controls() {
        let mut f = fixture();
        assert_eq!(f.select("Earth", 0.0), Ok(Transition::Started));
        assert!(f.registry.by_name("Earth").unwrap().is_stopped);
        assert!(!f.controls.enabled);
        assert_eq!(
            f.director.mode(),
            CameraMode::Transitioning(FlightKind::Focus)
        );
    }

    #[test]
    fn test_mid_flight_is_eased() {
        let mut f = fixture();
        f.select("Earth", 0.0).unwrap();
        let target = f.director.flight_target().unwrap();
        let pose = f.update(5.0).unwrap();
        let expected = DEFAULT_CAMERA_POSITION.lerp(target.position, 0.5);
        assert_relative_eq!(pose.position.x, expected.x, epsilon = 1e-9);
        assert_relative_eq!(pose.position.y, expected.y, epsilon = 1e-9);
    }

    #[test]
    fn test_different_body_during_flight_is_rejected() {
        let mut f = fixture();
        f.select("Earth", 0.0).unwrap();
        assert!(matches!(
            f.select("Mars", 1.0),
            Err(DirectorError::TransitionInProgress { .. })
        ));
        assert_eq!(
            f.director.selected(),
            f.registry.id_of("Earth")
        );
    }

    #[test]
    fn test_reset_while_free_is_ignored() {
        let mut f = fixture();
        assert_eq!(f.reset(0.0), Transition::Ignored);
        assert!(f.ui.events.is_empty());
    }

    #[test]
    fn test_reset_during_focus_starts_from_current_pose() {
        let mut f = fixture();
        f.select("Earth", 0.0).unwrap();
        let mid = f.update(5.0).unwrap();
        assert_eq!(f.reset(5.0), Transition::Started);
        assert!(!f.registry.by_name("Earth").unwrap().is_stopped);
        let pose = f.update(5.0).unwrap();
        assert_relative_eq!(pose.position.x, mid.position.x, epsilon = 1e-9);
        assert_relative_eq!(pose.position.y, mid.position.y, epsilon = 1e-9);

        assert!(f.update(7.0).is_some());
        assert_eq!(f.director.mode(), CameraMode::Free);
        assert_eq!(f.director.selected(), None);
    }

    #[test]
    fn test_cancel_early_returns_to_free() {
        let mut f = fixture();
        f.select("Earth", 0.0).unwrap();
        let pose = f
            .director
            .cancel(1.0, &mut f.registry, &mut f.controls, &mut f.ui)
            .unwrap();
        assert_eq!(pose.position, DEFAULT_CAMERA_POSITION);
        assert_eq!(f.director.mode(), CameraMode::Free);
        assert!(!f.registry.by_name("Earth").unwrap().is_stopped);
        assert!(f.controls.enabled);
    }

    #[test]
    fn test_cancel_late_completes_focus() {
        let mut f = fixture();
        f.select("Earth", 0.0).unwrap();
        let target = f.director.flight_target().unwrap();
        let pose = f
            .director
            .cancel(9.0, &mut f.registry, &mut f.controls, &mut f.ui)
            .unwrap();
        assert_eq!(pose, target);
        assert_eq!(f.director.mode(), CameraMode::Focused);
        assert_eq!(f.ui.focused(), vec!["Earth".to_string()]);
    }

    #[test]
    fn test_cancel_when_idle_is_noop() {
        let mut f = fixture();
        assert!(
            f.director
                .cancel(0.0, &mut f.registry, &mut f.controls, &mut f.ui)
                .is_none()
        );
    }

    #[test]
    fn test_cancel_early_reset_returns_to_focus() {
        let mut f = fixture();
        f.select("Earth", 0.0).unwrap();
        f.update(10.0);
        f.reset(20.0);
        f.director
            .cancel(20.1, &mut f.registry, &mut f.controls, &mut f.ui)
            .unwrap();
        assert_eq!(f.director.mode(), CameraMode::Focused);
        assert!(f.registry.by_name("Earth").unwrap().is_stopped);
    }

    #[test]
    fn test_cancel_reset_of_unfinished_focus_lands_free() {
        let mut f = fixture();
        f.select("Earth", 0.0).unwrap();
        f.update(3.0);
        f.reset(3.0);
        let pose = f
            .director
            .cancel(3.1, &mut f.registry, &mut f.controls, &mut f.ui)
            .unwrap();
        assert_eq!(pose, f.director.settings.default_pose);
        assert_eq!(f.director.mode(), CameraMode::Free);
        assert_eq!(f.director.selected(), None);
        assert!(f.ui.focused().is_empty());
        assert_eq!(f.controls.bounds, f.director.settings.default_bounds);
        assert!(!f.registry.by_name("Earth").unwrap().is_stopped);
    }

    #[test]
    fn test_focused_hides_outline() {
        let mut f = fixture();
        f.select("Earth", 0.0).unwrap();
        assert!(f.registry.by_name("Earth").unwrap().guide_visible);
        f.update(10.0);
        f.update(10.5);
        assert!(!f.registry.by_name("Earth").unwrap().guide_visible);
    }

    mod progress_props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn progress_is_clamped_and_monotonic(a in -5.0f64..30.0, b in -5.0f64..30.0) {
                let mut f = fixture();
                f.select("Mars", 0.0).unwrap();
                let (early, late) = if a <= b { (a, b) } else { (b, a) };
                let p_early = f.director.progress(early).unwrap();
                let p_late = f.director.progress(late).unwrap();
                prop_assert!((0.0..=1.0).contains(&p_early));
                prop_assert!((0.0..=1.0).contains(&p_late));
                prop_assert!(p_early <= p_late);
            }

            #[test]
            fn flight_lands_once_progress_reaches_one(extra in 0.0f64..100.0) {
                let mut f = fixture();
                f.select("Earth", 0.0).unwrap();
                let target = f.director.flight_target().unwrap();
                let pose = f.update(10.0 + extra).unwrap();
                prop_assert_eq!(pose, target);
                prop_assert_eq!(f.director.mode(), CameraMode::Focused);
            }
        }
    }
}
