//! Turns planet menu clicks into camera director commands.

use bevy::math::DVec3;
use bevy::prelude::*;

use super::port::{PanelState, UiPort};
use crate::audio::{self, BeatPlayer};
use crate::bodies::BodyRegistry;
use crate::camera::{
    apply_pose, CameraDirector, DirectorError, MainCamera, OrbitControls, Transition,
};
use crate::types::AppScene;

/// Menu entry that flies back to the overview instead of to a body.
pub const RESET_BUTTON: &str = "SolarSystem";

/// A command from the UI toward the explorer camera.
#[derive(Message, Clone, Debug, PartialEq)]
pub enum UiCommand {
    SelectBody(String),
    ResetView,
    CancelFlight,
}

impl UiCommand {
    /// Map a menu button's body name to its command.
    pub fn from_button(name: &str) -> Self {
        if name == RESET_BUTTON {
            UiCommand::ResetView
        } else {
            UiCommand::SelectBody(name.to_string())
        }
    }
}

/// Forward a focus or reset command to the director.
///
/// Cancellation returns a pose rather than an outcome and is handled by the caller.
pub fn dispatch(
    command: &UiCommand,
    now: f64,
    camera_position: DVec3,
    director: &mut CameraDirector,
    registry: &mut BodyRegistry,
    controls: &mut OrbitControls,
    ui: &mut impl UiPort,
) -> Result<Transition, DirectorError> {
    match command {
        UiCommand::SelectBody(name) => {
            director.select_body(name, now, camera_position, registry, controls, ui)
        }
        UiCommand::ResetView => {
            Ok(director.reset_view(now, camera_position, registry, controls, ui))
        }
        UiCommand::CancelFlight => Ok(Transition::Ignored),
    }
}

/// Apply queued UI commands, swapping planet beats as selections change.
pub fn apply_ui_commands(
    mut commands: Commands,
    mut ui_commands: MessageReader<UiCommand>,
    time: Res<Time<Real>>,
    asset_server: Res<AssetServer>,
    mut director: ResMut<CameraDirector>,
    mut registry: ResMut<BodyRegistry>,
    mut controls: ResMut<OrbitControls>,
    mut panel: ResMut<PanelState>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
    beats: Query<Entity, With<BeatPlayer>>,
) {
    let Ok(mut camera) = camera_query.single_mut() else {
        return;
    };
    let now = time.elapsed_secs_f64();

    for command in ui_commands.read() {
        if *command == UiCommand::CancelFlight {
            if let Some(pose) =
                director.cancel(now, &mut registry, &mut controls, panel.as_mut())
            {
                apply_pose(&mut camera, &pose);
            }
            continue;
        }

        let camera_position = camera.translation.as_dvec3();
        let outcome = dispatch(
            command,
            now,
            camera_position,
            &mut director,
            &mut registry,
            &mut controls,
            panel.as_mut(),
        );

        match (command, outcome) {
            (UiCommand::SelectBody(name), Ok(Transition::Started)) => {
                match registry.by_name(name).and_then(|b| b.beat) {
                    Some(beat) => audio::play_beat(
                        &mut commands,
                        &asset_server,
                        beats.iter(),
                        AppScene::Explorer,
                        beat,
                    ),
                    None => audio::stop_beats(&mut commands, beats.iter()),
                }
            }
            (UiCommand::ResetView, Ok(Transition::Started)) => {
                audio::stop_beats(&mut commands, beats.iter());
            }
            (_, Ok(_)) => {}
            (_, Err(err)) => warn!("Ignoring {:?}: {}", command, err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::BodyDescriptor;
    use crate::camera::CameraMode;
    use crate::ui::port::RecordingPort;

    #[test]
    fn test_reset_button_maps_to_reset() {
        assert_eq!(UiCommand::from_button("SolarSystem"), UiCommand::ResetView);
        assert_eq!(
            UiCommand::from_button("Mars"),
            UiCommand::SelectBody("Mars".into())
        );
    }

    #[test]
    fn test_dispatch_select_then_reset() {
        let mut registry = BodyRegistry::default();
        registry
            .insert(
                &BodyDescriptor {
                    name: "Mars",
                    distance: 500.0,
                    ..BodyDescriptor::TEMPLATE
                },
                None,
                0.0,
            )
            .unwrap();
        let mut director = CameraDirector::default();
        let mut controls = OrbitControls::default();
        let mut ui = RecordingPort::default();

        let select = UiCommand::from_button("Mars");
        let outcome = dispatch(
            &select,
            0.0,
            DVec3::new(0.0, 5000.0, 15000.0),
            &mut director,
            &mut registry,
            &mut controls,
            &mut ui,
        );
        assert_eq!(outcome, Ok(Transition::Started));

        director.update(10.0, &mut registry, &mut controls, &mut ui);
        assert_eq!(director.mode(), CameraMode::Focused);

        let reset = UiCommand::from_button(RESET_BUTTON);
        let outcome = dispatch(
            &reset,
            11.0,
            DVec3::ZERO,
            &mut director,
            &mut registry,
            &mut controls,
            &mut ui,
        );
        assert_eq!(outcome, Ok(Transition::Started));
        assert!(!controls.zoom_enabled);
    }
}
