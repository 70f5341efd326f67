//! Simulation clock advancement and the keyboard shortcuts that drive it.

use bevy::prelude::*;

use crate::render::{GuideSettings, LabelSettings};
use crate::types::SimulationClock;

/// Systems that read [`SimulationClock::last_dt`] run after this set.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClockSystemSet;

/// Plugin providing the simulation clock.
pub struct TimePlugin;

impl Plugin for TimePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationClock>().add_systems(
            Update,
            (keyboard_shortcuts, advance_clock)
                .chain()
                .in_set(ClockSystemSet),
        );
    }
}

/// Advance the clock by this frame's wall-clock time.
///
/// One real second is one simulated day at scale 1.0.
fn advance_clock(mut clock: ResMut<SimulationClock>, time: Res<Time>) {
    clock.tick(time.delta_secs_f64());
}

/// Handle keyboard shortcuts for time and overlay toggles.
fn keyboard_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    mut clock: ResMut<SimulationClock>,
    mut guides: ResMut<GuideSettings>,
    mut labels: ResMut<LabelSettings>,
) {
    // Space: toggle pause
    if keys.just_pressed(KeyCode::Space) {
        clock.paused = !clock.paused;
        info!("Simulation {}", if clock.paused { "paused" } else { "running" });
    }

    // [ and ] adjust simulation speed
    if keys.just_pressed(KeyCode::BracketLeft) {
        clock.slower();
        info!("Time scale: {}x", clock.scale);
    }
    if keys.just_pressed(KeyCode::BracketRight) {
        clock.faster();
        info!("Time scale: {}x", clock.scale);
    }

    if keys.just_pressed(KeyCode::KeyG) {
        guides.visible = !guides.visible;
    }
    if keys.just_pressed(KeyCode::KeyL) {
        labels.visible = !labels.visible;
    }
}
