//! Background music and per-planet beats.

use bevy::audio::Volume;
use bevy::prelude::*;

use crate::types::{AppScene, SceneEntity};

/// A beat tied to the currently selected planet.
#[derive(Component)]
pub struct BeatPlayer;

/// Beats play through once and clean up after themselves.
pub const BEAT_PLAYBACK: PlaybackSettings = PlaybackSettings::DESPAWN;

/// Looping background track of a scene.
#[derive(Component)]
pub struct SceneMusic;

/// Play a beat once, cutting off whatever beat was playing.
pub fn play_beat(
    commands: &mut Commands,
    asset_server: &AssetServer,
    playing: impl IntoIterator<Item = Entity>,
    scene: AppScene,
    path: &'static str,
) {
    stop_beats(commands, playing);
    commands.spawn((
        AudioPlayer::new(asset_server.load(path)),
        BEAT_PLAYBACK,
        BeatPlayer,
        SceneEntity(scene),
    ));
    debug!("Playing beat {}", path);
}

pub fn stop_beats(commands: &mut Commands, playing: impl IntoIterator<Item = Entity>) {
    for entity in playing {
        commands.entity(entity).despawn();
    }
}

/// Start a looping scene track at the given playback speed.
pub fn play_music(
    commands: &mut Commands,
    asset_server: &AssetServer,
    scene: AppScene,
    path: &'static str,
    speed: f32,
    volume: f32,
) {
    commands.spawn((
        AudioPlayer::new(asset_server.load(path)),
        PlaybackSettings::LOOP
            .with_speed(speed)
            .with_volume(Volume::Linear(volume)),
        SceneMusic,
        SceneEntity(scene),
    ));
    info!("Playing {} at {}x", path, speed);
}
