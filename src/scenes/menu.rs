//! Start menu scene. The buttons themselves live in the UI layer.

use bevy::prelude::*;

use crate::types::{AppScene, SceneEntity, despawn_scene_entities};

const SCENE: AppScene = AppScene::Menu;

pub struct MenuPlugin;

impl Plugin for MenuPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(SCENE), spawn_overlay_camera(SCENE))
            .add_systems(OnExit(SCENE), despawn_scene_entities(SCENE));
    }
}

/// Spawn a plain 2D camera for scenes that are egui only.
pub fn spawn_overlay_camera(scene: AppScene) -> impl FnMut(Commands) {
    move |mut commands: Commands| {
        commands.spawn((
            Camera2d,
            Camera {
                clear_color: ClearColorConfig::Custom(Color::srgb(0.02, 0.02, 0.06)),
                ..default()
            },
            SceneEntity(scene),
        ));
        debug!("Overlay camera spawned for {:?}", scene);
    }
}
