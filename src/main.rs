//! Orrery - an interactive solar system
//!
//! A desktop application for exploring the planets, taking a guided tour
//! and testing what you learned in a short quiz.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use orrery::assets::AssetTrackingPlugin;
use orrery::camera::CameraPlugin;
use orrery::character::CharacterPlugin;
use orrery::render::RenderPlugin;
use orrery::scenes::{EarthLearnPlugin, ExplorerPlugin, LearnPlugin, MenuPlugin, QuizPlugin};
use orrery::time::TimePlugin;
use orrery::types::AppScene;
use orrery::ui::UiPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Orrery".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        .init_state::<AppScene>()
        // Shared infrastructure
        .add_plugins((
            TimePlugin,
            CameraPlugin,
            RenderPlugin,
            AssetTrackingPlugin,
            CharacterPlugin,
            UiPlugin,
        ))
        // One plugin per scene
        .add_plugins((
            MenuPlugin,
            ExplorerPlugin,
            LearnPlugin,
            EarthLearnPlugin,
            QuizPlugin,
        ))
        .run();
}
