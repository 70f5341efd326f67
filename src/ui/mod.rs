//! egui overlay for every scene.
//!
//! Scene logic talks to the UI only through [`port::UiPort`]; the UI talks
//! back through [`binder::UiCommand`] messages and plain resources.

pub mod binder;
pub mod icons;
mod info_card;
mod loading;
mod planet_menu;
pub mod port;
mod quiz_panel;
mod scene_menu;
mod time_controls;
mod tour_panel;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::bodies::BodyRegistry;
use crate::scenes::learn::{TourFinale, WalkingTour};
use crate::scenes::quiz::ActiveQuiz;
use crate::types::AppScene;

pub use binder::UiCommand;
pub use port::{PanelState, UiPort};

/// Colors shared by the panels.
mod colors {
    use bevy_egui::egui::Color32;

    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(20, 20, 30, 230);
    pub const CARD_BORDER: Color32 = Color32::from_rgb(60, 60, 80);
    pub const ACCENT: Color32 = Color32::from_rgb(85, 153, 221);
    pub const SUCCESS: Color32 = Color32::from_rgb(85, 176, 85);
    pub const DANGER: Color32 = Color32::from_rgb(224, 85, 85);
    pub const TEXT: Color32 = Color32::from_rgb(220, 220, 230);
    pub const MUTED: Color32 = Color32::from_rgb(140, 140, 155);
}

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<icons::FontsInitialized>()
            .add_message::<UiCommand>()
            // Font initialization MUST run before any UI systems that use icons
            .add_systems(EguiPrimaryContextPass, icons::setup_fonts)
            .add_systems(
                EguiPrimaryContextPass,
                (
                    scene_menu::scene_menu_system.run_if(in_state(AppScene::Menu)),
                    time_controls::back_to_menu_bar.run_if(not(in_state(AppScene::Menu))),
                    loading::loading_overlay,
                )
                    .after(icons::setup_fonts)
                    .run_if(icons::fonts_ready),
            )
            .add_systems(
                EguiPrimaryContextPass,
                (
                    planet_menu::planet_menu_system,
                    time_controls::time_controls_panel,
                    info_card::info_card_system,
                )
                    .after(icons::setup_fonts)
                    .run_if(
                        icons::fonts_ready
                            .and(in_state(AppScene::Explorer))
                            .and(resource_exists::<BodyRegistry>)
                            .and(resource_exists::<PanelState>),
                    ),
            )
            .add_systems(
                EguiPrimaryContextPass,
                tour_panel::tour_panel_system
                    .after(icons::setup_fonts)
                    .run_if(
                        icons::fonts_ready
                            .and(in_state(AppScene::Learn))
                            .and(resource_exists::<WalkingTour>)
                            .and(resource_exists::<TourFinale>),
                    ),
            )
            .add_systems(
                EguiPrimaryContextPass,
                quiz_panel::quiz_panel_system
                    .after(icons::setup_fonts)
                    .run_if(
                        icons::fonts_ready
                            .and(in_state(AppScene::Quiz))
                            .and(resource_exists::<ActiveQuiz>),
                    ),
            );
    }
}
