//! Start menu listing the scenes.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use super::colors;
use super::icons;
use crate::types::AppScene;

const ENTRIES: [(AppScene, &str, &str); 4] = [
    (AppScene::Explorer, icons::EXPLORE, "Fly between the planets"),
    (AppScene::Learn, icons::LEARN, "Meet the planets one by one"),
    (AppScene::EarthLearn, icons::PLANET, "Visit Earth and its moon"),
    (AppScene::Quiz, icons::QUIZ, "Test what you learned"),
];

pub fn scene_menu_system(
    mut contexts: EguiContexts,
    mut next_scene: ResMut<NextState<AppScene>>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.inner_margin(egui::Margin::same(32)))
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() * 0.2);
                ui.label(
                    egui::RichText::new("Orrery")
                        .strong()
                        .size(40.0)
                        .color(colors::TEXT),
                );
                ui.add_space(24.0);

                for (scene, icon, blurb) in ENTRIES {
                    let button = egui::Button::new(
                        egui::RichText::new(format!("{}  {}", icon, scene.title()))
                            .size(18.0)
                            .color(colors::TEXT),
                    )
                    .min_size(egui::vec2(280.0, 44.0));
                    if ui.add(button).on_hover_text(blurb).clicked() {
                        info!("Opening {}", scene.title());
                        next_scene.set(scene);
                    }
                    ui.add_space(8.0);
                }
            });
        });
}
