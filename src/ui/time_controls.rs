//! Simulation controls along the bottom of the explorer, and the way back to the menu.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use super::colors;
use super::icons;
use crate::render::{GuideSettings, LabelSettings};
use crate::types::{AppScene, SimulationClock};

const PLAY_ICON: egui::Color32 = egui::Color32::from_rgb(85, 221, 136);
const PAUSE_ICON: egui::Color32 = egui::Color32::from_rgb(221, 170, 85);

/// Bottom bar: play/pause, speed and overlay toggles.
pub fn time_controls_panel(
    mut contexts: EguiContexts,
    mut clock: ResMut<SimulationClock>,
    mut guides: ResMut<GuideSettings>,
    mut labels: ResMut<LabelSettings>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::TopBottomPanel::bottom("time_controls")
        .exact_height(48.0)
        .frame(
            egui::Frame::NONE
                .fill(colors::PANEL_BG)
                .inner_margin(egui::Margin::symmetric(16, 8)),
        )
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                ui.spacing_mut().item_spacing.x = 12.0;

                let (icon, color, tooltip) = if clock.paused {
                    (icons::PLAY, PLAY_ICON, "Play (Space)")
                } else {
                    (icons::PAUSE, PAUSE_ICON, "Pause (Space)")
                };
                let button = egui::Button::new(icons::icon_colored(icon, 20.0, color))
                    .min_size(egui::vec2(36.0, 30.0));
                if ui.add(button).on_hover_text(tooltip).clicked() {
                    clock.paused = !clock.paused;
                }

                ui.separator();

                if ui
                    .button(icons::SLOWER)
                    .on_hover_text("Slower ([)")
                    .clicked()
                {
                    clock.slower();
                }
                ui.label(
                    egui::RichText::new(format!("{}x", clock.scale))
                        .monospace()
                        .size(14.0)
                        .color(colors::TEXT),
                );
                if ui
                    .button(icons::FASTER)
                    .on_hover_text("Faster (])")
                    .clicked()
                {
                    clock.faster();
                }

                ui.separator();

                ui.label(
                    egui::RichText::new(format!("Day {:.0}", clock.elapsed))
                        .monospace()
                        .size(14.0)
                        .color(colors::MUTED),
                );

                ui.separator();

                ui.toggle_value(&mut guides.visible, format!("{} Orbits", icons::ORBIT))
                    .on_hover_text("Show orbit guides (G)");
                ui.toggle_value(&mut labels.visible, format!("{} Labels", icons::LABEL))
                    .on_hover_text("Show body names (L)");
            });
        });
}

/// "Menu" button shown in every scene except the menu itself.
pub fn back_to_menu_bar(
    mut contexts: EguiContexts,
    scene: Res<State<AppScene>>,
    mut next_scene: ResMut<NextState<AppScene>>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Area::new(egui::Id::new("back_to_menu"))
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -64.0))
        .show(ctx, |ui| {
            let button = egui::Button::new(
                egui::RichText::new(format!("{}  Menu", icons::MENU))
                    .size(14.0)
                    .color(colors::TEXT),
            )
            .min_size(egui::vec2(90.0, 30.0));
            if ui.add(button).clicked() {
                info!("Leaving {}", scene.get().title());
                next_scene.set(AppScene::Menu);
            }
        });
}
