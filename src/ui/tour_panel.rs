//! Walking tour controls and the closing card.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use super::colors;
use super::icons;
use crate::scenes::learn::{TOUR, TourFinale, WalkingTour};
use crate::types::AppScene;

pub fn tour_panel_system(
    mut contexts: EguiContexts,
    time: Res<Time<Real>>,
    mut tour: ResMut<WalkingTour>,
    finale: Res<TourFinale>,
    mut next_scene: ResMut<NextState<AppScene>>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    if finale.shown {
        egui::Window::new("tour_finale")
            .title_bar(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .frame(
                egui::Frame::NONE
                    .fill(colors::PANEL_BG)
                    .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
                    .corner_radius(10.0)
                    .inner_margin(egui::Margin::same(24)),
            )
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(icons::icon_colored(icons::TROPHY, 36.0, colors::ACCENT));
                    ui.label(
                        egui::RichText::new("Congratulations!")
                            .strong()
                            .size(22.0)
                            .color(colors::TEXT),
                    );
                    ui.label("You met every planet. Where to next?");
                    ui.add_space(12.0);
                    ui.horizontal(|ui| {
                        if ui
                            .add(egui::Button::new("Explorer").min_size(egui::vec2(110.0, 32.0)))
                            .clicked()
                        {
                            next_scene.set(AppScene::Explorer);
                        }
                        if ui
                            .add(egui::Button::new("Quiz").min_size(egui::vec2(110.0, 32.0)))
                            .clicked()
                        {
                            next_scene.set(AppScene::Quiz);
                        }
                    });
                });
            });
        return;
    }

    let on_stage = tour.current().checked_sub(1).and_then(|i| TOUR.get(i));
    let up_next = TOUR.get(tour.current());

    egui::Area::new(egui::Id::new("tour_controls"))
        .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -24.0))
        .show(ctx, |ui| {
            egui::Frame::NONE
                .fill(colors::PANEL_BG)
                .corner_radius(8.0)
                .inner_margin(egui::Margin::symmetric(16, 10))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        let title = on_stage.map_or("Welcome to the planet tour", |s| s.name);
                        ui.label(egui::RichText::new(title).strong().size(16.0).color(colors::TEXT));
                        let (label, hover) = match up_next {
                            Some(next) => (
                                format!("{}  {}", next.name, icons::ARROW_RIGHT),
                                "Bring the next planet forward",
                            ),
                            None => (format!("Finish  {}", icons::TROPHY), "End the tour"),
                        };
                        let button = egui::Button::new(egui::RichText::new(label).size(15.0))
                            .min_size(egui::vec2(120.0, 30.0));
                        let clicked = ui
                            .add_enabled(!tour.is_moving(), button)
                            .on_hover_text(hover)
                            .clicked();
                        if clicked && tour.advance(time.elapsed_secs_f64()) {
                            debug!("Tour step from stop {}", tour.current());
                        }
                    });
                });
        });
}
