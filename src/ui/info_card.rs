//! Fact card for the body the camera has landed on.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use super::colors;
use super::icons;
use super::port::{PanelState, UiPort};
use crate::bodies::BodyRegistry;
use crate::bodies::data::body_facts;

pub fn info_card_system(
    mut contexts: EguiContexts,
    mut panel: ResMut<PanelState>,
    registry: Res<BodyRegistry>,
) {
    let Some(name) = panel.info_body.clone() else {
        return;
    };
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut close = false;
    egui::Window::new("info_card")
        .title_bar(false)
        .resizable(false)
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-16.0, 16.0))
        .frame(
            egui::Frame::NONE
                .fill(colors::PANEL_BG)
                .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
                .corner_radius(8.0)
                .inner_margin(egui::Margin::same(14)),
        )
        .show(ctx, |ui| {
            ui.set_max_width(240.0);
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&name).strong().size(18.0).color(colors::TEXT));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let button = egui::Button::new(icons::icon_colored(
                        icons::CLOSE,
                        14.0,
                        colors::MUTED,
                    ))
                    .frame(false);
                    if ui.add(button).clicked() {
                        close = true;
                    }
                });
            });
            ui.separator();

            if let Some(body) = registry.by_name(&name) {
                ui.label(format!("Orbital period: {:.0} days", body.orbital_period_days));
                ui.label(format!(
                    "Rotation period: {:.2} days{}",
                    body.rotation_period_days.abs(),
                    if body.rotation_period_days < 0.0 { " (retrograde)" } else { "" }
                ));
                ui.label(format!("Inclination: {:.1}°", body.inclination_degrees));
            }

            match body_facts(&name) {
                Some(facts) => {
                    ui.label(format!("Known moons: {}", facts.known_moons));
                    ui.label(format!("Rings: {}", if facts.has_rings { "yes" } else { "no" }));
                    ui.label(format!("Surface gravity: {:.2} g", facts.surface_gravity_g));
                    ui.label(format!("Day length: {:.1} h", facts.day_length_hours));
                    ui.label(format!("Distance from Sun: {:.2} AU", facts.distance_au));
                    ui.add_space(6.0);
                    ui.label(
                        egui::RichText::new(facts.fun_fact)
                            .italics()
                            .color(colors::ACCENT),
                    );
                }
                None => {
                    ui.label(egui::RichText::new("No facts on file").color(colors::MUTED));
                }
            }
        });

    if close {
        panel.hide_info_panel();
    }
}
