//! Progress overlay while scene textures are still arriving.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use super::colors;
use crate::assets::LoadTracker;

pub fn loading_overlay(mut contexts: EguiContexts, tracker: Res<LoadTracker>) {
    if tracker.is_settled() {
        return;
    }
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Area::new(egui::Id::new("loading_overlay"))
        .anchor(egui::Align2::CENTER_TOP, egui::vec2(0.0, 24.0))
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::NONE
                .fill(colors::PANEL_BG)
                .corner_radius(6.0)
                .inner_margin(egui::Margin::symmetric(16, 10))
                .show(ui, |ui| {
                    ui.label(egui::RichText::new("Loading textures...").color(colors::TEXT));
                    ui.add(
                        egui::ProgressBar::new(tracker.progress())
                            .desired_width(220.0)
                            .show_percentage(),
                    );
                    if tracker.failed() > 0 {
                        ui.label(
                            egui::RichText::new(format!("{} failed", tracker.failed()))
                                .size(11.0)
                                .color(colors::DANGER),
                        );
                    }
                });
        });
}
