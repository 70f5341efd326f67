//! Left-hand planet menu for the explorer.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use super::binder::{RESET_BUTTON, UiCommand};
use super::colors;
use super::icons;
use super::port::PanelState;
use crate::bodies::data::planet_names;

/// One button per planet plus the overview button. Clicks become [`UiCommand`]s.
pub fn planet_menu_system(
    mut contexts: EguiContexts,
    panel: Res<PanelState>,
    mut ui_commands: MessageWriter<UiCommand>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::SidePanel::left("planet_menu")
        .resizable(false)
        .exact_width(150.0)
        .frame(
            egui::Frame::NONE
                .fill(colors::PANEL_BG)
                .inner_margin(egui::Margin::symmetric(12, 16)),
        )
        .show(ctx, |ui| {
            ui.spacing_mut().item_spacing.y = 6.0;
            ui.label(
                egui::RichText::new("Solar System")
                    .strong()
                    .size(16.0)
                    .color(colors::TEXT),
            );
            ui.add_space(8.0);

            let buttons = std::iter::once((RESET_BUTTON, icons::SUN))
                .chain(planet_names().map(|name| (name, icons::PLANET)));
            for (name, icon) in buttons {
                let active = panel.highlighted.as_deref() == Some(name);
                let color = if active { colors::ACCENT } else { colors::TEXT };
                let text = egui::RichText::new(format!("{}  {}", icon, name))
                    .size(14.0)
                    .color(color);
                let button = egui::Button::new(if active { text.strong() } else { text })
                    .selected(active)
                    .min_size(egui::vec2(126.0, 28.0));

                let hover = if name == RESET_BUTTON {
                    "Back to the overview"
                } else {
                    "Fly to this planet"
                };
                if ui.add(button).on_hover_text(hover).clicked() {
                    ui_commands.write(UiCommand::from_button(name));
                }
            }

            ui.add_space(8.0);
            ui.label(
                egui::RichText::new("Esc cancels a flight")
                    .size(11.0)
                    .color(colors::MUTED),
            );
        });
}
