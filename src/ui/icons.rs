//! Phosphor icon definitions for the UI.
//!
//! Icons are registered with egui by `setup_fonts` on the first UI frame.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

/// Resource to track if fonts have been initialized.
#[derive(Resource, Default)]
pub struct FontsInitialized(pub bool);

/// System to initialize Phosphor icon fonts.
/// Runs in EguiPrimaryContextPass where the egui context is guaranteed to be ready.
pub fn setup_fonts(mut contexts: EguiContexts, mut initialized: ResMut<FontsInitialized>) {
    if initialized.0 {
        return;
    }

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);

    ctx.set_fonts(fonts);
    initialized.0 = true;

    info!("Phosphor icon fonts initialized");
}

/// Run condition for systems that draw icons.
pub fn fonts_ready(initialized: Res<FontsInitialized>) -> bool {
    initialized.0
}

// Browse all icons at https://phosphoricons.com/

pub const PLAY: &str = egui_phosphor::regular::PLAY;
pub const PAUSE: &str = egui_phosphor::regular::PAUSE;
/// Fly back to the overview
pub const RESET: &str = egui_phosphor::regular::ARROW_COUNTER_CLOCKWISE;
/// Back to the scene menu
pub const MENU: &str = egui_phosphor::regular::LIST;
pub const CLOSE: &str = egui_phosphor::regular::X;
pub const SLOWER: &str = egui_phosphor::regular::REWIND;
pub const FASTER: &str = egui_phosphor::regular::FAST_FORWARD;
pub const ORBIT: &str = egui_phosphor::regular::PATH;
pub const LABEL: &str = egui_phosphor::regular::TAG;

// Bodies
pub const SUN: &str = egui_phosphor::regular::SUN;
pub const PLANET: &str = egui_phosphor::regular::GLOBE;

// Scenes
pub const EXPLORE: &str = egui_phosphor::regular::PLANET;
pub const LEARN: &str = egui_phosphor::regular::BOOK_OPEN;
pub const QUIZ: &str = egui_phosphor::regular::QUESTION;

pub const ARROW_RIGHT: &str = egui_phosphor::regular::ARROW_RIGHT;
pub const CORRECT: &str = egui_phosphor::regular::CHECK_CIRCLE;
pub const WRONG: &str = egui_phosphor::regular::X_CIRCLE;
pub const TROPHY: &str = egui_phosphor::regular::TROPHY;

/// Icon glyph at `size` in `color`.
pub fn icon_colored(icon: &str, size: f32, color: egui::Color32) -> egui::RichText {
    egui::RichText::new(icon).size(size).color(color)
}
