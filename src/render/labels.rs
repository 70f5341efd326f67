//! Body labels using egui for text rendering.
//!
//! Draws each body's name just above it on screen.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::bodies::{BodyKind, BodyRegistry};
use crate::camera::MainCamera;

/// Settings for label rendering.
#[derive(Resource, Clone, Debug)]
pub struct LabelSettings {
    /// Whether labels are visible (L toggles).
    pub visible: bool,
    /// Moon labels are hidden beyond this camera distance.
    pub max_moon_distance: f32,
    /// Labels float this many body radii above the center.
    pub lift_radii: f32,
    pub font_size: f32,
}

impl Default for LabelSettings {
    fn default() -> Self {
        Self {
            visible: true,
            max_moon_distance: 2000.0,
            lift_radii: 1.5,
            font_size: 14.0,
        }
    }
}

/// Draw a name label above every body in front of the camera.
pub fn draw_body_labels(
    mut contexts: EguiContexts,
    registry: Res<BodyRegistry>,
    camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    settings: Res<LabelSettings>,
) {
    if !settings.visible {
        return;
    }
    let Ok((camera, camera_transform)) = camera.single() else {
        return;
    };
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };
    let camera_position = camera_transform.translation();

    egui::Area::new(egui::Id::new("body_labels"))
        .fixed_pos(egui::pos2(0.0, 0.0))
        .order(egui::Order::Background)
        .interactable(false)
        .show(ctx, |ui| {
            let painter = ui.painter();

            for body in registry.iter() {
                let world_pos = body.position.as_vec3()
                    + Vec3::Y * body.radius as f32 * settings.lift_radii;
                if body.kind == BodyKind::Moon
                    && world_pos.distance(camera_position) > settings.max_moon_distance
                {
                    continue;
                }

                let Ok(screen_pos) = camera.world_to_viewport(camera_transform, world_pos) else {
                    continue;
                };

                let label_pos = egui::pos2(screen_pos.x, screen_pos.y);
                let font = egui::FontId::proportional(settings.font_size);

                // Shadow
                painter.text(
                    label_pos + egui::vec2(1.0, 1.0),
                    egui::Align2::CENTER_BOTTOM,
                    &body.name,
                    font.clone(),
                    egui::Color32::from_rgba_unmultiplied(0, 0, 0, 180),
                );

                painter.text(
                    label_pos,
                    egui::Align2::CENTER_BOTTOM,
                    &body.name,
                    font,
                    egui::Color32::from_rgba_unmultiplied(220, 220, 220, 230),
                );
            }
        });
}
