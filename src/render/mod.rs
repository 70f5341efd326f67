//! Rendering helpers for registry-driven scenes.
//!
//! Body meshes, orbit guides, labels and the space backdrop.

pub mod background;
pub mod bodies;
pub mod guides;
pub mod labels;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::bodies::BodyRegistry;

pub use self::bodies::{BodyVisual, spawn_body_visuals, sync_body_transforms};
pub use self::guides::GuideSettings;
pub use self::labels::LabelSettings;

/// Plugin drawing guides and labels whenever a body registry is live.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GuideSettings>()
            .init_resource::<LabelSettings>()
            .add_systems(
                Update,
                (sync_body_transforms, guides::draw_guides)
                    .chain()
                    .run_if(resource_exists::<BodyRegistry>),
            )
            .add_systems(
                EguiPrimaryContextPass,
                labels::draw_body_labels.run_if(resource_exists::<BodyRegistry>),
            );
    }
}
