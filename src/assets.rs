//! Tracking of asynchronous texture loads.
//!
//! Meshes are spawned immediately with a plain color material. Each textured
//! mesh carries a [`PendingTexture`] until its image settles; the texture is
//! then attached to the material, or the failure is logged and the mesh keeps
//! its fallback color. Nothing here retries or times out.

use std::collections::HashMap;

use bevy::asset::LoadState;
use bevy::prelude::*;

/// Plugin providing texture attachment and load progress.
pub struct AssetTrackingPlugin;

impl Plugin for AssetTrackingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LoadTracker>()
            .add_systems(Update, attach_loaded_textures);
    }
}

/// Which material slot a texture fills.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextureSlot {
    BaseColor,
    Emissive,
}

/// A texture still on its way to the material of this entity.
#[derive(Component, Clone, Debug)]
pub struct PendingTexture {
    pub path: &'static str,
    pub image: Handle<Image>,
    pub slot: TextureSlot,
}

impl PendingTexture {
    /// Request `path` and record it in `tracker`.
    pub fn request(
        asset_server: &AssetServer,
        tracker: &mut LoadTracker,
        path: &'static str,
        slot: TextureSlot,
    ) -> Self {
        tracker.begin(path);
        Self {
            path,
            image: asset_server.load(path),
            slot,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadStatus {
    Pending,
    Loaded,
    Failed,
}

/// Progress of every tracked load in the active scene.
#[derive(Resource, Default, Debug)]
pub struct LoadTracker {
    entries: HashMap<&'static str, LoadStatus>,
}

impl LoadTracker {
    /// Start tracking `path`. Already-settled paths are left alone.
    pub fn begin(&mut self, path: &'static str) {
        self.entries.entry(path).or_insert(LoadStatus::Pending);
    }

    pub fn finish(&mut self, path: &'static str, status: LoadStatus) {
        self.entries.insert(path, status);
    }

    pub fn status(&self, path: &str) -> Option<LoadStatus> {
        self.entries.get(path).copied()
    }

    fn count(&self, status: LoadStatus) -> usize {
        self.entries.values().filter(|s| **s == status).count()
    }

    pub fn failed(&self) -> usize {
        self.count(LoadStatus::Failed)
    }

    /// Fraction of tracked loads that have settled, 1.0 when nothing is tracked.
    pub fn progress(&self) -> f32 {
        if self.entries.is_empty() {
            return 1.0;
        }
        let settled = self.entries.len() - self.count(LoadStatus::Pending);
        settled as f32 / self.entries.len() as f32
    }

    /// True once no tracked load is pending.
    pub fn is_settled(&self) -> bool {
        self.count(LoadStatus::Pending) == 0
    }

    /// Forget every load, returning how many were still pending.
    pub fn cancel_all(&mut self) -> usize {
        let pending = self.count(LoadStatus::Pending);
        self.entries.clear();
        pending
    }
}

/// Attach settled textures to their materials.
fn attach_loaded_textures(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut tracker: ResMut<LoadTracker>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    pending: Query<(Entity, &PendingTexture, &MeshMaterial3d<StandardMaterial>)>,
) {
    for (entity, texture, material) in pending.iter() {
        match asset_server.load_state(texture.image.id()) {
            LoadState::Loaded => {
                if let Some(mut material) = materials.get_mut(&material.0) {
                    match texture.slot {
                        TextureSlot::BaseColor => {
                            // Keep the fallback's opacity for translucent meshes.
                            let alpha = material.base_color.alpha();
                            material.base_color = Color::WHITE.with_alpha(alpha);
                            material.base_color_texture = Some(texture.image.clone());
                        }
                        TextureSlot::Emissive => {
                            material.emissive_texture = Some(texture.image.clone());
                        }
                    }
                }
                tracker.finish(texture.path, LoadStatus::Loaded);
                commands.entity(entity).remove::<PendingTexture>();
            }
            LoadState::Failed(err) => {
                warn!("Failed to load texture {}: {}", texture.path, err);
                tracker.finish(texture.path, LoadStatus::Failed);
                commands.entity(entity).remove::<PendingTexture>();
            }
            _ => {}
        }
    }
}

/// Drop tracked loads when a scene tears down.
pub fn cancel_pending_loads(mut tracker: ResMut<LoadTracker>) {
    let pending = tracker.cancel_all();
    if pending > 0 {
        info!("Cancelled {} pending asset loads", pending);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tracker_is_settled() {
        let tracker = LoadTracker::default();
        assert!(tracker.is_settled());
        assert_eq!(tracker.progress(), 1.0);
    }

    #[test]
    fn test_progress_counts_failures_as_settled() {
        let mut tracker = LoadTracker::default();
        tracker.begin("a.jpg");
        tracker.begin("b.jpg");
        tracker.begin("c.jpg");
        tracker.begin("d.jpg");
        tracker.finish("a.jpg", LoadStatus::Loaded);
        tracker.finish("b.jpg", LoadStatus::Failed);
        assert_eq!(tracker.progress(), 0.5);
        assert!(!tracker.is_settled());
        assert_eq!(tracker.failed(), 1);
    }

    #[test]
    fn test_shared_path_is_tracked_once() {
        let mut tracker = LoadTracker::default();
        tracker.begin("moon.jpg");
        tracker.finish("moon.jpg", LoadStatus::Loaded);
        tracker.begin("moon.jpg");
        assert_eq!(tracker.status("moon.jpg"), Some(LoadStatus::Loaded));
    }

    #[test]
    fn test_cancel_reports_pending() {
        let mut tracker = LoadTracker::default();
        tracker.begin("a.jpg");
        tracker.begin("b.jpg");
        tracker.finish("a.jpg", LoadStatus::Loaded);
        assert_eq!(tracker.cancel_all(), 1);
        assert!(tracker.is_settled());
    }
}
