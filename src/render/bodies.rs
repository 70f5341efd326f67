//! Meshes for registry bodies and the per-frame transform sync.

use bevy::prelude::*;

use crate::assets::{LoadTracker, PendingTexture, TextureSlot};
use crate::bodies::{Body, BodyId, BodyKind, BodyRegistry};
use crate::types::{to_render, AppScene, SceneEntity};

/// Links a mesh entity to the registry body it shows.
#[derive(Component, Clone, Copy, Debug)]
pub struct BodyVisual(pub BodyId);

/// Spawn one textured sphere per body, plus rings where described.
pub fn spawn_body_visuals(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    asset_server: &AssetServer,
    tracker: &mut LoadTracker,
    registry: &BodyRegistry,
    scene: AppScene,
) {
    for body in registry.iter() {
        let material = materials.add(body_material(body));
        let mut entity = commands.spawn((
            Mesh3d(meshes.add(Sphere::new(body.radius as f32).mesh().uv(64, 32))),
            MeshMaterial3d(material),
            body_transform(body),
            BodyVisual(body.id),
            SceneEntity(scene),
        ));
        if !body.texture.is_empty() {
            entity.insert(PendingTexture::request(
                asset_server,
                tracker,
                body.texture,
                TextureSlot::BaseColor,
            ));
        }

        if let Some(ring) = body.ring {
            let inner = (body.radius * ring.inner_factor) as f32;
            let outer = (body.radius * ring.outer_factor) as f32;
            let ring_material = materials.add(StandardMaterial {
                base_color: Color::srgba(0.8, 0.75, 0.6, ring.opacity),
                alpha_mode: AlphaMode::Blend,
                cull_mode: None,
                double_sided: true,
                ..default()
            });
            entity.with_children(|parent| {
                parent.spawn((
                    Mesh3d(meshes.add(Annulus::new(inner, outer))),
                    MeshMaterial3d(ring_material),
                    Transform::from_rotation(Quat::from_rotation_x(std::f32::consts::FRAC_PI_2)),
                    PendingTexture::request(asset_server, tracker, ring.texture, TextureSlot::BaseColor),
                ));
            });
        }
    }
    info!("Spawned {} body meshes", registry.len());
}

fn body_material(body: &Body) -> StandardMaterial {
    let [r, g, b] = body.color;
    match body.kind {
        // The sun glows enough to trigger bloom.
        BodyKind::Star => StandardMaterial {
            base_color: Color::srgb(r, g, b),
            emissive: LinearRgba::rgb(6.0, 4.5, 1.5),
            ..default()
        },
        _ => StandardMaterial {
            base_color: Color::srgb(r, g, b),
            perceptual_roughness: 0.9,
            ..default()
        },
    }
}

fn body_transform(body: &Body) -> Transform {
    Transform::from_translation(to_render(body.position)).with_rotation(body.orientation().as_quat())
}

/// Push registry positions and spins into mesh transforms.
pub fn sync_body_transforms(
    registry: Res<BodyRegistry>,
    mut visuals: Query<(&BodyVisual, &mut Transform)>,
) {
    for (visual, mut transform) in visuals.iter_mut() {
        if let Some(body) = registry.get(visual.0) {
            *transform = body_transform(body);
        }
    }
}
