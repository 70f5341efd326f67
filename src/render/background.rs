//! Space backdrop for the explorer scene: star sphere, scattered stars and sunlight.

use bevy::prelude::*;
use rand::Rng;

use crate::assets::{LoadTracker, PendingTexture, TextureSlot};
use crate::types::{AppScene, SceneEntity};

/// Radius of the textured sphere enclosing the scene.
pub const STAR_SPHERE_RADIUS: f32 = 1.0e6;

const STAR_COUNT: usize = 500;
const STAR_SHELL: std::ops::Range<f32> = 3.0e5..8.0e5;

/// Spawn the nebula sphere, viewed from inside.
pub fn spawn_star_sphere(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    asset_server: &AssetServer,
    tracker: &mut LoadTracker,
    scene: AppScene,
) {
    let material = materials.add(StandardMaterial {
        base_color: Color::BLACK,
        unlit: true,
        cull_mode: None,
        double_sided: true,
        ..default()
    });
    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(STAR_SPHERE_RADIUS).mesh().uv(64, 32))),
        MeshMaterial3d(material),
        Transform::default(),
        PendingTexture::request(asset_server, tracker, "textures/stars.jpg", TextureSlot::BaseColor),
        SceneEntity(scene),
    ));
}

/// Spawn small emissive stars scattered on a shell around the origin.
pub fn spawn_starfield(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    scene: AppScene,
) {
    let star_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        emissive: LinearRgba::WHITE * 2.0,
        unlit: true,
        ..default()
    });
    let star_mesh = meshes.add(Sphere::new(300.0));

    let mut rng = rand::thread_rng();
    for _ in 0..STAR_COUNT {
        let direction = Vec3::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        )
        .normalize_or(Vec3::Y);
        let distance = rng.gen_range(STAR_SHELL);
        let scale = rng.gen_range(0.5..1.5);

        commands.spawn((
            Mesh3d(star_mesh.clone()),
            MeshMaterial3d(star_material.clone()),
            Transform::from_translation(direction * distance).with_scale(Vec3::splat(scale)),
            SceneEntity(scene),
        ));
    }

    info!("Spawned {} background stars", STAR_COUNT);
}

/// Point light at the sun plus a faint fill so night sides stay readable.
pub fn spawn_sunlight(commands: &mut Commands, scene: AppScene) {
    commands.spawn((
        PointLight {
            intensity: 1.0e13,
            range: 2.0e5,
            radius: 200.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(Vec3::ZERO),
        SceneEntity(scene),
    ));
    commands.spawn((
        DirectionalLight {
            illuminance: 300.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(0.0, 10000.0, 10000.0).looking_at(Vec3::ZERO, Vec3::Y),
        SceneEntity(scene),
    ));

    info!("Scene lighting initialized");
}
