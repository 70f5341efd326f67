//! Earth Learn scene: a close-up of Earth with its moon, satellites and nearby rocks.

use bevy::prelude::*;
use rand::Rng;

use super::learn::{Spin, spin_bodies};
use crate::assets::{LoadTracker, PendingTexture, TextureSlot, cancel_pending_loads};
use crate::audio;
use crate::camera::{CameraRig, OrbitControls, ZoomBounds, spawn_main_camera};
use crate::character::{self, AnimationSwitch, CharacterAnimations, play_clip_once};
use crate::types::{AppScene, SceneEntity, despawn_scene_entities};

const SCENE: AppScene = AppScene::EarthLearn;

/// Axial tilt of the Earth group, degrees.
pub const EARTH_TILT_DEGREES: f32 = -23.4;

const EARTH_RADIUS: f32 = 6.0;

/// Random rocks keep at least this far from Earth's center.
pub const MIN_ASTEROID_DISTANCE: f32 = 10.0;

const RANDOM_ASTEROIDS: usize = 5;

/// Seconds before the character sits down.
pub const SIT_DOWN_AFTER_SECS: f64 = 30.0;

const ASTEROID_MODEL: &str = "earth_learn/asteroid.glb";
const SATELLITE_MODEL: &str = "earth_learn/satellite.glb";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AsteroidPlacement {
    pub position: Vec3,
    pub scale: Vec3,
}

/// Rejection-sample a rock position in the box around Earth.
pub fn sample_asteroid<R: Rng + ?Sized>(rng: &mut R) -> AsteroidPlacement {
    let position = loop {
        let candidate = Vec3::new(
            rng.gen_range(-15.0..15.0),
            rng.gen_range(-15.0..15.0),
            rng.gen_range(-5.0..5.0),
        );
        if candidate.length() >= MIN_ASTEROID_DISTANCE {
            break candidate;
        }
    };
    let scale = Vec3::new(
        rng.gen_range(0.0005..0.0007),
        rng.gen_range(0.0005..0.0007),
        rng.gen_range(0.0005..0.0007),
    );
    AsteroidPlacement { position, scale }
}

/// Rocks placed by hand, ahead of the random ones.
const FIXED_ASTEROIDS: [AsteroidPlacement; 2] = [
    AsteroidPlacement {
        position: Vec3::new(-7.0, -10.0, 2.0),
        scale: Vec3::splat(0.0019),
    },
    AsteroidPlacement {
        position: Vec3::new(3.0, 10.0, 2.0),
        scale: Vec3::splat(0.001),
    },
];

/// When the character should switch from talking to sitting.
#[derive(Resource, Clone, Debug)]
pub struct CharacterCue {
    pub started_at: f64,
    pub switch: AnimationSwitch,
}

pub struct EarthLearnPlugin;

impl Plugin for EarthLearnPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(SCENE), setup_earth_learn)
            .add_systems(
                OnExit(SCENE),
                (
                    despawn_scene_entities(SCENE),
                    teardown_earth_learn,
                    cancel_pending_loads,
                ),
            )
            .add_systems(
                Update,
                (spin_bodies, sit_down_when_due).run_if(in_state(SCENE)),
            );
    }
}

fn layer_material(
    materials: &mut Assets<StandardMaterial>,
    color: Color,
    alpha_mode: AlphaMode,
    unlit: bool,
) -> Handle<StandardMaterial> {
    materials.add(StandardMaterial {
        base_color: color,
        alpha_mode,
        unlit,
        ..default()
    })
}

fn setup_earth_learn(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut graphs: ResMut<Assets<AnimationGraph>>,
    asset_server: Res<AssetServer>,
    mut tracker: ResMut<LoadTracker>,
    time: Res<Time>,
) {
    spawn_main_camera(
        &mut commands,
        SCENE,
        Vec3::new(-3.0, 3.0, 25.0),
        Vec3::ZERO,
        CameraRig {
            fov_degrees: 50.0,
            far: 2000.0,
            bloom: false,
        },
    );
    commands.insert_resource(OrbitControls {
        rotate_enabled: false,
        bounds: ZoomBounds::new(10.0, 25.0),
        ..default()
    });
    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(0.0, 2.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
        SceneEntity(SCENE),
    ));

    let sphere = meshes.add(Sphere::new(EARTH_RADIUS).mesh().uv(64, 32));
    let day = layer_material(&mut materials, Color::srgb(0.2, 0.35, 0.7), AlphaMode::Opaque, false);
    let night = layer_material(&mut materials, Color::BLACK, AlphaMode::Add, true);
    let clouds = layer_material(&mut materials, Color::BLACK, AlphaMode::Add, false);
    let glow = layer_material(&mut materials, Color::srgba(0.0, 0.35, 1.0, 0.25), AlphaMode::Add, true);

    // Additive shells stay black until their texture arrives.
    // Each shell: material, texture, scale, spin in rad/s.
    let layers = [
        (day, Some("earth_learn/textures/earth_daymap.jpg"), 1.0, 0.12),
        (night, Some("earth_learn/textures/earth_nightmap.jpg"), 1.0, 0.12),
        (clouds, Some("earth_learn/textures/earth_clouds.jpg"), 1.003, 0.138),
        (glow, None, 1.01, 0.12),
    ];

    commands
        .spawn((
            Transform::from_xyz(0.0, 2.0, 0.0)
                .with_rotation(Quat::from_rotation_z(EARTH_TILT_DEGREES.to_radians())),
            Visibility::default(),
            Spin(0.12),
            SceneEntity(SCENE),
        ))
        .with_children(|earth| {
            for (material, texture, scale, spin) in layers {
                let mut layer = earth.spawn((
                    Mesh3d(sphere.clone()),
                    MeshMaterial3d(material),
                    Transform::from_scale(Vec3::splat(scale)),
                    Spin(spin),
                ));
                if let Some(path) = texture {
                    layer.insert(PendingTexture::request(
                        &asset_server,
                        &mut tracker,
                        path,
                        TextureSlot::BaseColor,
                    ));
                }
            }

            earth
                .spawn((Transform::default(), Visibility::default(), Spin(0.48)))
                .with_child((
                    Mesh3d(meshes.add(Sphere::new(1.0).mesh().uv(32, 16))),
                    MeshMaterial3d(layer_material(
                        &mut materials,
                        Color::srgb(0.7, 0.7, 0.7),
                        AlphaMode::Opaque,
                        false,
                    )),
                    Transform::from_xyz(10.0, 0.0, 0.0),
                    PendingTexture::request(
                        &asset_server,
                        &mut tracker,
                        "earth_learn/textures/moon.jpg",
                        TextureSlot::BaseColor,
                    ),
                ));
        });

    let satellite_rotation = Quat::from_euler(
        EulerRot::XYZ,
        std::f32::consts::FRAC_PI_2,
        std::f32::consts::PI,
        std::f32::consts::FRAC_PI_2,
    );
    for (position, scale) in [(Vec3::new(-10.0, 2.0, 0.0), 0.00019), (Vec3::new(15.0, 5.0, 0.0), 0.0019)] {
        commands.spawn((
            SceneRoot(asset_server.load(GltfAssetLabel::Scene(0).from_asset(SATELLITE_MODEL))),
            Transform::from_translation(position)
                .with_rotation(satellite_rotation)
                .with_scale(Vec3::splat(scale)),
            SceneEntity(SCENE),
        ));
    }

    let mut rng = rand::thread_rng();
    let asteroid_scene = asset_server.load(GltfAssetLabel::Scene(0).from_asset(ASTEROID_MODEL));
    let placements = FIXED_ASTEROIDS
        .into_iter()
        .chain((0..RANDOM_ASTEROIDS).map(|_| sample_asteroid(&mut rng)));
    for placement in placements {
        commands.spawn((
            SceneRoot(asteroid_scene.clone()),
            Transform::from_translation(placement.position).with_scale(placement.scale),
            SceneEntity(SCENE),
        ));
    }

    character::spawn_character(
        &mut commands,
        &asset_server,
        &mut graphs,
        "earth_learn/character.glb",
        2,
        Transform::from_xyz(-13.0, -9.0, -2.0).with_scale(Vec3::splat(0.124)),
        SCENE,
    );
    commands.insert_resource(CharacterCue {
        started_at: time.elapsed_secs_f64(),
        switch: AnimationSwitch::new(SIT_DOWN_AFTER_SECS),
    });

    audio::play_music(&mut commands, &asset_server, SCENE, "earth_learn/earth.ogg", 0.9, 1.0);
    info!("Earth close-up ready");
}

fn teardown_earth_learn(mut commands: Commands) {
    commands.remove_resource::<OrbitControls>();
    commands.remove_resource::<CharacterCue>();
    commands.remove_resource::<CharacterAnimations>();
}

/// Swap the talking loop for a single sitting clip once the cue fires.
fn sit_down_when_due(
    time: Res<Time>,
    cue: Option<ResMut<CharacterCue>>,
    animations: Option<Res<CharacterAnimations>>,
    mut players: Query<&mut AnimationPlayer, With<AnimationGraphHandle>>,
) {
    let (Some(mut cue), Some(animations)) = (cue, animations) else {
        return;
    };
    let elapsed = time.elapsed_secs_f64() - cue.started_at;
    if cue.switch.poll(elapsed) {
        play_clip_once(&animations, &mut players, 1);
        info!("Character sits down");
    }
}
