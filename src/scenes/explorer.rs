//! Explorer scene: the full solar system with focus flights.

use std::f64::consts::TAU;
use std::ops::Range;

use bevy::prelude::*;
use rand::Rng;

use crate::assets::{LoadTracker, cancel_pending_loads};
use crate::bodies::data::{BELT_INNER, BELT_OUTER};
use crate::bodies::{BodyRegistry, SOLAR_SYSTEM};
use crate::camera::{
    CameraDirector, CameraSystemSet, MainCamera, OrbitControls, apply_pose, spawn_main_camera,
    CameraRig,
};
use crate::orbit::{BeltRotation, advance_belt, advance_bodies};
use crate::render::{background, spawn_body_visuals, sync_body_transforms};
use crate::time::ClockSystemSet;
use crate::types::{
    AppScene, DEFAULT_CAMERA_POSITION, DEFAULT_LOOK_AT, SceneEntity, SimulationClock,
    despawn_scene_entities, to_render,
};
use crate::ui::binder::{UiCommand, apply_ui_commands};
use crate::ui::port::PanelState;

const SCENE: AppScene = AppScene::Explorer;

/// Asteroid belt layout.
#[derive(Resource, Clone, Debug)]
pub struct BeltSettings {
    pub count: usize,
    pub radius: Range<f64>,
    pub size: Range<f64>,
    /// Maximum distance above or below the ecliptic.
    pub vertical_jitter: f64,
    /// Radians per day of scaled time.
    pub rotation_rate: f64,
}

impl Default for BeltSettings {
    fn default() -> Self {
        Self {
            count: 2000,
            radius: BELT_INNER..BELT_OUTER,
            size: 5.0..105.0,
            vertical_jitter: 25.0,
            rotation_rate: 0.05,
        }
    }
}

/// Parent of every belt rock; rotates as one rigid group.
#[derive(Component)]
pub struct BeltGroup;

/// Placement of a single belt rock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BeltRock {
    pub position: Vec3,
    pub size: f32,
}

/// Draw a random rock placement inside the belt.
pub fn sample_belt_rock<R: Rng + ?Sized>(rng: &mut R, settings: &BeltSettings) -> BeltRock {
    let angle = rng.gen_range(0.0..TAU);
    let radius = rng.gen_range(settings.radius.clone());
    let height = rng.gen_range(-settings.vertical_jitter..=settings.vertical_jitter);
    BeltRock {
        position: Vec3::new(
            (radius * angle.cos()) as f32,
            height as f32,
            (radius * angle.sin()) as f32,
        ),
        size: rng.gen_range(settings.size.clone()) as f32,
    }
}

pub struct ExplorerPlugin;

impl Plugin for ExplorerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BeltSettings>()
            .add_systems(OnEnter(SCENE), setup_explorer)
            .add_systems(
                OnExit(SCENE),
                (despawn_scene_entities(SCENE), teardown_explorer, cancel_pending_loads),
            )
            .add_systems(
                Update,
                (
                    (advance_bodies.before(sync_body_transforms), advance_belt, rotate_belt)
                        .chain()
                        .after(ClockSystemSet),
                    cancel_on_escape,
                    (apply_ui_commands, drive_camera)
                        .chain()
                        .in_set(CameraSystemSet::Director)
                        .after(sync_body_transforms),
                )
                    .run_if(in_state(SCENE).and(resource_exists::<BodyRegistry>)),
            );
    }
}

fn setup_explorer(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
    mut tracker: ResMut<LoadTracker>,
    mut clock: ResMut<SimulationClock>,
    belt: Res<BeltSettings>,
) {
    clock.reset();
    let mut rng = rand::thread_rng();
    let registry = match BodyRegistry::from_descriptor(&SOLAR_SYSTEM, &mut rng) {
        Ok(registry) => registry,
        Err(err) => {
            error!("Cannot build the solar system: {}", err);
            return;
        }
    };

    spawn_main_camera(
        &mut commands,
        SCENE,
        to_render(DEFAULT_CAMERA_POSITION),
        to_render(DEFAULT_LOOK_AT),
        CameraRig {
            fov_degrees: 75.0,
            far: 1.0e7,
            bloom: true,
        },
    );
    background::spawn_star_sphere(
        &mut commands,
        &mut meshes,
        &mut materials,
        &asset_server,
        &mut tracker,
        SCENE,
    );
    background::spawn_starfield(&mut commands, &mut meshes, &mut materials, SCENE);
    background::spawn_sunlight(&mut commands, SCENE);
    spawn_body_visuals(
        &mut commands,
        &mut meshes,
        &mut materials,
        &asset_server,
        &mut tracker,
        &registry,
        SCENE,
    );
    spawn_asteroid_belt(&mut commands, &mut meshes, &mut materials, &belt, &mut rng);

    commands.insert_resource(BeltRotation {
        angle: 0.0,
        rate: belt.rotation_rate,
    });
    commands.insert_resource(OrbitControls {
        target: DEFAULT_LOOK_AT,
        ..default()
    });
    commands.insert_resource(CameraDirector::default());
    commands.insert_resource(PanelState::default());
    info!("Explorer ready with {} bodies", registry.len());
    commands.insert_resource(registry);
}

fn spawn_asteroid_belt<R: Rng + ?Sized>(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    settings: &BeltSettings,
    rng: &mut R,
) {
    let rock_mesh = meshes.add(Sphere::new(1.0).mesh().uv(8, 6));
    let rock_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.45, 0.42, 0.4),
        perceptual_roughness: 1.0,
        ..default()
    });

    commands
        .spawn((
            BeltGroup,
            Transform::default(),
            Visibility::default(),
            SceneEntity(SCENE),
        ))
        .with_children(|belt| {
            for _ in 0..settings.count {
                let rock = sample_belt_rock(rng, settings);
                belt.spawn((
                    Mesh3d(rock_mesh.clone()),
                    MeshMaterial3d(rock_material.clone()),
                    Transform::from_translation(rock.position).with_scale(Vec3::splat(rock.size)),
                ));
            }
        });
    info!("Spawned {} belt rocks", settings.count);
}

fn teardown_explorer(mut commands: Commands) {
    commands.remove_resource::<BodyRegistry>();
    commands.remove_resource::<CameraDirector>();
    commands.remove_resource::<OrbitControls>();
    commands.remove_resource::<BeltRotation>();
    commands.remove_resource::<PanelState>();
}

fn rotate_belt(belt: Res<BeltRotation>, mut groups: Query<&mut Transform, With<BeltGroup>>) {
    for mut transform in groups.iter_mut() {
        transform.rotation = Quat::from_rotation_y(belt.angle as f32);
    }
}

fn cancel_on_escape(keys: Res<ButtonInput<KeyCode>>, mut ui_commands: MessageWriter<UiCommand>) {
    if keys.just_pressed(KeyCode::Escape) {
        ui_commands.write(UiCommand::CancelFlight);
    }
}

/// Let the director fly the camera, or keep the controls locked on the focused body.
fn drive_camera(
    time: Res<Time<Real>>,
    mut director: ResMut<CameraDirector>,
    mut registry: ResMut<BodyRegistry>,
    mut controls: ResMut<OrbitControls>,
    mut panel: ResMut<PanelState>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    let Ok(mut camera) = camera_query.single_mut() else {
        return;
    };
    let now = time.elapsed_secs_f64();

    if let Some(pose) = director.update(now, &mut registry, &mut controls, panel.as_mut()) {
        apply_pose(&mut camera, &pose);
        return;
    }
    if let Some(target) = director.focus_point(&registry) {
        let position = controls.retarget(target, camera.translation.as_dvec3());
        camera.translation = position.as_vec3();
    }
}
