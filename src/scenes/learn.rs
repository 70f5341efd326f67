//! Learn scene: a guided tour that brings the planets forward one at a time.

use bevy::prelude::*;

use crate::assets::{LoadTracker, PendingTexture, TextureSlot, cancel_pending_loads};
use crate::camera::{CameraRig, spawn_main_camera};
use crate::character::{self, CharacterAnimations};
use crate::types::{AppScene, SceneEntity, despawn_scene_entities};

const SCENE: AppScene = AppScene::Learn;

/// Seconds one tour step takes.
pub const STEP_SECS: f64 = 2.0;

/// Where the featured planet ends up.
pub const STAGE_POSITION: Vec3 = Vec3::ZERO;

/// Where the planet after the featured one waits.
pub const ON_DECK_POSITION: Vec3 = Vec3::new(30.0, 0.0, 0.0);

/// One planet of the tour.
#[derive(Clone, Copy, Debug)]
pub struct TourStop {
    pub name: &'static str,
    /// Position the planet rests at when not on stage.
    pub home: Vec3,
    pub radius: f32,
    /// Spin in radians per second.
    pub spin: f32,
    pub texture: &'static str,
}

pub const TOUR: [TourStop; 8] = [
    TourStop { name: "Mercury", home: Vec3::new(50.0, 1.0, 0.0), radius: 3.0, spin: 0.6, texture: "learn/textures/mercury.jpg" },
    TourStop { name: "Venus", home: Vec3::new(70.0, 1.0, 0.0), radius: 6.0, spin: 0.3, texture: "learn/textures/venus.jpg" },
    TourStop { name: "Earth", home: Vec3::new(90.0, 1.0, 0.0), radius: 6.0, spin: 0.18, texture: "learn/textures/earth_daymap.jpg" },
    TourStop { name: "Mars", home: Vec3::new(110.0, 1.0, 0.0), radius: 6.0, spin: 0.048, texture: "learn/textures/mars.jpg" },
    TourStop { name: "Jupiter", home: Vec3::new(130.0, 0.0, 0.0), radius: 8.0, spin: 0.036, texture: "learn/textures/jupiter.jpg" },
    TourStop { name: "Saturn", home: Vec3::new(130.0, 0.0, 0.0), radius: 4.0, spin: 0.3, texture: "learn/textures/saturn.jpg" },
    TourStop { name: "Uranus", home: Vec3::new(150.0, 1.0, 0.0), radius: 6.0, spin: 0.054, texture: "learn/textures/uranus.jpg" },
    TourStop { name: "Neptune", home: Vec3::new(150.0, 1.0, 0.0), radius: 6.0, spin: 0.3, texture: "learn/textures/neptune.jpg" },
];

#[derive(Clone, Debug)]
struct Step {
    started_at: f64,
    from: Vec<Vec3>,
    to: Vec<Vec3>,
}

/// What a call to [`WalkingTour::update`] produced.
#[derive(Clone, Debug, PartialEq)]
pub enum TourUpdate {
    Idle,
    /// Positions of every stop, in tour order.
    Moving(Vec<Vec3>),
    /// The step landed.
    Landed(Vec<Vec3>),
}

/// Tour progress: which planet is featured and whether a step is running.
#[derive(Resource, Clone, Debug)]
pub struct WalkingTour {
    homes: Vec<Vec3>,
    positions: Vec<Vec3>,
    current: usize,
    step: Option<Step>,
    finished: bool,
}

impl WalkingTour {
    pub fn new(homes: Vec<Vec3>) -> Self {
        Self {
            positions: homes.clone(),
            homes,
            current: 0,
            step: None,
            finished: false,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn is_moving(&self) -> bool {
        self.step.is_some()
    }

    /// True once every planet has been on stage.
    pub fn all_featured(&self) -> bool {
        self.current >= self.homes.len()
    }

    /// True after the click that follows the last planet.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Targets of the step featuring the current planet.
    fn targets(&self) -> Vec<Vec3> {
        self.homes
            .iter()
            .enumerate()
            .map(|(i, home)| {
                if i == self.current {
                    STAGE_POSITION
                } else if i == self.current + 1 {
                    ON_DECK_POSITION
                } else {
                    *home
                }
            })
            .collect()
    }

    /// Begin the next step, or end the tour once the last planet has been
    /// shown. Ignored while a step runs or after the finale.
    pub fn advance(&mut self, now: f64) -> bool {
        if self.is_moving() || self.finished {
            return false;
        }
        if self.all_featured() {
            self.finished = true;
            return true;
        }
        self.step = Some(Step {
            started_at: now,
            from: self.positions.clone(),
            to: self.targets(),
        });
        true
    }

    pub fn update(&mut self, now: f64) -> TourUpdate {
        let Some(step) = &self.step else {
            return TourUpdate::Idle;
        };
        let progress = ((now - step.started_at) / STEP_SECS).clamp(0.0, 1.0) as f32;
        self.positions = step
            .from
            .iter()
            .zip(&step.to)
            .map(|(from, to)| from.lerp(*to, progress))
            .collect();
        if progress < 1.0 {
            return TourUpdate::Moving(self.positions.clone());
        }

        self.positions = step.to.clone();
        self.step = None;
        self.current += 1;
        TourUpdate::Landed(self.positions.clone())
    }
}

/// Index of a tour planet's group entity.
#[derive(Component, Clone, Copy)]
pub struct TourPlanet(pub usize);

/// Constant spin about Y, radians per second.
#[derive(Component, Clone, Copy)]
pub struct Spin(pub f32);

/// The congratulation card is up.
#[derive(Resource, Default)]
pub struct TourFinale {
    pub shown: bool,
}

pub struct LearnPlugin;

impl Plugin for LearnPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(SCENE), setup_learn)
            .add_systems(
                OnExit(SCENE),
                (despawn_scene_entities(SCENE), teardown_learn, cancel_pending_loads),
            )
            .add_systems(
                Update,
                (move_tour_planets, spin_bodies)
                    .run_if(in_state(SCENE).and(resource_exists::<WalkingTour>)),
            );
    }
}

fn setup_learn(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut graphs: ResMut<Assets<AnimationGraph>>,
    asset_server: Res<AssetServer>,
    mut tracker: ResMut<LoadTracker>,
) {
    spawn_main_camera(
        &mut commands,
        SCENE,
        Vec3::new(-9.0, -1.0, 20.0),
        Vec3::ZERO,
        CameraRig {
            fov_degrees: 50.0,
            far: 2000.0,
            bloom: false,
        },
    );
    commands.spawn((
        DirectionalLight {
            illuminance: 10_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(0.0, 2.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
        SceneEntity(SCENE),
    ));

    for (index, stop) in TOUR.iter().enumerate() {
        let material = materials.add(StandardMaterial {
            base_color: Color::srgb(0.6, 0.6, 0.6),
            ..default()
        });
        commands
            .spawn((
                TourPlanet(index),
                Transform::from_translation(stop.home),
                Visibility::default(),
                SceneEntity(SCENE),
            ))
            .with_children(|group| {
                group.spawn((
                    Mesh3d(meshes.add(Sphere::new(stop.radius).mesh().uv(32, 32))),
                    MeshMaterial3d(material),
                    Transform::default(),
                    Spin(stop.spin),
                    PendingTexture::request(
                        &asset_server,
                        &mut tracker,
                        stop.texture,
                        TextureSlot::BaseColor,
                    ),
                ));
                match stop.name {
                    "Saturn" => {
                        group.spawn((
                            Mesh3d(meshes.add(Annulus::new(4.0, 10.0))),
                            MeshMaterial3d(materials.add(StandardMaterial {
                                base_color: Color::srgba(0.85, 0.8, 0.65, 0.8),
                                alpha_mode: AlphaMode::Blend,
                                cull_mode: None,
                                double_sided: true,
                                unlit: true,
                                ..default()
                            })),
                            Transform::from_rotation(Quat::from_rotation_x(
                                -std::f32::consts::PI / 2.7,
                            )),
                        ));
                    }
                    "Earth" => {
                        // Moon orbits inside its own spinning group.
                        group
                            .spawn((Transform::default(), Visibility::default(), Spin(0.3)))
                            .with_child((
                                Mesh3d(meshes.add(Sphere::new(1.0).mesh().uv(32, 32))),
                                MeshMaterial3d(materials.add(StandardMaterial {
                                    base_color: Color::srgb(0.7, 0.7, 0.7),
                                    ..default()
                                })),
                                Transform::from_xyz(10.0, 0.0, 0.0),
                            ));
                        group.spawn((
                            SceneRoot(asset_server.load(
                                GltfAssetLabel::Scene(0).from_asset("learn/satellite.glb"),
                            )),
                            Transform::from_xyz(-10.0, 2.0, 0.0)
                                .with_rotation(Quat::from_euler(
                                    EulerRot::XYZ,
                                    std::f32::consts::FRAC_PI_2,
                                    std::f32::consts::PI,
                                    std::f32::consts::FRAC_PI_2,
                                ))
                                .with_scale(Vec3::splat(0.00019)),
                        ));
                    }
                    _ => {}
                }
            });
    }

    character::spawn_character(
        &mut commands,
        &asset_server,
        &mut graphs,
        "learn/character.glb",
        1,
        Transform::from_xyz(-12.3, -7.0, 0.0).with_scale(Vec3::splat(0.1)),
        SCENE,
    );

    commands.insert_resource(WalkingTour::new(TOUR.iter().map(|s| s.home).collect()));
    commands.insert_resource(TourFinale::default());
    info!("Planet tour ready with {} stops", TOUR.len());
}

fn teardown_learn(mut commands: Commands) {
    commands.remove_resource::<WalkingTour>();
    commands.remove_resource::<TourFinale>();
    commands.remove_resource::<CharacterAnimations>();
}

fn move_tour_planets(
    time: Res<Time<Real>>,
    mut tour: ResMut<WalkingTour>,
    mut finale: ResMut<TourFinale>,
    mut planets: Query<(&TourPlanet, &mut Transform, &mut Visibility)>,
) {
    if tour.is_finished() {
        if !finale.shown {
            for (planet, _, mut visibility) in planets.iter_mut() {
                if planet.0 + 1 == TOUR.len() {
                    *visibility = Visibility::Hidden;
                }
            }
            finale.shown = true;
            info!("Planet tour complete");
        }
        return;
    }

    let positions = match tour.update(time.elapsed_secs_f64()) {
        TourUpdate::Idle => return,
        TourUpdate::Moving(positions) | TourUpdate::Landed(positions) => positions,
    };
    for (planet, mut transform, _) in planets.iter_mut() {
        if let Some(position) = positions.get(planet.0) {
            transform.translation = *position;
        }
    }
}

/// Rotate every spinning entity about its local Y axis.
pub fn spin_bodies(time: Res<Time>, mut spinners: Query<(&Spin, &mut Transform)>) {
    let dt = time.delta_secs();
    for (spin, mut transform) in spinners.iter_mut() {
        transform.rotate_local_y(spin.0 * dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tour() -> WalkingTour {
        WalkingTour::new(TOUR.iter().map(|s| s.home).collect())
    }

    #[test]
    fn test_step_moves_current_and_next() {
        let mut tour = tour();
        assert!(tour.advance(0.0));
        assert!(matches!(tour.update(1.0), TourUpdate::Moving(_)));
        let TourUpdate::Landed(positions) = tour.update(2.0) else {
            panic!("step should land after two seconds");
        };
        assert!(!tour.is_finished());
        assert_eq!(positions[0], STAGE_POSITION);
        assert_eq!(positions[1], ON_DECK_POSITION);
        assert_eq!(positions[2], TOUR[2].home);
        assert_eq!(tour.current(), 1);
    }

    #[test]
    fn test_clicks_during_step_are_ignored() {
        let mut tour = tour();
        assert!(tour.advance(0.0));
        assert!(!tour.advance(0.5));
        tour.update(2.0);
        assert_eq!(tour.current(), 1);
    }

    #[test]
    fn test_previous_planet_returns_home() {
        let mut tour = tour();
        tour.advance(0.0);
        tour.update(2.0);
        tour.advance(3.0);
        tour.update(5.0);
        assert_eq!(tour.positions()[0], TOUR[0].home);
        assert_eq!(tour.positions()[1], STAGE_POSITION);
        assert_eq!(tour.positions()[2], ON_DECK_POSITION);
    }

    #[test]
    fn test_last_planet_rests_on_stage_until_the_next_click() {
        let mut tour = tour();
        let mut now = 0.0;
        for _ in 0..TOUR.len() {
            assert!(tour.advance(now));
            now += STEP_SECS;
            assert!(matches!(tour.update(now), TourUpdate::Landed(_)));
        }
        assert!(tour.all_featured());
        assert!(!tour.is_finished());
        assert_eq!(tour.positions()[TOUR.len() - 1], STAGE_POSITION);
        assert_eq!(tour.update(now + 1.0), TourUpdate::Idle);

        assert!(tour.advance(now + 1.0));
        assert!(tour.is_finished());
        assert!(!tour.advance(now + 2.0));
    }
}
