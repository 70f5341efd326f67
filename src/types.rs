//! Shared constants, scene states and simulation clock types.

use bevy::math::DVec3;
use bevy::prelude::*;

/// Degrees to radians conversion factor
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Self-rotation is slowed down by this factor relative to the orbital clock.
pub const ROTATION_SCALE: f64 = 0.01;

/// Default free-camera position in the explorer scene.
pub const DEFAULT_CAMERA_POSITION: DVec3 = DVec3::new(0.0, 5000.0, 15000.0);

/// Default look-at target in the explorer scene (the sun).
pub const DEFAULT_LOOK_AT: DVec3 = DVec3::ZERO;

/// Smallest and largest time scale reachable with the keyboard.
pub const MIN_TIME_SCALE: f64 = 0.125;
pub const MAX_TIME_SCALE: f64 = 128.0;

/// Top-level scene the application is showing.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppScene {
    /// Scene picker.
    #[default]
    Menu,
    /// Full solar system with focus flights.
    Explorer,
    /// Walking tour through the planets.
    Learn,
    /// Close-up of Earth and its surroundings.
    EarthLearn,
    /// Multiple-choice quiz.
    Quiz,
}

impl AppScene {
    /// Human-readable scene title.
    pub fn title(&self) -> &'static str {
        match self {
            AppScene::Menu => "Menu",
            AppScene::Explorer => "Explore the Solar System",
            AppScene::Learn => "Planet Tour",
            AppScene::EarthLearn => "Earth Up Close",
            AppScene::Quiz => "Quiz",
        }
    }
}

/// Marks an entity as belonging to a scene; despawned when that scene exits.
#[derive(Component, Clone, Copy, Debug)]
pub struct SceneEntity(pub AppScene);

/// Despawn every entity spawned for `scene`.
pub fn despawn_scene_entities(
    scene: AppScene,
) -> impl FnMut(Commands, Query<(Entity, &SceneEntity)>) {
    move |mut commands: Commands, query: Query<(Entity, &SceneEntity)>| {
        let mut count = 0;
        for (entity, owner) in query.iter() {
            if owner.0 == scene {
                commands.entity(entity).despawn();
                count += 1;
            }
        }
        info!("Despawned {} entities of {:?}", count, scene);
    }
}

/// Simulation clock driving orbital motion.
///
/// One unit of scaled time equals one "day" of orbital period, so at
/// `scale = 1.0` a body with an 88-day period orbits in 88 real seconds.
#[derive(Resource, Clone, Debug)]
pub struct SimulationClock {
    /// Total scaled time elapsed since the clock started.
    pub elapsed: f64,
    /// Multiplier applied to real frame time.
    pub scale: f64,
    /// Whether orbital motion is frozen.
    pub paused: bool,
    /// Scaled time step of the most recent frame.
    pub last_dt: f64,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self {
            elapsed: 0.0,
            scale: 1.0,
            paused: false,
            last_dt: 0.0,
        }
    }
}

impl SimulationClock {
    /// Advance by `real_dt` seconds of wall-clock time.
    ///
    /// Returns the scaled step, which is zero while paused.
    pub fn tick(&mut self, real_dt: f64) -> f64 {
        self.last_dt = if self.paused {
            0.0
        } else {
            real_dt * self.scale
        };
        self.elapsed += self.last_dt;
        self.last_dt
    }

    /// Halve the time scale, down to [`MIN_TIME_SCALE`].
    pub fn slower(&mut self) {
        self.scale = (self.scale * 0.5).max(MIN_TIME_SCALE);
    }

    /// Double the time scale, up to [`MAX_TIME_SCALE`].
    pub fn faster(&mut self) {
        self.scale = (self.scale * 2.0).min(MAX_TIME_SCALE);
    }

    /// Restore the initial state for a fresh scene.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Convert an `f64` simulation vector to an `f32` render vector.
pub fn to_render(v: DVec3) -> Vec3 {
    v.as_vec3()
}
