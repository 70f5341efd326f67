//! Camera spawning, orbit controls input and the focus-flight director.

pub mod controls;
pub mod director;
pub mod ease;

use bevy::{
    core_pipeline::tonemapping::Tonemapping,
    input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll},
    math::DVec3,
    post_process::bloom::Bloom,
    prelude::*,
    render::view::Hdr,
};
use bevy_egui::EguiContexts;

pub use controls::{OrbitControls, ZoomBounds};
pub use director::{CameraDirector, CameraMode, CameraPose, DirectorError, Transition};

use crate::types::{AppScene, SceneEntity};

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Ordering of camera systems within a frame.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum CameraSystemSet {
    /// Scene-specific logic that may take over the camera.
    Director,
    /// User orbit/zoom input.
    Controls,
}

/// Plugin providing orbit controls for whichever scene camera is active.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            CameraSystemSet::Controls.after(CameraSystemSet::Director),
        )
        .add_systems(
            Update,
            orbit_controls_input
                .in_set(CameraSystemSet::Controls)
                .run_if(resource_exists::<OrbitControls>),
        );
    }
}

/// Lens and post-processing options for a scene camera.
pub struct CameraRig {
    pub fov_degrees: f32,
    pub far: f32,
    pub bloom: bool,
}

/// Spawn the main camera for `scene` at `position`, looking at `look_at`.
pub fn spawn_main_camera(
    commands: &mut Commands,
    scene: AppScene,
    position: Vec3,
    look_at: Vec3,
    rig: CameraRig,
) -> Entity {
    let mut camera = commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: rig.fov_degrees.to_radians(),
            near: 0.1,
            far: rig.far,
            ..default()
        }),
        Transform::from_translation(position).looking_at(look_at, Vec3::Y),
        MainCamera,
        SceneEntity(scene),
    ));
    if rig.bloom {
        camera.insert((Hdr, Tonemapping::AcesFitted, Bloom::NATURAL));
    }
    camera.id()
}

/// Point the main camera at `pose`.
pub fn apply_pose(transform: &mut Transform, pose: &CameraPose) {
    *transform = Transform::from_translation(pose.position.as_vec3())
        .looking_at(pose.look_at.as_vec3(), Vec3::Y);
}

/// Rotate with the left mouse button and zoom with the wheel around the controls target.
fn orbit_controls_input(
    controls: Res<OrbitControls>,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mouse_scroll: Res<AccumulatedMouseScroll>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
    mut contexts: EguiContexts,
) {
    if !controls.enabled {
        return;
    }
    // Let egui keep pointer input over its panels.
    if let Ok(ctx) = contexts.ctx_mut() {
        if ctx.wants_pointer_input() || ctx.is_pointer_over_area() {
            return;
        }
    }
    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };

    let mut position = transform.translation.as_dvec3();
    if controls.rotate_enabled && mouse_buttons.pressed(MouseButton::Left) {
        let delta = mouse_motion.delta.as_dvec2();
        position = controls.rotate(position, delta.x, delta.y);
    }
    if controls.zoom_enabled && mouse_scroll.delta.y != 0.0 {
        position = controls.zoom(position, mouse_scroll.delta.y as f64);
    }

    apply_pose(
        &mut transform,
        &CameraPose {
            position,
            look_at: controls.target,
        },
    );
}
