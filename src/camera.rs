//! Camera system for the solar system visualization.
//!
//! Provides orbit-style mouse controls, smooth focus animation onto bodies,
//! and the intro flyover. Focus and the flyover advance on raw frame time,
//! so they keep moving while the simulation is paused.

use bevy::{
    input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll},
    prelude::*,
};
use bevy_egui::EguiContexts;

use crate::catalog::BodyId;
use crate::scene::bodies::CelestialBody;
use crate::types::smooth_step;

/// Closest allowed camera distance to its target.
pub const MIN_DISTANCE: f32 = 5.0;

/// Furthest allowed camera distance in the compressed layout.
pub const MAX_DISTANCE: f32 = 900.0;

/// Furthest allowed camera distance when realistic scale is active.
pub const MAX_DISTANCE_REALISTIC: f32 = 1200.0;

/// Radians of orbit rotation per pixel of mouse drag.
const ORBIT_SENSITIVITY: f32 = 0.005;

/// Zoom speed multiplier for scroll wheel.
const ZOOM_SPEED: f32 = 0.1;

/// Polar angle clamp keeps the camera from flipping over the poles.
const MIN_POLAR: f32 = 0.1;
const MAX_POLAR: f32 = std::f32::consts::PI * 0.85;

/// Focus animation progress per second (full animation in 0.5 s).
const FOCUS_RATE: f32 = 2.0;

/// Intro flyover duration in seconds.
const INTRO_DURATION: f32 = 6.0;

/// Intro flyover waypoints, ending at the home pose.
const INTRO_WAYPOINTS: [Vec3; 3] = [
    Vec3::new(200.0, 120.0, 300.0),
    Vec3::new(80.0, 40.0, 120.0),
    Vec3::new(0.0, 80.0, 150.0),
];

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// The point the main camera orbits around and looks at.
#[derive(Resource)]
pub struct CameraRig {
    pub target: Vec3,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self { target: Vec3::ZERO }
    }
}

/// Distance limits, widened while realistic scale is active.
#[derive(Resource)]
pub struct CameraLimits {
    pub max_distance: f32,
}

impl Default for CameraLimits {
    fn default() -> Self {
        Self {
            max_distance: MAX_DISTANCE,
        }
    }
}

/// The pose restored by reset-view. Overwritten when a share pose is applied
/// at startup.
#[derive(Resource)]
pub struct HomePose {
    pub position: Vec3,
    pub target: Vec3,
}

impl Default for HomePose {
    fn default() -> Self {
        Self {
            position: INTRO_WAYPOINTS[2],
            target: Vec3::ZERO,
        }
    }
}

/// In-flight focus animation. A new request preempts the current one.
#[derive(Resource, Default)]
pub struct CameraFocus {
    pub target: Option<BodyId>,
    pub progress: f32,
}

/// Intro flyover state. Skipped entirely when a share pose was applied.
#[derive(Resource)]
pub struct IntroFlyover {
    pub active: bool,
    pub elapsed: f32,
}

impl Default for IntroFlyover {
    fn default() -> Self {
        Self {
            active: true,
            elapsed: 0.0,
        }
    }
}

/// Request to fly the camera to a body.
#[derive(Message)]
pub struct FocusRequest {
    pub target: BodyId,
}

/// Request to restore the home pose. Also exits comparison mode and stops
/// the tour; those handlers live with their own state.
#[derive(Message)]
pub struct ResetView;

/// Plugin providing camera functionality.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraRig>()
            .init_resource::<CameraLimits>()
            .init_resource::<HomePose>()
            .init_resource::<CameraFocus>()
            .init_resource::<IntroFlyover>()
            .add_message::<FocusRequest>()
            .add_message::<ResetView>()
            .add_systems(Startup, setup_camera)
            .add_systems(
                Update,
                (
                    run_intro_flyover,
                    handle_focus_requests,
                    apply_focus,
                    orbit_camera,
                    zoom_camera,
                    handle_reset_view,
                )
                    .chain(),
            );
    }
}

/// Spawn the main perspective camera at the first intro waypoint.
fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(INTRO_WAYPOINTS[0]).looking_at(Vec3::ZERO, Vec3::Y),
        MainCamera,
    ));
}

/// Fly the camera through the intro waypoints with eased interpolation.
fn run_intro_flyover(
    mut intro: ResMut<IntroFlyover>,
    time: Res<Time>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    if !intro.active {
        return;
    }

    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };

    intro.elapsed += time.delta_secs();
    let t = (intro.elapsed / INTRO_DURATION).min(1.0);
    let eased = smooth_step(t);

    // Map eased progress onto the waypoint polyline, easing each leg again
    // so the camera pauses briefly at waypoints.
    let segment = eased * (INTRO_WAYPOINTS.len() - 1) as f32;
    let idx0 = (segment.floor() as usize).min(INTRO_WAYPOINTS.len() - 1);
    let idx1 = (idx0 + 1).min(INTRO_WAYPOINTS.len() - 1);
    let leg = smooth_step(segment - idx0 as f32);

    transform.translation = INTRO_WAYPOINTS[idx0].lerp(INTRO_WAYPOINTS[idx1], leg);
    transform.look_at(Vec3::ZERO, Vec3::Y);

    if t >= 1.0 {
        intro.active = false;
        info!("Intro flyover complete");
    }
}

/// Start (or restart) the focus animation toward the requested body.
fn handle_focus_requests(
    mut requests: MessageReader<FocusRequest>,
    mut focus: ResMut<CameraFocus>,
) {
    for request in requests.read() {
        focus.target = Some(request.target);
        focus.progress = 0.0;
    }
}

/// Smoothly move the camera toward the focused body.
///
/// The destination offset scales with the body's visual radius so large
/// bodies are framed from further away.
fn apply_focus(
    mut focus: ResMut<CameraFocus>,
    mut rig: ResMut<CameraRig>,
    time: Res<Time>,
    bodies: Query<(&CelestialBody, &Transform), Without<MainCamera>>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    let Some(target_id) = focus.target else {
        return;
    };

    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    let Some((body, body_transform)) = bodies.iter().find(|(b, _)| b.id == target_id) else {
        focus.target = None;
        return;
    };

    focus.progress += time.delta_secs() * FOCUS_RATE;
    let finished = focus.progress >= 1.0;
    let t = smooth_step(focus.progress.min(1.0));

    let body_pos = body_transform.translation;
    let offset = Vec3::new(0.0, body.radius * 3.0, body.radius * 6.0);
    let destination = body_pos + offset;

    rig.target = rig.target.lerp(body_pos, t);
    camera_transform.translation = camera_transform.translation.lerp(destination, t);
    camera_transform.look_at(rig.target, Vec3::Y);

    if finished {
        focus.target = None;
    }
}

/// Left-drag orbits the camera around the rig target.
fn orbit_camera(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    intro: Res<IntroFlyover>,
    rig: Res<CameraRig>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
    mut contexts: EguiContexts,
) {
    if intro.active || !mouse_buttons.pressed(MouseButton::Left) {
        return;
    }

    if let Some(ctx) = contexts.ctx_mut().ok() {
        if ctx.wants_pointer_input() {
            return;
        }
    }

    let delta = mouse_motion.delta;
    if delta == Vec2::ZERO {
        return;
    }

    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };

    let offset = transform.translation - rig.target;
    let radius = offset.length();
    if radius < f32::EPSILON {
        return;
    }

    let mut azimuth = offset.z.atan2(offset.x);
    let mut polar = (offset.y / radius).clamp(-1.0, 1.0).acos();

    azimuth += delta.x * ORBIT_SENSITIVITY;
    polar = (polar - delta.y * ORBIT_SENSITIVITY).clamp(MIN_POLAR, MAX_POLAR);

    let new_offset = Vec3::new(
        radius * polar.sin() * azimuth.cos(),
        radius * polar.cos(),
        radius * polar.sin() * azimuth.sin(),
    );

    transform.translation = rig.target + new_offset;
    transform.look_at(rig.target, Vec3::Y);
}

/// Scroll wheel dollies the camera toward/away from the rig target.
fn zoom_camera(
    mouse_scroll: Res<AccumulatedMouseScroll>,
    intro: Res<IntroFlyover>,
    rig: Res<CameraRig>,
    limits: Res<CameraLimits>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
    mut contexts: EguiContexts,
) {
    if intro.active || mouse_scroll.delta.y == 0.0 {
        return;
    }

    if let Some(ctx) = contexts.ctx_mut().ok() {
        if ctx.wants_pointer_input() {
            return;
        }
    }

    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };

    let offset = transform.translation - rig.target;
    let radius = offset.length();
    if radius < f32::EPSILON {
        return;
    }

    let factor = 1.0 - mouse_scroll.delta.y * ZOOM_SPEED;
    let new_radius = (radius * factor).clamp(MIN_DISTANCE, limits.max_distance);

    transform.translation = rig.target + offset / radius * new_radius;
}

/// Restore the home pose and cancel any in-flight focus.
fn handle_reset_view(
    mut resets: MessageReader<ResetView>,
    home: Res<HomePose>,
    mut rig: ResMut<CameraRig>,
    mut focus: ResMut<CameraFocus>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    if resets.read().next().is_none() {
        return;
    }

    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };

    focus.target = None;
    focus.progress = 0.0;
    rig.target = home.target;
    transform.translation = home.position;
    transform.look_at(home.target, Vec3::Y);
    info!("View reset to home pose");
}
