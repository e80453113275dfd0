//! Shareable camera poses.
//!
//! A pose is a short query string (`cx=..&cy=..&cz=..&tx=..&ty=..&tz=..&s=..`)
//! encoding camera position, orbit target, and simulation speed at one
//! decimal place. Encoding happens when the user hits the share button;
//! decoding happens at startup from `--pose` or the `SOLARIUM_POSE`
//! environment variable, which also skips the intro flyover.

use bevy::prelude::*;
use thiserror::Error;

use crate::camera::{CameraRig, HomePose, IntroFlyover, MainCamera};
use crate::types::SimulationClock;

/// Environment variable checked for a startup pose.
pub const POSE_ENV_VAR: &str = "SOLARIUM_POSE";

/// Errors from parsing a pose string.
#[derive(Debug, Error, PartialEq)]
pub enum PoseError {
    #[error("missing required key '{0}'")]
    MissingKey(&'static str),
    #[error("invalid number for '{key}': {value}")]
    InvalidNumber { key: String, value: String },
    #[error("malformed query pair: {0}")]
    MalformedPair(String),
}

/// A camera pose plus simulation speed, round-trippable through a query
/// string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SharePose {
    pub camera: Vec3,
    pub target: Vec3,
    pub speed: f32,
}

impl SharePose {
    /// Serialize to a query string with one decimal of precision.
    pub fn encode(&self) -> String {
        format!(
            "cx={:.1}&cy={:.1}&cz={:.1}&tx={:.1}&ty={:.1}&tz={:.1}&s={:.1}",
            self.camera.x,
            self.camera.y,
            self.camera.z,
            self.target.x,
            self.target.y,
            self.target.z,
            self.speed,
        )
    }

    /// Parse a pose from a query string.
    ///
    /// Accepts a bare query, one with a leading `?`, or a full URL. Camera
    /// keys are required; target keys default to the origin and speed to 1.
    pub fn parse(input: &str) -> Result<Self, PoseError> {
        let query = match input.rfind('?') {
            Some(idx) => &input[idx + 1..],
            None => input,
        };

        let mut camera = [None; 3];
        let mut target = [0.0f32; 3];
        let mut speed = 1.0f32;

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| PoseError::MalformedPair(pair.to_string()))?;
            let number: f32 = value.parse().map_err(|_| PoseError::InvalidNumber {
                key: key.to_string(),
                value: value.to_string(),
            })?;
            match key {
                "cx" => camera[0] = Some(number),
                "cy" => camera[1] = Some(number),
                "cz" => camera[2] = Some(number),
                "tx" => target[0] = number,
                "ty" => target[1] = number,
                "tz" => target[2] = number,
                "s" => speed = number,
                // Unknown keys are ignored for forward compatibility
                _ => {}
            }
        }

        let camera = Vec3::new(
            camera[0].ok_or(PoseError::MissingKey("cx"))?,
            camera[1].ok_or(PoseError::MissingKey("cy"))?,
            camera[2].ok_or(PoseError::MissingKey("cz"))?,
        );

        Ok(Self {
            camera,
            target: Vec3::from_array(target),
            speed,
        })
    }
}

/// Plugin applying a startup pose from the command line or environment.
pub struct SharePlugin;

impl Plugin for SharePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PostStartup, apply_startup_pose);
    }
}

/// Pose string from `--pose <query>` or the environment, if any.
fn startup_pose_string() -> Option<String> {
    let mut args = std::env::args();
    while let Some(arg) = args.next() {
        if arg == "--pose" {
            return args.next();
        }
    }
    std::env::var(POSE_ENV_VAR).ok()
}

/// Apply the startup pose after the camera has spawned, replacing the home
/// pose and skipping the intro.
fn apply_startup_pose(
    mut camera: Query<&mut Transform, With<MainCamera>>,
    mut rig: ResMut<CameraRig>,
    mut home: ResMut<HomePose>,
    mut intro: ResMut<IntroFlyover>,
    mut clock: ResMut<SimulationClock>,
) {
    let Some(raw) = startup_pose_string() else {
        return;
    };

    let pose = match SharePose::parse(&raw) {
        Ok(pose) => pose,
        Err(err) => {
            warn!("Ignoring invalid startup pose: {err}");
            return;
        }
    };

    let Ok(mut transform) = camera.single_mut() else {
        return;
    };

    intro.active = false;
    rig.target = pose.target;
    home.position = pose.camera;
    home.target = pose.target;
    clock.set_speed(pose.speed);

    transform.translation = pose.camera;
    transform.look_at(pose.target, Vec3::Y);

    info!("Applied startup pose: {}", pose.encode());
}
