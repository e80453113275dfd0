//! Toy gravity simulation.
//!
//! When gravity mode is on, planet positions come from an explicit Euler
//! integration of an inverse-square pull toward the Sun plus a single
//! perturbing pull from Jupiter. Constants are tuned for visual drama, not
//! accuracy. Toggling off snaps every planet back onto its Kepler ellipse
//! and re-seeds a tangential velocity from the current angle.

use bevy::prelude::*;

use crate::catalog::BodyId;
use crate::scene::bodies::{CelestialBody, OrbitState};
use crate::scene::ToggleGravity;
use crate::types::{SimulationClock, ViewToggles};

/// Gravitational constant, visual tuning.
const G: f32 = 50.0;

/// Sun mass in the same tuned unit system.
const SUN_MASS: f32 = 5000.0;

/// Weight applied to Jupiter's perturbation.
const PERTURBATION_WEIGHT: f32 = 0.5;

/// Singularity guard distances.
const MIN_SUN_DISTANCE: f32 = 1.0;
const MIN_JUPITER_DISTANCE: f32 = 2.0;

/// Integration state carried by every planet.
#[derive(Component, Clone, Debug)]
pub struct GravityState {
    pub velocity: Vec3,
    /// Mass proportional to visual volume.
    pub mass: f32,
}

impl GravityState {
    /// Tangential velocity for a planet at `angle` on its orbit.
    pub fn seeded(angle: f32, orbital_rate: f32, radius: f32) -> Self {
        let v = orbital_rate * 0.5;
        Self {
            velocity: Vec3::new(-angle.sin() * v, 0.0, angle.cos() * v),
            mass: radius * radius * radius,
        }
    }

    /// Re-seed the tangential velocity in place.
    pub fn reseed(&mut self, angle: f32, orbital_rate: f32) {
        let v = orbital_rate * 0.5;
        self.velocity = Vec3::new(-angle.sin() * v, 0.0, angle.cos() * v);
    }
}

/// Inverse-square acceleration toward `center` from `pos`, with a guard
/// radius below which the pull is dropped entirely.
pub fn pull_toward(pos: Vec3, center: Vec3, mass: f32, min_distance: f32) -> Vec3 {
    let delta = center - pos;
    let dist_sq = delta.length_squared();
    let dist = dist_sq.sqrt();
    if dist <= min_distance {
        return Vec3::ZERO;
    }
    delta / dist * (G * mass / dist_sq)
}

/// Plugin providing the gravity mode toggle and integrator.
pub struct GravityPlugin;

impl Plugin for GravityPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, handle_gravity_toggle);
    }
}

/// Euler step for all planets while gravity mode is active.
pub fn integrate_gravity(
    clock: Res<SimulationClock>,
    toggles: Res<ViewToggles>,
    time: Res<Time>,
    mut planets: Query<(&CelestialBody, &mut Transform, &mut GravityState), With<OrbitState>>,
) {
    if !toggles.gravity || toggles.comparison || clock.paused {
        return;
    }

    let dt = clock.scaled_delta(time.delta_secs());
    if dt == 0.0 {
        return;
    }

    // Jupiter's state is read by every other planet's perturbation term
    let jupiter = planets
        .iter()
        .find(|(body, _, _)| body.id == BodyId::Jupiter)
        .map(|(_, transform, state)| (transform.translation, state.mass));

    for (body, mut transform, mut state) in planets.iter_mut() {
        let pos = transform.translation;

        let mut accel = pull_toward(pos, Vec3::ZERO, SUN_MASS, MIN_SUN_DISTANCE);

        if body.id != BodyId::Jupiter {
            if let Some((jupiter_pos, jupiter_mass)) = jupiter {
                accel += pull_toward(
                    pos,
                    jupiter_pos,
                    jupiter_mass * PERTURBATION_WEIGHT,
                    MIN_JUPITER_DISTANCE,
                );
            }
        }

        state.velocity += accel * dt;
        transform.translation += state.velocity * dt;
    }
}

/// Flip gravity mode. Turning it off restores Keplerian positions and
/// re-seeds velocities so the next activation starts from a clean orbit.
fn handle_gravity_toggle(
    mut messages: MessageReader<ToggleGravity>,
    mut toggles: ResMut<ViewToggles>,
    mut planets: Query<(&OrbitState, &mut Transform, &mut GravityState)>,
) {
    for _ in messages.read() {
        toggles.gravity = !toggles.gravity;

        if !toggles.gravity {
            for (orbit, mut transform, mut state) in planets.iter_mut() {
                transform.translation = orbit.position();
                state.reseed(orbit.angle, orbit.orbital_rate);
            }
        }

        info!(
            "Gravity simulation {}",
            if toggles.gravity { "on" } else { "off" }
        );
    }
}
