//! Keplerian orbital motion and self-rotation.

use bevy::prelude::*;

use crate::catalog::BodyId;
use crate::scene::bodies::{CelestialBody, OrbitState};
use crate::types::{SimulationClock, ViewToggles};

/// Advance orbit angles and reposition planets on their ellipses.
///
/// Skipped entirely while paused or in comparison mode. While gravity mode
/// is active the integrator owns positions, but self-rotation and the
/// Earth-year counter keep running here.
pub fn advance_orbits(
    mut clock: ResMut<SimulationClock>,
    toggles: Res<ViewToggles>,
    time: Res<Time>,
    mut planets: Query<(&mut OrbitState, &mut Transform, &CelestialBody)>,
) {
    if clock.paused || toggles.comparison {
        return;
    }

    let t = clock.scaled_delta(time.delta_secs());
    let mut earth_advance = 0.0f64;

    for (mut orbit, mut transform, body) in planets.iter_mut() {
        let orbit_step = orbit.orbital_rate * t * 0.5;

        if !toggles.gravity {
            orbit.angle += orbit_step;
            transform.translation = orbit.position();
        }

        transform.rotate_local_y(orbit.rotation_rate * t);

        if body.id == BodyId::Earth {
            earth_advance = orbit_step as f64;
        }
    }

    clock.earth_angle_total += earth_advance;
}
