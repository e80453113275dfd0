//! Common test utilities for integration tests.

use solarium::catalog::BodyId;
use solarium::scene::bodies::{config_for, OrbitState};

/// Orbit state for a planet at angle zero, straight from the config table.
pub fn orbit_for(id: BodyId) -> OrbitState {
    let cfg = config_for(id).expect("orbiting body");
    OrbitState {
        angle: 0.0,
        orbit_radius: cfg.orbit,
        eccentricity: cfg.eccentricity,
        inclination: cfg.inclination,
        orbital_rate: cfg.rate,
        rotation_rate: cfg.rotation_rate,
    }
}

/// Advance an orbit by `dt` scaled seconds the way the motion system does.
pub fn step_orbit(orbit: &mut OrbitState, dt: f32) {
    orbit.angle += orbit.orbital_rate * dt * 0.5;
}
