//! Test utilities for the solar system visualization tests.
//!
//! Provides fixtures for creating orbital states and assertions for
//! verifying geometric invariants of the scene.

use bevy::math::Vec3;

use crate::catalog::BodyId;
use crate::scene::bodies::{config_for, OrbitState};

/// Fixtures for creating test orbital states.
pub mod fixtures {
    use super::*;

    /// Orbit state for a planet at a given angle, straight from the
    /// configuration table.
    ///
    /// # Panics
    /// Panics if `id` is not an orbiting body; tests should only ask for
    /// planets.
    pub fn orbit_at(id: BodyId, angle: f32) -> OrbitState {
        let cfg = config_for(id).expect("fixture requires an orbiting body");
        OrbitState {
            angle,
            orbit_radius: cfg.orbit,
            eccentricity: cfg.eccentricity,
            inclination: cfg.inclination,
            orbital_rate: cfg.rate,
            rotation_rate: cfg.rotation_rate,
        }
    }

    /// A circular, flat orbit for geometry tests that want no eccentricity
    /// or inclination effects.
    pub fn circular_orbit(radius: f32) -> OrbitState {
        OrbitState {
            angle: 0.0,
            orbit_radius: radius,
            eccentricity: 0.0,
            inclination: 0.0,
            orbital_rate: 1.0,
            rotation_rate: 0.0,
        }
    }
}

/// Assertions for verifying geometric invariants.
pub mod assertions {
    use super::*;

    /// Assert a position lies between the orbit's perihelion and aphelion.
    ///
    /// # Panics
    /// Panics if the radius falls outside the ellipse bounds.
    pub fn assert_on_ellipse(orbit: &OrbitState, position: Vec3) {
        let r = position.length();
        let perihelion = orbit.orbit_radius * (1.0 - orbit.eccentricity);
        let aphelion = orbit.orbit_radius * (1.0 + orbit.eccentricity);
        assert!(
            r >= perihelion * 0.999 && r <= aphelion * 1.001,
            "position radius {r} outside ellipse bounds [{perihelion}, {aphelion}]"
        );
    }
}

/// Utilities for creating headless Bevy apps for testing.
pub mod bevy_test {
    use bevy::prelude::*;

    /// Create a minimal Bevy app for testing without rendering.
    ///
    /// This app uses MinimalPlugins for a lightweight test environment.
    pub fn headless_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::bodies::ellipse_position;

    #[test]
    fn test_orbit_fixture_matches_config() {
        let orbit = fixtures::orbit_at(BodyId::Earth, 0.0);
        assert_eq!(orbit.orbit_radius, 33.0);
        assert_eq!(orbit.orbital_rate, 1.0);
    }

    #[test]
    fn test_circular_fixture_is_flat() {
        let orbit = fixtures::circular_orbit(50.0);
        for i in 0..8 {
            let angle = i as f32 / 8.0 * std::f32::consts::TAU;
            let pos = ellipse_position(angle, orbit.orbit_radius, 0.0, 0.0);
            assert_eq!(pos.y, 0.0);
            assertions::assert_on_ellipse(&orbit, pos);
        }
    }

    #[test]
    fn test_ellipse_assertion_accepts_orbit_positions() {
        let orbit = fixtures::orbit_at(BodyId::Pluto, 1.7);
        assertions::assert_on_ellipse(&orbit, orbit.position());
    }

    #[test]
    #[should_panic(expected = "outside ellipse bounds")]
    fn test_ellipse_assertion_rejects_origin() {
        let orbit = fixtures::orbit_at(BodyId::Earth, 0.0);
        assertions::assert_on_ellipse(&orbit, Vec3::ZERO);
    }
}
