//! Integration tests for orbital geometry across the whole configuration
//! table: ellipse invariants, orbit path sampling, scale switching, and the
//! gravity integrator's seeded state.
//!
//! Run with: cargo test --test orbit_geometry

mod common;

use approx::assert_relative_eq;
use bevy::math::Vec3;

use solarium::catalog::BodyId;
use solarium::scene::bodies::{config_for, ellipse_position, PLANET_CONFIG};
use solarium::scene::gravity::{pull_toward, GravityState};
use solarium::scene::orbits::{sample_orbit_path, ORBIT_SEGMENTS};
use solarium::scene::scale::orbit_radius_for;

use common::{orbit_for, step_orbit};

#[test]
fn test_every_planet_stays_within_ellipse_bounds() {
    for cfg in &PLANET_CONFIG {
        for i in 0..64 {
            let angle = i as f32 / 64.0 * std::f32::consts::TAU;
            let pos = ellipse_position(angle, cfg.orbit, cfg.eccentricity, cfg.inclination);
            let r = pos.length();
            let perihelion = cfg.orbit * (1.0 - cfg.eccentricity);
            let aphelion = cfg.orbit * (1.0 + cfg.eccentricity);
            assert!(
                r >= perihelion * 0.999 && r <= aphelion * 1.001,
                "{:?} at angle {angle}: r={r} outside [{perihelion}, {aphelion}]",
                cfg.id
            );
        }
    }
}

#[test]
fn test_motion_step_preserves_ellipse() {
    let mut orbit = orbit_for(BodyId::Mars);
    for _ in 0..1000 {
        step_orbit(&mut orbit, 0.016);
        let pos = orbit.position();
        let r = pos.length();
        let perihelion = orbit.orbit_radius * (1.0 - orbit.eccentricity);
        let aphelion = orbit.orbit_radius * (1.0 + orbit.eccentricity);
        assert!(r >= perihelion * 0.999 && r <= aphelion * 1.001);
    }
}

#[test]
fn test_faster_planets_complete_orbits_sooner() {
    // After the same simulated time, Mercury's angle leads Earth's leads
    // Pluto's.
    let mut mercury = orbit_for(BodyId::Mercury);
    let mut earth = orbit_for(BodyId::Earth);
    let mut pluto = orbit_for(BodyId::Pluto);

    for _ in 0..600 {
        step_orbit(&mut mercury, 0.016);
        step_orbit(&mut earth, 0.016);
        step_orbit(&mut pluto, 0.016);
    }

    assert!(mercury.angle > earth.angle);
    assert!(earth.angle > pluto.angle);
}

#[test]
fn test_orbit_paths_closed_for_all_planets() {
    for id in BodyId::PLANETS {
        let orbit = orbit_for(id);
        let path = sample_orbit_path(&orbit, ORBIT_SEGMENTS);
        assert_eq!(path.len(), ORBIT_SEGMENTS + 1);
        let gap = path[0].distance(path[ORBIT_SEGMENTS]);
        assert!(gap < orbit.orbit_radius * 1e-3, "{id:?} path gap {gap}");
    }
}

#[test]
fn test_scale_toggle_round_trip_all_planets() {
    for id in BodyId::PLANETS {
        let cfg = config_for(id).unwrap();
        assert_eq!(orbit_radius_for(id, false), Some(cfg.orbit));
        assert_eq!(orbit_radius_for(id, true), Some(cfg.real_orbit));
        // Toggling back lands exactly on the table value
        assert_eq!(orbit_radius_for(id, false), Some(cfg.orbit));
    }
}

#[test]
fn test_realistic_scale_keeps_planet_order() {
    let mut previous = 0.0;
    for id in BodyId::PLANETS {
        let radius = orbit_radius_for(id, true).unwrap();
        assert!(radius > previous, "{id:?} out of order at realistic scale");
        previous = radius;
    }
}

#[test]
fn test_gravity_seed_roughly_circular_near_sun_pull() {
    // A short Euler integration from the seeded state should not spiral
    // into the Sun or escape outright.
    let cfg = config_for(BodyId::Earth).unwrap();
    let mut state = GravityState::seeded(0.0, cfg.rate, cfg.radius);
    let mut pos = Vec3::new(cfg.orbit, 0.0, 0.0);

    for _ in 0..600 {
        let accel = pull_toward(pos, Vec3::ZERO, 5000.0, 1.0);
        state.velocity += accel * 0.016;
        pos += state.velocity * 0.016;
    }

    let r = pos.length();
    assert!(r > cfg.orbit * 0.3, "collapsed into the Sun: r={r}");
    assert!(r < cfg.orbit * 3.0, "escaped outright: r={r}");
}

#[test]
fn test_perturbation_pull_weaker_than_sun_at_earth() {
    let earth_pos = Vec3::new(33.0, 0.0, 0.0);
    let jupiter_pos = Vec3::new(-62.0, 0.0, 0.0);
    let jupiter_mass = 5.0f32.powi(3) * 0.5;

    let sun = pull_toward(earth_pos, Vec3::ZERO, 5000.0, 1.0);
    let jupiter = pull_toward(earth_pos, jupiter_pos, jupiter_mass, 2.0);

    assert!(sun.length() > jupiter.length() * 10.0);
}

#[test]
fn test_inclination_tips_orbit_out_of_plane() {
    let pluto = orbit_for(BodyId::Pluto);
    let quarter = ellipse_position(
        std::f32::consts::FRAC_PI_2,
        pluto.orbit_radius,
        pluto.eccentricity,
        pluto.inclination,
    );
    assert!(quarter.y.abs() > 1.0, "Pluto should leave the ecliptic");

    let earth = orbit_for(BodyId::Earth);
    let earth_quarter = ellipse_position(
        std::f32::consts::FRAC_PI_2,
        earth.orbit_radius,
        earth.eccentricity,
        earth.inclination,
    );
    assert_relative_eq!(earth_quarter.y, 0.0, epsilon = 1e-5);
}
