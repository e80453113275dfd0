//! Headless Bevy integration tests.
//!
//! These tests verify resources and systems work correctly without GPU.

use bevy::prelude::*;

use solarium::time::TimePlugin;
use solarium::types::{SimulationClock, ViewToggles, DEFAULT_SPEED};

fn create_minimal_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(SimulationClock::default())
        .insert_resource(ViewToggles::default())
        .add_plugins(TimePlugin);
    app
}

#[test]
fn test_clock_advances_while_running() {
    let mut app = create_minimal_app();

    // First update initializes Time, later ones produce real deltas
    app.update();
    std::thread::sleep(std::time::Duration::from_millis(5));
    app.update();

    let clock = app.world().resource::<SimulationClock>();
    assert!(!clock.paused);
    assert!(clock.elapsed_sim > 0.0, "clock should advance");
}

#[test]
fn test_clock_frozen_while_paused() {
    let mut app = create_minimal_app();
    app.update();

    app.world_mut().resource_mut::<SimulationClock>().paused = true;
    let before = app.world().resource::<SimulationClock>().elapsed_sim;

    std::thread::sleep(std::time::Duration::from_millis(5));
    app.update();

    let after = app.world().resource::<SimulationClock>().elapsed_sim;
    assert_eq!(before, after, "paused clock must not advance");
}

#[test]
fn test_speed_scales_elapsed_time() {
    let mut app = create_minimal_app();
    app.update();

    app.world_mut()
        .resource_mut::<SimulationClock>()
        .set_speed(5.0);
    std::thread::sleep(std::time::Duration::from_millis(10));
    app.update();
    let fast = app.world().resource::<SimulationClock>().elapsed_sim;

    let mut slow_app = create_minimal_app();
    slow_app.update();
    slow_app
        .world_mut()
        .resource_mut::<SimulationClock>()
        .set_speed(0.1);
    std::thread::sleep(std::time::Duration::from_millis(10));
    slow_app.update();
    let slow = slow_app.world().resource::<SimulationClock>().elapsed_sim;

    // Wall-clock jitter keeps this loose, but 50x should dominate it
    assert!(fast > slow, "5x clock should outrun 0.1x clock");
}

#[test]
fn test_default_resources() {
    let app = create_minimal_app();

    let clock = app.world().resource::<SimulationClock>();
    assert_eq!(clock.speed(), DEFAULT_SPEED);
    assert!(!clock.paused);
    assert_eq!(clock.earth_years(), 0.0);

    let toggles = app.world().resource::<ViewToggles>();
    assert!(toggles.orbits);
    assert!(toggles.trails);
    assert!(!toggles.gravity);
    assert!(!toggles.comparison);
    assert!(!toggles.realistic_scale);
    assert!(!toggles.constellations);
    assert!(!toggles.spacecraft);
    assert!(!toggles.pip);
}
