//! Share pose round-trip and validation tests.
//!
//! Run with: cargo test --test share_pose

use approx::assert_relative_eq;
use bevy::math::Vec3;

use solarium::share::{PoseError, SharePose};
use solarium::types::{SimulationClock, MAX_SPEED, MIN_SPEED};

#[test]
fn test_encode_parse_round_trip_preserves_one_decimal() {
    let pose = SharePose {
        camera: Vec3::new(-123.45, 67.891, 0.04),
        target: Vec3::new(33.02, -1.26, 95.55),
        speed: 3.75,
    };
    let parsed = SharePose::parse(&pose.encode()).unwrap();

    // Values survive to one decimal place
    assert_relative_eq!(parsed.camera.x, -123.5, epsilon = 1e-4);
    assert_relative_eq!(parsed.camera.y, 67.9, epsilon = 1e-4);
    assert_relative_eq!(parsed.camera.z, 0.0, epsilon = 1e-4);
    assert_relative_eq!(parsed.target.z, 95.6, epsilon = 1e-4);
    assert_relative_eq!(parsed.speed, 3.8, epsilon = 1e-4);
}

#[test]
fn test_parse_is_stable_after_one_round_trip() {
    let pose = SharePose {
        camera: Vec3::new(1.234, 5.678, 9.012),
        target: Vec3::new(-3.456, 0.0, 7.89),
        speed: 2.34,
    };
    let once = SharePose::parse(&pose.encode()).unwrap();
    let twice = SharePose::parse(&once.encode()).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_defaults_match_home_view_semantics() {
    // Only the camera is mandatory; target defaults to the Sun at the
    // origin and speed to real time.
    let pose = SharePose::parse("cx=0.0&cy=80.0&cz=150.0").unwrap();
    assert_eq!(pose.target, Vec3::ZERO);
    assert_relative_eq!(pose.speed, 1.0);
}

#[test]
fn test_each_camera_key_is_required() {
    assert_eq!(
        SharePose::parse("cy=1.0&cz=2.0").unwrap_err(),
        PoseError::MissingKey("cx")
    );
    assert_eq!(
        SharePose::parse("cx=1.0&cz=2.0").unwrap_err(),
        PoseError::MissingKey("cy")
    );
    assert_eq!(
        SharePose::parse("cx=1.0&cy=2.0").unwrap_err(),
        PoseError::MissingKey("cz")
    );
}

#[test]
fn test_error_messages_name_the_problem() {
    let err = SharePose::parse("cx=oops&cy=1.0&cz=2.0").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("cx"));
    assert!(message.contains("oops"));
}

#[test]
fn test_out_of_range_speed_clamped_by_clock() {
    // The pose format itself doesn't clamp; the clock does when applied.
    let pose = SharePose::parse("cx=1.0&cy=2.0&cz=3.0&s=99.0").unwrap();
    let mut clock = SimulationClock::default();
    clock.set_speed(pose.speed);
    assert_eq!(clock.speed(), MAX_SPEED);

    let pose = SharePose::parse("cx=1.0&cy=2.0&cz=3.0&s=0.0").unwrap();
    clock.set_speed(pose.speed);
    assert_eq!(clock.speed(), MIN_SPEED);
}

#[test]
fn test_query_prefix_and_full_url() {
    let bare = SharePose::parse("cx=1.0&cy=2.0&cz=3.0").unwrap();
    let prefixed = SharePose::parse("?cx=1.0&cy=2.0&cz=3.0").unwrap();
    let url = SharePose::parse("https://example.org/solar?cx=1.0&cy=2.0&cz=3.0").unwrap();
    assert_eq!(bare, prefixed);
    assert_eq!(bare, url);
}
