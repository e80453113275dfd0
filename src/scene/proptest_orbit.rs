//! Property-based tests for orbital geometry using proptest.
//!
//! These tests verify that the polar ellipse and trail buffer maintain
//! expected properties across a wide range of inputs.

use proptest::prelude::*;
use std::f32::consts::TAU;

use bevy::math::Vec3;

use super::bodies::ellipse_position;
use super::compare::lineup_positions;
use super::trails::{TrailBuffer, TRAIL_CAPACITY, TRAIL_SAMPLE_INTERVAL};
use crate::catalog::BodyId;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The orbit radius must stay within the ellipse's perihelion and
    /// aphelion bounds for every angle.
    #[test]
    fn prop_ellipse_radius_bounded(
        angle_normalized in 0.0f32..1.0,
        semi_major in 10.0f32..800.0,
        eccentricity in 0.0f32..0.9,
    ) {
        let angle = angle_normalized * TAU;
        let pos = ellipse_position(angle, semi_major, eccentricity, 0.0);
        let r = pos.length();

        let perihelion = semi_major * (1.0 - eccentricity);
        let aphelion = semi_major * (1.0 + eccentricity);

        prop_assert!(
            r >= perihelion * 0.999 && r <= aphelion * 1.001,
            "r={} outside [{}, {}] for a={}, e={}",
            r, perihelion, aphelion, semi_major, eccentricity
        );
    }

    /// A full revolution returns to the starting point.
    #[test]
    fn prop_ellipse_periodic(
        angle in 0.0f32..TAU,
        semi_major in 10.0f32..200.0,
        eccentricity in 0.0f32..0.5,
        inclination in 0.0f32..0.3,
    ) {
        let p0 = ellipse_position(angle, semi_major, eccentricity, inclination);
        let p1 = ellipse_position(angle + TAU, semi_major, eccentricity, inclination);
        prop_assert!(p0.distance(p1) < semi_major * 1e-4);
    }

    /// Vertical excursion is bounded by the in-plane radius times the
    /// sine of the inclination.
    #[test]
    fn prop_inclination_bounds_height(
        angle in 0.0f32..TAU,
        semi_major in 10.0f32..200.0,
        eccentricity in 0.0f32..0.5,
        inclination in 0.0f32..0.5,
    ) {
        let pos = ellipse_position(angle, semi_major, eccentricity, inclination);
        let max_r = semi_major * (1.0 + eccentricity);
        prop_assert!(pos.y.abs() <= max_r * inclination.sin() + 1e-3);
    }

    /// The trail buffer never exceeds its capacity and stays internally
    /// consistent no matter how many samples are pushed.
    #[test]
    fn prop_trail_never_exceeds_capacity(pushes in 0usize..400) {
        let mut trail = TrailBuffer::default();
        for i in 0..pushes {
            trail.push_throttled(Vec3::splat(i as f32), TRAIL_SAMPLE_INTERVAL);
        }
        prop_assert!(trail.len() <= TRAIL_CAPACITY);
        prop_assert_eq!(trail.iter_ordered().count(), trail.len());
    }

    /// Trail points come out oldest-first regardless of wrap position.
    #[test]
    fn prop_trail_ordered(pushes in 2usize..400) {
        let mut trail = TrailBuffer::default();
        for i in 0..pushes {
            trail.push_throttled(Vec3::splat(i as f32), TRAIL_SAMPLE_INTERVAL);
        }
        let points: Vec<Vec3> = trail.iter_ordered().collect();
        for pair in points.windows(2) {
            prop_assert!(pair[1].x - pair[0].x == 1.0);
        }
    }

    /// Comparison lineup never overlaps bodies, whatever radii they have.
    #[test]
    fn prop_lineup_never_overlaps(
        r1 in 0.1f32..10.0,
        r2 in 0.1f32..10.0,
        r3 in 0.1f32..10.0,
    ) {
        let placed = lineup_positions(&[
            (BodyId::Mercury, r1),
            (BodyId::Venus, r2),
            (BodyId::Earth, r3),
        ]);
        let radius_of = |id: BodyId| match id {
            BodyId::Mercury => r1,
            BodyId::Venus => r2,
            _ => r3,
        };
        for pair in placed.windows(2) {
            let gap = pair[1].1.x - pair[0].1.x;
            prop_assert!(gap >= radius_of(pair[0].0) + radius_of(pair[1].0));
        }
    }
}
