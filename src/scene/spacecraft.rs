//! Voyager trajectory overlays.
//!
//! Stylized escape trajectories for both Voyager probes, starting near
//! Earth's orbit and spiraling outward past the planets. Voyager 1 climbs
//! north out of the ecliptic; Voyager 2's grand tour dips south.

use bevy::prelude::*;

use crate::types::ViewToggles;

/// Points sampled along each trajectory.
const PATH_SAMPLES: usize = 100;

const VOYAGER1_COLOR: Color = Color::srgba(0.27, 1.0, 0.27, 0.3);
const VOYAGER2_COLOR: Color = Color::srgba(1.0, 0.53, 0.27, 0.3);

/// Voyager 1 position at path parameter `t` in `[0, 1]`.
pub fn voyager1_point(t: f32) -> Vec3 {
    let r = 33.0 + t * 350.0;
    let angle = -0.5 + t * 2.5;
    Vec3::new(angle.cos() * r, t * t * 100.0, angle.sin() * r)
}

/// Voyager 2 position at path parameter `t` in `[0, 1]`.
pub fn voyager2_point(t: f32) -> Vec3 {
    let r = 33.0 + t * 400.0;
    let angle = 0.5 + t * 4.0;
    Vec3::new(angle.cos() * r, -t * t * 40.0, angle.sin() * r)
}

/// Plugin drawing spacecraft paths when enabled.
pub struct SpacecraftPlugin;

impl Plugin for SpacecraftPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, draw_spacecraft_paths);
    }
}

fn draw_spacecraft_paths(mut gizmos: Gizmos, toggles: Res<ViewToggles>) {
    if !toggles.spacecraft || toggles.comparison {
        return;
    }

    for path in [
        (voyager1_point as fn(f32) -> Vec3, VOYAGER1_COLOR),
        (voyager2_point as fn(f32) -> Vec3, VOYAGER2_COLOR),
    ] {
        let (point_at, color) = path;
        for i in 0..PATH_SAMPLES {
            let t0 = i as f32 / PATH_SAMPLES as f32;
            let t1 = (i + 1) as f32 / PATH_SAMPLES as f32;
            gizmos.line(point_at(t0), point_at(t1), color);
        }
    }
}
