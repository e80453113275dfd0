//! Per-planet motion trails.
//!
//! Each planet carries a fixed-capacity ring buffer of recent positions,
//! sampled at a throttled rate in simulation time and drawn as a fading
//! polyline in the body's catalog color.

use bevy::prelude::*;

use crate::catalog;
use crate::scene::bodies::{CelestialBody, OrbitState};
use crate::scene::ToggleTrails;
use crate::types::{SimulationClock, ViewToggles};

/// Maximum number of trail points per planet.
pub const TRAIL_CAPACITY: usize = 120;

/// Minimum simulated seconds between trail samples.
pub const TRAIL_SAMPLE_INTERVAL: f32 = 0.15;

/// Base opacity of trail lines.
const TRAIL_ALPHA: f32 = 0.3;

/// Fixed-capacity ring buffer of trail points.
#[derive(Component, Clone, Debug)]
pub struct TrailBuffer {
    points: Vec<Vec3>,
    /// Next write position; wraps modulo capacity.
    cursor: usize,
    /// Number of valid points; saturates at capacity.
    len: usize,
    /// Simulated seconds since the last sample.
    timer: f32,
}

impl Default for TrailBuffer {
    fn default() -> Self {
        Self {
            points: vec![Vec3::ZERO; TRAIL_CAPACITY],
            cursor: 0,
            len: 0,
            timer: 0.0,
        }
    }
}

impl TrailBuffer {
    /// Number of valid points in the buffer.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Record a position if the sample interval has elapsed.
    ///
    /// Returns whether a point was actually written.
    pub fn push_throttled(&mut self, position: Vec3, sim_delta: f32) -> bool {
        self.timer += sim_delta;
        if self.timer < TRAIL_SAMPLE_INTERVAL {
            return false;
        }
        self.timer = 0.0;
        self.points[self.cursor] = position;
        self.cursor = (self.cursor + 1) % TRAIL_CAPACITY;
        if self.len < TRAIL_CAPACITY {
            self.len += 1;
        }
        true
    }

    /// Drop all points; the next sample starts a fresh trail.
    pub fn clear(&mut self) {
        self.cursor = 0;
        self.len = 0;
        self.timer = 0.0;
    }

    /// Iterate points from oldest to newest.
    pub fn iter_ordered(&self) -> impl Iterator<Item = Vec3> + '_ {
        let start = if self.len < TRAIL_CAPACITY {
            0
        } else {
            self.cursor
        };
        (0..self.len).map(move |i| self.points[(start + i) % TRAIL_CAPACITY])
    }
}

/// Plugin providing trail recording and rendering.
pub struct TrailsPlugin;

impl Plugin for TrailsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (handle_trail_toggle, draw_trails));
    }
}

/// Sample planet positions into their trail buffers.
///
/// Runs after motion and gravity so it sees final positions. Frozen while
/// paused or lined up for comparison.
pub fn record_trails(
    clock: Res<SimulationClock>,
    toggles: Res<ViewToggles>,
    time: Res<Time>,
    mut planets: Query<(&Transform, &mut TrailBuffer), With<OrbitState>>,
) {
    if !toggles.trails || clock.paused || toggles.comparison {
        return;
    }

    let t = clock.scaled_delta(time.delta_secs());
    for (transform, mut trail) in planets.iter_mut() {
        trail.push_throttled(transform.translation, t);
    }
}

/// Flip the trails flag; disabling clears every buffer so re-enabling
/// starts from scratch.
fn handle_trail_toggle(
    mut messages: MessageReader<ToggleTrails>,
    mut toggles: ResMut<ViewToggles>,
    mut planets: Query<&mut TrailBuffer>,
) {
    for _ in messages.read() {
        toggles.trails = !toggles.trails;
        if !toggles.trails {
            for mut trail in planets.iter_mut() {
                trail.clear();
            }
        }
        info!(
            "Trails {}",
            if toggles.trails { "enabled" } else { "cleared" }
        );
    }
}

/// Draw each trail as a polyline fading from transparent (oldest) to the
/// body color (newest).
fn draw_trails(
    mut gizmos: Gizmos,
    toggles: Res<ViewToggles>,
    planets: Query<(&CelestialBody, &TrailBuffer)>,
) {
    if !toggles.trails || toggles.comparison {
        return;
    }

    for (body, trail) in planets.iter() {
        if trail.len() < 2 {
            continue;
        }

        let base = catalog::facts(body.id).color();
        let count = trail.len();
        let mut prev: Option<Vec3> = None;

        for (i, point) in trail.iter_ordered().enumerate() {
            if let Some(p0) = prev {
                let fade = i as f32 / count as f32;
                gizmos.line(p0, point, base.with_alpha(TRAIL_ALPHA * fade));
            }
            prev = Some(point);
        }
    }
}
