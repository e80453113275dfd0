//! Orbit path lines.
//!
//! Each planet's full ellipse is sampled once into a polyline cache and
//! redrawn every frame with gizmos. The cache is marked dirty by the scale
//! toggle, which is the only thing that changes orbit geometry.

use bevy::prelude::*;

use crate::catalog::BodyId;
use crate::scene::bodies::{ellipse_position, CelestialBody, OrbitState};
use crate::scene::SelectedBody;
use crate::types::ViewToggles;

/// Segments per orbit ellipse.
pub const ORBIT_SEGMENTS: usize = 128;

/// Faint white for regular orbit lines.
const ORBIT_ALPHA: f32 = 0.1;

/// Highlight color for the selected body's orbit.
const HIGHLIGHT_COLOR: Color = Color::srgba(0.39, 0.71, 0.96, 0.5);

/// Cached orbit polylines, one closed loop per planet.
#[derive(Resource, Default)]
pub struct OrbitPathCache {
    paths: Vec<(BodyId, Vec<Vec3>)>,
    /// Set when orbit geometry changed and paths need resampling.
    pub dirty: bool,
}

impl OrbitPathCache {
    pub fn path_for(&self, id: BodyId) -> Option<&[Vec3]> {
        self.paths
            .iter()
            .find(|(path_id, _)| *path_id == id)
            .map(|(_, points)| points.as_slice())
    }
}

/// Sample one full ellipse into a closed polyline.
pub fn sample_orbit_path(orbit: &OrbitState, segments: usize) -> Vec<Vec3> {
    (0..=segments)
        .map(|i| {
            let angle = i as f32 / segments as f32 * std::f32::consts::TAU;
            ellipse_position(angle, orbit.orbit_radius, orbit.eccentricity, orbit.inclination)
        })
        .collect()
}

/// Plugin owning the orbit line cache and renderer.
pub struct OrbitPathPlugin;

impl Plugin for OrbitPathPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(OrbitPathCache {
            paths: Vec::new(),
            dirty: true,
        })
        .add_systems(Update, (rebuild_orbit_paths, draw_orbit_paths).chain());
    }
}

/// Resample every orbit polyline when the cache is dirty.
///
/// Dirty on the first frame (planets spawn during Startup) and again after
/// each scale toggle.
fn rebuild_orbit_paths(
    mut cache: ResMut<OrbitPathCache>,
    planets: Query<(&CelestialBody, &OrbitState)>,
) {
    if !cache.dirty || planets.is_empty() {
        return;
    }

    cache.paths = planets
        .iter()
        .map(|(body, orbit)| (body.id, sample_orbit_path(orbit, ORBIT_SEGMENTS)))
        .collect();
    cache.dirty = false;

    info!("Rebuilt {} orbit paths", cache.paths.len());
}

fn draw_orbit_paths(
    mut gizmos: Gizmos,
    cache: Res<OrbitPathCache>,
    selected: Res<SelectedBody>,
    toggles: Res<ViewToggles>,
) {
    if toggles.comparison {
        return;
    }

    for (id, points) in &cache.paths {
        let Some(color) = path_color(selected.id == Some(*id), toggles.orbits) else {
            continue;
        };
        for pair in points.windows(2) {
            gizmos.line(pair[0], pair[1], color);
        }
    }
}

/// Line color for one orbit, if it should be drawn at all. The selected
/// body's highlight stays visible even with orbit lines toggled off.
fn path_color(is_selected: bool, orbits_visible: bool) -> Option<Color> {
    if is_selected {
        Some(HIGHLIGHT_COLOR)
    } else if orbits_visible {
        Some(Color::WHITE.with_alpha(ORBIT_ALPHA))
    } else {
        None
    }
}
