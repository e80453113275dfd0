//! Scale toggle between compressed and realistic orbit distances.
//!
//! Compressed mode keeps every orbit on screen; realistic mode spreads them
//! proportionally to true semi-major axes (Earth at 20 units). Radii come
//! straight from the config table, so toggling back and forth is an exact
//! round trip.

use bevy::prelude::*;

use crate::camera::{CameraLimits, MAX_DISTANCE, MAX_DISTANCE_REALISTIC};
use crate::catalog::BodyId;
use crate::scene::bodies::{config_for, CelestialBody, OrbitState};
use crate::scene::orbits::OrbitPathCache;
use crate::scene::ToggleScale;
use crate::types::ViewToggles;

/// Orbit radius for a planet under the given scale mode.
pub fn orbit_radius_for(id: BodyId, realistic: bool) -> Option<f32> {
    config_for(id).map(|cfg| if realistic { cfg.real_orbit } else { cfg.orbit })
}

/// Plugin providing the distance-scale toggle.
pub struct ScalePlugin;

impl Plugin for ScalePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, handle_scale_toggle);
    }
}

/// Swap orbit radii, reposition planets, and widen the zoom limit.
fn handle_scale_toggle(
    mut messages: MessageReader<ToggleScale>,
    mut toggles: ResMut<ViewToggles>,
    mut limits: ResMut<CameraLimits>,
    mut cache: ResMut<OrbitPathCache>,
    mut planets: Query<(&CelestialBody, &mut OrbitState, &mut Transform)>,
) {
    for _ in messages.read() {
        toggles.realistic_scale = !toggles.realistic_scale;

        for (body, mut orbit, mut transform) in planets.iter_mut() {
            let Some(radius) = orbit_radius_for(body.id, toggles.realistic_scale) else {
                continue;
            };
            orbit.orbit_radius = radius;
            transform.translation = orbit.position();
        }

        cache.dirty = true;
        limits.max_distance = if toggles.realistic_scale {
            MAX_DISTANCE_REALISTIC
        } else {
            MAX_DISTANCE
        };

        info!(
            "Distance scale: {}",
            if toggles.realistic_scale {
                "realistic"
            } else {
                "compressed"
            }
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_earth_realistic_radius() {
        assert_eq!(orbit_radius_for(BodyId::Earth, false), Some(33.0));
        assert_eq!(orbit_radius_for(BodyId::Earth, true), Some(20.0));
    }

    #[test]
    fn test_sun_has_no_orbit_radius() {
        assert_eq!(orbit_radius_for(BodyId::Sun, false), None);
    }

    #[test]
    fn test_round_trip_is_exact() {
        for id in BodyId::PLANETS {
            let compressed = orbit_radius_for(id, false);
            let realistic = orbit_radius_for(id, true);
            assert!(compressed.is_some() && realistic.is_some());
            // Values come from a static table, so back-and-forth is lossless
            assert_eq!(orbit_radius_for(id, false), compressed);
        }
    }

    #[test]
    fn test_realistic_spreads_outer_planets() {
        let saturn_compressed = orbit_radius_for(BodyId::Saturn, false).unwrap();
        let saturn_realistic = orbit_radius_for(BodyId::Saturn, true).unwrap();
        assert!(saturn_realistic > saturn_compressed);

        // Inner planets compress the other way
        let mercury_compressed = orbit_radius_for(BodyId::Mercury, false).unwrap();
        let mercury_realistic = orbit_radius_for(BodyId::Mercury, true).unwrap();
        assert!(mercury_realistic < mercury_compressed);
    }
}
