//! Scene engine: bodies, motion, toggles, effects, and auxiliary views.

pub mod bodies;
pub mod compare;
pub mod constellations;
pub mod effects;
pub mod gravity;
pub mod moons;
pub mod motion;
pub mod orbits;
pub mod picking;
pub mod scale;
pub mod screenshot;
pub mod spacecraft;
pub mod tour;
pub mod trails;
pub mod viewports;

#[cfg(test)]
mod proptest_orbit;

use bevy::prelude::*;

use crate::catalog::BodyId;

use self::bodies::BodiesPlugin;
use self::compare::ComparisonPlugin;
use self::constellations::ConstellationPlugin;
use self::effects::EffectsPlugin;
use self::gravity::GravityPlugin;
use self::moons::MoonsPlugin;
use self::motion::advance_orbits;
use self::orbits::OrbitPathPlugin;
use self::picking::PickingPlugin;
use self::scale::ScalePlugin;
use self::screenshot::ScreenshotPlugin;
use self::spacecraft::SpacecraftPlugin;
use self::tour::TourPlugin;
use self::trails::TrailsPlugin;
use self::viewports::ViewportsPlugin;

// Re-exports for the UI and input layers.
pub use self::bodies::CelestialBody;
pub use self::picking::HoveredBody;
pub use self::tour::TourState;

/// Resource tracking the body shown in the info panel, if any.
#[derive(Resource, Default)]
pub struct SelectedBody {
    pub id: Option<BodyId>,
}

/// Toggle trail recording; disabling clears all buffers.
#[derive(Message)]
pub struct ToggleTrails;

/// Toggle the size-comparison lineup.
#[derive(Message)]
pub struct ToggleComparison;

/// Toggle between compressed and realistic orbit distances.
#[derive(Message)]
pub struct ToggleScale;

/// Toggle the gravity simulation on or off.
#[derive(Message)]
pub struct ToggleGravity;

/// Start or stop the guided tour.
#[derive(Message)]
pub struct ToggleTour;

/// Capture the primary window to a PNG.
#[derive(Message)]
pub struct TakeScreenshot;

/// Plugin aggregating the whole scene.
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SelectedBody>()
            .init_resource::<crate::types::ViewToggles>()
            .add_message::<ToggleTrails>()
            .add_message::<ToggleComparison>()
            .add_message::<ToggleScale>()
            .add_message::<ToggleGravity>()
            .add_message::<ToggleTour>()
            .add_message::<TakeScreenshot>()
            .add_plugins((
                BodiesPlugin,
                TrailsPlugin,
                GravityPlugin,
                MoonsPlugin,
                OrbitPathPlugin,
                ComparisonPlugin,
                ScalePlugin,
                EffectsPlugin,
                ConstellationPlugin,
                SpacecraftPlugin,
                TourPlugin,
                PickingPlugin,
                ViewportsPlugin,
                ScreenshotPlugin,
            ))
            // Position-related systems need explicit ordering:
            // 1. advance_orbits - Keplerian positions and self-rotation
            // 2. integrate_gravity - replaces positions while gravity mode is on
            // 3. update_moons - moons follow their primary's final position
            // 4. record_trails - samples final positions
            .add_systems(
                Update,
                (
                    advance_orbits,
                    gravity::integrate_gravity,
                    moons::update_moons,
                    trails::record_trails,
                )
                    .chain(),
            );
    }
}
