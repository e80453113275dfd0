//! Size-comparison mode.
//!
//! Freezes the simulation and lines every body up on the X axis, smallest
//! to largest, so relative radii are easy to read. Original positions are
//! snapshotted on entry and restored on exit; moons are hidden while the
//! lineup is active.

use bevy::prelude::*;

use crate::camera::{CameraRig, MainCamera, ResetView};
use crate::catalog::BodyId;
use crate::scene::bodies::CelestialBody;
use crate::scene::moons::Moon;
use crate::scene::ToggleComparison;
use crate::types::ViewToggles;

/// Left edge of the lineup.
const LINEUP_START_X: f32 = -40.0;

/// Camera pose framing the whole row.
const LINEUP_CAMERA: Vec3 = Vec3::new(0.0, 15.0, 60.0);

/// Saved world positions for restoring after comparison mode.
#[derive(Resource, Default)]
pub struct ComparisonSnapshot {
    positions: Vec<(BodyId, Vec3)>,
}

/// Lineup positions for a set of bodies, sorted by ascending radius.
///
/// Each body advances the cursor by its radius plus a one-unit gap before
/// placement and radius plus two units after, so neighbors never touch.
pub fn lineup_positions(bodies: &[(BodyId, f32)]) -> Vec<(BodyId, Vec3)> {
    let mut sorted: Vec<(BodyId, f32)> = bodies.to_vec();
    sorted.sort_by(|a, b| a.1.total_cmp(&b.1));

    let mut x = LINEUP_START_X;
    let mut out = Vec::with_capacity(sorted.len());
    for (id, radius) in sorted {
        x += radius + 1.0;
        out.push((id, Vec3::new(x, 0.0, 0.0)));
        x += radius + 2.0;
    }
    out
}

/// Plugin providing the comparison lineup.
pub struct ComparisonPlugin;

impl Plugin for ComparisonPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ComparisonSnapshot>()
            .add_systems(Update, handle_comparison_toggle);
    }
}

/// Enter or leave comparison mode.
///
/// A view reset also leaves it, without restoring the camera pose twice.
fn handle_comparison_toggle(
    mut toggle_messages: MessageReader<ToggleComparison>,
    mut reset_messages: MessageReader<ResetView>,
    mut toggles: ResMut<ViewToggles>,
    mut snapshot: ResMut<ComparisonSnapshot>,
    mut rig: ResMut<CameraRig>,
    mut bodies: Query<(&CelestialBody, &mut Transform), Without<MainCamera>>,
    mut moons: Query<&mut Visibility, With<Moon>>,
    mut camera: Query<&mut Transform, With<MainCamera>>,
) {
    let mut flips = toggle_messages.read().count();
    if reset_messages.read().next().is_some() && toggles.comparison {
        flips += 1;
    }
    if flips % 2 == 0 {
        return;
    }

    toggles.comparison = !toggles.comparison;

    if toggles.comparison {
        snapshot.positions = bodies
            .iter()
            .map(|(body, transform)| (body.id, transform.translation))
            .collect();

        let radii: Vec<(BodyId, f32)> = bodies
            .iter()
            .map(|(body, _)| (body.id, body.radius))
            .collect();
        for (id, position) in lineup_positions(&radii) {
            if let Some((_, mut transform)) =
                bodies.iter_mut().find(|(body, _)| body.id == id)
            {
                transform.translation = position;
            }
        }

        for mut visibility in moons.iter_mut() {
            *visibility = Visibility::Hidden;
        }

        if let Ok(mut camera_transform) = camera.single_mut() {
            *camera_transform =
                Transform::from_translation(LINEUP_CAMERA).looking_at(Vec3::ZERO, Vec3::Y);
        }
        rig.target = Vec3::ZERO;

        info!("Comparison lineup entered");
    } else {
        for (id, position) in snapshot.positions.drain(..) {
            if let Some((_, mut transform)) =
                bodies.iter_mut().find(|(body, _)| body.id == id)
            {
                transform.translation = position;
            }
        }

        for mut visibility in moons.iter_mut() {
            *visibility = Visibility::Inherited;
        }

        info!("Comparison lineup exited");
    }
}
