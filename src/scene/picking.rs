//! Mouse picking: hover highlight and click-to-focus.
//!
//! Bodies are hit-tested as bounding spheres against a ray cast through the
//! cursor. A click only counts if the mouse barely moved between press and
//! release, so orbit drags never trigger an accidental focus.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;

use crate::camera::{FocusRequest, MainCamera};
use crate::catalog::BodyId;
use crate::scene::bodies::CelestialBody;
use crate::scene::SelectedBody;

/// Maximum cursor travel in pixels for a press to count as a click.
const CLICK_SLOP: f32 = 5.0;

/// Resource naming the body currently under the cursor.
#[derive(Resource, Default)]
pub struct HoveredBody {
    pub id: Option<BodyId>,
}

/// Tracks the cursor position at mouse-press for drag rejection.
#[derive(Resource, Default)]
struct PressTracker {
    position: Option<Vec2>,
}

/// Ray-sphere intersection; returns the near hit distance along the ray.
pub fn ray_sphere_intersect(origin: Vec3, direction: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = origin - center;
    let b = oc.dot(direction);
    let c = oc.length_squared() - radius * radius;
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }
    let t = -b - discriminant.sqrt();
    (t > 0.0).then_some(t)
}

/// Plugin wiring hover and click handling.
pub struct PickingPlugin;

impl Plugin for PickingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HoveredBody>()
            .init_resource::<PressTracker>()
            .add_systems(Update, (update_hover, handle_clicks).chain());
    }
}

/// Cast a ray through the cursor and record the nearest body hit.
fn update_hover(
    mut contexts: EguiContexts,
    windows: Query<&Window, With<PrimaryWindow>>,
    camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    bodies: Query<(&CelestialBody, &Transform)>,
    mut hovered: ResMut<HoveredBody>,
) {
    hovered.id = None;

    if let Some(ctx) = contexts.ctx_mut().ok() {
        if ctx.wants_pointer_input() {
            return;
        }
    }

    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok((camera, camera_transform)) = camera.single() else {
        return;
    };
    let Ok(ray) = camera.viewport_to_world(camera_transform, cursor) else {
        return;
    };

    let mut nearest: Option<(f32, BodyId)> = None;
    for (body, transform) in bodies.iter() {
        if let Some(t) =
            ray_sphere_intersect(ray.origin, *ray.direction, transform.translation, body.radius)
        {
            if nearest.is_none_or(|(best, _)| t < best) {
                nearest = Some((t, body.id));
            }
        }
    }
    hovered.id = nearest.map(|(_, id)| id);
}

/// Select and focus the hovered body on a short click.
fn handle_clicks(
    mut contexts: EguiContexts,
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    hovered: Res<HoveredBody>,
    mut tracker: ResMut<PressTracker>,
    mut selected: ResMut<SelectedBody>,
    mut focus: MessageWriter<FocusRequest>,
) {
    if let Some(ctx) = contexts.ctx_mut().ok() {
        if ctx.wants_pointer_input() {
            tracker.position = None;
            return;
        }
    }

    let Ok(window) = windows.single() else {
        return;
    };

    if buttons.just_pressed(MouseButton::Left) {
        tracker.position = window.cursor_position();
    }

    if buttons.just_released(MouseButton::Left) {
        let Some(press) = tracker.position.take() else {
            return;
        };
        let Some(release) = window.cursor_position() else {
            return;
        };
        if press.distance(release) > CLICK_SLOP {
            return;
        }

        if let Some(id) = hovered.id {
            selected.id = Some(id);
            focus.write(FocusRequest { target: id });
            info!("Focused {}", crate::catalog::facts(id).name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ray_hits_sphere_head_on() {
        let t = ray_sphere_intersect(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z, Vec3::ZERO, 2.0);
        assert_relative_eq!(t.unwrap(), 8.0, epsilon = 1e-4);
    }

    #[test]
    fn test_ray_misses_offset_sphere() {
        let t = ray_sphere_intersect(
            Vec3::new(0.0, 5.0, 10.0),
            Vec3::NEG_Z,
            Vec3::ZERO,
            2.0,
        );
        assert!(t.is_none());
    }

    #[test]
    fn test_sphere_behind_origin_not_hit() {
        let t = ray_sphere_intersect(Vec3::new(0.0, 0.0, -10.0), Vec3::NEG_Z, Vec3::ZERO, 2.0);
        assert!(t.is_none());
    }

    #[test]
    fn test_grazing_ray_hits_edge() {
        // Ray passes exactly through the sphere's edge at y = radius
        let t = ray_sphere_intersect(
            Vec3::new(0.0, 2.0, 10.0),
            Vec3::NEG_Z,
            Vec3::ZERO,
            2.0,
        );
        assert!(t.is_some());
        assert_relative_eq!(t.unwrap(), 10.0, epsilon = 1e-3);
    }
}
