//! Auxiliary camera viewports: the always-on minimap and the optional
//! picture-in-picture close-up of the selected body.
//!
//! Both render into fixed-size viewport rectangles layered over the main
//! view. The minimap looks straight down from above the ecliptic; the PiP
//! camera hovers beside whichever body is selected.

use bevy::camera::{ScalingMode, Viewport};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::scene::bodies::CelestialBody;
use crate::scene::SelectedBody;
use crate::types::ViewToggles;

/// Minimap viewport edge length in physical pixels.
const MINIMAP_SIZE: u32 = 180;

/// PiP viewport edge length in physical pixels.
const PIP_SIZE: u32 = 200;

/// Margin from the window edges.
const MARGIN: u32 = 10;

/// Half-extent of the minimap's orthographic view.
const MINIMAP_HALF_EXTENT: f32 = 140.0;

/// Camera offset from the PiP subject, scaled by body radius.
const PIP_OFFSET: Vec3 = Vec3::new(3.0, 2.0, 3.0);

#[derive(Component)]
pub struct MinimapCamera;

#[derive(Component)]
pub struct PipCamera;

/// Plugin spawning and steering the auxiliary cameras.
pub struct ViewportsPlugin;

impl Plugin for ViewportsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_aux_cameras)
            .add_systems(Update, (layout_viewports, follow_pip_subject));
    }
}

fn spawn_aux_cameras(mut commands: Commands) {
    // Top-down overview of the whole compressed system
    commands.spawn((
        Camera3d::default(),
        Camera {
            order: 2,
            viewport: Some(Viewport {
                physical_size: UVec2::splat(MINIMAP_SIZE),
                ..default()
            }),
            clear_color: ClearColorConfig::Custom(Color::srgba(0.0, 0.0, 0.0, 0.3)),
            ..default()
        },
        Projection::Orthographic(OrthographicProjection {
            scaling_mode: ScalingMode::Fixed {
                width: MINIMAP_HALF_EXTENT * 2.0,
                height: MINIMAP_HALF_EXTENT * 2.0,
            },
            ..OrthographicProjection::default_3d()
        }),
        Transform::from_xyz(0.0, 200.0, 0.0).looking_at(Vec3::ZERO, Vec3::NEG_Z),
        MinimapCamera,
    ));

    // Close-up camera, inactive until a body is selected and PiP is on
    commands.spawn((
        Camera3d::default(),
        Camera {
            order: 1,
            is_active: false,
            viewport: Some(Viewport {
                physical_size: UVec2::splat(PIP_SIZE),
                ..default()
            }),
            ..default()
        },
        Transform::default(),
        PipCamera,
    ));

    info!("Auxiliary cameras ready");
}

/// Pin the minimap to the bottom-left and the PiP view to the top-right,
/// tracking window resizes.
fn layout_viewports(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut minimap: Query<&mut Camera, (With<MinimapCamera>, Without<PipCamera>)>,
    mut pip: Query<&mut Camera, With<PipCamera>>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let width = window.physical_width();
    let height = window.physical_height();
    if width == 0 || height == 0 {
        return;
    }

    if let Ok(mut camera) = minimap.single_mut() {
        if let Some(viewport) = camera.viewport.as_mut() {
            viewport.physical_position =
                UVec2::new(MARGIN, height.saturating_sub(MINIMAP_SIZE + MARGIN));
        }
    }

    if let Ok(mut camera) = pip.single_mut() {
        if let Some(viewport) = camera.viewport.as_mut() {
            viewport.physical_position =
                UVec2::new(width.saturating_sub(PIP_SIZE + MARGIN), MARGIN);
        }
    }
}

/// Park the PiP camera beside the selected body, or disable it when PiP is
/// off or nothing is selected.
fn follow_pip_subject(
    toggles: Res<ViewToggles>,
    selected: Res<SelectedBody>,
    bodies: Query<(&CelestialBody, &Transform), Without<PipCamera>>,
    mut pip: Query<(&mut Camera, &mut Transform), With<PipCamera>>,
) {
    let Ok((mut camera, mut transform)) = pip.single_mut() else {
        return;
    };

    let subject = selected.id.and_then(|id| {
        bodies
            .iter()
            .find(|(body, _)| body.id == id)
            .map(|(body, body_transform)| (body.radius, body_transform.translation))
    });

    let Some((radius, position)) = subject.filter(|_| toggles.pip) else {
        camera.is_active = false;
        return;
    };

    camera.is_active = true;
    *transform =
        Transform::from_translation(position + PIP_OFFSET * radius).looking_at(position, Vec3::Y);
}
