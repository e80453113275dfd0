//! Keyboard shortcuts.
//!
//! Mirrors the on-screen controls: every toggle button has a single-key
//! shortcut, suppressed while egui owns the keyboard (typing in the search
//! field must not flip toggles).

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::audio::ToggleAudio;
use crate::camera::ResetView;
use crate::scene::{
    SelectedBody, TakeScreenshot, ToggleComparison, ToggleScale, ToggleTour, ToggleTrails,
};
use crate::types::{SimulationClock, ViewToggles};
use crate::ui::search::SearchState;

/// Plugin providing keyboard input handling.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, keyboard_shortcuts);
    }
}

/// Handle the single-key shortcuts.
#[allow(clippy::too_many_arguments)]
fn keyboard_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    mut contexts: EguiContexts,
    mut clock: ResMut<SimulationClock>,
    mut toggles: ResMut<ViewToggles>,
    mut search: ResMut<SearchState>,
    mut selected: ResMut<SelectedBody>,
    mut audio: MessageWriter<ToggleAudio>,
    mut trails: MessageWriter<ToggleTrails>,
    mut comparison: MessageWriter<ToggleComparison>,
    mut scale: MessageWriter<ToggleScale>,
    mut tour: MessageWriter<ToggleTour>,
    mut screenshot: MessageWriter<TakeScreenshot>,
    mut reset: MessageWriter<ResetView>,
) {
    if let Some(ctx) = contexts.ctx_mut().ok() {
        if ctx.wants_keyboard_input() {
            return;
        }
    }

    if keys.just_pressed(KeyCode::Space) {
        clock.paused = !clock.paused;
        info!(
            "Simulation {}",
            if clock.paused { "paused" } else { "running" }
        );
    }

    if keys.just_pressed(KeyCode::KeyM) {
        audio.write(ToggleAudio);
    }

    if keys.just_pressed(KeyCode::KeyO) {
        toggles.orbits = !toggles.orbits;
        info!(
            "Orbit lines {}",
            if toggles.orbits { "shown" } else { "hidden" }
        );
    }

    if keys.just_pressed(KeyCode::KeyT) {
        trails.write(ToggleTrails);
    }

    if keys.just_pressed(KeyCode::KeyC) {
        comparison.write(ToggleComparison);
    }

    if keys.just_pressed(KeyCode::KeyG) {
        tour.write(ToggleTour);
    }

    if keys.just_pressed(KeyCode::KeyP) {
        screenshot.write(TakeScreenshot);
    }

    if keys.just_pressed(KeyCode::KeyR) {
        reset.write(ResetView);
    }

    if keys.just_pressed(KeyCode::KeyN) {
        toggles.constellations = !toggles.constellations;
        info!(
            "Constellations {}",
            if toggles.constellations {
                "shown"
            } else {
                "hidden"
            }
        );
    }

    if keys.just_pressed(KeyCode::KeyV) {
        toggles.spacecraft = !toggles.spacecraft;
        info!(
            "Spacecraft paths {}",
            if toggles.spacecraft { "shown" } else { "hidden" }
        );
    }

    if keys.just_pressed(KeyCode::KeyK) {
        scale.write(ToggleScale);
    }

    if keys.just_pressed(KeyCode::KeyF) {
        toggles.pip = !toggles.pip;
    }

    // Slash jumps into the search field
    if keys.just_pressed(KeyCode::Slash) {
        search.focus_requested = true;
    }

    if keys.just_pressed(KeyCode::Escape) && selected.id.is_some() {
        selected.id = None;
    }
}
