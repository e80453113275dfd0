//! Bottom control bar.
//!
//! One horizontal strip holding playback controls, the speed slider, every
//! view toggle, audio, share, and reset. Toggle buttons highlight while
//! their mode is active, mirroring the keyboard shortcuts.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::audio::{AudioState, ToggleAudio};
use crate::camera::{CameraRig, MainCamera, ResetView};
use crate::scene::{
    TakeScreenshot, ToggleComparison, ToggleGravity, ToggleScale, ToggleTour, ToggleTrails,
    TourState,
};
use crate::share::SharePose;
use crate::types::{SimulationClock, ViewToggles, MAX_SPEED, MIN_SPEED};
use crate::ui::icons;

/// Colors for the control bar.
mod colors {
    use bevy_egui::egui::Color32;

    pub const BAR_BG: Color32 = Color32::from_rgba_premultiplied(16, 18, 30, 240);
    pub const PLAY_ICON: Color32 = Color32::from_rgb(85, 221, 136);
    pub const PAUSE_ICON: Color32 = Color32::from_rgb(221, 170, 85);
    pub const TOGGLE_ACTIVE: Color32 = Color32::from_rgb(100, 181, 246);
    pub const TOGGLE_INACTIVE: Color32 = Color32::from_rgb(150, 150, 160);
}

/// System rendering the control bar at the bottom of the window.
#[allow(clippy::too_many_arguments)]
pub fn controls_bar_system(
    mut contexts: EguiContexts,
    mut clock: ResMut<SimulationClock>,
    mut toggles: ResMut<ViewToggles>,
    tour: Res<TourState>,
    mut audio_state: ResMut<AudioState>,
    rig: Res<CameraRig>,
    camera: Query<&Transform, With<MainCamera>>,
    mut audio: MessageWriter<ToggleAudio>,
    mut trails: MessageWriter<ToggleTrails>,
    mut comparison: MessageWriter<ToggleComparison>,
    mut scale: MessageWriter<ToggleScale>,
    mut gravity: MessageWriter<ToggleGravity>,
    mut tour_toggle: MessageWriter<ToggleTour>,
    mut screenshot: MessageWriter<TakeScreenshot>,
    mut reset: MessageWriter<ResetView>,
) {
    let Some(ctx) = contexts.ctx_mut().ok() else {
        return;
    };

    egui::TopBottomPanel::bottom("controls_bar")
        .exact_height(52.0)
        .frame(
            egui::Frame::new()
                .fill(colors::BAR_BG)
                .inner_margin(egui::Margin::symmetric(16, 8)),
        )
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                ui.spacing_mut().item_spacing.x = 10.0;

                render_play_pause(ui, &mut clock);
                render_speed_slider(ui, &mut clock);

                ui.separator();

                if toggle_button(ui, icons::ORBITS, toggles.orbits, "Orbit lines (O)") {
                    toggles.orbits = !toggles.orbits;
                }
                if toggle_button(ui, icons::TRAILS, toggles.trails, "Motion trails (T)") {
                    trails.write(ToggleTrails);
                }
                if toggle_button(ui, icons::COMPARE, toggles.comparison, "Size comparison (C)") {
                    comparison.write(ToggleComparison);
                }
                if toggle_button(ui, icons::TOUR, tour.active, "Guided tour (G)") {
                    tour_toggle.write(ToggleTour);
                }
                if toggle_button(ui, icons::GRAVITY, toggles.gravity, "Gravity simulation") {
                    gravity.write(ToggleGravity);
                }
                if toggle_button(
                    ui,
                    icons::CONSTELLATIONS,
                    toggles.constellations,
                    "Constellations (N)",
                ) {
                    toggles.constellations = !toggles.constellations;
                }
                if toggle_button(ui, icons::SPACECRAFT, toggles.spacecraft, "Voyager paths (V)") {
                    toggles.spacecraft = !toggles.spacecraft;
                }
                if toggle_button(ui, icons::SCALE, toggles.realistic_scale, "Realistic scale (K)")
                {
                    scale.write(ToggleScale);
                }
                if toggle_button(ui, icons::PIP, toggles.pip, "Picture-in-picture (F)") {
                    toggles.pip = !toggles.pip;
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.spacing_mut().item_spacing.x = 10.0;

                    if toggle_button(ui, icons::RESET, false, "Reset view (R)") {
                        reset.write(ResetView);
                    }
                    if toggle_button(ui, icons::SCREENSHOT, false, "Screenshot (P)") {
                        screenshot.write(TakeScreenshot);
                    }
                    if toggle_button(ui, icons::SHARE, false, "Copy view link") {
                        if let Ok(camera_transform) = camera.single() {
                            let pose = SharePose {
                                camera: camera_transform.translation,
                                target: rig.target,
                                speed: clock.speed(),
                            };
                            ctx.copy_text(pose.encode());
                            info!("Share pose copied to clipboard");
                        }
                    }

                    render_audio_controls(ui, &mut audio_state, &mut audio);
                });
            });
        });
}

/// Play/pause toggle with state-dependent icon and color.
fn render_play_pause(ui: &mut egui::Ui, clock: &mut SimulationClock) {
    let (icon, color, tooltip) = if clock.paused {
        (icons::PLAY, colors::PLAY_ICON, "Play (Space)")
    } else {
        (icons::PAUSE, colors::PAUSE_ICON, "Pause (Space)")
    };

    let button = egui::Button::new(egui::RichText::new(icon).size(20.0).color(color))
        .min_size(egui::vec2(36.0, 32.0));
    if ui.add(button).on_hover_text(tooltip).clicked() {
        clock.paused = !clock.paused;
    }
}

/// Speed slider with a live multiplier readout.
fn render_speed_slider(ui: &mut egui::Ui, clock: &mut SimulationClock) {
    let mut speed = clock.speed();
    ui.add(
        egui::Slider::new(&mut speed, MIN_SPEED..=MAX_SPEED)
            .show_value(false)
            .logarithmic(true),
    );
    if speed != clock.speed() {
        clock.set_speed(speed);
    }
    ui.label(
        egui::RichText::new(format!("{:.1}x", clock.speed()))
            .monospace()
            .size(13.0),
    );
}

/// Volume slider plus mute toggle, right-aligned.
fn render_audio_controls(
    ui: &mut egui::Ui,
    state: &mut AudioState,
    audio: &mut MessageWriter<ToggleAudio>,
) {
    let mut volume = state.volume();
    ui.add(
        egui::Slider::new(&mut volume, 0.0..=1.0)
            .show_value(false)
            .max_decimals(2),
    );
    if volume != state.volume() {
        state.set_volume(volume);
    }

    let icon = if state.playing {
        icons::MUSIC_ON
    } else {
        icons::MUSIC_OFF
    };
    if toggle_button(ui, icon, state.playing, "Music (M)") {
        audio.write(ToggleAudio);
    }
}

/// Icon button that lights up while its mode is active. Returns whether it
/// was clicked this frame.
fn toggle_button(ui: &mut egui::Ui, icon: &str, active: bool, tooltip: &str) -> bool {
    let color = if active {
        colors::TOGGLE_ACTIVE
    } else {
        colors::TOGGLE_INACTIVE
    };
    let button = egui::Button::new(egui::RichText::new(icon).size(18.0).color(color))
        .min_size(egui::vec2(32.0, 30.0));
    ui.add(button).on_hover_text(tooltip).clicked()
}
