//! Phosphor icon definitions for the UI.
//!
//! Provides icon constants using the Phosphor icon font.
//! Icons are initialized via `setup_fonts` when the app starts.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

/// Resource to track if fonts have been initialized.
#[derive(Resource, Default)]
pub struct FontsInitialized(pub bool);

/// System to initialize Phosphor icon fonts.
/// Runs in EguiPrimaryContextPass where the egui context is guaranteed to be ready.
pub fn setup_fonts(mut contexts: EguiContexts, mut initialized: ResMut<FontsInitialized>) {
    if initialized.0 {
        return;
    }

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);

    ctx.set_fonts(fonts);
    initialized.0 = true;

    info!("Phosphor icon fonts initialized");
}

// Re-export commonly used icons with semantic names for our app.
// Browse all icons at https://phosphoricons.com/

/// Play icon (triangle pointing right)
pub const PLAY: &str = egui_phosphor::regular::PLAY;
/// Pause icon (two vertical bars)
pub const PAUSE: &str = egui_phosphor::regular::PAUSE;
/// Reset view icon (circular arrow)
pub const RESET: &str = egui_phosphor::regular::ARROW_COUNTER_CLOCKWISE;
/// Screenshot icon
pub const SCREENSHOT: &str = egui_phosphor::regular::CAMERA;
/// Orbit lines icon
pub const ORBITS: &str = egui_phosphor::regular::CIRCLE_DASHED;
/// Motion trails icon
pub const TRAILS: &str = egui_phosphor::regular::WAVE_SINE;
/// Size comparison icon
pub const COMPARE: &str = egui_phosphor::regular::CHART_BAR;
/// Guided tour icon
pub const TOUR: &str = egui_phosphor::regular::COMPASS;
/// Gravity mode icon
pub const GRAVITY: &str = egui_phosphor::regular::MAGNET;
/// Constellation overlay icon
pub const CONSTELLATIONS: &str = egui_phosphor::regular::SPARKLE;
/// Spacecraft paths icon
pub const SPACECRAFT: &str = egui_phosphor::regular::ROCKET;
/// Distance scale icon
pub const SCALE: &str = egui_phosphor::regular::RULER;
/// Picture-in-picture icon
pub const PIP: &str = egui_phosphor::regular::PICTURE_IN_PICTURE;
/// Share pose icon
pub const SHARE: &str = egui_phosphor::regular::SHARE_NETWORK;
/// Music playing icon
pub const MUSIC_ON: &str = egui_phosphor::regular::SPEAKER_HIGH;
/// Music muted icon
pub const MUSIC_OFF: &str = egui_phosphor::regular::SPEAKER_SLASH;
/// Search icon
pub const SEARCH: &str = egui_phosphor::regular::MAGNIFYING_GLASS;
/// Close/X icon
pub const CLOSE: &str = egui_phosphor::regular::X;

// Celestial body icons for search results
/// Sun icon
pub const SUN: &str = egui_phosphor::regular::SUN;
/// Planet/globe icon
pub const PLANET: &str = egui_phosphor::regular::GLOBE;
