//! UI module providing the egui-based interface.
//!
//! One bottom control bar, a search window, the selected-body info panel,
//! and a small HUD. Everything renders in `EguiPrimaryContextPass` after
//! the Phosphor fonts are installed.

mod controls_bar;
mod hud;
pub mod icons;
mod info_panel;
pub mod search;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub use search::SearchState;

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SearchState>()
            .init_resource::<icons::FontsInitialized>()
            // Font initialization MUST run before any UI systems that use icons
            .add_systems(EguiPrimaryContextPass, icons::setup_fonts)
            .add_systems(
                EguiPrimaryContextPass,
                (
                    controls_bar::controls_bar_system,
                    search::search_panel_system,
                    info_panel::info_panel_system,
                    hud::hud_system,
                )
                    .after(icons::setup_fonts)
                    .run_if(|init: Res<icons::FontsInitialized>| init.0),
            );
    }
}
