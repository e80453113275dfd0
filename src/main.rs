//! Solarium - Interactive Solar System Visualization
//!
//! A desktop application rendering the solar system with orbital motion,
//! camera tours, a toy gravity mode, and an egui control surface.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use solarium::assets::AssetsPlugin;
use solarium::audio::AudioControlPlugin;
use solarium::camera::CameraPlugin;
use solarium::input::InputPlugin;
use solarium::scene::ScenePlugin;
use solarium::share::SharePlugin;
use solarium::time::TimePlugin;
use solarium::types::{SimulationClock, ViewToggles};
use solarium::ui::UiPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Solarium".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        // Insert resources before plugins that depend on them
        .insert_resource(SimulationClock::default())
        .insert_resource(ViewToggles::default())
        .insert_resource(ClearColor(Color::srgb(0.004, 0.004, 0.012)))
        // Add simulation plugins
        .add_plugins((
            TimePlugin,
            AssetsPlugin,
            CameraPlugin,
            ScenePlugin,
            SharePlugin,
            InputPlugin,
            AudioControlPlugin,
            UiPlugin,
        ))
        .run();
}
