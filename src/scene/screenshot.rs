//! Window screenshot capture.

use std::time::{SystemTime, UNIX_EPOCH};

use bevy::prelude::*;
use bevy::render::view::screenshot::{save_to_disk, Screenshot};

use crate::scene::TakeScreenshot;

/// Plugin saving timestamped PNG captures of the primary window.
pub struct ScreenshotPlugin;

impl Plugin for ScreenshotPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, handle_screenshot_requests);
    }
}

fn handle_screenshot_requests(
    mut messages: MessageReader<TakeScreenshot>,
    mut commands: Commands,
) {
    for _ in messages.read() {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let path = format!("solarium-{stamp}.png");
        commands
            .spawn(Screenshot::primary_window())
            .observe(save_to_disk(path.clone()));
        info!("Saving screenshot to {path}");
    }
}
