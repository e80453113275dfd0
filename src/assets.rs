//! Deferred texture loading.
//!
//! Planet materials spawn with a gray placeholder and register a slot here.
//! Once the image asset resolves, the texture is swapped in; if loading
//! fails, the material falls back to the body's catalog color instead of
//! staying gray forever.

use bevy::asset::LoadState;
use bevy::prelude::*;

/// One material waiting for its texture.
pub struct TextureSlot {
    pub handle: Handle<Image>,
    pub material: Handle<StandardMaterial>,
    /// Catalog color applied if the image fails to load.
    pub fallback: Color,
    pub settled: bool,
}

/// Registry of materials waiting on texture loads.
#[derive(Resource, Default)]
pub struct PendingTextures {
    pub slots: Vec<TextureSlot>,
}

/// Counts for the loading indicator.
#[derive(Resource, Default)]
pub struct LoadingProgress {
    pub settled: usize,
    pub total: usize,
}

impl LoadingProgress {
    pub fn complete(&self) -> bool {
        self.settled >= self.total
    }

    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            1.0
        } else {
            self.settled as f32 / self.total as f32
        }
    }
}

/// Plugin resolving pending texture slots as assets arrive.
pub struct AssetsPlugin;

impl Plugin for AssetsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PendingTextures>()
            .init_resource::<LoadingProgress>()
            .add_systems(Update, settle_textures);
    }
}

fn settle_textures(
    asset_server: Res<AssetServer>,
    mut pending: ResMut<PendingTextures>,
    mut progress: ResMut<LoadingProgress>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    progress.total = pending.slots.len();

    for slot in pending.slots.iter_mut().filter(|s| !s.settled) {
        match asset_server.get_load_state(&slot.handle) {
            Some(LoadState::Loaded) => {
                if let Some(material) = materials.get_mut(&slot.material) {
                    material.base_color = Color::WHITE;
                    material.base_color_texture = Some(slot.handle.clone());
                }
                slot.settled = true;
            }
            Some(LoadState::Failed(_)) => {
                if let Some(material) = materials.get_mut(&slot.material) {
                    material.base_color = slot.fallback;
                }
                warn!("Texture failed to load, using catalog color");
                slot.settled = true;
            }
            _ => {}
        }
    }

    progress.settled = pending.slots.iter().filter(|s| s.settled).count();
}
