//! Background music.
//!
//! The looping track is only spawned on the first unmute, then paused and
//! resumed through its sink. Muting before the asset finishes loading
//! despawns the pending entity so nothing starts playing later, and a load
//! failure reverts the state to stopped. Volume edits from the UI are
//! clamped to the valid range before they reach the sink.

use bevy::asset::LoadState;
use bevy::audio::{AudioSink, AudioSinkPlayback, PlaybackSettings, Volume};
use bevy::prelude::*;

/// Asset path of the looping ambient track.
const MUSIC_PATH: &str = "audio/ambient.ogg";

/// Toggle music playback on or off.
#[derive(Message)]
pub struct ToggleAudio;

/// Music playback state mirrored into the UI.
#[derive(Resource)]
pub struct AudioState {
    pub playing: bool,
    /// Linear volume in `[0, 1]`.
    volume: f32,
}

impl Default for AudioState {
    fn default() -> Self {
        Self {
            playing: false,
            volume: 0.5,
        }
    }
}

impl AudioState {
    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }
}

/// Marker for the background music entity. At most one exists.
#[derive(Component)]
struct BackgroundMusic;

/// Work needed to reconcile the music entity with the desired state.
///
/// The sink component only appears once the asset has loaded, so the
/// entity can exist in a pending, sinkless state.
#[derive(Debug, PartialEq, Eq)]
enum ToggleAction {
    Spawn,
    Play,
    Pause,
    Despawn,
    Wait,
    None,
}

fn toggle_action(playing: bool, has_entity: bool, has_sink: bool) -> ToggleAction {
    match (playing, has_entity, has_sink) {
        (true, false, _) => ToggleAction::Spawn,
        (true, true, true) => ToggleAction::Play,
        (true, true, false) => ToggleAction::Wait,
        (false, true, true) => ToggleAction::Pause,
        (false, true, false) => ToggleAction::Despawn,
        (false, false, _) => ToggleAction::None,
    }
}

/// Plugin owning the ambient music loop.
pub struct AudioControlPlugin;

impl Plugin for AudioControlPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AudioState>()
            .add_message::<ToggleAudio>()
            .add_systems(Update, (handle_audio_toggle, watch_music_load, apply_volume));
    }
}

/// Flip playback. The audio entity spawns lazily on the first unmute so
/// nothing plays before the user asks for it.
fn handle_audio_toggle(
    mut messages: MessageReader<ToggleAudio>,
    mut state: ResMut<AudioState>,
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    music: Query<(Entity, Option<&AudioSink>), With<BackgroundMusic>>,
) {
    // Collapse multiple toggles in one frame to their net effect so a
    // single reconcile step never spawns and despawns together.
    let toggles = messages.read().count();
    if toggles == 0 {
        return;
    }
    if toggles % 2 == 1 {
        state.playing = !state.playing;
    }

    let (entity, sink) = match music.single() {
        Ok((entity, sink)) => (Some(entity), sink),
        Err(_) => (None, None),
    };

    match toggle_action(state.playing, entity.is_some(), sink.is_some()) {
        ToggleAction::Spawn => {
            commands.spawn((
                AudioPlayer::new(asset_server.load(MUSIC_PATH)),
                PlaybackSettings::LOOP.with_volume(Volume::Linear(state.volume)),
                BackgroundMusic,
            ));
        }
        ToggleAction::Play => {
            if let Some(sink) = sink {
                sink.play();
            }
        }
        ToggleAction::Pause => {
            if let Some(sink) = sink {
                sink.pause();
            }
        }
        ToggleAction::Despawn => {
            if let Some(entity) = entity {
                commands.entity(entity).despawn();
            }
        }
        ToggleAction::Wait | ToggleAction::None => {}
    }

    info!("Music {}", if state.playing { "playing" } else { "muted" });
}

/// Revert to stopped if the pending track fails to load.
fn watch_music_load(
    mut state: ResMut<AudioState>,
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    music: Query<(Entity, &AudioPlayer), (With<BackgroundMusic>, Without<AudioSink>)>,
) {
    let Ok((entity, player)) = music.single() else {
        return;
    };

    if let Some(LoadState::Failed(_)) = asset_server.get_load_state(&player.0) {
        warn!("Could not load {MUSIC_PATH}; music stays off");
        commands.entity(entity).despawn();
        state.playing = false;
    }
}

/// Push volume changes from the UI into the sink.
fn apply_volume(state: Res<AudioState>, mut music: Query<&mut AudioSink, With<BackgroundMusic>>) {
    if !state.is_changed() {
        return;
    }
    if let Ok(mut sink) = music.single_mut() {
        sink.set_volume(Volume::Linear(state.volume));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_clamped() {
        let mut state = AudioState::default();
        state.set_volume(1.5);
        assert_eq!(state.volume(), 1.0);
        state.set_volume(-0.2);
        assert_eq!(state.volume(), 0.0);
    }

    #[test]
    fn test_default_muted() {
        let state = AudioState::default();
        assert!(!state.playing);
        assert_eq!(state.volume(), 0.5);
    }

    #[test]
    fn test_first_unmute_spawns_the_entity() {
        assert_eq!(toggle_action(true, false, false), ToggleAction::Spawn);
    }

    #[test]
    fn test_unmute_never_spawns_a_second_entity() {
        // With the entity already present, unmuting either resumes the
        // sink or waits for the asset; it must not spawn again.
        assert_eq!(toggle_action(true, true, true), ToggleAction::Play);
        assert_eq!(toggle_action(true, true, false), ToggleAction::Wait);
    }

    #[test]
    fn test_mute_before_load_cancels_pending_playback() {
        // No sink yet means the asset is still loading; muting must tear
        // the entity down so the track never starts on its own.
        assert_eq!(toggle_action(false, true, false), ToggleAction::Despawn);
    }

    #[test]
    fn test_mute_with_sink_pauses() {
        assert_eq!(toggle_action(false, true, true), ToggleAction::Pause);
    }

    #[test]
    fn test_mute_without_entity_does_nothing() {
        assert_eq!(toggle_action(false, false, false), ToggleAction::None);
    }
}
