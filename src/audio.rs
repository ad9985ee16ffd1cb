// audio.rs - Rain loop and the catch sound
//
// Both outputs are fire-and-forget: audio is played by spawning an entity
// with an AudioPlayer component. The catch sound reacts to the DropCaught
// event through an observer, so the simulation code never has to know that
// audio exists.

use bevy::audio::Volume;
use bevy::prelude::*;

use crate::assets::GameAssets;
use crate::config::Settings;
use crate::raindrops::DropCaught;
use crate::states::GameState;

pub struct GameAudioPlugin;

impl Plugin for GameAudioPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Playing), start_rain_music)
            .add_observer(on_drop_caught);
    }
}

/// Starts the ambient rain track when the play screen is shown. It loops
/// for the rest of the session.
fn start_rain_music(mut commands: Commands, assets: Res<GameAssets>, settings: Res<Settings>) {
    commands.spawn((
        AudioPlayer::new(assets.rain_music.clone()),
        PlaybackSettings::LOOP.with_volume(Volume::Linear(settings.audio.music_volume)),
    ));
}

/// Observer: one-shot catch sound whenever a raindrop lands in the bucket.
/// The player entity despawns itself when playback finishes.
fn on_drop_caught(
    _trigger: On<DropCaught>,
    mut commands: Commands,
    assets: Res<GameAssets>,
    settings: Res<Settings>,
) {
    commands.spawn((
        AudioPlayer::new(assets.drop_sound.clone()),
        PlaybackSettings::DESPAWN.with_volume(Volume::Linear(settings.audio.sound_volume)),
    ));
}
