// main.rs - Entry point
//
// A small catch-the-raindrops arcade game. Raindrops fall from the top of
// the screen once a second; the player slides a bucket along the bottom
// with the pointer or the arrow keys and scores a point for every drop
// caught.
//
// =============================================================================
// APP STATES OVERVIEW
// =============================================================================
// This app uses Bevy's States system to control screen flow:
//
// Loading state: welcome text, poll asset loading, wait for a tap
// Playing state: the raindrop simulation (terminal, runs until exit)
//
// Each screen spawns its entities in OnEnter and the loading screen cleans
// its UI up in OnExit, so screen switches never leak entities.

use bevy::prelude::*;

use raindrop::assets::AssetLoadPlugin;
use raindrop::audio::GameAudioPlugin;
use raindrop::bucket::BucketPlugin;
use raindrop::config::Settings;
use raindrop::loading::LoadingScreenPlugin;
use raindrop::playfield::PlayfieldPlugin;
use raindrop::raindrops::RaindropsPlugin;
use raindrop::score::ScorePlugin;
use raindrop::states::GameState;

fn main() {
    // Settings have to be read before the App exists: the window plugin
    // needs the title and resolution up front.
    let settings = Settings::load_or_default();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: settings.window.title.clone(),
                resolution: (settings.window.width, settings.window.height).into(),
                // The simulation assumes a fixed 800x480 world, one world
                // unit per logical pixel.
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        // Dark blue behind the background art.
        .insert_resource(ClearColor(Color::srgb(0.0, 0.0, 0.2)))
        .insert_resource(settings)
        // Registers GameState, creates State/NextState resources and starts
        // in the default variant (Loading).
        .init_state::<GameState>()
        .add_systems(Startup, spawn_camera)
        .add_plugins((
            AssetLoadPlugin,
            LoadingScreenPlugin,
            PlayfieldPlugin,
            BucketPlugin,
            RaindropsPlugin,
            ScorePlugin,
            GameAudioPlugin,
        ))
        .run();
}

/// Camera is global: both screens render through it.
fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
