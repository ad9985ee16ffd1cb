// assets.rs - The asset registry
//
// Every texture, sound and music track the game needs is declared here by
// logical path. Loading is queued once at startup; asset_server.load()
// returns immediately with a Handle that resolves in the background. The
// loading screen polls all_loaded() once per frame to find out when the
// game can begin.

use bevy::prelude::*;

pub struct AssetLoadPlugin;

impl Plugin for AssetLoadPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, queue_asset_loads);
    }
}

/// Handles to everything the game draws and plays.
///
/// Handle<T> is Bevy's way of referencing assets. The actual data lives in
/// Bevy's asset storage; we just hold lightweight references.
#[derive(Resource)]
pub struct GameAssets {
    pub bucket: Handle<Image>,
    pub drop: Handle<Image>,
    pub background: Handle<Image>,
    pub drop_sound: Handle<AudioSource>,
    pub rain_music: Handle<AudioSource>,
}

impl GameAssets {
    /// The once-per-frame polling contract: true when every declared asset
    /// has finished loading.
    pub fn all_loaded(&self, server: &AssetServer) -> bool {
        server.is_loaded_with_dependencies(&self.bucket)
            && server.is_loaded_with_dependencies(&self.drop)
            && server.is_loaded_with_dependencies(&self.background)
            && server.is_loaded_with_dependencies(&self.drop_sound)
            && server.is_loaded_with_dependencies(&self.rain_music)
    }
}

/// Startup system: queue every asset load and publish the handles.
/// Paths are relative to the "assets/" directory.
fn queue_asset_loads(mut commands: Commands, server: Res<AssetServer>) {
    commands.insert_resource(GameAssets {
        bucket: server.load("textures/bucket.png"),
        drop: server.load("textures/drop.png"),
        background: server.load("textures/background.png"),
        drop_sound: server.load("audio/drop.wav"),
        rain_music: server.load("audio/rain.wav"),
    });
}
