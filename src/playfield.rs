// playfield.rs - World geometry and the background art
//
// The window is fixed at 800x480 logical pixels and is not resizable, so the
// default 2D camera maps one world unit to one logical pixel with the origin
// at the window center. All the gameplay geometry lives here as constants.

use bevy::prelude::*;

use crate::assets::GameAssets;
use crate::states::GameState;

/// Playfield extent in world units.
pub const WORLD_WIDTH: f32 = 800.0;
pub const WORLD_HEIGHT: f32 = 480.0;

/// Buckets and raindrops are both 64x64 squares.
pub const OBJECT_SIZE: f32 = 64.0;

/// Furthest a 64x64 object's center can sit from the vertical centerline
/// while staying fully on screen.
pub const X_LIMIT: f32 = (WORLD_WIDTH - OBJECT_SIZE) / 2.0;

/// Bucket center line: bottom edge of the bucket sits 20 px above the floor.
pub const BUCKET_Y: f32 = -WORLD_HEIGHT / 2.0 + 20.0 + OBJECT_SIZE / 2.0;

/// Raindrops spawn with their bottom edge level with the top of the world.
pub const SPAWN_Y: f32 = WORLD_HEIGHT / 2.0 + OBJECT_SIZE / 2.0;

/// A raindrop whose center falls below this line has its top edge under the
/// floor and counts as missed.
pub const DESPAWN_Y: f32 = -(WORLD_HEIGHT / 2.0 + OBJECT_SIZE / 2.0);

/// Keeps a 64x64 object's center x inside the playfield.
pub fn clamp_to_playfield(x: f32) -> f32 {
    x.clamp(-X_LIMIT, X_LIMIT)
}

pub struct PlayfieldPlugin;

impl Plugin for PlayfieldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Playing), spawn_background);
    }
}

/// Spawns the background art behind everything else (negative z).
fn spawn_background(mut commands: Commands, assets: Res<GameAssets>) {
    commands.spawn((
        Sprite {
            image: assets.background.clone(),
            custom_size: Some(Vec2::new(WORLD_WIDTH, WORLD_HEIGHT)),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, -1.0),
    ));
}
