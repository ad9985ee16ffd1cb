// bucket.rs - The player-controlled bucket
//
// The bucket slides along a fixed line near the bottom of the playfield.
// Two input styles, matching the classic arcade controls:
//
// - pointer (touch, else a held left mouse button): the pointer position is
//   projected into world space and replaces the bucket's x outright
// - arrow keys: nudge the bucket by BUCKET_SPEED * dt per frame
//
// Whichever ran, the x is clamped so the bucket never leaves the playfield.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::assets::GameAssets;
use crate::playfield::{clamp_to_playfield, BUCKET_Y, OBJECT_SIZE};
use crate::states::GameState;

/// World units per second for keyboard movement.
pub const BUCKET_SPEED: f32 = 200.0;

/// Marker component: the one bucket entity.
#[derive(Component)]
pub struct Bucket;

pub struct BucketPlugin;

impl Plugin for BucketPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Playing), spawn_bucket)
            .add_systems(Update, move_bucket.run_if(in_state(GameState::Playing)));
    }
}

/// Spawns the bucket horizontally centered on its line.
pub fn spawn_bucket(mut commands: Commands, assets: Res<GameAssets>) {
    commands.spawn((
        Bucket,
        Sprite {
            image: assets.bucket.clone(),
            custom_size: Some(Vec2::splat(OBJECT_SIZE)),
            ..default()
        },
        Transform::from_xyz(0.0, BUCKET_Y, 0.0),
    ));
}

/// Applies this frame's horizontal input to the bucket.
pub fn move_bucket(
    keys: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    time: Res<Time>,
    window: Query<&Window, With<PrimaryWindow>>,
    camera: Query<(&Camera, &GlobalTransform)>,
    mut bucket: Query<&mut Transform, With<Bucket>>,
) {
    let Ok(mut transform) = bucket.single_mut() else {
        return;
    };

    // Absolute pointer position wins over everything else.
    if let Some(world_x) = pointer_world_x(&mouse, &touches, &window, &camera) {
        transform.translation.x = world_x;
    }

    if keys.pressed(KeyCode::ArrowLeft) {
        transform.translation.x -= BUCKET_SPEED * time.delta_secs();
    }
    if keys.pressed(KeyCode::ArrowRight) {
        transform.translation.x += BUCKET_SPEED * time.delta_secs();
    }

    // Clamp after either input style so the bucket stays on screen no matter
    // how far off the window the pointer is.
    transform.translation.x = clamp_to_playfield(transform.translation.x);
}

/// World-space x of the active pointer: the first touch if any, otherwise
/// the cursor while the left button is held. None when the player is not
/// pointing at anything (or there is no window/camera yet).
fn pointer_world_x(
    mouse: &ButtonInput<MouseButton>,
    touches: &Touches,
    window: &Query<&Window, With<PrimaryWindow>>,
    camera: &Query<(&Camera, &GlobalTransform)>,
) -> Option<f32> {
    let screen_pos = if let Some(touch) = touches.iter().next() {
        touch.position()
    } else if mouse.pressed(MouseButton::Left) {
        window.single().ok()?.cursor_position()?
    } else {
        return None;
    };

    let (camera, camera_transform) = camera.single().ok()?;
    let world = camera.viewport_to_world_2d(camera_transform, screen_pos).ok()?;
    Some(world.x)
}
