// raindrops.rs - Spawning, falling and removal of raindrops
//
// The whole simulation step lives in three systems that run in a fixed
// order every frame of the Playing state, after the bucket has moved:
//
//   spawn_raindrops   - fixed-interval spawn timer
//   advance_raindrops - move every drop down by FALL_SPEED * dt
//   resolve_raindrops - remove drops that were missed or caught
//
// Removal is exclusive per drop per frame: a drop below the floor is missed
// (no score change), otherwise a drop overlapping the bucket is caught
// (score +1, catch sound). A drop can never be both in the same frame.

use bevy::prelude::*;
use rand::Rng;

use crate::assets::GameAssets;
use crate::bucket::{move_bucket, Bucket};
use crate::collision::squares_overlap;
use crate::playfield::{DESPAWN_Y, OBJECT_SIZE, SPAWN_Y, X_LIMIT};
use crate::score::Score;
use crate::states::GameState;

/// World units per second a raindrop falls.
pub const FALL_SPEED: f32 = 200.0;

/// Seconds between spawns. The policy is a fixed-interval timer, not a
/// per-frame probability: exactly one drop per elapsed interval.
pub const SPAWN_INTERVAL: f32 = 1.0;

/// Marker component: a falling raindrop.
#[derive(Component)]
pub struct Raindrop;

/// Repeating spawn timer. Lives from the moment the play screen is entered
/// until the process exits (Playing is terminal).
#[derive(Resource)]
pub struct DropSpawnTimer(pub Timer);

/// Triggered once per caught raindrop. The audio observer reacts to it;
/// the score is already incremented by the time it fires.
#[derive(Event)]
pub struct DropCaught {
    pub position: Vec2,
}

pub struct RaindropsPlugin;

impl Plugin for RaindropsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Playing), start_raining).add_systems(
            Update,
            (spawn_raindrops, advance_raindrops, resolve_raindrops)
                .chain()
                .after(move_bucket)
                .run_if(in_state(GameState::Playing))
                .run_if(resource_exists::<DropSpawnTimer>),
        );
    }
}

/// Arms the spawn timer and spawns the first drop immediately, so the
/// player has something to chase the moment the screen appears.
pub fn start_raining(mut commands: Commands, assets: Res<GameAssets>) {
    commands.insert_resource(DropSpawnTimer(Timer::from_seconds(
        SPAWN_INTERVAL,
        TimerMode::Repeating,
    )));
    spawn_raindrop(&mut commands, &assets);
}

/// Ticks the spawn timer and spawns one drop per finished interval.
pub fn spawn_raindrops(
    mut commands: Commands,
    time: Res<Time>,
    mut timer: ResMut<DropSpawnTimer>,
    assets: Res<GameAssets>,
) {
    timer.0.tick(time.delta());
    if timer.0.just_finished() {
        spawn_raindrop(&mut commands, &assets);
    }
}

/// One raindrop at a uniformly random x, bottom edge level with the top of
/// the world.
fn spawn_raindrop(commands: &mut Commands, assets: &GameAssets) {
    let mut rng = rand::thread_rng();
    let x = rng.gen_range(-X_LIMIT..=X_LIMIT);

    commands.spawn((
        Raindrop,
        Sprite {
            image: assets.drop.clone(),
            custom_size: Some(Vec2::splat(OBJECT_SIZE)),
            ..default()
        },
        Transform::from_xyz(x, SPAWN_Y, 0.0),
    ));
}

/// Moves every active raindrop down.
pub fn advance_raindrops(time: Res<Time>, mut drops: Query<&mut Transform, With<Raindrop>>) {
    for mut transform in drops.iter_mut() {
        transform.translation.y -= FALL_SPEED * time.delta_secs();
    }
}

/// The removal pass, evaluated per drop after advancing.
pub fn resolve_raindrops(
    mut commands: Commands,
    mut score: ResMut<Score>,
    drops: Query<(Entity, &Transform), With<Raindrop>>,
    bucket: Query<&Transform, (With<Bucket>, Without<Raindrop>)>,
) {
    let Ok(bucket_transform) = bucket.single() else {
        return;
    };
    let bucket_pos = bucket_transform.translation.truncate();

    for (entity, transform) in drops.iter() {
        let drop_pos = transform.translation.truncate();

        if drop_pos.y < DESPAWN_Y {
            // Top edge under the floor: gone for good, no score change.
            debug!("Missed a raindrop!");
            commands.entity(entity).despawn();
        } else if squares_overlap(drop_pos, bucket_pos, OBJECT_SIZE) {
            score.0 += 1;
            commands.entity(entity).despawn();
            commands.trigger(DropCaught { position: drop_pos });
        }
    }
}
