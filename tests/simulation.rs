// Integration tests for the per-frame simulation step.
//
// These drive the public systems against a headless World with a
// hand-advanced Time resource, so every frame's dt is exact and no window,
// renderer or asset server is needed. Texture handles are default (weak)
// handles; nothing here ever resolves them.

use std::time::Duration;

use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;

use raindrop::assets::GameAssets;
use raindrop::bucket::{move_bucket, spawn_bucket, Bucket};
use raindrop::playfield::{BUCKET_Y, DESPAWN_Y, SPAWN_Y, X_LIMIT};
use raindrop::raindrops::{
    advance_raindrops, resolve_raindrops, spawn_raindrops, start_raining, DropSpawnTimer, Raindrop,
};
use raindrop::score::Score;

/// A world with everything the simulation systems ask for, pointed at
/// nothing: weak asset handles, zeroed input, a Time we advance by hand.
fn test_app() -> App {
    let mut app = App::new();
    app.init_resource::<Score>()
        .init_resource::<ButtonInput<KeyCode>>()
        .init_resource::<ButtonInput<MouseButton>>()
        .init_resource::<Touches>()
        .insert_resource(Time::default())
        .insert_resource(GameAssets {
            bucket: Handle::default(),
            drop: Handle::default(),
            background: Handle::default(),
            drop_sound: Handle::default(),
            rain_music: Handle::default(),
        });
    app
}

fn advance_time(app: &mut App, seconds: f32) {
    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_secs_f32(seconds));
}

fn run<M>(app: &mut App, system: impl IntoSystem<(), (), M>) {
    app.world_mut()
        .run_system_once(system)
        .expect("system should run");
}

fn count_raindrops(app: &mut App) -> usize {
    let world = app.world_mut();
    let mut query = world.query_filtered::<(), With<Raindrop>>();
    query.iter(world).count()
}

fn spawn_drop_at(app: &mut App, x: f32, y: f32) -> Entity {
    app.world_mut()
        .spawn((Raindrop, Transform::from_xyz(x, y, 0.0)))
        .id()
}

fn score(app: &App) -> u32 {
    app.world().resource::<Score>().0
}

#[test]
fn entering_play_spawns_the_first_drop_immediately() {
    let mut app = test_app();
    run(&mut app, start_raining);

    assert_eq!(count_raindrops(&mut app), 1);
    assert!(app.world().contains_resource::<DropSpawnTimer>());
}

#[test]
fn spawn_count_over_a_window_is_floor_of_elapsed_seconds() {
    let mut app = test_app();
    app.insert_resource(DropSpawnTimer(Timer::from_seconds(
        1.0,
        TimerMode::Repeating,
    )));

    // 3.5 seconds of 0.5 s frames: the timer fires at t = 1, 2 and 3.
    for _ in 0..7 {
        advance_time(&mut app, 0.5);
        run(&mut app, spawn_raindrops);
    }

    assert_eq!(count_raindrops(&mut app), 3);
}

#[test]
fn spawn_rate_is_not_proportional_to_frame_rate() {
    // Same 3 seconds of wall time at two frame rates must spawn the same
    // number of drops.
    let frames_per_config = [(30, 0.1_f32), (6, 0.5_f32)];

    for (frames, dt) in frames_per_config {
        let mut app = test_app();
        app.insert_resource(DropSpawnTimer(Timer::from_seconds(
            1.0,
            TimerMode::Repeating,
        )));
        for _ in 0..frames {
            advance_time(&mut app, dt);
            run(&mut app, spawn_raindrops);
        }
        assert_eq!(count_raindrops(&mut app), 3, "dt = {dt}");
    }
}

#[test]
fn raindrops_fall_at_fixed_speed() {
    let mut app = test_app();
    let drop = spawn_drop_at(&mut app, 400.0, SPAWN_Y);

    advance_time(&mut app, 0.1);
    run(&mut app, advance_raindrops);

    let y = app.world().get::<Transform>(drop).unwrap().translation.y;
    assert!((y - (SPAWN_Y - 20.0)).abs() < 1e-4);
}

#[test]
fn overlapping_drop_is_caught_and_scores_one() {
    let mut app = test_app();
    run(&mut app, spawn_bucket);
    // Just above the bucket, 32 px to the side: intervals intersect on both
    // axes.
    spawn_drop_at(&mut app, 32.0, BUCKET_Y + 40.0);

    run(&mut app, resolve_raindrops);

    assert_eq!(count_raindrops(&mut app), 0);
    assert_eq!(score(&app), 1);
}

#[test]
fn drop_below_the_floor_is_missed_without_scoring() {
    let mut app = test_app();
    run(&mut app, spawn_bucket);
    spawn_drop_at(&mut app, 0.0, DESPAWN_Y - 1.0);

    run(&mut app, resolve_raindrops);

    assert_eq!(count_raindrops(&mut app), 0);
    assert_eq!(score(&app), 0, "a missed drop must not score");
}

#[test]
fn drop_still_on_screen_and_off_the_bucket_survives() {
    let mut app = test_app();
    run(&mut app, spawn_bucket);
    let survivor = spawn_drop_at(&mut app, 300.0, 200.0);

    run(&mut app, resolve_raindrops);

    assert!(app.world().get::<Raindrop>(survivor).is_some());
    assert_eq!(score(&app), 0);
}

#[test]
fn each_catch_scores_exactly_one() {
    let mut app = test_app();
    run(&mut app, spawn_bucket);
    spawn_drop_at(&mut app, -20.0, BUCKET_Y + 30.0);
    spawn_drop_at(&mut app, 20.0, BUCKET_Y - 10.0);
    spawn_drop_at(&mut app, 300.0, 200.0); // not caught, not missed

    run(&mut app, resolve_raindrops);

    assert_eq!(score(&app), 2);
    assert_eq!(count_raindrops(&mut app), 1);
}

#[test]
fn a_full_fall_takes_just_under_three_seconds() {
    // A drop travels from the spawn line to the miss line (544 world units
    // at 200 per second) in 2.72 s. After 2.7 s of 0.1 s frames it is still
    // live; the next frame removes it as missed.
    let mut app = test_app();
    run(&mut app, spawn_bucket);
    spawn_drop_at(&mut app, 300.0, SPAWN_Y);

    for _ in 0..27 {
        advance_time(&mut app, 0.1);
        run(&mut app, advance_raindrops);
        run(&mut app, resolve_raindrops);
    }
    assert_eq!(count_raindrops(&mut app), 1);

    advance_time(&mut app, 0.1);
    run(&mut app, advance_raindrops);
    run(&mut app, resolve_raindrops);

    assert_eq!(count_raindrops(&mut app), 0);
    assert_eq!(score(&app), 0);
}

#[test]
fn keyboard_movement_is_clamped_to_the_playfield() {
    let mut app = test_app();
    run(&mut app, spawn_bucket);

    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::ArrowRight);

    // 10 seconds in one frame would overshoot the edge by a wide margin.
    advance_time(&mut app, 10.0);
    run(&mut app, move_bucket);

    let x = bucket_x(&mut app);
    assert_eq!(x, X_LIMIT);

    // And back the other way.
    {
        let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        keys.release(KeyCode::ArrowRight);
        keys.clear();
        keys.press(KeyCode::ArrowLeft);
    }
    advance_time(&mut app, 10.0);
    run(&mut app, move_bucket);

    assert_eq!(bucket_x(&mut app), -X_LIMIT);
}

#[test]
fn keyboard_moves_the_bucket_by_speed_times_dt() {
    let mut app = test_app();
    run(&mut app, spawn_bucket);

    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::ArrowRight);
    advance_time(&mut app, 0.1);
    run(&mut app, move_bucket);

    assert!((bucket_x(&mut app) - 20.0).abs() < 1e-4);
}

fn bucket_x(app: &mut App) -> f32 {
    let world = app.world_mut();
    let mut query = world.query_filtered::<&Transform, With<Bucket>>();
    query.single(world).expect("one bucket").translation.x
}
