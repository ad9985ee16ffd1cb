// loading.rs - The loading screen
//
// First screen the player sees. It shows a welcome headline and a status
// line, polls the asset registry once per frame, and hands control to the
// play screen when two things are both true:
//
//   1. every declared asset has finished loading, and
//   2. the player pressed a pointer (left mouse button or touch).
//
// OnEnter spawns the UI once, Update systems run every frame while in the
// Loading state, and OnExit despawns the UI. Every OnEnter that spawns has
// a matching OnExit that despawns, so the next screen starts from a clean
// slate.

use bevy::prelude::*;

use crate::assets::GameAssets;
use crate::states::GameState;

pub struct LoadingScreenPlugin;

impl Plugin for LoadingScreenPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Loading), spawn_loading_ui)
            .add_systems(
                Update,
                (update_loading_status, begin_on_tap).run_if(in_state(GameState::Loading)),
            )
            .add_systems(OnExit(GameState::Loading), cleanup_loading_ui);
    }
}

/// Marker for the loading screen's UI root, so cleanup can find it.
#[derive(Component)]
struct LoadingUi;

/// Marker for the status line whose text flips once loading finishes.
#[derive(Component)]
struct LoadingStatusText;

fn spawn_loading_ui(mut commands: Commands) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(20.0),
                ..default()
            },
            BackgroundColor(Color::NONE),
            LoadingUi,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Welcome to Drop!"),
                TextFont {
                    font_size: 48.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));

            parent.spawn((
                Text::new("Loading assets..."),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.8, 0.8)),
                LoadingStatusText,
            ));
        });
}

/// Polls the asset registry and keeps the status line current.
fn update_loading_status(
    server: Res<AssetServer>,
    assets: Res<GameAssets>,
    mut status: Query<&mut Text, With<LoadingStatusText>>,
) {
    let message = if assets.all_loaded(&server) {
        "Tap anywhere to begin!"
    } else {
        "Loading assets..."
    };

    for mut text in status.iter_mut() {
        if text.0 != message {
            text.0 = message.to_string();
        }
    }
}

/// Requests the transition to the play screen on a pointer press, but only
/// once every asset is in. A tap during loading is ignored.
fn begin_on_tap(
    mouse: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    server: Res<AssetServer>,
    assets: Res<GameAssets>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let tapped = mouse.just_pressed(MouseButton::Left) || touches.any_just_pressed();
    if tapped && assets.all_loaded(&server) {
        info!("Assets loaded, starting the game");
        // The actual transition happens after all Update systems finish.
        next_state.set(GameState::Playing);
    }
}

fn cleanup_loading_ui(mut commands: Commands, query: Query<Entity, With<LoadingUi>>) {
    for entity in query.iter() {
        // despawn removes the entity and all its children
        commands.entity(entity).despawn();
    }
}
