// score.rs - Score state and the HUD text

use bevy::prelude::*;

use crate::states::GameState;

/// Drops gathered this session. Only ever incremented; there is no way to
/// lose points.
#[derive(Resource, Default, Debug, PartialEq, Eq)]
pub struct Score(pub u32);

/// Marker for the HUD text that displays the score.
#[derive(Component)]
struct ScoreText;

pub struct ScorePlugin;

impl Plugin for ScorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Score>()
            .add_systems(OnEnter(GameState::Playing), spawn_score_text)
            .add_systems(
                Update,
                update_score_text
                    .run_if(in_state(GameState::Playing))
                    .run_if(resource_changed::<Score>),
            );
    }
}

fn spawn_score_text(mut commands: Commands, score: Res<Score>) {
    commands.spawn((
        Text::new(format!("Drops Collected: {}", score.0)),
        TextFont {
            font_size: 24.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(8.0),
            left: Val::Px(8.0),
            ..default()
        },
        ScoreText,
    ));
}

fn update_score_text(score: Res<Score>, mut query: Query<&mut Text, With<ScoreText>>) {
    for mut text in query.iter_mut() {
        text.0 = format!("Drops Collected: {}", score.0);
    }
}
