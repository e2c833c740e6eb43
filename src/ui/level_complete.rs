//! UI domain: level-complete screen.

use bevy::prelude::*;

use crate::content::LevelRegistry;
use crate::level::{ContinueButton, choose_next_level};
use crate::progression::LevelSummary;

#[derive(Component)]
pub struct LevelCompleteUI;

/// Title, this run, and best lines for a finished level.
pub fn summary_lines(summary: &LevelSummary) -> [String; 3] {
    [
        format!("Level {} Complete!", summary.level),
        format!("This run: {:.1}%", summary.run_percent),
        format!("Your best: {:.1}%", summary.best_percent),
    ]
}

pub(crate) fn spawn_level_complete_screen(
    mut commands: Commands,
    summary: Option<Res<LevelSummary>>,
    registry: Res<LevelRegistry>,
) {
    let summary = summary.map(|s| *s).unwrap_or_default();
    let [title, run_line, best_line] = summary_lines(&summary);
    let prompt = choose_next_level(&registry, &summary).prompt();

    commands
        .spawn((
            LevelCompleteUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.85)),
            ZIndex(100),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(title),
                TextFont {
                    font_size: 64.0,
                    ..default()
                },
                TextColor(Color::srgb(0.95, 0.85, 0.3)),
                Node {
                    margin: UiRect::bottom(Val::Px(32.0)),
                    ..default()
                },
            ));

            for line in [run_line, best_line] {
                parent.spawn((
                    Text::new(line),
                    TextFont {
                        font_size: 26.0,
                        ..default()
                    },
                    TextColor(Color::srgb(0.85, 0.85, 0.85)),
                    Node {
                        margin: UiRect::bottom(Val::Px(12.0)),
                        ..default()
                    },
                ));
            }

            parent
                .spawn((
                    ContinueButton,
                    Button,
                    Node {
                        padding: UiRect::axes(Val::Px(40.0), Val::Px(16.0)),
                        border: UiRect::all(Val::Px(2.0)),
                        margin: UiRect::top(Val::Px(36.0)),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.2, 0.2, 0.25)),
                    BorderColor::all(Color::srgb(0.5, 0.5, 0.6)),
                ))
                .with_child((
                    Text::new("CONTINUE"),
                    TextFont {
                        font_size: 28.0,
                        ..default()
                    },
                    TextColor(Color::srgb(0.9, 0.9, 0.9)),
                ));

            // Hint text
            parent.spawn((
                Text::new(prompt),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.5, 0.5, 0.55)),
                Node {
                    margin: UiRect::top(Val::Px(20.0)),
                    ..default()
                },
            ));
        });
}

pub(crate) fn cleanup_level_complete_screen(
    mut commands: Commands,
    query: Query<Entity, With<LevelCompleteUI>>,
) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
}
