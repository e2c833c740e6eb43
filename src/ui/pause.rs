//! UI domain: pause panel with the level progress line, resume, and give up.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::{DamageEvent, Dead};
use crate::core::{GameplayPaused, PAUSE_MENU_SOURCE};
use crate::level::LevelEntity;
use crate::player::Player;
use crate::progression::ProgressTextEvent;

/// Overlay shown while the pause menu holds the game
#[derive(Component)]
pub struct PausePanel;

#[derive(Component)]
pub struct ProgressLabel;

#[derive(Component)]
pub struct ResumeButton;

/// Ends the attempt as a death, which leads to the level-complete screen.
#[derive(Component)]
pub struct GiveUpButton;

fn spawn_panel_button(parent: &mut ChildSpawnerCommands, marker: impl Bundle, label: &str) {
    parent
        .spawn((
            marker,
            Button,
            Node {
                padding: UiRect::axes(Val::Px(40.0), Val::Px(16.0)),
                border: UiRect::all(Val::Px(2.0)),
                margin: UiRect::bottom(Val::Px(16.0)),
                ..default()
            },
            BackgroundColor(Color::srgb(0.2, 0.2, 0.25)),
            BorderColor::all(Color::srgb(0.5, 0.5, 0.6)),
        ))
        .with_child((
            Text::new(label),
            TextFont {
                font_size: 28.0,
                ..default()
            },
            TextColor(Color::srgb(0.9, 0.9, 0.9)),
        ));
}

pub(crate) fn spawn_pause_panel(mut commands: Commands) {
    commands
        .spawn((
            LevelEntity,
            PausePanel,
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
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
            Visibility::Hidden,
            ZIndex(50),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("PAUSED"),
                TextFont {
                    font_size: 56.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.9, 0.9)),
                Node {
                    margin: UiRect::bottom(Val::Px(24.0)),
                    ..default()
                },
            ));

            parent.spawn((
                ProgressLabel,
                Text::new(""),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(Color::srgb(0.7, 0.75, 0.7)),
                Node {
                    margin: UiRect::bottom(Val::Px(40.0)),
                    ..default()
                },
            ));

            spawn_panel_button(parent, ResumeButton, "RESUME");
            spawn_panel_button(parent, GiveUpButton, "GIVE UP");
        });
}

pub(crate) fn update_progress_label(
    mut text_events: MessageReader<ProgressTextEvent>,
    mut labels: Query<&mut Text, With<ProgressLabel>>,
) {
    let Some(latest) = text_events.read().last() else {
        return;
    };

    for mut text in &mut labels {
        text.0.clone_from(&latest.text);
    }
}

pub(crate) fn sync_pause_panel(
    paused: Res<GameplayPaused>,
    mut panels: Query<&mut Visibility, With<PausePanel>>,
) {
    if !paused.is_changed() {
        return;
    }

    let visibility = if paused.sources.contains(PAUSE_MENU_SOURCE) {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    };
    for mut panel in &mut panels {
        *panel = visibility;
    }
}

pub(crate) fn handle_resume_button(
    button_query: Query<&Interaction, (With<ResumeButton>, Changed<Interaction>)>,
    mut paused: ResMut<GameplayPaused>,
    mut time: ResMut<Time<Virtual>>,
) {
    if !button_query
        .iter()
        .any(|interaction| *interaction == Interaction::Pressed)
    {
        return;
    }

    paused.unpause(PAUSE_MENU_SOURCE);
    time.unpause();
    info!("Gameplay resumed");
}

pub(crate) fn handle_give_up_button(
    button_query: Query<&Interaction, (With<GiveUpButton>, Changed<Interaction>)>,
    players: Query<Entity, (With<Player>, Without<Dead>)>,
    mut paused: ResMut<GameplayPaused>,
    mut time: ResMut<Time<Virtual>>,
    mut damage_events: MessageWriter<DamageEvent>,
) {
    if !button_query
        .iter()
        .any(|interaction| *interaction == Interaction::Pressed)
    {
        return;
    }

    for player in &players {
        damage_events.write(DamageEvent {
            source: player,
            target: player,
            amount: u32::MAX,
        });
    }
    paused.unpause(PAUSE_MENU_SOURCE);
    time.unpause();
    info!("Attempt abandoned from the pause menu");
}
