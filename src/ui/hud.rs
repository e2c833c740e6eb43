//! UI domain: player hearts.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::combat::HealthChangedEvent;
use crate::level::LevelEntity;
use crate::player::Player;

const HEART_SIZE: f32 = 24.0;
const HUD_PADDING: f32 = 16.0;
const HEART_FULL: Color = Color::srgb(0.85, 0.15, 0.2);
const HEART_EMPTY: Color = Color::srgba(0.25, 0.25, 0.28, 0.8);

/// Row the hearts live in
#[derive(Component)]
pub struct HeartsRow;

/// One heart icon, ordered left to right
#[derive(Component, Debug)]
pub struct Heart(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeartState {
    Full,
    Empty,
    Hidden,
}

/// What heart `index` shows for the given health.
pub fn heart_state(index: u32, current: u32, max: u32) -> HeartState {
    if index >= max {
        HeartState::Hidden
    } else if index < current {
        HeartState::Full
    } else {
        HeartState::Empty
    }
}

pub(crate) fn spawn_hearts_row(mut commands: Commands) {
    commands.spawn((
        LevelEntity,
        HeartsRow,
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(HUD_PADDING),
            top: Val::Px(HUD_PADDING),
            column_gap: Val::Px(6.0),
            ..default()
        },
    ));
}

/// Hearts follow the player's health messages; icons are added when max health grows.
pub(crate) fn update_hearts(
    mut commands: Commands,
    mut health_events: MessageReader<HealthChangedEvent>,
    players: Query<(), With<Player>>,
    rows: Query<Entity, With<HeartsRow>>,
    mut hearts: Query<(&Heart, &mut BackgroundColor, &mut Node)>,
) {
    let Some(latest) = health_events
        .read()
        .filter(|event| players.contains(event.entity))
        .last()
        .copied()
    else {
        return;
    };
    let Ok(row) = rows.single() else {
        return;
    };

    let mut slots = 0;
    for (heart, mut color, mut node) in &mut hearts {
        slots = slots.max(heart.0 + 1);
        apply_heart_state(
            heart_state(heart.0, latest.current, latest.max),
            &mut color,
            &mut node,
        );
    }

    if slots < latest.max {
        commands.entity(row).with_children(|parent| {
            for index in slots..latest.max {
                let mut color = BackgroundColor(HEART_FULL);
                let mut node = heart_node();
                apply_heart_state(
                    heart_state(index, latest.current, latest.max),
                    &mut color,
                    &mut node,
                );
                parent.spawn((Heart(index), node, color));
            }
        });
    }
}

fn heart_node() -> Node {
    Node {
        width: Val::Px(HEART_SIZE),
        height: Val::Px(HEART_SIZE),
        ..default()
    }
}

fn apply_heart_state(state: HeartState, color: &mut BackgroundColor, node: &mut Node) {
    match state {
        HeartState::Full => {
            color.0 = HEART_FULL;
            node.display = Display::Flex;
        }
        HeartState::Empty => {
            color.0 = HEART_EMPTY;
            node.display = Display::Flex;
        }
        HeartState::Hidden => node.display = Display::None,
    }
}
