//! UI domain: banner shown between the end of an attempt and the level-complete screen.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::level::LevelEntity;
use crate::progression::{LevelEndReason, LevelFinalizedEvent};

#[derive(Component)]
pub struct LevelEndBanner;

pub fn end_banner_text(reason: LevelEndReason) -> &'static str {
    match reason {
        LevelEndReason::AllEnemiesKilled => "LEVEL CLEARED",
        LevelEndReason::PlayerDied => "DEFEATED",
    }
}

fn banner_color(reason: LevelEndReason) -> Color {
    match reason {
        LevelEndReason::AllEnemiesKilled => Color::srgb(0.95, 0.85, 0.3),
        LevelEndReason::PlayerDied => Color::srgb(0.85, 0.25, 0.25),
    }
}

pub(crate) fn announce_level_end(
    mut commands: Commands,
    mut finalized_events: MessageReader<LevelFinalizedEvent>,
    existing: Query<(), With<LevelEndBanner>>,
) {
    let Some(event) = finalized_events.read().last() else {
        return;
    };
    if !existing.is_empty() {
        return;
    }

    commands
        .spawn((
            LevelEntity,
            LevelEndBanner,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                top: Val::Percent(30.0),
                justify_content: JustifyContent::Center,
                ..default()
            },
            ZIndex(40),
        ))
        .with_child((
            Text::new(end_banner_text(event.reason)),
            TextFont {
                font_size: 64.0,
                ..default()
            },
            TextColor(banner_color(event.reason)),
        ));
}
