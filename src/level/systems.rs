//! Level domain: building a level from its layout, tearing it down, and moving on.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::combat::spawn_enemy;
use crate::content::{GameplayDefaults, LevelDef, LevelRegistry, PlatformDef};
use crate::core::{GameLayer, GameState};
use crate::level::components::{ContinueButton, LevelEntity, Platform};
use crate::level::flow::{ActiveLevel, choose_next_level, enemy_total};
use crate::player::{FallLimit, spawn_player};
use crate::progression::{LevelStartedEvent, LevelSummary};

const PLATFORM_COLOR: Color = Color::srgb(0.3, 0.32, 0.38);

pub(crate) fn setup_active_level(
    mut commands: Commands,
    defaults: Res<GameplayDefaults>,
    registry: Res<LevelRegistry>,
) {
    let level = if registry.get(defaults.start_level).is_some() {
        defaults.start_level
    } else {
        let fallback = registry.first_level().unwrap_or(1);
        if !registry.is_empty() {
            warn!(
                "Start level {} not found, starting at level {}",
                defaults.start_level, fallback
            );
        }
        fallback
    };
    commands.insert_resource(ActiveLevel(level));
}

pub(crate) fn spawn_level(
    mut commands: Commands,
    active: Res<ActiveLevel>,
    registry: Res<LevelRegistry>,
    defaults: Res<GameplayDefaults>,
    mut started_events: MessageWriter<LevelStartedEvent>,
) {
    let def = match registry.get(active.0) {
        Some(def) => def.clone(),
        None => {
            warn!("Level {} has no layout, using an empty arena", active.0);
            LevelDef {
                level: active.0,
                ..default()
            }
        }
    };

    for platform in &def.platforms {
        spawn_platform(&mut commands, platform);
    }

    let spawn = Vec2::new(def.player_spawn.0, def.player_spawn.1);
    let player = spawn_player(&mut commands, &defaults.player, spawn);
    commands
        .entity(player)
        .insert((LevelEntity, FallLimit(def.fall_limit)));

    for enemy_def in &def.enemies {
        let enemy = spawn_enemy(&mut commands, enemy_def);
        commands.entity(enemy).insert(LevelEntity);
    }

    let total_enemies = enemy_total(&def);
    info!(
        "Loaded level {}: {} platforms, {} enemies placed, {} to defeat",
        def.level,
        def.platforms.len(),
        def.enemies.len(),
        total_enemies
    );

    started_events.write(LevelStartedEvent {
        level: def.level,
        total_enemies,
    });
}

fn spawn_platform(commands: &mut Commands, def: &PlatformDef) {
    commands.spawn((
        LevelEntity,
        Platform,
        Sprite {
            color: PLATFORM_COLOR,
            custom_size: Some(Vec2::new(def.width, def.height)),
            ..default()
        },
        Transform::from_xyz(def.x, def.y, 0.0),
        RigidBody::Static,
        Collider::rectangle(def.width, def.height),
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player, GameLayer::Enemy]),
    ));
}

pub(crate) fn cleanup_level(mut commands: Commands, query: Query<Entity, With<LevelEntity>>) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
}

/// Enter or the continue button loads whatever the level-complete screen offered.
pub(crate) fn continue_after_level(
    keyboard: Res<ButtonInput<KeyCode>>,
    button_query: Query<&Interaction, (With<ContinueButton>, Changed<Interaction>)>,
    summary: Option<Res<LevelSummary>>,
    registry: Res<LevelRegistry>,
    mut active: ResMut<ActiveLevel>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let should_continue = keyboard.just_pressed(KeyCode::Enter)
        || keyboard.just_pressed(KeyCode::NumpadEnter)
        || button_query
            .iter()
            .any(|interaction| *interaction == Interaction::Pressed);

    if !should_continue {
        return;
    }

    if let Some(summary) = summary {
        let next = choose_next_level(&registry, &summary);
        info!("Leaving level {}: {:?}", summary.level, next);
        active.0 = next.level();
    }
    next_state.set(GameState::Playing);
}
