//! Debug domain: hotkeys, gizmos, and the info overlay.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::combat::ai::EnemyBrain;
use crate::combat::{
    DamageEvent, Dead, Enemy, Health, HealthChangedEvent, enemy_melee_center, player_attack_point,
};
use crate::debug::state::DebugState;
use crate::debug::ui::{DebugInfoOverlay, spawn_debug_info_overlay};
use crate::player::{AttackTuning, MovementTuning, Player, PlayerMotion};
use crate::progression::LevelProgress;

const DETECT_COLOR: Color = Color::srgba(0.9, 0.9, 0.2, 0.5);
const MELEE_COLOR: Color = Color::srgba(1.0, 0.3, 0.2, 0.8);
const PATROL_COLOR: Color = Color::srgba(0.3, 0.6, 1.0, 0.8);
const PLAYER_ATTACK_COLOR: Color = Color::srgba(1.0, 0.6, 0.1, 0.8);
const GROUND_RAY_COLOR: Color = Color::srgb(0.2, 1.0, 0.4);
const GROUND_RAY_AIR_COLOR: Color = Color::srgb(0.6, 0.6, 0.6);

/// F1 gizmos, F2 info overlay.
pub(crate) fn toggle_debug_views(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
) {
    if keyboard.just_pressed(KeyCode::F1) {
        debug_state.gizmos = !debug_state.gizmos;
        info!("Debug gizmos: {}", debug_state.gizmos);
    }
    if keyboard.just_pressed(KeyCode::F2) || keyboard.just_pressed(KeyCode::Backquote) {
        debug_state.show_info = !debug_state.show_info;
    }
}

/// Ctrl+H heals the player, Ctrl+K defeats every living enemy.
pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    mut player_query: Query<(Entity, &mut Health), (With<Player>, Without<Dead>)>,
    enemy_query: Query<Entity, (With<Enemy>, Without<Dead>)>,
    mut damage_events: MessageWriter<DamageEvent>,
    mut health_events: MessageWriter<HealthChangedEvent>,
) {
    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    if !ctrl {
        return;
    }

    if keyboard.just_pressed(KeyCode::KeyH) {
        for (entity, mut health) in &mut player_query {
            let max = health.max();
            if let Some(change) = health.heal(max) {
                health_events.write(HealthChangedEvent {
                    entity,
                    current: change.current,
                    max: change.max,
                });
            }
        }
        debug_state.set_message("Player healed", 2.0);
    }

    if keyboard.just_pressed(KeyCode::KeyK) {
        let mut count = 0;
        for enemy in &enemy_query {
            damage_events.write(DamageEvent {
                source: enemy,
                target: enemy,
                amount: u32::MAX,
            });
            count += 1;
        }
        debug_state.set_message(format!("Defeated {} enemies", count), 2.0);
    }
}

pub(crate) fn update_status_message(time: Res<Time>, mut debug_state: ResMut<DebugState>) {
    debug_state.tick_message(time.delta_secs());
}

pub(crate) fn draw_debug_gizmos(
    mut gizmos: Gizmos,
    movement: Res<MovementTuning>,
    attack: Res<AttackTuning>,
    enemies: Query<(&Transform, &EnemyBrain), Without<Dead>>,
    players: Query<(&Transform, &Collider, &PlayerMotion), (With<Player>, Without<Dead>)>,
) {
    for (transform, brain) in &enemies {
        let pos = transform.translation.truncate();
        gizmos.circle_2d(pos, brain.detect_range, DETECT_COLOR);
        gizmos.circle_2d(enemy_melee_center(pos), brain.attack_range, MELEE_COLOR);
        gizmos.line_2d(
            Vec2::new(brain.bounds.left_x, pos.y),
            Vec2::new(brain.bounds.right_x, pos.y),
            PATROL_COLOR,
        );
    }

    for (transform, collider, motion) in &players {
        let pos = transform.translation.truncate();
        gizmos.circle_2d(
            player_attack_point(pos, motion.facing.sign(), attack.reach),
            attack.range,
            PLAYER_ATTACK_COLOR,
        );

        let half_height = collider
            .shape_scaled()
            .as_cuboid()
            .map_or(0.5, |c| c.half_extents.y);
        let feet = pos - Vec2::new(0.0, half_height);
        let ray_color = if motion.grounded {
            GROUND_RAY_COLOR
        } else {
            GROUND_RAY_AIR_COLOR
        };
        gizmos.line_2d(
            feet,
            feet - Vec2::new(0.0, movement.ground_check_distance),
            ray_color,
        );
    }
}

/// Update the debug info overlay with current player state
pub(crate) fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    progress: Option<Res<LevelProgress>>,
    player_query: Query<(&Transform, &Health), With<Player>>,
    enemy_query: Query<&EnemyBrain>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    if existing_overlay.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    let Ok(mut text) = overlay_query.single_mut() else {
        return;
    };

    let mut lines = Vec::new();
    if let Some((transform, health)) = player_query.iter().next() {
        let pos = transform.translation;
        lines.push(format!("Pos: ({:.1}, {:.1})", pos.x, pos.y));
        lines.push(format!("HP: {}/{}", health.current(), health.max()));
    }
    if let Some(progress) = progress {
        lines.push(format!(
            "Level {}: {}/{} ({:?})",
            progress.level(),
            progress.kills(),
            progress.total_enemies(),
            progress.phase()
        ));
    }
    for (index, brain) in enemy_query.iter().enumerate() {
        lines.push(format!("Enemy {}: {:?}", index, brain.state));
    }
    if let Some((message, _)) = &debug_state.status_message {
        lines.push(message.clone());
    }

    **text = lines.join("\n");
}
