//! Combat domain: enemy sensing, movement, and attacks.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::ai::brain::{EnemyBrain, TargetSense};
use crate::combat::components::{AnimationParams, Dead, Enemy};
use crate::combat::events::{AnimationCue, AnimationCueEvent, DamageEvent, DeathEvent};
use crate::combat::hits::{enemy_melee_center, overlap_circle};
use crate::combat::resources::CombatRng;
use crate::core::{Facing, GameLayer};
use crate::player::Player;

/// Sense the player, run each brain, and apply the outcome.
pub(crate) fn update_enemy_ai(
    time: Res<Time>,
    spatial_query: SpatialQuery,
    mut rng: ResMut<CombatRng>,
    player_query: Query<&Transform, (With<Player>, Without<Dead>, Without<Enemy>)>,
    mut enemy_query: Query<
        (
            Entity,
            &mut Transform,
            &mut EnemyBrain,
            &mut AnimationParams,
            &mut Sprite,
        ),
        (With<Enemy>, Without<Dead>),
    >,
    mut damage_events: MessageWriter<DamageEvent>,
    mut cue_events: MessageWriter<AnimationCueEvent>,
) {
    let now = time.elapsed_secs();
    let dt = time.delta_secs();

    // No live player: every enemy just patrols
    let player_pos = player_query
        .single()
        .ok()
        .map(|t| t.translation.truncate());

    for (entity, mut transform, mut brain, mut params, mut sprite) in &mut enemy_query {
        let pos = transform.translation.truncate();

        let target = player_pos.map(|player| {
            let distance = player.distance(pos);
            let in_melee = distance <= brain.detect_range
                && !overlap_circle(
                    &spatial_query,
                    enemy_melee_center(pos),
                    brain.attack_range,
                    GameLayer::Player,
                )
                .is_empty();
            TargetSense {
                dx: player.x - pos.x,
                distance,
                in_melee,
            }
        });

        let frame = brain.update(pos.x, target, now, dt);

        transform.translation.x = frame.x;
        params.running = frame.running;
        sprite.flip_x = brain.facing == Facing::Left;

        if frame.attack_started {
            let clip = rng.enemy_attack_clip();
            debug!("Enemy {:?} attacks with {}", entity, clip);
            cue_events.write(AnimationCueEvent {
                entity,
                cue: AnimationCue::Attack(clip.to_string()),
            });
        }

        if frame.hit_frame {
            let hits = overlap_circle(
                &spatial_query,
                enemy_melee_center(pos),
                brain.attack_range,
                GameLayer::Player,
            );
            for target in hits {
                damage_events.write(DamageEvent {
                    source: entity,
                    target,
                    amount: brain.damage,
                });
            }
        }
    }
}

/// Put dying enemies into their terminal state, cancelling any attack or turn.
pub(crate) fn handle_enemy_deaths(
    mut death_events: MessageReader<DeathEvent>,
    mut query: Query<&mut EnemyBrain, With<Enemy>>,
) {
    for event in death_events.read() {
        if let Ok(mut brain) = query.get_mut(event.entity) {
            brain.kill();
        }
    }
}
