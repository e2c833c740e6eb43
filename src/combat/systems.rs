//! Combat domain: damage resolution, death, despawn, and animation cue systems.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::components::{AnimationParams, BaseColor, Dead, DespawnTimer, Flash};
use crate::combat::events::{
    AnimationCue, AnimationCueEvent, DamageEvent, DeathEvent, HealthChangedEvent, HurtEvent,
};
use crate::combat::health::Health;
use crate::combat::resources::CombatTuning;

const HIT_TINT: Color = Color::srgb(1.0, 0.45, 0.45);
const ATTACK_TINT: Color = Color::srgb(1.0, 0.95, 0.7);
const DEATH_TINT: Color = Color::srgba(0.4, 0.4, 0.4, 0.6);

/// Resolve damage messages against health and fan the result out.
pub(crate) fn apply_damage(
    mut damage_events: MessageReader<DamageEvent>,
    mut health_events: MessageWriter<HealthChangedEvent>,
    mut hurt_events: MessageWriter<HurtEvent>,
    mut death_events: MessageWriter<DeathEvent>,
    mut query: Query<&mut Health>,
) {
    for event in damage_events.read() {
        let Ok(mut health) = query.get_mut(event.target) else {
            continue;
        };

        // Dead actors ignore damage
        let Some(change) = health.take_damage(event.amount) else {
            continue;
        };

        debug!(
            "Damage: {:?} -> {:?} for {} ({}/{})",
            event.source, event.target, event.amount, change.current, change.max
        );

        health_events.write(HealthChangedEvent {
            entity: event.target,
            current: change.current,
            max: change.max,
        });

        if change.died {
            death_events.write(DeathEvent {
                entity: event.target,
            });
        } else {
            hurt_events.write(HurtEvent {
                entity: event.target,
            });
        }
    }
}

/// Survivors of a hit play the non-blocking Hit reaction.
pub(crate) fn cue_hurt_reactions(
    mut hurt_events: MessageReader<HurtEvent>,
    mut cue_events: MessageWriter<AnimationCueEvent>,
) {
    for event in hurt_events.read() {
        cue_events.write(AnimationCueEvent {
            entity: event.entity,
            cue: AnimationCue::Hit,
        });
    }
}

/// Freshly spawned actors report their starting health so HUDs begin in sync.
pub(crate) fn announce_new_health(
    query: Query<(Entity, &Health), Added<Health>>,
    mut health_events: MessageWriter<HealthChangedEvent>,
) {
    for (entity, health) in &query {
        let snapshot = health.snapshot();
        health_events.write(HealthChangedEvent {
            entity,
            current: snapshot.current,
            max: snapshot.max,
        });
    }
}

/// Common death handling: freeze, drop collision, schedule removal.
pub(crate) fn handle_deaths(
    mut commands: Commands,
    tuning: Res<CombatTuning>,
    mut death_events: MessageReader<DeathEvent>,
    mut cue_events: MessageWriter<AnimationCueEvent>,
    mut query: Query<Option<&mut AnimationParams>, Without<Dead>>,
) {
    for event in death_events.read() {
        let Ok(params) = query.get_mut(event.entity) else {
            continue;
        };
        if let Some(mut params) = params {
            params.running = false;
        }

        commands.entity(event.entity).insert((
            Dead,
            ColliderDisabled,
            DespawnTimer::new(tuning.death_delay),
        ));
        cue_events.write(AnimationCueEvent {
            entity: event.entity,
            cue: AnimationCue::Death,
        });
        info!("{:?} died", event.entity);
    }
}

pub(crate) fn tick_despawn_timers(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut DespawnTimer)>,
) {
    let dt = time.delta_secs();
    for (entity, mut timer) in &mut query {
        if timer.tick(dt) {
            commands.entity(entity).despawn();
        }
    }
}

/// Play one-shot triggers: remember them and tint the sprite.
pub(crate) fn apply_animation_cues(
    mut commands: Commands,
    tuning: Res<CombatTuning>,
    mut cue_events: MessageReader<AnimationCueEvent>,
    mut query: Query<(&mut AnimationParams, &mut Sprite)>,
) {
    for event in cue_events.read() {
        let Ok((mut params, mut sprite)) = query.get_mut(event.entity) else {
            continue;
        };

        let trigger = match &event.cue {
            AnimationCue::Jump => "Jump".to_string(),
            AnimationCue::Attack(clip) => clip.clone(),
            AnimationCue::Hit => "Hit".to_string(),
            AnimationCue::Death => "Death".to_string(),
        };
        params.last_trigger = Some(trigger);

        match event.cue {
            AnimationCue::Death => {
                sprite.color = DEATH_TINT;
                commands.entity(event.entity).remove::<Flash>();
            }
            AnimationCue::Hit | AnimationCue::Attack(_) => {
                let color = if event.cue == AnimationCue::Hit {
                    HIT_TINT
                } else {
                    ATTACK_TINT
                };
                sprite.color = color;
                commands.entity(event.entity).insert(Flash {
                    color,
                    remaining: tuning.hit_flash_duration,
                });
            }
            AnimationCue::Jump => {}
        }
    }
}

pub(crate) fn update_flashes(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut Flash, &mut Sprite, &BaseColor), Without<Dead>>,
) {
    let dt = time.delta_secs();
    for (entity, mut flash, mut sprite, base) in &mut query {
        flash.remaining -= dt;
        if flash.remaining <= 0.0 {
            sprite.color = base.0;
            commands.entity(entity).remove::<Flash>();
        } else {
            sprite.color = flash.color;
        }
    }
}
