//! Player domain: combo execution, hit checks, and death.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::{
    AnimationCue, AnimationCueEvent, ComboSignal, DamageEvent, Dead, DeathEvent, PlayerCombo,
    overlap_circle, player_attack_point,
};
use crate::core::GameLayer;
use crate::player::{AttackTuning, MovementInput, Player, PlayerMotion};

/// Advance the running combo, then queue any new attack input.
pub(crate) fn run_player_combo(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<AttackTuning>,
    spatial_query: SpatialQuery,
    mut query: Query<
        (Entity, &Transform, &PlayerMotion, &mut PlayerCombo),
        (With<Player>, Without<Dead>),
    >,
    mut damage_events: MessageWriter<DamageEvent>,
    mut cue_events: MessageWriter<AnimationCueEvent>,
) {
    let now = time.elapsed_secs();
    let dt = time.delta_secs();

    for (entity, transform, motion, mut combo) in &mut query {
        let mut signals = Vec::with_capacity(2);
        signals.extend(combo.tick(dt));
        if input.attack_just_pressed && motion.controls_enabled {
            signals.extend(combo.request_attack(now));
        }

        for signal in signals {
            match signal {
                ComboSignal::StepStarted(step) => {
                    cue_events.write(AnimationCueEvent {
                        entity,
                        cue: AnimationCue::Attack(combo.step_name(step).to_string()),
                    });
                }
                ComboSignal::HitFrame(step) => {
                    let center = player_attack_point(
                        transform.translation.truncate(),
                        motion.facing.sign(),
                        tuning.reach,
                    );
                    let hits =
                        overlap_circle(&spatial_query, center, tuning.range, GameLayer::Enemy);
                    debug!("{} hit {} enemies", combo.step_name(step), hits.len());
                    for target in hits {
                        damage_events.write(DamageEvent {
                            source: entity,
                            target,
                            amount: tuning.damage,
                        });
                    }
                }
                ComboSignal::Finished => {}
            }
        }
    }
}

/// Player death: stop every timed action and hand the body over to the despawn timer.
pub(crate) fn handle_player_death(
    mut commands: Commands,
    mut death_events: MessageReader<DeathEvent>,
    mut query: Query<(&mut PlayerMotion, &mut PlayerCombo, &mut LinearVelocity), With<Player>>,
) {
    for event in death_events.read() {
        let Ok((mut motion, mut combo, mut velocity)) = query.get_mut(event.entity) else {
            continue;
        };

        combo.abort();
        motion.controls_enabled = false;
        motion.jump_requested = false;
        motion.desired_vx = 0.0;
        velocity.0 = Vec2::ZERO;
        commands.entity(event.entity).insert(RigidBodyDisabled);
        info!("Player died");
    }
}
