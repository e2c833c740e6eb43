//! Player domain: movement planning (frame tick) and velocity integration (physics tick).

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::combat::{AnimationCue, AnimationCueEvent, AnimationParams, Dead, PlayerCombo};
use crate::core::Facing;
use crate::player::motion::{MotionFacts, plan_motion};
use crate::player::{MovementInput, MovementTuning, Player, PlayerMotion};

pub(crate) fn plan_player_motion(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<
        (
            Entity,
            &mut PlayerMotion,
            &mut PlayerCombo,
            &mut AnimationParams,
            Option<&mut Sprite>,
        ),
        (With<Player>, Without<Dead>),
    >,
    mut cue_events: MessageWriter<AnimationCueEvent>,
) {
    for (entity, mut motion, mut combo, mut params, sprite) in &mut query {
        if !motion.controls_enabled {
            continue;
        }

        let plan = plan_motion(
            MotionFacts {
                axis: input.horizontal(),
                jump_pressed: input.jump_just_pressed,
                grounded: motion.grounded,
                attacking: combo.is_attacking(),
                facing: motion.facing,
            },
            tuning.move_speed,
        );

        if plan.abort_combo {
            combo.abort();
            debug!("Jump cancelled the combo");
        }

        motion.desired_vx = plan.velocity_x;
        motion.facing = plan.facing;
        if let Some(mut sprite) = sprite {
            sprite.flip_x = plan.facing == Facing::Left;
        }

        if plan.jump {
            motion.jump_requested = true;
            motion.grounded = false;
            cue_events.write(AnimationCueEvent {
                entity,
                cue: AnimationCue::Jump,
            });
        }

        params.running = plan.running;
        params.grounded = motion.grounded;
    }
}

pub(crate) fn apply_jump(
    tuning: Res<MovementTuning>,
    mut query: Query<(&mut PlayerMotion, &mut LinearVelocity), (With<Player>, Without<Dead>)>,
) {
    for (mut motion, mut velocity) in &mut query {
        if motion.jump_requested {
            velocity.y = tuning.jump_velocity;
            motion.jump_requested = false;
        }
    }
}

/// Horizontal velocity is zero while attacking, whatever the input.
pub(crate) fn apply_horizontal_movement(
    mut query: Query<(&PlayerMotion, &PlayerCombo, &mut LinearVelocity), With<Player>>,
) {
    for (motion, combo, mut velocity) in &mut query {
        velocity.x = if !motion.controls_enabled || combo.is_attacking() {
            0.0
        } else {
            motion.desired_vx
        };
    }
}

pub(crate) fn apply_gravity(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    mut query: Query<&mut LinearVelocity, (With<Player>, Without<Dead>)>,
) {
    let dt = time.delta_secs();

    for mut velocity in &mut query {
        velocity.y -= tuning.gravity * dt;
    }
}
