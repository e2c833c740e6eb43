//! Player domain: per-frame movement decisions, independent of the ECS.

use crate::core::Facing;

/// Inputs below this magnitude count as no input.
pub const AXIS_DEADZONE: f32 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionFacts {
    pub axis: f32,
    pub jump_pressed: bool,
    pub grounded: bool,
    pub attacking: bool,
    pub facing: Facing,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionPlan {
    pub velocity_x: f32,
    pub jump: bool,
    /// Cancel the running combo before anything else happens this frame
    pub abort_combo: bool,
    pub facing: Facing,
    pub running: bool,
}

/// Decide this frame's movement.
///
/// A grounded jump pre-empts an attack in progress: the combo is aborted and
/// the rest of the frame is planned as if the player were not attacking.
pub fn plan_motion(facts: MotionFacts, move_speed: f32) -> MotionPlan {
    let abort_combo = facts.jump_pressed && facts.grounded && facts.attacking;
    let attacking = facts.attacking && !abort_combo;
    let jump = facts.jump_pressed && facts.grounded && !attacking;
    let moving = facts.axis.abs() > AXIS_DEADZONE;

    let facing = if attacking || !moving {
        facts.facing
    } else {
        facts.facing.toward(facts.axis)
    };

    MotionPlan {
        velocity_x: if attacking { 0.0 } else { facts.axis * move_speed },
        jump,
        abort_combo,
        facing,
        running: facts.grounded && moving && !attacking && !jump,
    }
}
