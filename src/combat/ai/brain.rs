//! Combat domain: enemy decision logic, independent of the ECS.
//!
//! Each frame the enemy system senses the player, hands the facts to
//! [`EnemyBrain::update`] and applies the returned [`EnemyFrame`] to the world.

use bevy::prelude::*;

use crate::combat::strike::{EnemyStrike, StrikeSignal, StrikeTiming};
use crate::content::EnemySpawnDef;
use crate::core::{Continuation, Facing, Suspend};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnemyState {
    #[default]
    Patrol,
    Chase,
    /// Player is in melee range but the cooldown has not elapsed
    Hold,
    Attack,
    /// Idling at a patrol bound before turning around
    Turning,
    Dead,
}

impl EnemyState {
    /// States that run to completion without re-evaluating the world.
    pub fn is_committed(self) -> bool {
        matches!(self, EnemyState::Attack | EnemyState::Turning | EnemyState::Dead)
    }
}

/// What the enemy knows about the player this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetSense {
    /// Player x minus enemy x
    pub dx: f32,
    pub distance: f32,
    /// Player overlaps the melee circle
    pub in_melee: bool,
}

/// Pick the next state from the current one and the sensed facts.
pub fn decide(
    current: EnemyState,
    target: Option<TargetSense>,
    detect_range: f32,
    cooldown_ready: bool,
) -> EnemyState {
    if current.is_committed() {
        return current;
    }

    match target.filter(|t| t.distance <= detect_range) {
        Some(t) if t.in_melee && cooldown_ready => EnemyState::Attack,
        Some(t) if t.in_melee => EnemyState::Hold,
        Some(_) => EnemyState::Chase,
        None => EnemyState::Patrol,
    }
}

/// Horizontal patrol range, always ordered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatrolBounds {
    pub left_x: f32,
    pub right_x: f32,
}

impl PatrolBounds {
    pub fn new(a: f32, b: f32) -> Self {
        Self {
            left_x: a.min(b),
            right_x: a.max(b),
        }
    }

    pub fn clamp(&self, x: f32) -> f32 {
        x.clamp(self.left_x, self.right_x)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatrolStep {
    pub x: f32,
    pub facing: Facing,
    pub reached_bound: bool,
}

/// Advance one patrol step.
///
/// Outside the bounds (after a chase) the enemy walks back toward the nearest
/// bound. Inside, it walks in its facing direction and stops on the bound it
/// reaches.
pub fn patrol_step(x: f32, facing: Facing, bounds: PatrolBounds, speed: f32, dt: f32) -> PatrolStep {
    let step = speed * dt;

    if x < bounds.left_x {
        return PatrolStep {
            x: (x + step).min(bounds.left_x),
            facing: Facing::Right,
            reached_bound: false,
        };
    }
    if x > bounds.right_x {
        return PatrolStep {
            x: (x - step).max(bounds.right_x),
            facing: Facing::Left,
            reached_bound: false,
        };
    }

    let moved = x + step * facing.sign();
    let reached_bound = match facing {
        Facing::Right => moved >= bounds.right_x,
        Facing::Left => moved <= bounds.left_x,
    };

    PatrolStep {
        x: bounds.clamp(moved),
        facing,
        reached_bound,
    }
}

/// Move toward `target_x` without stepping past it.
pub fn chase_step(x: f32, target_x: f32, speed: f32, dt: f32) -> f32 {
    let dx = target_x - x;
    let step = speed * dt;
    if dx.abs() <= step {
        target_x
    } else if dx > 0.0 {
        x + step
    } else {
        x - step
    }
}

/// Result of one brain update, applied to the entity by the enemy systems.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EnemyFrame {
    pub x: f32,
    pub running: bool,
    pub attack_started: bool,
    pub hit_frame: bool,
}

/// Per-enemy state machine and tuning.
#[derive(Component, Debug, Clone)]
pub struct EnemyBrain {
    pub state: EnemyState,
    pub facing: Facing,
    pub bounds: PatrolBounds,
    pub move_speed: f32,
    pub detect_range: f32,
    pub attack_range: f32,
    pub damage: u32,
    pub turn_idle_time: f32,
    strike: EnemyStrike,
    turn: Continuation<()>,
}

impl EnemyBrain {
    pub fn from_def(def: &EnemySpawnDef) -> Self {
        Self {
            state: EnemyState::Patrol,
            facing: Facing::Right,
            bounds: PatrolBounds::new(def.left_x, def.right_x),
            move_speed: def.move_speed.max(0.0),
            detect_range: def.detect_range.max(0.0),
            attack_range: def.attack_range.max(0.0),
            damage: def.damage,
            turn_idle_time: def.turn_idle_time.max(0.0),
            strike: EnemyStrike::new(
                StrikeTiming::new(def.attack_duration, StrikeTiming::DEFAULT_HIT_FRACTION),
                def.attack_cooldown,
            ),
            turn: Continuation::default(),
        }
    }

    pub fn strike(&self) -> &EnemyStrike {
        &self.strike
    }

    pub fn is_dead(&self) -> bool {
        self.state == EnemyState::Dead
    }

    /// Run one frame of behaviour at position `x` and time `now`.
    pub fn update(&mut self, x: f32, target: Option<TargetSense>, now: f32, dt: f32) -> EnemyFrame {
        let mut frame = EnemyFrame {
            x,
            ..EnemyFrame::default()
        };

        match self.state {
            EnemyState::Dead => return frame,
            EnemyState::Attack => match self.strike.tick(dt) {
                Some(StrikeSignal::HitFrame) => {
                    frame.hit_frame = true;
                    return frame;
                }
                Some(StrikeSignal::Completed) => self.state = EnemyState::Hold,
                None => return frame,
            },
            EnemyState::Turning => {
                if self.turn.tick(dt).is_none() {
                    return frame;
                }
                self.facing = self.facing.flipped();
                self.state = EnemyState::Patrol;
            }
            _ => {}
        }

        let next = decide(
            self.state,
            target,
            self.detect_range,
            self.strike.cooldown_ready(now),
        );

        if let Some(t) = target.filter(|_| next != EnemyState::Patrol) {
            self.facing = self.facing.toward(t.dx);
        }

        match next {
            EnemyState::Attack => {
                if self.strike.begin(now) {
                    frame.attack_started = true;
                    self.state = EnemyState::Attack;
                } else {
                    self.state = EnemyState::Hold;
                }
            }
            EnemyState::Chase => {
                if let Some(t) = target {
                    frame.x = chase_step(x, x + t.dx, self.move_speed, dt);
                    frame.running = true;
                }
                self.state = EnemyState::Chase;
            }
            EnemyState::Patrol => {
                let step = patrol_step(x, self.facing, self.bounds, self.move_speed, dt);
                frame.x = step.x;
                self.facing = step.facing;
                if step.reached_bound {
                    self.begin_turn();
                } else {
                    frame.running = true;
                    self.state = EnemyState::Patrol;
                }
            }
            other => self.state = other,
        }

        frame
    }

    /// Stop and idle before reversing direction.
    pub fn begin_turn(&mut self) {
        self.state = EnemyState::Turning;
        self.turn
            .suspend((), Suspend::Seconds(self.turn_idle_time));
    }

    /// Enter the terminal state and drop every pending timed action.
    pub fn kill(&mut self) {
        self.state = EnemyState::Dead;
        self.strike.cancel();
        self.turn.cancel();
    }
}
