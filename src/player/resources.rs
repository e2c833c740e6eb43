//! Player domain: tuning and input resources.

use bevy::prelude::*;

use crate::combat::StrikeTiming;
use crate::content::{CameraDef, PlayerDef};

#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    pub move_speed: f32,
    pub jump_velocity: f32,
    pub gravity: f32,
    pub ground_check_distance: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self::from_def(&PlayerDef::default())
    }
}

impl MovementTuning {
    pub fn from_def(def: &PlayerDef) -> Self {
        Self {
            move_speed: def.move_speed,
            jump_velocity: def.jump_velocity,
            gravity: def.gravity,
            ground_check_distance: def.ground_check_distance,
        }
    }

    /// Apex height of a jump: h = v² / (2g)
    pub fn jump_height(&self) -> f32 {
        if self.gravity <= 0.0 {
            return f32::INFINITY;
        }
        self.jump_velocity * self.jump_velocity / (2.0 * self.gravity)
    }
}

#[derive(Resource, Debug, Clone)]
pub struct AttackTuning {
    pub steps: Vec<String>,
    pub combo_reset_time: f32,
    pub timing: StrikeTiming,
    pub range: f32,
    pub reach: f32,
    pub damage: u32,
}

impl Default for AttackTuning {
    fn default() -> Self {
        Self::from_def(&PlayerDef::default())
    }
}

impl AttackTuning {
    pub fn from_def(def: &PlayerDef) -> Self {
        let attack = &def.attack;
        Self {
            steps: attack.steps.clone(),
            combo_reset_time: attack.combo_reset_time,
            timing: StrikeTiming::new(attack.step_duration, attack.hit_time_fraction),
            range: attack.range,
            reach: attack.reach,
            damage: attack.damage,
        }
    }
}

#[derive(Resource, Debug, Clone)]
pub struct CameraTuning {
    pub look_ahead: f32,
    pub smooth_time: f32,
    pub vertical_offset: f32,
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self::from_def(&CameraDef::default())
    }
}

impl CameraTuning {
    pub fn from_def(def: &CameraDef) -> Self {
        Self {
            look_ahead: def.look_ahead,
            smooth_time: def.smooth_time,
            vertical_offset: def.vertical_offset,
        }
    }
}

/// Sampled input for the current frame.
#[derive(Resource, Debug, Default, Clone)]
pub struct MovementInput {
    /// Raw horizontal axis in -1..=1
    pub axis: f32,
    /// On-screen hold buttons; beats the raw axis while set
    pub held_override: Option<f32>,
    pub jump_just_pressed: bool,
    pub attack_just_pressed: bool,
}

impl MovementInput {
    /// Horizontal input after applying any held override.
    pub fn horizontal(&self) -> f32 {
        self.held_override.unwrap_or(self.axis).clamp(-1.0, 1.0)
    }
}
