//! Player domain: components for the controllable character.

use bevy::prelude::*;

use crate::core::Facing;

#[derive(Component, Debug)]
pub struct Player;

/// Height below which the player counts as having fallen out of the level.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct FallLimit(pub f32);

#[derive(Component, Debug, Clone)]
pub struct PlayerMotion {
    pub grounded: bool,
    pub facing: Facing,
    /// Set by the frame tick, consumed by the physics tick
    pub jump_requested: bool,
    /// Horizontal velocity the physics tick should apply
    pub desired_vx: f32,
    /// Cleared on death; no input is processed afterwards
    pub controls_enabled: bool,
}

impl Default for PlayerMotion {
    fn default() -> Self {
        Self {
            grounded: false,
            facing: Facing::Right,
            jump_requested: false,
            desired_vx: 0.0,
            controls_enabled: true,
        }
    }
}
