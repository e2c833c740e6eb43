//! Combat domain: components shared by the player and enemies.

use bevy::prelude::*;

use crate::core::{Continuation, Suspend};

/// Marks an entity as a combat participant
#[derive(Component, Debug)]
pub struct Combatant;

/// Marks an enemy actor
#[derive(Component, Debug)]
pub struct Enemy;

/// Terminal marker. Dead actors are skipped by every behaviour system.
#[derive(Component, Debug)]
pub struct Dead;

/// Removes the entity once the death animation has had time to play.
#[derive(Component, Debug)]
pub struct DespawnTimer(Continuation<()>);

impl DespawnTimer {
    pub fn new(delay: f32) -> Self {
        let mut cont = Continuation::default();
        cont.suspend((), Suspend::Seconds(delay.max(0.0)));
        Self(cont)
    }

    /// Returns true on the tick the delay runs out.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.0.tick(dt).is_some()
    }
}

/// Looping animation parameters, the stand-in for an animator's bool inputs.
#[derive(Component, Debug, Default, Clone, PartialEq)]
pub struct AnimationParams {
    pub running: bool,
    pub grounded: bool,
    /// Last one-shot trigger that played
    pub last_trigger: Option<String>,
}

/// Untinted sprite colour, restored after hit flashes.
#[derive(Component, Debug, Clone, Copy)]
pub struct BaseColor(pub Color);

/// Short tint applied when a trigger plays.
#[derive(Component, Debug)]
pub struct Flash {
    pub color: Color,
    pub remaining: f32,
}
