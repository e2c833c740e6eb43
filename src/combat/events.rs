//! Combat domain: combat-related events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

#[derive(Debug)]
pub struct DamageEvent {
    pub source: Entity,
    pub target: Entity,
    pub amount: u32,
}

impl Message for DamageEvent {}

/// Emitted whenever an actor's hit points change, and once when it spawns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthChangedEvent {
    pub entity: Entity,
    pub current: u32,
    pub max: u32,
}

impl Message for HealthChangedEvent {}

/// Non-blocking hurt cue: the actor took damage and survived.
#[derive(Debug)]
pub struct HurtEvent {
    pub entity: Entity,
}

impl Message for HurtEvent {}

/// Emitted exactly once per actor, on the hit that empties its health.
#[derive(Debug)]
pub struct DeathEvent {
    pub entity: Entity,
}

impl Message for DeathEvent {}

/// One-shot animation trigger. Looping state such as running lives in
/// [`AnimationParams`](crate::combat::AnimationParams).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnimationCue {
    Jump,
    /// Named attack clip (combo step or enemy attack)
    Attack(String),
    Hit,
    Death,
}

#[derive(Debug, Clone)]
pub struct AnimationCueEvent {
    pub entity: Entity,
    pub cue: AnimationCue,
}

impl Message for AnimationCueEvent {}
