//! Progression domain: level lifecycle messages.

use bevy::ecs::message::Message;

use crate::progression::session::LevelSummary;

/// Written by the level spawner once the level's actors exist.
#[derive(Debug, Clone, Copy)]
pub struct LevelStartedEvent {
    pub level: u32,
    /// Enemies needed for 100%
    pub total_enemies: u32,
}

impl Message for LevelStartedEvent {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelEndReason {
    AllEnemiesKilled,
    PlayerDied,
}

/// The attempt is over and the best score has been resolved.
#[derive(Debug, Clone, Copy)]
pub struct LevelFinalizedEvent {
    pub summary: LevelSummary,
    pub reason: LevelEndReason,
}

impl Message for LevelFinalizedEvent {}

/// Fresh progress line for the UI.
#[derive(Debug, Clone)]
pub struct ProgressTextEvent {
    pub text: String,
}

impl Message for ProgressTextEvent {}
