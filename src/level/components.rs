//! Level domain: markers for everything a level spawns.

use bevy::prelude::*;

/// Despawned when the level is left.
#[derive(Component, Debug, Default)]
pub struct LevelEntity;

/// Static ground block.
#[derive(Component, Debug, Default)]
pub struct Platform;

/// Button on the level-complete screen that moves on to the chosen level.
#[derive(Component, Debug, Default)]
pub struct ContinueButton;
