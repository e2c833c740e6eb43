//! Level domain: level layouts in the world and the flow between levels.

mod components;
mod flow;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{ContinueButton, LevelEntity, Platform};
pub use flow::{ActiveLevel, NextLevel, choose_next_level, enemy_total};

use bevy::prelude::*;

use crate::core::GameState;
use crate::level::systems::{cleanup_level, continue_after_level, setup_active_level, spawn_level};

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActiveLevel>()
            .add_systems(Startup, setup_active_level)
            .add_systems(OnEnter(GameState::Playing), spawn_level)
            .add_systems(OnExit(GameState::Playing), cleanup_level)
            .add_systems(
                Update,
                continue_after_level.run_if(in_state(GameState::LevelComplete)),
            );
    }
}
