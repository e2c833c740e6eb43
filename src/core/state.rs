//! Core domain: game state definitions for the level flow.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    /// Content is loaded during `Startup`; the first frame moves on to `Playing`.
    #[default]
    Boot,
    Playing,
    /// The level attempt has been finalized and its summary is on screen.
    LevelComplete,
}
