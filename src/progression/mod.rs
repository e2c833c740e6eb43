//! Progression domain: kills per attempt, run percentage, and best-score persistence.

mod aggregator;
mod events;
mod session;
mod store;
mod systems;

#[cfg(test)]
mod tests;

pub use aggregator::{
    KillOutcome, LevelPhase, LevelProgress, RunResult, level_unlocked, progress_text, run_percent,
};
pub use events::{LevelEndReason, LevelFinalizedEvent, LevelStartedEvent, ProgressTextEvent};
pub use session::{LevelSummary, Session, fetch_previous_best, resolve_best};
pub use store::{
    JsonFileProgressStore, MemoryProgressStore, ProgressBackend, ProgressStore, StoreError,
};
pub use systems::LevelExit;

use bevy::prelude::*;

use crate::combat::CombatSet;
use crate::core::GameState;
use crate::progression::systems::{
    setup_progress_store, start_level_progress, tick_level_exit, track_deaths,
};

pub struct ProgressionPlugin;

impl Plugin for ProgressionPlugin {
    fn build(&self, app: &mut App) {
        // Replaced by the save file at startup; tests keep the in-memory store.
        app.insert_resource(ProgressBackend::new(MemoryProgressStore::default()))
            .init_resource::<Session>()
            .add_message::<LevelStartedEvent>()
            .add_message::<LevelFinalizedEvent>()
            .add_message::<ProgressTextEvent>()
            .add_systems(Startup, setup_progress_store)
            .add_systems(
                Update,
                (start_level_progress, track_deaths, tick_level_exit)
                    .chain()
                    .after(CombatSet::Resolve)
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
