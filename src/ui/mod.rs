//! UI domain: hearts, pause panel, level-end banner, level-complete screen, and touch controls.

mod banner;
mod hud;
mod level_complete;
mod pause;
mod touch;

#[cfg(test)]
mod tests;

pub use banner::end_banner_text;
pub use hud::{HeartState, heart_state};
pub use level_complete::summary_lines;

use bevy::prelude::*;

use crate::combat::CombatSet;
use crate::core::GameState;
use crate::ui::banner::announce_level_end;
use crate::ui::hud::{spawn_hearts_row, update_hearts};
use crate::ui::level_complete::{cleanup_level_complete_screen, spawn_level_complete_screen};
use crate::ui::pause::{
    handle_give_up_button, handle_resume_button, spawn_pause_panel, sync_pause_panel,
    update_progress_label,
};
use crate::ui::touch::{highlight_touch_controls, spawn_touch_controls};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            OnEnter(GameState::Playing),
            (spawn_hearts_row, spawn_pause_panel, spawn_touch_controls),
        )
        .add_systems(
            Update,
            (
                update_hearts,
                update_progress_label,
                sync_pause_panel,
                handle_resume_button,
                highlight_touch_controls,
                announce_level_end,
            )
                .run_if(in_state(GameState::Playing)),
        )
        .add_systems(
            Update,
            handle_give_up_button
                .before(CombatSet::Resolve)
                .run_if(in_state(GameState::Playing)),
        )
        .add_systems(OnEnter(GameState::LevelComplete), spawn_level_complete_screen)
        .add_systems(
            OnExit(GameState::LevelComplete),
            cleanup_level_complete_screen,
        );
    }
}
