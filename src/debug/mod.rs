//! Debug tooling for tuning levels and enemy behaviour.
//!
//! - F1: sensing ranges, attack circles, patrol lines, and the ground ray
//! - F2 or `: info overlay
//! - Ctrl+H: heal the player
//! - Ctrl+K: defeat every enemy

mod state;
mod systems;
mod ui;


pub use state::DebugState;

use bevy::prelude::*;

use crate::combat::CombatSet;
use crate::core::GameState;
use crate::debug::systems::{
    draw_debug_gizmos, handle_debug_hotkeys, toggle_debug_views, update_debug_info_overlay,
    update_status_message,
};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(
                Update,
                (toggle_debug_views, update_status_message, update_debug_info_overlay).chain(),
            )
            .add_systems(
                Update,
                handle_debug_hotkeys
                    .before(CombatSet::Resolve)
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                Update,
                draw_debug_gizmos.run_if(|state: Res<DebugState>| state.gizmos),
            );
    }
}
