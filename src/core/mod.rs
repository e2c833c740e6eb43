//! Core domain: level flow states, physics layers, pausing, and timed sequences.

mod facing;
mod layers;
mod resources;
pub mod sequence;
mod state;

#[cfg(test)]
mod tests;

pub use facing::Facing;
pub use layers::GameLayer;
pub use resources::{GameplayPaused, gameplay_active};
pub use sequence::{Continuation, Suspend};
pub use state::GameState;

use bevy::prelude::*;

/// Pause source owned by the Escape-key pause menu.
pub const PAUSE_MENU_SOURCE: &str = "pause_menu";

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<GameplayPaused>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, begin_play.run_if(in_state(GameState::Boot)))
            .add_systems(Update, toggle_pause.run_if(in_state(GameState::Playing)))
            .add_systems(OnExit(GameState::Playing), clear_pause);
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scale: 1.0 / 64.0,
            ..OrthographicProjection::default_2d()
        }),
    ));
}

fn begin_play(mut next_state: ResMut<NextState<GameState>>) {
    next_state.set(GameState::Playing);
}

/// Escape freezes virtual time, which stops both the frame and the physics tick.
fn toggle_pause(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut paused: ResMut<GameplayPaused>,
    mut time: ResMut<Time<Virtual>>,
) {
    if !keyboard.just_pressed(KeyCode::Escape) {
        return;
    }

    if paused.toggle(PAUSE_MENU_SOURCE) {
        time.pause();
        info!("Gameplay paused");
    } else {
        time.unpause();
        info!("Gameplay resumed");
    }
}

fn clear_pause(mut paused: ResMut<GameplayPaused>, mut time: ResMut<Time<Virtual>>) {
    paused.unpause(PAUSE_MENU_SOURCE);
    time.unpause();
}
