//! Player domain: input, movement, combo attacks, death, and camera follow.

mod components;
pub mod motion;
mod resources;
mod spawn;
mod systems;


pub use components::{FallLimit, Player, PlayerMotion};
pub use motion::{MotionFacts, MotionPlan, plan_motion};
pub use resources::{AttackTuning, CameraTuning, MovementInput, MovementTuning};
pub use spawn::spawn_player;
pub use systems::camera_target_x;

use bevy::prelude::*;

use crate::combat::CombatSet;
use crate::content::GameplayDefaults;
use crate::core::{GameState, gameplay_active};
use crate::player::systems::{
    apply_gravity, apply_horizontal_movement, apply_jump, detect_ground, fall_out_of_level,
    follow_player, handle_player_death, plan_player_motion, read_input, run_player_combo,
};

/// On-screen control buttons; the UI spawns them, input sampling reads them.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchControl {
    Left,
    Right,
    Jump,
    Attack,
}

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<AttackTuning>()
            .init_resource::<CameraTuning>()
            .init_resource::<MovementInput>()
            .add_systems(Startup, configure_player)
            .add_systems(
                Update,
                (
                    read_input,
                    detect_ground,
                    fall_out_of_level,
                    plan_player_motion,
                    run_player_combo,
                )
                    .chain()
                    .in_set(CombatSet::Act),
            )
            .add_systems(Update, handle_player_death.after(CombatSet::Resolve))
            .add_systems(Update, follow_player.run_if(in_state(GameState::Playing)))
            .add_systems(
                FixedUpdate,
                (apply_jump, apply_gravity, apply_horizontal_movement)
                    .chain()
                    .run_if(in_state(GameState::Playing))
                    .run_if(gameplay_active),
            );
    }
}

fn configure_player(mut commands: Commands, defaults: Res<GameplayDefaults>) {
    let def = &defaults.player;
    let movement = MovementTuning::from_def(def);
    info!(
        "Player tuning: speed={}, jump={} (apex {:.1})",
        movement.move_speed,
        movement.jump_velocity,
        movement.jump_height()
    );
    commands.insert_resource(movement);
    commands.insert_resource(AttackTuning::from_def(def));
    commands.insert_resource(CameraTuning::from_def(&defaults.camera));
}
