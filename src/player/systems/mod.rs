//! Player domain: system modules for input, movement, combat, and camera.

pub(crate) mod camera;
pub(crate) mod collisions;
pub(crate) mod combat;
pub(crate) mod input;
pub(crate) mod movement;

pub use camera::camera_target_x;
pub(crate) use camera::follow_player;
pub(crate) use collisions::{detect_ground, fall_out_of_level};
pub(crate) use combat::{handle_player_death, run_player_combo};
pub(crate) use input::read_input;
pub(crate) use movement::{apply_gravity, apply_horizontal_movement, apply_jump, plan_player_motion};
