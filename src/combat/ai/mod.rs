//! Combat domain: enemy behaviour modules.

pub mod brain;
pub(crate) mod enemy;

pub use brain::{
    EnemyBrain, EnemyFrame, EnemyState, PatrolBounds, PatrolStep, TargetSense, chase_step,
    decide, patrol_step,
};
pub(crate) use enemy::{handle_enemy_deaths, update_enemy_ai};
