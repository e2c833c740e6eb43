//! Data definitions for the RON content files.
//!
//! These structs mirror assets/data/*.ron. Every field has a default so a
//! file only needs to spell out what differs from the built-in tuning.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

// ============================================================================
// Common wrapper for RON files with schema_version and items
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

// ============================================================================
// Gameplay defaults (gameplay.ron)
// ============================================================================

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GameplayDefaults {
    pub player: PlayerDef,
    /// Seconds between a death and the actor being removed from the world
    pub death_delay: f32,
    pub progress: ProgressDef,
    /// Level loaded when the game boots
    pub start_level: u32,
    /// Fixed seed for cosmetic randomness; random per launch when unset
    pub rng_seed: Option<u64>,
    pub camera: CameraDef,
}

impl Default for GameplayDefaults {
    fn default() -> Self {
        Self {
            player: PlayerDef::default(),
            death_delay: 0.5,
            progress: ProgressDef::default(),
            start_level: 1,
            rng_seed: None,
            camera: CameraDef::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CameraDef {
    /// How far ahead of a moving player the camera looks
    pub look_ahead: f32,
    /// Seconds to close the horizontal gap; 0 snaps
    pub smooth_time: f32,
    pub vertical_offset: f32,
}

impl Default for CameraDef {
    fn default() -> Self {
        Self {
            look_ahead: 2.0,
            smooth_time: 0.3,
            vertical_offset: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlayerDef {
    pub move_speed: f32,
    pub jump_velocity: f32,
    /// Downward acceleration in units/sec²
    pub gravity: f32,
    pub max_hp: u32,
    /// Collider size in world units (width, height)
    pub size: (f32, f32),
    /// Length of the downward ground ray below the feet
    pub ground_check_distance: f32,
    pub attack: PlayerAttackDef,
}

impl Default for PlayerDef {
    fn default() -> Self {
        Self {
            move_speed: 10.0,
            jump_velocity: 18.0,
            gravity: 40.0,
            max_hp: 3,
            size: (0.8, 1.2),
            ground_check_distance: 0.2,
            attack: PlayerAttackDef::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlayerAttackDef {
    /// Combo step names, played in order and repeated
    pub steps: Vec<String>,
    /// Seconds of attack silence after which the combo restarts at the first step
    pub combo_reset_time: f32,
    /// Nominal duration of one attack step
    pub step_duration: f32,
    /// Fraction of a step at which the hit registers
    pub hit_time_fraction: f32,
    /// Radius of the hit circle
    pub range: f32,
    /// Forward distance from the body to the hit circle centre
    pub reach: f32,
    pub damage: u32,
}

impl Default for PlayerAttackDef {
    fn default() -> Self {
        Self {
            steps: vec![
                "Attack1".to_string(),
                "Attack2".to_string(),
                "Attack3".to_string(),
            ],
            combo_reset_time: 0.7,
            step_duration: 0.5,
            hit_time_fraction: 0.3,
            range: 0.5,
            reach: 0.5,
            damage: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ProgressDef {
    /// Where the local progress save file lives
    pub store_path: String,
    /// Signed-in user; `None` plays offline without touching the store
    pub user_id: Option<u32>,
}

impl Default for ProgressDef {
    fn default() -> Self {
        Self {
            store_path: "saves/progress.json".to_string(),
            user_id: None,
        }
    }
}

// ============================================================================
// Levels (levels.ron)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LevelDef {
    pub level: u32,
    /// Enemies needed for 100%; 0 counts the enemies present at level start
    pub total_enemies: u32,
    pub player_spawn: (f32, f32),
    /// Falling below this height kills the player
    pub fall_limit: f32,
    pub platforms: Vec<PlatformDef>,
    pub enemies: Vec<EnemySpawnDef>,
}

impl Default for LevelDef {
    fn default() -> Self {
        Self {
            level: 1,
            total_enemies: 0,
            player_spawn: (0.0, 1.0),
            fall_limit: -10.0,
            platforms: vec![PlatformDef::default()],
            enemies: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlatformDef {
    /// Centre of the platform
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for PlatformDef {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: -1.0,
            width: 40.0,
            height: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct EnemySpawnDef {
    pub x: f32,
    pub y: f32,
    pub left_x: f32,
    pub right_x: f32,
    /// Patrol and chase speed in units/sec
    pub move_speed: f32,
    pub detect_range: f32,
    /// Radius of the melee circle
    pub attack_range: f32,
    pub attack_cooldown: f32,
    /// Duration of the whole attack (wind-up plus recovery)
    pub attack_duration: f32,
    pub damage: u32,
    pub max_hp: u32,
    /// Idle time at a patrol bound before turning around
    pub turn_idle_time: f32,
}

impl Default for EnemySpawnDef {
    fn default() -> Self {
        Self {
            x: 0.0,
            // resting on the default platform
            y: -0.2,
            left_x: -3.0,
            right_x: 3.0,
            move_speed: 2.0,
            detect_range: 3.0,
            attack_range: 0.5,
            attack_cooldown: 1.0,
            attack_duration: 0.5,
            damage: 1,
            max_hp: 1,
            turn_idle_time: 0.25,
        }
    }
}
