//! Validation and repair of level definitions.

use std::collections::HashSet;
use thiserror::Error;

use super::data::LevelDef;

/// Where a repaired fall limit lands, relative to the player spawn.
const DEFAULT_FALL_DEPTH: f32 = -11.0;

/// A problem found in level data. Most are repaired in place by [`sanitize_levels`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("level {level}: enemy {index} has inverted patrol bounds ({left_x} > {right_x})")]
    InvertedPatrolBounds {
        level: u32,
        index: usize,
        left_x: f32,
        right_x: f32,
    },

    #[error("level {level}: enemy {index} spawns at x={x}, outside its patrol bounds")]
    SpawnOutsidePatrol { level: u32, index: usize, x: f32 },

    #[error("level {level}: enemy {index} has zero max hp")]
    ZeroHealth { level: u32, index: usize },

    #[error("level {level}: total_enemies is {declared} but only {spawned} enemies spawn")]
    UnreachableTotal {
        level: u32,
        declared: u32,
        spawned: usize,
    },

    #[error("level {level}: fall limit {fall_limit} is not below the player spawn height {spawn_y}")]
    FallLimitAboveSpawn {
        level: u32,
        fall_limit: f32,
        spawn_y: f32,
    },

    #[error("level {level} is defined more than once")]
    DuplicateLevel { level: u32 },
}

/// Validate every level. Returns a list of problems, empty if all levels are clean.
pub fn validate_levels(levels: &[LevelDef]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for level in levels {
        if !seen.insert(level.level) {
            errors.push(ValidationError::DuplicateLevel { level: level.level });
        }

        for (index, enemy) in level.enemies.iter().enumerate() {
            if enemy.left_x > enemy.right_x {
                errors.push(ValidationError::InvertedPatrolBounds {
                    level: level.level,
                    index,
                    left_x: enemy.left_x,
                    right_x: enemy.right_x,
                });
            } else if enemy.x < enemy.left_x || enemy.x > enemy.right_x {
                errors.push(ValidationError::SpawnOutsidePatrol {
                    level: level.level,
                    index,
                    x: enemy.x,
                });
            }

            if enemy.max_hp == 0 {
                errors.push(ValidationError::ZeroHealth {
                    level: level.level,
                    index,
                });
            }
        }

        if level.fall_limit >= level.player_spawn.1 {
            errors.push(ValidationError::FallLimitAboveSpawn {
                level: level.level,
                fall_limit: level.fall_limit,
                spawn_y: level.player_spawn.1,
            });
        }

        if level.total_enemies as usize > level.enemies.len() {
            errors.push(ValidationError::UnreachableTotal {
                level: level.level,
                declared: level.total_enemies,
                spawned: level.enemies.len(),
            });
        }
    }

    errors
}

/// Repair what can be repaired: swap inverted bounds, clamp spawns into their
/// patrol range, give zero-hp enemies a single hit point and drop a fall
/// limit that sits above the spawn back to the default distance below it.
/// Unreachable totals and duplicates are left alone.
pub fn sanitize_levels(levels: &mut [LevelDef]) {
    for level in levels.iter_mut() {
        for enemy in &mut level.enemies {
            if enemy.left_x > enemy.right_x {
                std::mem::swap(&mut enemy.left_x, &mut enemy.right_x);
            }
            enemy.x = enemy.x.clamp(enemy.left_x, enemy.right_x);
            enemy.max_hp = enemy.max_hp.max(1);
        }
        if level.fall_limit >= level.player_spawn.1 {
            level.fall_limit = level.player_spawn.1 + DEFAULT_FALL_DEPTH;
        }
    }
}
