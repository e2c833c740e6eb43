//! Level domain: choosing which level to play and how many kills it needs.

use bevy::prelude::*;

use crate::content::{LevelDef, LevelRegistry};
use crate::progression::{LevelSummary, level_unlocked};

/// Level currently loaded, or about to be.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveLevel(pub u32);

impl Default for ActiveLevel {
    fn default() -> Self {
        Self(1)
    }
}

/// Where the level-complete screen leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextLevel {
    /// The following level is unlocked
    Advance(u32),
    /// Not cleared yet; play the same level again
    Retry(u32),
    /// Last level cleared; start over from the first
    Restart(u32),
}

impl NextLevel {
    pub fn level(self) -> u32 {
        match self {
            NextLevel::Advance(level) | NextLevel::Retry(level) | NextLevel::Restart(level) => {
                level
            }
        }
    }

    pub fn prompt(self) -> String {
        match self {
            NextLevel::Advance(level) => {
                format!("Level {} unlocked! Press [Enter] to continue", level)
            }
            NextLevel::Retry(_) => {
                "Defeat every enemy to unlock the next level. Press [Enter] to retry".to_string()
            }
            NextLevel::Restart(_) => "All levels cleared! Press [Enter] to play again".to_string(),
        }
    }
}

/// Pick the level after a finished attempt.
pub fn choose_next_level(registry: &LevelRegistry, summary: &LevelSummary) -> NextLevel {
    let Some(next) = registry.next_after(summary.level) else {
        if summary.best_percent >= 100.0 {
            return NextLevel::Restart(registry.first_level().unwrap_or(summary.level));
        }
        return NextLevel::Retry(summary.level);
    };

    if level_unlocked(next, Some(summary.best_percent)) {
        NextLevel::Advance(next)
    } else {
        NextLevel::Retry(summary.level)
    }
}

/// Kills needed for 100%: the declared total, or every placed enemy when none is declared.
pub fn enemy_total(def: &LevelDef) -> u32 {
    if def.total_enemies > 0 {
        def.total_enemies
    } else {
        u32::try_from(def.enemies.len()).unwrap_or(u32::MAX)
    }
}
