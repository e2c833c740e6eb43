//! Progression domain: kill counting and run percentage for one level attempt.

use std::collections::HashSet;

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LevelPhase {
    #[default]
    Active,
    Complete,
}

/// Result of a finished attempt, before the best score is known.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunResult {
    pub level: u32,
    pub kills: u32,
    pub total_enemies: u32,
    pub run_percent: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KillOutcome {
    Counted,
    /// Last enemy: the level is complete and this is the final result
    Finalized(RunResult),
    /// Repeat report for the same enemy, or the attempt is already over
    Ignored,
}

/// Percentage of `total` killed; an empty level counts as fully cleared.
pub fn run_percent(kills: u32, total: u32) -> f32 {
    if total == 0 {
        return 100.0;
    }
    (kills.min(total) as f32 / total as f32 * 100.0).clamp(0.0, 100.0)
}

pub fn progress_text(kills: u32, total: u32) -> String {
    format!(
        "Progress: {:.1}% ({}/{})",
        run_percent(kills, total),
        kills,
        total
    )
}

/// Level 1 is always open; later levels need a perfect run on the one before.
pub fn level_unlocked(level: u32, previous_level_best: Option<f32>) -> bool {
    level <= 1 || previous_level_best.is_some_and(|best| best >= 100.0)
}

/// Progress of the current level attempt.
#[derive(Resource, Debug, Clone)]
pub struct LevelProgress {
    level: u32,
    total_enemies: u32,
    kills: u32,
    phase: LevelPhase,
    counted: HashSet<Entity>,
    /// Best stored for this level when the attempt began
    pub best_at_start: f32,
}

impl LevelProgress {
    pub fn new(level: u32, total_enemies: u32) -> Self {
        Self {
            level,
            total_enemies,
            kills: 0,
            phase: LevelPhase::Active,
            counted: HashSet::new(),
            best_at_start: 0.0,
        }
    }

    /// Count one enemy death. Each enemy counts once and kills never pass the total.
    pub fn register_kill(&mut self, victim: Entity) -> KillOutcome {
        if self.phase == LevelPhase::Complete || !self.counted.insert(victim) {
            return KillOutcome::Ignored;
        }

        self.kills = (self.kills + 1).min(self.total_enemies);
        if self.kills >= self.total_enemies {
            match self.finalize() {
                Some(result) => KillOutcome::Finalized(result),
                None => KillOutcome::Ignored,
            }
        } else {
            KillOutcome::Counted
        }
    }

    /// End the attempt regardless of kills (player death, leaving the level).
    /// Returns `None` if the attempt was already finalized.
    pub fn on_level_end(&mut self) -> Option<RunResult> {
        self.finalize()
    }

    fn finalize(&mut self) -> Option<RunResult> {
        if self.phase == LevelPhase::Complete {
            return None;
        }
        self.phase = LevelPhase::Complete;
        Some(RunResult {
            level: self.level,
            kills: self.kills,
            total_enemies: self.total_enemies,
            run_percent: self.run_percent(),
        })
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn kills(&self) -> u32 {
        self.kills
    }

    pub fn total_enemies(&self) -> u32 {
        self.total_enemies
    }

    pub fn phase(&self) -> LevelPhase {
        self.phase
    }

    pub fn run_percent(&self) -> f32 {
        run_percent(self.kills, self.total_enemies)
    }

    pub fn text(&self) -> String {
        progress_text(self.kills, self.total_enemies)
    }
}
