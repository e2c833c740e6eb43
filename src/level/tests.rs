//! Level domain: tests for enemy totals and the next-level choice.

use super::{NextLevel, choose_next_level, enemy_total};
use crate::content::{EnemySpawnDef, LevelDef, LevelRegistry};
use crate::progression::LevelSummary;

fn level(number: u32, enemies: usize) -> LevelDef {
    LevelDef {
        level: number,
        enemies: vec![EnemySpawnDef::default(); enemies],
        ..Default::default()
    }
}

fn summary(level: u32, best_percent: f32) -> LevelSummary {
    LevelSummary {
        level,
        run_percent: best_percent,
        best_percent,
    }
}

#[test]
fn test_enemy_total_counts_placed_enemies_when_undeclared() {
    assert_eq!(enemy_total(&level(1, 3)), 3);
    assert_eq!(enemy_total(&level(1, 0)), 0);

    let declared = LevelDef {
        total_enemies: 5,
        ..level(1, 3)
    };
    assert_eq!(enemy_total(&declared), 5);
}

#[test]
fn test_perfect_run_unlocks_the_next_level() {
    let registry = LevelRegistry::from_levels([level(1, 1), level(2, 2), level(4, 1)]);

    assert_eq!(
        choose_next_level(&registry, &summary(1, 100.0)),
        NextLevel::Advance(2)
    );
    assert_eq!(
        choose_next_level(&registry, &summary(2, 100.0)),
        NextLevel::Advance(4)
    );
}

#[test]
fn test_partial_run_retries_the_same_level() {
    let registry = LevelRegistry::from_levels([level(1, 1), level(2, 2)]);

    assert_eq!(
        choose_next_level(&registry, &summary(1, 99.0)),
        NextLevel::Retry(1)
    );
    assert_eq!(
        choose_next_level(&registry, &summary(2, 50.0)),
        NextLevel::Retry(2)
    );
}

#[test]
fn test_clearing_the_last_level_restarts_from_the_first() {
    let registry = LevelRegistry::from_levels([level(1, 1), level(2, 2)]);

    let next = choose_next_level(&registry, &summary(2, 100.0));
    assert_eq!(next, NextLevel::Restart(1));
    assert_eq!(next.level(), 1);
}
