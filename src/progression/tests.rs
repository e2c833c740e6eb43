//! Progression domain: tests for kill counting, best-score resolution, and the save file.

use bevy::ecs::message::Messages;
use bevy::prelude::*;

use super::systems::{start_level_progress, track_deaths};
use super::{
    JsonFileProgressStore, KillOutcome, LevelEndReason, LevelExit, LevelFinalizedEvent,
    LevelPhase, LevelProgress, LevelStartedEvent, LevelSummary, MemoryProgressStore,
    ProgressBackend, ProgressStore, ProgressTextEvent, Session, fetch_previous_best,
    level_unlocked, progress_text, resolve_best, run_percent,
};
use crate::combat::{CombatTuning, DeathEvent, Enemy};
use crate::player::Player;

fn entities(count: usize) -> Vec<Entity> {
    let mut world = World::new();
    (0..count).map(|_| world.spawn_empty().id()).collect()
}

// -----------------------------------------------------------------------------
// Aggregator
// -----------------------------------------------------------------------------

#[test]
fn test_killing_every_enemy_finalizes_at_full_percent() {
    let mut progress = LevelProgress::new(1, 5);
    let enemies = entities(5);

    for &enemy in &enemies[..4] {
        assert_eq!(progress.register_kill(enemy), KillOutcome::Counted);
    }
    let KillOutcome::Finalized(run) = progress.register_kill(enemies[4]) else {
        panic!("last kill should finalize the level");
    };

    assert_eq!(run.kills, 5);
    assert_eq!(run.run_percent, 100.0);
    assert_eq!(progress.phase(), LevelPhase::Complete);
}

#[test]
fn test_player_death_finalizes_partial_run() {
    let mut progress = LevelProgress::new(2, 4);
    let enemies = entities(2);
    progress.register_kill(enemies[0]);
    progress.register_kill(enemies[1]);

    let run = progress.on_level_end().unwrap();
    assert_eq!(run.level, 2);
    assert_eq!(run.kills, 2);
    assert_eq!(run.run_percent, 50.0);

    assert!(progress.on_level_end().is_none());
}

#[test]
fn test_kills_after_completion_and_repeats_are_ignored() {
    let mut progress = LevelProgress::new(1, 2);
    let enemies = entities(3);

    assert_eq!(progress.register_kill(enemies[0]), KillOutcome::Counted);
    assert_eq!(progress.register_kill(enemies[0]), KillOutcome::Ignored);
    assert_eq!(progress.kills(), 1);

    assert!(matches!(
        progress.register_kill(enemies[1]),
        KillOutcome::Finalized(_)
    ));
    assert_eq!(progress.register_kill(enemies[2]), KillOutcome::Ignored);
    assert_eq!(progress.kills(), 2);
}

#[test]
fn test_run_percent_bounds() {
    assert_eq!(run_percent(0, 0), 100.0);
    assert_eq!(run_percent(0, 3), 0.0);
    assert_eq!(run_percent(7, 3), 100.0);
    assert!((run_percent(1, 3) - 33.333_332).abs() < 1e-4);
}

#[test]
fn test_empty_level_reaches_full_percent_on_end() {
    let mut progress = LevelProgress::new(3, 0);
    assert_eq!(progress.phase(), LevelPhase::Active);

    let run = progress.on_level_end().unwrap();
    assert_eq!(run.run_percent, 100.0);
}

#[test]
fn test_progress_text_format() {
    assert_eq!(progress_text(1, 3), "Progress: 33.3% (1/3)");
    assert_eq!(progress_text(0, 0), "Progress: 100.0% (0/0)");
}

#[test]
fn test_level_unlock_rule() {
    assert!(level_unlocked(1, None));
    assert!(!level_unlocked(2, None));
    assert!(!level_unlocked(2, Some(99.9)));
    assert!(level_unlocked(2, Some(100.0)));
}

// -----------------------------------------------------------------------------
// Best resolution
// -----------------------------------------------------------------------------

#[test]
fn test_offline_best_is_session_local_max() {
    let mut store = MemoryProgressStore::default();
    let mut session = Session::new(None);

    assert_eq!(resolve_best(&mut store, &mut session, 1, 40.0, 60.0), 60.0);
    assert_eq!(session.local_best(1), Some(60.0));
    assert_eq!(fetch_previous_best(&store, &session, 1), 60.0);

    // store is never touched offline
    assert_eq!(store.get_progress(0, 1).unwrap(), 0.0);
}

#[test]
fn test_online_best_never_decreases() {
    let mut store = MemoryProgressStore::default();
    let mut session = Session::new(Some(7));

    assert_eq!(resolve_best(&mut store, &mut session, 1, 50.0, 0.0), 50.0);
    assert_eq!(resolve_best(&mut store, &mut session, 1, 25.0, 50.0), 50.0);
    assert_eq!(resolve_best(&mut store, &mut session, 1, 75.0, 50.0), 75.0);
    assert_eq!(fetch_previous_best(&store, &session, 1), 75.0);
}

#[test]
fn test_store_failure_shows_run_as_best() {
    let mut store = MemoryProgressStore::default();
    let mut session = Session::new(Some(7));
    resolve_best(&mut store, &mut session, 1, 80.0, 0.0);

    store.set_offline(true);
    assert_eq!(resolve_best(&mut store, &mut session, 1, 30.0, 80.0), 30.0);
    assert_eq!(fetch_previous_best(&store, &session, 1), 0.0);
}

#[test]
fn test_json_store_keeps_max_across_instances() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("progress.json");

    let mut store = JsonFileProgressStore::new(&path);
    assert_eq!(store.get_progress(1, 1).unwrap(), 0.0);
    assert_eq!(store.update_progress(1, 1, 60.0).unwrap(), 60.0);
    assert_eq!(store.update_progress(1, 1, 20.0).unwrap(), 60.0);
    store.update_progress(2, 1, 10.0).unwrap();

    let reopened = JsonFileProgressStore::new(&path);
    assert_eq!(reopened.get_progress(1, 1).unwrap(), 60.0);
    assert_eq!(reopened.get_progress(2, 1).unwrap(), 10.0);
    assert_eq!(reopened.get_progress(1, 2).unwrap(), 0.0);
}

#[test]
fn test_json_store_reports_malformed_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("progress.json");
    std::fs::write(&path, "not json").unwrap();

    let store = JsonFileProgressStore::new(&path);
    assert!(store.get_progress(1, 1).is_err());
}

// -----------------------------------------------------------------------------
// Level flow
// -----------------------------------------------------------------------------

fn progression_app(user_id: Option<u32>) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .init_resource::<CombatTuning>()
        .insert_resource(ProgressBackend::new(MemoryProgressStore::default()))
        .insert_resource(Session::new(user_id))
        .add_message::<DeathEvent>()
        .add_message::<LevelStartedEvent>()
        .add_message::<LevelFinalizedEvent>()
        .add_message::<ProgressTextEvent>()
        .add_systems(Update, (start_level_progress, track_deaths).chain());
    app
}

fn finalized(app: &App) -> Vec<LevelFinalizedEvent> {
    let messages = app.world().resource::<Messages<LevelFinalizedEvent>>();
    messages.get_cursor().read(messages).copied().collect()
}

#[test]
fn test_clearing_the_level_records_a_full_run() {
    let mut app = progression_app(Some(3));
    let first = app.world_mut().spawn(Enemy).id();
    let second = app.world_mut().spawn(Enemy).id();

    app.world_mut().write_message(LevelStartedEvent {
        level: 1,
        total_enemies: 2,
    });
    app.update();
    assert_eq!(app.world().resource::<LevelProgress>().kills(), 0);

    app.world_mut().write_message(DeathEvent { entity: first });
    app.world_mut().write_message(DeathEvent { entity: first });
    app.update();
    assert_eq!(app.world().resource::<LevelProgress>().kills(), 1);
    assert!(finalized(&app).is_empty());

    app.world_mut().write_message(DeathEvent { entity: second });
    app.update();

    let events = finalized(&app);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].reason, LevelEndReason::AllEnemiesKilled);

    let summary = *app.world().resource::<LevelSummary>();
    assert_eq!(summary.run_percent, 100.0);
    assert_eq!(summary.best_percent, 100.0);
    assert!(app.world().contains_resource::<LevelExit>());
}

#[test]
fn test_player_death_ends_attempt_once() {
    let mut app = progression_app(None);
    let enemy = app.world_mut().spawn(Enemy).id();
    app.world_mut().spawn(Enemy);
    let player = app.world_mut().spawn(Player).id();

    app.world_mut().write_message(LevelStartedEvent {
        level: 1,
        total_enemies: 2,
    });
    app.update();

    app.world_mut().write_message(DeathEvent { entity: enemy });
    app.world_mut().write_message(DeathEvent { entity: player });
    app.world_mut().write_message(DeathEvent { entity: player });
    app.update();

    let events = finalized(&app);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].reason, LevelEndReason::PlayerDied);
    assert_eq!(events[0].summary.run_percent, 50.0);
    assert_eq!(app.world().resource::<Session>().local_best(1), Some(50.0));
}

#[test]
fn test_enemies_dying_together_are_each_counted() {
    let mut app = progression_app(Some(3));
    let enemies: Vec<Entity> = (0..4).map(|_| app.world_mut().spawn(Enemy).id()).collect();

    app.world_mut().write_message(LevelStartedEvent {
        level: 2,
        total_enemies: 4,
    });
    app.update();

    for &enemy in &enemies {
        app.world_mut().write_message(DeathEvent { entity: enemy });
    }
    app.update();

    assert_eq!(app.world().resource::<LevelProgress>().kills(), 4);
    let events = finalized(&app);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].reason, LevelEndReason::AllEnemiesKilled);
    assert_eq!(events[0].summary.run_percent, 100.0);
}

#[test]
fn test_unreachable_store_still_completes_the_level() {
    let mut app = progression_app(Some(3));
    let mut store = MemoryProgressStore::default();
    store.update_progress(3, 1, 90.0).unwrap();
    store.set_offline(true);
    app.insert_resource(ProgressBackend::new(store));

    let enemy = app.world_mut().spawn(Enemy).id();
    app.world_mut().spawn(Enemy);
    let player = app.world_mut().spawn(Player).id();

    app.world_mut().write_message(LevelStartedEvent {
        level: 1,
        total_enemies: 2,
    });
    app.update();

    app.world_mut().write_message(DeathEvent { entity: enemy });
    app.update();
    app.world_mut().write_message(DeathEvent { entity: player });
    app.update();

    let summary = *app.world().resource::<LevelSummary>();
    assert_eq!(summary.run_percent, 50.0);
    assert_eq!(summary.best_percent, summary.run_percent);
    assert_eq!(finalized(&app).len(), 1);
    assert!(app.world().contains_resource::<LevelExit>());
}
