//! Progression domain: level start, kill tracking, finalization, and the exit delay.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::{CombatTuning, DeathEvent, Enemy};
use crate::content::GameplayDefaults;
use crate::core::{Continuation, GameState, Suspend};
use crate::player::Player;
use crate::progression::aggregator::{KillOutcome, LevelProgress, RunResult};
use crate::progression::events::{
    LevelEndReason, LevelFinalizedEvent, LevelStartedEvent, ProgressTextEvent,
};
use crate::progression::session::{LevelSummary, Session, fetch_previous_best, resolve_best};
use crate::progression::store::{JsonFileProgressStore, ProgressBackend};

/// Pause between the end of an attempt and the level-complete screen.
#[derive(Resource, Debug)]
pub struct LevelExit(Continuation<()>);

impl LevelExit {
    pub fn after(delay: f32) -> Self {
        let mut cont = Continuation::default();
        cont.suspend((), Suspend::Seconds(delay.max(0.0)));
        Self(cont)
    }
}

pub(crate) fn setup_progress_store(mut commands: Commands, defaults: Res<GameplayDefaults>) {
    let store = JsonFileProgressStore::new(&defaults.progress.store_path);
    match defaults.progress.user_id {
        Some(user_id) => info!(
            "Signed in as user {}, progress saved to {}",
            user_id,
            store.path().display()
        ),
        None => info!("Playing offline; bests are kept for this session only"),
    }
    commands.insert_resource(Session::new(defaults.progress.user_id));
    commands.insert_resource(ProgressBackend::new(store));
}

pub(crate) fn start_level_progress(
    mut commands: Commands,
    mut started_events: MessageReader<LevelStartedEvent>,
    backend: Res<ProgressBackend>,
    session: Res<Session>,
    mut text_events: MessageWriter<ProgressTextEvent>,
) {
    for event in started_events.read() {
        let mut progress = LevelProgress::new(event.level, event.total_enemies);
        progress.best_at_start = fetch_previous_best(backend.0.as_ref(), &session, event.level);

        info!(
            "Level {} started: {} enemies, previous best {:.1}%",
            event.level, event.total_enemies, progress.best_at_start
        );
        text_events.write(ProgressTextEvent {
            text: progress.text(),
        });

        commands.insert_resource(progress);
        commands.remove_resource::<LevelExit>();
    }
}

/// Enemy deaths count as kills; the player's death ends the attempt.
pub(crate) fn track_deaths(
    mut commands: Commands,
    mut death_events: MessageReader<DeathEvent>,
    enemies: Query<(), With<Enemy>>,
    players: Query<(), With<Player>>,
    progress: Option<ResMut<LevelProgress>>,
    mut backend: ResMut<ProgressBackend>,
    mut session: ResMut<Session>,
    tuning: Res<CombatTuning>,
    mut text_events: MessageWriter<ProgressTextEvent>,
    mut finalized_events: MessageWriter<LevelFinalizedEvent>,
) {
    let Some(mut progress) = progress else {
        death_events.clear();
        return;
    };

    for event in death_events.read() {
        let ended = if enemies.contains(event.entity) {
            match progress.register_kill(event.entity) {
                KillOutcome::Counted => {
                    info!(
                        "Killed {}/{}",
                        progress.kills(),
                        progress.total_enemies()
                    );
                    text_events.write(ProgressTextEvent {
                        text: progress.text(),
                    });
                    None
                }
                KillOutcome::Finalized(run) => {
                    info!("All enemies down, ending level {}", run.level);
                    text_events.write(ProgressTextEvent {
                        text: progress.text(),
                    });
                    Some((run, LevelEndReason::AllEnemiesKilled))
                }
                KillOutcome::Ignored => None,
            }
        } else if players.contains(event.entity) {
            progress
                .on_level_end()
                .map(|run| (run, LevelEndReason::PlayerDied))
        } else {
            None
        };

        let Some((run, reason)) = ended else {
            continue;
        };

        let summary = finalize_run(
            &mut backend,
            &mut session,
            run,
            progress.best_at_start,
        );
        finalized_events.write(LevelFinalizedEvent { summary, reason });
        commands.insert_resource(summary);
        commands.insert_resource(LevelExit::after(tuning.death_delay));
    }
}

fn finalize_run(
    backend: &mut ProgressBackend,
    session: &mut Session,
    run: RunResult,
    best_at_start: f32,
) -> LevelSummary {
    let best_percent = resolve_best(
        backend.0.as_mut(),
        session,
        run.level,
        run.run_percent,
        best_at_start,
    );

    info!(
        "Level {} finished: {}/{} killed, run {:.1}%, best {:.1}%",
        run.level, run.kills, run.total_enemies, run.run_percent, best_percent
    );

    LevelSummary {
        level: run.level,
        run_percent: run.run_percent,
        best_percent,
    }
}

pub(crate) fn tick_level_exit(
    mut commands: Commands,
    time: Res<Time>,
    exit: Option<ResMut<LevelExit>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let Some(mut exit) = exit else {
        return;
    };

    if exit.0.tick(time.delta_secs()).is_some() {
        commands.remove_resource::<LevelExit>();
        next_state.set(GameState::LevelComplete);
    }
}
