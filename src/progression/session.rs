//! Progression domain: the signed-in user and the values carried between levels.

use std::collections::BTreeMap;

use bevy::prelude::*;

use crate::progression::store::ProgressStore;

/// Signed-in user. `None` plays offline and keeps bests for this session only.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub user_id: Option<u32>,
    local_bests: BTreeMap<u32, f32>,
}

impl Session {
    pub fn new(user_id: Option<u32>) -> Self {
        Self {
            user_id,
            local_bests: BTreeMap::new(),
        }
    }

    pub fn local_best(&self, level: u32) -> Option<f32> {
        self.local_bests.get(&level).copied()
    }
}

/// Outcome of the last finished level, read by the level-complete screen.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub struct LevelSummary {
    pub level: u32,
    pub run_percent: f32,
    pub best_percent: f32,
}

/// Report a run and work out the best percentage to show.
///
/// Offline, the best is the larger of this run and the best known when the
/// level started. A failing store never blocks the level: the run itself is
/// taken as the best.
pub fn resolve_best(
    store: &mut dyn ProgressStore,
    session: &mut Session,
    level: u32,
    run_percent: f32,
    best_at_start: f32,
) -> f32 {
    let Some(user_id) = session.user_id else {
        let best = run_percent.max(best_at_start);
        session.local_bests.insert(level, best);
        return best;
    };

    match store.update_progress(user_id, level, run_percent) {
        Ok(best) => best,
        Err(err) => {
            warn!("{}; showing this run as the best", err);
            run_percent
        }
    }
}

/// Best recorded for `level` when an attempt starts; failures count as no record.
pub fn fetch_previous_best(store: &dyn ProgressStore, session: &Session, level: u32) -> f32 {
    let Some(user_id) = session.user_id else {
        return session.local_best(level).unwrap_or(0.0);
    };

    store.get_progress(user_id, level).unwrap_or_else(|err| {
        warn!("{}; assuming no previous best", err);
        0.0
    })
}
