//! Progression domain: best-score persistence behind a swappable store.
//!
//! The store plays the part of the progress server: it keeps the maximum
//! percentage reported per user and level.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to access progress file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed progress file {path}: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Progress store unavailable: {0}")]
    Unavailable(String),
}

pub trait ProgressStore: Send + Sync {
    /// Record a run and return the best percentage now stored.
    fn update_progress(&mut self, user_id: u32, level: u32, run_percent: f32)
    -> Result<f32, StoreError>;

    /// Best percentage stored for a level; 0 when nothing was recorded yet.
    fn get_progress(&self, user_id: u32, level: u32) -> Result<f32, StoreError>;
}

/// The store the game reports to.
#[derive(Resource)]
pub struct ProgressBackend(pub Box<dyn ProgressStore>);

impl ProgressBackend {
    pub fn new(store: impl ProgressStore + 'static) -> Self {
        Self(Box::new(store))
    }
}

/// In-memory store, used offline and in tests.
#[derive(Debug, Default)]
pub struct MemoryProgressStore {
    bests: HashMap<(u32, u32), f32>,
    offline: bool,
}

impl MemoryProgressStore {
    /// Make every call fail, like an unreachable server.
    pub fn set_offline(&mut self, offline: bool) {
        self.offline = offline;
    }

    fn check_online(&self) -> Result<(), StoreError> {
        if self.offline {
            Err(StoreError::Unavailable("store is offline".to_string()))
        } else {
            Ok(())
        }
    }
}

impl ProgressStore for MemoryProgressStore {
    fn update_progress(
        &mut self,
        user_id: u32,
        level: u32,
        run_percent: f32,
    ) -> Result<f32, StoreError> {
        self.check_online()?;
        let best = self.bests.entry((user_id, level)).or_insert(0.0);
        *best = best.max(run_percent);
        Ok(*best)
    }

    fn get_progress(&self, user_id: u32, level: u32) -> Result<f32, StoreError> {
        self.check_online()?;
        Ok(self.bests.get(&(user_id, level)).copied().unwrap_or(0.0))
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct SaveFile {
    /// user id -> level -> best percent
    users: BTreeMap<u32, BTreeMap<u32, f32>>,
}

/// JSON save file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileProgressStore {
    path: PathBuf,
}

impl JsonFileProgressStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<SaveFile, StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(SaveFile::default());
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        serde_json::from_str(&contents).map_err(|source| StoreError::Format {
            path: self.path.clone(),
            source,
        })
    }

    fn write(&self, save: &SaveFile) -> Result<(), StoreError> {
        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let json = serde_json::to_string_pretty(save).map_err(|source| StoreError::Format {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, json).map_err(io_err)
    }
}

impl ProgressStore for JsonFileProgressStore {
    fn update_progress(
        &mut self,
        user_id: u32,
        level: u32,
        run_percent: f32,
    ) -> Result<f32, StoreError> {
        let mut save = self.read()?;
        let best = save
            .users
            .entry(user_id)
            .or_default()
            .entry(level)
            .or_insert(0.0);
        *best = best.max(run_percent);
        let best = *best;

        self.write(&save)?;
        Ok(best)
    }

    fn get_progress(&self, user_id: u32, level: u32) -> Result<f32, StoreError> {
        let save = self.read()?;
        Ok(save
            .users
            .get(&user_id)
            .and_then(|levels| levels.get(&level))
            .copied()
            .unwrap_or(0.0))
    }
}
