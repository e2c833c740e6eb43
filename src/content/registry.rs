//! LevelRegistry resource providing lookup of level layouts by number.

use bevy::prelude::*;
use std::collections::BTreeMap;

use super::data::LevelDef;

/// All known level layouts, ordered by level number.
#[derive(Resource, Debug, Default)]
pub struct LevelRegistry {
    levels: BTreeMap<u32, LevelDef>,
}

impl LevelRegistry {
    /// Build the registry. When a level number repeats, the first definition wins.
    pub fn from_levels(levels: impl IntoIterator<Item = LevelDef>) -> Self {
        let mut map = BTreeMap::new();
        for level in levels {
            map.entry(level.level).or_insert(level);
        }
        Self { levels: map }
    }

    pub fn get(&self, level: u32) -> Option<&LevelDef> {
        self.levels.get(&level)
    }

    pub fn first_level(&self) -> Option<u32> {
        self.levels.keys().next().copied()
    }

    /// The level that follows `level` in number order.
    pub fn next_after(&self, level: u32) -> Option<u32> {
        self.levels
            .range(level.saturating_add(1)..)
            .next()
            .map(|(number, _)| *number)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Returns a summary of loaded levels for logging.
    pub fn summary(&self) -> String {
        let enemies: usize = self.levels.values().map(|l| l.enemies.len()).sum();
        format!(
            "LevelRegistry loaded: {} levels, {} enemy spawns",
            self.levels.len(),
            enemies
        )
    }
}
