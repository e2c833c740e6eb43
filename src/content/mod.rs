//! Content domain: RON-driven gameplay tuning and level layouts.

mod data;
mod loader;
mod registry;
mod validation;


pub use data::{
    CameraDef, DataFile, EnemySpawnDef, GameplayDefaults, LevelDef, PlatformDef, PlayerAttackDef,
    PlayerDef, ProgressDef,
};
pub use loader::{ContentError, LoadedContent, load_all_content};
pub use registry::LevelRegistry;
pub use validation::{ValidationError, sanitize_levels, validate_levels};

use bevy::prelude::*;
use std::path::PathBuf;

/// Directory the content files are read from.
#[derive(Resource, Debug, Clone)]
pub struct ContentPath(pub PathBuf);

impl Default for ContentPath {
    fn default() -> Self {
        Self(PathBuf::from("assets/data"))
    }
}

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ContentPath>()
            .init_resource::<GameplayDefaults>()
            .init_resource::<LevelRegistry>()
            .add_systems(PreStartup, load_content);
    }
}

/// Load content files into resources. Broken files are reported and replaced by defaults.
fn load_content(mut commands: Commands, path: Res<ContentPath>) {
    let LoadedContent {
        defaults,
        mut levels,
        errors,
    } = load_all_content(&path.0);

    for error in &errors {
        warn!("{}; using built-in defaults", error);
    }

    for problem in validate_levels(&levels) {
        warn!("Content validation: {}", problem);
    }
    sanitize_levels(&mut levels);

    let registry = LevelRegistry::from_levels(levels);
    info!("{}", registry.summary());

    commands.insert_resource(defaults);
    commands.insert_resource(registry);
}
