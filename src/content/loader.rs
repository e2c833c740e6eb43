//! Loader for RON content files at startup.

use ron::Options;
use std::fs;
use std::path::Path;
use thiserror::Error;

use super::data::{DataFile, GameplayDefaults, LevelDef};

pub const GAMEPLAY_FILE: &str = "gameplay.ron";
pub const LEVELS_FILE: &str = "levels.ron";

/// Errors that can occur when loading content files.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error in '{path}': {details}")]
    Parse { path: String, details: String },
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

fn read(path: &Path) -> Result<String, ContentError> {
    fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Parse a single RON struct (not wrapped in DataFile).
pub fn parse_single<T>(path: &Path, contents: &str) -> Result<T, ContentError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentError::Parse {
            path: path.display().to_string(),
            details: e.to_string(),
        })
}

/// Parse a RON file containing a DataFile<T> wrapper.
pub fn parse_data_file<T>(path: &Path, contents: &str) -> Result<Vec<T>, ContentError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let data: DataFile<T> = parse_single(path, contents)?;
    Ok(data.items)
}

/// Everything read from the content directory, plus whatever went wrong.
/// Files that fail to load are replaced by built-in defaults.
#[derive(Debug, Default)]
pub struct LoadedContent {
    pub defaults: GameplayDefaults,
    pub levels: Vec<LevelDef>,
    pub errors: Vec<ContentError>,
}

/// Load gameplay.ron and levels.ron from `base_path`.
pub fn load_all_content(base_path: &Path) -> LoadedContent {
    let mut loaded = LoadedContent::default();

    let gameplay_path = base_path.join(GAMEPLAY_FILE);
    match read(&gameplay_path).and_then(|c| parse_single(&gameplay_path, &c)) {
        Ok(defaults) => loaded.defaults = defaults,
        Err(e) => loaded.errors.push(e),
    }

    let levels_path = base_path.join(LEVELS_FILE);
    match read(&levels_path).and_then(|c| parse_data_file(&levels_path, &c)) {
        Ok(levels) => loaded.levels = levels,
        Err(e) => loaded.errors.push(e),
    }

    if loaded.levels.is_empty() {
        loaded.levels.push(LevelDef::default());
    }

    loaded
}
