pub mod convert_ops;
pub mod settings_ops;
pub mod table_ops;

use std::fs;
use std::path::Path;

use kana_core::romaji::{parse_table_toml, MappingTable, Preset, TableConfigError};
use kana_core::settings::SettingsError;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("Error reading {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("{path}: {source}")]
    Table {
        path: String,
        source: TableConfigError,
    },
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub(crate) fn read_file(path: &Path) -> Result<String, CommandError> {
    fs::read_to_string(path).map_err(|source| CommandError::Read {
        path: path.display().to_string(),
        source,
    })
}

/// Load a table file, or the standard preset when no file is given.
pub fn load_table(path: Option<&Path>) -> Result<MappingTable, CommandError> {
    let Some(path) = path else {
        return Ok(MappingTable::preset(Preset::Standard));
    };
    let content = read_file(path)?;
    parse_table_toml(&content).map_err(|source| CommandError::Table {
        path: path.display().to_string(),
        source,
    })
}
