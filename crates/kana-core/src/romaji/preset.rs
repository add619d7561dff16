use std::sync::OnceLock;

use serde::Deserialize;
use tracing::debug;

use super::config::parse_table_toml;
use super::table::MappingTable;

pub(crate) const DEFAULT_TOML: &str = include_str!("default_romaji.toml");

/// Built-in starting points for a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// No mappings; every keystroke passes through unchanged.
    Empty,
    /// Hepburn/Kunrei romaji to hiragana.
    #[default]
    Standard,
}

/// Returns the embedded standard table TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}

fn standard() -> &'static MappingTable {
    static INSTANCE: OnceLock<MappingTable> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let table = parse_table_toml(DEFAULT_TOML).expect("romaji TOML must be valid");
        debug!(mappings = table.mapping_count(), "standard table loaded");
        table
    })
}

impl MappingTable {
    pub fn preset(preset: Preset) -> Self {
        match preset {
            Preset::Empty => MappingTable::new(),
            Preset::Standard => standard().clone(),
        }
    }
}
