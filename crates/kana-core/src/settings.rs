//! Process-wide settings loaded from TOML.
//!
//! - `init_custom(toml_content)` installs custom settings; it fails once the
//!   settings are in place, whether installed or lazily defaulted
//! - `settings()` returns `&'static Settings`, falling back to the embedded
//!   `default_settings.toml`

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::direct_kana;
use crate::romaji::{MappingTable, Preset};

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static INSTANCE: OnceLock<Settings> = OnceLock::new();

/// Install custom settings. Must run before the first `settings()` call.
pub fn init_custom(toml_content: &str) -> Result<(), SettingsError> {
    let parsed = parse_settings_toml(toml_content)?;
    INSTANCE
        .set(parsed)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Installed settings, or the embedded defaults if none were installed.
pub fn settings() -> &'static Settings {
    INSTANCE.get_or_init(|| {
        parse_settings_toml(DEFAULT_SETTINGS_TOML).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub table: TableSettings,
    #[serde(default)]
    keymap: HashMap<String, Vec<String>>,
    /// Parsed keymap: key label → (normal, shifted).
    #[serde(skip)]
    keymap_parsed: Vec<(char, char, char)>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TableSettings {
    pub enabled: bool,
    #[serde(default)]
    pub preset: Preset,
}

impl Settings {
    /// The table the engine should start with.
    pub fn initial_table(&self) -> MappingTable {
        let mut table = MappingTable::preset(self.table.preset);
        table.set_enabled(self.table.enabled);
        table
    }

    /// Direct kana for a key label, preferring keymap overrides over the
    /// built-in layout.
    pub fn direct_kana(&self, key: char, has_shift: bool) -> Option<char> {
        let lower = key.to_lowercase().next()?;
        self.keymap_parsed
            .iter()
            .find_map(|&(label, normal, shifted)| {
                (label == lower).then_some(if has_shift { shifted } else { normal })
            })
            .or_else(|| direct_kana::to_kana(key, has_shift))
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let mut s: Settings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    s.keymap_parsed = parse_keymap(&s.keymap)?;
    Ok(s)
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    let c = chars.next()?;
    chars.next().is_none().then_some(c)
}

fn parse_keymap(
    raw: &HashMap<String, Vec<String>>,
) -> Result<Vec<(char, char, char)>, SettingsError> {
    let mut result = Vec::new();
    for (key_str, values) in raw {
        let invalid = |reason: &str| SettingsError::InvalidValue {
            field: format!("keymap.{}", key_str),
            reason: reason.to_string(),
        };
        let label = single_char(key_str)
            .ok_or_else(|| invalid("key label must be a single character"))?;
        let [normal, shifted] = values.as_slice() else {
            return Err(invalid("value must be [\"normal\", \"shifted\"]"));
        };
        let (Some(normal), Some(shifted)) = (single_char(normal), single_char(shifted)) else {
            return Err(invalid("each output must be a single character"));
        };
        let label = label.to_lowercase().next().unwrap_or(label);
        if result.iter().any(|&(seen, _, _)| seen == label) {
            return Err(SettingsError::InvalidValue {
                field: format!("keymap.{label}"),
                reason: "label is defined more than once (labels are case-insensitive)"
                    .to_string(),
            });
        }
        result.push((label, normal, shifted));
    }
    Ok(result)
}
