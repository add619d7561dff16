//! Keystroke-to-kana transliteration for a Japanese input method.
//!
//! Re-exports the table, composer and layout primitives from `kana_core` and
//! the stateful engine from `kana_session`.

mod trace_init;

pub use kana_core::diacritic::{self, attach, is_dead_key, DeadKeyMark, DEAD_KEY_MARKS};
pub use kana_core::direct_kana::{self, convert_to_kana, to_kana};
pub use kana_core::romaji::{
    parse_table_toml, MappingTable, Preset, TableConfigError, TableValidationError,
};
pub use kana_core::settings;
pub use kana_session::{ConversionResult, EngineManager, ManagerEvent, TransliterationEngine};
pub use trace_init::init_tracing;
