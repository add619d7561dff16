//! Customizable romaji-to-kana lookup table.
//!
//! A `MappingTable` answers exact and prefix queries over a set of
//! key → kana mappings. Tables come from a built-in preset or from a TOML
//! document, and can be edited freely; `validate()` is the only place the
//! key/value character rules are enforced.

mod config;
mod preset;
mod table;

pub use config::{parse_table_toml, TableConfigError};
pub use preset::{default_toml, Preset};
pub use table::{MappingTable, TableValidationError};
