//! Incremental romaji-to-kana transliteration.
//!
//! `TransliterationEngine` buffers keystrokes against a `MappingTable` and
//! decides per keystroke whether to emit, wait, or split the buffer and hand
//! the tail back for replay. `EngineManager` owns one engine and swaps it out
//! whenever the table changes.

mod engine;
mod manager;
mod replay;
mod types;

#[cfg(test)]
mod tests;

pub use engine::TransliterationEngine;
pub use manager::{EngineManager, ManagerEvent};
pub use types::ConversionResult;
