use std::sync::Arc;

use kana_core::romaji::MappingTable;
use kana_core::settings::{self, Settings};
use tracing::debug;

use super::engine::TransliterationEngine;
use super::types::ConversionResult;

/// Reported to the caller when the manager installs a new table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManagerEvent {
    TableReplaced {
        table: Arc<MappingTable>,
        /// Input that was still buffered in the replaced engine. It is dropped,
        /// not emitted.
        discarded: Option<String>,
    },
}

/// Owns the active table and the engine built from it.
#[derive(Debug, Clone)]
pub struct EngineManager {
    table: Arc<MappingTable>,
    engine: TransliterationEngine,
}

impl EngineManager {
    pub fn new(table: MappingTable) -> Self {
        let table = Arc::new(table);
        Self {
            engine: TransliterationEngine::new(Arc::clone(&table)),
            table,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.initial_table())
    }

    /// Build from the process-wide settings (see `kana_core::settings::init_custom`).
    pub fn from_global() -> Self {
        Self::from_settings(settings::settings())
    }

    pub fn table(&self) -> &Arc<MappingTable> {
        &self.table
    }

    /// Replace the table. The old engine and its buffer are discarded and a
    /// fresh engine is built; the returned event describes the swap.
    pub fn update_custom_table(&mut self, table: MappingTable) -> ManagerEvent {
        let table = Arc::new(table);
        let old = std::mem::replace(
            &mut self.engine,
            TransliterationEngine::new(Arc::clone(&table)),
        );
        self.table = Arc::clone(&table);
        let discarded = (!old.is_empty()).then(|| old.current_buffer().to_string());
        debug!(
            mappings = table.mapping_count(),
            enabled = table.is_enabled(),
            ?discarded,
            "table replaced"
        );
        ManagerEvent::TableReplaced { table, discarded }
    }

    pub fn process_input(&mut self, grapheme: &str) -> ConversionResult {
        self.engine.input(grapheme)
    }

    pub fn process_string(&mut self, input: &str) -> String {
        self.engine.process_string(input)
    }

    pub fn flush(&mut self) -> Option<String> {
        self.engine.flush()
    }

    pub fn clear_buffer(&mut self) {
        self.engine.clear_buffer();
    }

    pub fn delete_last_character(&mut self) -> Option<String> {
        self.engine.delete_last_character()
    }

    pub fn current_buffer(&self) -> &str {
        self.engine.current_buffer()
    }

    pub fn is_empty(&self) -> bool {
        self.engine.is_empty()
    }

    pub fn is_custom_table_enabled(&self) -> bool {
        self.table.is_enabled()
    }
}
