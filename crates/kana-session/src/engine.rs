use std::sync::Arc;

use kana_core::romaji::MappingTable;
use tracing::{debug, debug_span};
use unicode_segmentation::UnicodeSegmentation;

use super::types::ConversionResult;

/// Keystroke buffer driven against a [`MappingTable`].
///
/// The buffer holds grapheme clusters that have not been emitted yet. Calls
/// are expected one keystroke at a time from a single owner.
#[derive(Debug, Clone)]
pub struct TransliterationEngine {
    table: Arc<MappingTable>,
    pending: String,
}

impl TransliterationEngine {
    pub fn new(table: impl Into<Arc<MappingTable>>) -> Self {
        Self {
            table: table.into(),
            pending: String::new(),
        }
    }

    pub fn table(&self) -> &Arc<MappingTable> {
        &self.table
    }

    pub fn is_table_enabled(&self) -> bool {
        self.table.is_enabled()
    }

    pub fn current_buffer(&self) -> &str {
        &self.pending
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Feed one grapheme cluster.
    ///
    /// Resolution order: a disabled table passes the buffer straight through;
    /// an exact key match emits its value; a viable key prefix keeps
    /// buffering; otherwise a lone grapheme is emitted verbatim, or the first
    /// grapheme is split off and the rest returned for replay. Every outcome
    /// except `Buffering` leaves the buffer empty.
    ///
    /// An empty `grapheme` changes nothing and reports `Buffering`.
    pub fn input(&mut self, grapheme: &str) -> ConversionResult {
        let _span = debug_span!("input", grapheme, pending = %self.pending).entered();

        if grapheme.is_empty() {
            return ConversionResult::Buffering;
        }
        self.pending.push_str(grapheme);

        if !self.table.is_enabled() {
            return ConversionResult::Converted(std::mem::take(&mut self.pending));
        }

        if let Some(value) = self.table.convert(&self.pending) {
            let value = value.to_string();
            self.pending.clear();
            return ConversionResult::Converted(value);
        }

        if self.table.has_prefix(&self.pending) {
            return ConversionResult::Buffering;
        }

        let first_len = self
            .pending
            .graphemes(true)
            .next()
            .map_or(self.pending.len(), str::len);
        if first_len == self.pending.len() {
            return ConversionResult::Converted(std::mem::take(&mut self.pending));
        }

        let remaining = self.pending.split_off(first_len);
        let emitted = std::mem::take(&mut self.pending);
        debug!(%emitted, %remaining, "split");
        ConversionResult::PartialConversion { emitted, remaining }
    }

    /// Emit whatever is buffered. `None` if the buffer is already empty.
    pub fn flush(&mut self) -> Option<String> {
        if self.pending.is_empty() {
            return None;
        }
        debug!(pending = %self.pending, "flush");
        Some(std::mem::take(&mut self.pending))
    }

    /// Backspace: pop the last buffered grapheme.
    pub fn delete_last_character(&mut self) -> Option<String> {
        let (idx, last) = self.pending.grapheme_indices(true).next_back()?;
        let last = last.to_string();
        self.pending.truncate(idx);
        Some(last)
    }

    /// Drop buffered input without emitting it.
    pub fn clear_buffer(&mut self) {
        self.pending.clear();
    }
}
