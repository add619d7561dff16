
use kana_core::romaji::MappingTable;

use super::ConversionResult;

pub(super) fn make_table(pairs: &[(&str, &str)]) -> MappingTable {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub(super) fn converted(text: &str) -> ConversionResult {
    ConversionResult::Converted(text.to_string())
}

pub(super) fn partial(emitted: &str, remaining: &str) -> ConversionResult {
    ConversionResult::PartialConversion {
        emitted: emitted.to_string(),
        remaining: remaining.to_string(),
    }
}
