use std::collections::BTreeMap;
use std::ops::Bound;

use crate::unicode::{is_hiragana_text, is_table_key_char};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableValidationError {
    #[error("empty key")]
    EmptyKey,
    #[error("empty value for key: {0}")]
    EmptyValue(String),
    #[error("key may only contain ASCII letters, digits, ';' and '-': {0}")]
    InvalidKeyCharacters(String),
    #[error("value for key {key} must be hiragana: {value}")]
    InvalidValueCharacters { key: String, value: String },
}

/// Romaji → kana mappings plus an enabled flag.
///
/// Keys are kept sorted so prefix queries are a single range probe. Lookups
/// compare strings verbatim; case normalization is the table author's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingTable {
    enabled: bool,
    mappings: BTreeMap<String, String>,
}

impl MappingTable {
    /// An enabled table with no mappings.
    pub fn new() -> Self {
        Self::with_mappings(true, BTreeMap::new())
    }

    pub fn with_mappings(enabled: bool, mappings: BTreeMap<String, String>) -> Self {
        Self { enabled, mappings }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Exact-match lookup. Always `None` while the table is disabled.
    pub fn convert(&self, input: &str) -> Option<&str> {
        if !self.enabled {
            return None;
        }
        self.mappings.get(input).map(String::as_str)
    }

    /// True if some key starts with `input` (a key equal to `input` counts).
    pub fn has_prefix(&self, input: &str) -> bool {
        if !self.enabled {
            return false;
        }
        // Keys starting with `input` form a contiguous run beginning at the
        // first key >= `input`, so checking that one key is enough.
        self.mappings
            .range::<str, _>((Bound::Included(input), Bound::Unbounded))
            .next()
            .is_some_and(|(key, _)| key.starts_with(input))
    }

    /// True if some key extends `input` or `input` extends some key.
    pub fn can_start_conversion(&self, input: &str) -> bool {
        if !self.enabled {
            return false;
        }
        self.has_prefix(input)
            || self
                .mappings
                .keys()
                .any(|key| input.starts_with(key.as_str()))
    }

    /// Insert or overwrite a mapping. No validation is performed.
    pub fn add_mapping(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.mappings.insert(key.into(), value.into());
    }

    /// Returns the removed value, if the key was present.
    pub fn remove_mapping(&mut self, key: &str) -> Option<String> {
        self.mappings.remove(key)
    }

    pub fn clear_mappings(&mut self) {
        self.mappings.clear();
    }

    pub fn mapping_count(&self) -> usize {
        self.mappings.len()
    }

    /// Iterate mappings in key order.
    pub fn mappings(&self) -> impl Iterator<Item = (&str, &str)> {
        self.mappings.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Check the key/value character rules, stopping at the first violation.
    ///
    /// When several entries are invalid at once, which one gets reported is
    /// unspecified.
    pub fn validate(&self) -> Result<(), TableValidationError> {
        for (key, value) in &self.mappings {
            if key.is_empty() {
                return Err(TableValidationError::EmptyKey);
            }
            if value.is_empty() {
                return Err(TableValidationError::EmptyValue(key.clone()));
            }
            if !key.chars().all(is_table_key_char) {
                return Err(TableValidationError::InvalidKeyCharacters(key.clone()));
            }
            if !is_hiragana_text(value) {
                return Err(TableValidationError::InvalidValueCharacters {
                    key: key.clone(),
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }
}

impl Default for MappingTable {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<(String, String)> for MappingTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self::with_mappings(true, iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(pairs: &[(&str, &str)]) -> MappingTable {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_convert_exact() {
        let t = table(&[("ka", "か"), ("kya", "きゃ")]);
        assert_eq!(t.convert("ka"), Some("か"));
        assert_eq!(t.convert("kya"), Some("きゃ"));
        assert_eq!(t.convert("k"), None);
        assert_eq!(t.convert("kax"), None);
    }

    #[test]
    fn test_disabled_table_matches_nothing() {
        let mut t = table(&[("ka", "か")]);
        t.set_enabled(false);
        assert_eq!(t.convert("ka"), None);
        assert!(!t.has_prefix("k"));
        assert!(!t.can_start_conversion("ka"));
        assert_eq!(t.mapping_count(), 1);
    }

    #[test]
    fn test_has_prefix() {
        let t = table(&[("ka", "か"), ("kya", "きゃ"), ("sa", "さ")]);
        assert!(t.has_prefix("k"));
        assert!(t.has_prefix("ky"));
        assert!(t.has_prefix("ka"));
        assert!(t.has_prefix(""));
        assert!(!t.has_prefix("kaa"));
        assert!(!t.has_prefix("t"));
        assert!(!t.has_prefix("kb"));
    }

    #[test]
    fn test_has_prefix_skips_unrelated_neighbours() {
        // "ab;" is the first key at or after "aa" but does not extend it.
        let t = table(&[("a", "あ"), ("ab;", "あぶ")]);
        assert!(!t.has_prefix("aa"));
        assert!(t.has_prefix("ab"));
    }

    #[test]
    fn test_can_start_conversion_is_bidirectional() {
        let t = table(&[("ka", "か")]);
        assert!(t.can_start_conversion("k"));
        assert!(t.can_start_conversion("ka"));
        assert!(t.can_start_conversion("kai"));
        assert!(!t.can_start_conversion("ki"));
    }

    #[test]
    fn test_mutators() {
        let mut t = MappingTable::new();
        assert_eq!(t.mapping_count(), 0);
        t.add_mapping("ka", "か");
        t.add_mapping("ka", "カ");
        assert_eq!(t.mapping_count(), 1);
        assert_eq!(t.convert("ka"), Some("カ"));
        assert_eq!(t.remove_mapping("ka"), Some("カ".to_string()));
        assert_eq!(t.remove_mapping("ka"), None);
        t.add_mapping("a", "あ");
        t.add_mapping("i", "い");
        t.clear_mappings();
        assert_eq!(t.mapping_count(), 0);
    }

    #[test]
    fn test_mutation_does_not_validate() {
        let mut t = MappingTable::new();
        t.add_mapping("", "");
        assert_eq!(t.mapping_count(), 1);
    }

    #[test]
    fn test_validate_ok() {
        let t = table(&[("jh;", "じゃん"), ("x-", "ぁ"), ("K9", "きゅう")]);
        assert_eq!(t.validate(), Ok(()));
        assert_eq!(MappingTable::new().validate(), Ok(()));
    }

    #[test]
    fn test_validate_empty_key() {
        let t = table(&[("", "あ")]);
        assert_eq!(t.validate(), Err(TableValidationError::EmptyKey));
    }

    #[test]
    fn test_validate_empty_value() {
        let t = table(&[("ka", "")]);
        assert!(matches!(
            t.validate(),
            Err(TableValidationError::EmptyValue(ref k)) if k == "ka"
        ));
    }

    #[test]
    fn test_validate_invalid_key_characters() {
        let t = table(&[("k.", "か")]);
        assert!(matches!(
            t.validate(),
            Err(TableValidationError::InvalidKeyCharacters(_))
        ));
        let t = table(&[("か", "か")]);
        assert!(matches!(
            t.validate(),
            Err(TableValidationError::InvalidKeyCharacters(_))
        ));
    }

    #[test]
    fn test_validate_invalid_value_characters() {
        for value in ["カ", "ka", "ー", "か!"] {
            let t = table(&[("ka", value)]);
            assert!(
                matches!(
                    t.validate(),
                    Err(TableValidationError::InvalidValueCharacters { .. })
                ),
                "value {value:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_validate_disabled_table_still_checked() {
        let mut t = table(&[("ka", "カ")]);
        t.set_enabled(false);
        assert!(t.validate().is_err());
    }
}
