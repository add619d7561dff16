use std::collections::BTreeMap;

use serde::Deserialize;

use super::table::{MappingTable, TableValidationError};

fn default_enabled() -> bool {
    true
}

#[derive(Deserialize)]
struct TableConfig {
    #[serde(default = "default_enabled")]
    enabled: bool,
    #[serde(default)]
    mappings: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum TableConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error(transparent)]
    Invalid(#[from] TableValidationError),
}

/// Parse a table document (`enabled = bool` plus a `[mappings]` table) and
/// validate the result.
pub fn parse_table_toml(toml_str: &str) -> Result<MappingTable, TableConfigError> {
    let config: TableConfig =
        toml::from_str(toml_str).map_err(|e| TableConfigError::Parse(e.to_string()))?;
    let table = MappingTable::with_mappings(config.enabled, config.mappings);
    table.validate()?;
    Ok(table)
}

impl MappingTable {
    /// Render the table in the format accepted by [`parse_table_toml`].
    pub fn to_toml(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("enabled = {}\n", self.is_enabled()));
        out.push_str("\n[mappings]\n");
        for (key, value) in self.mappings() {
            out.push_str(&format!("{} = {}\n", toml_string(key), toml_string(value)));
        }
        out
    }
}

/// Quote a string as a TOML basic string. Table keys and values never hold
/// control characters once validated, so only `"` and `\` need escaping.
fn toml_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_toml() {
        let toml = r#"
[mappings]
ka = "か"
"jh;" = "じゃん"
"#;
        let table = parse_table_toml(toml).unwrap();
        assert!(table.is_enabled());
        assert_eq!(table.mapping_count(), 2);
        assert_eq!(table.convert("ka"), Some("か"));
        assert_eq!(table.convert("jh;"), Some("じゃん"));
    }

    #[test]
    fn parse_disabled_table() {
        let toml = r#"
enabled = false

[mappings]
ka = "か"
"#;
        let table = parse_table_toml(toml).unwrap();
        assert!(!table.is_enabled());
        assert_eq!(table.mapping_count(), 1);
    }

    #[test]
    fn parse_empty_document() {
        let table = parse_table_toml("").unwrap();
        assert!(table.is_enabled());
        assert_eq!(table.mapping_count(), 0);
    }

    #[test]
    fn error_invalid_key() {
        let toml = r#"
[mappings]
"k." = "か"
"#;
        let err = parse_table_toml(toml).unwrap_err();
        assert!(matches!(
            err,
            TableConfigError::Invalid(TableValidationError::InvalidKeyCharacters(_))
        ));
    }

    #[test]
    fn error_katakana_value() {
        let toml = r#"
[mappings]
ka = "カ"
"#;
        let err = parse_table_toml(toml).unwrap_err();
        assert!(matches!(
            err,
            TableConfigError::Invalid(TableValidationError::InvalidValueCharacters { .. })
        ));
    }

    #[test]
    fn error_empty_value() {
        let toml = r#"
[mappings]
a = ""
"#;
        let err = parse_table_toml(toml).unwrap_err();
        assert!(matches!(
            err,
            TableConfigError::Invalid(TableValidationError::EmptyValue(_))
        ));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_table_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, TableConfigError::Parse(_)));
    }

    #[test]
    fn to_toml_parses_back() {
        let mut table = MappingTable::new();
        table.add_mapping("jh;", "じゃん");
        table.add_mapping("ka", "か");
        table.set_enabled(false);
        let rendered = table.to_toml();
        assert!(rendered.starts_with("enabled = false\n"));
        assert!(rendered.contains("\"jh;\" = \"じゃん\"\n"));
        assert_eq!(parse_table_toml(&rendered).unwrap(), table);
    }

    #[test]
    fn table_file_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[mappings]\nnn = \"ん\"\n").unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let table = parse_table_toml(&content).unwrap();
        assert_eq!(table.convert("nn"), Some("ん"));
    }
}
