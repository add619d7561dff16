use std::path::Path;

use super::{load_table, CommandError};

pub fn table_export() -> String {
    kana_core::romaji::default_toml().to_string()
}

pub fn table_validate(file: &Path) -> Result<String, CommandError> {
    let table = load_table(Some(file))?;
    Ok(format!(
        "OK: {} mappings{}",
        table.mapping_count(),
        if table.is_enabled() { "" } else { " (disabled)" }
    ))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn export_is_valid_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("romaji.toml");
        fs::write(&path, table_export()).unwrap();
        let msg = table_validate(&path).unwrap();
        assert!(msg.starts_with("OK: "), "{msg}");
    }

    #[test]
    fn validate_reports_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "enabled = false\n[mappings]\n\"jh;\" = \"じゃん\"\n").unwrap();
        assert_eq!(table_validate(&path).unwrap(), "OK: 1 mappings (disabled)");
    }

    #[test]
    fn validate_rejects_bad_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[mappings]\nka = \"カ\"\n").unwrap();
        let err = table_validate(&path).unwrap_err();
        assert!(matches!(err, CommandError::Table { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn validate_missing_file() {
        let err = table_validate(Path::new("/nonexistent/table.toml")).unwrap_err();
        assert!(matches!(err, CommandError::Read { .. }));
    }
}
