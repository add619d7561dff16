use std::path::Path;

use kana_core::settings::{default_toml, parse_settings_toml};

use super::{read_file, CommandError};

pub fn settings_export() -> String {
    default_toml().to_string()
}

pub fn settings_validate(file: &Path) -> Result<String, CommandError> {
    let content = read_file(file)?;
    let s = parse_settings_toml(&content)?;
    Ok(format!(
        "OK: table.enabled={}, table.preset={:?}",
        s.table.enabled, s.table.preset
    ))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn export_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, settings_export()).unwrap();
        assert_eq!(
            settings_validate(&path).unwrap(),
            "OK: table.enabled=true, table.preset=Standard"
        );
    }

    #[test]
    fn validate_rejects_bad_keymap() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "[table]\nenabled = true\n[keymap]\nq = [\"た\"]\n").unwrap();
        let err = settings_validate(&path).unwrap_err();
        assert!(matches!(err, CommandError::Settings(_)));
    }
}
