//! Character-level Unicode classification for kana tables.

/// Check the full Hiragana block (U+3040..U+309F). This includes a few unassigned
/// codepoints (U+3040, U+3097-3098) but these never appear in table values, so
/// the block-level check is preferred over an exact range.
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Check the full Katakana block (U+30A0..U+30FF).
pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

/// Characters allowed in a romaji table key: ASCII letters, digits, `;` and `-`.
pub fn is_table_key_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == ';' || c == '-'
}

/// Convert a hiragana string to katakana.
/// Non-hiragana characters (ー, ASCII, etc.) are passed through unchanged.
pub fn hiragana_to_katakana(s: &str) -> String {
    s.chars()
        .map(|c| {
            if is_hiragana(c) {
                char::from_u32(c as u32 + 0x60).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// A table value is non-empty and made of hiragana only.
pub fn is_hiragana_text(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_hiragana)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_hiragana_text() {
        assert!(is_hiragana_text("じゃん"));
        assert!(is_hiragana_text("ゔ"));
        assert!(!is_hiragana_text("らーめん"));
        assert!(!is_hiragana_text("カタカナ"));
        assert!(!is_hiragana_text("abc"));
        assert!(!is_hiragana_text(""));
    }

    #[test]
    fn test_hiragana_to_katakana() {
        assert_eq!(hiragana_to_katakana("じゃん"), "ジャン");
        assert_eq!(hiragana_to_katakana("らーめん"), "ラーメン");
        assert_eq!(hiragana_to_katakana(""), "");
        assert_eq!(hiragana_to_katakana("abc"), "abc");
    }

    #[test]
    fn test_char_classification() {
        assert!(is_hiragana('あ'));
        assert!(!is_hiragana('ア'));
        assert!(is_katakana('ア'));
        assert!(is_katakana('ー'));
        assert!(is_table_key_char('k'));
        assert!(is_table_key_char('K'));
        assert!(is_table_key_char('7'));
        assert!(is_table_key_char(';'));
        assert!(is_table_key_char('-'));
        assert!(!is_table_key_char('.'));
        assert!(!is_table_key_char(' '));
        assert!(!is_table_key_char('か'));
    }
}
