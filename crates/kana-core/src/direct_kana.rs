//! Fixed physical-key → kana map emulating the JIS kana layout.
//!
//! Keys are the lowercase labels of a US keyboard; each maps to the kana
//! printed at the same physical position on a JIS kana keyboard.

/// Kana produced without shift.
pub const UNSHIFTED: &[(char, char)] = &[
    ('1', 'ぬ'),
    ('2', 'ふ'),
    ('3', 'あ'),
    ('4', 'う'),
    ('5', 'え'),
    ('6', 'お'),
    ('7', 'や'),
    ('8', 'ゆ'),
    ('9', 'よ'),
    ('0', 'わ'),
    ('-', 'ほ'),
    ('=', 'へ'),
    ('q', 'た'),
    ('w', 'て'),
    ('e', 'い'),
    ('r', 'す'),
    ('t', 'か'),
    ('y', 'ん'),
    ('u', 'な'),
    ('i', 'に'),
    ('o', 'ら'),
    ('p', 'せ'),
    ('[', '゛'),
    (']', '゜'),
    ('\\', 'む'),
    ('a', 'ち'),
    ('s', 'と'),
    ('d', 'し'),
    ('f', 'は'),
    ('g', 'き'),
    ('h', 'く'),
    ('j', 'ま'),
    ('k', 'の'),
    ('l', 'り'),
    (';', 'れ'),
    ('\'', 'け'),
    ('z', 'つ'),
    ('x', 'さ'),
    ('c', 'そ'),
    ('v', 'ひ'),
    ('b', 'こ'),
    ('n', 'み'),
    ('m', 'も'),
    (',', 'ね'),
    ('.', 'る'),
    ('/', 'め'),
    ('`', 'ろ'),
];

/// Kana produced with shift held. Keys missing here fall back to [`UNSHIFTED`].
pub const SHIFTED: &[(char, char)] = &[
    ('3', 'ぁ'),
    ('4', 'ぅ'),
    ('5', 'ぇ'),
    ('6', 'ぉ'),
    ('7', 'ゃ'),
    ('8', 'ゅ'),
    ('9', 'ょ'),
    ('0', 'を'),
    ('-', 'ー'),
    ('e', 'ぃ'),
    ('z', 'っ'),
    ('[', '「'),
    (']', '」'),
    (',', '、'),
    ('.', '。'),
    ('/', '・'),
];

fn lookup(table: &[(char, char)], key: char) -> Option<char> {
    table.iter().find(|(k, _)| *k == key).map(|&(_, kana)| kana)
}

/// Kana for a physical key label. Case-insensitive on the label.
pub fn to_kana(key: char, shift_pressed: bool) -> Option<char> {
    let key = key.to_lowercase().next()?;
    if shift_pressed {
        if let Some(kana) = lookup(SHIFTED, key) {
            return Some(kana);
        }
    }
    lookup(UNSHIFTED, key)
}

/// Map every character independently with shift released, keeping unmapped
/// characters as they are.
pub fn convert_to_kana(text: &str) -> String {
    text.chars().map(|c| to_kana(c, false).unwrap_or(c)).collect()
}
