//! Dead-key composition of accented Latin letters.
//!
//! A dead key produces no output by itself; the next letter typed is combined
//! with its mark (`¨` then `a` gives `ä`). The registry is a fixed constant.

/// Characters that start a dead-key sequence.
pub const DEAD_KEY_MARKS: [char; 5] = ['¨', '´', '`', '^', '~'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadKeyMark {
    Umlaut,
    Acute,
    Grave,
    Circumflex,
    Tilde,
}

impl DeadKeyMark {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '¨' => Some(Self::Umlaut),
            '´' => Some(Self::Acute),
            '`' => Some(Self::Grave),
            '^' => Some(Self::Circumflex),
            '~' => Some(Self::Tilde),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::Umlaut => '¨',
            Self::Acute => '´',
            Self::Grave => '`',
            Self::Circumflex => '^',
            Self::Tilde => '~',
        }
    }
}

/// (mark, lowercase base, lowercase composed, uppercase composed)
const COMPOSITIONS: &[(DeadKeyMark, char, char, char)] = &[
    (DeadKeyMark::Umlaut, 'a', 'ä', 'Ä'),
    (DeadKeyMark::Umlaut, 'e', 'ë', 'Ë'),
    (DeadKeyMark::Umlaut, 'i', 'ï', 'Ï'),
    (DeadKeyMark::Umlaut, 'o', 'ö', 'Ö'),
    (DeadKeyMark::Umlaut, 'u', 'ü', 'Ü'),
    (DeadKeyMark::Acute, 'a', 'á', 'Á'),
    (DeadKeyMark::Acute, 'e', 'é', 'É'),
    (DeadKeyMark::Acute, 'i', 'í', 'Í'),
    (DeadKeyMark::Acute, 'o', 'ó', 'Ó'),
    (DeadKeyMark::Acute, 'u', 'ú', 'Ú'),
    (DeadKeyMark::Grave, 'a', 'à', 'À'),
    (DeadKeyMark::Grave, 'e', 'è', 'È'),
    (DeadKeyMark::Grave, 'i', 'ì', 'Ì'),
    (DeadKeyMark::Grave, 'o', 'ò', 'Ò'),
    (DeadKeyMark::Grave, 'u', 'ù', 'Ù'),
    (DeadKeyMark::Circumflex, 'a', 'â', 'Â'),
    (DeadKeyMark::Circumflex, 'e', 'ê', 'Ê'),
    (DeadKeyMark::Circumflex, 'i', 'î', 'Î'),
    (DeadKeyMark::Circumflex, 'o', 'ô', 'Ô'),
    (DeadKeyMark::Circumflex, 'u', 'û', 'Û'),
    (DeadKeyMark::Tilde, 'a', 'ã', 'Ã'),
    (DeadKeyMark::Tilde, 'e', 'ẽ', 'Ẽ'),
    (DeadKeyMark::Tilde, 'i', 'ĩ', 'Ĩ'),
    (DeadKeyMark::Tilde, 'o', 'õ', 'Õ'),
    (DeadKeyMark::Tilde, 'u', 'ũ', 'Ũ'),
    (DeadKeyMark::Tilde, 'n', 'ñ', 'Ñ'),
];

pub fn is_dead_key(c: char) -> bool {
    DEAD_KEY_MARKS.contains(&c)
}

/// Compose `base` with the dead-key `mark`.
///
/// Returns `None` when `mark` is not a dead key or the pair has no
/// composition; emitting the two characters separately is up to the caller.
pub fn attach(mark: char, base: char, shift: bool) -> Option<char> {
    DeadKeyMark::from_char(mark).and_then(|m| compose(m, base, shift))
}

pub fn compose(mark: DeadKeyMark, base: char, shift: bool) -> Option<char> {
    let base = base.to_lowercase().next()?;
    COMPOSITIONS
        .iter()
        .find(|(m, b, _, _)| *m == mark && *b == base)
        .map(|&(_, _, lower, upper)| if shift { upper } else { lower })
}
