/// Outcome of feeding one grapheme to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionResult {
    /// Text to commit; the engine buffer is now empty.
    Converted(String),
    /// The buffer may still grow into a key; nothing to emit yet.
    Buffering,
    /// The buffer can no longer match. `emitted` is its first grapheme,
    /// committed verbatim; `remaining` must be fed back through `input()`
    /// one grapheme at a time.
    PartialConversion { emitted: String, remaining: String },
}
