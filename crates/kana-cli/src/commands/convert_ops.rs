use std::path::Path;

use serde::Serialize;

use kana_core::settings::{self, parse_settings_toml};
use kana_core::{diacritic, unicode};
use kana_session::{ConversionResult, TransliterationEngine};

use super::{load_table, read_file, CommandError};

/// One keystroke as seen by the engine, for `simulate`.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Step {
    pub key: String,
    pub result: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emitted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining: Option<String>,
    pub buffer: String,
}

pub fn convert(text: &str, table: Option<&Path>, katakana: bool) -> Result<String, CommandError> {
    let mut engine = TransliterationEngine::new(load_table(table)?);
    let out = engine.process_string(text);
    Ok(if katakana {
        unicode::hiragana_to_katakana(&out)
    } else {
        out
    })
}

/// Drive the engine keystroke by keystroke and record every step,
/// including split tails replayed by the engine.
pub fn simulate_steps(text: &str, table: Option<&Path>) -> Result<Vec<Step>, CommandError> {
    let mut engine = TransliterationEngine::new(load_table(table)?);
    let mut steps = Vec::new();

    engine.feed_with(text, |key, result, buffer| {
        let (label, emitted, remaining) = match result {
            ConversionResult::Converted(text) => ("converted", Some(text.clone()), None),
            ConversionResult::Buffering => ("buffering", None, None),
            ConversionResult::PartialConversion { emitted, remaining } => {
                ("partial", Some(emitted.clone()), Some(remaining.clone()))
            }
        };
        steps.push(Step {
            key: key.to_string(),
            result: label,
            emitted,
            remaining,
            buffer: buffer.to_string(),
        });
    });

    if let Some(rest) = engine.flush() {
        steps.push(Step {
            key: String::new(),
            result: "flush",
            emitted: Some(rest),
            remaining: None,
            buffer: String::new(),
        });
    }
    Ok(steps)
}

pub fn simulate(text: &str, table: Option<&Path>, json: bool) -> Result<String, CommandError> {
    let steps = simulate_steps(text, table)?;
    let mut lines = Vec::with_capacity(steps.len());
    for step in &steps {
        if json {
            lines.push(serde_json::to_string(step)?);
        } else {
            lines.push(format!(
                "{:<4} {:<10} emitted={:<6} remaining={:<6} buffer={}",
                step.key,
                step.result,
                step.emitted.as_deref().unwrap_or("-"),
                step.remaining.as_deref().unwrap_or("-"),
                step.buffer
            ));
        }
    }
    Ok(lines.join("\n"))
}

/// Map key labels through the layout, applying keymap overrides from the
/// given settings file or, without one, from the process-wide settings.
pub fn direct(text: &str, settings_file: Option<&Path>) -> Result<String, CommandError> {
    let parsed;
    let s = match settings_file {
        Some(path) => {
            parsed = parse_settings_toml(&read_file(path)?)?;
            &parsed
        }
        None => settings::settings(),
    };
    Ok(text
        .chars()
        .map(|c| s.direct_kana(c, false).unwrap_or(c))
        .collect())
}

pub fn compose(mark: char, base: char, shift: bool) -> String {
    match diacritic::attach(mark, base, shift) {
        Some(c) => c.to_string(),
        None => format!("no composition for {mark}{base}"),
    }
}
