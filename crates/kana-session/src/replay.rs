use std::collections::VecDeque;

use unicode_segmentation::UnicodeSegmentation;

use super::engine::TransliterationEngine;
use super::types::ConversionResult;

impl TransliterationEngine {
    /// Run a whole string through [`input`](Self::input) and flush at the end.
    pub fn process_string(&mut self, input: &str) -> String {
        let mut output = self.feed_with(input, |_, _, _| {});
        if let Some(rest) = self.flush() {
            output.push_str(&rest);
        }
        output
    }

    /// Feed `input` grapheme by grapheme without flushing, returning the
    /// emitted text. `on_step` sees each fed grapheme, its result and the
    /// buffer afterwards.
    ///
    /// Split tails are pushed back onto the front of the queue so they are
    /// replayed before the rest of `input`.
    pub fn feed_with<F>(&mut self, input: &str, mut on_step: F) -> String
    where
        F: FnMut(&str, &ConversionResult, &str),
    {
        let mut queue: VecDeque<String> = input.graphemes(true).map(str::to_owned).collect();
        let mut output = String::new();

        while let Some(grapheme) = queue.pop_front() {
            let result = self.input(&grapheme);
            on_step(&grapheme, &result, self.current_buffer());
            match result {
                ConversionResult::Converted(text) => output.push_str(&text),
                ConversionResult::Buffering => {}
                ConversionResult::PartialConversion { emitted, remaining } => {
                    output.push_str(&emitted);
                    for g in remaining.graphemes(true).rev() {
                        queue.push_front(g.to_owned());
                    }
                }
            }
        }
        output
    }
}
