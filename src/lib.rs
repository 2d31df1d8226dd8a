extern crate self as graphfmt;

#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
pub mod graph;

pub use api::{
    FormatOptions, FormatReport, Formatter, MacroReport, NULL_PLACEHOLDER, Outcome, format, format_verbose_with,
    format_with, resolve, scan_macros,
};
pub use engine::Timings;
pub use error::{AccessError, Error};
pub use graph::{Graph, IntoValue, Value};

// --- Shared types -----------------------------------------------------------

/// Byte span into a (newline-normalized) format string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    /// Start byte index (inclusive).
    pub start: usize,
    /// End byte index (exclusive).
    pub end: usize,
}

impl Range {
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A `{expression}` macro discovered by the scanner.
///
/// `text` is the literal token including both braces; it always starts with
/// `{` and ends with `}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacroToken<'a> {
    range: Range,
    text: &'a str,
}

impl<'a> MacroToken<'a> {
    /// Build a token from the span of `source` it occupies.
    pub(crate) fn new(source: &'a str, range: Range) -> Self {
        MacroToken { range, text: &source[range.start..range.end] }
    }

    /// Span of the token (braces included) in the scanned string.
    pub fn range(&self) -> Range {
        self.range
    }

    /// The literal token text, e.g. `{Address.City}`.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// The path between the braces, used verbatim.
    pub fn expression(&self) -> &'a str {
        &self.text[1..self.text.len() - 1]
    }
}
