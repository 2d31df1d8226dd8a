//! Macro scanning.
//!
//! A two-state machine over the characters of the format string:
//!
//! ```text
//!            '{'                      '}'  (emit token)
//! Outside ────────▶ InsideMacro ───────────────▶ Outside
//!   │  ▲               │
//!   └──┘ '}' / other   └── '{' / other: stays inside, kept in the token
//! ```
//!
//! - A `{` while already inside does not nest; it becomes part of the current
//!   expression and only the next `}` closes the macro.
//! - A `}` while outside is ignored.
//! - An unterminated macro at the end of input is never emitted.
//!
//! Tokens are returned as spans into the input, in order of appearance,
//! duplicates included.

use crate::{MacroToken, Range};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Outside,
    /// `start` is the byte offset of the opening brace.
    InsideMacro { start: usize },
}

pub(crate) fn scan(input: &str) -> Vec<MacroToken<'_>> {
    let mut tokens = Vec::new();
    let mut state = ScanState::Outside;

    for (idx, c) in input.char_indices() {
        state = match (state, c) {
            (ScanState::Outside, '{') => ScanState::InsideMacro { start: idx },
            (ScanState::InsideMacro { start }, '}') => {
                tokens.push(MacroToken::new(input, Range { start, end: idx + 1 }));
                ScanState::Outside
            }
            (state, _) => state,
        };
    }

    if let ScanState::InsideMacro { start } = state {
        log::trace!(target: "graphfmt", "[scan] unterminated macro at byte {start} left as text");
    }
    log::trace!(target: "graphfmt", "[scan] {} macro(s) in {} bytes", tokens.len(), input.len());

    tokens
}
