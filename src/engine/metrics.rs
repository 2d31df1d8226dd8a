//! Formatting run timings.
//!
//! Collected only by `format_verbose_with`; the default formatting path does
//! not read the clock.

use std::time::Duration;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Total elapsed time for the call.
    pub total: Duration,
    /// Newline normalization plus macro scanning.
    pub scan: Duration,
    /// Cumulative time spent resolving distinct expressions.
    pub resolve: Duration,
}
