//! Formatting engine.
//!
//! The engine is split into focused submodules under `src/engine/`; the public
//! surface lives in `api.rs`.
//!
//! ## How the parts work together
//!
//! ```text
//! format ── prepare (formatter.rs) ── newline normalization (optional)
//!                     │
//!                     v
//!            scan (scan.rs)              Outside ⇄ InsideMacro
//!                     │                  -> Vec<MacroToken> with spans
//!                     v
//!            expand (formatter.rs)
//!              - for each token: resolve (resolve.rs), memoized per expression
//!              - copy literal text + substitution into a new String
//!                     │
//!                     v
//!                  String
//! ```
//!
//! Substitution is span-based: the output is built from the scanned string and
//! the token spans, never by search-and-replace on a mutable buffer. Text that a
//! macro expands to is therefore never scanned again.
//!
//! ## Responsibilities by module
//!
//! - `scan.rs`: the two-state macro scanner.
//! - `resolve.rs`: dotted-path evaluation against a [`Graph`](crate::Graph).
//! - `formatter.rs`: newline normalization, per-call memo, substitution.
//! - `metrics.rs`: opt-in timings for `format_verbose_with`.
//!
//! ## Debugging
//!
//! Resolution and scanning emit `log` records at `debug`/`trace` level under the
//! `graphfmt` target; the CLI honours `RUST_LOG`.

#[path = "engine/formatter.rs"]
mod formatter;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/resolve.rs"]
mod resolve;
#[path = "engine/scan.rs"]
mod scan;


pub(crate) use formatter::{expand, prepare};
pub use metrics::Timings;
pub(crate) use resolve::resolve;
pub(crate) use scan::scan;
