//! Newline normalization and macro substitution.
//!
//! `expand` walks the scanned tokens left to right and copies the literal text
//! between them into a fresh `String`, inserting each macro's substitution at
//! its span:
//!
//! ```text
//! "Unit {Name} at {Location}"
//!  ^^^^^ literal
//!       ^^^^^^ -> resolve("Name")     -> "Engine1"
//!             ^^^^ literal
//!                 ^^^^^^^^^^ -> resolve("Location") -> "" or "[?]"
//! ```
//!
//! Each distinct expression is resolved once per call; later occurrences reuse
//! the memoized [`Outcome`].

use super::metrics::Timings;
use super::resolve::resolve;
use crate::{Error, FormatOptions, Graph, MacroReport, MacroToken, Outcome};
use std::borrow::Cow;
use std::collections::HashMap;
use std::time::Instant;

/// Apply the format-string level options that run before scanning.
pub(crate) fn prepare(format: &str, options: FormatOptions) -> Cow<'_, str> {
    if options.contains(FormatOptions::REMOVE_NEWLINES) {
        regex!(r"\r\n|\r|\n").replace_all(format, " ")
    } else {
        Cow::Borrowed(format)
    }
}

/// Resolve one expression into the outcome the formatter substitutes.
pub(crate) fn evaluate(graph: &dyn Graph, expression: &str) -> Result<Outcome, Error> {
    let outcome = match resolve(graph, expression)? {
        None => Outcome::NotFound,
        Some(value) if value.is_null() => Outcome::Null,
        Some(value) => Outcome::Rendered(value.to_string()),
    };
    Ok(outcome)
}

/// Build the substituted string.
///
/// When `trace` is provided, one [`MacroReport`] per token occurrence is pushed
/// and resolve time is accumulated into `timings`.
pub(crate) fn expand(
    graph: &dyn Graph,
    source: &str,
    tokens: &[MacroToken<'_>],
    options: FormatOptions,
    mut trace: Option<(&mut Vec<MacroReport>, &mut Timings)>,
) -> Result<String, Error> {
    let mut memo: HashMap<&str, Outcome> = HashMap::new();
    let mut out = String::with_capacity(source.len());
    let mut cursor = 0;

    for token in tokens {
        let expression = token.expression();
        let memoized = memo.contains_key(expression);
        if !memoized {
            let started = trace.is_some().then(Instant::now);
            let outcome = evaluate(graph, expression)?;
            if let (Some((_, timings)), Some(started)) = (trace.as_mut(), started) {
                timings.resolve += started.elapsed();
            }
            memo.insert(expression, outcome);
        }
        let outcome = &memo[expression];

        let range = token.range();
        out.push_str(&source[cursor..range.start]);
        out.push_str(outcome.substitution(options));
        cursor = range.end;

        if let Some((reports, _)) = trace.as_mut() {
            reports.push(MacroReport {
                token: token.text().to_string(),
                expression: expression.to_string(),
                start: range.start,
                end: range.end,
                outcome: outcome.clone(),
                memoized,
            });
        }
    }
    out.push_str(&source[cursor..]);

    log::trace!(
        target: "graphfmt",
        "[expand] {} macro(s), {} distinct expression(s)",
        tokens.len(),
        memo.len()
    );

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::scan;
    use serde_json::json;

    #[test]
    fn prepare_collapses_each_newline_sequence() {
        let options = FormatOptions::REMOVE_NEWLINES;
        assert_eq!(prepare("a\nb", options), "a b");
        assert_eq!(prepare("a\r\nb", options), "a b");
        assert_eq!(prepare("a\rb", options), "a b");
        assert_eq!(prepare("a\n\nb", options), "a  b");
    }

    #[test]
    fn prepare_borrows_when_untouched() {
        assert!(matches!(prepare("a\nb", FormatOptions::empty()), Cow::Borrowed("a\nb")));
        assert!(matches!(prepare("ab", FormatOptions::REMOVE_NEWLINES), Cow::Borrowed("ab")));
    }

    #[test]
    fn evaluate_maps_resolution_to_outcomes() {
        let doc = json!({ "Name": "Engine1", "Location": null });

        assert_eq!(evaluate(&doc, "Name").unwrap(), Outcome::Rendered("Engine1".to_string()));
        assert_eq!(evaluate(&doc, "Location").unwrap(), Outcome::Null);
        assert_eq!(evaluate(&doc, "Missing").unwrap(), Outcome::NotFound);
    }

    #[test]
    fn expand_records_memoized_occurrences() {
        let doc = json!({ "Name": "X" });
        let source = "{Name}-{Name}";
        let tokens = scan(source);
        let mut reports = Vec::new();
        let mut timings = Timings::default();

        let out = expand(&doc, source, &tokens, FormatOptions::empty(), Some((&mut reports, &mut timings))).unwrap();

        assert_eq!(out, "X-X");
        assert_eq!(reports.len(), 2);
        assert!(!reports[0].memoized);
        assert!(reports[1].memoized);
        assert_eq!((reports[1].start, reports[1].end), (7, 13));
    }

    struct Slow;

    impl Graph for Slow {
        fn member(&self, _name: &str) -> Result<Option<crate::Value<'_>>, crate::AccessError> {
            std::thread::sleep(std::time::Duration::from_millis(2));
            Ok(Some(crate::Value::Bool(true)))
        }
    }

    #[test]
    fn expand_times_resolution_only_when_traced() {
        let source = "{A} {A} {B}";
        let tokens = scan(source);
        let mut reports = Vec::new();
        let mut timings = Timings::default();

        let plain = expand(&Slow, source, &tokens, FormatOptions::empty(), None).unwrap();
        let traced = expand(&Slow, source, &tokens, FormatOptions::empty(), Some((&mut reports, &mut timings))).unwrap();

        assert_eq!(plain, traced);
        assert!(timings.resolve >= std::time::Duration::from_millis(4));
        assert_eq!(timings.scan, std::time::Duration::ZERO);
    }

    #[test]
    fn expand_does_not_rescan_substituted_text() {
        let doc = json!({ "A": "{B}", "B": "nope" });
        let source = "{A}";
        let tokens = scan(source);

        let out = expand(&doc, source, &tokens, FormatOptions::empty(), None).unwrap();
        assert_eq!(out, "{B}");
    }
}
