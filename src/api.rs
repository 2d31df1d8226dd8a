use crate::engine::{self, Timings};
use crate::{Error, Graph, MacroToken, Range, Value};
use std::time::Instant;

/// Substituted for absent values when
/// [`FormatOptions::INSERT_QUESTION_MARKS_FOR_NULL_VALUES`] is set.
pub const NULL_PLACEHOLDER: &str = "[?]";

bitflags::bitflags! {
    /// Options that affect substitution. Flags are independent.
    ///
    /// The empty set is the default: absent values become an empty string and
    /// newlines are preserved.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FormatOptions: u8 {
        /// Substitute [`NULL_PLACEHOLDER`] instead of `""` for absent or
        /// unresolvable macros.
        const INSERT_QUESTION_MARKS_FOR_NULL_VALUES = 1 << 0;
        /// Replace every newline sequence (`\r\n`, `\n`, `\r`) in the format
        /// string with a single space before scanning.
        const REMOVE_NEWLINES = 1 << 1;
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions::empty()
    }
}

impl FormatOptions {
    /// Parse a `|`-separated flag list such as
    /// `"REMOVE_NEWLINES | INSERT_QUESTION_MARKS_FOR_NULL_VALUES"`.
    ///
    /// An empty (or whitespace-only) string yields the default options.
    pub fn parse(text: &str) -> Result<Self, bitflags::parser::ParseError> {
        bitflags::parser::from_str(text)
    }

    /// The text substituted for absent values under these options.
    pub fn null_text(self) -> &'static str {
        if self.contains(FormatOptions::INSERT_QUESTION_MARKS_FOR_NULL_VALUES) { NULL_PLACEHOLDER } else { "" }
    }
}

/// What a single macro resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A present value, already rendered.
    Rendered(String),
    /// The member exists but holds no value.
    Null,
    /// The path could not be followed.
    NotFound,
}

impl Outcome {
    /// Text inserted in place of the macro.
    pub fn substitution(&self, options: FormatOptions) -> &str {
        match self {
            Outcome::Rendered(text) => text,
            Outcome::Null | Outcome::NotFound => options.null_text(),
        }
    }
}

/// One macro occurrence, as reported by [`format_verbose_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroReport {
    /// Literal token text including braces.
    pub token: String,
    pub expression: String,
    /// Start byte index in the newline-normalized format string.
    pub start: usize,
    /// End byte index (exclusive).
    pub end: usize,
    pub outcome: Outcome,
    /// Whether the outcome was reused from an earlier occurrence.
    pub memoized: bool,
}

/// Result from [`format_verbose_with`].
#[derive(Debug, Clone)]
pub struct FormatReport {
    /// The format string after newline normalization.
    pub source: String,
    /// The formatted string; identical to what [`format_with`] returns.
    pub output: String,
    pub macros: Vec<MacroReport>,
    pub timings: Timings,
}

/// Format `format` against `graph` with default options.
///
/// # Example
/// ```
/// use graphfmt::format;
/// use serde_json::json;
///
/// let unit = json!({ "Name": "Engine1", "Location": null });
/// assert_eq!(format(&unit, "Unit {Name} at {Location}").unwrap(), "Unit Engine1 at ");
/// ```
pub fn format(graph: &dyn Graph, format: &str) -> Result<String, Error> {
    format_with(graph, format, FormatOptions::default())
}

/// Replace every `{expression}` macro in `format` with the value found by
/// resolving `expression` against `graph`.
///
/// Fails with [`Error::NullArgument`] for a null graph, [`Error::EmptyArgument`]
/// for an empty format string, and [`Error::InvalidExpression`] for an empty
/// macro (`{}`) or a path with empty segments. Members that are missing or
/// cannot be read are substituted per `options`.
pub fn format_with(graph: &dyn Graph, format: &str, options: FormatOptions) -> Result<String, Error> {
    check_arguments(graph, format)?;

    let source = engine::prepare(format, options);
    let tokens = engine::scan(&source);
    engine::expand(graph, &source, &tokens, options, None)
}

/// Like [`format_with`], but also returns per-macro outcomes and timings.
///
/// The default [`format_with`] path does not allocate these traces.
pub fn format_verbose_with(graph: &dyn Graph, format: &str, options: FormatOptions) -> Result<FormatReport, Error> {
    check_arguments(graph, format)?;
    let started = Instant::now();
    let mut timings = Timings::default();

    let source = engine::prepare(format, options);
    let tokens = engine::scan(&source);
    timings.scan = started.elapsed();

    let mut macros = Vec::with_capacity(tokens.len());
    let output = engine::expand(graph, &source, &tokens, options, Some((&mut macros, &mut timings)))?;
    timings.total = started.elapsed();

    Ok(FormatReport { source: source.into_owned(), output, macros, timings })
}

/// Evaluate a dotted path against `root`.
///
/// Returns `Ok(None)` when the path cannot be followed (missing member, null
/// intermediate, unreadable member) and `Ok(Some(Value::Null))` when the last
/// member exists but holds no value.
///
/// # Example
/// ```
/// use graphfmt::{Value, resolve};
/// use serde_json::json;
///
/// let doc = json!({ "Address": { "City": "Berlin" }, "Location": null });
/// assert_eq!(resolve(&doc, "Address.City").unwrap().unwrap().to_string(), "Berlin");
/// assert!(matches!(resolve(&doc, "Location").unwrap(), Some(Value::Null)));
/// assert!(resolve(&doc, "Address.Street").unwrap().is_none());
/// ```
pub fn resolve<'g>(root: &'g dyn Graph, expression: &str) -> Result<Option<Value<'g>>, Error> {
    engine::resolve(root, expression)
}

/// List the macros of `format` in order of appearance, duplicates included.
///
/// Newlines are not normalized here; spans refer to `format` as given.
pub fn scan_macros(format: &str) -> Vec<MacroToken<'_>> {
    engine::scan(format)
}

fn check_arguments(graph: &dyn Graph, format: &str) -> Result<(), Error> {
    if graph.is_null() {
        return Err(Error::NullArgument("graph"));
    }
    if format.is_empty() {
        return Err(Error::EmptyArgument("format"));
    }
    Ok(())
}

/// A format string scanned once and applied to many graphs.
///
/// ```
/// use graphfmt::{FormatOptions, Formatter};
/// use serde_json::json;
///
/// let fmt = Formatter::new("{Name}: {Status}", FormatOptions::INSERT_QUESTION_MARKS_FOR_NULL_VALUES).unwrap();
/// assert_eq!(fmt.format(&json!({ "Name": "Engine1", "Status": "idle" })).unwrap(), "Engine1: idle");
/// assert_eq!(fmt.format(&json!({ "Name": "Ladder2" })).unwrap(), "Ladder2: [?]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatter {
    source: String,
    macros: Vec<Range>,
    options: FormatOptions,
}

impl Formatter {
    pub fn new(format: &str, options: FormatOptions) -> Result<Self, Error> {
        if format.is_empty() {
            return Err(Error::EmptyArgument("format"));
        }
        let source = engine::prepare(format, options).into_owned();
        let macros = engine::scan(&source).iter().map(MacroToken::range).collect();
        Ok(Formatter { source, macros, options })
    }

    /// The format string after newline normalization.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn options(&self) -> FormatOptions {
        self.options
    }

    /// Scanned macros, in order of appearance.
    pub fn macros(&self) -> Vec<MacroToken<'_>> {
        self.macros.iter().map(|range| MacroToken::new(&self.source, *range)).collect()
    }

    pub fn format(&self, graph: &dyn Graph) -> Result<String, Error> {
        check_arguments(graph, &self.source)?;
        engine::expand(graph, &self.source, &self.macros(), self.options, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_options_are_empty() {
        assert_eq!(FormatOptions::default(), FormatOptions::empty());
        assert_eq!(FormatOptions::default().null_text(), "");
        assert_eq!(FormatOptions::INSERT_QUESTION_MARKS_FOR_NULL_VALUES.null_text(), "[?]");
    }

    #[test]
    fn options_parse_from_flag_names() {
        let parsed = FormatOptions::parse("REMOVE_NEWLINES | INSERT_QUESTION_MARKS_FOR_NULL_VALUES").unwrap();
        assert_eq!(parsed, FormatOptions::all());
        assert_eq!(FormatOptions::parse("REMOVE_NEWLINES").unwrap(), FormatOptions::REMOVE_NEWLINES);
        assert_eq!(FormatOptions::parse("").unwrap(), FormatOptions::empty());
        assert!(FormatOptions::parse("SHOUT").is_err());
    }

    #[test]
    fn outcome_substitution_follows_options() {
        let marks = FormatOptions::INSERT_QUESTION_MARKS_FOR_NULL_VALUES;
        assert_eq!(Outcome::Rendered("v".into()).substitution(marks), "v");
        assert_eq!(Outcome::Null.substitution(marks), "[?]");
        assert_eq!(Outcome::NotFound.substitution(FormatOptions::empty()), "");
    }

    #[test]
    fn verbose_reports_each_occurrence() {
        let unit = json!({ "Name": "Engine1", "Location": null });

        let report = format_verbose_with(&unit, "{Name} {Location} {Crew} {Name}", FormatOptions::empty()).unwrap();

        assert_eq!(report.output, "Engine1   Engine1");
        let outcomes: Vec<&Outcome> = report.macros.iter().map(|m| &m.outcome).collect();
        assert_eq!(
            outcomes,
            vec![
                &Outcome::Rendered("Engine1".into()),
                &Outcome::Null,
                &Outcome::NotFound,
                &Outcome::Rendered("Engine1".into()),
            ]
        );
        assert!(report.macros[3].memoized);
        assert_eq!(report.macros[1].token, "{Location}");
        assert!(report.timings.scan <= report.timings.total);
    }

    #[test]
    fn verbose_matches_plain_output() {
        let unit = json!({ "Name": "Engine1" });
        let format = "Line1\r\nLine2 {Name} {Missing}";
        let options = FormatOptions::all();

        let report = format_verbose_with(&unit, format, options).unwrap();
        assert_eq!(report.output, format_with(&unit, format, options).unwrap());
        assert_eq!(report.source, "Line1 Line2 {Name} {Missing}");
    }

    #[test]
    fn formatter_reuses_scanned_macros() {
        let fmt = Formatter::new("{A}\n{B}", FormatOptions::REMOVE_NEWLINES).unwrap();

        assert_eq!(fmt.source(), "{A} {B}");
        let texts: Vec<&str> = fmt.macros().iter().map(|t| t.text()).collect();
        assert_eq!(texts, vec!["{A}", "{B}"]);
        assert_eq!(fmt.format(&json!({ "A": 1, "B": 2 })).unwrap(), "1 2");
        assert_eq!(fmt.format(&json!({ "A": true })).unwrap(), "true ");
    }

    #[test]
    fn formatter_checks_arguments() {
        assert_eq!(Formatter::new("", FormatOptions::empty()), Err(Error::EmptyArgument("format")));

        let fmt = Formatter::new("{A}", FormatOptions::empty()).unwrap();
        assert_eq!(fmt.format(&serde_json::Value::Null), Err(Error::NullArgument("graph")));
    }

    #[test]
    fn scan_macros_lists_tokens() {
        let tokens = scan_macros("{A} {B.C} {A");
        let expressions: Vec<&str> = tokens.iter().map(|t| t.expression()).collect();
        assert_eq!(expressions, vec!["A", "B.C"]);
    }
}
