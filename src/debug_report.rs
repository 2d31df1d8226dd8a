use graphfmt::{FormatReport, MacroReport, Outcome};

/// Report styling keyed by what is printed rather than by colour.
struct Style {
    color: bool,
}

impl Style {
    const RESET: &'static str = "\x1b[0m";

    fn wrap(&self, code: &str, text: impl AsRef<str>) -> String {
        if self.color { format!("\x1b[{code}m{}{}", text.as_ref(), Self::RESET) } else { text.as_ref().to_string() }
    }

    fn title(&self, text: impl AsRef<str>) -> String {
        self.wrap("1;36", text)
    }

    fn section(&self, name: &str) -> String {
        self.wrap("90", format!("━━━ {name} ━━━"))
    }

    fn note(&self, text: impl AsRef<str>) -> String {
        self.wrap("2", text)
    }

    fn token(&self, text: impl AsRef<str>) -> String {
        self.wrap("34", text)
    }

    fn found(&self, text: impl AsRef<str>) -> String {
        self.wrap("1;32", text)
    }

    fn absent(&self, text: impl AsRef<str>) -> String {
        self.wrap("33", text)
    }

    fn output(&self, text: impl AsRef<str>) -> String {
        self.wrap("1", text)
    }
}

pub fn print_run(format: &str, report: &FormatReport, color: bool) {
    let style = Style { color };
    println!("\n{}", style.title(format!("⚙  Formatting: {:?}", format)));
    if report.source != format {
        println!("  {} {:?}", style.note("normalized:"), report.source);
    }

    println!("\n{}", style.section("Macros"));
    if report.macros.is_empty() {
        println!("  {}", style.note("No macros found"));
        println!("\n{}", style.absent("Possible reasons:"));
        println!("  • The format string has no {{...}} tokens");
        println!("  • A macro is missing its closing brace");
    } else {
        for (idx, m) in report.macros.iter().enumerate() {
            print_macro(idx, m, &style);
        }
    }

    println!("\n{}", style.section("Output"));
    println!("  {}", style.output(&report.output));

    println!("\n{}", style.section("Timing"));
    println!(
        "  Total: {}  │  Scan: {}  │  Resolve: {}",
        style.found(format!("{:?}", report.timings.total)),
        style.token(format!("{:?}", report.timings.scan)),
        style.note(format!("{:?}", report.timings.resolve)),
    );
    println!();
}

fn print_macro(idx: usize, m: &MacroReport, style: &Style) {
    let outcome = match &m.outcome {
        Outcome::Rendered(text) => style.found(format!("{:?}", text)),
        Outcome::Null => style.absent("null"),
        Outcome::NotFound => style.absent("not found"),
    };

    println!("  {} {} {} {}", style.note(format!("[{idx}]")), style.token(&m.token), style.note("→"), outcome);
    println!(
        "      {} {}{}",
        style.note("span:"),
        style.absent(format!("{}..{}", m.start, m.end)),
        if m.memoized { style.note("  (reused)") } else { String::new() },
    );
}
