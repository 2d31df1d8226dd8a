mod debug_report;

use anyhow::{Context, bail};
use clap::Parser;
use graphfmt::{FormatOptions, format_verbose_with, format_with};
use std::fs::File;
use std::io::{self, BufReader, IsTerminal, Read};
use std::path::PathBuf;
use std::process::ExitCode;

/// Render `{macro}` format strings against a JSON object graph.
///
/// Each `{Path.To.Member}` macro is replaced by the value found at that path in
/// the JSON document. Missing or null values become an empty string, or `[?]`
/// with --null-marks.
#[derive(Debug, Parser)]
#[command(name = "graphfmt", version)]
struct Cli {
    /// Format string. If omitted, the trailing arguments are joined with spaces.
    #[arg(short, long, value_name = "TEXT")]
    format: Option<String>,

    /// JSON document holding the object graph. Reads stdin when omitted or `-`.
    #[arg(short, long, value_name = "FILE")]
    data: Option<PathBuf>,

    /// Substitute `[?]` for missing or null values.
    #[arg(long)]
    null_marks: bool,

    /// Collapse newlines in the format string to single spaces.
    #[arg(long)]
    remove_newlines: bool,

    /// Option flags, e.g. "REMOVE_NEWLINES | INSERT_QUESTION_MARKS_FOR_NULL_VALUES".
    #[arg(long, env = "GRAPHFMT_OPTIONS", value_name = "FLAGS", value_parser = parse_options)]
    options: Option<FormatOptions>,

    /// Print a per-macro report instead of just the result.
    #[arg(long)]
    explain: bool,

    /// Force ANSI color in the --explain report.
    #[arg(long, conflicts_with = "no_color")]
    color: bool,

    /// Disable ANSI color in the --explain report.
    #[arg(long)]
    no_color: bool,

    /// Format string words, used when --format is not given.
    #[arg(trailing_var_arg = true, value_name = "TEXT")]
    rest: Vec<String>,
}

impl Cli {
    fn format_options(&self) -> FormatOptions {
        let mut options = self.options.unwrap_or_default();
        if self.null_marks {
            options |= FormatOptions::INSERT_QUESTION_MARKS_FOR_NULL_VALUES;
        }
        if self.remove_newlines {
            options |= FormatOptions::REMOVE_NEWLINES;
        }
        options
    }

    fn color(&self) -> bool {
        if self.color {
            true
        } else if self.no_color {
            false
        } else {
            io::stdout().is_terminal()
        }
    }
}

fn parse_options(value: &str) -> Result<FormatOptions, String> {
    FormatOptions::parse(value).map_err(|err| format!("invalid option flags '{value}': {err}"))
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            // Formatting failures are 1; everything before formatting is usage.
            if err.downcast_ref::<graphfmt::Error>().is_some() { ExitCode::from(1) } else { ExitCode::from(2) }
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let format = match (&cli.format, cli.rest.is_empty()) {
        (Some(_), false) => bail!("format string provided both with --format and as arguments"),
        (Some(format), true) => format.clone(),
        (None, false) => cli.rest.join(" "),
        (None, true) => bail!("no format string provided (use --format or trailing arguments)"),
    };

    let graph = read_graph(cli.data.as_deref())?;
    let options = cli.format_options();
    log::debug!("formatting {} bytes with {options:?}", format.len());

    if cli.explain {
        let report = format_verbose_with(&graph, &format, options)?;
        debug_report::print_run(&format, &report, cli.color());
    } else {
        println!("{}", format_with(&graph, &format, options)?);
    }
    Ok(())
}

fn read_graph(path: Option<&std::path::Path>) -> anyhow::Result<serde_json::Value> {
    match path {
        Some(path) if path.as_os_str() != "-" => {
            let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
            serde_json::from_reader(BufReader::new(file)).with_context(|| format!("invalid JSON in {}", path.display()))
        }
        _ => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer).context("failed to read stdin")?;
            serde_json::from_str(&buffer).context("invalid JSON on stdin")
        }
    }
}
