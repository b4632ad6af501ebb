//! Command-line flag definitions and argument resolution.
//!
//! Clap's built-in help and version flags are disabled: `-v` is the version
//! flag here (not `-V`), and help must come back as a [`ResolvedAction`]
//! rather than terminating the process from inside the parser. Printing is
//! left to the caller.

use crate::config::{Configuration, DEFAULT_DIRECTION, DEFAULT_OUTPUT, Direction};
use clap::error::ContextKind;
use clap::{ArgAction, CommandFactory, Parser};
use std::ffi::OsString;
use std::num::IntErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Text printed by `--version`.
pub const VERSION: &str = concat!("VERSION ", env!("CARGO_PKG_VERSION"));

/// Malformed flags or flag values, e.g. a non-integer `--type`.
#[derive(Error, Debug)]
#[error(transparent)]
pub struct ArgumentParseError(#[from] clap::Error);

impl ArgumentParseError {
    /// Print clap's message, followed by the usage line when clap left it
    /// out, and terminate with clap's non-zero status.
    pub fn exit(&self) -> ! {
        let _ = self.0.print();
        if self.0.get(ContextKind::Usage).is_none() {
            eprintln!("\n{}", Cli::command().render_usage());
        }
        std::process::exit(self.0.exit_code())
    }
}

#[derive(Parser, Debug)]
#[command(name = "treemap")]
#[command(about = "Render JSON hierarchy data as an interactive tree diagram HTML page")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Path to the input JSON data
    #[arg(short, long, value_name = "PATH", value_parser = clap::value_parser!(OsString))]
    input: Option<OsString>,

    /// Path of the generated HTML file
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Tree direction: LR, RL, H, TB, BT or V
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_DIRECTION)]
    direction: String,

    /// Tree type: 1 = layered tree, 2 = indented tree, 3 = dendrogram
    #[arg(
        short = 't',
        long = "type",
        value_name = "TYPE",
        default_value_t = 1,
        allow_negative_numbers = true,
        value_parser = parse_selector
    )]
    diagram_type: i64,

    /// Print version information
    #[arg(short, long)]
    version: bool,

    /// Print this help page
    #[arg(short, long, action = ArgAction::SetTrue)]
    help: bool,
}

/// Parse a `--type` value.
///
/// Any integer is a valid selector. Integers beyond `i64` saturate, which
/// keeps them on the dendrogram fallback like every other unknown value.
fn parse_selector(raw: &str) -> Result<i64, String> {
    match raw.trim().parse::<i64>() {
        Ok(selector) => Ok(selector),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(format!("`{raw}` is not an integer")),
        },
    }
}

/// What the binary should do for a given command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedAction {
    ShowVersion,
    ShowHelp,
    Render(Configuration),
}

/// Parse `argv` (program name first) into the action to perform.
///
/// `--help` wins over everything else. `--version` wins over rendering.
/// A missing or empty `--input` without `--version` is treated as a request
/// for help.
pub fn resolve_arguments<I, T>(argv: I) -> Result<ResolvedAction, ArgumentParseError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(argv)?;

    if cli.help {
        return Ok(ResolvedAction::ShowHelp);
    }
    if cli.version {
        return Ok(ResolvedAction::ShowVersion);
    }

    Ok(match cli.input.filter(|input| !input.is_empty()) {
        None => ResolvedAction::ShowHelp,
        Some(input) => ResolvedAction::Render(Configuration::new(
            PathBuf::from(input),
            cli.output,
            Direction::new(cli.direction),
            cli.diagram_type,
        )),
    })
}

/// Usage text shown for `--help` or a missing `--input`.
pub fn help_text() -> String {
    Cli::command().render_help().to_string()
}
