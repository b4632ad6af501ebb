//! User-facing messages.
//!
//! Each message has a `format_*` function (pure, returns lines) for
//! testability and a `print_*` wrapper that writes them out. A clean render
//! prints nothing: success is the output file itself.
//!
//! ```text
//! File Not Found!
//!     cannot read missing.json: No such file or directory (os error 2)
//! Invalid file path!
//!     cannot write out/tree.html: No such file or directory (os error 2)
//! ```

use crate::config::{Direction, KNOWN_DIRECTIONS};
use crate::render::RenderReport;

/// Headline for an input file that could not be read.
pub const INPUT_NOT_FOUND: &str = "File Not Found!";

/// Headline for an output path that could not be written.
pub const INVALID_OUTPUT_PATH: &str = "Invalid file path!";

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format the failures of one render, headline first, detail indented.
pub fn format_report(report: &RenderReport) -> Vec<String> {
    let mut lines = Vec::new();

    if let Err(err) = &report.input {
        lines.push(INPUT_NOT_FOUND.to_string());
        lines.push(format!("{}{}", indent(1), err));
    }
    if let Err(err) = &report.output {
        lines.push(INVALID_OUTPUT_PATH.to_string());
        lines.push(format!("{}{}", indent(1), err));
    }

    lines
}

pub fn print_report(report: &RenderReport) {
    for line in format_report(report) {
        println!("{}", line);
    }
}

/// Warning for a direction the client script does not document.
pub fn format_direction_warning(direction: &Direction) -> Option<String> {
    if direction.is_known() {
        return None;
    }
    Some(format!(
        "Warning: unknown direction \"{}\" (expected one of {}), passing it through",
        direction,
        KNOWN_DIRECTIONS.join("/")
    ))
}

/// Direction warnings go to stderr so they never mix with the report.
pub fn print_direction_warning(direction: &Direction) {
    if let Some(line) = format_direction_warning(direction) {
        eprintln!("{}", line);
    }
}
