//! Tree diagram HTML rendering.
//!
//! A render is two independently failable stages around a pure template
//! step:
//!
//! ```text
//! read input ──► build payload ──► render_html ──► write output
//!   (may fail,        (pure)          (pure)         (may fail)
//!    degrades to "")
//! ```
//!
//! A failed read does not stop the write: the page is still produced with an
//! empty data block, which the client script draws as an empty tree. Neither
//! failure is propagated. [`render`] hands both outcomes back in a
//! [`RenderReport`] and the caller decides what to tell the user.
//!
//! ## Template
//!
//! The page shell is a [maud](https://maud.lambda.xyz/) template, checked and
//! compiled with the crate. The client script and stylesheet under `static/`
//! are embedded at compile time. The input JSON is not parsed here: it is
//! dropped verbatim into a `<script type="application/json">` block and the
//! client script parses it in the browser.
//!
//! Verbatim means no rewriting at all: input text containing `</script>`
//! closes the data block early and the remainder is read as HTML. Keep such
//! sequences out of the input, or write them as `<\/script>` (the same
//! JSON string).

use crate::config::{Configuration, Direction, Gaps, LayoutAlgorithm, Shape};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use serde_json::json;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

const CSS: &str = include_str!("../static/style.css");
const CLIENT_JS: &str = include_str!("../static/treemap.js");

/// AntV G6 2.x build providing `G6.Tree` and the named `G6.Layouts`.
const G6_SCRIPT: &str = "https://unpkg.com/@antv/g6@2.2.6/build/g6.js";

/// Element id the client script reads the embedded tree data from.
pub const DATA_ELEMENT_ID: &str = "tree-data";

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("cannot read {}: {source}", path.display())]
    InputNotFound { path: PathBuf, source: io::Error },
    #[error("cannot write {}: {source}", path.display())]
    OutputWrite { path: PathBuf, source: io::Error },
}

/// Result of trying to read the input file.
#[derive(Debug)]
pub enum ReadOutcome {
    Loaded(String),
    Missing(RenderError),
}

impl ReadOutcome {
    /// File contents, or the empty string when the read failed.
    pub fn into_contents(self) -> String {
        match self {
            ReadOutcome::Loaded(text) => text,
            ReadOutcome::Missing(_) => String::new(),
        }
    }
}

/// What happened to each stage of one render.
#[derive(Debug)]
pub struct RenderReport {
    pub input: Result<(), RenderError>,
    pub output: Result<(), RenderError>,
}

impl RenderReport {
    pub fn is_clean(&self) -> bool {
        self.input.is_ok() && self.output.is_ok()
    }
}

/// Raw tree data plus the diagram settings substituted into the page.
#[derive(Debug, Clone, Copy)]
pub struct RenderPayload<'a> {
    pub json_data: &'a str,
    pub direction: &'a Direction,
    pub gaps: Gaps,
    pub shape: Shape,
    pub layout: LayoutAlgorithm,
}

impl<'a> RenderPayload<'a> {
    pub fn new(json_data: &'a str, config: &'a Configuration) -> Self {
        Self {
            json_data,
            direction: config.direction(),
            gaps: config.gaps(),
            shape: config.shape(),
            layout: config.layout(),
        }
    }

    /// Diagram settings as a JSON object literal for the client script.
    fn options_literal(&self) -> String {
        json!({
            "direction": self.direction,
            "vgap": self.gaps.vertical,
            "hgap": self.gaps.horizontal,
            "shape": self.shape,
            "layout": self.layout,
        })
        .to_string()
    }
}

/// Read the input file as UTF-8 text.
///
/// Any failure (missing file, unreadable, not UTF-8) becomes
/// [`ReadOutcome::Missing`].
pub fn read_input(path: &Path) -> ReadOutcome {
    match fs::read_to_string(path) {
        Ok(text) => ReadOutcome::Loaded(text),
        Err(source) => ReadOutcome::Missing(RenderError::InputNotFound {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Substitute the payload into the page template.
///
/// Pure: the same payload always yields the same string.
pub fn render_html(payload: &RenderPayload) -> String {
    page(payload).into_string()
}

fn page(payload: &RenderPayload) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "TreeMap" }
                style { (PreEscaped(CSS)) }
                script src=(G6_SCRIPT) {}
            }
            body {
                div id="container" {}
                script type="application/json" id=(DATA_ELEMENT_ID) {
                    (PreEscaped(payload.json_data))
                }
                script {
                    "window.TREEMAP_OPTIONS = " (PreEscaped(payload.options_literal())) ";"
                }
                script { (PreEscaped(CLIENT_JS)) }
            }
        }
    }
}

/// Write the page, creating or truncating the file.
pub fn write_output(path: &Path, html: &str) -> Result<(), RenderError> {
    fs::write(path, html).map_err(|source| RenderError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// Run one render: read, substitute, write.
///
/// The write is always attempted, with empty data if the read failed.
pub fn render(config: &Configuration) -> RenderReport {
    let (json_data, input) = match read_input(config.input_path()) {
        ReadOutcome::Loaded(text) => (text, Ok(())),
        ReadOutcome::Missing(err) => (String::new(), Err(err)),
    };

    let payload = RenderPayload::new(&json_data, config);
    let html = render_html(&payload);
    let output = write_output(config.output_path(), &html);

    RenderReport { input, output }
}
