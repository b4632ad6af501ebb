//! # TreeMap
//!
//! Turns a JSON hierarchy into a standalone HTML page that draws it as an
//! interactive tree diagram: a layered tree, an indented tree or a
//! dendrogram.
//!
//! # Pipeline
//!
//! ```text
//! argv ──► cli::resolve_arguments ──► Configuration ──► render::render ──► page.html
//!                  │                                          │
//!                  └─► help / version text                    └─► RenderReport ──► output
//! ```
//!
//! Nothing is laid out on the Rust side. The tree layout and drawing happen
//! in the browser: the page carries the raw JSON, the diagram settings and a
//! small script that hands both to [AntV G6](https://g6.antv.antgroup.com/).
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`cli`] | Flag definitions and resolution into a [`cli::ResolvedAction`] |
//! | [`config`] | The immutable [`config::Configuration`] and the `--type` mapping |
//! | [`render`] | Read input, fill the page template, write output |
//! | [`output`] | Messages shown to the user |
//!
//! # Design Decisions
//!
//! ## Input Is Opaque
//!
//! The input file is never parsed or validated. Whatever text it holds is
//! embedded verbatim, and the browser is the one to complain about broken
//! JSON. This keeps the tool a pure converter.
//!
//! ## Degrade, Don't Abort
//!
//! A missing input file still yields a page (with an empty tree), and a bad
//! output path is reported without a non-zero exit. Both outcomes are
//! explicit values in [`render::RenderReport`], not swallowed errors.

pub mod cli;
pub mod config;
pub mod output;
pub mod render;

#[cfg(test)]
pub(crate) mod test_helpers;
