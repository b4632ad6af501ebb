//! Shared test utilities: input fixtures and configuration shortcuts.

use std::path::{Path, PathBuf};

use crate::config::{Configuration, Direction};

/// Write `contents` to `dir/name` and return the full path.
pub fn write_input(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

/// Configuration with the default direction and the given `--type` selector.
pub fn config_with_type(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    selector: i64,
) -> Configuration {
    Configuration::new(
        input.as_ref(),
        output.as_ref(),
        Direction::default(),
        selector,
    )
}
