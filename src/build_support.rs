//! Helpers for running the generator from a `build.rs`.
//!
//! ```no_run
//! // build.rs
//! fn main() {
//!     kwgen::build_support::generate_file("tables.json".as_ref(), "src/consts.rs".as_ref()).unwrap();
//! }
//! ```
//!
//! The output file is written once, after the whole table set has compiled, and only when its content changed,
//! so an unchanged config does not retrigger downstream rebuilds.

use std::fs;
use std::path::Path;

use crate::backend::TableCompiler;
use crate::config::TableConfig;
use crate::error::GenerateError;

/// Tell cargo to rerun the build script when `path` changes.
pub fn rerun_if_changed(path: &Path) {
    println!("cargo:rerun-if-changed={}", path.display());
}

/// Load `config`, generate the tables, and write them to `out`.
///
/// Returns whether `out` was (re)written.
pub fn generate_file(config: &Path, out: &Path) -> Result<bool, GenerateError> {
    rerun_if_changed(config);
    let cfg = TableConfig::load(config)?;
    let text = TableCompiler::with_options(cfg.options).compile(&cfg.tables)?;
    write_if_changed(out, &text)
}

/// Write `contents` to `path` unless the file already holds exactly that text.
pub fn write_if_changed(path: &Path, contents: &str) -> Result<bool, GenerateError> {
    if let Ok(existing) = fs::read_to_string(path) {
        if existing == contents {
            tracing::debug!(path = %path.display(), "generated tables unchanged");
            return Ok(false);
        }
    }
    fs::write(path, contents).map_err(|source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "wrote generated tables");
    Ok(true)
}
