#![forbid(unsafe_code)]
//! kwgen: keyword table generator
//!
//! Turns declarative keyword groups into Rust source: one `pub mod` per group, holding a constant table and, for
//! keyword vocabularies, one `IDX_*` constant per keyword. Meant to run once per build, from a `build.rs` or the
//! `kwgen` CLI, with the output consumed by command dispatch code that indexes tables by those constants.
//!
//! The declaration model lives in [`kwgen_core`]; this crate adds emission ([`backend`]), configuration files
//! ([`config`]), build-script glue ([`build_support`]) and the CLI ([`cli`]).
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` with `?` / `map_err`. The `cli` and `backend` modules enforce
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! ## Examples
//! ```rust
//! use kwgen::{GroupDeclaration, TableSet};
//!
//! let tables = TableSet::new().with(GroupDeclaration::keywords("commands", ["exit", "list"]));
//! let source = kwgen::generate(&tables).unwrap();
//! assert!(source.contains("pub const IDX_LIST: usize = 1;"));
//! ```

pub mod backend;
pub mod build_support;
pub mod cli;
pub mod config;
pub mod error;

pub use backend::{CompileOptions, GeneratedModule, TableCompiler};
pub use config::TableConfig;
pub use error::GenerateError;
pub use kwgen_core::{
    Correlation, Declaration, DeclarationError, GroupDeclaration, GroupKind, RegistryDeclaration, TableSet,
};

/// Generate the tables for `set` with default options.
pub fn generate(set: &TableSet) -> Result<String, GenerateError> {
    TableCompiler::new().compile(set)
}
