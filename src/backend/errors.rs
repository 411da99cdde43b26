//! Define error types for group → Rust emission.
//!
//! These errors represent *emission* failures (as opposed to declaration errors, which are caught by
//! `kwgen_core::validate` before anything is emitted).
//!
//! ## Notes
//!
//! - Prefer actionable messages: name the module and the text that failed to parse.

use thiserror::Error;

/// Error during module emission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmitError {
    /// A module or constant name could not be turned into a Rust identifier.
    #[error("module '{module}': `{name}` is not a Rust identifier")]
    Identifier { module: String, name: String },

    /// The declared type signature is not a Rust type.
    #[error("module '{module}': type signature `{signature}` does not parse: {message}")]
    TypeSignature {
        module: String,
        signature: String,
        message: String,
    },

    /// The rendered table literal is not a Rust expression (usually a malformed symbol reference).
    #[error("module '{module}': table literal `{literal}` does not parse: {message}")]
    Literal {
        module: String,
        literal: String,
        message: String,
    },

    /// The assembled module failed to re-parse for formatting.
    #[error("module '{module}': syn parse error: {message}")]
    SynParse { module: String, message: String },
}
