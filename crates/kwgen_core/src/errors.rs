//! Declaration errors shared by the generator library and its CLI.
//!
//! Every variant is fatal to the whole run: generated tables must compile as a unit, so there is no
//! partial success.

use thiserror::Error;

/// Errors detected while normalizing or validating declarations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeclarationError {
    /// A raw `(module, type)` header did not have exactly two elements.
    #[error("malformed declaration '{module}': expected a (module, type) pair, found {arity} element(s)")]
    MalformedHeader { module: String, arity: usize },

    /// Two keywords of a vocabulary map to the same index constant.
    #[error(
        "duplicate keyword '{keyword}' in module '{module}': positions {first} and {second} both produce `{constant}`"
    )]
    DuplicateKeyword {
        module: String,
        keyword: String,
        constant: String,
        first: usize,
        second: usize,
    },

    /// A module name or derived constant name is not a usable Rust identifier.
    #[error("'{name}' in module '{module}' is not a valid Rust identifier for {role}")]
    InvalidIdentifier {
        module: String,
        name: String,
        role: IdentRole,
    },

    /// The same module name was declared twice.
    #[error("module '{module}' is declared more than once")]
    DuplicateModule { module: String },

    /// Two positional partners have different lengths.
    #[error(
        "positional mismatch: '{names}' has {names_len} item(s) but its partner '{refs}' has {refs_len} item(s)"
    )]
    CorrelationLength {
        names: String,
        names_len: usize,
        refs: String,
        refs_len: usize,
    },

    /// A correlation names a module that is not declared.
    #[error("correlation refers to undeclared module '{module}'")]
    UnknownCorrelationTarget { module: String },
}

/// What a rejected identifier was going to be used as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentRole {
    Module,
    Table,
    IndexConstant,
}

impl std::fmt::Display for IdentRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdentRole::Module => write!(f, "a module name"),
            IdentRole::Table => write!(f, "a table constant"),
            IdentRole::IndexConstant => write!(f, "an index constant"),
        }
    }
}

impl DeclarationError {
    /// Short stable code, used by diagnostics.
    pub fn code(&self) -> &'static str {
        match self {
            DeclarationError::MalformedHeader { .. } => "kwgen::malformed_declaration",
            DeclarationError::DuplicateKeyword { .. } => "kwgen::duplicate_keyword",
            DeclarationError::InvalidIdentifier { .. } => "kwgen::invalid_identifier",
            DeclarationError::DuplicateModule { .. } => "kwgen::duplicate_module",
            DeclarationError::CorrelationLength { .. } => "kwgen::positional_mismatch",
            DeclarationError::UnknownCorrelationTarget { .. } => "kwgen::unknown_module",
        }
    }

    /// Actionable hint for the user, when there is an obvious fix.
    pub fn help(&self) -> Option<String> {
        match self {
            DeclarationError::MalformedHeader { .. } => {
                Some("write the module either as a bare name or as [\"name\", \"type\"]".to_string())
            }
            DeclarationError::DuplicateKeyword { .. } => {
                Some("remove the repeated keyword; index constants are case-insensitive".to_string())
            }
            DeclarationError::InvalidIdentifier { .. } => {
                Some("use ASCII letters, digits and '_' only, and avoid Rust keywords".to_string())
            }
            DeclarationError::CorrelationLength { .. } => {
                Some("declare both tables as one registry so they cannot drift apart".to_string())
            }
            DeclarationError::DuplicateModule { .. } | DeclarationError::UnknownCorrelationTarget { .. } => None,
        }
    }
}
