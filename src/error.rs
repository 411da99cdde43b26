//! Top-level error type of a generator run.
//!
//! Every failure is fatal: a generated table file must compile as a unit, so there is no partial success.
//! The CLI renders these through `miette` using the codes and help texts below.

use std::fmt::Display;
use std::path::PathBuf;

use kwgen_core::DeclarationError;
use thiserror::Error;

use crate::backend::EmitError;
use crate::config::ConfigError;

/// Any error that stops a generator run.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Declaration(#[from] DeclarationError),

    #[error("code generation failed: {0}")]
    Emit(#[from] EmitError),

    #[error("cannot write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl miette::Diagnostic for GenerateError {
    fn code<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        let code = match self {
            GenerateError::Config(err) => err.code(),
            GenerateError::Declaration(err) => err.code(),
            GenerateError::Emit(_) => "kwgen::emit",
            GenerateError::Write { .. } => "kwgen::write",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        match self {
            GenerateError::Declaration(err) => err.help().map(|h| Box::new(h) as Box<dyn Display>),
            GenerateError::Emit(EmitError::TypeSignature { .. }) => {
                Some(Box::new("the second element of a typed module must be a Rust slice type"))
            }
            GenerateError::Emit(EmitError::Literal { .. }) => {
                Some(Box::new("typed items are pasted verbatim and must be Rust expressions"))
            }
            _ => None,
        }
    }
}
