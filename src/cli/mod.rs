//! CLI module for the kwgen table generator
//!
//! ## Usage
//!
//! - `kwgen <CONFIG>` - generate tables and print them to stdout
//! - `kwgen <CONFIG> -o <FILE>` - write them to a file instead
//! - `kwgen <CONFIG> --check <FILE>` - fail if `<FILE>` is not up to date
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use crate::error::GenerateError;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl From<GenerateError> for CliError {
    /// Render the error as a `miette` report.
    fn from(err: GenerateError) -> Self {
        CliError::failure(format!("{:?}", miette::Report::new(err)))
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Generate Rust keyword tables and index constants
#[derive(Parser, Debug)]
#[command(name = "kwgen")]
#[command(version = VERSION)]
#[command(about = "Generate Rust keyword tables and index constants", long_about = None)]
pub struct Cli {
    /// JSON file declaring the keyword groups
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Write the generated source to FILE instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE", conflicts_with = "check")]
    pub output: Option<PathBuf>,

    /// Verify that FILE already holds the generated source
    #[arg(long = "check", value_name = "FILE")]
    pub check: Option<PathBuf>,

    /// Omit the `@generated` header line
    #[arg(long = "no-header")]
    pub no_header: bool,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    if let Some(target) = cli.check {
        return commands::check_tables(&cli.config, &target, cli.no_header);
    }
    if let Some(target) = cli.output {
        return commands::write_tables(&cli.config, &target, cli.no_header);
    }
    commands::print_tables(&cli.config, cli.no_header)
}

// ============================================================================
// Tests
// ============================================================================
