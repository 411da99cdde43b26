//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::Path;

use crate::backend::TableCompiler;
use crate::build_support::write_if_changed;
use crate::config::TableConfig;

use super::{CliError, CliResult, ExitCode};

/// Load a config and generate its tables; nothing is printed or written here.
pub fn generate(config: &Path, no_header: bool) -> CliResult<String> {
    let mut cfg = TableConfig::load(config).map_err(crate::GenerateError::from)?;
    if no_header {
        cfg.options.header = false;
    }
    Ok(TableCompiler::with_options(cfg.options).compile(&cfg.tables)?)
}

/// Print generated tables to stdout.
pub fn print_tables(config: &Path, no_header: bool) -> CliResult<ExitCode> {
    let source = generate(config, no_header)?;
    print!("{}", source);
    Ok(ExitCode::SUCCESS)
}

/// Write generated tables to `target`.
pub fn write_tables(config: &Path, target: &Path, no_header: bool) -> CliResult<ExitCode> {
    let source = generate(config, no_header)?;
    write_if_changed(target, &source)?;
    Ok(ExitCode::SUCCESS)
}

/// Compare generated tables with `target` without touching it.
pub fn check_tables(config: &Path, target: &Path, no_header: bool) -> CliResult<ExitCode> {
    let source = generate(config, no_header)?;
    let existing = fs::read_to_string(target)
        .map_err(|e| CliError::failure(format!("Cannot read '{}': {}", target.display(), e)))?;

    if existing == source {
        Ok(ExitCode::SUCCESS)
    } else {
        Err(CliError::failure(format!(
            "'{}' is out of date with '{}'; regenerate it with `kwgen {} -o {}`",
            target.display(),
            config.display(),
            config.display(),
            target.display()
        )))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const CONFIG: &str = r#"{"groups": [{"module": "commands", "items": ["exit", "list"]}]}"#;

    #[test]
    fn test_write_then_check() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("tables.json");
        let target = dir.path().join("consts.rs");
        fs::write(&config, CONFIG).unwrap();

        assert_eq!(write_tables(&config, &target, false).unwrap(), ExitCode::SUCCESS);
        assert_eq!(check_tables(&config, &target, false).unwrap(), ExitCode::SUCCESS);

        // header setting changes the text, so the same file is now stale
        let stale = check_tables(&config, &target, true).unwrap_err();
        assert!(stale.message.contains("out of date"));
    }

    #[test]
    fn test_failed_generation_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("tables.json");
        let target = dir.path().join("consts.rs");
        fs::write(
            &config,
            r#"{"groups": [{"module": "commands", "items": ["exit"]},
                           {"module": ["ctors", "T", "extra"], "items": []}]}"#,
        )
        .unwrap();

        let err = write_tables(&config, &target, false).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.contains("malformed declaration"));
        assert!(!target.exists());
    }
}
