//! Tests for build-script file generation

use std::fs;

use kwgen::build_support::{generate_file, write_if_changed};

const TABLES: &str = r#"{
  "groups": [
    { "module": "commands", "items": ["exit", "list", "rename"] }
  ]
}"#;

#[test]
fn test_generate_file_writes_once() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("tables.json");
    let out = dir.path().join("consts.rs");
    fs::write(&config, TABLES).unwrap();

    assert!(generate_file(&config, &out).unwrap());
    let first = fs::read_to_string(&out).unwrap();
    assert!(first.contains("pub const IDX_RENAME: usize = 2;"));

    // unchanged config leaves the file alone
    assert!(!generate_file(&config, &out).unwrap());
    assert_eq!(fs::read_to_string(&out).unwrap(), first);
}

#[test]
fn test_generate_file_failure_keeps_previous_output() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("tables.json");
    let out = dir.path().join("consts.rs");
    fs::write(&config, TABLES).unwrap();
    generate_file(&config, &out).unwrap();
    let before = fs::read_to_string(&out).unwrap();

    fs::write(
        &config,
        r#"{"groups": [{"module": "commands", "items": ["exit", "exit"]}]}"#,
    )
    .unwrap();
    assert!(generate_file(&config, &out).is_err());
    assert_eq!(fs::read_to_string(&out).unwrap(), before);
}

#[test]
fn test_write_if_changed_reports_io_errors() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("missing").join("consts.rs");
    let err = write_if_changed(&target, "pub mod a {}\n").unwrap_err();
    assert!(err.to_string().contains("cannot write"));
}
