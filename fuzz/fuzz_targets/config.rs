#![no_main]

use std::path::Path;

use kwgen::{TableCompiler, TableConfig};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Fuzz the config loader
        if let Ok(cfg) = TableConfig::from_json_str(s, Path::new("fuzz.json")) {
            // Generation must either fail cleanly or produce parseable Rust
            if let Ok(source) = TableCompiler::with_options(cfg.options).compile(&cfg.tables) {
                assert!(syn::parse_file(&source).is_ok());
            }
        }
    }
});
