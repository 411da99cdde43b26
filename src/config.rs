//! Load table sets from JSON configuration files.
//!
//! ```json
//! {
//!   "groups": [
//!     { "module": "commands", "items": ["exit", "list"] },
//!     { "module": ["handlers", "&[fn()]"], "items": ["crate::exit", "crate::list"] },
//!     { "registry": { "names": "processors", "refs": "processor_ctors", "type": "&[fn()]",
//!                     "entries": [["input", "crate::input"]] } }
//!   ],
//!   "correlations": [["commands", "handlers"]],
//!   "options": { "header": true }
//! }
//! ```
//!
//! ## Notes
//!
//! - `module` is either a bare name or a raw `[name, type]` list; the list's arity is checked later, by
//!   normalization, so malformed headers get the same error whether they come from a file or from code.
//! - Unknown fields are rejected everywhere.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use kwgen_core::{Declaration, GroupDeclaration, RegistryDeclaration, TableSet};

use crate::backend::CompileOptions;

/// Errors while reading or interpreting a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("group #{index} in '{}': {message}", path.display())]
    Invalid {
        path: PathBuf,
        index: usize,
        message: String,
    },
}

impl ConfigError {
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::Read { .. } => "kwgen::config_read",
            ConfigError::Parse { .. } => "kwgen::config_parse",
            ConfigError::Invalid { .. } => "kwgen::config_invalid",
        }
    }
}

/// A loaded configuration: the declarations plus output options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub tables: TableSet,
    pub options: CompileOptions,
}

impl TableConfig {
    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text, path)
    }

    /// Parse configuration text. `origin` is only used in error messages.
    pub fn from_json_str(text: &str, origin: &Path) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;

        let mut tables = TableSet::new();
        for (index, entry) in raw.groups.into_iter().enumerate() {
            let decl = entry.into_declaration().map_err(|message| ConfigError::Invalid {
                path: origin.to_path_buf(),
                index,
                message,
            })?;
            tables = tables.with(decl);
        }
        for (names, refs) in raw.correlations {
            tables = tables.correlate(names, refs);
        }

        let mut options = CompileOptions::default();
        if let Some(header) = raw.options.header {
            options.header = header;
        }

        Ok(Self { tables, options })
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    groups: Vec<RawEntry>,
    #[serde(default)]
    correlations: Vec<(String, String)>,
    #[serde(default)]
    options: RawOptions,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawOptions {
    header: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawHeader {
    Name(String),
    Signature(Vec<String>),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawEntry {
    module: Option<RawHeader>,
    items: Option<Vec<String>>,
    registry: Option<RawRegistry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRegistry {
    names: String,
    refs: String,
    #[serde(rename = "type")]
    type_signature: String,
    #[serde(default)]
    entries: Vec<(String, String)>,
}

impl RawEntry {
    fn into_declaration(self) -> Result<Declaration, String> {
        match (self.module, self.items, self.registry) {
            (Some(header), items, None) => {
                let items = items.unwrap_or_default();
                Ok(match header {
                    RawHeader::Name(name) => GroupDeclaration::keywords(name, items),
                    RawHeader::Signature(parts) => GroupDeclaration::raw(parts, items),
                }
                .into())
            }
            (None, None, Some(reg)) => {
                let registry = reg
                    .entries
                    .into_iter()
                    .fold(RegistryDeclaration::new(reg.names, reg.refs, reg.type_signature), |r, (k, v)| {
                        r.entry(k, v)
                    });
                Ok(registry.into())
            }
            (None, Some(_), Some(_)) => Err("a registry carries its items in `entries`, not `items`".to_string()),
            (Some(_), _, Some(_)) => Err("`module` and `registry` are mutually exclusive".to_string()),
            (None, _, None) => Err("expected either `module` or `registry`".to_string()),
        }
    }
}
