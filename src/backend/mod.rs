//! kwgen backend: turn a table set into Rust source text.
//!
//! The pipeline is:
//! 1. normalize every declaration (`kwgen_core::TableSet::normalize`)
//! 2. validate the whole set (`kwgen_core::validate::check_table`)
//! 3. build one [`GeneratedModule`] per group and emit it as a `pub mod` block
//! 4. concatenate the blocks in declaration order
//!
//! Nothing is returned until every step has succeeded for every group, so a failing run never produces
//! partial output.
//!
//! ## Module Organization
//!
//! - `emit.rs` - literal rendering, token emission and formatting
//! - `errors.rs` - emission error type

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod emit;
mod errors;

pub use emit::{render, render_group};
pub use errors::EmitError;

use kwgen_core::{Group, GroupKind, IndexConstant, TableSet, validate};

use crate::error::GenerateError;

/// First line of generated output when headers are enabled.
pub const GENERATED_HEADER: &str = "// @generated by kwgen from declarative keyword groups. Do not edit.";

/// Options controlling the shape of the output text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileOptions {
    /// Prefix the output with [`GENERATED_HEADER`].
    pub header: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self { header: true }
    }
}

/// The emitted shape of one group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedModule {
    pub module: String,
    pub kind: GroupKind,
    /// Uppercased module name.
    pub const_name: String,
    pub declared_type: String,
    /// Bracketed item literal, as produced by [`render`].
    pub literal: String,
    pub item_count: usize,
    /// Empty unless `kind` is [`GroupKind::StringList`].
    pub index_constants: Vec<IndexConstant>,
}

impl GeneratedModule {
    /// Derive the module shape from a normalized group.
    pub fn from_group(group: &Group) -> Self {
        Self {
            module: group.module().to_string(),
            kind: group.kind(),
            const_name: group.const_name(),
            declared_type: group.declared_type().to_string(),
            literal: render_group(group),
            item_count: group.len(),
            index_constants: group.index_constants(),
        }
    }

    /// Emit the formatted `pub mod` block.
    pub fn emit(&self) -> Result<String, EmitError> {
        let tokens = emit::emit_tokens(
            &self.module,
            &self.const_name,
            &self.declared_type,
            &self.literal,
            &self.index_constants,
        )?;
        emit::format_tokens(&self.module, tokens)
    }
}

/// Compiles a [`TableSet`] into generated Rust source.
#[derive(Debug, Clone, Default)]
pub struct TableCompiler {
    options: CompileOptions,
}

impl TableCompiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: CompileOptions) -> Self {
        Self { options }
    }

    /// Normalize and validate, returning the module shapes without emitting text.
    pub fn prepare(&self, set: &TableSet) -> Result<Vec<GeneratedModule>, GenerateError> {
        let (groups, correlations) = set.normalize()?;
        validate::check_table(&groups, &correlations)?;
        Ok(groups
            .iter()
            .map(|group| {
                if group.is_empty() {
                    tracing::warn!(module = %group.module(), "empty group: table has no items");
                }
                GeneratedModule::from_group(group)
            })
            .collect())
    }

    /// Generate the complete output text.
    pub fn compile(&self, set: &TableSet) -> Result<String, GenerateError> {
        let modules = self.prepare(set)?;

        let mut blocks = Vec::with_capacity(modules.len());
        for module in &modules {
            blocks.push(module.emit()?);
            tracing::debug!(
                module = %module.module,
                kind = ?module.kind,
                items = module.item_count,
                "emitted module"
            );
        }

        let mut out = String::new();
        if self.options.header {
            out.push_str(GENERATED_HEADER);
            out.push('\n');
            if !blocks.is_empty() {
                out.push('\n');
            }
        }
        out.push_str(&blocks.join("\n"));

        tracing::info!(modules = modules.len(), bytes = out.len(), "generated keyword tables");
        Ok(out)
    }
}
