//! Provide the pure declaration model for the kwgen table generator.
//!
//! A table set is an ordered list of keyword groups. Each group becomes one generated Rust module holding a
//! constant table, plus (for keyword vocabularies) one `IDX_*` constant per keyword. This crate owns everything
//! about that process that does not touch Rust syntax trees or the filesystem:
//!
//! - [`group`]: declarations as written by users, and the normalized [`Group`] variant they turn into
//! - [`naming`]: how module, table and index constant names are derived
//! - [`validate`]: table-wide checks (duplicate keywords, duplicate modules, positional partners)
//! - [`errors`]: the [`DeclarationError`] taxonomy
//!
//! ## Notes
//!
//! - This is a "model" crate: **no IO**, no global state, no syn/quote. Rendering lives in the `kwgen` crate.
//! - Everything here is deterministic; the same declarations always normalize to the same groups.
//!
//! ## Examples
//! ```rust
//! use kwgen_core::{GroupDeclaration, GroupKind, group::normalize};
//!
//! let decl = GroupDeclaration::keywords("commands", ["exit", "list"]);
//! let group = normalize(&decl).unwrap();
//! assert_eq!(group.kind(), GroupKind::StringList);
//! assert_eq!(group.const_name(), "COMMANDS");
//! assert_eq!(group.index_constants()[1].name, "IDX_LIST");
//! ```

pub mod errors;
pub mod group;
pub mod naming;
pub mod rust_keywords;
pub mod validate;

pub use errors::{DeclarationError, IdentRole};
pub use group::{
    Correlation, Declaration, DeclarationHeader, Group, GroupDeclaration, GroupKind, IndexConstant,
    RegistryDeclaration, RegistryEntry, STRING_LIST_TYPE, StringListGroup, SymbolRef, TableSet, TypedListGroup,
};
