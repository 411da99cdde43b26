//! Derive generated constant names from module names and keywords.
//!
//! ## Notes
//!
//! - Uppercasing uses Unicode rules (`str::to_uppercase`), but identifiers are later required to be ASCII, so
//!   in practice this is ASCII uppercasing.
//! - Names are derived, never stored: a group's table and index names are always recomputed from its module name and
//!   keywords.

/// Prefix of every index constant.
pub const INDEX_PREFIX: &str = "IDX_";

/// Name of the table constant for a module: the module name uppercased.
///
/// ## Examples
/// ```rust
/// assert_eq!(kwgen_core::naming::table_const_name("processor_ctors"), "PROCESSOR_CTORS");
/// ```
pub fn table_const_name(module: &str) -> String {
    module.to_uppercase()
}

/// Name of the index constant for a keyword: `IDX_` followed by the keyword uppercased.
///
/// ## Examples
/// ```rust
/// assert_eq!(kwgen_core::naming::index_const_name("channelfilter"), "IDX_CHANNELFILTER");
/// ```
pub fn index_const_name(keyword: &str) -> String {
    format!("{INDEX_PREFIX}{}", keyword.to_uppercase())
}

/// Normalize whitespace in a type signature so spellings like `& [&str]` compare equal to `&[&str]`.
///
/// Whitespace between two word characters (`dyn Trait`, `&'a str`) separates tokens and is kept as a single
/// space; everywhere else it is dropped. `&[&s tr]` therefore stays distinct from `&[&str]`.
pub fn canonical_type(signature: &str) -> String {
    let mut out = String::with_capacity(signature.len());
    let mut pending_space = false;
    for c in signature.chars() {
        if c.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space && out.chars().next_back().is_some_and(is_word_char) && is_word_char(c) {
            out.push(' ');
        }
        pending_space = false;
        out.push(c);
    }
    out
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
