//! Rust keyword vocabulary (for rejecting generated identifiers that would not compile).

/// Reserved + strict keywords in Rust (2024 edition).
pub const RUST_KEYWORDS: &[&str] = &[
    "as", "break", "const", "continue", "crate", "else", "enum", "extern", "false", "fn", "for", "if", "impl", "in",
    "let", "loop", "match", "mod", "move", "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super",
    "trait", "true", "type", "unsafe", "use", "where", "while", "async", "await", "dyn", "abstract", "become", "box",
    "do", "final", "gen", "macro", "override", "priv", "typeof", "unsized", "virtual", "yield", "try",
];

/// Check whether an identifier is a Rust keyword.
pub fn is_keyword(name: &str) -> bool {
    RUST_KEYWORDS.contains(&name)
}

/// Check whether `name` can be used verbatim as a Rust identifier.
///
/// Only ASCII identifiers are accepted: `[A-Za-z_][A-Za-z0-9_]*`, excluding the lone `_` and keywords.
pub fn is_plain_ident(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_ascii_alphabetic() || first == '_') {
        return false;
    }
    if name == "_" || is_keyword(name) {
        return false;
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_idents() {
        assert!(is_plain_ident("commands"));
        assert!(is_plain_ident("processor_ctors"));
        assert!(is_plain_ident("_private"));
        assert!(is_plain_ident("IDX_LS"));
    }

    #[test]
    fn test_rejected_idents() {
        assert!(!is_plain_ident(""));
        assert!(!is_plain_ident("_"));
        assert!(!is_plain_ident("9lives"));
        assert!(!is_plain_ident("channel-filter"));
        assert!(!is_plain_ident("mod"));
        assert!(!is_plain_ident("gen"));
        assert!(!is_plain_ident("naïve"));
    }
}
