//! Render table literals and emit one `pub mod` block per group.
//!
//! Emission goes through text once (the rendered literal, so references pass through verbatim), then through
//! `syn` for the module skeleton, and finally through `prettyplease` for stable formatting.
//!
//! ## Notes
//!
//! - Integer literals are emitted unsuffixed (`0`, not `0usize`); the constant's type carries `usize`.
//! - Keyword strings are quoted with Rust escaping rules, so any keyword text yields a valid string literal.

use proc_macro2::{Literal, TokenStream};
use quote::quote;
use syn::{Expr, Ident, Type};

use kwgen_core::{Group, GroupKind, IndexConstant};

use super::EmitError;

/// Render the items of a group as a bracketed literal.
///
/// String lists are quoted (`["exit", "list"]`); typed lists are joined verbatim (`[f1, f2]`).
pub fn render<S: AsRef<str>>(items: &[S], kind: GroupKind) -> String {
    let parts: Vec<String> = match kind {
        GroupKind::StringList => items.iter().map(|k| Literal::string(k.as_ref()).to_string()).collect(),
        GroupKind::TypedList => items.iter().map(|r| r.as_ref().to_string()).collect(),
    };
    format!("[{}]", parts.join(", "))
}

/// Render a normalized group's items.
pub fn render_group(group: &Group) -> String {
    match group {
        Group::StringList(g) => render(g.items.as_slice(), GroupKind::StringList),
        Group::TypedList(g) => {
            let refs: Vec<&str> = g.items.iter().map(|r| r.as_str()).collect();
            render(refs.as_slice(), GroupKind::TypedList)
        }
    }
}

/// Build the token stream of a module block from its parts.
pub(super) fn emit_tokens(
    module: &str,
    const_name: &str,
    declared_type: &str,
    literal: &str,
    index_constants: &[IndexConstant],
) -> Result<TokenStream, EmitError> {
    let mod_ident = ident(module, module)?;
    let const_ident = ident(module, const_name)?;

    let ty: Type = syn::parse_str(declared_type).map_err(|e| EmitError::TypeSignature {
        module: module.to_string(),
        signature: declared_type.to_string(),
        message: e.to_string(),
    })?;

    let value: Expr = syn::parse_str(&format!("&{literal}")).map_err(|e| EmitError::Literal {
        module: module.to_string(),
        literal: literal.to_string(),
        message: e.to_string(),
    })?;

    let mut indices = Vec::with_capacity(index_constants.len());
    for constant in index_constants {
        let name = ident(module, &constant.name)?;
        let position = Literal::usize_unsuffixed(constant.position);
        indices.push(quote! { pub const #name: usize = #position; });
    }

    Ok(quote! {
        pub mod #mod_ident {
            pub const #const_ident: #ty = #value;
            #(#indices)*
        }
    })
}

/// Format a module token stream into source text.
pub(super) fn format_tokens(module: &str, tokens: TokenStream) -> Result<String, EmitError> {
    let file: syn::File = syn::parse2(tokens).map_err(|e| EmitError::SynParse {
        module: module.to_string(),
        message: e.to_string(),
    })?;
    Ok(prettyplease::unparse(&file))
}

fn ident(module: &str, name: &str) -> Result<Ident, EmitError> {
    syn::parse_str::<Ident>(name).map_err(|_| EmitError::Identifier {
        module: module.to_string(),
        name: name.to_string(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_render_string_list_quotes_items() {
        assert_eq!(render(&["exit", "list"], GroupKind::StringList), r#"["exit", "list"]"#);
    }

    #[test]
    fn test_render_string_list_escapes_quotes() {
        assert_eq!(render(&["say \"hi\""], GroupKind::StringList), r#"["say \"hi\""]"#);
    }

    #[test]
    fn test_render_typed_list_is_verbatim() {
        assert_eq!(
            render(&["crate::a::new", "f2"], GroupKind::TypedList),
            "[crate::a::new, f2]"
        );
    }

    #[test]
    fn test_render_empty() {
        let none: [&str; 0] = [];
        assert_eq!(render(&none, GroupKind::StringList), "[]");
        assert_eq!(render(&none, GroupKind::TypedList), "[]");
    }

    #[test]
    fn test_bad_type_signature_reports_module() {
        let err = emit_tokens("ctors", "CTORS", "&[fn(", "[]", &[]).unwrap_err();
        assert!(matches!(err, EmitError::TypeSignature { ref module, .. } if module == "ctors"));
    }

    #[test]
    fn test_bad_reference_reports_literal() {
        let err = emit_tokens("ctors", "CTORS", "&[fn()]", "[crate::a, ::]", &[]).unwrap_err();
        assert!(matches!(err, EmitError::Literal { .. }));
    }

    #[test]
    fn test_index_literals_are_unsuffixed() {
        let idx = [IndexConstant {
            name: "IDX_EXIT".into(),
            position: 0,
        }];
        let tokens = emit_tokens("commands", "COMMANDS", "&[&str]", r#"["exit"]"#, &idx).unwrap();
        let text = format_tokens("commands", tokens).unwrap();
        assert!(text.contains("pub const IDX_EXIT: usize = 0;"));
        assert!(!text.contains("0usize"));
    }
}
