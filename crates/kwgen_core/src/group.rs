//! Define keyword group declarations and their normalized form.
//!
//! Users write [`GroupDeclaration`]s (bare module name or raw `(module, type)` pair) and
//! [`RegistryDeclaration`]s (one keyword → reference mapping). [`normalize`] turns each group declaration into a
//! [`Group`], whose variant decides everything downstream: quoting policy and whether index constants exist.
//!
//! ## Notes
//!
//! - Kind is fixed once, at normalization; nothing after this point compares type strings.
//! - A pair whose type is the canonical [`STRING_LIST_TYPE`] is a keyword vocabulary, exactly like a bare name.
//!   Any other type is treated as a typed reference list. There is no "unsupported type" error.
//!
//! ## See also
//! - [`crate::validate`] for the checks that run over normalized groups.

use crate::errors::DeclarationError;
use crate::naming;

/// The canonical type of a keyword vocabulary table.
pub const STRING_LIST_TYPE: &str = "&[&str]";

/// Module header as written in a declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclarationHeader {
    /// Bare module name; the group is a keyword vocabulary.
    Name(String),
    /// Raw `[module, type]` form. Arity is checked by [`normalize`], not here.
    Signature(Vec<String>),
}

/// One group as declared: a header plus its ordered items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupDeclaration {
    pub header: DeclarationHeader,
    pub items: Vec<String>,
}

impl GroupDeclaration {
    /// Declare a keyword vocabulary.
    pub fn keywords<I, S>(module: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            header: DeclarationHeader::Name(module.into()),
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Declare a table with an explicit type signature.
    pub fn typed<I, S>(module: impl Into<String>, type_signature: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            header: DeclarationHeader::Signature(vec![module.into(), type_signature.into()]),
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Declare a group from an unchecked header list, as read from configuration.
    pub fn raw<I, S>(header: Vec<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            header: DeclarationHeader::Signature(header),
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Best-effort module name for error messages, before the header is validated.
    pub fn module_hint(&self) -> &str {
        match &self.header {
            DeclarationHeader::Name(name) => name,
            DeclarationHeader::Signature(parts) => parts.first().map(String::as_str).unwrap_or("<unnamed>"),
        }
    }
}

/// A symbol reference emitted verbatim (e.g. a path to a constructor function).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SymbolRef(String);

impl SymbolRef {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SymbolRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The two group kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKind {
    /// Quoted keywords, looked up by name through `IDX_*` constants.
    StringList,
    /// Raw references, consumed by position only.
    TypedList,
}

/// A keyword vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringListGroup {
    pub module: String,
    pub items: Vec<String>,
}

/// An ordered reference table with an explicit element type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedListGroup {
    pub module: String,
    pub type_signature: String,
    pub items: Vec<SymbolRef>,
}

/// A normalized group, ready for validation and emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Group {
    StringList(StringListGroup),
    TypedList(TypedListGroup),
}

/// An `IDX_*` constant: a keyword's derived name and its zero-based position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexConstant {
    pub name: String,
    pub position: usize,
}

impl Group {
    pub fn module(&self) -> &str {
        match self {
            Group::StringList(g) => &g.module,
            Group::TypedList(g) => &g.module,
        }
    }

    pub fn kind(&self) -> GroupKind {
        match self {
            Group::StringList(_) => GroupKind::StringList,
            Group::TypedList(_) => GroupKind::TypedList,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Group::StringList(g) => g.items.len(),
            Group::TypedList(g) => g.items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Name of the table constant (uppercased module name).
    pub fn const_name(&self) -> String {
        naming::table_const_name(self.module())
    }

    /// Declared type of the table constant.
    pub fn declared_type(&self) -> &str {
        match self {
            Group::StringList(_) => STRING_LIST_TYPE,
            Group::TypedList(g) => &g.type_signature,
        }
    }

    /// Index constants in item order. Always empty for typed lists.
    pub fn index_constants(&self) -> Vec<IndexConstant> {
        match self {
            Group::StringList(g) => g
                .items
                .iter()
                .enumerate()
                .map(|(position, keyword)| IndexConstant {
                    name: naming::index_const_name(keyword),
                    position,
                })
                .collect(),
            Group::TypedList(_) => Vec::new(),
        }
    }
}

/// Resolve a declaration's kind and produce its normalized [`Group`].
///
/// ## Errors
/// - [`DeclarationError::MalformedHeader`] when a pair header does not have exactly two elements.
///
/// ## Examples
/// ```rust
/// use kwgen_core::{GroupDeclaration, GroupKind, group::normalize};
///
/// let ctors = GroupDeclaration::typed("processor_ctors", "&[fn() -> u8]", ["crate::a", "crate::b"]);
/// assert_eq!(normalize(&ctors).unwrap().kind(), GroupKind::TypedList);
///
/// let bad = GroupDeclaration::raw(vec!["a".into(), "b".into(), "c".into()], Vec::<String>::new());
/// assert!(normalize(&bad).is_err());
/// ```
pub fn normalize(decl: &GroupDeclaration) -> Result<Group, DeclarationError> {
    let (module, type_signature) = match &decl.header {
        DeclarationHeader::Name(name) => (name.clone(), STRING_LIST_TYPE.to_string()),
        DeclarationHeader::Signature(parts) => match parts.as_slice() {
            [module, ty] => (module.clone(), ty.clone()),
            _ => {
                return Err(DeclarationError::MalformedHeader {
                    module: decl.module_hint().to_string(),
                    arity: parts.len(),
                });
            }
        },
    };

    if naming::canonical_type(&type_signature) == STRING_LIST_TYPE {
        Ok(Group::StringList(StringListGroup {
            module,
            items: decl.items.clone(),
        }))
    } else {
        Ok(Group::TypedList(TypedListGroup {
            module,
            type_signature,
            items: decl.items.iter().map(SymbolRef::new).collect(),
        }))
    }
}

/// One keyword and the reference it dispatches to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEntry {
    pub keyword: String,
    pub reference: String,
}

/// A keyword vocabulary and its reference table, declared as one ordered mapping.
///
/// Expands to two groups that cannot drift apart: `names_module` (keywords) and `refs_module` (references).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryDeclaration {
    pub names_module: String,
    pub refs_module: String,
    pub type_signature: String,
    pub entries: Vec<RegistryEntry>,
}

impl RegistryDeclaration {
    pub fn new(
        names_module: impl Into<String>,
        refs_module: impl Into<String>,
        type_signature: impl Into<String>,
    ) -> Self {
        Self {
            names_module: names_module.into(),
            refs_module: refs_module.into(),
            type_signature: type_signature.into(),
            entries: Vec::new(),
        }
    }

    /// Append one keyword → reference entry.
    pub fn entry(mut self, keyword: impl Into<String>, reference: impl Into<String>) -> Self {
        self.entries.push(RegistryEntry {
            keyword: keyword.into(),
            reference: reference.into(),
        });
        self
    }

    /// The two group declarations this registry stands for, names first.
    pub fn to_declarations(&self) -> [GroupDeclaration; 2] {
        let names = GroupDeclaration::keywords(&self.names_module, self.entries.iter().map(|e| e.keyword.clone()));
        let refs = GroupDeclaration::typed(
            &self.refs_module,
            &self.type_signature,
            self.entries.iter().map(|e| e.reference.clone()),
        );
        [names, refs]
    }
}

/// Declared positional partnership between two groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Correlation {
    pub names: String,
    pub refs: String,
}

impl Correlation {
    pub fn new(names: impl Into<String>, refs: impl Into<String>) -> Self {
        Self {
            names: names.into(),
            refs: refs.into(),
        }
    }
}

/// A top-level declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    Group(GroupDeclaration),
    Registry(RegistryDeclaration),
}

impl From<GroupDeclaration> for Declaration {
    fn from(decl: GroupDeclaration) -> Self {
        Declaration::Group(decl)
    }
}

impl From<RegistryDeclaration> for Declaration {
    fn from(decl: RegistryDeclaration) -> Self {
        Declaration::Registry(decl)
    }
}

/// Everything one generator run consumes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableSet {
    pub declarations: Vec<Declaration>,
    pub correlations: Vec<Correlation>,
}

impl TableSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a declaration (group or registry).
    pub fn with(mut self, decl: impl Into<Declaration>) -> Self {
        self.declarations.push(decl.into());
        self
    }

    /// Assert that `names` and `refs` are positional partners.
    pub fn correlate(mut self, names: impl Into<String>, refs: impl Into<String>) -> Self {
        self.correlations.push(Correlation::new(names, refs));
        self
    }

    /// Normalize every declaration in order. Registries contribute their two groups in place.
    ///
    /// Registries also register an implicit correlation, returned alongside the explicit ones.
    pub fn normalize(&self) -> Result<(Vec<Group>, Vec<Correlation>), DeclarationError> {
        let mut groups = Vec::new();
        let mut correlations = self.correlations.clone();

        for decl in &self.declarations {
            match decl {
                Declaration::Group(group) => groups.push(normalize(group)?),
                Declaration::Registry(registry) => {
                    for group in registry.to_declarations() {
                        groups.push(normalize(&group)?);
                    }
                    correlations.push(Correlation::new(&registry.names_module, &registry.refs_module));
                }
            }
        }

        Ok((groups, correlations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_name_is_string_list() {
        let group = normalize(&GroupDeclaration::keywords("commands", ["exit", "list"])).unwrap();
        assert_eq!(group.kind(), GroupKind::StringList);
        assert_eq!(group.declared_type(), "&[&str]");
        assert_eq!(group.const_name(), "COMMANDS");
    }

    #[test]
    fn test_pair_with_canonical_type_is_string_list() {
        let group = normalize(&GroupDeclaration::typed("processors", "& [ &str ]", ["input"])).unwrap();
        assert_eq!(group.kind(), GroupKind::StringList);
        assert_eq!(group.declared_type(), STRING_LIST_TYPE);
    }

    #[test]
    fn test_unknown_type_falls_back_to_typed_list() {
        let group = normalize(&GroupDeclaration::typed("ids", "&[u8]", ["1", "2"])).unwrap();
        assert_eq!(group.kind(), GroupKind::TypedList);
        assert_eq!(group.declared_type(), "&[u8]");
        assert!(group.index_constants().is_empty());
    }

    #[test]
    fn test_split_token_type_is_not_string_list() {
        let group = normalize(&GroupDeclaration::typed("names", "&[&s tr]", ["a"])).unwrap();
        assert_eq!(group.kind(), GroupKind::TypedList);
        assert_eq!(group.declared_type(), "&[&s tr]");
        assert!(group.index_constants().is_empty());
    }

    #[test]
    fn test_malformed_pair_is_rejected() {
        let three = GroupDeclaration::raw(vec!["a".into(), "T".into(), "extra".into()], ["x"]);
        assert_eq!(
            normalize(&three),
            Err(DeclarationError::MalformedHeader {
                module: "a".into(),
                arity: 3
            })
        );

        let empty = GroupDeclaration::raw(Vec::new(), ["x"]);
        assert!(matches!(
            normalize(&empty),
            Err(DeclarationError::MalformedHeader { arity: 0, .. })
        ));
    }

    #[test]
    fn test_index_constants_follow_item_order() {
        let group = normalize(&GroupDeclaration::keywords("commands", ["exit", "list", "rename"])).unwrap();
        let idx = group.index_constants();
        assert_eq!(
            idx,
            vec![
                IndexConstant {
                    name: "IDX_EXIT".into(),
                    position: 0
                },
                IndexConstant {
                    name: "IDX_LIST".into(),
                    position: 1
                },
                IndexConstant {
                    name: "IDX_RENAME".into(),
                    position: 2
                },
            ]
        );
    }

    #[test]
    fn test_registry_expands_in_place() {
        let set = TableSet::new()
            .with(GroupDeclaration::keywords("commands", ["exit"]))
            .with(
                RegistryDeclaration::new("processors", "processor_ctors", "&[fn() -> u8]")
                    .entry("input", "crate::input")
                    .entry("output", "crate::output"),
            );

        let (groups, correlations) = set.normalize().unwrap();
        let modules: Vec<&str> = groups.iter().map(Group::module).collect();
        assert_eq!(modules, ["commands", "processors", "processor_ctors"]);
        assert_eq!(groups[1].kind(), GroupKind::StringList);
        assert_eq!(groups[2].kind(), GroupKind::TypedList);
        assert_eq!(correlations, vec![Correlation::new("processors", "processor_ctors")]);
    }
}
