//! Validate normalized groups before anything is emitted.
//!
//! ## Notes
//!
//! - Checks run over the whole table set so that a failure anywhere aborts the run with no output.
//! - Keyword uniqueness is checked on the derived index constant name, so `ls` and `LS` collide.

use std::collections::HashMap;

use crate::errors::{DeclarationError, IdentRole};
use crate::group::{Correlation, Group};
use crate::naming;
use crate::rust_keywords::is_plain_ident;

/// Check one group: identifiers and keyword uniqueness.
pub fn check_group(group: &Group) -> Result<(), DeclarationError> {
    let module = group.module();
    require_ident(module, module, IdentRole::Module)?;
    require_ident(module, &group.const_name(), IdentRole::Table)?;

    if let Group::StringList(list) = group {
        let mut seen: HashMap<String, usize> = HashMap::new();
        for (position, keyword) in list.items.iter().enumerate() {
            let constant = naming::index_const_name(keyword);
            require_ident(module, &constant, IdentRole::IndexConstant)?;
            if let Some(first) = seen.insert(constant.clone(), position) {
                return Err(DeclarationError::DuplicateKeyword {
                    module: module.to_string(),
                    keyword: keyword.clone(),
                    constant,
                    first,
                    second: position,
                });
            }
        }
    }

    Ok(())
}

/// Check every group, then table-wide properties: unique modules and positional partners.
pub fn check_table(groups: &[Group], correlations: &[Correlation]) -> Result<(), DeclarationError> {
    let mut by_module: HashMap<&str, &Group> = HashMap::new();
    for group in groups {
        check_group(group)?;
        if by_module.insert(group.module(), group).is_some() {
            return Err(DeclarationError::DuplicateModule {
                module: group.module().to_string(),
            });
        }
    }

    for correlation in correlations {
        let lookup = |module: &str| {
            by_module
                .get(module)
                .copied()
                .ok_or_else(|| DeclarationError::UnknownCorrelationTarget {
                    module: module.to_string(),
                })
        };
        let names = lookup(&correlation.names)?;
        let refs = lookup(&correlation.refs)?;
        if names.len() != refs.len() {
            return Err(DeclarationError::CorrelationLength {
                names: correlation.names.clone(),
                names_len: names.len(),
                refs: correlation.refs.clone(),
                refs_len: refs.len(),
            });
        }
    }

    Ok(())
}

fn require_ident(module: &str, name: &str, role: IdentRole) -> Result<(), DeclarationError> {
    if is_plain_ident(name) {
        Ok(())
    } else {
        Err(DeclarationError::InvalidIdentifier {
            module: module.to_string(),
            name: name.to_string(),
            role,
        })
    }
}
