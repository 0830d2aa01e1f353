//! Import registry: inspect and edit the top-level import declarations of a module.

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;
use swc_core::ecma::ast::*;
use tracing::{debug, trace};

use crate::{
    build::{create_import_declaration, create_named_import_specifier},
    classify::NodeRef,
    matcher::{is_string_matching, Matcher},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SpecifierKind {
    #[serde(rename = "ImportDefaultSpecifier")]
    Default,
    #[serde(rename = "ImportSpecifier")]
    Named,
    #[serde(rename = "ImportNamespaceSpecifier")]
    Namespace,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecifierInfo {
    /// Local binding name.
    pub alias: String,
    #[serde(rename = "type")]
    pub kind: SpecifierKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportKind {
    Default,
    Named,
    Mixed,
}

fn specifier_kind(specifier: &ImportSpecifier) -> SpecifierKind {
    match specifier {
        ImportSpecifier::Default(_) => SpecifierKind::Default,
        ImportSpecifier::Named(_) => SpecifierKind::Named,
        ImportSpecifier::Namespace(_) => SpecifierKind::Namespace,
    }
}

fn local_name(specifier: &ImportSpecifier) -> &str {
    match specifier {
        ImportSpecifier::Default(s) => &s.local.sym,
        ImportSpecifier::Named(s) => &s.local.sym,
        ImportSpecifier::Namespace(s) => &s.local.sym,
    }
}

/// Exported name of a named specifier (`Card` in `Card as Box`).
fn imported_name(specifier: &ImportSpecifier) -> Option<&str> {
    match specifier {
        ImportSpecifier::Named(named) => Some(match &named.imported {
            Some(ModuleExportName::Ident(id)) => &*id.sym,
            Some(ModuleExportName::Str(s)) => &*s.value,
            None => &*named.local.sym,
        }),
        _ => None,
    }
}

fn imports(module: &Module) -> impl Iterator<Item = &ImportDecl> {
    module.body.iter().filter_map(|item| match item {
        ModuleItem::ModuleDecl(ModuleDecl::Import(import)) => Some(import),
        _ => None,
    })
}

fn imports_mut(module: &mut Module) -> impl Iterator<Item = &mut ImportDecl> {
    module.body.iter_mut().filter_map(|item| match item {
        ModuleItem::ModuleDecl(ModuleDecl::Import(import)) => Some(import),
        _ => None,
    })
}

// -----------------------------------------------------------------------------
// Inspection
// -----------------------------------------------------------------------------

pub fn is_import_matched_by_import_path(matcher: &Matcher, import: Option<&ImportDecl>) -> bool {
    import.map(|i| matcher.matches(&i.src.value)).unwrap_or(false)
}

/// Specifiers keyed by imported name (local name for default and namespace
/// specifiers), in source order. `None` when `node` is not an import declaration.
pub fn get_specifier_names_from_import<'a>(
    node: impl Into<NodeRef<'a>>,
    kind: Option<SpecifierKind>,
) -> Option<IndexMap<String, SpecifierInfo>> {
    let NodeRef::ImportDeclaration(import) = node.into() else {
        return None;
    };
    Some(
        import
            .specifiers
            .iter()
            .filter(|s| kind.map(|k| k == specifier_kind(s)).unwrap_or(true))
            .map(|s| {
                let alias = local_name(s).to_string();
                let key = imported_name(s).map(str::to_string).unwrap_or_else(|| alias.clone());
                (
                    key,
                    SpecifierInfo {
                        alias,
                        kind: specifier_kind(s),
                    },
                )
            })
            .collect(),
    )
}

/// True when some import whose source matches `import_source` binds a local name
/// matching `specifier_name`.
pub fn is_imported_from_source(module: &Module, specifier_name: &Matcher, import_source: &Matcher) -> bool {
    imports(module).any(|import| {
        is_import_matched_by_import_path(import_source, Some(import))
            && import
                .specifiers
                .iter()
                .any(|s| is_string_matching(Some(local_name(s)), specifier_name))
    })
}

pub fn has_fragment(import: &ImportDecl) -> bool {
    import
        .specifiers
        .iter()
        .any(|s| imported_name(s) == Some("Fragment"))
}

pub fn is_exclusively_default_import(import: &ImportDecl) -> bool {
    matches!(import.specifiers.as_slice(), [ImportSpecifier::Default(_)])
}

pub fn get_import_types(import: &ImportDecl) -> ImportKind {
    let has_default = import
        .specifiers
        .iter()
        .any(|s| matches!(s, ImportSpecifier::Default(_)));
    let has_named = import
        .specifiers
        .iter()
        .any(|s| matches!(s, ImportSpecifier::Named(_)));
    match (has_default, has_named) {
        (true, true) => ImportKind::Mixed,
        (true, false) => ImportKind::Default,
        _ => ImportKind::Named,
    }
}

fn has_named_specifier(import: &ImportDecl, name: &Matcher) -> bool {
    name.is_any()
        || import
            .specifiers
            .iter()
            .filter_map(imported_name)
            .any(|n| name.matches(n))
}

fn is_default_import_of(import: &ImportDecl, name: &Matcher) -> bool {
    is_exclusively_default_import(import)
        && (name.is_any() || import.specifiers.iter().any(|s| name.matches(local_name(s))))
}

/// Imports that are not default-only, carry a named specifier matching `name` and
/// come from a source matching `path`.
pub fn get_named_imports<'a>(module: &'a Module, name: &Matcher, path: &Matcher) -> Vec<&'a ImportDecl> {
    imports(module)
        .filter(|i| !is_exclusively_default_import(i) && has_named_specifier(i, name) && path.matches(&i.src.value))
        .collect()
}

/// Default-only imports whose local name matches `name` and source matches `path`.
pub fn get_default_imports<'a>(module: &'a Module, name: &Matcher, path: &Matcher) -> Vec<&'a ImportDecl> {
    imports(module)
        .filter(|i| is_default_import_of(i, name) && path.matches(&i.src.value))
        .collect()
}

pub fn is_named_imported_from_path(module: &Module, name: &Matcher, path: &Matcher) -> bool {
    !get_named_imports(module, name, path).is_empty()
}

pub fn is_default_imported_from_path(module: &Module, name: &Matcher, path: &Matcher) -> bool {
    !get_default_imports(module, name, path).is_empty()
}

// -----------------------------------------------------------------------------
// Editing
// -----------------------------------------------------------------------------

/// Adds `Fragment as F` to every value import from `react` that lacks `Fragment`.
pub fn import_fragment(module: &mut Module) -> usize {
    let mut count = 0;
    for import in imports_mut(module) {
        if &*import.src.value == "react" && !import.type_only && !has_fragment(import) {
            import
                .specifiers
                .push(create_named_import_specifier("Fragment", Some("F")));
            count += 1;
        }
    }
    debug!(count, "imported Fragment");
    count
}

/// Removes named specifiers matching `name` from imports whose source matches `path`.
/// Declarations emptied by the removal are dropped; default specifiers and
/// side-effect imports stay. Returns the number of specifiers removed.
pub fn remove_named_imports(module: &mut Module, name: &Matcher, path: &Matcher) -> usize {
    let mut removed = 0;
    module.body.retain_mut(|item| {
        let ModuleItem::ModuleDecl(ModuleDecl::Import(import)) = item else {
            return true;
        };
        if import.specifiers.is_empty()
            || is_exclusively_default_import(import)
            || !has_named_specifier(import, name)
            || !path.matches(&import.src.value)
        {
            return true;
        }
        let before = import.specifiers.len();
        import
            .specifiers
            .retain(|s| imported_name(s).map(|n| !name.matches(n)).unwrap_or(true));
        let dropped = before - import.specifiers.len();
        removed += dropped;
        if dropped > 0 && import.specifiers.is_empty() {
            debug!(source = %import.src.value, "removing emptied import declaration");
            return false;
        }
        true
    });
    removed
}

/// Removes default-only imports whose local name and source match. Returns the
/// number of declarations removed.
pub fn remove_default_imports(module: &mut Module, name: &Matcher, path: &Matcher) -> usize {
    let before = module.body.len();
    module.body.retain(|item| match item {
        ModuleItem::ModuleDecl(ModuleDecl::Import(import)) => {
            !(is_default_import_of(import, name) && path.matches(&import.src.value))
        }
        _ => true,
    });
    before - module.body.len()
}

/// Named specifiers can only join a value import that has no `* as ns` binding.
fn accepts_named_specifiers(import: &ImportDecl) -> bool {
    !import.type_only
        && !import
            .specifiers
            .iter()
            .any(|s| matches!(s, ImportSpecifier::Namespace(_)))
}

/// Ensures every name in `names` is imported from a source matching `path`.
///
/// Names already bound by a matching import, as imported name or local alias, are
/// skipped. The rest go to the first matching import that can take named
/// specifiers. Without one a new declaration is inserted after the last import (or
/// at the top of the module); that needs an exact path to use as the source.
pub fn add_named_imports<S: AsRef<str>>(module: &mut Module, path: &Matcher, names: &[S]) {
    let names: IndexSet<&str> = names.iter().map(AsRef::as_ref).filter(|n| !n.is_empty()).collect();
    if path.is_any() || names.is_empty() {
        debug!("add_named_imports called without a path or names");
        return;
    }

    let bound: IndexSet<String> = imports(module)
        .filter(|i| path.matches(&i.src.value))
        .filter_map(|i| get_specifier_names_from_import(i, None))
        .flat_map(|found| found.into_iter().flat_map(|(key, info)| [key, info.alias]))
        .collect();
    let missing: Vec<&str> = names.into_iter().filter(|n| !bound.contains(*n)).collect();
    if missing.is_empty() {
        trace!("every name is already imported");
        return;
    }
    let specifiers = missing.iter().map(|n| create_named_import_specifier(n, None));

    if let Some(import) = imports_mut(module).find(|i| path.matches(&i.src.value) && accepts_named_specifiers(i)) {
        import.specifiers.extend(specifiers);
        return;
    }

    let Some(source) = path.as_exact() else {
        debug!("no import can take the names and the path is a pattern; nothing to create");
        return;
    };
    let Some(decl) = create_import_declaration(specifiers.collect(), source) else {
        return;
    };
    let at = module
        .body
        .iter()
        .rposition(|item| matches!(item, ModuleItem::ModuleDecl(ModuleDecl::Import(_))))
        .map(|idx| idx + 1)
        .unwrap_or(0);
    debug!(source, at, "inserting new import declaration");
    module.body.insert(at, ModuleItem::ModuleDecl(ModuleDecl::Import(decl)));
}
