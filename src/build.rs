//! Constructors for synthetic AST fragments. Every node is built with `DUMMY_SP`
//! spans so the printer treats it as new code.

use serde_json::Value;
use swc_core::{
    common::{SyntaxContext, DUMMY_SP},
    ecma::ast::*,
};

use crate::classify::is_valid_import_specifier;

pub(crate) fn ident(name: &str) -> Ident {
    Ident::new(name.into(), DUMMY_SP, SyntaxContext::empty())
}

pub(crate) fn jsx_name(name: &str) -> JSXElementName {
    JSXElementName::Ident(ident(name))
}

pub(crate) fn jsx_attr_name(name: &str) -> JSXAttrName {
    JSXAttrName::Ident(IdentName::new(name.into(), DUMMY_SP))
}

pub(crate) fn expr_container(expr: Box<Expr>) -> JSXAttrValue {
    JSXAttrValue::JSXExprContainer(JSXExprContainer {
        span: DUMMY_SP,
        expr: JSXExpr::Expr(expr),
    })
}

fn str_node(value: &str) -> Str {
    Str {
        span: DUMMY_SP,
        value: value.into(),
        raw: None,
    }
}

/// `<name>{children}</name>`
pub fn create_element(name: &str, children: Vec<JSXElementChild>) -> JSXElement {
    JSXElement {
        span: DUMMY_SP,
        opening: JSXOpeningElement {
            name: jsx_name(name),
            attrs: vec![],
            self_closing: false,
            type_args: None,
            span: DUMMY_SP,
        },
        children,
        closing: Some(JSXClosingElement {
            span: DUMMY_SP,
            name: jsx_name(name),
        }),
    }
}

/// Strings become bare string literals (`"x"`); numbers, booleans and null are wrapped
/// in an expression container (`{1}`, `{false}`, `{null}`). Any other value yields
/// nothing.
pub fn create_literal_or_literal_expression(value: &Value) -> Option<JSXAttrValue> {
    let lit = match value {
        Value::String(s) => return Some(JSXAttrValue::Lit(create_string_literal(s))),
        Value::Bool(b) => Lit::Bool(Bool {
            span: DUMMY_SP,
            value: *b,
        }),
        Value::Null => Lit::Null(Null { span: DUMMY_SP }),
        Value::Number(n) => Lit::Num(Number {
            span: DUMMY_SP,
            value: n.as_f64()?,
            raw: None,
        }),
        Value::Array(_) | Value::Object(_) => return None,
    };
    Some(expr_container(Box::new(Expr::Lit(lit))))
}

pub fn create_string_literal(value: &str) -> Lit {
    Lit::Str(str_node(value))
}

/// One quasi of a template literal; `raw` and `cooked` carry the same text.
pub fn create_template_element(value: &str, tail: bool) -> TplElement {
    TplElement {
        span: DUMMY_SP,
        tail,
        cooked: Some(value.into()),
        raw: value.into(),
    }
}

/// Builds `` `Q1${E1}Q2${E2}...Qn` ``. Needs exactly one expression fewer than quasis.
pub fn create_template_literal<S: AsRef<str>>(
    quasis: &[S],
    expressions: Vec<Box<Expr>>,
) -> Option<Tpl> {
    if quasis.is_empty() || expressions.len() + 1 != quasis.len() {
        return None;
    }
    let last = quasis.len() - 1;
    Some(Tpl {
        span: DUMMY_SP,
        exprs: expressions,
        quasis: quasis
            .iter()
            .enumerate()
            .map(|(i, q)| create_template_element(q.as_ref(), i == last))
            .collect(),
    })
}

/// `{undefined}`: no literal node can carry the undefined value itself.
pub fn create_undefined_expression() -> JSXAttrValue {
    expr_container(Box::new(Expr::Ident(ident("undefined"))))
}

/// `{ name as alias }`; the local binding defaults to the imported name.
pub fn create_named_import_specifier(name: &str, alias: Option<&str>) -> ImportSpecifier {
    let local = alias.filter(|a| !a.is_empty()).unwrap_or(name);
    ImportSpecifier::Named(ImportNamedSpecifier {
        span: DUMMY_SP,
        local: ident(local),
        imported: (local != name).then(|| ModuleExportName::Ident(ident(name))),
        is_type_only: false,
    })
}

pub fn create_default_import_specifier(name: &str) -> ImportSpecifier {
    ImportSpecifier::Default(ImportDefaultSpecifier {
        span: DUMMY_SP,
        local: ident(name),
    })
}

/// Fails when no valid (named or default) specifier is left after filtering.
pub fn create_import_declaration(
    specifiers: Vec<ImportSpecifier>,
    path: &str,
) -> Option<ImportDecl> {
    let specifiers: Vec<ImportSpecifier> = specifiers
        .into_iter()
        .filter(|s| is_valid_import_specifier(s))
        .collect();
    if specifiers.is_empty() {
        return None;
    }
    Some(ImportDecl {
        span: DUMMY_SP,
        specifiers,
        src: Box::new(str_node(path)),
        type_only: false,
        with: None,
        phase: ImportPhase::Evaluation,
    })
}

/// Plain `name="value"` attribute, or value-less `name` when `value` is absent.
pub fn create_literal_attr(name: &str, value: Option<&str>) -> JSXAttrOrSpread {
    JSXAttrOrSpread::JSXAttr(JSXAttr {
        span: DUMMY_SP,
        name: jsx_attr_name(name),
        value: value
            .filter(|v| !v.is_empty())
            .map(|v| JSXAttrValue::Lit(create_string_literal(v))),
    })
}
