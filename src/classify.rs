//! Structural predicates over the subset of JSX/ES node kinds the crate works with.
//!
//! Every predicate accepts anything convertible into a [`NodeRef`], including
//! `Option<&T>`, so a missing node is just another shape that answers `false`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use swc_core::ecma::ast::*;

static ATTRIBUTE_NAME: Lazy<Regex> = Lazy::new(|| {
    // `-` is the only punctuation allowed, e.g. `aria-disabled`
    Regex::new(r"(?i)^[a-z]+[\w-]*\w$").expect("attribute name pattern")
});

/// Borrowed view of a node, tagged by kind.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Element(&'a JSXElement),
    Fragment(&'a JSXFragment),
    OpeningElement(&'a JSXOpeningElement),
    ClosingElement(&'a JSXClosingElement),
    Attribute(&'a JSXAttr),
    SpreadAttribute(&'a SpreadElement),
    Identifier(&'a Ident),
    Literal(&'a Lit),
    ExpressionContainer(&'a JSXExprContainer),
    TemplateLiteral(&'a Tpl),
    TemplateElement(&'a TplElement),
    CallExpression(&'a CallExpr),
    MemberExpression(&'a MemberExpr),
    ObjectExpression(&'a ObjectLit),
    Property(&'a Prop),
    ImportDeclaration(&'a ImportDecl),
    ImportSpecifier(&'a ImportSpecifier),
    Text(&'a JSXText),
    VariableDeclaration(&'a VarDecl),
    ReturnStatement(&'a ReturnStmt),
    ArrowFunction(&'a ArrowExpr),
    FunctionDeclaration(&'a FnDecl),
    /// A node outside the recognized subset.
    Other,
    /// No node at all.
    Missing,
}

macro_rules! node_ref_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl<'a> From<&'a $ty> for NodeRef<'a> {
                fn from(node: &'a $ty) -> Self {
                    NodeRef::$variant(node)
                }
            }
        )*
    };
}

node_ref_from! {
    JSXElement => Element,
    JSXFragment => Fragment,
    JSXOpeningElement => OpeningElement,
    JSXClosingElement => ClosingElement,
    JSXAttr => Attribute,
    SpreadElement => SpreadAttribute,
    Ident => Identifier,
    Lit => Literal,
    JSXExprContainer => ExpressionContainer,
    Tpl => TemplateLiteral,
    TplElement => TemplateElement,
    CallExpr => CallExpression,
    MemberExpr => MemberExpression,
    ObjectLit => ObjectExpression,
    Prop => Property,
    ImportDecl => ImportDeclaration,
    ImportSpecifier => ImportSpecifier,
    JSXText => Text,
    VarDecl => VariableDeclaration,
    ReturnStmt => ReturnStatement,
    ArrowExpr => ArrowFunction,
    FnDecl => FunctionDeclaration,
}

impl<'a> From<&'a Expr> for NodeRef<'a> {
    fn from(expr: &'a Expr) -> Self {
        match expr {
            Expr::JSXElement(el) => NodeRef::Element(el),
            Expr::JSXFragment(frag) => NodeRef::Fragment(frag),
            Expr::Ident(id) => NodeRef::Identifier(id),
            Expr::Lit(lit) => NodeRef::Literal(lit),
            Expr::Tpl(tpl) => NodeRef::TemplateLiteral(tpl),
            Expr::Call(call) => NodeRef::CallExpression(call),
            Expr::Member(member) => NodeRef::MemberExpression(member),
            Expr::Object(obj) => NodeRef::ObjectExpression(obj),
            Expr::Arrow(arrow) => NodeRef::ArrowFunction(arrow),
            Expr::Paren(paren) => NodeRef::from(&*paren.expr),
            _ => NodeRef::Other,
        }
    }
}

impl<'a> From<&'a Box<Expr>> for NodeRef<'a> {
    fn from(expr: &'a Box<Expr>) -> Self {
        NodeRef::from(&**expr)
    }
}

impl<'a> From<&'a JSXElementChild> for NodeRef<'a> {
    fn from(child: &'a JSXElementChild) -> Self {
        match child {
            JSXElementChild::JSXText(text) => NodeRef::Text(text),
            JSXElementChild::JSXExprContainer(container) => NodeRef::ExpressionContainer(container),
            JSXElementChild::JSXElement(el) => NodeRef::Element(el),
            JSXElementChild::JSXFragment(frag) => NodeRef::Fragment(frag),
            JSXElementChild::JSXSpreadChild(_) => NodeRef::Other,
        }
    }
}

impl<'a> From<&'a JSXAttrOrSpread> for NodeRef<'a> {
    fn from(attr: &'a JSXAttrOrSpread) -> Self {
        match attr {
            JSXAttrOrSpread::JSXAttr(attr) => NodeRef::Attribute(attr),
            JSXAttrOrSpread::SpreadElement(spread) => NodeRef::SpreadAttribute(spread),
        }
    }
}

impl<'a> From<&'a JSXAttrValue> for NodeRef<'a> {
    fn from(value: &'a JSXAttrValue) -> Self {
        match value {
            JSXAttrValue::Lit(lit) => NodeRef::Literal(lit),
            JSXAttrValue::JSXExprContainer(container) => NodeRef::ExpressionContainer(container),
            JSXAttrValue::JSXElement(el) => NodeRef::Element(el),
            JSXAttrValue::JSXFragment(frag) => NodeRef::Fragment(frag),
        }
    }
}

impl<'a> From<&'a Stmt> for NodeRef<'a> {
    fn from(stmt: &'a Stmt) -> Self {
        match stmt {
            Stmt::Return(ret) => NodeRef::ReturnStatement(ret),
            Stmt::Decl(Decl::Var(var)) => NodeRef::VariableDeclaration(var),
            Stmt::Decl(Decl::Fn(f)) => NodeRef::FunctionDeclaration(f),
            Stmt::Expr(expr_stmt) => NodeRef::from(&*expr_stmt.expr),
            _ => NodeRef::Other,
        }
    }
}

impl<'a> From<&'a ModuleItem> for NodeRef<'a> {
    fn from(item: &'a ModuleItem) -> Self {
        match item {
            ModuleItem::ModuleDecl(ModuleDecl::Import(import)) => NodeRef::ImportDeclaration(import),
            ModuleItem::ModuleDecl(_) => NodeRef::Other,
            ModuleItem::Stmt(stmt) => NodeRef::from(stmt),
        }
    }
}

impl<'a, T> From<Option<&'a T>> for NodeRef<'a>
where
    &'a T: Into<NodeRef<'a>>,
{
    fn from(node: Option<&'a T>) -> Self {
        node.map(Into::into).unwrap_or(NodeRef::Missing)
    }
}

// -----------------------------------------------------------------------------
// Node predicates
// -----------------------------------------------------------------------------

pub fn is_element<'a>(node: impl Into<NodeRef<'a>>) -> bool {
    matches!(node.into(), NodeRef::Element(_))
}

/// Intrinsic (lower-case) tags such as `<div>`, as opposed to component references.
pub fn is_html_element<'a>(node: impl Into<NodeRef<'a>>) -> bool {
    match node.into() {
        NodeRef::Element(el) => match &el.opening.name {
            JSXElementName::Ident(id) => id
                .sym
                .chars()
                .next()
                .map(|c| c.is_ascii_lowercase())
                .unwrap_or(false),
            _ => false,
        },
        _ => false,
    }
}

pub fn is_fragment<'a>(node: impl Into<NodeRef<'a>>) -> bool {
    matches!(node.into(), NodeRef::Fragment(_))
}

pub fn is_attribute<'a>(node: impl Into<NodeRef<'a>>) -> bool {
    matches!(node.into(), NodeRef::Attribute(_))
}

pub fn is_text<'a>(node: impl Into<NodeRef<'a>>) -> bool {
    matches!(node.into(), NodeRef::Text(_))
}

pub fn is_literal<'a>(node: impl Into<NodeRef<'a>>) -> bool {
    matches!(node.into(), NodeRef::Literal(_))
}

pub fn is_template_literal<'a>(node: impl Into<NodeRef<'a>>) -> bool {
    matches!(node.into(), NodeRef::TemplateLiteral(_))
}

/// JSX expression container, i.e. `{...}`.
pub fn is_expression<'a>(node: impl Into<NodeRef<'a>>) -> bool {
    matches!(node.into(), NodeRef::ExpressionContainer(_))
}

pub fn is_arrow<'a>(node: impl Into<NodeRef<'a>>) -> bool {
    matches!(node.into(), NodeRef::ArrowFunction(_))
}

pub fn is_object<'a>(node: impl Into<NodeRef<'a>>) -> bool {
    matches!(node.into(), NodeRef::ObjectExpression(_))
}

pub fn is_import<'a>(node: impl Into<NodeRef<'a>>) -> bool {
    matches!(node.into(), NodeRef::ImportDeclaration(_))
}

pub fn is_function<'a>(node: impl Into<NodeRef<'a>>) -> bool {
    matches!(node.into(), NodeRef::FunctionDeclaration(_))
}

pub fn is_return<'a>(node: impl Into<NodeRef<'a>>) -> bool {
    matches!(node.into(), NodeRef::ReturnStatement(_))
}

pub fn is_variable_declaration<'a>(node: impl Into<NodeRef<'a>>) -> bool {
    matches!(node.into(), NodeRef::VariableDeclaration(_))
}

/// Named or default specifier. Namespace specifiers (`* as x`) are not valid here.
pub fn is_valid_import_specifier<'a>(node: impl Into<NodeRef<'a>>) -> bool {
    matches!(
        node.into(),
        NodeRef::ImportSpecifier(ImportSpecifier::Named(_) | ImportSpecifier::Default(_))
    )
}

/// Call whose callee is a plain identifier; member and computed callees are excluded.
pub fn is_function_call<'a>(node: impl Into<NodeRef<'a>>) -> bool {
    callee_name(node).is_some()
}

pub fn is_call_of<'a>(node: impl Into<NodeRef<'a>>, name: &str) -> bool {
    callee_name(node).map(|callee| callee == name).unwrap_or(false)
}

pub(crate) fn callee_name<'a>(node: impl Into<NodeRef<'a>>) -> Option<&'a str> {
    match node.into() {
        NodeRef::CallExpression(call) => match &call.callee {
            Callee::Expr(expr) => match &**expr {
                Expr::Ident(id) => Some(&*id.sym),
                _ => None,
            },
            _ => None,
        },
        _ => None,
    }
}

/// Shapes accepted as an attribute value without further wrapping.
pub fn is_valid_attr_value<'a>(node: impl Into<NodeRef<'a>>) -> bool {
    matches!(
        node.into(),
        NodeRef::Missing
            | NodeRef::ArrowFunction(_)
            | NodeRef::Literal(_)
            | NodeRef::ExpressionContainer(_)
    )
}

// -----------------------------------------------------------------------------
// Value predicates
// -----------------------------------------------------------------------------

/// Raw scalar (null, bool, number or string) that still needs wrapping into a node.
pub fn is_primitive(value: &Value) -> bool {
    matches!(
        value,
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_)
    )
}

pub fn is_truthy_string(value: &Value) -> bool {
    matches!(value, Value::String(s) if !s.is_empty())
}

pub fn is_valid_attribute_name(name: &str) -> bool {
    !name.is_empty() && ATTRIBUTE_NAME.is_match(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{create_element, create_string_literal, create_undefined_expression};
    use serde_json::json;
    use swc_core::common::{SyntaxContext, DUMMY_SP};

    fn ident_expr(name: &str) -> Expr {
        Expr::Ident(Ident::new(name.into(), DUMMY_SP, SyntaxContext::empty()))
    }

    #[test]
    fn missing_nodes_are_never_classified() {
        let none: Option<&Expr> = None;
        assert!(!is_element(none));
        assert!(!is_literal(none));
        assert!(!is_import(None::<&ModuleItem>));
    }

    #[test]
    fn html_element_requires_lower_case_tag() {
        let div = create_element("div", vec![]);
        let button = create_element("Button", vec![]);
        assert!(is_element(&div));
        assert!(is_html_element(&div));
        assert!(!is_html_element(&button));
    }

    #[test]
    fn function_call_needs_named_callee() {
        let call = CallExpr {
            span: DUMMY_SP,
            ctxt: SyntaxContext::empty(),
            callee: Callee::Expr(Box::new(ident_expr("cx"))),
            args: vec![],
            type_args: None,
        };
        assert!(is_function_call(&call));
        assert!(is_call_of(&call, "cx"));
        assert!(!is_call_of(&call, "classnames"));

        let member_call = CallExpr {
            callee: Callee::Expr(Box::new(Expr::Member(MemberExpr {
                span: DUMMY_SP,
                obj: Box::new(ident_expr("utils")),
                prop: MemberProp::Ident(IdentName::new("cx".into(), DUMMY_SP)),
            }))),
            ..call
        };
        assert!(!is_function_call(&member_call));
    }

    #[test]
    fn valid_attr_values() {
        assert!(is_valid_attr_value(None::<&JSXAttrValue>));
        let lit = create_string_literal("x");
        assert!(is_valid_attr_value(&lit));
        let undefined = create_undefined_expression();
        assert!(is_valid_attr_value(&undefined));
        let el = create_element("span", vec![]);
        assert!(!is_valid_attr_value(&el));
    }

    #[test]
    fn primitives_and_strings() {
        assert!(is_primitive(&json!(null)));
        assert!(is_primitive(&json!(3)));
        assert!(is_primitive(&json!("a")));
        assert!(!is_primitive(&json!([1])));
        assert!(!is_primitive(&json!({})));
        assert!(is_truthy_string(&json!("a")));
        assert!(!is_truthy_string(&json!("")));
        assert!(!is_truthy_string(&json!(1)));
    }

    #[test]
    fn attribute_names() {
        for ok in ["id", "aria-label", "attribute5", "dataTestId", "A_b"] {
            assert!(is_valid_attribute_name(ok), "{ok} should be valid");
        }
        for bad in ["", "0attribute", "-attribute", "attribute-", "att:ribute", "a"] {
            assert!(!is_valid_attribute_name(bad), "{bad} should be invalid");
        }
    }
}
