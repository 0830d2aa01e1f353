//! Tree utilities: child filtering, attribute value extraction, call unwrapping and
//! whole-module element passes.

use swc_core::ecma::{
    ast::*,
    visit::{noop_visit_mut_type, VisitMut, VisitMutWith},
};
use tracing::{debug, trace};

use crate::{
    attributes::Primitive,
    build::jsx_name,
    classify::{is_call_of, NodeRef},
    error::{Error, Result},
};

/// Children without the whitespace-only text nodes that formatting leaves between
/// elements.
pub fn get_meaningful_children(children: &[JSXElementChild]) -> Vec<&JSXElementChild> {
    children
        .iter()
        .filter(|child| !matches!(child, JSXElementChild::JSXText(text) if text.value.trim().is_empty()))
        .collect()
}

/// Value carried by an attribute, as read back from the tree.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeValue<'a> {
    Primitive(Primitive),
    /// Anything that is not a plain literal, including regex and template literals.
    Expr(&'a Expr),
}

fn lit_primitive(lit: &Lit) -> Option<Primitive> {
    match lit {
        Lit::Str(s) => Some(Primitive::Str(s.value.to_string())),
        Lit::Num(n) => Some(Primitive::Num(n.value)),
        Lit::Bool(b) => Some(Primitive::Bool(b.value)),
        Lit::Null(_) => Some(Primitive::Null),
        _ => None,
    }
}

fn attr_label(attr: &JSXAttr) -> String {
    match &attr.name {
        JSXAttrName::Ident(id) => id.sym.to_string(),
        JSXAttrName::JSXNamespacedName(ns) => format!("{}:{}", ns.ns.sym, ns.name.sym),
    }
}

/// Reads the value of `attr`.
///
/// A value-less attribute reads as `true`; `{undefined}`, `{}` and element values
/// read as nothing.
pub fn get_node_value(attr: &JSXAttr) -> Option<NodeValue<'_>> {
    let Some(value) = &attr.value else {
        return Some(NodeValue::Primitive(Primitive::Bool(true)));
    };
    match value {
        JSXAttrValue::Lit(lit) => lit_primitive(lit).map(NodeValue::Primitive),
        JSXAttrValue::JSXExprContainer(JSXExprContainer {
            expr: JSXExpr::Expr(expr),
            ..
        }) => match &**expr {
            Expr::Ident(id) if &*id.sym == "undefined" => None,
            Expr::Lit(lit) => Some(
                lit_primitive(lit)
                    .map(NodeValue::Primitive)
                    .unwrap_or(NodeValue::Expr(&**expr)),
            ),
            other => Some(NodeValue::Expr(other)),
        },
        _ => None,
    }
}

/// String value of `name="x"` or `name={"x"}`.
///
/// Any other expression inside a container is an error, the caller is expected to
/// handle computed values itself.
pub fn extract_string_prop_value(attr: &JSXAttr) -> Result<Option<String>> {
    match &attr.value {
        Some(JSXAttrValue::Lit(Lit::Str(s))) => Ok(Some(s.value.to_string())),
        Some(JSXAttrValue::JSXExprContainer(container)) => match &container.expr {
            JSXExpr::Expr(expr) => match &**expr {
                Expr::Lit(Lit::Str(s)) => Ok(Some(s.value.to_string())),
                _ => Err(Error::NonLiteralExpression(attr_label(attr))),
            },
            JSXExpr::JSXEmptyExpr(_) => Err(Error::NonLiteralExpression(attr_label(attr))),
        },
        _ => Ok(None),
    }
}

pub fn is_function_call_of<'a>(node: impl Into<NodeRef<'a>>, name: &str) -> bool {
    is_call_of(node, name)
}

/// Replaces a call expression with its first argument. Calls without a plain first
/// argument are left alone.
pub fn unwrap_function_call(expr: &mut Expr) -> bool {
    let Expr::Call(call) = expr else {
        return false;
    };
    match call.args.first() {
        Some(ExprOrSpread { spread: None, .. }) => {}
        _ => {
            trace!("call has no unwrappable first argument");
            return false;
        }
    }
    let arg = call.args.swap_remove(0);
    *expr = *arg.expr;
    true
}

struct CallUnwrapper<'a> {
    name: &'a str,
    count: usize,
}

impl VisitMut for CallUnwrapper<'_> {
    noop_visit_mut_type!();

    fn visit_mut_expr(&mut self, expr: &mut Expr) {
        expr.visit_mut_children_with(self);
        if is_call_of(&*expr, self.name) && unwrap_function_call(expr) {
            self.count += 1;
        }
    }
}

/// Unwraps every call to `name` in `module`, innermost first, so `f(f(x))` becomes
/// `x`. Returns the number of calls removed.
pub fn unwrap_from_function(module: &mut Module, name: &str) -> usize {
    if name.is_empty() {
        return 0;
    }
    let mut unwrapper = CallUnwrapper { name, count: 0 };
    module.visit_mut_with(&mut unwrapper);
    debug!(name, count = unwrapper.count, "unwrapped function calls");
    unwrapper.count
}

/// Plain identifier name of an element (`Box`, not `Foo.Bar` or `svg:path`).
pub fn element_name(el: &JSXElement) -> Option<&str> {
    match &el.opening.name {
        JSXElementName::Ident(id) => Some(&*id.sym),
        _ => None,
    }
}

/// Renames the opening tag and, if present, the closing tag.
pub fn rename_element(el: &mut JSXElement, new_name: &str) {
    el.opening.name = jsx_name(new_name);
    if let Some(closing) = &mut el.closing {
        closing.name = jsx_name(new_name);
    }
}

struct ElementVisitor<F> {
    f: F,
}

impl<F: FnMut(&mut JSXElement)> VisitMut for ElementVisitor<F> {
    noop_visit_mut_type!();

    fn visit_mut_jsx_element(&mut self, el: &mut JSXElement) {
        el.visit_mut_children_with(self);
        (self.f)(el);
    }
}

/// Calls `f` on every JSX element in `module`, children before their parents.
pub fn for_each_element_mut<F: FnMut(&mut JSXElement)>(module: &mut Module, f: F) {
    module.visit_mut_with(&mut ElementVisitor { f });
}

/// Renames every `<old_name>` element in `module`. Returns how many were renamed.
pub fn rename_all_elements(module: &mut Module, old_name: &str, new_name: &str) -> usize {
    let mut count = 0;
    for_each_element_mut(module, |el| {
        if element_name(el) == Some(old_name) {
            rename_element(el, new_name);
            count += 1;
        }
    });
    debug!(old_name, new_name, count, "renamed elements");
    count
}
