//! `className` resolution: merge new class names into whatever encoding the element
//! already uses, keeping that encoding where possible.
//!
//! 1. `className="old"`             > `className="old new"`
//! 2. `className={"old"}`           > `className="old new"` (also number literals)
//! 3. `` className={`old ${x}`} ``  > `` className={`old ${x} new`} ``
//! 4. `className={cx('old', ...)}`  > `className={cx('old', ..., 'new')}` (also `classnames`)
//! 5. `className={style.old}`       > `` className={`${style.old} new`} ``

use serde::Deserialize;
use swc_core::{common::DUMMY_SP, ecma::ast::*};
use tracing::debug;

use crate::{
    attributes::{create_attribute, find_attr},
    build::{create_string_literal, create_template_element},
    classify::callee_name,
};

const CLASS_NAME: &str = "className";
const CLASS_NAME_HELPERS: [&str; 2] = ["classnames", "cx"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassNameMode {
    #[default]
    Append,
    Prepend,
}

/// Encoding of an element's `className` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassNameShape {
    Absent,
    /// `className="a"`
    Literal,
    /// `className={"a"}`
    LiteralExpression,
    /// ``className={`a ${b}`}``
    TemplateLiteral,
    /// `className={cx(...)}` or `className={classnames(...)}`
    ClassNamesCall,
    /// Any other expression, e.g. `className={style.a}`
    Expression,
    /// Empty strings, element values and empty containers. Never rewritten.
    Unrecognized,
}

fn container_expr(attr: &JSXAttr) -> Option<&Expr> {
    match &attr.value {
        Some(JSXAttrValue::JSXExprContainer(JSXExprContainer {
            expr: JSXExpr::Expr(expr),
            ..
        })) => Some(expr),
        _ => None,
    }
}

pub fn is_literal_class_name(attr: &JSXAttr) -> bool {
    matches!(&attr.value, Some(JSXAttrValue::Lit(Lit::Str(s))) if !s.value.is_empty())
}

/// Truthy string or number literal in a container: `{"a"}` or `{5}`.
pub fn is_literal_expression(attr: &JSXAttr) -> bool {
    match container_expr(attr) {
        Some(Expr::Lit(Lit::Str(s))) => !s.value.is_empty(),
        Some(Expr::Lit(Lit::Num(n))) => n.value != 0.0 && !n.value.is_nan(),
        _ => false,
    }
}

pub fn is_template_literal_expression(attr: &JSXAttr) -> bool {
    matches!(container_expr(attr), Some(Expr::Tpl(tpl)) if !tpl.quasis.is_empty())
}

pub fn is_class_names_lib(attr: &JSXAttr) -> bool {
    match container_expr(attr) {
        Some(Expr::Call(call)) => callee_name(call)
            .map(|name| CLASS_NAME_HELPERS.contains(&name))
            .unwrap_or(false),
        _ => false,
    }
}

pub fn is_class_name_expression(attr: &JSXAttr) -> bool {
    container_expr(attr).is_some()
}

/// CSS Modules reference: `style.foo` or `styles.foo`.
pub fn is_css_module(attr: &JSXAttr) -> bool {
    match container_expr(attr) {
        Some(Expr::Member(MemberExpr {
            obj,
            prop: MemberProp::Ident(_),
            ..
        })) => matches!(&**obj, Expr::Ident(id) if matches!(&*id.sym, "style" | "styles")),
        _ => false,
    }
}

pub fn class_name_shape(el: &JSXElement) -> ClassNameShape {
    let Some(attr) = find_attr(&el.opening.attrs, CLASS_NAME) else {
        return ClassNameShape::Absent;
    };
    if is_literal_class_name(attr) {
        ClassNameShape::Literal
    } else if is_literal_expression(attr) {
        ClassNameShape::LiteralExpression
    } else if is_template_literal_expression(attr) {
        ClassNameShape::TemplateLiteral
    } else if is_class_names_lib(attr) {
        ClassNameShape::ClassNamesCall
    } else if is_class_name_expression(attr) {
        ClassNameShape::Expression
    } else {
        ClassNameShape::Unrecognized
    }
}

/// Joins two class strings with a single space in the order given by `mode`.
pub fn merge_class_names(existing: &str, new: &str, mode: ClassNameMode) -> String {
    let (first, second) = match mode {
        ClassNameMode::Append => (existing, new),
        ClassNameMode::Prepend => (new, existing),
    };
    format!("{first} {second}").trim().to_string()
}

fn class_name_attr_mut(el: &mut JSXElement) -> Option<&mut JSXAttr> {
    el.opening.attrs.iter_mut().find_map(|a| match a {
        JSXAttrOrSpread::JSXAttr(attr)
            if matches!(&attr.name, JSXAttrName::Ident(id) if &*id.sym == CLASS_NAME) =>
        {
            Some(attr)
        }
        _ => None,
    })
}

fn literal_text(attr: &JSXAttr) -> String {
    match (&attr.value, container_expr(attr)) {
        (Some(JSXAttrValue::Lit(Lit::Str(s))), _) | (_, Some(Expr::Lit(Lit::Str(s)))) => s.value.to_string(),
        (_, Some(Expr::Lit(Lit::Num(n)))) => n.value.to_string(),
        _ => String::new(),
    }
}

fn extend_template(tpl: &mut Tpl, class_names: &str, mode: ClassNameMode) {
    match mode {
        ClassNameMode::Append => {
            if let Some(last) = tpl.quasis.last_mut() {
                *last = create_template_element(&format!("{} {}", last.raw, class_names), true);
            }
        }
        ClassNameMode::Prepend => {
            if let Some(first) = tpl.quasis.first_mut() {
                *first = create_template_element(&format!("{} {}", class_names, first.raw), first.tail);
            }
        }
    }
}

/// Merges `class_names` into the element's `className`, creating the attribute when
/// it is missing. See the module docs for the supported encodings.
pub fn resolve_and_set_class_name_attr(el: &mut JSXElement, class_names: &str, mode: ClassNameMode) {
    let shape = class_name_shape(el);
    debug!(?shape, ?mode, class_names, "resolving className");

    if shape == ClassNameShape::Absent {
        if !class_names.is_empty() {
            el.opening.attrs.extend(create_attribute(CLASS_NAME, class_names));
        }
        return;
    }
    let Some(attr) = class_name_attr_mut(el) else {
        return;
    };

    match shape {
        ClassNameShape::Literal | ClassNameShape::LiteralExpression => {
            let merged = merge_class_names(&literal_text(attr), class_names, mode);
            attr.value = Some(JSXAttrValue::Lit(create_string_literal(&merged)));
        }
        ClassNameShape::TemplateLiteral => {
            if let Some(JSXAttrValue::JSXExprContainer(JSXExprContainer {
                expr: JSXExpr::Expr(expr),
                ..
            })) = &mut attr.value
            {
                if let Expr::Tpl(tpl) = &mut **expr {
                    extend_template(tpl, class_names, mode);
                }
            }
        }
        ClassNameShape::ClassNamesCall => {
            if let Some(JSXAttrValue::JSXExprContainer(JSXExprContainer {
                expr: JSXExpr::Expr(expr),
                ..
            })) = &mut attr.value
            {
                if let Expr::Call(call) = &mut **expr {
                    let arg = ExprOrSpread {
                        spread: None,
                        expr: Box::new(Expr::Lit(create_string_literal(class_names))),
                    };
                    match mode {
                        ClassNameMode::Append => call.args.push(arg),
                        ClassNameMode::Prepend => call.args.insert(0, arg),
                    }
                }
            }
        }
        ClassNameShape::Expression => {
            if let Some(JSXAttrValue::JSXExprContainer(container)) = &mut attr.value {
                if let JSXExpr::Expr(expr) = &mut container.expr {
                    let original = std::mem::replace(&mut **expr, Expr::Invalid(Invalid { span: DUMMY_SP }));
                    let (head, tail) = match mode {
                        ClassNameMode::Append => (String::new(), format!(" {class_names}")),
                        ClassNameMode::Prepend => (format!("{class_names} "), String::new()),
                    };
                    **expr = Expr::Tpl(Tpl {
                        span: DUMMY_SP,
                        exprs: vec![Box::new(original)],
                        quasis: vec![
                            create_template_element(&head, false),
                            create_template_element(&tail, true),
                        ],
                    });
                }
            }
        }
        ClassNameShape::Absent | ClassNameShape::Unrecognized => {}
    }
}
