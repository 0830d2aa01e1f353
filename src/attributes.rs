//! Attribute engine: read and mutate the attribute list of a single JSX element.
//!
//! Mutators take the element by `&mut` and hand back the updated attribute slice, so
//! any attribute reference captured before a call cannot outlive a replacement.
//! Invalid input degrades to a no-op instead of an error (see [`create_attribute`]).

use serde::Deserialize;
use serde_json::Value;
use swc_core::{common::DUMMY_SP, ecma::ast::*};
use tracing::{debug, trace};

use crate::{
    build::{create_literal_or_literal_expression, create_undefined_expression, expr_container, jsx_attr_name},
    classify::{is_valid_attribute_name, NodeRef},
    error::{Error, Result},
};

// -----------------------------------------------------------------------------
// Attribute values
// -----------------------------------------------------------------------------

/// Raw scalar accepted as an attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Null,
    Bool(bool),
    Num(f64),
    Str(String),
}

impl Primitive {
    fn to_json(&self) -> Value {
        match self {
            Primitive::Null => Value::Null,
            Primitive::Bool(b) => Value::Bool(*b),
            Primitive::Num(n) => serde_json::Number::from_f64(*n)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            Primitive::Str(s) => Value::String(s.clone()),
        }
    }
}

/// Every shape a caller may hand over as a new attribute value.
///
/// `Unsupported` records what was passed (object, array, ...) so strict callers can
/// report it; the lenient path turns it into a value-less attribute.
#[derive(Debug, Clone)]
pub enum AttrValue {
    Primitive(Primitive),
    Undefined,
    Template(Tpl),
    Node(JSXAttrValue),
    Unsupported(&'static str),
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Primitive(Primitive::Str(value.to_string()))
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Primitive(Primitive::Str(value))
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Primitive(Primitive::Bool(value))
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Primitive(Primitive::Num(value))
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Primitive(Primitive::Num(value as f64))
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        AttrValue::Primitive(Primitive::Num(f64::from(value)))
    }
}

impl From<Primitive> for AttrValue {
    fn from(value: Primitive) -> Self {
        AttrValue::Primitive(value)
    }
}

impl From<Value> for AttrValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => AttrValue::Primitive(Primitive::Null),
            Value::Bool(b) => b.into(),
            Value::Number(n) => match n.as_f64() {
                Some(n) => n.into(),
                None => AttrValue::Unsupported("number"),
            },
            Value::String(s) => s.into(),
            Value::Array(_) => AttrValue::Unsupported("array"),
            Value::Object(_) => AttrValue::Unsupported("object"),
        }
    }
}

impl From<Tpl> for AttrValue {
    fn from(value: Tpl) -> Self {
        AttrValue::Template(value)
    }
}

impl From<JSXAttrValue> for AttrValue {
    fn from(value: JSXAttrValue) -> Self {
        AttrValue::Node(value)
    }
}

impl From<ArrowExpr> for AttrValue {
    fn from(value: ArrowExpr) -> Self {
        AttrValue::Node(expr_container(Box::new(Expr::Arrow(value))))
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(AttrValue::Undefined)
    }
}

impl AttrValue {
    /// Resolves into the node stored on the attribute. `None` means value-less, which
    /// is how `true` is rendered (`disabled` rather than `disabled={true}`).
    fn into_node(self) -> Option<JSXAttrValue> {
        match self {
            AttrValue::Primitive(Primitive::Bool(true)) => None,
            AttrValue::Primitive(p) => create_literal_or_literal_expression(&p.to_json()),
            AttrValue::Undefined => Some(create_undefined_expression()),
            AttrValue::Template(tpl) => Some(expr_container(Box::new(Expr::Tpl(tpl)))),
            AttrValue::Node(node) => Some(node).filter(|v| !is_true_expression(v)),
            AttrValue::Unsupported(shape) => {
                trace!(shape, "unsupported attribute value, dropping it");
                None
            }
        }
    }
}

/// True for `{true}`, the form that collapses to a value-less attribute.
fn is_true_expression(value: &JSXAttrValue) -> bool {
    matches!(
        value,
        JSXAttrValue::JSXExprContainer(JSXExprContainer {
            expr: JSXExpr::Expr(expr),
            ..
        }) if matches!(**expr, Expr::Lit(Lit::Bool(Bool { value: true, .. })))
    )
}

// -----------------------------------------------------------------------------
// Options
// -----------------------------------------------------------------------------

/// Name filter for [`get_attributes`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AttrQuery {
    pub wanted_names: Vec<String>,
    /// Return every attribute when the filter matches nothing.
    pub all_on_no_match: bool,
}

impl AttrQuery {
    pub fn names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            wanted_names: names.into_iter().map(Into::into).collect(),
            all_on_no_match: false,
        }
    }

    pub fn all_on_no_match(mut self, value: bool) -> Self {
        self.all_on_no_match = value;
        self
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AddOptions {
    pub override_existing: bool,
}

impl Default for AddOptions {
    fn default() -> Self {
        Self {
            override_existing: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpreadOptions {
    /// Remove the spread prop once its properties are inlined.
    pub cleanup: bool,
}

// -----------------------------------------------------------------------------
// Reading
// -----------------------------------------------------------------------------

/// Name of a plain attribute. Spread and namespaced attributes have none.
pub fn attr_name(attr: &JSXAttrOrSpread) -> Option<&str> {
    match attr {
        JSXAttrOrSpread::JSXAttr(JSXAttr {
            name: JSXAttrName::Ident(id),
            ..
        }) => Some(&*id.sym),
        _ => None,
    }
}

pub(crate) fn find_attr<'a>(attrs: &'a [JSXAttrOrSpread], name: &str) -> Option<&'a JSXAttr> {
    attrs.iter().find_map(|a| match a {
        JSXAttrOrSpread::JSXAttr(attr) if attr_name(a) == Some(name) => Some(attr),
        _ => None,
    })
}

fn find_attr_mut<'a>(attrs: &'a mut [JSXAttrOrSpread], name: &str) -> Option<&'a mut JSXAttr> {
    attrs.iter_mut().find_map(|a| {
        if attr_name(a) != Some(name) {
            return None;
        }
        match a {
            JSXAttrOrSpread::JSXAttr(attr) => Some(attr),
            JSXAttrOrSpread::SpreadElement(_) => None,
        }
    })
}

fn position_of(attrs: &[JSXAttrOrSpread], name: &str) -> Option<usize> {
    attrs.iter().position(|a| attr_name(a) == Some(name))
}

/// Attributes of `node` in source order, or `None` when `node` is not an element.
///
/// With a name filter only the wanted attributes are returned; when none of them
/// exist the result is empty unless `all_on_no_match` asks for the full list.
pub fn get_attributes<'a>(
    node: impl Into<NodeRef<'a>>,
    query: &AttrQuery,
) -> Option<Vec<&'a JSXAttrOrSpread>> {
    let NodeRef::Element(el) = node.into() else {
        return None;
    };
    let all: Vec<&JSXAttrOrSpread> = el.opening.attrs.iter().collect();
    let wanted: Vec<&str> = query
        .wanted_names
        .iter()
        .map(String::as_str)
        .filter(|n| !n.is_empty())
        .collect();
    if wanted.is_empty() || all.is_empty() {
        return Some(all);
    }

    let filtered: Vec<&JSXAttrOrSpread> = all
        .iter()
        .copied()
        .filter(|a| attr_name(a).map(|n| wanted.contains(&n)).unwrap_or(false))
        .collect();
    if filtered.is_empty() && query.all_on_no_match {
        return Some(all);
    }
    Some(filtered)
}

// -----------------------------------------------------------------------------
// Creating
// -----------------------------------------------------------------------------

/// Builds `name={value}`, or nothing when `name` is not a valid attribute name.
///
/// Values the crate cannot express (objects, arrays) silently produce a value-less
/// attribute; use [`create_attribute_strict`] to have them rejected instead.
pub fn create_attribute(name: &str, value: impl Into<AttrValue>) -> Option<JSXAttrOrSpread> {
    if !is_valid_attribute_name(name) {
        debug!(attr = %name, "refusing to create attribute with invalid name");
        return None;
    }
    Some(JSXAttrOrSpread::JSXAttr(JSXAttr {
        span: DUMMY_SP,
        name: jsx_attr_name(name),
        value: value.into().into_node(),
    }))
}

pub fn create_attribute_strict(name: &str, value: impl Into<AttrValue>) -> Result<JSXAttrOrSpread> {
    if !is_valid_attribute_name(name) {
        return Err(Error::InvalidAttributeName(name.to_string()));
    }
    match value.into() {
        AttrValue::Unsupported(shape) => Err(Error::UnsupportedValue {
            name: name.to_string(),
            shape,
        }),
        value => create_attribute(name, value).ok_or_else(|| Error::InvalidAttributeName(name.to_string())),
    }
}

// -----------------------------------------------------------------------------
// Mutating
// -----------------------------------------------------------------------------

/// Adds attributes, replacing same-named ones in place when `override_existing` is
/// set and leaving them untouched otherwise. Spread entries are ignored.
pub fn add_attributes<I>(el: &mut JSXElement, attributes: I, opts: AddOptions) -> &[JSXAttrOrSpread]
where
    I: IntoIterator<Item = JSXAttrOrSpread>,
{
    for attr in attributes {
        let Some(name) = attr_name(&attr).map(str::to_string) else {
            trace!("skipping non-attribute entry");
            continue;
        };
        let attrs = &mut el.opening.attrs;
        match position_of(attrs, &name) {
            Some(idx) if opts.override_existing => {
                trace!(attr = %name, idx, "overriding attribute");
                attrs[idx] = attr;
            }
            Some(_) => trace!(attr = %name, "keeping existing attribute"),
            None => attrs.push(attr),
        }
    }
    &el.opening.attrs
}

/// Appends attributes without any duplicate handling.
pub fn add_attrs<I>(el: &mut JSXElement, attributes: I) -> &[JSXAttrOrSpread]
where
    I: IntoIterator<Item = JSXAttrOrSpread>,
{
    el.opening.attrs.extend(
        attributes
            .into_iter()
            .filter(|a| matches!(a, JSXAttrOrSpread::JSXAttr(_))),
    );
    &el.opening.attrs
}

/// Drops the named attributes. Spread attributes always survive.
pub fn remove_attrs<'a, S: AsRef<str>>(el: &'a mut JSXElement, names: &[S]) -> &'a [JSXAttrOrSpread] {
    let names: Vec<&str> = names
        .iter()
        .map(AsRef::as_ref)
        .filter(|n| !n.is_empty())
        .collect();
    if names.is_empty() {
        debug!("remove_attrs called without names");
        return &el.opening.attrs;
    }
    el.opening.attrs.retain(|a| match a {
        JSXAttrOrSpread::SpreadElement(_) => true,
        _ => attr_name(a).map(|n| !names.contains(&n)).unwrap_or(true),
    });
    &el.opening.attrs
}

/// Renames the first attribute called `old_name`. Empty names are a no-op; a missing
/// attribute is an error.
pub fn rename_attr<'a>(el: &'a mut JSXElement, old_name: &str, new_name: &str) -> Result<&'a [JSXAttrOrSpread]> {
    if old_name.is_empty() || new_name.is_empty() {
        debug!(old = %old_name, new = %new_name, "rename_attr called with an empty name");
        return Ok(&el.opening.attrs);
    }
    let attr = find_attr_mut(&mut el.opening.attrs, old_name)
        .ok_or_else(|| Error::AttributeNotFound(old_name.to_string()))?;
    attr.name = jsx_attr_name(new_name);
    Ok(&el.opening.attrs)
}

/// Replaces the value of an existing attribute. Only primitives and ready value nodes
/// are accepted; a `true` value clears the attribute to its value-less form.
pub fn set_attr_value<'a>(
    el: &'a mut JSXElement,
    name: &str,
    value: impl Into<AttrValue>,
) -> &'a [JSXAttrOrSpread] {
    if name.is_empty() {
        return &el.opening.attrs;
    }
    let value = match value.into() {
        AttrValue::Primitive(Primitive::Bool(true)) => None,
        AttrValue::Primitive(p) => match create_literal_or_literal_expression(&p.to_json()) {
            Some(node) => Some(node),
            None => return &el.opening.attrs,
        },
        AttrValue::Node(node) => Some(node),
        other => {
            debug!(attr = %name, value = ?other, "ignoring value that is neither primitive nor a value node");
            return &el.opening.attrs;
        }
    };
    let Some(attr) = find_attr_mut(&mut el.opening.attrs, name) else {
        debug!(attr = %name, "set_attr_value: attribute not found");
        return &el.opening.attrs;
    };
    attr.value = value.filter(|v| !is_true_expression(v));
    &el.opening.attrs
}

/// Replaces the first attribute called `name` with `new_attr`, keeping its position.
pub fn swap_attr<'a>(el: &'a mut JSXElement, name: &str, new_attr: JSXAttrOrSpread) -> &'a [JSXAttrOrSpread] {
    if let Some(idx) = position_of(&el.opening.attrs, name) {
        el.opening.attrs[idx] = new_attr;
    }
    &el.opening.attrs
}

fn remap_prop_name(name: &str) -> &str {
    match name {
        "for" => "htmlFor",
        "class" => "className",
        other => other,
    }
}

fn object_value_to_attr(expr: &Expr) -> AttrValue {
    match expr {
        Expr::Lit(Lit::Str(s)) => s.value.to_string().into(),
        Expr::Lit(Lit::Num(n)) => n.value.into(),
        Expr::Lit(Lit::Bool(b)) => b.value.into(),
        Expr::Lit(Lit::Null(_)) => Primitive::Null.into(),
        other => AttrValue::Node(expr_container(Box::new(other.clone()))),
    }
}

fn prop_to_attribute(prop: &PropOrSpread) -> Option<JSXAttrOrSpread> {
    let PropOrSpread::Prop(prop) = prop else {
        return None;
    };
    let (key, value) = match &**prop {
        Prop::KeyValue(kv) => {
            let key = match &kv.key {
                PropName::Ident(id) => id.sym.to_string(),
                PropName::Str(s) => s.value.to_string(),
                _ => return None,
            };
            (key, object_value_to_attr(&kv.value))
        }
        Prop::Shorthand(id) => (
            id.sym.to_string(),
            AttrValue::Node(expr_container(Box::new(Expr::Ident(id.clone())))),
        ),
        _ => return None,
    };
    create_attribute(remap_prop_name(&key), value)
}

/// Inlines `prop={{a: 1, for: "x"}}` as `a={1} htmlFor="x"`.
///
/// No-op unless the prop holds a non-empty object literal.
pub fn spread_object_prop<'a>(el: &'a mut JSXElement, prop_name: &str, opts: SpreadOptions) -> &'a [JSXAttrOrSpread] {
    let object = find_attr(&el.opening.attrs, prop_name).and_then(|attr| match &attr.value {
        Some(JSXAttrValue::JSXExprContainer(JSXExprContainer {
            expr: JSXExpr::Expr(expr),
            ..
        })) => match &**expr {
            Expr::Object(obj) if !obj.props.is_empty() => Some(obj.clone()),
            _ => None,
        },
        _ => None,
    });
    let Some(object) = object else {
        debug!(attr = %prop_name, "not an object literal prop, nothing to spread");
        return &el.opening.attrs;
    };

    let extracted: Vec<JSXAttrOrSpread> = object.props.iter().filter_map(prop_to_attribute).collect();
    debug!(attr = %prop_name, count = extracted.len(), "spreading object prop");
    if !extracted.is_empty() {
        add_attributes(el, extracted, AddOptions::default());
    }
    if opts.cleanup {
        remove_attrs(el, &[prop_name]);
    }
    &el.opening.attrs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{create_element, create_literal_attr, create_string_literal, create_template_literal, ident};
    use crate::test_utils::{attr_names, parse_element, print_element, string_value};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn get_attributes_rejects_non_elements() {
        let lit = create_string_literal("x");
        assert!(get_attributes(&lit, &AttrQuery::default()).is_none());
    }

    #[test]
    fn get_attributes_filters_by_name() {
        let el = parse_element(r#"<TestComponent id="hello" aria-label="My Label" {...rest} />"#);
        let all = get_attributes(&el, &AttrQuery::default()).unwrap();
        assert_eq!(all.len(), 3);

        let only_id = get_attributes(&el, &AttrQuery::names(["id"])).unwrap();
        assert_eq!(only_id.len(), 1);
        assert_eq!(attr_name(only_id[0]), Some("id"));

        let none = get_attributes(&el, &AttrQuery::names(["nope"])).unwrap();
        assert!(none.is_empty());

        let fallback = get_attributes(&el, &AttrQuery::names(["nope"]).all_on_no_match(true)).unwrap();
        assert_eq!(fallback.len(), 3);
    }

    #[test]
    fn create_attribute_rejects_bad_names() {
        for bad in ["", "0attribute", "-attribute", "attribute-", "att:ribute"] {
            assert!(create_attribute(bad, "x").is_none(), "{bad}");
        }
        assert!(create_attribute("attribute5", "x").is_some());
    }

    #[test]
    fn create_attribute_value_shapes() {
        let mut el = create_element("div", vec![]);
        let tpl = create_template_literal(&["a ", ""], vec![Box::new(Expr::Ident(ident("b")))]).unwrap();
        add_attributes(
            &mut el,
            [
                create_attribute("str", "text"),
                create_attribute("num", 5),
                create_attribute("off", false),
                create_attribute("on", true),
                create_attribute("nil", Primitive::Null),
                create_attribute("undef", None::<&str>),
                create_attribute("tpl", tpl),
                create_attribute("obj", json!({"a": 1})),
            ]
            .into_iter()
            .flatten(),
            AddOptions::default(),
        );
        assert_eq!(
            print_element(&el),
            "<div str=\"text\" num={5} off={false} on nil={null} undef={undefined} tpl={`a ${b}`} obj></div>"
        );
    }

    #[test]
    fn true_expression_collapses_to_value_less_attribute() {
        let true_container = expr_container(Box::new(Expr::Lit(Lit::Bool(Bool {
            span: DUMMY_SP,
            value: true,
        }))));
        let mut el = create_element("a", vec![]);
        add_attributes(&mut el, create_attribute("disabled", true_container), AddOptions::default());
        assert_eq!(print_element(&el), "<a disabled></a>");

        let source = parse_element("<a x={true} />");
        let parsed_value = find_attr(&source.opening.attrs, "x")
            .and_then(|attr| attr.value.clone())
            .expect("x has a value");
        let mut parsed = parse_element("<a />");
        add_attrs(&mut parsed, create_attribute("hidden", parsed_value));
        assert_eq!(print_element(&parsed), "<a hidden/>");
    }

    #[test]
    fn strict_mode_surfaces_failures() {
        assert!(matches!(
            create_attribute_strict("0bad", "x"),
            Err(Error::InvalidAttributeName(_))
        ));
        assert!(matches!(
            create_attribute_strict("data", json!([1, 2])),
            Err(Error::UnsupportedValue { shape: "array", .. })
        ));
        assert!(create_attribute_strict("data", "ok").is_ok());
    }

    #[test]
    fn add_appends_new_attribute() {
        let mut el = parse_element(r#"<TestComponent id="hello" aria-label="My Label" />"#);
        let attrs = add_attributes(&mut el, create_attribute("prop1", "value1"), AddOptions::default());
        assert_eq!(attr_names(attrs), vec!["id", "aria-label", "prop1"]);
    }

    #[test]
    fn add_without_override_keeps_existing_value() {
        let mut el = parse_element(r#"<TestComponent id="hello" aria-label="My Label" />"#);
        add_attributes(
            &mut el,
            create_attribute("id", "overridden"),
            AddOptions {
                override_existing: false,
            },
        );
        assert_eq!(string_value(&el, "id").as_deref(), Some("hello"));
    }

    #[test]
    fn add_with_override_replaces_in_place_and_is_idempotent() {
        let mut el = parse_element(r#"<TestComponent id="hello" aria-label="My Label" />"#);
        add_attributes(&mut el, create_attribute("id", "new"), AddOptions::default());
        let once = print_element(&el);
        add_attributes(&mut el, create_attribute("id", "new"), AddOptions::default());
        assert_eq!(print_element(&el), once);
        assert_eq!(attr_names(&el.opening.attrs), vec!["id", "aria-label"]);
        assert_eq!(string_value(&el, "id").as_deref(), Some("new"));
    }

    #[test]
    fn add_drops_spread_entries() {
        let mut el = parse_element(r#"<a {...props} />"#);
        let spread = el.opening.attrs[0].clone();
        let attrs = add_attributes(&mut el, [spread], AddOptions::default());
        assert_eq!(attrs.len(), 1);
    }

    #[test]
    fn add_attrs_appends_blindly() {
        let mut el = parse_element(r#"<a id="x" />"#);
        let attrs = add_attrs(&mut el, [create_literal_attr("id", Some("y"))]);
        assert_eq!(attr_names(attrs), vec!["id", "id"]);
    }

    #[test]
    fn remove_keeps_spreads() {
        let mut el = parse_element(r#"<a id="x" href="/" {...rest} title="t" />"#);
        let attrs = remove_attrs(&mut el, &["id", "title"]);
        assert_eq!(attrs.len(), 2);
        assert_eq!(attr_names(attrs), vec!["href"]);
        assert!(get_attributes(&el, &AttrQuery::names(["id", "title"])).unwrap().is_empty());
    }

    #[test]
    fn remove_without_names_is_noop() {
        let mut el = parse_element(r#"<a id="x" />"#);
        let attrs = remove_attrs::<&str>(&mut el, &[]);
        assert_eq!(attrs.len(), 1);
        let attrs = remove_attrs(&mut el, &[""]);
        assert_eq!(attrs.len(), 1);
    }

    #[test]
    fn rename_in_place() {
        let mut el = parse_element(r#"<label for="x" id="y" />"#);
        let attrs = rename_attr(&mut el, "for", "htmlFor").unwrap();
        assert_eq!(attr_names(attrs), vec!["htmlFor", "id"]);
    }

    #[test]
    fn rename_missing_attribute_fails() {
        let mut el = parse_element(r#"<label id="y" />"#);
        assert!(matches!(
            rename_attr(&mut el, "for", "htmlFor"),
            Err(Error::AttributeNotFound(name)) if name == "for"
        ));
        assert!(rename_attr(&mut el, "", "htmlFor").is_ok());
    }

    #[test]
    fn set_value_variants() {
        let mut el = parse_element(r#"<input value="a" disabled={false} />"#);
        set_attr_value(&mut el, "value", "b");
        set_attr_value(&mut el, "disabled", true);
        assert_eq!(print_element(&el), r#"<input value="b" disabled/>"#);

        set_attr_value(&mut el, "disabled", 0);
        assert_eq!(print_element(&el), r#"<input value="b" disabled={0}/>"#);

        let untouched = print_element(&el);
        set_attr_value(&mut el, "value", json!({"nope": true}));
        set_attr_value(&mut el, "missing", "x");
        assert_eq!(print_element(&el), untouched);
    }

    #[test]
    fn swap_keeps_position() {
        let mut el = parse_element(r#"<a id="x" href="/" title="t" />"#);
        let new_attr = create_attribute("to", "/home").unwrap();
        let attrs = swap_attr(&mut el, "href", new_attr);
        assert_eq!(attr_names(attrs), vec!["id", "to", "title"]);

        let other = create_attribute("rel", "x").unwrap();
        let attrs = swap_attr(&mut el, "missing", other);
        assert_eq!(attr_names(attrs), vec!["id", "to", "title"]);
    }

    #[test]
    fn spread_object_prop_inlines_properties() {
        let mut el = parse_element(r#"<label htmlProps={{for: "x", class: "c", tabIndex: 1, onClick: handle, "data-id": id}} />"#);
        let attrs = spread_object_prop(&mut el, "htmlProps", SpreadOptions { cleanup: true });
        assert_eq!(attr_names(attrs), vec!["htmlFor", "className", "tabIndex", "onClick", "data-id"]);
        assert_eq!(
            print_element(&el),
            r#"<label htmlFor="x" className="c" tabIndex={1} onClick={handle} data-id={id}/>"#
        );
    }

    #[test]
    fn spread_object_prop_requires_object() {
        let mut el = parse_element(r#"<label htmlProps={props} other={{}} />"#);
        let before = print_element(&el);
        spread_object_prop(&mut el, "htmlProps", SpreadOptions { cleanup: true });
        spread_object_prop(&mut el, "other", SpreadOptions { cleanup: true });
        spread_object_prop(&mut el, "missing", SpreadOptions::default());
        assert_eq!(print_element(&el), before);
    }

    #[test]
    fn options_deserialize_from_json() {
        let opts: AddOptions = serde_json::from_str(r#"{"overrideExisting": false}"#).unwrap();
        assert!(!opts.override_existing);
        let opts: AddOptions = serde_json::from_str("{}").unwrap();
        assert!(opts.override_existing);
        let query: AttrQuery = serde_json::from_str(r#"{"wantedNames": ["id"], "allOnNoMatch": true}"#).unwrap();
        assert_eq!(query.wanted_names, vec!["id".to_string()]);
        assert!(query.all_on_no_match);
    }
}
