//! Inspection of JSX attributes and elements.

use swc_common::{SourceMap, SourceMapper as _, Span, Spanned as _};
use swc_ecma_ast::{
    Expr, JSXAttr, JSXAttrName, JSXAttrOrSpread, JSXAttrValue, JSXElementName, JSXExpr,
    JSXExprContainer,
};

pub const CLASS: &str = "class";
pub const STYLE: &str = "style";

/// Prefix of conditional class attributes (`$name`).
pub const CLASS_MARKER: &str = "$";
/// Prefix of inline style attributes (`$$name`).
pub const STYLE_MARKER: &str = "$$";

/// The value of an attribute, detached from it.
#[derive(Debug)]
pub enum AttrValue {
    /// No value, or an empty `{}` container.
    Missing,
    Expr(Box<Expr>),
    /// A string literal's text, without its quotes.
    Str(String),
}

/// Full attribute name, `ns:name` for namespaced attributes.
#[must_use]
pub fn attr_name(attr: &JSXAttr) -> String {
    match &attr.name {
        JSXAttrName::Ident(ident) => ident.sym.to_string(),
        JSXAttrName::JSXNamespacedName(name) => format!("{}:{}", name.ns.sym, name.name.sym),
    }
}

/// Name of `attr`, or `None` for spread attributes.
#[must_use]
pub fn name_of(attr: &JSXAttrOrSpread) -> Option<String> {
    match attr {
        JSXAttrOrSpread::JSXAttr(attr) => Some(attr_name(attr)),
        JSXAttrOrSpread::SpreadElement(_) => None,
    }
}

#[must_use]
pub fn snippet(cm: &SourceMap, span: Span) -> Option<String> {
    if span.is_dummy() {
        return None;
    }
    cm.span_to_snippet(span).ok()
}

fn string_literal_text(cm: &SourceMap, span: Span) -> String {
    let Some(text) = snippet(cm, span) else {
        log::warn!("string_literal_text: no source text for attribute value");
        return String::new();
    };

    let mut chars = text.chars();
    match (chars.next(), chars.next_back()) {
        (Some(open @ ('"' | '\'')), Some(close)) if open == close => chars.as_str().to_string(),
        _ => text,
    }
}

/// Detaches the value of an attribute.
#[must_use]
pub fn take_value(value: Option<JSXAttrValue>, cm: &SourceMap) -> AttrValue {
    match value {
        None => AttrValue::Missing,
        Some(JSXAttrValue::JSXExprContainer(JSXExprContainer {
            expr: JSXExpr::Expr(expr),
            ..
        })) => AttrValue::Expr(expr),
        Some(JSXAttrValue::JSXExprContainer(_)) => AttrValue::Missing,
        Some(JSXAttrValue::JSXElement(element)) => AttrValue::Expr(Box::new(Expr::JSXElement(element))),
        Some(JSXAttrValue::JSXFragment(fragment)) => {
            AttrValue::Expr(Box::new(Expr::JSXFragment(fragment)))
        }
        Some(literal) => AttrValue::Str(string_literal_text(cm, literal.span())),
    }
}

/// Detaches the value of `attr`. Spread attributes have none.
#[must_use]
pub fn into_value(attr: JSXAttrOrSpread, cm: &SourceMap) -> AttrValue {
    match attr {
        JSXAttrOrSpread::JSXAttr(attr) => take_value(attr.value, cm),
        JSXAttrOrSpread::SpreadElement(_) => AttrValue::Missing,
    }
}

/// Source text of an attribute's value as an expression: quotes are kept for
/// string literals and braces are dropped for expression containers.
#[must_use]
pub fn value_source(attr: &JSXAttrOrSpread, cm: &SourceMap) -> Option<String> {
    let JSXAttrOrSpread::JSXAttr(attr) = attr else {
        return None;
    };
    match attr.value.as_ref()? {
        JSXAttrValue::JSXExprContainer(JSXExprContainer {
            expr: JSXExpr::Expr(expr),
            ..
        }) => snippet(cm, expr.span()),
        JSXAttrValue::JSXExprContainer(_) => None,
        other => snippet(cm, other.span()),
    }
}

/// Lowercase tags are intrinsic elements; anything else is a component.
#[must_use]
pub fn is_intrinsic(name: &JSXElementName) -> bool {
    match name {
        JSXElementName::Ident(ident) => ident
            .sym
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_lowercase()),
        _ => false,
    }
}

#[must_use]
pub fn element_name(name: &JSXElementName, cm: &SourceMap) -> String {
    match name {
        JSXElementName::Ident(ident) => ident.sym.to_string(),
        other => snippet(cm, other.span()).unwrap_or_else(|| "<element>".to_string()),
    }
}
