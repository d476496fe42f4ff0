//! Construction of the synthesized `class`/`style` attribute expressions.

use swc_common::DUMMY_SP;
use swc_ecma_ast::{
    CondExpr, Expr, IdentName, JSXAttr, JSXAttrName, JSXAttrOrSpread, JSXAttrValue, JSXExpr,
    JSXExprContainer, KeyValueProp, Lit, ObjectLit, Prop, PropName, PropOrSpread, SpreadElement,
    Str, Tpl, TplElement,
};

/// One space-separated piece of a generated class template.
#[derive(Debug)]
pub enum Segment {
    /// Literal class text placed directly in the template.
    Text(String),
    /// An interpolated expression.
    Expr(Box<Expr>),
}

#[must_use]
pub fn str_lit(value: &str) -> Box<Expr> {
    Box::new(Expr::Lit(Lit::Str(Str {
        span: DUMMY_SP,
        raw: None,
        value: value.to_string().into(),
    })))
}

/// `test ? "name" : ""`
#[must_use]
pub fn conditional_class(test: Box<Expr>, name: &str) -> Box<Expr> {
    Box::new(Expr::Cond(CondExpr {
        span: DUMMY_SP,
        test,
        cons: str_lit(name),
        alt: str_lit(""),
    }))
}

fn escape_template(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}

fn quasi(text: &str, tail: bool) -> TplElement {
    TplElement {
        span: DUMMY_SP,
        tail,
        cooked: Some(text.to_string().into()),
        raw: escape_template(text).into(),
    }
}

/// Joins `segments` with single spaces into a template literal.
#[must_use]
pub fn class_template(segments: Vec<Segment>) -> Box<Expr> {
    let mut quasis = vec![];
    let mut exprs = vec![];
    let mut current = String::new();

    for (i, segment) in segments.into_iter().enumerate() {
        if i > 0 {
            current.push(' ');
        }
        match segment {
            Segment::Text(text) => current.push_str(&text),
            Segment::Expr(expr) => {
                quasis.push(quasi(&std::mem::take(&mut current), false));
                exprs.push(expr);
            }
        }
    }
    quasis.push(quasi(&current, true));

    Box::new(Expr::Tpl(Tpl {
        span: DUMMY_SP,
        exprs,
        quasis,
    }))
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

fn prop_name(name: &str) -> PropName {
    if is_identifier(name) {
        PropName::Ident(IdentName::new(name.into(), DUMMY_SP))
    } else {
        PropName::Str(Str {
            span: DUMMY_SP,
            raw: None,
            value: name.to_string().into(),
        })
    }
}

/// `{...spread, name: value, ...}`
#[must_use]
pub fn style_object(spread: Option<Box<Expr>>, entries: Vec<(String, Box<Expr>)>) -> Box<Expr> {
    let mut props = Vec::with_capacity(entries.len() + 1);
    if let Some(expr) = spread {
        props.push(PropOrSpread::Spread(SpreadElement {
            dot3_token: DUMMY_SP,
            expr,
        }));
    }
    for (name, value) in entries {
        props.push(PropOrSpread::Prop(Box::new(Prop::KeyValue(KeyValueProp {
            key: prop_name(&name),
            value,
        }))));
    }

    Box::new(Expr::Object(ObjectLit {
        span: DUMMY_SP,
        props,
    }))
}

/// `name={expr}`
#[must_use]
pub fn expression_attribute(name: &str, expr: Box<Expr>) -> JSXAttrOrSpread {
    JSXAttrOrSpread::JSXAttr(JSXAttr {
        span: DUMMY_SP,
        name: JSXAttrName::Ident(IdentName::new(name.into(), DUMMY_SP)),
        value: Some(JSXAttrValue::JSXExprContainer(JSXExprContainer {
            span: DUMMY_SP,
            expr: JSXExpr::Expr(expr),
        })),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn raws(expr: &Expr) -> Vec<String> {
        let Expr::Tpl(tpl) = expr else {
            panic!("expected a template literal, got {expr:?}");
        };
        tpl.quasis.iter().map(|q| q.raw.to_string()).collect()
    }

    #[test_log::test]
    fn text_segments_share_one_quasi() {
        let template = class_template(vec![
            Segment::Text("base".to_string()),
            Segment::Text("bold".to_string()),
        ]);
        assert_eq!(raws(&template), vec!["base bold".to_string()]);
    }

    #[test_log::test]
    fn expression_segments_are_space_separated() {
        let template = class_template(vec![
            Segment::Text("bold".to_string()),
            Segment::Expr(str_lit("x")),
            Segment::Text("f1".to_string()),
        ]);
        assert_eq!(raws(&template), vec!["bold ".to_string(), " f1".to_string()]);

        let Expr::Tpl(tpl) = *template else {
            unreachable!();
        };
        assert_eq!(tpl.exprs.len(), 1);
        assert!(tpl.quasis[1].tail);
        assert!(!tpl.quasis[0].tail);
    }

    #[test_log::test]
    fn template_text_is_escaped() {
        let template = class_template(vec![Segment::Text("a`b${c}".to_string())]);
        assert_eq!(raws(&template), vec!["a\\`b\\${c}".to_string()]);
    }

    #[test_log::test]
    fn style_keys_that_are_not_identifiers_are_strings() {
        assert!(matches!(prop_name("color"), PropName::Ident(_)));
        assert!(matches!(prop_name("border-top"), PropName::Str(_)));
        assert!(matches!(prop_name("--gap"), PropName::Str(_)));
    }
}
