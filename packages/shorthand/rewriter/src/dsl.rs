//! Rewrites the DSL attribute (`ss={SS.bold.f1}`) into `class` and `style`.

use shorthand_tables::Config;
use swc_common::{SourceMap, Spanned as _};
use swc_ecma_ast::JSXAttrOrSpread;
use swc_ecma_parser::Syntax;

use crate::{
    RewriteError,
    attributes::{AttrValue, CLASS, STYLE, into_value, name_of, snippet, value_source},
    parse_expression,
    synth::expression_attribute,
};

/// Rewrites the DSL attribute of one intrinsic element.
///
/// Returns `false` without touching `attrs` when there is no DSL attribute.
///
/// # Errors
///
/// * [`RewriteError::InvalidDslAttribute`] if the attribute is repeated or its
///   value is not an expression
/// * [`RewriteError::MixedStyleSource`] if the element already has a `style`
/// * [`RewriteError::Dsl`] if the chain fails to compile
pub fn rewrite(
    attrs: &mut Vec<JSXAttrOrSpread>,
    element: &str,
    config: &Config,
    cm: &SourceMap,
    syntax: Syntax,
) -> Result<bool, RewriteError> {
    let positions: Vec<_> = attrs
        .iter()
        .enumerate()
        .filter(|(_, attr)| name_of(attr).is_some_and(|name| config.is_dsl_attribute(&name)))
        .map(|(i, _)| i)
        .collect();

    let Some(&index) = positions.first() else {
        return Ok(false);
    };
    if let Some(&repeated) = positions.get(1) {
        return Err(RewriteError::InvalidDslAttribute {
            attribute: name_of(&attrs[repeated]).unwrap_or_default(),
        });
    }
    if attrs
        .iter()
        .any(|attr| name_of(attr).as_deref() == Some(STYLE))
    {
        return Err(RewriteError::MixedStyleSource {
            element: element.to_string(),
        });
    }

    let attr = attrs.remove(index);
    let attribute = name_of(&attr).unwrap_or_default();
    let AttrValue::Expr(expr) = into_value(attr, cm) else {
        return Err(RewriteError::InvalidDslAttribute { attribute });
    };
    let Some(text) = snippet(cm, expr.span()) else {
        return Err(RewriteError::InvalidDslAttribute { attribute });
    };

    log::debug!("rewrite: <{element}> {attribute}={{{text}}}");

    let compiled = shorthand_dsl::compile(&text, config)?;
    for diagnostic in &compiled.diagnostics {
        log::debug!("rewrite: <{element}> {diagnostic:?}");
    }

    let existing = attrs
        .iter()
        .position(|attr| name_of(attr).as_deref() == Some(CLASS))
        .map(|i| attrs.remove(i));
    let class_text = match existing.as_ref().and_then(|attr| value_source(attr, cm)) {
        Some(existing) => format!(
            "{}({existing}, {})",
            config.class_merge_fn, compiled.class_template
        ),
        None => compiled.class_template,
    };

    attrs.push(expression_attribute(
        CLASS,
        parse_expression(cm, syntax, &class_text)?,
    ));
    if let Some(style) = compiled.style_object {
        attrs.push(expression_attribute(
            STYLE,
            parse_expression(cm, syntax, &style)?,
        ));
    }

    Ok(true)
}
