//! Rewrites `$name` and `$$name` attribute markers into `class` and `style`.
//!
//! ```text
//! <div class="base" $bold $active={isOn} $$color={c} />
//! <div class={`base bold ${isOn ? "active" : ""}`} style={{ color: c }} />
//! ```

use shorthand_dsl::hyphenate;
use swc_common::SourceMap;
use swc_ecma_ast::{Expr, JSXAttrOrSpread};

use crate::{
    RewriteError,
    attributes::{AttrValue, CLASS, CLASS_MARKER, STYLE, STYLE_MARKER, attr_name, into_value, name_of, take_value},
    synth::{
        Segment, class_template, conditional_class, expression_attribute, str_lit, style_object,
    },
};

/// Whether any attribute carries a marker prefix.
#[must_use]
pub fn has_markers(attrs: &[JSXAttrOrSpread]) -> bool {
    attrs
        .iter()
        .filter_map(name_of)
        .any(|name| name.starts_with(CLASS_MARKER))
}

/// Rewrites the marker attributes of one intrinsic element.
///
/// Returns `false` without touching `attrs` when there are no markers.
///
/// # Errors
///
/// * [`RewriteError::MissingStyleValue`] if a `$$name` attribute has no value
/// * [`RewriteError::MixedStyleSource`] if `$$name` entries meet a string `style`
pub fn rewrite(
    attrs: &mut Vec<JSXAttrOrSpread>,
    element: &str,
    cm: &SourceMap,
) -> Result<bool, RewriteError> {
    if !has_markers(attrs) {
        return Ok(false);
    }

    let mut slots: Vec<Option<JSXAttrOrSpread>> = Vec::with_capacity(attrs.len());
    let mut class_slot = None;
    let mut style_slot = None;
    let mut classes: Vec<(String, Option<Box<Expr>>)> = vec![];
    let mut styles: Vec<(String, Box<Expr>)> = vec![];

    for attr in std::mem::take(attrs) {
        let attr = match attr {
            JSXAttrOrSpread::JSXAttr(attr) => attr,
            spread @ JSXAttrOrSpread::SpreadElement(_) => {
                slots.push(Some(spread));
                continue;
            }
        };
        let name = attr_name(&attr);

        if let Some(property) = name.strip_prefix(STYLE_MARKER) {
            let value = match take_value(attr.value, cm) {
                AttrValue::Expr(expr) => expr,
                AttrValue::Str(text) => str_lit(&text),
                AttrValue::Missing => {
                    return Err(RewriteError::MissingStyleValue { attribute: name });
                }
            };
            styles.push((hyphenate(property), value));
        } else if let Some(class) = name.strip_prefix(CLASS_MARKER) {
            let condition = match take_value(attr.value, cm) {
                AttrValue::Expr(expr) => Some(expr),
                AttrValue::Str(text) => Some(str_lit(&text)),
                AttrValue::Missing => None,
            };
            classes.push((class.to_string(), condition));
        } else {
            match name.as_str() {
                CLASS => class_slot = Some(slots.len()),
                STYLE => style_slot = Some(slots.len()),
                _ => {}
            }
            slots.push(Some(JSXAttrOrSpread::JSXAttr(attr)));
        }
    }

    log::trace!(
        "rewrite: <{element}> classes={} styles={}",
        classes.len(),
        styles.len()
    );

    let mut synthesized = vec![];

    if !classes.is_empty() {
        let mut segments = vec![];
        if let Some(existing) = class_slot.and_then(|i| slots[i].take()) {
            match into_value(existing, cm) {
                AttrValue::Expr(expr) => segments.push(Segment::Expr(expr)),
                AttrValue::Str(text) if !text.trim().is_empty() => {
                    segments.push(Segment::Text(text.trim().to_string()));
                }
                AttrValue::Str(_) | AttrValue::Missing => {}
            }
        }
        for (name, condition) in classes {
            segments.push(match condition {
                None => Segment::Text(name),
                Some(test) => Segment::Expr(conditional_class(test, &name)),
            });
        }
        synthesized.push(expression_attribute(CLASS, class_template(segments)));
    }

    if !styles.is_empty() {
        let spread = match style_slot.and_then(|i| slots[i].take()).map(|x| into_value(x, cm)) {
            Some(AttrValue::Expr(expr)) => Some(expr),
            Some(AttrValue::Str(_)) => {
                return Err(RewriteError::MixedStyleSource {
                    element: element.to_string(),
                });
            }
            Some(AttrValue::Missing) | None => None,
        };
        synthesized.push(expression_attribute(STYLE, style_object(spread, styles)));
    }

    attrs.extend(slots.into_iter().flatten());
    attrs.extend(synthesized);

    Ok(true)
}
