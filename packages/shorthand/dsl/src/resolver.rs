//! Maps interpreted class candidates to utility class fragments.

use shorthand_tables::Tables;

use crate::{
    Diagnostic, DslError,
    chain::{ChainResult, ClassCandidate, Condition, IMPLICIT_CLASS, StyleEntry},
    tokenizer::{ParenToken, TokenKind},
};

/// Prefix of responsive class variants.
pub const RESPONSIVE_PREFIX: &str = "sm:";

/// Output of [`resolve`]: the code text of the generated expressions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Resolved {
    /// A template literal, backticks included.
    pub class_template: String,
    /// An object literal, or `None` when no style entries were produced.
    pub style_object: Option<String>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Converts a camelCase CSS property name to its hyphenated form.
///
/// Custom properties (`--name`) are returned untouched.
#[must_use]
pub fn hyphenate(property: &str) -> String {
    if property.starts_with("--") {
        return property.to_string();
    }

    let mut output = String::with_capacity(property.len() + 4);
    for c in property.chars() {
        if c.is_ascii_uppercase() {
            output.push('-');
            output.push(c.to_ascii_lowercase());
        } else {
            output.push(c);
        }
    }
    output
}

/// Escapes `text` for the body of a template literal.
fn escape_template(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}

/// Escapes `text` for the body of a single-quoted string literal.
fn escape_quoted(text: &str) -> String {
    text.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Resolves every candidate of `result` against `tables`.
///
/// `icon_suffixes` are expressions appended as trailing interpolations.
///
/// # Errors
///
/// * If a responsive candidate needs an arbitrary-value inline style
/// * If a candidate's condition does not refer to a token
pub fn resolve(
    result: &ChainResult,
    tokens: &[ParenToken],
    tables: &Tables,
    icon_suffixes: &[&str],
) -> Result<Resolved, DslError> {
    let mut fragments = Vec::with_capacity(result.classes.len());
    let mut diagnostics = vec![];
    let mut properties = vec![];

    for candidate in &result.classes {
        if let Some(fragment) =
            resolve_candidate(candidate, tokens, tables, &mut properties, &mut diagnostics)?
        {
            fragments.push(fragment);
        }
    }

    let mut class_template = String::from("`");
    class_template.push_str(&fragments.join(" "));
    for suffix in icon_suffixes {
        class_template.push_str(" ${");
        class_template.push_str(suffix);
        class_template.push('}');
    }
    class_template.push('`');

    let entries: Vec<_> = result
        .styles
        .iter()
        .chain(properties.iter())
        .map(|entry| match entry {
            StyleEntry::Property { name, value } => format!("'{name}': {value}"),
            StyleEntry::Spread(expression) => format!("...({expression})"),
        })
        .collect();
    let style_object = if entries.is_empty() {
        None
    } else {
        Some(format!("{{{}}}", entries.join(", ")))
    };

    log::trace!("resolve: class_template={class_template} style_object={style_object:?}");

    Ok(Resolved {
        class_template,
        style_object,
        diagnostics,
    })
}

fn token_for<'a>(
    candidate: &ClassCandidate,
    tokens: &'a [ParenToken],
    index: usize,
) -> Result<&'a ParenToken, DslError> {
    tokens
        .get(index)
        .ok_or_else(|| DslError::InvalidDslCondition {
            key: candidate.key.clone(),
            condition: format!("placeholder #{index}"),
        })
}

fn resolve_candidate(
    candidate: &ClassCandidate,
    tokens: &[ParenToken],
    tables: &Tables,
    properties: &mut Vec<StyleEntry>,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<Option<String>, DslError> {
    let key = candidate.key.as_str();
    let prefix = if candidate.responsive {
        RESPONSIVE_PREFIX
    } else {
        ""
    };

    let Some(class_name) = tables.resolve_class(key) else {
        return match candidate.condition {
            Condition::Always if key == IMPLICIT_CLASS && !candidate.responsive => {
                Ok(Some(IMPLICIT_CLASS.to_string()))
            }
            Condition::Always => {
                let fallback = escape_template(&format!("{prefix}{key}"));
                log::warn!("Missing lookup entry for '{key}', using '{fallback}'");
                diagnostics.push(Diagnostic::MissingLookupEntry {
                    key: key.to_string(),
                    fallback: fallback.clone(),
                });
                Ok(Some(fallback))
            }
            Condition::Placeholder(index) => {
                let token = token_for(candidate, tokens, index)?;
                arbitrary_value(candidate, token, tables, properties, diagnostics)
            }
        };
    };

    Ok(Some(match candidate.condition {
        Condition::Always => escape_template(&format!("{prefix}{class_name}")),
        Condition::Placeholder(index) => {
            let token = token_for(candidate, tokens, index)?;
            format!(
                "${{({})?('{}'):''}}",
                token.raw.trim(),
                escape_quoted(&format!("{prefix}{class_name}"))
            )
        }
    }))
}

fn arbitrary_value(
    candidate: &ClassCandidate,
    token: &ParenToken,
    tables: &Tables,
    properties: &mut Vec<StyleEntry>,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<Option<String>, DslError> {
    let key = candidate.key.as_str();
    let prefix = if candidate.responsive {
        RESPONSIVE_PREFIX
    } else {
        ""
    };

    if token.kind == TokenKind::Variable {
        if candidate.responsive {
            return Err(DslError::UnsupportedResponsiveArbitraryStyle {
                key: key.to_string(),
            });
        }
        properties.push(StyleEntry::Property {
            name: key.to_string(),
            value: token.raw.trim().to_string(),
        });
        return Ok(None);
    }

    // Tailwind reads `_` as a space inside arbitrary values.
    let value = escape_template(&token.value.split_whitespace().collect::<Vec<_>>().join("_"));

    if let Some(style_prefix) = tables.style_prefix(key) {
        return Ok(Some(format!(
            "{prefix}{}-[{value}]",
            escape_template(style_prefix)
        )));
    }

    let fallback = format!("{prefix}{}-[{value}]", escape_template(key));
    log::warn!("Missing style key '{key}', using '{fallback}'");
    diagnostics.push(Diagnostic::MissingLookupEntry {
        key: key.to_string(),
        fallback: fallback.clone(),
    });
    Ok(Some(fallback))
}
