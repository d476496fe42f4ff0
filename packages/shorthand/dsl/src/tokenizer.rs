//! Nested-parenthesis tokenizer for DSL chain expressions.
//!
//! Every top-level parenthesized group in a chain is lifted out into a
//! [`ParenToken`] and replaced in the skeleton by a `("COUNT<i>")` placeholder.
//! Groups nested inside a top-level group stay verbatim in that group's payload.

use std::fmt::Write as _;

const PLACEHOLDER_PREFIX: &str = "COUNT";

/// Classification of an extracted argument payload.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// A decimal number or a single-quoted string literal.
    Constant,
    /// Any other expression text, spliced back verbatim into generated output.
    Variable,
}

/// One extracted top-level parenthesized payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParenToken {
    pub kind: TokenKind,
    /// The literal value for constants (quotes stripped), the raw text otherwise.
    pub value: String,
    /// The payload exactly as it appeared between the parentheses.
    pub raw: String,
}

impl ParenToken {
    fn classify(raw: String) -> Self {
        if is_number(&raw) {
            Self {
                kind: TokenKind::Constant,
                value: raw.trim().to_string(),
                raw,
            }
        } else if raw.len() >= 2 && raw.starts_with('\'') && raw.ends_with('\'') {
            Self {
                kind: TokenKind::Constant,
                value: raw[1..raw.len() - 1].to_string(),
                raw,
            }
        } else {
            Self {
                kind: TokenKind::Variable,
                value: raw.clone(),
                raw,
            }
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.trim().is_empty()
    }
}

/// Numeric literal check following JavaScript's `Number()` conversion:
/// decimals, signed `Infinity`, and unsigned `0x`/`0o`/`0b` integers.
/// Empty payloads are never numbers.
fn is_number(text: &str) -> bool {
    let text = text.trim();
    if text.is_empty() {
        return false;
    }
    if text.strip_prefix(['+', '-']).unwrap_or(text) == "Infinity" {
        return true;
    }

    let radix = match text.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &text[2..];
        return !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix));
    }

    text.chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
        && text.parse::<f64>().is_ok()
}

/// Placeholder text for the token at `index` (without the surrounding quotes).
#[must_use]
pub fn placeholder(index: usize) -> String {
    format!("{PLACEHOLDER_PREFIX}{index}")
}

/// Parses a `COUNT<i>` placeholder back into its token index.
#[must_use]
pub fn parse_placeholder(text: &str) -> Option<usize> {
    text.strip_prefix(PLACEHOLDER_PREFIX)?.parse().ok()
}

/// Replaces every top-level parenthesized group in `text` with a numbered
/// placeholder, returning the skeleton and the extracted tokens in order.
///
/// Placeholder numbering starts at `offset` so tokens from a nested chain can
/// be appended to an existing token list.
///
/// Only balanced input is supported. A stray `)` at depth zero is copied
/// through unchanged.
#[must_use]
pub fn replace_nested_parentheses(text: &str, offset: usize) -> (String, Vec<ParenToken>) {
    let mut level = 0_usize;
    let mut output = String::with_capacity(text.len());
    let mut inner = String::new();
    let mut tokens = vec![];

    for c in text.chars() {
        match c {
            '(' => {
                if level == 0 {
                    let index = offset + tokens.len();
                    write!(output, "(\"{}\"", placeholder(index)).ok();
                } else {
                    inner.push(c);
                }
                level += 1;
            }
            ')' if level == 0 => output.push(c),
            ')' => {
                level -= 1;
                if level == 0 {
                    let token = ParenToken::classify(std::mem::take(&mut inner));
                    log::trace!("replace_nested_parentheses: token={token:?}");
                    tokens.push(token);
                    output.push(c);
                } else {
                    inner.push(c);
                }
            }
            _ if level == 0 => output.push(c),
            _ => inner.push(c),
        }
    }

    (output, tokens)
}

/// Puts token payloads back into a skeleton produced by
/// [`replace_nested_parentheses`] with the same `offset`.
#[must_use]
pub fn splice(skeleton: &str, tokens: &[ParenToken], offset: usize) -> String {
    let mut output = skeleton.to_string();
    for (i, token) in tokens.iter().enumerate().rev() {
        let marker = format!("(\"{}\")", placeholder(offset + i));
        output = output.replacen(&marker, &format!("({})", token.raw), 1);
    }
    output
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test_log::test]
    fn replaces_only_top_level_groups() {
        let (skeleton, tokens) = replace_nested_parentheses("a(b(c))d(e)", 0);

        assert_eq!(skeleton, "a(\"COUNT0\")d(\"COUNT1\")");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::Variable);
        assert_eq!(tokens[0].value, "b(c)");
        assert_eq!(tokens[1].kind, TokenKind::Variable);
        assert_eq!(tokens[1].value, "e");
    }

    #[test_log::test]
    fn splice_restores_original_text() {
        let input = "SS.width(min(a, b)).color('red').f1(isOpen())";
        let (skeleton, tokens) = replace_nested_parentheses(input, 0);
        assert_eq!(splice(&skeleton, &tokens, 0), input);
    }

    #[test_log::test]
    fn numbers_are_constants() {
        let (_, tokens) = replace_nested_parentheses("x(12)y(-1.5)z(1e3)", 0);
        assert!(tokens.iter().all(|t| t.kind == TokenKind::Constant));
        assert_eq!(tokens[1].value, "-1.5");
    }

    #[test_log::test]
    fn single_quoted_strings_are_constants_without_quotes() {
        let (_, tokens) = replace_nested_parentheses("x('#bd0a0a')", 0);
        assert_eq!(
            tokens,
            vec![ParenToken {
                kind: TokenKind::Constant,
                value: "#bd0a0a".to_string(),
                raw: "'#bd0a0a'".to_string(),
            }]
        );
    }

    #[test_log::test]
    fn double_quoted_strings_are_variables() {
        let (_, tokens) = replace_nested_parentheses("x(\"red\")", 0);
        assert_eq!(tokens[0].kind, TokenKind::Variable);
    }

    #[test_log::test]
    fn empty_payload_is_an_empty_variable() {
        let (skeleton, tokens) = replace_nested_parentheses("x()", 0);
        assert_eq!(skeleton, "x(\"COUNT0\")");
        assert_eq!(tokens[0].kind, TokenKind::Variable);
        assert!(tokens[0].is_empty());
    }

    #[test_log::test]
    fn non_numeric_words_are_not_numbers() {
        let (_, tokens) = replace_nested_parentheses("x(inf)y(NaN)", 0);
        assert!(tokens.iter().all(|t| t.kind == TokenKind::Variable));
    }

    #[test_log::test]
    fn radix_and_infinity_literals_are_numbers() {
        let (_, tokens) =
            replace_nested_parentheses("a(0x10)b(Infinity)c(-Infinity)d(0b101)e(0o17)", 0);
        assert!(tokens.iter().all(|t| t.kind == TokenKind::Constant), "{tokens:?}");
        assert_eq!(tokens[0].value, "0x10");

        let (_, tokens) = replace_nested_parentheses("a(-0x10)b(0x)c(0b102)d(--Infinity)", 0);
        assert!(tokens.iter().all(|t| t.kind == TokenKind::Variable), "{tokens:?}");
    }

    #[test_log::test]
    fn offset_shifts_placeholder_numbers() {
        let (skeleton, _) = replace_nested_parentheses("a(1).b(2)", 3);
        assert_eq!(skeleton, "a(\"COUNT3\").b(\"COUNT4\")");
    }

    #[test_log::test]
    fn placeholder_round_trips() {
        assert_eq!(parse_placeholder(&placeholder(17)), Some(17));
        assert_eq!(parse_placeholder("COUNTx"), None);
        assert_eq!(parse_placeholder("12"), None);
    }
}
