//! Chain parser and interpreter for the fluent style DSL.
//!
//! A skeleton such as `SS.bold.$s.col.width("COUNT0")` is first parsed into an
//! ordered list of [`Step`]s, then run through a [`ChainInterpreter`] which
//! accumulates class candidates and style entries.

use crate::{
    DslError,
    tokenizer::{ParenToken, parse_placeholder, replace_nested_parentheses},
};

/// Property name that finalizes the chain.
pub const FINALIZE: &str = "$$$PROCESS";
/// Property name switching every following key to the responsive variant.
pub const RESPONSIVE: &str = "$s";
/// Property name making the next call's argument a literal style object.
pub const STYLE_LITERAL: &str = "$style";
/// Property name making the next call's argument a nested chain to splice in.
pub const PRELOAD: &str = "preload";
/// Class every finalized chain starts with.
pub const IMPLICIT_CLASS: &str = "flex";

/// A single link of a parsed chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// `.name`
    Access(String),
    /// `("COUNT<i>")`, holding the token index.
    Call(usize),
}

/// Inclusion condition of a class candidate.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Condition {
    /// Always present.
    Always,
    /// Gated by the token at this index.
    Placeholder(usize),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassCandidate {
    /// Key with underscores already turned into hyphens.
    pub key: String,
    pub responsive: bool,
    pub condition: Condition,
}

impl ClassCandidate {
    #[must_use]
    pub fn always(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            responsive: false,
            condition: Condition::Always,
        }
    }
}

/// An entry of the generated inline style object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StyleEntry {
    /// `'name': value`
    Property { name: String, value: String },
    /// `...(expression)`
    Spread(String),
}

/// Accumulated output of an interpreted chain.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChainResult {
    pub classes: Vec<ClassCandidate>,
    pub styles: Vec<StyleEntry>,
}

/// Parses a tokenized skeleton into steps. The chain must start at `root`.
///
/// # Errors
///
/// * If the chain does not start with `root`
/// * If it contains anything other than `.name` accesses and placeholder calls
pub fn parse_chain(skeleton: &str, root: &str) -> Result<Vec<Step>, DslError> {
    log::trace!("parse_chain: '{skeleton}'");
    let mut cursor = Cursor::new(skeleton);

    cursor.skip_whitespace();
    let first = cursor.identifier();
    if first != root {
        return Err(DslError::expression(format!(
            "chain must start with `{root}`, found `{first}` in \"{skeleton}\""
        )));
    }

    let mut steps = vec![];

    loop {
        cursor.skip_whitespace();
        match cursor.bump() {
            None => break,
            Some('.') => {
                cursor.skip_whitespace();
                let name = cursor.identifier();
                if name.is_empty() {
                    return Err(DslError::expression(format!(
                        "expected a property name after `.` in \"{skeleton}\""
                    )));
                }
                steps.push(Step::Access(name.to_string()));
            }
            Some('(') => {
                cursor.skip_whitespace();
                let index = cursor
                    .quoted()
                    .and_then(parse_placeholder)
                    .ok_or_else(|| {
                        DslError::expression(format!(
                            "expected a call placeholder in \"{skeleton}\""
                        ))
                    })?;
                cursor.skip_whitespace();
                if cursor.bump() != Some(')') {
                    return Err(DslError::expression(format!(
                        "unterminated call in \"{skeleton}\""
                    )));
                }
                steps.push(Step::Call(index));
            }
            Some(c) => {
                return Err(DslError::expression(format!(
                    "unexpected `{c}` in \"{skeleton}\""
                )));
            }
        }
    }

    log::trace!("parse_chain: steps={steps:?}");
    Ok(steps)
}

struct Cursor<'a> {
    text: &'a str,
    position: usize,
}

impl<'a> Cursor<'a> {
    const fn new(text: &'a str) -> Self {
        Self { text, position: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.text[self.position..]
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.rest().chars().next()?;
        self.position += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.position += rest.len() - rest.trim_start().len();
    }

    fn identifier(&mut self) -> &'a str {
        let rest = self.rest();
        let len = rest
            .find(|c: char| !(c.is_alphanumeric() || c == '_' || c == '$'))
            .unwrap_or(rest.len());
        self.position += len;
        &rest[..len]
    }

    fn quoted(&mut self) -> Option<&'a str> {
        let rest = self.rest().strip_prefix('"')?;
        let end = rest.find('"')?;
        self.position += end + 2;
        Some(&rest[..end])
    }
}

/// Explicit-state stand-in for the dynamic property-access proxy the DSL is
/// written against.
///
/// Property accesses append candidates (or flip one of the mode flags), calls
/// rewrite the most recent candidate's condition. Both return `self` so a chain
/// can be driven step by step.
#[derive(Debug)]
pub struct ChainInterpreter<'a> {
    tokens: &'a mut Vec<ParenToken>,
    root: &'a str,
    classes: Vec<ClassCandidate>,
    styles: Vec<StyleEntry>,
    responsive: bool,
    style_literal: bool,
    preload: bool,
    finalized: bool,
}

impl<'a> ChainInterpreter<'a> {
    /// Creates an interpreter reading call arguments from `tokens`.
    ///
    /// Preloaded chains append their own tokens to the same list.
    pub const fn new(tokens: &'a mut Vec<ParenToken>, root: &'a str) -> Self {
        Self {
            tokens,
            root,
            classes: vec![],
            styles: vec![],
            responsive: false,
            style_literal: false,
            preload: false,
            finalized: false,
        }
    }

    /// Runs every step in order.
    ///
    /// # Errors
    ///
    /// * If any [`Self::access`] or [`Self::call`] fails
    pub fn run(&mut self, steps: &[Step]) -> Result<&mut Self, DslError> {
        for step in steps {
            match step {
                Step::Access(name) => self.access(name)?,
                Step::Call(index) => self.call(*index)?,
            };
        }
        Ok(self)
    }

    /// Property access.
    ///
    /// # Errors
    ///
    /// * If the chain was already finalized
    pub fn access(&mut self, name: &str) -> Result<&mut Self, DslError> {
        if self.finalized {
            return Err(DslError::expression(format!(
                "`.{name}` accessed after `{FINALIZE}`"
            )));
        }

        match name {
            FINALIZE => self.finalized = true,
            RESPONSIVE => self.responsive = true,
            STYLE_LITERAL => self.style_literal = true,
            PRELOAD => self.preload = true,
            _ => self.classes.push(ClassCandidate {
                key: name.replace('_', "-"),
                responsive: self.responsive,
                condition: Condition::Always,
            }),
        }

        Ok(self)
    }

    /// Call with the token at `index` as its argument.
    ///
    /// # Errors
    ///
    /// * If the chain was already finalized
    /// * If `index` does not refer to a token
    /// * If a plain call comes before any property access
    /// * If a preloaded chain fails to parse or interpret
    pub fn call(&mut self, index: usize) -> Result<&mut Self, DslError> {
        if self.finalized {
            return Err(DslError::expression(format!(
                "call after `{FINALIZE}`"
            )));
        }
        let token = self.tokens.get(index).cloned().ok_or_else(|| {
            DslError::expression(format!("call argument #{index} does not exist"))
        })?;

        if self.style_literal {
            self.style_literal = false;
            if !token.is_empty() {
                self.styles.push(StyleEntry::Spread(token.raw));
            }
            return Ok(self);
        }

        if self.preload {
            self.preload = false;
            if !token.is_empty() {
                let nested = self.preloaded(&token.raw)?;
                self.classes.extend(nested.classes);
                self.styles.extend(nested.styles);
            }
            return Ok(self);
        }

        let Some(last) = self.classes.last_mut() else {
            return Err(DslError::expression(format!(
                "`{}` called before any property access",
                self.root
            )));
        };
        if !token.is_empty() {
            last.condition = Condition::Placeholder(index);
        }

        Ok(self)
    }

    fn preloaded(&mut self, text: &str) -> Result<ChainResult, DslError> {
        log::trace!("preloaded: '{text}'");
        let (skeleton, tokens) = replace_nested_parentheses(text.trim(), self.tokens.len());
        self.tokens.extend(tokens);
        let steps = parse_chain(&skeleton, self.root)?;

        let mut nested = ChainInterpreter::new(&mut *self.tokens, self.root);
        nested.run(&steps)?;
        Ok(nested.into_result())
    }

    /// Accumulated candidates without the implicit leading class.
    #[must_use]
    pub fn into_result(self) -> ChainResult {
        ChainResult {
            classes: self.classes,
            styles: self.styles,
        }
    }

    /// Finalizes the chain, prepending the implicit [`IMPLICIT_CLASS`] candidate.
    #[must_use]
    pub fn finish(self) -> ChainResult {
        let mut result = self.into_result();
        result
            .classes
            .insert(0, ClassCandidate::always(IMPLICIT_CLASS));
        result
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn interpret(text: &str) -> Result<(ChainResult, Vec<ParenToken>), DslError> {
        let (skeleton, mut tokens) = replace_nested_parentheses(text, 0);
        let steps = parse_chain(&skeleton, "SS")?;
        let result = {
            let mut interpreter = ChainInterpreter::new(&mut tokens, "SS");
            interpreter.run(&steps)?;
            interpreter.finish()
        };
        Ok((result, tokens))
    }

    #[test_log::test]
    fn parses_accesses_and_calls() {
        let steps = parse_chain("SS.bold\n  .width(\"COUNT0\") . f1", "SS").unwrap();
        assert_eq!(
            steps,
            vec![
                Step::Access("bold".to_string()),
                Step::Access("width".to_string()),
                Step::Call(0),
                Step::Access("f1".to_string()),
            ]
        );
    }

    #[test_log::test]
    fn rejects_chains_not_starting_at_root() {
        let result = parse_chain("styles.bold", "SS");
        assert!(matches!(result, Err(DslError::InvalidDslExpression { .. })));
    }

    #[test_log::test]
    fn rejects_unexpected_characters() {
        assert!(parse_chain("SS.bold + 1", "SS").is_err());
        assert!(parse_chain("SS.bold[0]", "SS").is_err());
        assert!(parse_chain("SS.", "SS").is_err());
    }

    #[test_log::test]
    fn accesses_append_candidates_in_order_after_implicit_flex() {
        let (result, _) = interpret("SS.bold.noSelect.color_white").unwrap();
        assert_eq!(
            result.classes,
            vec![
                ClassCandidate::always("flex"),
                ClassCandidate::always("bold"),
                ClassCandidate::always("noSelect"),
                ClassCandidate::always("color-white"),
            ]
        );
    }

    #[test_log::test]
    fn call_sets_condition_of_last_candidate() {
        let (result, tokens) = interpret("SS.bold(isActive).f1").unwrap();
        assert_eq!(result.classes[1].condition, Condition::Placeholder(0));
        assert_eq!(result.classes[2].condition, Condition::Always);
        assert_eq!(tokens[0].raw, "isActive");
    }

    #[test_log::test]
    fn empty_call_keeps_candidate_unconditional() {
        let (result, _) = interpret("SS.bold()").unwrap();
        assert_eq!(result.classes[1].condition, Condition::Always);
    }

    #[test_log::test]
    fn responsive_flag_applies_to_every_following_key() {
        let (result, _) = interpret("SS.row.$s.col.f1").unwrap();
        let flags: Vec<_> = result.classes.iter().map(|c| c.responsive).collect();
        assert_eq!(flags, vec![false, false, true, true]);
    }

    #[test_log::test]
    fn style_literal_call_adds_spread_entry() {
        let (result, _) = interpret("SS.bold.$style({color: 'red'})").unwrap();
        assert_eq!(
            result.styles,
            vec![StyleEntry::Spread("{color: 'red'}".to_string())]
        );
        assert_eq!(result.classes.len(), 2);
    }

    #[test_log::test]
    fn preload_splices_nested_chain_sharing_tokens() {
        let (result, tokens) = interpret("SS.bold.preload(SS.col.width(12)).f1(open)").unwrap();

        let keys: Vec<_> = result.classes.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["flex", "bold", "col", "width", "f1"]);

        let Condition::Placeholder(width) = result.classes[3].condition else {
            panic!("width should be conditional");
        };
        assert_eq!(tokens[width].value, "12");

        let Condition::Placeholder(f1) = result.classes[4].condition else {
            panic!("f1 should be conditional");
        };
        assert_eq!(tokens[f1].raw, "open");
    }

    #[test_log::test]
    fn preload_of_non_chain_is_an_error() {
        let result = interpret("SS.preload(otherStyles)");
        assert!(matches!(result, Err(DslError::InvalidDslExpression { .. })));
    }

    #[test_log::test]
    fn call_before_access_is_an_error() {
        let result = interpret("SS(true)");
        assert!(matches!(result, Err(DslError::InvalidDslExpression { .. })));
    }

    #[test_log::test]
    fn explicit_finalize_ends_the_chain() {
        let (result, _) = interpret("SS.bold.$$$PROCESS").unwrap();
        assert_eq!(result.classes.len(), 2);

        let result = interpret("SS.bold.$$$PROCESS.f1");
        assert!(result.is_err());
    }

    #[test_log::test]
    fn driving_the_interpreter_by_hand() {
        let mut tokens = vec![];
        let mut interpreter = ChainInterpreter::new(&mut tokens, "SS");
        interpreter
            .access("bold")
            .unwrap()
            .access("$s")
            .unwrap()
            .access("hidden")
            .unwrap();
        let result = interpreter.finish();

        assert_eq!(result.classes.len(), 3);
        assert!(result.classes[2].responsive);
    }
}
