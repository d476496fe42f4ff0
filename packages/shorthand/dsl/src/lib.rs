//! Compiler for the fluent style DSL.
//!
//! A chain such as `SS.bold.noSelect.width(12).f1(isOpen)` is compiled into the
//! code text of a template literal of space-joined utility classes, plus an
//! optional inline style object literal:
//!
//! ```text
//! `flex font-bold user-select-none w-[12] ${(isOpen)?('flex-1'):''}`
//! ```
//!
//! # Pipeline
//! - [`tokenizer`] lifts call arguments out of the chain text.
//! - [`chain`] parses the remaining skeleton into steps and interprets them.
//! - [`resolver`] maps the interpreted candidates through the lookup tables.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use shorthand_tables::Config;
use thiserror::Error;

pub mod chain;
pub mod resolver;
pub mod tokenizer;

pub use chain::{ChainInterpreter, ChainResult, ClassCandidate, Condition, StyleEntry};
pub use resolver::{Resolved, hyphenate};
pub use tokenizer::{ParenToken, TokenKind};

/// Fatal DSL compilation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DslError {
    /// A responsive key needs a variable inline style, which has no responsive form.
    #[error("Responsive arbitrary-value style '{key}' is not supported")]
    UnsupportedResponsiveArbitraryStyle { key: String },
    /// A call argument could not be used as a class condition.
    #[error("Invalid condition for '{key}': {condition}")]
    InvalidDslCondition { key: String, condition: String },
    /// The chain text is not a DSL chain.
    #[error("Invalid DSL expression: {message}")]
    InvalidDslExpression { message: String },
}

impl DslError {
    pub(crate) fn expression(message: impl Into<String>) -> Self {
        Self::InvalidDslExpression {
            message: message.into(),
        }
    }
}

/// Recoverable findings reported alongside a successful compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// `key` has no lookup or style-prefix entry; `fallback` was emitted instead.
    MissingLookupEntry { key: String, fallback: String },
}

/// Compiles DSL chain text into class template and style object code.
///
/// # Errors
///
/// * If the text is not a chain starting at the configured DSL root
/// * If a candidate cannot be resolved (see [`resolver::resolve`])
pub fn compile(text: &str, config: &Config) -> Result<Resolved, DslError> {
    log::trace!("compile: '{text}'");

    let mut text = text.to_string();
    let mut icon_suffixes = vec![];
    for escape in &config.icon_escapes {
        if text.contains(&escape.marker) {
            text = text.replace(&escape.marker, "");
            icon_suffixes.push(escape.expression.as_str());
        }
    }

    let (skeleton, mut tokens) = tokenizer::replace_nested_parentheses(text.trim(), 0);
    let steps = chain::parse_chain(&skeleton, &config.dsl_root)?;

    let result = {
        let mut interpreter = ChainInterpreter::new(&mut tokens, &config.dsl_root);
        interpreter.run(&steps)?;
        interpreter.finish()
    };

    resolver::resolve(&result, &tokens, &config.tables, &icon_suffixes)
}
