//! Source-to-source rewriter for JSX attribute shorthands.
//!
//! Two attribute forms on intrinsic (lowercase) elements are rewritten into
//! plain `class` and `style` attributes:
//!
//! * Marker prefixes: `$bold`, `$active={isOn}` and `$$color={c}`
//! * The fluent style DSL: `ss={SS.bold.f1(isOn)}` or `use:ss={...}`
//!
//! Elements without either form are left alone, and a file with nothing to
//! rewrite is returned byte-for-byte.
//!
//! # Example
//!
//! ```rust
//! use shorthand_rewriter::Rewriter;
//!
//! let rewriter = Rewriter::default();
//! let output = rewriter
//!     .rewrite("app.tsx", "const a = <div $bold />;")
//!     .unwrap();
//! assert!(output.contains("class={`bold`}"));
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::Path;

use shorthand_dsl::DslError;
use shorthand_tables::Config;
use swc_common::{
    FileName, FilePathMapping, GLOBALS, Globals, SourceMap, Spanned as _,
    comments::SingleThreadedComments, sync::Lrc,
};
use swc_ecma_ast::{EsVersion, Expr, JSXOpeningElement, Module};
use swc_ecma_codegen::{Emitter, text_writer::JsWriter};
use swc_ecma_parser::{EsSyntax, Syntax, TsSyntax, parse_file_as_expr, parse_file_as_module};
use swc_ecma_transforms_base::fixer::fixer;
use swc_ecma_visit::{VisitMut, VisitMutWith as _};
use thiserror::Error;

pub mod attributes;
pub mod dsl;
pub mod marker;
mod synth;

/// Errors that abort the rewrite of a file.
#[derive(Debug, Error)]
pub enum RewriteError {
    #[error("Failed to parse {file}: {message}")]
    Parse { file: String, message: String },
    /// An inline style from shorthand attributes meets a conflicting `style`.
    #[error("Conflicting style sources on <{element}>")]
    MixedStyleSource { element: String },
    #[error("Style attribute '{attribute}' requires a value")]
    MissingStyleValue { attribute: String },
    #[error("Invalid DSL attribute '{attribute}'")]
    InvalidDslAttribute { attribute: String },
    #[error(transparent)]
    Dsl(#[from] DslError),
    #[error("Failed to emit code: {0}")]
    Emit(std::io::Error),
}

/// Determines the parser syntax for a file from its extension.
///
/// # Returns
///
/// * `Syntax::Typescript` without TSX for `.ts`, `.mts` and `.cts` files
/// * `Syntax::Es` with JSX for `.js`, `.jsx`, `.mjs` and `.cjs` files
/// * `Syntax::Typescript` with TSX for everything else
#[must_use]
pub fn syntax_for_file(file_name: &str) -> Syntax {
    match Path::new(file_name).extension().and_then(|x| x.to_str()) {
        Some("ts" | "mts" | "cts") => Syntax::Typescript(TsSyntax {
            tsx: false,
            ..Default::default()
        }),
        Some("js" | "jsx" | "mjs" | "cjs") => Syntax::Es(EsSyntax {
            jsx: true,
            ..Default::default()
        }),
        _ => Syntax::Typescript(TsSyntax {
            tsx: true,
            ..Default::default()
        }),
    }
}

/// Parses generated expression code into the same source map.
///
/// The whole of `code` must be a single expression.
fn parse_expression(cm: &SourceMap, syntax: Syntax, code: &str) -> Result<Box<Expr>, RewriteError> {
    let fm = cm.new_source_file(FileName::Anon.into(), code.to_string());
    let expr = parse_file_as_expr(&fm, syntax, EsVersion::latest(), None, &mut vec![]).map_err(
        |e| RewriteError::Parse {
            file: "<generated>".to_string(),
            message: format!("{:?} in `{code}`", e.kind()),
        },
    )?;

    let consumed = (expr.span().hi.0 - fm.start_pos.0) as usize;
    if let Some(rest) = code.get(consumed..).filter(|rest| !rest.trim().is_empty()) {
        return Err(RewriteError::Parse {
            file: "<generated>".to_string(),
            message: format!("unexpected `{rest}` after expression in `{code}`"),
        });
    }

    Ok(expr)
}

/// Rewrites shorthand attributes in JSX source text.
#[derive(Debug, Clone, Default)]
pub struct Rewriter {
    config: Config,
}

impl Rewriter {
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Rewrites every shorthand attribute in `source`.
    ///
    /// `file_name` selects the parser syntax (see [`syntax_for_file`]) and is
    /// used in error messages. When nothing is rewritten the source is
    /// returned unchanged.
    ///
    /// # Errors
    ///
    /// * If the source fails to parse
    /// * If any element's shorthand attributes are invalid (see [`RewriteError`])
    /// * If emitting the rewritten module fails
    pub fn rewrite(&self, file_name: &str, source: &str) -> Result<String, RewriteError> {
        GLOBALS.set(&Globals::new(), || self.rewrite_module(file_name, source))
    }

    fn rewrite_module(&self, file_name: &str, source: &str) -> Result<String, RewriteError> {
        let cm: Lrc<SourceMap> = Lrc::new(SourceMap::new(FilePathMapping::empty()));
        let fm = cm.new_source_file(
            FileName::Custom(file_name.to_string()).into(),
            source.to_string(),
        );
        let comments = SingleThreadedComments::default();
        let syntax = syntax_for_file(file_name);

        let mut recovered = vec![];
        let mut module = parse_file_as_module(
            &fm,
            syntax,
            EsVersion::latest(),
            Some(&comments),
            &mut recovered,
        )
        .map_err(|e| {
            let loc = cm.lookup_char_pos(e.span().lo);
            RewriteError::Parse {
                file: file_name.to_string(),
                message: format!("{}:{}: {:?}", loc.line, loc.col_display, e.kind()),
            }
        })?;
        for error in &recovered {
            log::warn!("rewrite: {file_name}: recovered from {:?}", error.kind());
        }

        let mut visitor = AttributeVisitor {
            config: &self.config,
            cm: &cm,
            syntax,
            rewritten: 0,
            error: None,
        };
        module.visit_mut_with(&mut visitor);

        if let Some(error) = visitor.error {
            return Err(error);
        }
        if visitor.rewritten == 0 {
            log::trace!("rewrite: {file_name}: nothing to rewrite");
            return Ok(source.to_string());
        }
        log::debug!("rewrite: {file_name}: rewrote {} element(s)", visitor.rewritten);

        module.visit_mut_with(&mut fixer(Some(&comments)));

        emit(&cm, &comments, &module)
    }
}

fn emit(
    cm: &Lrc<SourceMap>,
    comments: &SingleThreadedComments,
    module: &Module,
) -> Result<String, RewriteError> {
    let mut buf = vec![];

    {
        let wr = JsWriter::new(cm.clone(), "\n", &mut buf, None);
        let mut emitter = Emitter {
            cfg: swc_ecma_codegen::Config::default().with_target(EsVersion::latest()),
            cm: cm.clone(),
            comments: Some(comments),
            wr,
        };

        emitter.emit_module(module).map_err(RewriteError::Emit)?;
    }

    Ok(String::from_utf8_lossy(&buf).to_string())
}

/// Rewrites the opening tag of every intrinsic element.
///
/// The first error stops further rewriting and is kept for the caller.
struct AttributeVisitor<'a> {
    config: &'a Config,
    cm: &'a SourceMap,
    syntax: Syntax,
    rewritten: usize,
    error: Option<RewriteError>,
}

impl AttributeVisitor<'_> {
    fn rewrite_element(&self, node: &mut JSXOpeningElement) -> Result<bool, RewriteError> {
        if !attributes::is_intrinsic(&node.name) {
            return Ok(false);
        }
        let element = attributes::element_name(&node.name, self.cm);

        // DSL first: it reads the original source text of the attributes.
        let dsl = dsl::rewrite(&mut node.attrs, &element, self.config, self.cm, self.syntax)?;
        let markers = marker::rewrite(&mut node.attrs, &element, self.cm)?;

        Ok(dsl || markers)
    }
}

impl VisitMut for AttributeVisitor<'_> {
    fn visit_mut_jsx_opening_element(&mut self, node: &mut JSXOpeningElement) {
        node.visit_mut_children_with(self);

        if self.error.is_some() {
            return;
        }
        match self.rewrite_element(node) {
            Ok(true) => self.rewritten += 1,
            Ok(false) => {}
            Err(e) => {
                log::error!("rewrite: {e}");
                self.error = Some(e);
            }
        }
    }
}
