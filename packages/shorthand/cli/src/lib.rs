//! File pipeline behind the `shorthand` binary.
//!
//! Expands glob patterns, rewrites each matching file sequentially and writes
//! back the files whose content changed.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context as _, Result};
use clap::Parser;
use glob::glob;
use shorthand_rewriter::Rewriter;
use shorthand_tables::Config;

/// Rewrite JSX shorthand attributes into class and style attributes
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// TOML or JSON configuration layered over the built-in tables
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Report the files that would change without writing them
    #[arg(long)]
    pub dry_run: bool,

    /// Glob patterns of the files to rewrite
    #[arg(value_name = "PATTERN", required = true)]
    pub patterns: Vec<String>,
}

/// Counts reported at the end of a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub processed: usize,
    pub changed: usize,
}

/// Expands glob patterns into a sorted, de-duplicated list of files.
///
/// # Errors
///
/// * If a pattern is not a valid glob
/// * If a matched path cannot be read
pub fn expand_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = BTreeSet::new();

    for pattern in patterns {
        let mut matched = 0_usize;
        for entry in glob(pattern).with_context(|| format!("Invalid pattern '{pattern}'"))? {
            let path = entry?;
            if path.is_file() {
                files.insert(path);
                matched += 1;
            }
        }
        if matched == 0 {
            log::warn!("No files match '{pattern}'");
        }
    }

    Ok(files.into_iter().collect())
}

/// Rewrites one file in place.
///
/// Returns whether the content changed. With `dry_run` nothing is written.
///
/// # Errors
///
/// * If the file cannot be read or written
/// * If the rewriter fails on its content
pub fn rewrite_file(path: &Path, rewriter: &Rewriter, dry_run: bool) -> Result<bool> {
    let source =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let output = rewriter
        .rewrite(&path.to_string_lossy(), &source)
        .with_context(|| format!("Failed to rewrite {}", path.display()))?;

    if output == source {
        log::debug!("Unchanged {}", path.display());
        return Ok(false);
    }

    if dry_run {
        log::info!("Would rewrite {}", path.display());
    } else {
        fs::write(path, output).with_context(|| format!("Failed to write {}", path.display()))?;
        log::info!("Rewrote {}", path.display());
    }

    Ok(true)
}

/// Rewrites `files` in order, stopping at the first error.
///
/// Files written before the error stay written.
///
/// # Errors
///
/// * If any file fails (see [`rewrite_file`])
pub fn run_batch(files: &[PathBuf], rewriter: &Rewriter, dry_run: bool) -> Result<BatchSummary> {
    let mut summary = BatchSummary::default();

    for path in files {
        if rewrite_file(path, rewriter, dry_run)? {
            summary.changed += 1;
        }
        summary.processed += 1;
    }

    log::info!(
        "Processed {} file(s), {} {}",
        summary.processed,
        summary.changed,
        if dry_run { "would change" } else { "changed" },
    );

    Ok(summary)
}

/// Loads the configuration and runs the batch described by `args`.
///
/// # Errors
///
/// * If the configuration file fails to load
/// * If pattern expansion or any file rewrite fails
pub fn run(args: &Args) -> Result<BatchSummary> {
    let config = match &args.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::default(),
    };
    let rewriter = Rewriter::new(config);
    let files = expand_patterns(&args.patterns)?;

    run_batch(&files, &rewriter, args.dry_run)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test_log::test]
    fn parses_arguments() {
        let args = Args::try_parse_from([
            "shorthand",
            "--config",
            "shorthand.toml",
            "--dry-run",
            "src/**/*.tsx",
            "lib/*.jsx",
        ])
        .unwrap();

        assert_eq!(args.config, Some(PathBuf::from("shorthand.toml")));
        assert!(args.dry_run);
        assert_eq!(args.patterns, vec!["src/**/*.tsx", "lib/*.jsx"]);
    }

    #[test_log::test]
    fn requires_a_pattern() {
        assert!(Args::try_parse_from(["shorthand"]).is_err());
    }

    #[test_log::test]
    fn invalid_pattern_is_an_error() {
        assert!(expand_patterns(&["src/[".to_string()]).is_err());
    }
}
