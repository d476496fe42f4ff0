use std::fs;

use pretty_assertions::assert_eq;
use shorthand_cli::{Args, BatchSummary, expand_patterns, run, run_batch};
use shorthand_rewriter::Rewriter;

const MARKED: &str = "export const A = () => <div $bold />;\n";
const PLAIN: &str = "export const B = () => <div class=\"x\" />;\n";
const BROKEN: &str = "export const C = () => <div $bold;\n";

fn pattern(dir: &tempfile::TempDir, glob: &str) -> String {
    dir.path().join(glob).to_string_lossy().to_string()
}

#[test_log::test]
fn expands_sorted_unique_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("b.tsx"), PLAIN).unwrap();
    fs::write(dir.path().join("a.tsx"), PLAIN).unwrap();
    fs::write(dir.path().join("c.jsx"), PLAIN).unwrap();
    fs::create_dir(dir.path().join("d.tsx")).unwrap();

    let files = expand_patterns(&[pattern(&dir, "*.tsx"), pattern(&dir, "a.*")]).unwrap();

    assert_eq!(files, vec![dir.path().join("a.tsx"), dir.path().join("b.tsx")]);
}

#[test_log::test]
fn rewrites_changed_files_only() {
    let dir = tempfile::tempdir().unwrap();
    let marked = dir.path().join("a.tsx");
    let plain = dir.path().join("b.tsx");
    fs::write(&marked, MARKED).unwrap();
    fs::write(&plain, PLAIN).unwrap();

    let summary = run_batch(&[marked.clone(), plain.clone()], &Rewriter::default(), false).unwrap();

    assert_eq!(
        summary,
        BatchSummary {
            processed: 2,
            changed: 1
        }
    );
    let rewritten = fs::read_to_string(&marked).unwrap();
    assert!(rewritten.contains("class={`bold`}"), "{rewritten}");
    assert_eq!(fs::read_to_string(&plain).unwrap(), PLAIN);
}

#[test_log::test]
fn dry_run_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let marked = dir.path().join("a.tsx");
    fs::write(&marked, MARKED).unwrap();

    let summary = run_batch(&[marked.clone()], &Rewriter::default(), true).unwrap();

    assert_eq!(summary.changed, 1);
    assert_eq!(fs::read_to_string(&marked).unwrap(), MARKED);
}

#[test_log::test]
fn first_error_stops_the_batch() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("a.tsx");
    let broken = dir.path().join("b.tsx");
    let last = dir.path().join("c.tsx");
    fs::write(&first, MARKED).unwrap();
    fs::write(&broken, BROKEN).unwrap();
    fs::write(&last, MARKED).unwrap();

    let error = run_batch(&[first.clone(), broken, last.clone()], &Rewriter::default(), false)
        .unwrap_err();

    assert!(error.to_string().contains("b.tsx"), "{error:#}");
    assert_ne!(fs::read_to_string(&first).unwrap(), MARKED);
    assert_eq!(fs::read_to_string(&last).unwrap(), MARKED);
}

#[test_log::test]
fn run_loads_configuration() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("shorthand.toml");
    fs::write(
        &config,
        "replace_tables = true\nclass_merge_fn = \"cx\"\n\n[lookups]\nflex = \"f\"\nbold = \"b\"\n",
    )
    .unwrap();
    let file = dir.path().join("a.tsx");
    fs::write(&file, "const a = <div class={x} ss={SS.bold} />;\n").unwrap();

    let summary = run(&Args {
        config: Some(config),
        dry_run: false,
        patterns: vec![pattern(&dir, "*.tsx")],
    })
    .unwrap();

    assert_eq!(summary.changed, 1);
    let rewritten = fs::read_to_string(&file).unwrap();
    assert!(rewritten.contains("cx(x, `f b`)"), "{rewritten}");
}

#[test_log::test]
fn unsupported_config_format_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("shorthand.yaml");
    fs::write(&config, "lookups: {}\n").unwrap();

    let result = run(&Args {
        config: Some(config),
        dry_run: false,
        patterns: vec![pattern(&dir, "*.tsx")],
    });

    assert!(result.is_err());
}
