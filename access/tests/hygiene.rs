//! Hygiene: source-level checks for the access crate.
//!
//! Access decisions must never crash the caller, so production sources carry a
//! zero budget for panicking shortcuts and silently discarded results. Budgets
//! only ever go down.

use std::fs;
use std::path::Path;

/// `(pattern, max occurrences, reason)`.
const BUDGETS: &[(&str, usize, &str)] = &[
    (".unwrap()", 0, "propagate or absorb the error instead"),
    (".expect(", 0, "propagate or absorb the error instead"),
    ("panic!(", 0, "access checks must not crash"),
    ("unreachable!(", 0, "encode the impossible state in the type"),
    ("let _ =", 0, "log discarded errors through tracing"),
    (".ok()", 0, "log discarded errors through tracing"),
    ("println!(", 0, "log through tracing"),
    ("#[allow(dead_code)]", 0, "delete unused code"),
];

struct SourceFile {
    path: String,
    content: String,
}

/// Production `.rs` files under `src/`, excluding `*_test.rs`.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    assert!(!files.is_empty(), "no sources found; run from the crate root");
    files
}

fn collect(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|e| e.path()) {
        if path.is_dir() {
            collect(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

#[test]
fn pattern_budgets_hold() {
    let files = source_files();
    let mut failures = Vec::new();
    for &(pattern, max, reason) in BUDGETS {
        let hits: Vec<(String, usize)> = files
            .iter()
            .map(|f| (f.path.clone(), f.content.lines().filter(|l| l.contains(pattern)).count()))
            .filter(|(_, n)| *n > 0)
            .collect();
        let count: usize = hits.iter().map(|(_, n)| n).sum();
        if count > max {
            let detail = hits.iter().map(|(p, n)| format!("    {p}: {n}")).collect::<Vec<_>>().join("\n");
            failures.push(format!("  `{pattern}`: found {count}, max {max} ({reason})\n{detail}"));
        }
    }
    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}
