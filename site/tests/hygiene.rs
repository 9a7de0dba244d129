//! Hygiene: source-scan budgets for the `site` crate.
//!
//! The domain crate runs inside the visitor's browser, where a panic kills the
//! page. Every budget is zero; a new hit means fixing the code, not the budget.

use std::fs;
use std::path::Path;

/// (pattern, budget, what it catches)
const BUDGETS: &[(&str, usize, &str)] = &[
    (".unwrap()", 0, "panics on None/Err"),
    (".expect(", 0, "panics on None/Err"),
    ("panic!(", 0, "explicit panic"),
    ("unreachable!(", 0, "explicit panic"),
    ("todo!(", 0, "unfinished stub"),
    ("unimplemented!(", 0, "unfinished stub"),
    ("let _ =", 0, "discarded result"),
    (".ok()", 0, "discarded error"),
    ("#[allow(dead_code)]", 0, "hidden dead code"),
];

struct SourceFile {
    path: String,
    content: String,
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile {
                path: path_str,
                content,
            });
        }
    }
}

fn hits_for(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let lines = file.content.lines();
            let count = lines.filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

#[test]
fn scans_the_crate_sources() {
    let files = source_files();
    let found = files.iter().any(|f| f.path.ends_with("capture.rs"));
    assert!(found, "expected to run from the crate root");
}

#[test]
fn budgets_hold() {
    let files = source_files();
    let mut failures = Vec::new();
    for (pattern, budget, why) in BUDGETS {
        let hits = hits_for(&files, pattern);
        let count: usize = hits.iter().map(|(_, c)| c).sum();
        if count > *budget {
            let listing: Vec<String> = hits
                .iter()
                .map(|(path, c)| format!("    {path}: {c}"))
                .collect();
            failures.push(format!(
                "{pattern} ({why}): found {count}, max {budget}\n{}",
                listing.join("\n")
            ));
        }
    }
    assert!(
        failures.is_empty(),
        "hygiene budgets exceeded:\n{}",
        failures.join("\n")
    );
}
