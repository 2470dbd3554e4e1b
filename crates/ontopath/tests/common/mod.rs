//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use ontopath::domain::Term;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// A small process hierarchy with one cross-branch `part_of` link.
///
/// ```text
///            BP
///          /    \
///       P1        P2
///      /  \        \
///    C1    C2       C3 --part_of--> C1
///    |
///    L1
/// ```
pub fn sample_terms() -> Vec<Term> {
    vec![
        Term::new("BP", "biological_process"),
        Term::new("P1", "metabolic process").with_parent("BP"),
        Term::new("P2", "signaling").with_parent("BP"),
        Term::new("C1", "lipid metabolic process").with_parent("P1"),
        Term::new("C2", "protein metabolic process").with_parent("P1"),
        Term::new("C3", "cell signaling")
            .with_parent("P2")
            .with_relation("part_of", "C1"),
        Term::new("L1", "fatty acid metabolic process").with_parent("C1"),
    ]
}

/// The sample hierarchy as JSON Lines.
pub fn sample_jsonl() -> String {
    sample_terms()
        .iter()
        .map(|term| serde_json::to_string(term).unwrap())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write `content` as `terms.jsonl` inside `dir`.
pub fn write_terms(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("terms.jsonl");
    std::fs::write(&path, content).unwrap();
    path
}

/// Run the ontopath binary in the specified directory with logging off
pub fn run_ontopath_in_dir(dir: &Path, args: &[&str]) -> Output {
    run_ontopath_with_log(dir, args, "off")
}

/// Run the ontopath binary with `RUST_LOG` set to `filter`
pub fn run_ontopath_with_log(dir: &Path, args: &[&str], filter: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ontopath"))
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env("RUST_LOG", filter)
        .output()
        .expect("Failed to execute ontopath binary")
}
