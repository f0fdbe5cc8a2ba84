//! Property-based tests for the domain crate.
//!
//! Invariants exercised:
//! - verdict is Pass exactly when the violation list is empty
//! - evaluation is pure: the same candidates always produce the same report
//! - ASCII content under the line limit never violates content rules

use crate::engine::evaluate;
use crate::model::CandidateFile;
use crate::test_support::default_policy;
use proptest::prelude::*;
use srcguard_types::{RepoPath, ScanMode, Verdict};

fn arb_ascii_line() -> impl Strategy<Value = String> {
    // Printable ASCII without quote characters, so no secret pattern can
    // accidentally assemble.
    prop::string::string_regex("[ a-zA-Z0-9_(){};=+]{0,60}").unwrap()
}

fn arb_small_body() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_ascii_line(), 0..50)
        .prop_map(|lines| {
            let mut s = lines.join("\n");
            s.push('\n');
            s
        })
        .prop_filter("must not assemble a secret-shaped token", |s| {
            !s.contains("ghp_") && !s.to_lowercase().contains("bearer")
        })
}

fn arb_filename() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_]{0,12}\\.js")
        .unwrap()
        .prop_filter("must not hit the forbidden-filename table", |name| {
            let upper = name.to_uppercase();
            !["CONSTITUTION", "PLAN", "STRATEGY", "PROMPT", "HANDOVER", "AUDIT"]
                .iter()
                .any(|w| upper.contains(w))
        })
}

proptest! {
    #[test]
    fn verdict_iff_no_violations(body in arb_small_body(), name in arb_filename()) {
        let policy = default_policy();
        let files = vec![CandidateFile::new(
            RepoPath::new(format!("src/{name}")),
            Some(body),
        )];

        let report = evaluate(&files, ScanMode::Tree, &policy);
        prop_assert_eq!(report.verdict == Verdict::Pass, report.violations.is_empty());
    }

    #[test]
    fn short_ascii_files_are_compliant(body in arb_small_body(), name in arb_filename()) {
        let policy = default_policy();
        let files = vec![CandidateFile::new(
            RepoPath::new(format!("src/{name}")),
            Some(body),
        )];

        let report = evaluate(&files, ScanMode::Tree, &policy);
        prop_assert_eq!(report.verdict, Verdict::Pass);
        prop_assert!(report.violations.is_empty());
    }

    #[test]
    fn evaluation_is_deterministic(
        bodies in prop::collection::vec(arb_small_body(), 1..5),
        names in prop::collection::vec(arb_filename(), 1..5),
    ) {
        let policy = default_policy();
        let files: Vec<CandidateFile> = bodies
            .iter()
            .zip(names.iter())
            .enumerate()
            .map(|(i, (body, name))| {
                CandidateFile::new(RepoPath::new(format!("src/{i}_{name}")), Some(body.clone()))
            })
            .collect();

        let first = evaluate(&files, ScanMode::Tree, &policy);
        let second = evaluate(&files, ScanMode::Tree, &policy);
        prop_assert_eq!(first.violations, second.violations);
        prop_assert_eq!(first.verdict, second.verdict);
    }
}
