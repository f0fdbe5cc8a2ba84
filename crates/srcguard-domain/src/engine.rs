use crate::classify::{classify, Classification};
use crate::model::CandidateFile;
use crate::policy::ScanPolicy;
use crate::report::{compare_violations, compute_verdict, DomainReport, Violations};
use crate::rules;
use srcguard_types::{ScanData, ScanMode};

/// Whether a candidate made it through the classification gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileOutcome {
    Scanned,
    Skipped,
}

/// Classify one candidate and, if it is in scope, run the content rules.
///
/// This is the single pipeline shared by the full-tree and targeted scan
/// modes; neither mode carries rule logic of its own.
pub fn scan_file(file: &CandidateFile, policy: &ScanPolicy, out: &mut Violations) -> FileOutcome {
    match classify(file, policy, out) {
        Classification::Skip => FileOutcome::Skipped,
        Classification::Scan => {
            if let Some(text) = file.text.as_deref() {
                rules::run_content_rules(&file.path, file.extension(), text, policy, out);
            }
            FileOutcome::Scanned
        }
    }
}

/// Evaluate every candidate and derive the run report.
///
/// Violations are sorted by (path, rule, detail) so rendering is
/// deterministic regardless of traversal order.
pub fn evaluate(files: &[CandidateFile], mode: ScanMode, policy: &ScanPolicy) -> DomainReport {
    let mut out = Violations::new();
    let mut scanned: u32 = 0;
    let mut skipped: u32 = 0;

    for file in files {
        match scan_file(file, policy, &mut out) {
            FileOutcome::Scanned => scanned += 1,
            FileOutcome::Skipped => skipped += 1,
        }
    }

    let mut violations = out.into_records();
    violations.sort_by(compare_violations);

    let verdict = compute_verdict(&violations);
    let data = ScanData {
        mode,
        files_scanned: scanned,
        files_skipped: skipped,
        violations_total: violations.len() as u32,
    };

    DomainReport {
        verdict,
        violations,
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{candidate, default_policy};
    use srcguard_types::{RuleId, Verdict};

    #[test]
    fn forbidden_filename_suppresses_content_rules() {
        let policy = default_policy();
        // 1000 lines, well over the limit: the filename rejection must still
        // be the only violation.
        let body = "x\n".repeat(1000);
        let file = candidate("docs/STRATEGY_NOTES.js", &body);

        let report = evaluate(&[file], ScanMode::Tree, &policy);
        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].rule, RuleId::ForbiddenFilename);
        assert_eq!(report.verdict, Verdict::Fail);
    }

    #[test]
    fn clean_file_yields_zero_violations() {
        let policy = default_policy();
        let file = candidate("src/ok.py", "print('hello')\n");

        let report = evaluate(&[file], ScanMode::Tree, &policy);
        assert_eq!(report.verdict, Verdict::Pass);
        assert!(report.violations.is_empty());
        assert_eq!(report.data.files_scanned, 1);
        assert_eq!(report.data.files_skipped, 0);
    }

    #[test]
    fn boundary_line_count_is_exactly_one_violation() {
        let policy = default_policy();
        let over = "a\n".repeat(policy.max_lines + 1);
        let file = candidate("src/big.py", &over);

        let report = evaluate(&[file], ScanMode::Tree, &policy);
        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].rule, RuleId::MonolithBan);
        assert!(report.violations[0]
            .detail
            .contains(&format!("{}", policy.max_lines + 1)));
    }

    #[test]
    fn at_limit_is_compliant() {
        let policy = default_policy();
        let at = "a\n".repeat(policy.max_lines);
        let file = candidate("src/edge.py", &at);

        let report = evaluate(&[file], ScanMode::Tree, &policy);
        assert_eq!(report.verdict, Verdict::Pass);
    }

    #[test]
    fn content_rules_are_cumulative() {
        let policy = default_policy();
        let mut body = "let t = 'bearer eyJhbGciOiJIUzI1NiJ9.e30.x';\n".to_string();
        body.push_str("// 你好\n");
        body.push_str(&"x\n".repeat(policy.max_lines));
        let file = candidate("src/mess.js", &body);

        let report = evaluate(&[file], ScanMode::Tree, &policy);
        let rules: Vec<RuleId> = report.violations.iter().map(|v| v.rule).collect();
        assert_eq!(
            rules,
            vec![RuleId::MonolithBan, RuleId::SecretLeak, RuleId::CharsetMandate]
        );
    }

    #[test]
    fn idempotent_over_the_same_candidates() {
        let policy = default_policy();
        let files = vec![
            candidate("src/big.js", &"x\n".repeat(300)),
            candidate("src/ok.js", "const a = 1;\n"),
        ];

        let first = evaluate(&files, ScanMode::Tree, &policy);
        let second = evaluate(&files, ScanMode::Tree, &policy);
        assert_eq!(first.violations, second.violations);
        assert_eq!(first.verdict, second.verdict);
    }

    #[test]
    fn counters_split_scanned_and_skipped() {
        let policy = default_policy();
        let files = vec![
            candidate("src/ok.js", "const a = 1;\n"),
            candidate("README.md", "docs\n"),
            candidate("logo.png", ""),
        ];

        let report = evaluate(&files, ScanMode::Targeted, &policy);
        assert_eq!(report.data.files_scanned, 1);
        assert_eq!(report.data.files_skipped, 2);
        assert_eq!(report.data.mode, ScanMode::Targeted);
    }
}
