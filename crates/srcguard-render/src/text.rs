use crate::RenderableReport;
use srcguard_types::Verdict;

/// Render the console report.
///
/// A compliant run is a single success line; a non-compliant run is one line
/// per violation followed by a total count. Rendering never influences the
/// verdict.
pub fn render_text(report: &RenderableReport) -> String {
    if report.verdict == Verdict::Pass {
        return format!(
            "srcguard: PASS ({} files scanned, no violations)\n",
            report.files_scanned
        );
    }

    let mut out = String::from("srcguard: FAIL\n");
    for v in &report.violations {
        out.push_str(&format!("[{}] {}: {}\n", v.rule.as_str(), v.path, v.detail));
    }
    out.push_str(&format!("total violations: {}\n", report.violations.len()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RenderableViolation;
    use srcguard_types::RuleId;

    #[test]
    fn compliant_run_is_a_single_line() {
        let report = RenderableReport {
            verdict: Verdict::Pass,
            violations: Vec::new(),
            files_scanned: 12,
        };
        assert_eq!(
            render_text(&report),
            "srcguard: PASS (12 files scanned, no violations)\n"
        );
    }

    #[test]
    fn violations_render_one_line_each_plus_total() {
        let report = RenderableReport {
            verdict: Verdict::Fail,
            violations: vec![
                RenderableViolation {
                    rule: RuleId::MonolithBan,
                    path: "big.py".to_string(),
                    detail: "file length 300 > 250 lines".to_string(),
                },
                RenderableViolation {
                    rule: RuleId::SecretLeak,
                    path: "workers/auth.js".to_string(),
                    detail: "potential JWT Token Leak detected".to_string(),
                },
            ],
            files_scanned: 2,
        };

        let text = render_text(&report);
        assert_eq!(
            text,
            "srcguard: FAIL\n\
             [monolith_ban] big.py: file length 300 > 250 lines\n\
             [secret_leak] workers/auth.js: potential JWT Token Leak detected\n\
             total violations: 2\n"
        );
    }
}
