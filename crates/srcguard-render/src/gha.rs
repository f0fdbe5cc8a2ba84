use crate::RenderableReport;

/// Render violations as GitHub Actions workflow command annotations.
///
/// Format: `::error file={path}::{message}`
pub fn render_github_annotations(report: &RenderableReport) -> Vec<String> {
    let mut out = Vec::new();

    for v in &report.violations {
        let message = format!("[{}] {}", v.rule.as_str(), v.detail)
            .replace('%', "%25")
            .replace('\r', "%0D")
            .replace('\n', "%0A");
        out.push(format!("::error file={}::{}", v.path, message));
    }

    out
}
