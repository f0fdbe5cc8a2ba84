use anyhow::Context;
use srcguard_render::{RenderableReport, RenderableViolation};
use srcguard_types::{SrcguardReport, SCHEMA_REPORT_V1};

pub fn serialize_report(report: &SrcguardReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

pub fn parse_report_json(text: &str) -> anyhow::Result<SrcguardReport> {
    let report: SrcguardReport = serde_json::from_str(text).context("parse report json")?;
    if report.schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {}", report.schema);
    }
    Ok(report)
}

pub fn to_renderable(report: &SrcguardReport) -> RenderableReport {
    RenderableReport {
        verdict: report.verdict,
        violations: report
            .violations
            .iter()
            .map(|v| RenderableViolation {
                rule: v.rule,
                path: v.path.as_str().to_string(),
                detail: v.detail.clone(),
            })
            .collect(),
        files_scanned: report.data.files_scanned,
    }
}
