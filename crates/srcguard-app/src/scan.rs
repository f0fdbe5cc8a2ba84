//! The `scan` use case: evaluate policy over a tree or a targeted file list.

use anyhow::Context;
use camino::Utf8Path;
use srcguard_domain::model::CandidateFile;
use srcguard_settings::Overrides;
use srcguard_types::{RepoPath, ScanMode, SrcguardReport, ToolMeta, Verdict, SCHEMA_REPORT_V1};
use time::OffsetDateTime;

/// Input for the scan use case.
#[derive(Clone, Debug)]
pub struct ScanInput<'a> {
    /// Repository root the scan is anchored at.
    pub repo_root: &'a Utf8Path,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
    /// Targeted mode: explicit repo-relative paths instead of a tree walk.
    pub targets: Option<Vec<RepoPath>>,
}

/// Output from the scan use case.
#[derive(Clone, Debug)]
pub struct ScanOutput {
    pub report: SrcguardReport,
    /// Per-file problems that degraded to skips (never violations).
    pub warnings: Vec<String>,
}

/// Run a scan: parse config, gather candidates, evaluate, produce a report.
///
/// Both modes share the same candidate pipeline; the only difference is
/// where the path list comes from.
pub fn run_scan(input: ScanInput<'_>) -> anyhow::Result<ScanOutput> {
    let started_at = OffsetDateTime::now_utc();

    let cfg = if input.config_text.trim().is_empty() {
        srcguard_settings::SrcguardConfigV1::default()
    } else {
        srcguard_settings::parse_config_toml(input.config_text).context("parse config")?
    };
    let policy =
        srcguard_settings::resolve_policy(cfg, input.overrides.clone()).context("resolve policy")?;

    if !input.repo_root.is_dir() {
        anyhow::bail!(
            "scan root does not exist or is not a directory: {}",
            input.repo_root
        );
    }

    let mut warnings = Vec::new();

    let (mode, paths) = match &input.targets {
        Some(targets) => (
            ScanMode::Targeted,
            srcguard_repo::resolve_targets(input.repo_root, targets, &mut warnings),
        ),
        None => (
            ScanMode::Tree,
            srcguard_repo::walk_tree(input.repo_root, &policy).context("walk source tree")?,
        ),
    };

    let mut files: Vec<CandidateFile> = Vec::with_capacity(paths.len());
    for rel in paths {
        match srcguard_repo::load_candidate(input.repo_root, &rel) {
            Ok(file) => files.push(file),
            // One unreadable file must never abort the run.
            Err(err) => warnings.push(format!("could not scan {rel}: {err:#}")),
        }
    }

    let domain_report = srcguard_domain::evaluate(&files, mode, &policy);
    let finished_at = OffsetDateTime::now_utc();

    let report = SrcguardReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "srcguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        verdict: domain_report.verdict,
        violations: domain_report.violations,
        data: domain_report.data,
    };

    Ok(ScanOutput { report, warnings })
}

/// Map verdict to exit code: 0 = compliant, 1 = violations found.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Fail => 1,
    }
}
