use crate::RepoPath;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for srcguard reports.
pub const SCHEMA_REPORT_V1: &str = "srcguard.report.v1";

/// The fixed rule set. Serialized names are stable and appear in reports,
/// annotations, and test assertions.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    MonolithBan,
    SecretLeak,
    ForbiddenFilename,
    CharsetMandate,
}

impl RuleId {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleId::MonolithBan => "monolith_ban",
            RuleId::SecretLeak => "secret_leak",
            RuleId::ForbiddenFilename => "forbidden_filename",
            RuleId::CharsetMandate => "charset_mandate",
        }
    }
}

/// A single recorded policy breach, tied to one file and one rule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Violation {
    pub rule: RuleId,
    pub path: RepoPath,
    pub detail: String,
}

/// Overall scan outcome. Compliant iff zero violations; there is no
/// partial-pass state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ScanMode {
    Tree,
    Targeted,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Run counters carried alongside the violation list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ScanData {
    pub mode: ScanMode,
    pub files_scanned: u32,
    pub files_skipped: u32,
    pub violations_total: u32,
}

/// JSON report envelope (`srcguard.report.v1`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SrcguardReport {
    pub schema: String,
    pub tool: ToolMeta,
    #[serde(with = "time::serde::rfc3339")]
    #[schemars(with = "String")]
    pub started_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    #[schemars(with = "String")]
    pub finished_at: OffsetDateTime,
    pub verdict: Verdict,
    pub violations: Vec<Violation>,
    pub data: ScanData,
}
