use srcguard_types::{RuleId, Verdict};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableViolation {
    pub rule: RuleId,
    pub path: String,
    pub detail: String,
}

/// What the renderers need, decoupled from the report envelope so renderer
/// changes never force envelope changes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub verdict: Verdict,
    pub violations: Vec<RenderableViolation>,
    pub files_scanned: u32,
}
