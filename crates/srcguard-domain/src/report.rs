use srcguard_types::{RuleId, ScanData, Verdict, Violation};

/// Append-only violation aggregator, owned by exactly one scan run.
///
/// Created empty, appended to during evaluation, read once at the end.
#[derive(Debug, Default)]
pub struct Violations {
    records: Vec<Violation>,
}

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, violation: Violation) {
        self.records.push(violation);
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn records(&self) -> &[Violation] {
        &self.records
    }

    pub fn into_records(self) -> Vec<Violation> {
        self.records
    }
}

/// Result of a pure evaluation pass over a set of candidates.
#[derive(Clone, Debug)]
pub struct DomainReport {
    pub verdict: Verdict,
    pub violations: Vec<Violation>,
    pub data: ScanData,
}

/// Compliant iff the sequence is empty; rendering has no effect on this.
pub fn compute_verdict(violations: &[Violation]) -> Verdict {
    if violations.is_empty() {
        Verdict::Pass
    } else {
        Verdict::Fail
    }
}

/// Stable ordering for rendering: path, then rule, then detail.
///
/// Traversal order is not guaranteed, so reports are sorted before they are
/// rendered or serialized.
pub fn compare_violations(a: &Violation, b: &Violation) -> std::cmp::Ordering {
    a.path
        .cmp(&b.path)
        .then(rule_rank(a.rule).cmp(&rule_rank(b.rule)))
        .then_with(|| a.detail.cmp(&b.detail))
}

fn rule_rank(rule: RuleId) -> u8 {
    match rule {
        RuleId::ForbiddenFilename => 0,
        RuleId::MonolithBan => 1,
        RuleId::SecretLeak => 2,
        RuleId::CharsetMandate => 3,
    }
}
