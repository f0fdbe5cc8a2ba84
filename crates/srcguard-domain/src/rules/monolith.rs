use crate::policy::ScanPolicy;
use crate::report::Violations;
use srcguard_types::{RepoPath, RuleId, Violation};

/// Emit one violation when the newline-delimited line count exceeds the
/// limit. Exactly one per offending file, however far over it is.
pub fn run(path: &RepoPath, content: &str, policy: &ScanPolicy, out: &mut Violations) {
    let count = content.lines().count();
    if count > policy.max_lines {
        out.add(Violation {
            rule: RuleId::MonolithBan,
            path: path.clone(),
            detail: format!("file length {} > {} lines", count, policy.max_lines),
        });
    }
}
