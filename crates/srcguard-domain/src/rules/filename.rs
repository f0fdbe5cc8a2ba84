use crate::policy::ScanPolicy;
use crate::report::Violations;
use srcguard_types::{RepoPath, RuleId, Violation};

/// Test the basename against the ordered forbidden patterns; first match
/// wins and no further patterns are tried.
///
/// Returns `true` on a match. This rule is terminal: the caller must not run
/// content rules on a rejected file.
pub fn run(path: &RepoPath, basename: &str, policy: &ScanPolicy, out: &mut Violations) -> bool {
    for forbidden in &policy.forbidden_filenames {
        if forbidden.pattern.is_match(basename) {
            out.add(Violation {
                rule: RuleId::ForbiddenFilename,
                path: path.clone(),
                detail: format!("filename matches forbidden pattern '{}'", forbidden.source),
            });
            return true;
        }
    }
    false
}
