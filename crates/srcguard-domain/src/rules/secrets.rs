use crate::policy::ScanPolicy;
use crate::report::Violations;
use srcguard_types::{RepoPath, RuleId, Violation};

/// Test every secret pattern independently against the full file content.
///
/// A file accumulates one violation per distinct matching pattern, at most
/// once per pattern no matter how often it matches.
pub fn run(path: &RepoPath, content: &str, policy: &ScanPolicy, out: &mut Violations) {
    for secret in &policy.secrets {
        if secret.pattern.is_match(content) {
            out.add(Violation {
                rule: RuleId::SecretLeak,
                path: path.clone(),
                detail: format!("potential {} detected", secret.label),
            });
        }
    }
}
