//! The four rule evaluators.
//!
//! Content rules (monolith, secrets, charset) are cumulative and run in a
//! fixed order. The filename rule is terminal and runs during
//! classification instead (see `classify`).

use crate::policy::ScanPolicy;
use crate::report::Violations;
use srcguard_types::RepoPath;

pub mod charset;
pub mod filename;
pub mod monolith;
pub mod secrets;


/// Run all content-level rules against one file, in deterministic order.
pub fn run_content_rules(
    path: &RepoPath,
    ext: &str,
    content: &str,
    policy: &ScanPolicy,
    out: &mut Violations,
) {
    monolith::run(path, content, policy, out);
    secrets::run(path, content, policy, out);
    if policy.charset_applies_to(ext) {
        charset::run(path, content, out);
    }
}
