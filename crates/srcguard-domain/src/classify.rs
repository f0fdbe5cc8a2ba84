use crate::model::CandidateFile;
use crate::policy::ScanPolicy;
use crate::report::Violations;
use crate::rules::filename;

/// Outcome of the classification gate.
///
/// Classification is a hard gate, not a soft signal: a `Skip` means zero
/// content violations for the file, whatever its content holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Classification {
    Skip,
    Scan,
}

/// The ordered decision list, each step a hard short-circuit:
///
/// 1. whitelisted basename -> Skip (wins over every later rule)
/// 2. undecodable as text -> Skip (binary/vendor asset)
/// 3. temp-prefixed basename -> Skip
/// 4. forbidden-filename rule, unless the path is confidentiality-exempt;
///    a match is terminal and already recorded in `out`
/// 5. extension out of content-scan scope -> Skip
/// 6. Scan
pub fn classify(file: &CandidateFile, policy: &ScanPolicy, out: &mut Violations) -> Classification {
    let basename = file.basename();

    if policy.is_whitelisted(basename) {
        return Classification::Skip;
    }

    if file.text.is_none() {
        return Classification::Skip;
    }

    if !policy.temp_prefix.is_empty() && basename.starts_with(&policy.temp_prefix) {
        return Classification::Skip;
    }

    if !policy.is_confidentiality_exempt(&file.path)
        && filename::run(&file.path, basename, policy, out)
    {
        // Terminal: the file itself is rejected, content rules never run.
        return Classification::Skip;
    }

    if !policy.is_scannable_extension(file.extension()) {
        return Classification::Skip;
    }

    Classification::Scan
}
