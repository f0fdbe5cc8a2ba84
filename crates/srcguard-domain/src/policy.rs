use regex::Regex;
use srcguard_types::RepoPath;
use std::collections::BTreeSet;

/// A secret-leak pattern with its human-readable label.
#[derive(Clone, Debug)]
pub struct SecretPattern {
    pub pattern: Regex,
    pub label: String,
}

/// A forbidden-filename pattern. Compiled case-insensitively; the source
/// string is retained for violation details.
#[derive(Clone, Debug)]
pub struct FilenamePattern {
    pub pattern: Regex,
    pub source: String,
}

/// Immutable, compiled policy for one scan run.
///
/// Constructed once by `srcguard-settings::resolve_policy` and passed by
/// reference into every component. No mutation after construction.
#[derive(Clone, Debug)]
pub struct ScanPolicy {
    /// Maximum allowed newline-delimited lines per file.
    pub max_lines: usize,

    /// Ordered filename patterns; first match wins.
    pub forbidden_filenames: Vec<FilenamePattern>,

    /// Ordered secret patterns; each is tested independently.
    pub secrets: Vec<SecretPattern>,

    /// Extensions (with leading dot) whose content is scanned.
    pub scan_extensions: BTreeSet<String>,

    /// Directory basenames pruned before descent.
    pub ignored_dirs: BTreeSet<String>,

    /// Whitelisted basenames, skipped before any rule runs.
    pub ignored_files: BTreeSet<String>,

    /// Directories whose contents are exempt from the filename rule.
    pub exempt_dirs: BTreeSet<String>,

    /// Extensions the charset rule does not apply to.
    pub charset_exempt_extensions: BTreeSet<String>,

    /// Basename prefix marking temporary artifacts.
    pub temp_prefix: String,
}

impl ScanPolicy {
    pub fn is_whitelisted(&self, basename: &str) -> bool {
        self.ignored_files.contains(basename)
    }

    pub fn is_ignored_dir(&self, basename: &str) -> bool {
        self.ignored_dirs.contains(basename)
    }

    pub fn is_scannable_extension(&self, ext: &str) -> bool {
        self.scan_extensions.contains(ext)
    }

    /// True when any directory component of `path` is confidentiality-exempt.
    pub fn is_confidentiality_exempt(&self, path: &RepoPath) -> bool {
        path.dir_components().any(|d| self.exempt_dirs.contains(d))
    }

    pub fn charset_applies_to(&self, ext: &str) -> bool {
        !self.charset_exempt_extensions.contains(ext)
    }
}
