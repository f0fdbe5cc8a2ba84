//! Builders shared by the domain test modules.

use crate::model::CandidateFile;
use crate::policy::{FilenamePattern, ScanPolicy, SecretPattern};
use regex::RegexBuilder;
use srcguard_types::RepoPath;
use std::collections::BTreeSet;

pub fn candidate(path: &str, text: &str) -> CandidateFile {
    CandidateFile::new(RepoPath::new(path), Some(text.to_string()))
}

fn filename_pattern(source: &str) -> FilenamePattern {
    FilenamePattern {
        pattern: RegexBuilder::new(source)
            .case_insensitive(true)
            .build()
            .expect("test pattern"),
        source: source.to_string(),
    }
}

fn secret_pattern(source: &str, label: &str) -> SecretPattern {
    SecretPattern {
        pattern: regex::Regex::new(source).expect("test pattern"),
        label: label.to_string(),
    }
}

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// A policy equivalent to the built-in defaults, constructed locally so the
/// domain crate's tests do not depend on the settings crate.
pub fn default_policy() -> ScanPolicy {
    ScanPolicy {
        max_lines: 250,
        forbidden_filenames: vec![
            filename_pattern(".*CONSTITUTION.*"),
            filename_pattern(".*PLAN.*"),
            filename_pattern(".*STRATEGY.*"),
            filename_pattern(".*PROMPT.*"),
            filename_pattern(".*HANDOVER.*"),
            filename_pattern(".*AUDIT.*"),
        ],
        secrets: vec![
            secret_pattern(r#"d1_token\s*=\s*['"].+['"]"#, "D1 Token Leak"),
            secret_pattern(r"bearer\s+ey[a-zA-Z0-9-._]+", "JWT Token Leak"),
            secret_pattern(r"ghp_[a-zA-Z0-9]+", "GitHub Personal Access Token"),
            secret_pattern(r"(?:^|[^a-zA-Z0-9_-])sk-[a-zA-Z0-9]{20,}", "OpenAI/API Key"),
        ],
        scan_extensions: set(&[".js", ".ts", ".jsx", ".tsx", ".py", ".astro", ".css", ".html"]),
        ignored_dirs: set(&[
            "node_modules",
            ".git",
            "dist",
            ".wrangler",
            ".astro",
            "coverage",
            "venv",
            "__pycache__",
        ]),
        ignored_files: set(&[
            "package-lock.json",
            "pnpm-lock.yaml",
            "yarn.lock",
            "wrangler.toml",
            "README.md",
            "LICENSE",
        ]),
        exempt_dirs: set(&["knowledge"]),
        charset_exempt_extensions: set(&[".md", ".json"]),
        temp_prefix: "temp_".to_string(),
    }
}
