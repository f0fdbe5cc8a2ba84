use crate::model::{SecretConfig, SrcguardConfigV1};

/// Built-in policy defaults.
///
/// Keep these small and readable; anything repository-specific belongs in
/// `srcguard.toml`.
pub fn default_config() -> SrcguardConfigV1 {
    SrcguardConfigV1 {
        schema: Some("srcguard.config.v1".to_string()),
        max_lines: Some(250),
        forbidden_filenames: Some(strings(&[
            ".*CONSTITUTION.*",
            ".*PLAN.*",
            ".*STRATEGY.*",
            ".*PROMPT.*",
            ".*HANDOVER.*",
            ".*AUDIT.*",
        ])),
        secrets: Some(vec![
            secret(r#"d1_token\s*=\s*['"].+['"]"#, "D1 Token Leak"),
            secret(r"bearer\s+ey[a-zA-Z0-9-._]+", "JWT Token Leak"),
            secret(r"ghp_[a-zA-Z0-9]+", "GitHub Personal Access Token"),
            // Requires 20+ chars after sk- and a non-identifier boundary.
            secret(r"(?:^|[^a-zA-Z0-9_-])sk-[a-zA-Z0-9]{20,}", "OpenAI/API Key"),
        ]),
        scan_extensions: Some(strings(&[
            ".js", ".ts", ".jsx", ".tsx", ".py", ".astro", ".css", ".html",
        ])),
        ignored_dirs: Some(strings(&[
            "node_modules",
            ".git",
            "dist",
            ".wrangler",
            ".astro",
            "coverage",
            "venv",
            "__pycache__",
        ])),
        ignored_files: Some(strings(&[
            "package-lock.json",
            "pnpm-lock.yaml",
            "yarn.lock",
            "wrangler.toml",
            "README.md",
            "LICENSE",
        ])),
        // Knowledge-base articles may legitimately use words like "prompt"
        // in their titles.
        exempt_dirs: Some(strings(&["knowledge"])),
        charset_exempt_extensions: Some(strings(&[".md", ".json"])),
        temp_prefix: Some("temp_".to_string()),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn secret(pattern: &str, label: &str) -> SecretConfig {
    SecretConfig {
        pattern: pattern.to_string(),
        label: label.to_string(),
    }
}
