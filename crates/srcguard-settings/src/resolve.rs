use crate::model::SrcguardConfigV1;
use crate::presets;
use anyhow::Context;
use regex::{Regex, RegexBuilder};
use srcguard_domain::policy::{FilenamePattern, ScanPolicy, SecretPattern};
use std::collections::BTreeSet;

/// CLI-level overrides, layered on top of file config and defaults.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub max_lines: Option<usize>,
}

/// Resolve user config + overrides into the compiled, immutable policy.
///
/// Layering: built-in defaults, then present config fields (wholesale
/// replacement), then CLI overrides. Pattern compilation failures surface
/// here, before any file is touched.
pub fn resolve_policy(cfg: SrcguardConfigV1, overrides: Overrides) -> anyhow::Result<ScanPolicy> {
    let defaults = presets::default_config();

    let max_lines = overrides
        .max_lines
        .or(cfg.max_lines)
        .or(defaults.max_lines)
        .unwrap_or(250);

    let forbidden_sources = cfg
        .forbidden_filenames
        .or(defaults.forbidden_filenames)
        .unwrap_or_default();
    let mut forbidden_filenames = Vec::with_capacity(forbidden_sources.len());
    for source in forbidden_sources {
        let pattern = RegexBuilder::new(&source)
            .case_insensitive(true)
            .build()
            .with_context(|| format!("invalid forbidden filename pattern: {source}"))?;
        forbidden_filenames.push(FilenamePattern { pattern, source });
    }

    let secret_configs = cfg.secrets.or(defaults.secrets).unwrap_or_default();
    let mut secrets = Vec::with_capacity(secret_configs.len());
    for sc in secret_configs {
        let pattern = Regex::new(&sc.pattern)
            .with_context(|| format!("invalid secret pattern for '{}': {}", sc.label, sc.pattern))?;
        secrets.push(SecretPattern {
            pattern,
            label: sc.label,
        });
    }

    Ok(ScanPolicy {
        max_lines,
        forbidden_filenames,
        secrets,
        scan_extensions: to_set(cfg.scan_extensions.or(defaults.scan_extensions)),
        ignored_dirs: to_set(cfg.ignored_dirs.or(defaults.ignored_dirs)),
        ignored_files: to_set(cfg.ignored_files.or(defaults.ignored_files)),
        exempt_dirs: to_set(cfg.exempt_dirs.or(defaults.exempt_dirs)),
        charset_exempt_extensions: to_set(
            cfg.charset_exempt_extensions
                .or(defaults.charset_exempt_extensions),
        ),
        temp_prefix: cfg
            .temp_prefix
            .or(defaults.temp_prefix)
            .unwrap_or_default(),
    })
}

fn to_set(items: Option<Vec<String>>) -> BTreeSet<String> {
    items.unwrap_or_default().into_iter().collect()
}
