use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `srcguard.toml` schema v1.
///
/// This is a *user-facing* config model: every field is optional so a partial
/// file layers cleanly over the built-in defaults. A present field replaces
/// the corresponding default wholesale.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SrcguardConfigV1 {
    /// Optional schema string for tooling (`srcguard.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Maximum allowed lines per scanned file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_lines: Option<usize>,

    /// Ordered regex patterns; a basename matching any of them is rejected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forbidden_filenames: Option<Vec<String>>,

    /// Ordered secret patterns with labels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secrets: Option<Vec<SecretConfig>>,

    /// Extensions (with leading dot) whose content is scanned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scan_extensions: Option<Vec<String>>,

    /// Directory basenames pruned before descent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignored_dirs: Option<Vec<String>>,

    /// Whitelisted basenames, never scanned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignored_files: Option<Vec<String>>,

    /// Directories exempt from the forbidden-filename rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exempt_dirs: Option<Vec<String>>,

    /// Extensions the charset mandate does not apply to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charset_exempt_extensions: Option<Vec<String>>,

    /// Basename prefix marking temporary artifacts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temp_prefix: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SecretConfig {
    /// Regex tested against the full file content.
    pub pattern: String,

    /// Human-readable label carried into the violation detail.
    pub label: String,
}
