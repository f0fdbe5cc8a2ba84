//! Config parsing and policy resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration
//! provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{SecretConfig, SrcguardConfigV1};
pub use presets::default_config;
pub use resolve::{resolve_policy, Overrides};

/// Parse `srcguard.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<SrcguardConfigV1> {
    let cfg: SrcguardConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}
