//! Config parsing and rule-set resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::{RuleSetConfig, SCHEMA_CONFIG_V1, SpfSandboxConfigV1};
pub use resolve::{ResolvedConfig, RuleSet};

/// Parse `spfsandbox.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<SpfSandboxConfigV1> {
    let cfg: SpfSandboxConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the rule sets the engine will import, in priority order.
pub fn resolve_config(cfg: SpfSandboxConfigV1) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg)
}
