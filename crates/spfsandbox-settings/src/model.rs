use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const SCHEMA_CONFIG_V1: &str = "spfsandbox.config.v1";

/// `spfsandbox.toml` schema v1.
///
/// This is a *user-facing* config model: outcomes stay strings here and are
/// validated during resolution.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SpfSandboxConfigV1 {
    /// Optional schema string for tooling (`spfsandbox.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Rule sets in import order. Later sets take priority for the fallback outcome.
    #[serde(default)]
    pub rule_sets: Vec<RuleSetConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RuleSetConfig {
    /// Label used in logs and error messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// `allow`, `softfail` or `unknown` (aliases: `pass`, `soft-fail`, `ignore`, `neutral`).
    pub outcome: String,

    /// `ip4` mechanism ranges, e.g. `192.168.0.0/16`.
    #[serde(default)]
    pub ip4: Vec<String>,

    /// `ip6` mechanism ranges, e.g. `2001:db8::/32`.
    #[serde(default)]
    pub ip6: Vec<String>,
}
