use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Classification assigned to an address by the rule engine.
///
/// `Unknown` doubles as "explicitly covered by a range, leave it alone": a
/// positive range match never yields a pass/fail determination.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Allow,
    SoftFail,
    #[default]
    Unknown,
}

impl Outcome {
    pub const ALL: [Outcome; 3] = [Outcome::Allow, Outcome::SoftFail, Outcome::Unknown];

    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Allow => "allow",
            Outcome::SoftFail => "softfail",
            Outcome::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseOutcomeError {
    #[error("unknown outcome: {0} (expected allow|softfail|unknown)")]
    Unknown(String),
}

impl FromStr for Outcome {
    type Err = ParseOutcomeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "allow" | "pass" => Ok(Outcome::Allow),
            "softfail" | "soft-fail" | "soft_fail" => Ok(Outcome::SoftFail),
            "unknown" | "ignore" | "neutral" => Ok(Outcome::Unknown),
            _ => Err(ParseOutcomeError::Unknown(s.to_string())),
        }
    }
}
