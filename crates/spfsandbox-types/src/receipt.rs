use crate::Outcome;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for evaluation reports.
pub const SCHEMA_EVAL_REPORT_V1: &str = "spfsandbox.eval.v1";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Result for a single evaluated address.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AddressResult {
    pub address: String,
    pub outcome: Outcome,

    /// Range string of the rule that matched, if any rule did.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_range: Option<String>,
}

/// Summary of the rule set the addresses were evaluated against.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct EvalData {
    pub rule_sets_loaded: u32,
    pub rules_loaded: u32,
    pub addresses_evaluated: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EvalReport {
    /// Versioned schema identifier (`spfsandbox.eval.v1`).
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub results: Vec<AddressResult>,
    pub data: EvalData,
}

impl EvalReport {
    pub fn count(&self, outcome: Outcome) -> usize {
        self.results.iter().filter(|r| r.outcome == outcome).count()
    }
}
