use crate::model::{RuleSetConfig, SCHEMA_CONFIG_V1, SpfSandboxConfigV1};
use anyhow::Context;
use spfsandbox_domain::RuleEngine;
use spfsandbox_types::{AddressEntry, Outcome, SpfRecord};
use tracing::{debug, warn};

/// A validated rule set ready for import.
#[derive(Clone, Debug, PartialEq)]
pub struct RuleSet {
    pub name: String,
    pub outcome: Outcome,
    pub record: SpfRecord,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResolvedConfig {
    pub rule_sets: Vec<RuleSet>,
}

impl ResolvedConfig {
    /// Import every rule set into `engine`, one import per set, in config order.
    pub fn load_into(&self, engine: &mut RuleEngine) {
        for set in &self.rule_sets {
            debug!(rule_set = %set.name, outcome = %set.outcome, "loading rule set");
            engine.import_record(&set.record, set.outcome);
        }
    }
}

pub fn resolve_config(cfg: SpfSandboxConfigV1) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref()
        && schema != SCHEMA_CONFIG_V1
    {
        anyhow::bail!("unsupported config schema: {schema} (expected {SCHEMA_CONFIG_V1})");
    }

    let rule_sets = cfg
        .rule_sets
        .into_iter()
        .enumerate()
        .map(|(index, set)| resolve_rule_set(index, set))
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(ResolvedConfig { rule_sets })
}

fn resolve_rule_set(index: usize, set: RuleSetConfig) -> anyhow::Result<RuleSet> {
    let name = set
        .name
        .clone()
        .unwrap_or_else(|| format!("rule_set_{}", index + 1));

    let outcome = set
        .outcome
        .parse::<Outcome>()
        .with_context(|| format!("invalid outcome for {name}"))?;

    validate_ranges(&name, "ip4", &set.ip4)?;
    validate_ranges(&name, "ip6", &set.ip6)?;

    let record = SpfRecord {
        ip4: set.ip4.into_iter().map(AddressEntry::ip4).collect(),
        ip6: set.ip6.into_iter().map(AddressEntry::ip6).collect(),
    };
    if record.is_empty() {
        warn!(rule_set = %name, "rule set has no ip4 or ip6 ranges; it adds no rules");
    }

    Ok(RuleSet {
        name,
        outcome,
        record,
    })
}

/// Only emptiness is rejected; malformed ranges are left to degrade in the engine.
fn validate_ranges(name: &str, mechanism: &str, ranges: &[String]) -> anyhow::Result<()> {
    for (i, range) in ranges.iter().enumerate() {
        if range.trim().is_empty() {
            anyhow::bail!("empty {mechanism} range at position {i} in {name}");
        }
    }
    Ok(())
}
