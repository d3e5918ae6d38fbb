//! The `eval` use case: build the engine from config and evaluate addresses.

use anyhow::Context;
use spfsandbox_domain::RuleEngine;
use spfsandbox_settings::ResolvedConfig;
use spfsandbox_types::{
    AddressResult, EvalData, EvalReport, Outcome, SCHEMA_EVAL_REPORT_V1, ToolMeta,
};
use std::cell::Cell;
use std::rc::Rc;
use time::OffsetDateTime;
use tracing::{debug, info};

/// Input for the eval use case.
#[derive(Clone, Debug)]
pub struct EvalInput<'a> {
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// Addresses to evaluate, in output order.
    pub addresses: &'a [String],
}

/// Output from the eval use case.
#[derive(Clone, Debug)]
pub struct EvalOutput {
    pub report: EvalReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Parse and resolve `config_text`. Empty text is allowed and resolves to no rule sets.
fn resolve_text(config_text: &str) -> anyhow::Result<ResolvedConfig> {
    let cfg = if config_text.trim().is_empty() {
        spfsandbox_settings::SpfSandboxConfigV1::default()
    } else {
        spfsandbox_settings::parse_config_toml(config_text).context("parse config")?
    };
    spfsandbox_settings::resolve_config(cfg).context("resolve config")
}

/// Resolve `config_text` and import every rule set into a fresh engine.
pub fn build_engine(config_text: &str) -> anyhow::Result<(RuleEngine, ResolvedConfig)> {
    let resolved = resolve_text(config_text)?;
    let mut engine = RuleEngine::new();
    resolved.load_into(&mut engine);
    debug!(rules = engine.len(), state = ?engine.state(), "engine built");
    Ok((engine, resolved))
}

/// Run the eval use case: resolve config, build the engine, evaluate each address.
pub fn run_eval(input: EvalInput<'_>) -> anyhow::Result<EvalOutput> {
    let started_at = OffsetDateTime::now_utc();

    let resolved = resolve_text(input.config_text)?;

    let mut engine = RuleEngine::new();
    let imports = Rc::new(Cell::new(0u32));
    let counter = imports.clone();
    engine.listen(move || counter.set(counter.get() + 1));
    resolved.load_into(&mut engine);

    let results: Vec<AddressResult> = input
        .addresses
        .iter()
        .map(|address| {
            let evaluation = engine.explain_eval(address);
            AddressResult {
                address: address.clone(),
                outcome: evaluation.outcome,
                matched_range: evaluation.matched.map(|m| m.range().to_string()),
            }
        })
        .collect();

    let data = EvalData {
        rule_sets_loaded: imports.get(),
        rules_loaded: engine.len() as u32,
        addresses_evaluated: results.len() as u32,
    };

    let report = EvalReport {
        schema: SCHEMA_EVAL_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "spfsandbox".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        results,
        data,
    };

    info!(
        rule_sets = report.data.rule_sets_loaded,
        rules = report.data.rules_loaded,
        allow = report.count(Outcome::Allow),
        softfail = report.count(Outcome::SoftFail),
        unknown = report.count(Outcome::Unknown),
        "evaluation finished"
    );

    Ok(EvalOutput {
        report,
        resolved_config: resolved,
    })
}
