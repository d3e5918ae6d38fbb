use anyhow::Context;
use spfsandbox_render::{RenderableData, RenderableOutcome, RenderableReport, RenderableResult};
use spfsandbox_types::{EvalReport, Outcome, SCHEMA_EVAL_REPORT_V1};

pub fn parse_report_json(text: &str) -> anyhow::Result<EvalReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();

    if schema != SCHEMA_EVAL_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema} (expected {SCHEMA_EVAL_REPORT_V1})");
    }

    serde_json::from_value(value).context("parse spfsandbox eval report")
}

/// Pretty JSON with a trailing newline.
pub fn serialize_report(report: &EvalReport) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(report).context("serialize report")?;
    json.push('\n');
    Ok(json)
}

pub fn to_renderable(report: &EvalReport) -> RenderableReport {
    RenderableReport {
        results: report
            .results
            .iter()
            .map(|r| RenderableResult {
                address: r.address.clone(),
                outcome: match r.outcome {
                    Outcome::Allow => RenderableOutcome::Allow,
                    Outcome::SoftFail => RenderableOutcome::SoftFail,
                    Outcome::Unknown => RenderableOutcome::Unknown,
                },
                matched_range: r.matched_range.clone(),
            })
            .collect(),
        data: RenderableData {
            rule_sets_loaded: report.data.rule_sets_loaded,
            rules_loaded: report.data.rules_loaded,
        },
    }
}
