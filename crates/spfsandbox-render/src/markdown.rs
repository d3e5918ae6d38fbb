use crate::{RenderableOutcome, RenderableReport};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# SPF sandbox evaluation\n\n");
    out.push_str(&format!(
        "- Rule sets: {} ({} rules)\n- Addresses: {} ({} allow / {} softfail / {} unknown)\n\n",
        report.data.rule_sets_loaded,
        report.data.rules_loaded,
        report.results.len(),
        report.count(RenderableOutcome::Allow),
        report.count(RenderableOutcome::SoftFail),
        report.count(RenderableOutcome::Unknown),
    ));

    if report.data.rules_loaded == 0 {
        out.push_str("> Note: no rules loaded; every address evaluates to unknown.\n\n");
    }

    if report.results.is_empty() {
        out.push_str("No addresses evaluated.\n");
        return out;
    }

    out.push_str("| Address | Outcome | Matched range |\n");
    out.push_str("|---|---|---|\n");
    for r in &report.results {
        let outcome = match r.outcome {
            RenderableOutcome::Allow => "ALLOW",
            RenderableOutcome::SoftFail => "SOFTFAIL",
            RenderableOutcome::Unknown => "UNKNOWN",
        };
        let matched = r
            .matched_range
            .as_deref()
            .map(code_cell)
            .unwrap_or_else(|| "-".to_string());
        out.push_str(&format!(
            "| {} | {} | {} |\n",
            code_cell(&r.address),
            outcome,
            matched
        ));
    }

    out
}

/// Code span that stays inside one table cell: pipes are escaped, line breaks
/// flattened, and the fence is longer than any backtick run in `text`.
fn code_cell(text: &str) -> String {
    let escaped = text.replace(['\r', '\n'], " ").replace('|', "\\|");

    let mut longest = 0;
    let mut run = 0;
    for c in escaped.chars() {
        if c == '`' {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }

    let fence = "`".repeat(longest + 1);
    let pad = if escaped.starts_with('`') || escaped.ends_with('`') {
        " "
    } else {
        ""
    };
    format!("{fence}{pad}{escaped}{pad}{fence}")
}
