//! The `explain` use case: describe what an outcome means for delivery.

use spfsandbox_types::explain::{self, Explanation};

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    Found(Explanation),
    /// Unknown identifier; includes the canonical outcome names.
    NotFound {
        identifier: String,
        available_outcomes: &'static [&'static str],
    },
}

pub fn run_explain(identifier: &str) -> ExplainOutput {
    match explain::lookup_explanation(identifier) {
        Some(exp) => ExplainOutput::Found(exp),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_outcomes: explain::all_outcomes(),
        },
    }
}

/// Format an explanation for terminal display.
pub fn format_explanation(exp: &Explanation) -> String {
    let mut out = String::new();

    let heading = format!("{} ({})", exp.title, exp.outcome);
    out.push_str(&heading);
    out.push('\n');
    out.push_str(&"=".repeat(heading.len()));
    out.push_str("\n\n");
    out.push_str(exp.delivery);
    out.push_str("\n\n");
    out.push_str("Why\n");
    out.push_str("---\n");
    out.push_str(exp.reason);
    out.push('\n');

    out
}

/// Format the "not found" error message for terminal display.
pub fn format_not_found(identifier: &str, outcomes: &[&'static str]) -> String {
    let mut out = String::new();

    out.push_str(&format!("Unknown outcome: {}\n\n", identifier));
    out.push_str("Available outcomes:\n");
    for outcome in outcomes {
        out.push_str(&format!("  - {}\n", outcome));
    }

    out
}
