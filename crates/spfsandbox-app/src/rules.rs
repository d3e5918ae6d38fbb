//! The `rules` use case: list compiled rules in evaluation order.

use crate::eval::build_engine;
use spfsandbox_types::Outcome;

/// One compiled rule as shown to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleLine {
    pub index: usize,
    pub outcome: Outcome,
    pub range: String,
    /// Derived pattern rendered as its equivalent regular expression.
    pub pattern: String,
}

pub fn run_rules(config_text: &str) -> anyhow::Result<Vec<RuleLine>> {
    let (engine, _) = build_engine(config_text)?;
    Ok(engine
        .rules()
        .iter()
        .enumerate()
        .map(|(index, rule)| RuleLine {
            index,
            outcome: rule.outcome(),
            range: rule.range().to_string(),
            pattern: rule.pattern().to_string(),
        })
        .collect())
}

pub fn format_rules(lines: &[RuleLine]) -> String {
    if lines.is_empty() {
        return "No rules loaded.\n".to_string();
    }

    let mut out = String::new();
    for line in lines {
        out.push_str(&format!(
            "{:>3}  {:<8}  {}  ->  {}\n",
            line.index, line.outcome, line.range, line.pattern
        ));
    }
    out
}
