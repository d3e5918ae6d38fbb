//! Explain registry for evaluation outcomes.
//!
//! Maps an outcome (or one of its accepted aliases) to what it means for mail
//! sent from the evaluated address.

use crate::Outcome;

/// Explanation entry for an outcome.
#[derive(Debug, Clone)]
pub struct Explanation {
    pub outcome: Outcome,
    /// Short label.
    pub title: &'static str,
    /// What happens to mail sent from an address with this outcome.
    pub delivery: &'static str,
    /// How the engine arrives at this outcome.
    pub reason: &'static str,
}

/// Look up an explanation by outcome name.
///
/// Returns `None` if the name is not a recognized outcome.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    identifier.parse::<Outcome>().ok().map(explain)
}

pub fn explain(outcome: Outcome) -> Explanation {
    match outcome {
        Outcome::Allow => Explanation {
            outcome,
            title: "Allow",
            delivery: "Mail from this address is accepted and delivered.",
            reason: "\
The address matched none of the imported ranges and the last rule in
evaluation order carries the `allow` outcome.",
        },
        Outcome::SoftFail => Explanation {
            outcome,
            title: "Soft fail",
            delivery: "\
Mail from this address is accepted but flagged, so it is likely to land in spam.",
            reason: "\
The address matched none of the imported ranges and the last rule in
evaluation order carries the `softfail` outcome.",
        },
        Outcome::Unknown => Explanation {
            outcome,
            title: "Unknown",
            delivery: "Mail from this address should be ignored by this record.",
            reason: "\
Either the address fell inside one of the imported ranges, or no rules are
loaded. A range match is never a pass/fail determination on its own.",
        },
    }
}

/// List all canonical outcome names.
pub fn all_outcomes() -> &'static [&'static str] {
    &["allow", "softfail", "unknown"]
}
