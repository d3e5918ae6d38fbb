use crate::pattern::RangePattern;
use spfsandbox_types::Outcome;

/// A single range rule: the pattern derived from one range string plus the
/// outcome applied when an address falls outside it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RangeMatcher {
    outcome: Outcome,
    range: String,
    pattern: RangePattern,
}

impl RangeMatcher {
    pub fn new(outcome: Outcome, range: impl Into<String>) -> Self {
        let range = range.into();
        let pattern = RangePattern::derive(&range);
        Self {
            outcome,
            range,
            pattern,
        }
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// The range string as imported, including any `/prefix` suffix.
    pub fn range(&self) -> &str {
        &self.range
    }

    pub fn pattern(&self) -> &RangePattern {
        &self.pattern
    }

    pub fn matches(&self, address: &str) -> bool {
        self.pattern.is_match(address)
    }
}
