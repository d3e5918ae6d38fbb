use crate::matcher::RangeMatcher;
use spfsandbox_types::{Outcome, RangeSource, SpfRecord};
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, trace};

type Listener = Box<dyn FnMut()>;

/// Externally visible engine states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineState {
    Empty,
    Populated,
}

/// Outcome of an evaluation together with the rule that decided it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Evaluation<'a> {
    pub outcome: Outcome,
    /// The rule whose range covered the address, if any.
    pub matched: Option<&'a RangeMatcher>,
    /// Index of the deciding rule: the matching one, or the last one walked.
    pub rule_index: Option<usize>,
}

/// Ordered range rules with import notifications.
///
/// Rules are evaluated in import order. Single-threaded: listeners run inline
/// during [`RuleEngine::import`], and the engine is not `Sync`.
#[derive(Default)]
pub struct RuleEngine {
    rules: Vec<RangeMatcher>,
    listeners: Vec<Listener>,
}

impl RuleEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every rule and every listener.
    pub fn wipe(&mut self) {
        debug!(
            rules = self.rules.len(),
            listeners = self.listeners.len(),
            "wiping rule engine"
        );
        self.rules.clear();
        self.listeners.clear();
    }

    /// Append one rule per distinct range in `entries`, all tagged `outcome`,
    /// then notify listeners.
    ///
    /// Ranges are deduplicated within this call only; first occurrence wins
    /// the position. Listeners run even when nothing was added. Import lowest
    /// priority first: the last rule decides the fallback in [`RuleEngine::eval`].
    pub fn import<I>(&mut self, entries: I, outcome: Outcome)
    where
        I: IntoIterator,
        I::Item: RangeSource,
    {
        let mut seen: HashSet<String> = HashSet::new();
        let before = self.rules.len();

        for entry in entries {
            let range = entry.range();
            if !seen.insert(range.to_string()) {
                continue;
            }
            self.rules.push(RangeMatcher::new(outcome, range));
        }

        debug!(
            added = self.rules.len() - before,
            total = self.rules.len(),
            %outcome,
            "imported range rules"
        );

        for listener in &mut self.listeners {
            listener();
        }
    }

    /// Import a record's `ip4` entries followed by its `ip6` entries as one batch.
    pub fn import_record(&mut self, record: &SpfRecord, outcome: Outcome) {
        self.import(record.entries(), outcome);
    }

    /// Evaluate `address` against the rules in order.
    ///
    /// A range match short-circuits to [`Outcome::Unknown`]. Otherwise the
    /// outcome of the last rule is returned, or `Unknown` with no rules.
    pub fn eval(&self, address: &str) -> Outcome {
        self.explain_eval(address).outcome
    }

    /// Same walk as [`RuleEngine::eval`], also reporting the deciding rule.
    pub fn explain_eval(&self, address: &str) -> Evaluation<'_> {
        let mut fallback = Evaluation {
            outcome: Outcome::Unknown,
            matched: None,
            rule_index: None,
        };

        for (index, rule) in self.rules.iter().enumerate() {
            if rule.matches(address) {
                trace!(address, range = rule.range(), index, "range matched");
                return Evaluation {
                    outcome: Outcome::Unknown,
                    matched: Some(rule),
                    rule_index: Some(index),
                };
            }
            fallback.outcome = rule.outcome();
            fallback.rule_index = Some(index);
        }

        trace!(address, outcome = %fallback.outcome, "no range matched");
        fallback
    }

    /// Register a listener called after every future import.
    pub fn listen<F>(&mut self, listener: F)
    where
        F: FnMut() + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn state(&self) -> EngineState {
        if self.is_empty() {
            EngineState::Empty
        } else {
            EngineState::Populated
        }
    }

    pub fn rules(&self) -> &[RangeMatcher] {
        &self.rules
    }
}

impl fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rules)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
