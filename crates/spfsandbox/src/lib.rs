//! Sandboxed evaluation of SPF `ip4`/`ip6` ranges.
//!
//! # Example
//!
//! ```
//! use spfsandbox::{Outcome, RuleEngine};
//!
//! let mut engine = RuleEngine::new();
//! engine.import(["192.168.0.0/16"], Outcome::SoftFail);
//! engine.import(["10.0.0.0/8"], Outcome::Allow);
//!
//! // Covered by a range: not a pass/fail determination.
//! assert_eq!(engine.eval("10.1.2.3"), Outcome::Unknown);
//! // Outside every range: the last imported rule decides.
//! assert_eq!(engine.eval("8.8.8.8"), Outcome::Allow);
//! ```

#![forbid(unsafe_code)]

pub use spfsandbox_domain::{
    EngineState, Evaluation, RangeMatcher, RangePattern, RuleEngine, Segment,
};
pub use spfsandbox_types::{AddressEntry, AddressKind, Outcome, RangeSource, SpfRecord};
