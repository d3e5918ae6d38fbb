//! Pure range rule evaluation (no IO).
//!
//! Input: already parsed `ip4`/`ip6` ranges tagged with an outcome.
//! Output: the outcome for a candidate address.
//!
//! Ranges are turned into literal/wildcard patterns rather than CIDR
//! networks: a `0` octet stands for any digits in that position and a
//! leading or trailing `::` stands for any run of characters. The prefix
//! length after `/` is ignored.

#![forbid(unsafe_code)]

pub mod engine;
pub mod matcher;
pub mod pattern;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use engine::{EngineState, Evaluation, RuleEngine};
pub use matcher::RangeMatcher;
pub use pattern::{RangePattern, Segment};
