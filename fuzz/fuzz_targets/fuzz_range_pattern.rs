//! Fuzz target for range pattern derivation and matching.
//!
//! Goal: deriving a pattern from any range and matching it against any
//! address should **never panic**, and an engine built from the same
//! ranges must agree with the individual patterns.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_range_pattern
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use spfsandbox_domain::{RangePattern, RuleEngine};
use spfsandbox_types::Outcome;

#[derive(Arbitrary, Debug)]
struct RangeInput {
    ranges: Vec<String>,
    addresses: Vec<String>,
    soft_fail: bool,
}

fuzz_target!(|input: RangeInput| {
    // Backtracking cost grows with wildcard count; keep inputs small.
    if input.ranges.len() > 8 || input.addresses.len() > 16 {
        return;
    }
    let ranges: Vec<String> = input.ranges.into_iter().filter(|r| r.len() <= 64).collect();
    let addresses: Vec<String> = input
        .addresses
        .into_iter()
        .filter(|a| a.len() <= 64)
        .collect();

    let outcome = if input.soft_fail {
        Outcome::SoftFail
    } else {
        Outcome::Allow
    };
    let mut engine = RuleEngine::new();
    engine.import(ranges.iter(), outcome);

    for address in &addresses {
        let any_match = ranges
            .iter()
            .any(|r| RangePattern::derive(r).is_match(address));
        let result = engine.eval(address);
        if ranges.is_empty() || any_match {
            assert_eq!(result, Outcome::Unknown);
        } else {
            assert_eq!(result, outcome);
        }
    }
});
