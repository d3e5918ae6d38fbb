//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Pattern derivation for dotted and colon-separated ranges
//! - Wildcard coverage of `0` octets and elided `::`
//! - Engine evaluation order and import bookkeeping

use crate::engine::RuleEngine;
use crate::pattern::RangePattern;
use proptest::prelude::*;
use spfsandbox_types::Outcome;
use std::cell::Cell;
use std::rc::Rc;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// Decimal octet as written in SPF records.
fn arb_octet() -> impl Strategy<Value = String> {
    (0u16..=255).prop_map(|n| n.to_string())
}

/// Arbitrary digit run, including leading zeros and values past 255.
fn arb_digits() -> impl Strategy<Value = String> {
    prop::string::string_regex("[0-9]{1,5}").unwrap()
}

fn arb_hextet() -> impl Strategy<Value = String> {
    prop::string::string_regex("[0-9a-f]{1,4}").unwrap()
}

/// Any non-empty text containing at least one dot.
fn arb_dotted_range() -> impl Strategy<Value = String> {
    (
        prop::string::string_regex("[^/]{0,12}").unwrap(),
        prop::string::string_regex("[^/]{0,12}").unwrap(),
        prop::option::of(0u8..=128),
    )
        .prop_map(|(a, b, prefix)| match prefix {
            Some(p) => format!("{a}.{b}/{p}"),
            None => format!("{a}.{b}"),
        })
}

fn arb_outcome() -> impl Strategy<Value = Outcome> {
    prop_oneof![
        Just(Outcome::Allow),
        Just(Outcome::SoftFail),
        Just(Outcome::Unknown),
    ]
}

// ============================================================================
// Pattern properties
// ============================================================================

proptest! {
    #[test]
    fn dotted_range_matches_itself(range in arb_dotted_range()) {
        let pattern = RangePattern::derive(&range);
        prop_assert!(pattern.is_match(&range), "{range} vs {pattern}");
    }

    #[test]
    fn dotted_quad_matches_itself(a in arb_octet(), b in arb_octet(), c in arb_octet(), d in arb_octet()) {
        let address = format!("{a}.{b}.{c}.{d}");
        prop_assert!(RangePattern::derive(&address).is_match(&address));
    }

    #[test]
    fn zero_octets_match_any_digits(
        a in arb_octet(),
        b in arb_octet(),
        x in arb_digits(),
        y in arb_digits(),
        prefix in 0u8..=32,
    ) {
        let pattern = RangePattern::derive(&format!("{a}.{b}.0.0/{prefix}"));
        let candidate = format!("{a}.{b}.{x}.{y}");
        prop_assert!(pattern.is_match(&candidate), "{candidate} vs {pattern}");
    }

    #[test]
    fn leading_elision_accepts_any_prefix(
        tail in arb_hextet(),
        prefix in prop::string::string_regex("[0-9a-f:]{1,20}").unwrap(),
    ) {
        let pattern = RangePattern::derive(&format!("::{tail}"));
        let candidate = format!("{prefix}:{tail}");
        prop_assert!(pattern.is_match(&candidate), "{candidate} vs {pattern}");
    }

    #[test]
    fn trailing_elision_accepts_any_suffix(
        head in arb_hextet(),
        suffix in prop::string::string_regex("[0-9a-f:]{1,20}").unwrap(),
    ) {
        let pattern = RangePattern::derive(&format!("{head}::"));
        let candidate = format!("{head}:{suffix}");
        prop_assert!(pattern.is_match(&candidate), "{candidate} vs {pattern}");
    }

    #[test]
    fn derivation_is_deterministic(range in ".{0,32}") {
        prop_assert_eq!(RangePattern::derive(&range), RangePattern::derive(&range));
    }

    #[test]
    fn matching_never_panics(range in ".{0,24}", candidate in ".{0,24}") {
        let _ = RangePattern::derive(&range).is_match(&candidate);
    }
}

// ============================================================================
// Engine properties
// ============================================================================

proptest! {
    #[test]
    fn unmatched_address_takes_the_last_rule_outcome(
        outcomes in prop::collection::vec(arb_outcome(), 1..6),
    ) {
        // 192.0.2.0/24 is documentation space; none of these ranges cover it.
        let mut engine = RuleEngine::new();
        for (i, outcome) in outcomes.iter().enumerate() {
            engine.import([format!("10.{}.0.0", i + 1)], *outcome);
        }
        let last = *outcomes.last().unwrap();
        prop_assert_eq!(engine.eval("192.0.2.1"), last);
    }

    #[test]
    fn any_match_yields_unknown(
        outcomes in prop::collection::vec(arb_outcome(), 1..6),
        hit in 0usize..6,
    ) {
        let mut engine = RuleEngine::new();
        for (i, outcome) in outcomes.iter().enumerate() {
            engine.import([format!("10.{}.0.0", i + 1)], *outcome);
        }
        let hit = hit % outcomes.len();
        let address = format!("10.{}.7.7", hit + 1);
        prop_assert_eq!(engine.eval(&address), Outcome::Unknown);
    }

    #[test]
    fn import_count_matches_unique_ranges(
        ranges in prop::collection::vec(prop::sample::select(vec![
            "10.0.0.0", "192.168.0.0/16", "2001:db8::", "::1", "172.16.0.0/12",
        ]), 0..12),
        outcome in arb_outcome(),
    ) {
        let mut engine = RuleEngine::new();
        let calls = Rc::new(Cell::new(0u32));
        let counter = calls.clone();
        engine.listen(move || counter.set(counter.get() + 1));

        engine.import(ranges.iter().copied(), outcome);

        let mut unique = ranges.clone();
        unique.sort_unstable();
        unique.dedup();
        prop_assert_eq!(engine.len(), unique.len());
        prop_assert_eq!(calls.get(), 1);
        prop_assert_eq!(engine.is_empty(), ranges.is_empty());
    }
}
