//! Stable DTOs used across the spfsandbox workspace.
//!
//! This crate is intentionally boring:
//! - the tri-state evaluation outcome
//! - structured `ip4`/`ip6` entries handed over by an SPF parser
//! - data types for the emitted evaluation report
//! - explain registry describing what each outcome means for mail delivery

#![forbid(unsafe_code)]

pub mod entry;
pub mod explain;
pub mod outcome;
pub mod receipt;

pub use entry::{AddressEntry, AddressKind, RangeSource, SpfRecord};
pub use explain::{Explanation, lookup_explanation};
pub use outcome::{Outcome, ParseOutcomeError};
pub use receipt::{AddressResult, EvalData, EvalReport, SCHEMA_EVAL_REPORT_V1, ToolMeta};
