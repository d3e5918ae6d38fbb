//! Use case orchestration for spfsandbox.
//!
//! This crate provides the application layer: use cases that coordinate the settings, domain and
//! render layers. It is intentionally thin and delegates heavy lifting to the appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod eval;
mod explain;
mod render;
mod report;
mod rules;

pub use eval::{EvalInput, EvalOutput, build_engine, run_eval};
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use render::{render_markdown, render_text};
pub use report::{parse_report_json, serialize_report, to_renderable};
pub use rules::{RuleLine, format_rules, run_rules};
