//! Rendering utilities for evaluation reports (Markdown, plain text).

#![forbid(unsafe_code)]

mod markdown;
mod model;
mod text;

pub use markdown::render_markdown;
pub use model::{RenderableData, RenderableOutcome, RenderableReport, RenderableResult};
pub use text::render_text;
