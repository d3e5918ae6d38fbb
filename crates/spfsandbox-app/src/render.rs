//! Render use cases: markdown and plain text from in-memory reports.

use spfsandbox_render::RenderableReport;

pub fn render_markdown(report: &RenderableReport) -> String {
    spfsandbox_render::render_markdown(report)
}

pub fn render_text(report: &RenderableReport) -> String {
    spfsandbox_render::render_text(report)
}
