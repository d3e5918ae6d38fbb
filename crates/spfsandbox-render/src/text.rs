use crate::RenderableReport;

/// One `address<TAB>outcome` line per result, in evaluation order.
pub fn render_text(report: &RenderableReport) -> String {
    let mut out = String::new();
    for r in &report.results {
        out.push_str(&r.address);
        out.push('\t');
        out.push_str(r.outcome.label());
        out.push('\n');
    }
    out
}
