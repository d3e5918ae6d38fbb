#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableOutcome {
    Allow,
    SoftFail,
    Unknown,
}

impl RenderableOutcome {
    pub fn label(self) -> &'static str {
        match self {
            RenderableOutcome::Allow => "allow",
            RenderableOutcome::SoftFail => "softfail",
            RenderableOutcome::Unknown => "unknown",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableResult {
    pub address: String,
    pub outcome: RenderableOutcome,
    pub matched_range: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableData {
    pub rule_sets_loaded: u32,
    pub rules_loaded: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub results: Vec<RenderableResult>,
    pub data: RenderableData,
}

impl RenderableReport {
    pub fn count(&self, outcome: RenderableOutcome) -> usize {
        self.results.iter().filter(|r| r.outcome == outcome).count()
    }
}
