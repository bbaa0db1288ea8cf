use std::sync::Mutex;

/// Receives reply lines the parser could not turn into records. Injected into
/// the recommender so embedders choose where diagnostics go.
pub trait SkipSink: Send + Sync {
    fn record_skipped(&self, line: &str);
}

/// Default sink: skipped lines go to the process log only.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSkipSink;

impl SkipSink for TracingSkipSink {
    fn record_skipped(&self, line: &str) {
        tracing::info!(line, "skipped unparseable reply line");
    }
}

/// Collects skipped lines in memory. Used by tests and embedders that want to
/// inspect diagnostics after a request.
#[derive(Debug, Default)]
pub struct MemorySkipSink {
    lines: Mutex<Vec<String>>,
}

impl MemorySkipSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|g| g.clone()).unwrap_or_default()
    }
}

impl SkipSink for MemorySkipSink {
    fn record_skipped(&self, line: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line.to_string());
        }
    }
}
