use crate::llm::Provider;
use std::fmt;

#[derive(Debug, Clone)]
pub struct CompletionDiagnosticsError {
    pub provider: Provider,
    pub stage: &'static str,
    pub detail: String,
    pub raw_body: Option<String>,
}

impl fmt::Display for CompletionDiagnosticsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "completion error (provider={}, stage={}): {}",
            self.provider.as_str(),
            self.stage,
            self.detail
        )
    }
}

impl std::error::Error for CompletionDiagnosticsError {}
