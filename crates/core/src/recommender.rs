use crate::domain::preference::PreferenceSet;
use crate::domain::recommendation::RecommendationSet;
use crate::llm::sink::{SkipSink, TracingSkipSink};
use crate::llm::{lines, CompletionClient};
use crate::prompt;
use std::sync::Arc;

/// Ties the prompt builder, completion client and reply parser together for
/// one request at a time. Stateless across calls; the skip sink receives the
/// raw lines the parser rejected.
#[derive(Clone)]
pub struct Recommender {
    client: Arc<dyn CompletionClient>,
    sink: Arc<dyn SkipSink>,
}

impl Recommender {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self::with_sink(client, Arc::new(TracingSkipSink))
    }

    pub fn with_sink(client: Arc<dyn CompletionClient>, sink: Arc<dyn SkipSink>) -> Self {
        Self { client, sink }
    }

    /// Runs one recommendation request. Service failures propagate unchanged;
    /// unparseable reply lines are skipped and reported to the sink, never
    /// surfaced in the returned set.
    pub async fn recommend(&self, prefs: &PreferenceSet) -> anyhow::Result<RecommendationSet> {
        let prompt = prompt::build_prompt(prefs);
        let reply = self.client.complete(&prompt).await?;

        let parsed = lines::parse_reply(&reply);
        if !parsed.skipped.is_empty() {
            tracing::warn!(
                provider = self.client.provider().as_str(),
                records = parsed.records.len(),
                skipped = parsed.skipped.len(),
                "reply contained lines that did not match the expected format"
            );
        }
        for line in &parsed.skipped {
            self.sink.record_skipped(line);
        }

        Ok(RecommendationSet {
            generated_at: chrono::Utc::now(),
            records: parsed.records,
        })
    }
}
