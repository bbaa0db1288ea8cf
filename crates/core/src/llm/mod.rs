pub mod error;
pub mod lines;
pub mod openai;
pub mod sink;

#[derive(Debug, Clone, Copy)]
pub enum Provider {
    OpenAi,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::OpenAi => "openai",
        }
    }
}

/// One opaque text-completion call: prompt in, raw reply text out. Transport
/// and service failures propagate to the caller unchanged; there is no retry
/// or backoff at this seam.
#[async_trait::async_trait]
pub trait CompletionClient: Send + Sync {
    fn provider(&self) -> Provider;

    async fn complete(&self, prompt: &str) -> anyhow::Result<String>;
}
