use crate::config::Settings;
use crate::llm::error::CompletionDiagnosticsError;
use crate::llm::{CompletionClient, Provider};
use anyhow::Context;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.openai.com";
const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_MAX_TOKENS: u32 = 1024;
const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone)]
pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    max_tokens: u32,
}

impl OpenAiClient {
    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let api_key = settings.require_openai_api_key()?.to_string();
        let base_url =
            std::env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model = std::env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let max_tokens = std::env::var("OPENAI_MAX_TOKENS")
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(DEFAULT_MAX_TOKENS);

        let timeout_secs = std::env::var("OPENAI_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("failed to build reqwest client")?;

        Ok(Self {
            http,
            api_key,
            base_url,
            model,
            max_tokens,
        })
    }

    async fn create_chat_completion(
        &self,
        req: ChatCompletionRequest,
    ) -> anyhow::Result<ChatCompletionResponse> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", self.api_key))?;
        auth.set_sensitive(true);
        headers.insert("authorization", auth);

        let url = format!("{}/v1/chat/completions", self.base_url.trim_end_matches('/'));
        let res = self
            .http
            .post(url)
            .headers(headers)
            .json(&req)
            .send()
            .await
            .context("OpenAI request failed")?;

        let status = res.status();
        let text = res
            .text()
            .await
            .context("failed to read OpenAI response body")?;
        if !status.is_success() {
            return Err(CompletionDiagnosticsError {
                provider: Provider::OpenAi,
                stage: "http",
                detail: format!("status={status}"),
                raw_body: Some(text),
            }
            .into());
        }

        serde_json::from_str::<ChatCompletionResponse>(&text)
            .with_context(|| format!("failed to decode OpenAI response: {text}"))
    }

    fn response_text(res: &ChatCompletionResponse) -> anyhow::Result<String> {
        let choice = res.choices.first().ok_or_else(|| CompletionDiagnosticsError {
            provider: Provider::OpenAi,
            stage: "decode",
            detail: "response contained no choices".to_string(),
            raw_body: None,
        })?;

        if matches!(choice.finish_reason.as_deref(), Some("length")) {
            tracing::warn!(
                max_tokens = res.usage.as_ref().map(|u| u.completion_tokens),
                "OpenAI reply was truncated at the token limit; trailing lines may be lost"
            );
        }

        match choice.message.content.as_deref() {
            Some(content) => Ok(content.trim().to_string()),
            None => Err(CompletionDiagnosticsError {
                provider: Provider::OpenAi,
                stage: "decode",
                detail: "first choice had no message content".to_string(),
                raw_body: None,
            }
            .into()),
        }
    }
}

#[async_trait::async_trait]
impl CompletionClient for OpenAiClient {
    fn provider(&self) -> Provider {
        Provider::OpenAi
    }

    async fn complete(&self, prompt: &str) -> anyhow::Result<String> {
        let req = ChatCompletionRequest {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            messages: vec![Message {
                role: "user",
                content: prompt.to_string(),
            }],
        };

        let res = self.create_chat_completion(req).await?;
        Self::response_text(&res)
    }
}

#[derive(Debug, Clone, Serialize)]
struct ChatCompletionRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<Message>,
}

#[derive(Debug, Clone, Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

#[derive(Debug, Clone, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,

    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Debug, Clone, Deserialize)]
struct Choice {
    message: AssistantMessage,

    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct AssistantMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct Usage {
    #[serde(default)]
    completion_tokens: u32,
}
