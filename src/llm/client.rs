//! Chat-completion client for the DeepSeek (OpenAI-compatible) API.

use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::LlmConfig;

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
    stream: bool,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: String,
}

/// Run one chat completion with a system and user prompt.
///
/// Transport failures are retried up to `config.max_retries` attempts; HTTP
/// error statuses and unparsable bodies fail immediately. Every failure mode
/// is an `Err` the caller can branch on.
pub async fn complete(
    client: &reqwest::Client,
    config: &LlmConfig,
    system_prompt: &str,
    user_prompt: &str,
) -> Result<String> {
    let api_key = config
        .api_key
        .as_deref()
        .context("LLM API key not configured")?;

    let url = format!(
        "{}/chat/completions",
        config.base_url.trim_end_matches('/')
    );

    let req = ChatRequest {
        model: config.model.clone(),
        messages: vec![
            ChatMessage {
                role: "system".to_string(),
                content: system_prompt.to_string(),
            },
            ChatMessage {
                role: "user".to_string(),
                content: user_prompt.to_string(),
            },
        ],
        temperature: config.temperature,
        max_tokens: config.max_tokens,
        stream: false,
    };

    let timeout = Duration::from_secs(config.timeout_secs);
    let attempts = config.max_retries.max(1);
    let mut last_err: Option<reqwest::Error> = None;

    for attempt in 1..=attempts {
        let result = client
            .post(&url)
            .timeout(timeout)
            .header("Authorization", format!("Bearer {api_key}"))
            .json(&req)
            .send()
            .await;

        let resp = match result {
            Ok(resp) => resp,
            Err(e) => {
                tracing::warn!("LLM call attempt {attempt}/{attempts} failed: {e}");
                last_err = Some(e);
                continue;
            }
        };

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!("LLM API returned {status}: {body}");
        }

        let body: ChatResponse = resp
            .json()
            .await
            .context("Failed to parse LLM chat response")?;

        let content = body
            .choices
            .first()
            .map(|c| c.message.content.trim().to_string())
            .unwrap_or_default();

        if content.is_empty() {
            anyhow::bail!("LLM chat response contained no content");
        }
        return Ok(content);
    }

    match last_err {
        Some(e) => Err(anyhow::Error::new(e)
            .context(format!("LLM request failed after {attempts} attempts"))),
        None => Err(anyhow::anyhow!("LLM request failed")),
    }
}
