//! Live adapter for the OpenAI Responses API.

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{CompletionClient, CompletionError};
use crate::AiCfg;

pub struct OpenAiClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl OpenAiClient {
    /// Builds the pooled HTTP client once; every attempt is bounded by `cfg.timeout`.
    pub fn new(cfg: &AiCfg) -> Result<Self> {
        let http = Client::builder().timeout(cfg.timeout).build()?;
        Ok(Self {
            http,
            base_url: cfg.base_url.clone(),
            api_key: cfg.api_key.clone(),
        })
    }
}

#[derive(Serialize)]
struct ResponsesReq<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Deserialize)]
struct ResponsesResp {
    #[serde(default)]
    output: Vec<OutputItem>,
}

#[derive(Deserialize)]
struct OutputItem {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    content: Vec<ContentPart>,
}

#[derive(Deserialize)]
struct ContentPart {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

impl ResponsesResp {
    /// Concatenates every `output_text` part of every message item.
    fn output_text(self) -> String {
        self.output
            .into_iter()
            .filter(|item| item.kind == "message")
            .flat_map(|item| item.content)
            .filter(|part| part.kind == "output_text")
            .filter_map(|part| part.text)
            .collect()
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, model: &str, prompt: &str) -> Result<String, CompletionError> {
        let url = format!("{}/responses", self.base_url);
        let resp = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&ResponsesReq { model, input: prompt })
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "responses api answered");

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(CompletionError::Status { status: status.as_u16(), message });
        }

        let parsed: ResponsesResp =
            serde_json::from_str(&body).map_err(|e| CompletionError::Decode(e.to_string()))?;
        Ok(parsed.output_text())
    }
}
