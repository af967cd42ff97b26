#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;

use with_ai::client::{CompletionClient, CompletionError};
use with_ai::AppState;

/// Hands out scripted results in order and remembers every prompt it was given.
#[derive(Default)]
pub struct ScriptedClient {
    script: Mutex<VecDeque<Result<String, CompletionError>>>,
    pub prompts: Mutex<Vec<(String, String)>>,
}

impl ScriptedClient {
    pub fn answering(text: &str) -> Arc<Self> {
        Self::with(vec![Ok(text.to_string())])
    }

    pub fn failing(err: CompletionError) -> Arc<Self> {
        Self::with(vec![Err(err)])
    }

    pub fn with(script: Vec<Result<String, CompletionError>>) -> Arc<Self> {
        Arc::new(Self { script: Mutex::new(script.into()), prompts: Mutex::default() })
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn last_prompt(&self) -> String {
        self.prompts.lock().unwrap().last().map(|(_, p)| p.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl CompletionClient for ScriptedClient {
    async fn complete(&self, model: &str, prompt: &str) -> Result<String, CompletionError> {
        self.prompts.lock().unwrap().push((model.to_string(), prompt.to_string()));
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(CompletionError::Transport("script exhausted".into())))
    }
}

pub fn state(client: Arc<ScriptedClient>) -> AppState {
    AppState::new(client, "gpt-4.1-mini")
}

pub struct Reply {
    pub status: StatusCode,
    pub content_type: String,
    pub json: serde_json::Value,
}

pub async fn post_json(client: Arc<ScriptedClient>, uri: &str, body: &str) -> Reply {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json; charset=utf-8")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(client, req).await
}

pub async fn send(client: Arc<ScriptedClient>, req: Request<Body>) -> Reply {
    let resp = with_ai::urls::router(state(client)).oneshot(req).await.unwrap();
    let status = resp.status();
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    Reply { status, content_type, json }
}
