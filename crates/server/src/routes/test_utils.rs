use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use clap::Parser;
use serde_json::Value;
use tower::ServiceExt;

use crate::{
    cli::Cli,
    content::{ContentError, ContentWriter},
    guidance::{GuidanceProvider, LlmError},
    AppState,
};

#[derive(Debug, Default)]
pub struct FakeContent {
    fail: bool,
    created: Mutex<Vec<Value>>,
    deleted: Mutex<Vec<String>>,
}

impl FakeContent {
    pub fn failing() -> Self {
        Self { fail: true, ..Default::default() }
    }

    pub fn created(&self) -> Vec<Value> {
        self.created.lock().unwrap().clone()
    }

    pub fn deleted(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentWriter for FakeContent {
    async fn create(&self, document: Value) -> Result<String, ContentError> {
        if self.fail {
            return Err(ContentError::MissingId);
        }
        let mut created = self.created.lock().unwrap();
        created.push(document);
        Ok(format!("workout-{}", created.len()))
    }

    async fn delete(&self, id: &str) -> Result<(), ContentError> {
        if self.fail {
            return Err(ContentError::Status { status: 503, message: "down".to_owned() });
        }
        self.deleted.lock().unwrap().push(id.to_owned());
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct FakeGuidance {
    fail: bool,
    asked: Mutex<Vec<String>>,
}

impl FakeGuidance {
    pub fn failing() -> Self {
        Self { fail: true, ..Default::default() }
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }
}

#[async_trait]
impl GuidanceProvider for FakeGuidance {
    async fn guidance(&self, exercise_name: &str) -> Result<String, LlmError> {
        self.asked.lock().unwrap().push(exercise_name.to_owned());
        if self.fail {
            return Err(LlmError::EmptyResponse);
        }
        Ok(format!("## Equipment\n{exercise_name}"))
    }
}

fn test_cli() -> Cli {
    Cli::parse_from([
        "server",
        "--content-project-id",
        "test",
        "--content-api-token",
        "token",
        "--llm-api-key",
        "key",
        "--cors-origin",
        "http://localhost:8081",
        "--max-body-bytes",
        "65536",
    ])
}

pub fn app_with(
    content: FakeContent,
    guidance: FakeGuidance,
) -> (Router, Arc<FakeContent>, Arc<FakeGuidance>) {
    let content = Arc::new(content);
    let guidance = Arc::new(guidance);
    let state = AppState {
        args: Arc::new(test_cli()),
        content: content.clone(),
        guidance: guidance.clone(),
    };
    (crate::app(state).unwrap(), content, guidance)
}

pub fn test_app() -> (Router, Arc<FakeContent>, Arc<FakeGuidance>) {
    app_with(FakeContent::default(), FakeGuidance::default())
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, body)
}

pub async fn get(app: Router, path: &str) -> (StatusCode, Value) {
    let request = Request::builder().method(Method::GET).uri(path).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, path: &str, body: Value) -> (StatusCode, Value) {
    let bytes = serde_json::to_vec(&body).unwrap();
    let request = Request::builder()
        .method(Method::POST)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::CONTENT_LENGTH, bytes.len())
        .body(Body::from(bytes))
        .unwrap();
    send(app, request).await
}
