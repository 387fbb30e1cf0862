#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use nopickles_mvp::services::provider::{CompletionProvider, CompletionRequest, UpstreamError};

/// Provider that records every request and answers with a canned reply,
/// or fails with a network error when built with `failing`.
#[derive(Default)]
pub struct RecordingProvider {
    reply: Option<String>,
    pub requests: Mutex<Vec<CompletionRequest>>,
}

impl RecordingProvider {
    pub fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self { reply: Some(reply.to_string()), requests: Mutex::default() })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn recorded(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionProvider for RecordingProvider {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, UpstreamError> {
        self.requests.lock().unwrap().push(request.clone());
        self.reply
            .clone()
            .ok_or_else(|| UpstreamError::Network("connection refused".to_string()))
    }
}

pub fn static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static")
}
