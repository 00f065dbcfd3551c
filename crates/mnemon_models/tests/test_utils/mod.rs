//! Test utilities for Mnemon model tests.
//!
//! Provides a scriptable mock driver so executor behavior can be tested
//! without a live backend.

use async_trait::async_trait;
use mnemon_core::{ChatMessage, ChatRequest};
use mnemon_error::{BackendError, BackendErrorKind};
use mnemon_interface::{ChatDriver, TextStream};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// What the mock does for one attempt.
#[derive(Debug, Clone)]
pub enum MockOutcome {
    /// Complete payload delivered in one piece.
    Text(String),
    /// The attempt fails outright.
    Fail(String),
    /// Streaming attempt: each item is a fragment or a mid-stream failure.
    Fragments(Vec<Result<String, String>>),
}

/// A driver that replays a fixed script of attempt outcomes.
pub struct MockDriver {
    script: Mutex<VecDeque<MockOutcome>>,
    attempts: AtomicUsize,
}

impl MockDriver {
    pub fn new(script: Vec<MockOutcome>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            attempts: AtomicUsize::new(0),
        }
    }

    /// A driver that fails every attempt.
    pub fn always_failing() -> Self {
        Self::new(vec![
            MockOutcome::Fail("boom".into());
            16
        ])
    }

    /// Number of attempts the executor has made so far.
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    fn next_outcome(&self) -> MockOutcome {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        self.script
            .lock()
            .expect("script lock")
            .pop_front()
            .unwrap_or(MockOutcome::Fail("script exhausted".into()))
    }
}

#[async_trait]
impl ChatDriver for MockDriver {
    async fn complete(&self, _request: &ChatRequest) -> Result<String, BackendError> {
        match self.next_outcome() {
            MockOutcome::Text(text) => Ok(text),
            MockOutcome::Fail(msg) => Err(BackendError::new(BackendErrorKind::Http(msg))),
            MockOutcome::Fragments(parts) => Ok(parts
                .into_iter()
                .filter_map(Result::ok)
                .collect::<String>()),
        }
    }

    async fn complete_stream(&self, _request: &ChatRequest) -> Result<TextStream, BackendError> {
        match self.next_outcome() {
            MockOutcome::Text(text) => {
                let items: Vec<Result<String, BackendError>> = vec![Ok(text)];
                Ok(Box::pin(futures_util::stream::iter(items)))
            }
            MockOutcome::Fail(msg) => Err(BackendError::new(BackendErrorKind::Http(msg))),
            MockOutcome::Fragments(parts) => {
                let items: Vec<Result<String, BackendError>> = parts
                    .into_iter()
                    .map(|part| {
                        part.map_err(|msg| BackendError::new(BackendErrorKind::Stream(msg)))
                    })
                    .collect();
                Ok(Box::pin(futures_util::stream::iter(items)))
            }
        }
    }
}

/// Enables tracing output for tests when `RUST_LOG` is set.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// Helper to build a one-message request with the given retry budget.
pub fn request_with_retries(max_retries: usize) -> ChatRequest {
    ChatRequest::builder()
        .messages(vec![ChatMessage::user("test prompt")])
        .max_retries(max_retries)
        .build()
        .expect("Failed to build test request")
}
