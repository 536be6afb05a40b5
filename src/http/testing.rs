//! Scripted transport and recording sleeper for unit tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::{RawResponse, Sleeper, Transport};
use crate::error::TransportError;

/// Replays a fixed sequence of outcomes and records the requested URLs
#[derive(Default)]
pub(crate) struct ScriptedTransport {
    script: Mutex<VecDeque<Result<RawResponse, TransportError>>>,
    urls: Mutex<Vec<String>>,
    calls: AtomicUsize,
}

impl ScriptedTransport {
    pub(crate) fn new(script: Vec<Result<RawResponse, TransportError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            ..Default::default()
        }
    }

    pub(crate) fn ok(status: u16, body: &'static str) -> Result<RawResponse, TransportError> {
        Ok(RawResponse::new(status, body))
    }

    pub(crate) fn status(status: u16) -> Result<RawResponse, TransportError> {
        Ok(RawResponse::new(status, ""))
    }

    pub(crate) fn network(reason: &str) -> Result<RawResponse, TransportError> {
        Err(TransportError::Other(reason.to_string()))
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn urls(&self) -> Vec<String> {
        self.urls.lock().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn get(&self, url: &str) -> Result<RawResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.urls.lock().push(url.to_string());
        self.script
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Other("script exhausted".to_string())))
    }
}

/// Records requested delays without waiting
#[derive(Default)]
pub(crate) struct RecordingSleeper {
    delays: Mutex<Vec<Duration>>,
}

impl RecordingSleeper {
    pub(crate) fn delays(&self) -> Vec<Duration> {
        self.delays.lock().clone()
    }
}

#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, delay: Duration) {
        self.delays.lock().push(delay);
    }
}

/// Answers every request with `{"url": "<requested url>"}`
#[derive(Default)]
pub(crate) struct EchoTransport {
    calls: AtomicUsize,
}

impl EchoTransport {
    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transport for EchoTransport {
    async fn get(&self, url: &str) -> Result<RawResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;
        let body = serde_json::json!({ "url": url }).to_string();
        Ok(RawResponse::new(200, body))
    }
}
