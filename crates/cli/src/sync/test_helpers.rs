// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for sync module tests.

#![allow(clippy::unwrap_used)]

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use murmur_core::{Draft, Message};

use super::api::{Api, ApiResult, SendError};

/// Create a message.
pub fn msg(author: &str, body: &str, timestamp: &str) -> Message {
    Message::new(author, body, timestamp)
}

/// A well-formed notification frame.
pub fn frame(author: &str, message: &str) -> String {
    serde_json::json!({ "author": author, "message": message }).to_string()
}

/// Poll `cond` until it holds. Relies on paused time to fail fast.
pub async fn until(mut cond: impl FnMut() -> bool) {
    tokio::time::timeout(Duration::from_secs(60), async {
        while !cond() {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .unwrap();
}

struct ScriptedFetch {
    delay: Duration,
    result: ApiResult<Vec<Message>>,
}

struct MockApiInner {
    scripted: Mutex<VecDeque<ScriptedFetch>>,
    backend: Mutex<Vec<Message>>,
    fetches: AtomicUsize,
    sent: Mutex<Vec<Draft>>,
    send_result: Mutex<Result<(), SendError>>,
}

/// In-memory backend. Clones share state so tests can inspect it after the
/// controller takes ownership.
#[derive(Clone)]
pub struct MockApi {
    inner: Arc<MockApiInner>,
}

impl MockApi {
    pub fn new() -> Self {
        MockApi {
            inner: Arc::new(MockApiInner {
                scripted: Mutex::new(VecDeque::new()),
                backend: Mutex::new(Vec::new()),
                fetches: AtomicUsize::new(0),
                sent: Mutex::new(Vec::new()),
                send_result: Mutex::new(Ok(())),
            }),
        }
    }

    /// Replace what unscripted fetches return.
    pub fn set_backend(&self, messages: Vec<Message>) {
        *self.inner.backend.lock().unwrap() = messages;
    }

    /// Script the next fetch. Scripted fetches are consumed in dispatch
    /// order before falling back to the backend list.
    pub fn queue_fetch(&self, result: ApiResult<Vec<Message>>, delay: Duration) {
        self.inner
            .scripted
            .lock()
            .unwrap()
            .push_back(ScriptedFetch { delay, result });
    }

    /// Make every later send fail with `err`.
    pub fn fail_sends(&self, err: SendError) {
        *self.inner.send_result.lock().unwrap() = Err(err);
    }

    /// Number of fetches dispatched so far.
    pub fn fetch_count(&self) -> usize {
        self.inner.fetches.load(Ordering::SeqCst)
    }

    /// Drafts that reached the backend.
    pub fn sent(&self) -> Vec<Draft> {
        self.inner.sent.lock().unwrap().clone()
    }
}

impl Api for MockApi {
    fn fetch_all(&self) -> Pin<Box<dyn Future<Output = ApiResult<Vec<Message>>> + Send + '_>> {
        self.inner.fetches.fetch_add(1, Ordering::SeqCst);
        let next = self.inner.scripted.lock().unwrap().pop_front();
        let ScriptedFetch { delay, result } = next.unwrap_or_else(|| ScriptedFetch {
            delay: Duration::ZERO,
            result: Ok(self.inner.backend.lock().unwrap().clone()),
        });
        Box::pin(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            result
        })
    }

    fn send(&self, draft: Draft) -> Pin<Box<dyn Future<Output = Result<(), SendError>> + Send + '_>> {
        Box::pin(async move {
            let result = self.inner.send_result.lock().unwrap().clone();
            if result.is_ok() {
                self.inner.sent.lock().unwrap().push(draft);
            }
            result
        })
    }
}
