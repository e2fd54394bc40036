// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pull channel: the request/response half of the sync protocol.
//!
//! Two operations: fetch the full message list and send one validated draft.
//! [`Api`] is the seam; [`HttpApi`] talks to the real backend.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

use murmur_core::{Draft, ErrorBody, Message};

use crate::config::Endpoints;

/// Fallback reason when a failed send carries no usable detail.
pub const SEND_FAILED: &str = "failed to send message";

/// Error type for fetch operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never got a response, or the body could not be read.
    #[error("request failed: {0}")]
    Request(String),

    /// The server answered with a non-success status.
    #[error("server returned status {0}")]
    Status(u16),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Request(e.to_string())
    }
}

/// Result type for fetch operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// A send the server did not accept, phrased for the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SendError {
    /// The server explained the rejection.
    #[error("{0}")]
    Rejected(String),

    /// No response, or a failure without a readable detail.
    #[error("failed to send message")]
    Failed,
}

impl SendError {
    /// The user-facing reason.
    pub fn reason(&self) -> &str {
        match self {
            SendError::Rejected(detail) => detail,
            SendError::Failed => SEND_FAILED,
        }
    }
}

/// The backend operations the sync core consumes.
pub trait Api: Send + Sync {
    /// Fetch every message, in server order.
    fn fetch_all(&self) -> Pin<Box<dyn Future<Output = ApiResult<Vec<Message>>> + Send + '_>>;

    /// Submit one validated draft.
    ///
    /// Success says nothing about the new message: it arrives through the
    /// next fetch.
    fn send(&self, draft: Draft) -> Pin<Box<dyn Future<Output = Result<(), SendError>> + Send + '_>>;
}

/// HTTP implementation of [`Api`] using reqwest.
pub struct HttpApi {
    client: Client,
    endpoints: Endpoints,
}

impl HttpApi {
    /// Create a client for the given endpoints.
    pub fn new(endpoints: Endpoints, timeout: Duration) -> ApiResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(HttpApi { client, endpoints })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }
}

impl Api for HttpApi {
    fn fetch_all(&self) -> Pin<Box<dyn Future<Output = ApiResult<Vec<Message>>> + Send + '_>> {
        Box::pin(async move {
            let response = self.client.get(self.endpoints.fetch.clone()).send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(ApiError::Status(status.as_u16()));
            }
            let messages: Vec<Message> = response.json().await?;
            debug!(count = messages.len(), "fetched messages");
            Ok(messages)
        })
    }

    fn send(&self, draft: Draft) -> Pin<Box<dyn Future<Output = Result<(), SendError>> + Send + '_>> {
        Box::pin(async move {
            let response = match self
                .client
                .post(self.endpoints.send.clone())
                .json(&draft)
                .send()
                .await
            {
                Ok(response) => response,
                Err(e) => {
                    warn!(error = %e, "send request failed");
                    return Err(SendError::Failed);
                }
            };

            let status = response.status();
            if status.is_success() {
                return Ok(());
            }

            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), body = %body, "send rejected");
            Err(ErrorBody::detail_from(&body)
                .map(SendError::Rejected)
                .unwrap_or(SendError::Failed))
        })
    }
}
