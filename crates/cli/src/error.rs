// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

use crate::sync::{ApiError, SubmitError};

/// All possible errors that can occur in the murmur client.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("config file not found: {0}\n  hint: drop --config to use the defaults")]
    ConfigNotFound(String),

    #[error("invalid server URL '{url}': {reason}\n  hint: use an http:// or https:// base URL, e.g. http://127.0.0.1:8000")]
    InvalidUrl { url: String, reason: String },

    #[error("{0}")]
    Submit(#[from] SubmitError),

    #[error("http client error: {0}")]
    Api(#[from] ApiError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for murmur operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
