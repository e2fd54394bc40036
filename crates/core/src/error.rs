// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for murmur-core operations.

use thiserror::Error;

/// Errors raised while decoding wire payloads.
#[derive(Debug, Error)]
pub enum Error {
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("notification is not a JSON object")]
    NotAnObject,

    #[error("notification is missing a non-empty string '{0}' field")]
    MissingField(&'static str),
}

/// A specialized Result type for murmur-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
