// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Input validation for outgoing messages.
//!
//! Checks run in a fixed order so the same input always yields the same
//! rejection: empty author, empty body, body too long, author too long.
//! Lengths are counted in characters after trimming.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MAX_AUTHOR_LENGTH: usize = 255;
pub const MAX_BODY_LENGTH: usize = 255;

/// Reasons a draft is rejected before it reaches the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("author cannot be empty")]
    EmptyAuthor,

    #[error("message cannot be empty")]
    EmptyBody,

    #[error("author cannot exceed {MAX_AUTHOR_LENGTH} characters")]
    AuthorTooLong,

    #[error("message cannot exceed {MAX_BODY_LENGTH} characters")]
    BodyTooLong,
}

/// A validated, trimmed message ready to send.
///
/// Serializes as the send endpoint's request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub author: String,
    #[serde(rename = "message")]
    pub body: String,
}

/// Validates and normalizes an `(author, body)` pair.
pub fn validate_draft(author: &str, body: &str) -> Result<Draft, ValidationError> {
    let author = author.trim();
    let body = body.trim();

    if author.is_empty() {
        return Err(ValidationError::EmptyAuthor);
    }
    if body.is_empty() {
        return Err(ValidationError::EmptyBody);
    }
    if body.chars().count() > MAX_BODY_LENGTH {
        return Err(ValidationError::BodyTooLong);
    }
    if author.chars().count() > MAX_AUTHOR_LENGTH {
        return Err(ValidationError::AuthorTooLong);
    }

    Ok(Draft {
        author: author.to_string(),
        body: body.to_string(),
    })
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
