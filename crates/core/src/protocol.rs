// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Wire formats for the pull and push channels.
//!
//! The pull channel is two HTTP endpoints: [`FETCH_PATH`] returns the full
//! message list and [`SEND_PATH`] accepts a [`Draft`](crate::Draft). The push
//! channel at [`PUSH_PATH`] carries [`Notification`] frames, which only say
//! that the list changed.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Path of the fetch-all endpoint.
pub const FETCH_PATH: &str = "/get/msg";
/// Path of the send endpoint.
pub const SEND_PATH: &str = "/post/send";
/// Path of the push subscription endpoint.
pub const PUSH_PATH: &str = "/ws";

/// A push frame announcing that a message was stored.
///
/// The fields are checked but never consumed; receiving one only means the
/// client should fetch again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub author: String,
    pub message: String,
}

impl Notification {
    /// Parses a text frame.
    ///
    /// Fails on non-JSON input, on non-object JSON, on non-string fields, and
    /// when `author` or `message` is missing or empty.
    pub fn from_json(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        let Value::Object(mut fields) = value else {
            return Err(Error::NotAnObject);
        };
        let author = take_string(&mut fields, "author")?;
        let message = take_string(&mut fields, "message")?;
        Ok(Notification { author, message })
    }
}

fn take_string(fields: &mut Map<String, Value>, name: &'static str) -> Result<String> {
    match fields.remove(name) {
        Some(Value::String(s)) if !s.is_empty() => Ok(s),
        _ => Err(Error::MissingField(name)),
    }
}

/// Body of a failed send response.
///
/// `detail` is a string for application errors. Framework validation errors
/// put a list there instead, which is treated as no detail.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorBody {
    /// Extracts the human-readable detail from a response body, if any.
    pub fn detail_from(body: &str) -> Option<String> {
        let parsed: ErrorBody = serde_json::from_str(body).ok()?;
        match parsed.detail? {
            Value::String(s) if !s.trim().is_empty() => Some(s),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "protocol_tests.rs"]
mod tests;
