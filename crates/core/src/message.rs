// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The chat message model.
//!
//! A [`Message`] has no server-assigned id. Its identity is the composite of
//! timestamp, author and body, exposed as [`MessageKey`] so renderers and
//! dedup logic share one definition.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// A message as returned by the fetch endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Message {
    pub author: String,
    /// Message text. Named `message` on the wire.
    #[serde(rename = "message")]
    pub body: String,
    /// Server-assigned timestamp, kept verbatim.
    #[serde(default)]
    pub timestamp: String,
}

/// Identity of a message: two messages are the same only when all three
/// fields match exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageKey {
    pub timestamp: String,
    pub author: String,
    pub body: String,
}

impl Message {
    pub fn new(
        author: impl Into<String>,
        body: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Message {
            author: author.into(),
            body: body.into(),
            timestamp: timestamp.into(),
        }
    }

    /// Returns the identity key of this message.
    pub fn key(&self) -> MessageKey {
        MessageKey {
            timestamp: self.timestamp.clone(),
            author: self.author.clone(),
            body: self.body.clone(),
        }
    }

    /// Returns true if `other` has the same identity.
    pub fn is_same(&self, other: &Message) -> bool {
        self.timestamp == other.timestamp && self.author == other.author && self.body == other.body
    }

    /// Parses the timestamp as RFC 3339.
    ///
    /// Timestamps without an offset are read as UTC. Returns `None` when the
    /// value is empty or in any other format.
    pub fn parsed_timestamp(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.timestamp)
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Returns true if both lists hold the same messages in the same order.
pub fn same_list(a: &[Message], b: &[Message]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.is_same(y))
}

/// Sorts messages by parsed timestamp, oldest first.
///
/// The sort is stable: messages with equal timestamps keep their server
/// order. Messages whose timestamp does not parse go last, also in server
/// order.
pub fn sort_chronological(messages: &mut [Message]) {
    messages.sort_by_cached_key(|m| {
        let ts = m.parsed_timestamp();
        (ts.is_none(), ts)
    });
}

#[cfg(test)]
#[path = "message_tests.rs"]
mod tests;
