// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Line formatting for the message list and connection status.

use std::collections::HashSet;

use chrono::Local;

use murmur_core::{Message, MessageKey};

use crate::colors;
use crate::sync::ConnectionState;

/// Shown in place of a timestamp the server did not send.
const MISSING_TIMESTAMP: &str = "--:--:--";

/// Renders each message at most once, however often the list is republished.
///
/// A resync replaces the list wholesale, so the renderer remembers which
/// messages it has already printed and emits only the new ones, in list
/// order.
#[derive(Debug, Default)]
pub struct Renderer {
    seen: HashSet<MessageKey>,
    colorize: bool,
}

impl Renderer {
    pub fn new(colorize: bool) -> Self {
        Renderer {
            seen: HashSet::new(),
            colorize,
        }
    }

    /// Lines for messages in `list` that have not been rendered before.
    pub fn render_new(&mut self, list: &[Message]) -> Vec<String> {
        list.iter()
            .filter(|m| self.seen.insert(m.key()))
            .map(|m| format_message(m, self.colorize))
            .collect()
    }
}

/// Format a message as `HH:MM:SS author: body`.
pub fn format_message(message: &Message, colorize: bool) -> String {
    let time = format_timestamp(message);
    if colorize {
        format!(
            "{} {}: {}",
            colors::context(&time),
            colors::author(&message.author),
            message.body
        )
    } else {
        format!("{} {}: {}", time, message.author, message.body)
    }
}

/// Local wall-clock time when the timestamp parses, otherwise the raw text.
pub fn format_timestamp(message: &Message) -> String {
    if message.timestamp.is_empty() {
        return MISSING_TIMESTAMP.to_string();
    }
    match message.parsed_timestamp() {
        Some(ts) => ts.with_timezone(&Local).format("%H:%M:%S").to_string(),
        None => message.timestamp.clone(),
    }
}

/// Human-readable connection status line.
pub fn format_status(state: ConnectionState, colorize: bool) -> String {
    let text = match state {
        ConnectionState::Connected => "connected",
        ConnectionState::Connecting => "connecting...",
        ConnectionState::Disconnected => "disconnected, retrying",
    };
    if colorize {
        format!("[{}]", colors::status(state, text))
    } else {
        format!("[{}]", text)
    }
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
