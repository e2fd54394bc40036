// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color utilities for message output.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

use crate::env;
use crate::sync::ConnectionState;

/// ANSI 256-color codes.
pub mod codes {
    /// Timestamps: medium grey
    pub const CONTEXT: u8 = 245;
    /// Connected status: soft green
    pub const CONNECTED: u8 = 114;
    /// Connecting status: amber
    pub const CONNECTING: u8 = 179;
    /// Disconnected status: muted red
    pub const DISCONNECTED: u8 = 167;
    /// Author names cycle through these, chosen by name.
    pub const AUTHORS: [u8; 6] = [74, 110, 139, 173, 108, 180];

    pub const RESET: &str = "\x1b[0m";
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if env::no_color() {
        return false;
    }
    if env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

/// Format a 256-color ANSI escape sequence for foreground color.
fn fg256(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

fn paint(code: u8, text: &str) -> String {
    format!("{}{}{}", fg256(code), text, codes::RESET)
}

/// Palette entry for an author. The same name always gets the same color.
pub fn author_code(author: &str) -> u8 {
    let sum = author
        .bytes()
        .fold(0usize, |acc, b| acc.wrapping_mul(31).wrapping_add(b as usize));
    codes::AUTHORS[sum % codes::AUTHORS.len()]
}

/// Apply the author's color to their name.
pub fn author(name: &str) -> String {
    paint(author_code(name), name)
}

/// Apply context color (timestamps) to text.
pub fn context(text: &str) -> String {
    paint(codes::CONTEXT, text)
}

/// Apply the color for a connection state to text.
pub fn status(state: ConnectionState, text: &str) -> String {
    let code = match state {
        ConnectionState::Connected => codes::CONNECTED,
        ConnectionState::Connecting => codes::CONNECTING,
        ConnectionState::Disconnected => codes::DISCONNECTED,
    };
    paint(code, text)
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
