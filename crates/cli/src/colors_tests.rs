// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

/// Strip all ANSI escape sequences from a string
fn strip_ansi(s: &str) -> String {
    let mut result = String::new();
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            while let Some(&next) = chars.peek() {
                chars.next();
                if next == 'm' {
                    break;
                }
            }
        } else {
            result.push(c);
        }
    }
    result
}

#[test]
fn fg256_produces_correct_escape_sequence() {
    assert_eq!(fg256(0), "\x1b[38;5;0m");
    assert_eq!(fg256(245), "\x1b[38;5;245m");
}

#[test]
fn context_wraps_text() {
    let painted = context("12:00:00");
    assert!(painted.starts_with("\x1b[38;5;245m"));
    assert!(painted.ends_with(codes::RESET));
    assert_eq!(strip_ansi(&painted), "12:00:00");
}

#[test]
fn author_color_is_stable_per_name() {
    assert_eq!(author_code("alice"), author_code("alice"));
    assert!(codes::AUTHORS.contains(&author_code("bob")));
    assert!(codes::AUTHORS.contains(&author_code("")));
    assert_eq!(strip_ansi(&author("alice")), "alice");
}

#[parameterized(
    connected = { ConnectionState::Connected, codes::CONNECTED },
    connecting = { ConnectionState::Connecting, codes::CONNECTING },
    disconnected = { ConnectionState::Disconnected, codes::DISCONNECTED },
)]
fn status_uses_state_color(state: ConnectionState, code: u8) {
    let painted = status(state, "x");
    assert!(painted.starts_with(&fg256(code)));
    assert_eq!(strip_ansi(&painted), "x");
}
