// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Realtime sync core.
//!
//! Keeps a local copy of the message list in step with the backend over two
//! channels: a pull channel that fetches the whole list and a push channel
//! whose frames only say "something changed".
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────┐  fetch / send  ┌─────────────┐
//! │ SyncController │───────────────►│     Api     │──► GET /get/msg, POST /post/send
//! │   (watch tx)   │◄───────────────│  (HttpApi)  │
//! └────────────────┘                └─────────────┘
//!         ▲ ChannelEvent
//! ┌───────┴─────────────┐           ┌─────────────┐
//! │ NotificationChannel │──────────►│  Transport  │──► WS /ws
//! │ (ConnectionMachine) │◄──────────│   (trait)   │
//! └─────────────────────┘           └─────────────┘
//! ```
//!
//! # Features
//!
//! - Initial fetch on start, one fetch per notification
//! - Wholesale list replacement; last resolved fetch wins
//! - Fixed-delay reconnect with no retry limit
//! - Injectable api and transport traits for testing

mod api;
mod channel;
mod controller;
mod transport;

pub use api::{Api, ApiError, ApiResult, HttpApi, SendError, SEND_FAILED};
pub use channel::{
    ChannelEvent, ConnectionMachine, ConnectionState, NotificationChannel,
    DEFAULT_RECONNECT_DELAY,
};
pub use controller::{submit_once, SubmitError, SyncController, SyncOptions};
pub use transport::{Transport, TransportError, TransportResult, WebSocketTransport};

#[cfg(test)]
mod test_helpers;
