// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! murmur - A terminal client for a realtime chat room.
//!
//! The client keeps a local copy of the room's message list in step with
//! the server. The list is pulled over HTTP; a WebSocket push channel only
//! announces that something changed, and each announcement triggers a
//! fresh pull.
//!
//! # Main Components
//!
//! - [`sync`] - The sync core: push channel, pull channel and the controller
//! - [`Config`] - Server location and sync settings
//! - [`display`] - Rendering of messages and connection status
//! - [`Error`] - Error types for all operations
//!
//! # Embedding
//!
//! ```rust,ignore
//! use murmur::sync::{HttpApi, NotificationChannel, SyncController, SyncOptions, WebSocketTransport};
//! use murmur::Config;
//!
//! let config = Config::default();
//! let api = HttpApi::new(config.endpoints()?, config.request_timeout())?;
//! let channel = NotificationChannel::new(
//!     api.endpoints().push.as_str(),
//!     WebSocketTransport::new(),
//!     config.reconnect_delay(),
//! );
//! let controller = SyncController::start(api, channel, SyncOptions::default());
//! let mut list = controller.subscribe();
//! ```

mod cli;
pub mod colors;
mod commands;
pub mod display;
pub mod env;

pub mod config;
pub mod error;
pub mod sync;

pub use cli::{Cli, Command};
pub use commands::run;
pub use config::{Config, Endpoints};
pub use error::{Error, Result};
