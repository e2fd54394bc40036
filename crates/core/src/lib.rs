// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! murmur-core: Shared types for the murmur chat client
//!
//! This crate provides the message model, the input validator, and the wire
//! formats spoken on the pull and push channels. It performs no I/O.

pub mod error;
pub mod message;
pub mod protocol;
pub mod validate;

pub use error::{Error, Result};
pub use message::{sort_chronological, Message, MessageKey};
pub use protocol::{ErrorBody, Notification};
pub use validate::{validate_draft, Draft, ValidationError, MAX_AUTHOR_LENGTH, MAX_BODY_LENGTH};
