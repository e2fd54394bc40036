// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::config::Config;
use crate::error::Result;
use crate::sync::submit_once;

/// Validate and send one message.
///
/// Invalid input is rejected before any request is made.
pub async fn run(config: &Config, author: &str, message: &str) -> Result<()> {
    let api = super::http_api(config)?;
    submit_once(&api, author, message).await?;
    Ok(())
}
