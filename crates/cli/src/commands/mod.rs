// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod chat;
pub mod send;
pub mod watch;

use tracing::debug;

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::error::Result;
use crate::sync::{HttpApi, NotificationChannel, SyncController, SyncOptions, WebSocketTransport};

/// Run a parsed command line to completion.
pub async fn run(cli: Cli) -> Result<()> {
    let config = Config::resolve(cli.config.as_deref(), cli.url)?;
    debug!(base_url = %config.base_url, "resolved config");

    match cli.command {
        Command::Watch => watch::run(&config).await,
        Command::Send { author, message } => send::run(&config, &author, &message.join(" ")).await,
        Command::Chat { author } => chat::run(&config, &author).await,
    }
}

/// Build the pull-channel client for the configured server.
pub fn http_api(config: &Config) -> Result<HttpApi> {
    let endpoints = config.endpoints()?;
    Ok(HttpApi::new(endpoints, config.request_timeout())?)
}

/// Start the sync controller against the configured server.
///
/// Must be called from within a Tokio runtime.
pub fn start_controller(config: &Config) -> Result<SyncController<HttpApi>> {
    let api = http_api(config)?;
    let channel = NotificationChannel::new(
        api.endpoints().push.as_str(),
        WebSocketTransport::new(),
        config.reconnect_delay(),
    );
    let options = SyncOptions {
        sort_by_timestamp: config.sort_by_timestamp,
    };
    Ok(SyncController::start(api, channel, options))
}
