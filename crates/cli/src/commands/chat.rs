// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use futures_util::stream::{FuturesUnordered, StreamExt};
use tokio::io::{AsyncBufReadExt, BufReader};

use murmur_core::validate_draft;

use super::watch::Follow;
use crate::config::Config;
use crate::error::Result;
use crate::sync::SubmitError;

/// Follow the message list and send each stdin line as a message.
///
/// Rejected lines are reported on stderr and the session continues. Ends on
/// interrupt, or once stdin is closed and every pending send has finished.
pub async fn run(config: &Config, author: &str) -> Result<()> {
    // Check the author once so a bad name fails before connecting
    if let Err(e) = validate_draft(author, "-") {
        return Err(SubmitError::from(e).into());
    }

    let controller = super::start_controller(config)?;
    let mut follow = Follow::new(&controller);
    follow.print_current();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;
    let mut pending = FuturesUnordered::new();

    let interrupt = tokio::signal::ctrl_c();
    tokio::pin!(interrupt);

    loop {
        tokio::select! {
            _ = &mut interrupt => break,
            line = lines.next_line(), if stdin_open => match line? {
                Some(line) => pending.push(controller.submit(author, &line)),
                None => stdin_open = false,
            },
            Some(result) = pending.next(), if !pending.is_empty() => {
                if let Err(e) = result {
                    eprintln!("not sent: {}", e);
                }
            }
            open = follow.step() => if !open { break },
        }

        if !stdin_open && pending.is_empty() {
            break;
        }
    }

    controller.shutdown().await;
    Ok(())
}
