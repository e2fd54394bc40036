// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use tokio::sync::watch;

use murmur_core::Message;

use crate::colors::should_colorize;
use crate::config::Config;
use crate::display::{format_status, Renderer};
use crate::error::Result;
use crate::sync::{Api, ConnectionState, SyncController};

/// Follow the message list until interrupted.
pub async fn run(config: &Config) -> Result<()> {
    let controller = super::start_controller(config)?;
    let mut follow = Follow::new(&controller);
    follow.print_current();

    let interrupt = tokio::signal::ctrl_c();
    tokio::pin!(interrupt);

    loop {
        tokio::select! {
            _ = &mut interrupt => break,
            open = follow.step() => if !open { break },
        }
    }

    controller.shutdown().await;
    Ok(())
}

enum Change {
    Messages,
    Status,
    Closed,
}

/// Prints new messages to stdout and status changes to stderr.
pub struct Follow {
    renderer: Renderer,
    messages: watch::Receiver<Vec<Message>>,
    status: watch::Receiver<ConnectionState>,
    colorize: bool,
}

impl Follow {
    pub fn new<A: Api + 'static>(controller: &SyncController<A>) -> Self {
        let colorize = should_colorize();
        Follow {
            renderer: Renderer::new(colorize),
            messages: controller.subscribe(),
            status: controller.subscribe_status(),
            colorize,
        }
    }

    /// Print whatever the controller has published so far.
    pub fn print_current(&mut self) {
        self.print_messages();
    }

    /// Wait for the next change and print it.
    ///
    /// Returns `false` once the controller has stopped publishing.
    pub async fn step(&mut self) -> bool {
        let change = tokio::select! {
            changed = self.messages.changed() => match changed {
                Ok(()) => Change::Messages,
                Err(_) => Change::Closed,
            },
            changed = self.status.changed() => match changed {
                Ok(()) => Change::Status,
                Err(_) => Change::Closed,
            },
        };

        match change {
            Change::Messages => self.print_messages(),
            Change::Status => {
                let state = *self.status.borrow_and_update();
                eprintln!("{}", format_status(state, self.colorize));
            }
            Change::Closed => return false,
        }
        true
    }

    fn print_messages(&mut self) {
        let list = self.messages.borrow_and_update().clone();
        for line in self.renderer.render_new(&list) {
            println!("{}", line);
        }
    }
}
