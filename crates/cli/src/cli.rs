// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use clap::{Parser, Subcommand};

// Custom help template that lists commands before options
const HELP_TEMPLATE: &str = "{about-with-newline}
{usage-heading} {usage}

{before-help}Options:
{options}{after-help}";

const COMMANDS_HELP: &str = "\
Commands:
  watch  Follow the message list as it changes
  send   Send one message and exit
  chat   Follow the list and send each line typed on stdin
";

const QUICKSTART_HELP: &str = "\
Get started:
  murmur watch                          Follow the room
  murmur send --author alice \"hello\"    Post a message
  murmur chat --author alice            Follow and type messages
  murmur --url https://chat.example.com watch";

#[derive(Parser)]
#[command(name = "murmur")]
#[command(about = "A terminal client for a realtime chat room")]
#[command(
    long_about = "A terminal client for a realtime chat room.\n\n\
    The message list is fetched over HTTP and refreshed whenever the server \
    announces a new message on its WebSocket channel."
)]
#[command(version)]
#[command(help_template = HELP_TEMPLATE)]
#[command(before_help = COMMANDS_HELP)]
#[command(after_help = QUICKSTART_HELP)]
pub struct Cli {
    /// Server base URL (overrides MURMUR_API_URL and the config file)
    #[arg(long, global = true, value_name = "URL")]
    pub url: Option<String>,

    /// Path to a config file (default: <config dir>/murmur/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log sync activity to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Follow the message list as it changes
    Watch,

    /// Send one message and exit
    #[command(after_help = "Examples:\n  \
        murmur send --author alice \"hello\"     Send a message\n  \
        murmur send -a bob hi there            Words are joined with spaces")]
    Send {
        /// Name shown next to the message
        #[arg(long, short)]
        author: String,

        /// Message text
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },

    /// Follow the list and send each line typed on stdin
    Chat {
        /// Name shown next to your messages
        #[arg(long, short)]
        author: String,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
