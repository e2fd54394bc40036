// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// The binary with the environment cleared of murmur settings.
///
/// `MURMUR_CONFIG` points into `config_dir` so a user's own config file is
/// never picked up.
pub fn murmur(config_dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("murmur");
    cmd.env_remove("MURMUR_API_URL")
        .env("MURMUR_CONFIG", config_dir.path().join("config.toml"))
        .env("NO_COLOR", "1");
    cmd
}

/// An address nothing listens on.
pub fn dead_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
