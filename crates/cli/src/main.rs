// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Felt Poker terminal client.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result};
use clap::Parser;
use std::{
    fs::File,
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration,
};

use felt_client::{Config, HttpApi, SyncClient, SyncState, TokioScheduler};
use felt_core::poker::Chips;

pub mod terminal;

#[derive(Debug, Parser)]
struct Cli {
    /// The game server url.
    #[clap(long, short, default_value = "http://127.0.0.1:5001")]
    url: String,
    /// The game state polling period in milliseconds.
    #[clap(long, short, default_value_t = 2000, value_parser = clap::value_parser!(u64).range(1..))]
    interval_ms: u64,
    /// The chips sent with a raise.
    #[clap(long, short, default_value_t = 50)]
    raise: u32,
    /// Write logs to this file.
    #[clap(long, short)]
    log: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // The terminal is in raw mode, logs only go to a file.
    if let Some(path) = &cli.log {
        init_logger(path)?;
    }

    let config = Config {
        server_url: cli.url,
        poll_interval: Duration::from_millis(cli.interval_ms),
        raise_amount: Chips::new(i64::from(cli.raise)),
        ..Config::default()
    };

    let api = HttpApi::new(&config.server_url);
    let client = SyncClient::new(
        config,
        api,
        terminal::TerminalView::default(),
        TokioScheduler,
        Arc::new(SyncState::new()),
    );

    terminal::run(client).await
}

fn init_logger(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Cannot create log file {}", path.display()))?;

    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();

    Ok(())
}
