// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Felt Poker client that keeps a display in sync with the game server.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use std::time::Duration;

use felt_core::poker::Chips;

pub mod api;
pub use api::GameApi;
pub mod error;
pub use error::ClientError;
pub mod http;
pub use http::HttpApi;
pub mod scheduler;
pub use scheduler::{ManualScheduler, Scheduler, TaskHandle, TokioScheduler};
pub mod state;
pub use state::{RequestKind, SyncState};
pub mod sync;
pub use sync::SyncClient;
pub mod view;
pub use view::{CardsElement, Element, MessageKind, Screen, ScreenView, View};

/// Client config.
#[derive(Debug, Clone)]
pub struct Config {
    /// The game server url.
    pub server_url: String,
    /// The game state polling period.
    pub poll_interval: Duration,
    /// How long a status message stays visible.
    pub message_timeout: Duration,
    /// The chips sent with a raise.
    pub raise_amount: Chips,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:5001".to_string(),
            poll_interval: Duration::from_secs(2),
            message_timeout: Duration::from_secs(3),
            raise_amount: Chips::new(50),
        }
    }
}
