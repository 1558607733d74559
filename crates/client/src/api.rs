// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Game server API.
use std::{future::Future, sync::Arc};

use felt_core::{
    message::{ActionRequest, ActionResponse, Stats},
    snapshot::GameStateSnapshot,
};

use crate::ClientError;

/// The game server requests used by the client.
pub trait GameApi: Send + Sync + 'static {
    /// Reads the current game state.
    fn fetch_state(&self) -> impl Future<Output = Result<GameStateSnapshot, ClientError>> + Send;

    /// Starts a new hand.
    fn new_hand(&self) -> impl Future<Output = Result<(), ClientError>> + Send;

    /// Sends a player action.
    ///
    /// A rejected action is not an error at this level, the rejection is in
    /// the response [ActionResponse::error].
    fn submit_action(
        &self,
        req: &ActionRequest,
    ) -> impl Future<Output = Result<ActionResponse, ClientError>> + Send;

    /// Reads the chips statistics.
    fn fetch_stats(&self) -> impl Future<Output = Result<Stats, ClientError>> + Send;
}

impl<T: GameApi> GameApi for Arc<T> {
    fn fetch_state(&self) -> impl Future<Output = Result<GameStateSnapshot, ClientError>> + Send {
        self.as_ref().fetch_state()
    }

    fn new_hand(&self) -> impl Future<Output = Result<(), ClientError>> + Send {
        self.as_ref().new_hand()
    }

    fn submit_action(
        &self,
        req: &ActionRequest,
    ) -> impl Future<Output = Result<ActionResponse, ClientError>> + Send {
        self.as_ref().submit_action(req)
    }

    fn fetch_stats(&self) -> impl Future<Output = Result<Stats, ClientError>> + Send {
        self.as_ref().fetch_stats()
    }
}
