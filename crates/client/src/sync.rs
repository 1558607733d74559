// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Game state synchronization.
//!
//! The [SyncClient] polls the server for the game state and paints every
//! snapshot on a [View]. Player actions disable the view controls while the
//! request is in flight and refresh the state as soon as the server responds.
use log::{debug, error, info, warn};
use parking_lot::Mutex;
use std::sync::Arc;

use felt_core::{
    message::{ActionRequest, Stats},
    poker::{Chips, PlayerAction},
    snapshot::GameStateSnapshot,
    table::Table,
};

use crate::{
    ClientError, Config, GameApi,
    scheduler::{Scheduler, TaskHandle},
    state::{InFlight, RequestKind, SyncState},
    view::{CardsElement, Element, MessageKind, View},
};

/// Keeps a view in sync with the server game state.
pub struct SyncClient<A, V, S> {
    config: Config,
    api: A,
    view: Arc<V>,
    scheduler: S,
    state: Arc<SyncState>,
    poll_task: Mutex<Option<TaskHandle>>,
}

impl<A, V, S> SyncClient<A, V, S>
where
    A: GameApi,
    V: View,
    S: Scheduler,
{
    /// Creates a new client.
    pub fn new(config: Config, api: A, view: V, scheduler: S, state: Arc<SyncState>) -> Arc<Self> {
        Arc::new(Self {
            config,
            api,
            view: Arc::new(view),
            scheduler,
            state,
            poll_task: Mutex::new(None),
        })
    }

    /// The client view.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// The client state.
    pub fn state(&self) -> &Arc<SyncState> {
        &self.state
    }

    /// Paints the current state and starts polling.
    pub async fn start(self: &Arc<Self>) {
        info!("Starting client for {}", self.config.server_url);

        let _ = self.refresh().await;
        self.start_polling();
    }

    /// Starts the polling task, replacing the active one if any.
    pub fn start_polling(self: &Arc<Self>) {
        // The task must not keep the client alive.
        let client = Arc::downgrade(self);
        let task = self.scheduler.repeat(self.config.poll_interval, move || {
            let client = client.clone();
            async move {
                if let Some(client) = client.upgrade() {
                    let _ = client.refresh().await;
                }
            }
        });

        // The previous task is cancelled outside the lock.
        let prev = self.poll_task.lock().replace(task);
        drop(prev);
    }

    /// Stops the polling task.
    pub fn stop(&self) {
        let task = self.poll_task.lock().take();
        if let Some(task) = task {
            info!("Stopping client polling");
            task.cancel();
        }
    }

    /// Checks if the polling task is active.
    pub fn is_polling(&self) -> bool {
        self.poll_task.lock().is_some()
    }

    /// Reads the game state from the server.
    ///
    /// The last applied snapshot is not changed.
    pub async fn fetch_state(&self) -> Result<GameStateSnapshot, ClientError> {
        self.api.fetch_state().await.inspect_err(|e| {
            error!("Error fetching game state: {e}");
            self.show_message("Error connecting to the server", MessageKind::Error);
        })
    }

    /// Reads the game state and paints it.
    ///
    /// Returns `None` if the response was superseded by a later fetch.
    pub async fn refresh(&self) -> Result<Option<Arc<GameStateSnapshot>>, ClientError> {
        let seq = self.state.next_seq();
        let snapshot = self.fetch_state().await?;
        Ok(self.apply(seq, snapshot))
    }

    /// Starts a new hand.
    pub async fn start_new_hand(&self) -> Result<(), ClientError> {
        let _in_flight = self.begin(RequestKind::NewHand)?;

        if let Err(e) = self.api.new_hand().await {
            error!("Error starting new hand: {e}");
            self.show_message("Error starting a new hand", MessageKind::Error);
            return Err(e);
        }

        info!("New hand started");
        self.show_message("New hand started!", MessageKind::Success);
        self.view.hide_winner();

        let _ = self.refresh().await;
        self.view.set_controls_enabled(true);

        Ok(())
    }

    /// Sends a player action.
    pub async fn submit_action(&self, action: PlayerAction, amount: Chips) -> Result<(), ClientError> {
        let _in_flight = self.begin(RequestKind::Action)?;

        // Disable controls before sending to prevent duplicate submissions.
        self.view.set_controls_enabled(false);

        info!("Sending action {} {amount}", action.label());
        let req = ActionRequest { action, amount };
        let res = match self.api.submit_action(&req).await {
            Ok(res) => res,
            Err(e) => {
                error!("Error performing action {}: {e}", action.label());
                self.show_message("Error performing action", MessageKind::Error);
                self.view.set_controls_enabled(true);
                return Err(e);
            }
        };

        if let Some(reason) = res.error {
            warn!("Action {} rejected: {reason}", action.label());
            self.show_message(&reason, MessageKind::Error);
            self.view.set_controls_enabled(true);
            return Err(ClientError::Domain(reason));
        }

        if let Some(text) = res.machine_action_text() {
            self.show_message(&text, MessageKind::Info);
        }

        let _ = self.refresh().await;

        match self.state.snapshot().filter(|s| s.game_over) {
            Some(snapshot) => {
                let table = Table::from_snapshot(&snapshot);
                if let Some(text) = table.winner_text {
                    info!("Hand over: {text}");
                    self.view.show_winner(&text);
                }

                self.view.set_controls_enabled(false);
            }
            None => self.view.set_controls_enabled(true),
        }

        Ok(())
    }

    /// Sends an action with the configured amount.
    ///
    /// Only raises carry an amount.
    pub async fn play(&self, action: PlayerAction) -> Result<(), ClientError> {
        let amount = match action {
            PlayerAction::Raise => self.config.raise_amount,
            _ => Chips::ZERO,
        };

        self.submit_action(action, amount).await
    }

    /// Reads the chips statistics.
    pub async fn fetch_stats(&self) -> Result<Stats, ClientError> {
        self.api.fetch_stats().await.inspect_err(|e| {
            error!("Error fetching stats: {e}");
            self.show_message("Error connecting to the server", MessageKind::Error);
        })
    }

    /// Hides the winner overlay.
    pub fn hide_winner(&self) {
        self.view.hide_winner();
    }

    /// Shows a message that is hidden after the configured timeout.
    pub fn show_message(&self, text: &str, kind: MessageKind) {
        self.view.show_message(text, kind);

        let view = self.view.clone();
        let task = self.scheduler.once(self.config.message_timeout, async move {
            view.hide_message();
        });

        // Replacing the task cancels the timer of the previous message.
        self.state.set_message_task(task);
    }

    fn begin(&self, kind: RequestKind) -> Result<InFlight<'_>, ClientError> {
        self.state.begin(kind).inspect_err(|e| warn!("Rejected request: {e}"))
    }

    fn apply(&self, seq: u64, snapshot: GameStateSnapshot) -> Option<Arc<GameStateSnapshot>> {
        let Some(snapshot) = self.state.apply(seq, snapshot) else {
            debug!("Discarding stale snapshot {seq}");
            return None;
        };

        debug!("Applying snapshot {seq} {:?}", snapshot.phase);

        let table = Table::from_snapshot(&snapshot);
        self.view.set_text(Element::GamePhase, &table.phase);
        self.view.set_text(Element::PlayerChips, &table.player_chips);
        self.view.set_text(Element::MachineChips, &table.machine_chips);
        self.view.set_text(Element::Pot, &table.pot);
        self.view.set_text(Element::CurrentBet, &table.current_bet);
        self.view.set_text(Element::TotalChips, &table.total_chips);
        self.view.set_text(Element::HandStrength, &table.hand_strength);

        self.view
            .render_cards(CardsElement::PlayerHand, &table.player_hand);
        self.view
            .render_cards(CardsElement::MachineHand, &table.machine_hand);
        self.view
            .render_cards(CardsElement::CommunityCards, &table.community);

        // The request in flight owns the controls until it completes.
        if !self.state.any_in_flight() {
            self.view.set_controls_enabled(table.controls_enabled);
        }

        Some(snapshot)
    }
}
