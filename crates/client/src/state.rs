// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Client synchronization state.
use ahash::AHashSet;
use parking_lot::Mutex;
use std::{fmt, sync::Arc};

use felt_core::snapshot::GameStateSnapshot;

use crate::{ClientError, scheduler::TaskHandle};

/// The kind of a mutating request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    /// A player action.
    Action,
    /// A new hand request.
    NewHand,
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestKind::Action => write!(f, "action"),
            RequestKind::NewHand => write!(f, "new hand"),
        }
    }
}

#[derive(Debug, Default)]
struct Inner {
    snapshot: Option<Arc<GameStateSnapshot>>,
    last_seq: u64,
    applied_seq: u64,
    in_flight: AHashSet<RequestKind>,
    message_task: Option<TaskHandle>,
}

/// The state shared by the sync client operations.
///
/// Holds the last applied snapshot, the fetch sequence numbers, the mutating
/// requests in flight and the message dismiss task.
#[derive(Debug, Default)]
pub struct SyncState {
    inner: Mutex<Inner>,
}

impl SyncState {
    /// Creates an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// The last applied snapshot.
    pub fn snapshot(&self) -> Option<Arc<GameStateSnapshot>> {
        self.inner.lock().snapshot.clone()
    }

    /// Checks if a request of the given kind is waiting for a response.
    pub fn is_in_flight(&self, kind: RequestKind) -> bool {
        self.inner.lock().in_flight.contains(&kind)
    }

    /// Checks if any mutating request is waiting for a response.
    pub fn any_in_flight(&self) -> bool {
        !self.inner.lock().in_flight.is_empty()
    }

    /// Returns the sequence number for a new fetch.
    pub fn next_seq(&self) -> u64 {
        let mut inner = self.inner.lock();
        inner.last_seq += 1;
        inner.last_seq
    }

    /// Replaces the snapshot with one fetched with sequence number `seq`.
    ///
    /// Returns `None` if a snapshot from a later fetch has already been
    /// applied.
    pub fn apply(&self, seq: u64, snapshot: GameStateSnapshot) -> Option<Arc<GameStateSnapshot>> {
        let mut inner = self.inner.lock();
        if seq <= inner.applied_seq {
            return None;
        }

        let snapshot = Arc::new(snapshot);
        inner.applied_seq = seq;
        inner.snapshot = Some(snapshot.clone());
        Some(snapshot)
    }

    /// Marks a request of the given kind in flight until the guard is dropped.
    pub fn begin(&self, kind: RequestKind) -> Result<InFlight<'_>, ClientError> {
        if self.inner.lock().in_flight.insert(kind) {
            Ok(InFlight { state: self, kind })
        } else {
            Err(ClientError::Busy(kind))
        }
    }

    pub(crate) fn set_message_task(&self, task: TaskHandle) {
        // Drop the previous handle outside the lock.
        let prev = self.inner.lock().message_task.replace(task);
        drop(prev);
    }
}

/// A mutating request in flight.
#[derive(Debug)]
pub struct InFlight<'a> {
    state: &'a SyncState,
    kind: RequestKind,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.state.inner.lock().in_flight.remove(&self.kind);
    }
}
