// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Client errors.
use thiserror::Error;

use crate::state::RequestKind;

/// A failed client operation.
///
/// Failures are logged and shown to the player before being returned, callers
/// can inspect them but don't have to handle them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The request didn't reach the server or the connection failed.
    #[error("Transport error: {0}")]
    Transport(String),
    /// The server returned a non success status.
    #[error("Server returned status {0}")]
    Status(u16),
    /// The response body is not what the client expects.
    #[error("Invalid server response: {0}")]
    Decode(String),
    /// The server rejected the request.
    #[error("{0}")]
    Domain(String),
    /// A request of the same kind is still waiting for a response.
    #[error("A {0} request is already in flight")]
    Busy(RequestKind),
}
