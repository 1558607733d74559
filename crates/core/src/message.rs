// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Type definitions for requests and responses exchanged with the game server.
use serde::{Deserialize, Serialize};

use crate::poker::{Chips, PlayerAction};

/// The body of an action request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRequest {
    /// The player action.
    pub action: PlayerAction,
    /// The amount for this action (only used for raise actions).
    pub amount: Chips,
}

/// The server response to an action request.
///
/// A response with an error is a domain failure: the request reached the
/// server but the action was rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionResponse {
    /// The action the machine took in response.
    pub machine_action: Option<String>,
    /// The amount of the machine action.
    pub machine_amount: Option<Chips>,
    /// The rejection reason.
    pub error: Option<String>,
}

impl ActionResponse {
    /// Describes the machine action if there is one.
    pub fn machine_action_text(&self) -> Option<String> {
        let action = self.machine_action.as_deref()?;
        let verb = match action {
            "call" => "called",
            "raise" => "raised",
            "fold" => "folded",
            "check" => "checked",
            other => other,
        };

        Some(format!("Machine {verb}"))
    }
}

/// Chips statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stats {
    /// The player chips.
    pub player_chips: Chips,
    /// The machine chips.
    pub machine_chips: Chips,
    /// Chips owned by both players.
    pub total_chips: Chips,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_request_body() {
        let req = ActionRequest {
            action: PlayerAction::Raise,
            amount: Chips::new(50),
        };

        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"action":"raise","amount":50}"#);
    }

    #[test]
    fn action_response() {
        let res: ActionResponse = serde_json::from_str(
            r#"{"status":"success","machine_action":"raise","machine_amount":20}"#,
        )
        .unwrap();
        assert_eq!(res.machine_action.as_deref(), Some("raise"));
        assert_eq!(res.machine_amount, Some(Chips::new(20)));
        assert!(res.error.is_none());
        assert_eq!(res.machine_action_text().unwrap(), "Machine raised");

        let res: ActionResponse =
            serde_json::from_str(r#"{"error":"Game is over or player has folded"}"#).unwrap();
        assert_eq!(res.error.as_deref(), Some("Game is over or player has folded"));
        assert!(res.machine_action_text().is_none());

        let res = ActionResponse {
            machine_action: Some("all-in".to_string()),
            ..Default::default()
        };
        assert_eq!(res.machine_action_text().unwrap(), "Machine all-in");
    }
}
