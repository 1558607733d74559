// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Types used in a Poker game.
use serde::{Deserialize, Serialize};
use std::{fmt, ops};

pub use felt_cards::{Card, Color, Rank, Suit};

/// Chips amount.
///
/// Signed, the server may report a negative stack after a short call.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Chips(i64);

impl Chips {
    /// The zero chips.
    pub const ZERO: Chips = Chips(0);

    /// Creates chips with the given value.
    pub const fn new(value: i64) -> Self {
        Self(value)
    }
}

impl ops::Add for Chips {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Chips(self.0.saturating_add(rhs.0))
    }
}

impl fmt::Display for Chips {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Amounts are shown exactly as the server reports them.
        write!(f, "{}", self.0)
    }
}

/// A player action sent to the server.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerAction {
    /// Player calls.
    Call,
    /// Player raises.
    Raise,
    /// Player folds.
    Fold,
}

impl PlayerAction {
    /// The action label.
    pub fn label(&self) -> &'static str {
        match self {
            PlayerAction::Call => "CALL",
            PlayerAction::Raise => "RAISE",
            PlayerAction::Fold => "FOLD",
        }
    }
}

/// The hand phase.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Phase {
    /// No hand has been dealt.
    #[default]
    Waiting,
    /// Betting before the flop.
    Preflop,
    /// Three board cards.
    Flop,
    /// Four board cards.
    Turn,
    /// Five board cards.
    River,
    /// Cards are shown.
    Showdown,
    /// A phase this client doesn't know about.
    Other(String),
}

impl Phase {
    /// The phase name as used on the wire.
    pub fn name(&self) -> &str {
        match self {
            Phase::Waiting => "waiting",
            Phase::Preflop => "preflop",
            Phase::Flop => "flop",
            Phase::Turn => "turn",
            Phase::River => "river",
            Phase::Showdown => "showdown",
            Phase::Other(s) => s,
        }
    }

    /// The phase label shown to the player.
    pub fn label(&self) -> String {
        match self {
            Phase::Waiting => "WAITING".to_string(),
            Phase::Preflop => "PRE-FLOP".to_string(),
            phase => phase.name().to_uppercase(),
        }
    }
}

impl From<String> for Phase {
    fn from(s: String) -> Self {
        match s.as_str() {
            "waiting" => Phase::Waiting,
            "preflop" => Phase::Preflop,
            "flop" => Phase::Flop,
            "turn" => Phase::Turn,
            "river" => Phase::River,
            "showdown" => Phase::Showdown,
            _ => Phase::Other(s),
        }
    }
}

impl From<Phase> for String {
    fn from(phase: Phase) -> Self {
        match phase {
            Phase::Other(s) => s,
            phase => phase.name().to_string(),
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chips_formatting() {
        assert_eq!(Chips(0).to_string(), "0");
        assert_eq!(Chips(120).to_string(), "120");
        assert_eq!(Chips(1_000).to_string(), "1000");
        assert_eq!(Chips(1_234_567).to_string(), "1234567");
        assert_eq!(Chips(-20).to_string(), "-20");
    }

    #[test]
    fn chips_add_saturates() {
        assert_eq!(Chips(880) + Chips(1000) + Chips(120), Chips(2000));
        assert_eq!(Chips(i64::MAX) + Chips(1), Chips(i64::MAX));
        assert_eq!(Chips(-20) + Chips(1020), Chips(1000));
    }

    #[test]
    fn phase_labels() {
        assert_eq!(Phase::from("waiting".to_string()).label(), "WAITING");
        assert_eq!(Phase::from("preflop".to_string()).label(), "PRE-FLOP");
        assert_eq!(Phase::from("flop".to_string()).label(), "FLOP");
        assert_eq!(Phase::from("showdown".to_string()).label(), "SHOWDOWN");
        assert_eq!(Phase::from("break".to_string()).label(), "BREAK");
    }

    #[test]
    fn action_wire_names() {
        let json = serde_json::to_string(&PlayerAction::Raise).unwrap();
        assert_eq!(json, r#""raise""#);

        let action: PlayerAction = serde_json::from_str(r#""fold""#).unwrap();
        assert_eq!(action, PlayerAction::Fold);
    }
}
