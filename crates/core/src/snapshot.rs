// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Game state snapshots reported by the server.
use serde::{Deserialize, Deserializer, Serialize, de::IgnoredAny};

use crate::poker::{Card, Chips, Phase};

/// The winner identifier the server uses for a split pot.
pub const DRAW: &str = "Empate";

/// One server reported view of the full game state.
///
/// Fields missing from the payload take their default values, the server
/// omits some of them before the first hand is dealt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameStateSnapshot {
    /// A hand has been dealt since the server started.
    pub initialized: bool,
    /// The hand phase.
    pub phase: Phase,
    /// The pot.
    pub pot: Chips,
    /// The bet to match in this betting round.
    pub current_bet: Chips,
    /// The local player.
    pub player: PlayerSnapshot,
    /// The machine opponent.
    pub machine: PlayerSnapshot,
    /// The board cards.
    #[serde(deserialize_with = "lenient_cards")]
    pub community_cards: Vec<Option<Card>>,
    /// The hand is over.
    pub game_over: bool,
    /// The hand winner, see [DRAW].
    pub winner: Option<String>,
}

impl GameStateSnapshot {
    /// Checks if the hand ended with a split pot.
    pub fn is_draw(&self) -> bool {
        self.winner.as_deref() == Some(DRAW)
    }
}

/// A player record in a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSnapshot {
    /// The player name.
    pub name: Option<String>,
    /// The player chips.
    pub chips: Chips,
    /// The player cards, empty when the server hides them.
    #[serde(deserialize_with = "lenient_cards")]
    pub hand: Vec<Option<Card>>,
    /// The number of hidden cards.
    pub hand_count: Option<usize>,
    /// The player has folded this hand.
    pub folded: bool,
    /// The player bet in this betting round.
    pub current_bet: Chips,
}

/// Deserializes a cards list where entries may be null or malformed.
///
/// A null list is an empty list, an entry without a rank or a suit is `None`
/// and gets rendered as a placeholder.
fn lenient_cards<'de, D>(deserializer: D) -> Result<Vec<Option<Card>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Label {
        Text(String),
        Number(i64),
        Other(IgnoredAny),
    }

    impl Label {
        fn into_text(self) -> Option<String> {
            match self {
                Label::Text(s) if !s.is_empty() => Some(s),
                Label::Number(n) => Some(n.to_string()),
                _ => None,
            }
        }
    }

    #[derive(Deserialize)]
    struct WireCard {
        #[serde(default)]
        rank: Option<Label>,
        #[serde(default)]
        suit: Option<Label>,
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Entry {
        Card(WireCard),
        Other(IgnoredAny),
    }

    let entries = Option::<Vec<Option<Entry>>>::deserialize(deserializer)?;
    let cards = entries
        .unwrap_or_default()
        .into_iter()
        .map(|entry| match entry {
            Some(Entry::Card(WireCard { rank, suit })) => {
                let rank = rank.and_then(Label::into_text)?;
                let suit = suit.and_then(Label::into_text)?;
                Some(Card::new(rank.into(), suit.into()))
            }
            _ => None,
        })
        .collect();

    Ok(cards)
}
