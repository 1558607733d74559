// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Table projection of a game state snapshot.
use crate::{
    render::{self, Row, Slot},
    snapshot::GameStateSnapshot,
};

/// Every value the client displays for a snapshot.
///
/// Numbers and cards are copied from the snapshot, the total chips is the
/// only derived value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// The phase label.
    pub phase: String,
    /// The local player chips.
    pub player_chips: String,
    /// The machine chips.
    pub machine_chips: String,
    /// The pot.
    pub pot: String,
    /// The bet to match.
    pub current_bet: String,
    /// The player, machine and pot chips.
    pub total_chips: String,
    /// The local player hand description.
    pub hand_strength: String,
    /// The local player cards.
    pub player_hand: Vec<Slot>,
    /// The machine cards.
    pub machine_hand: Vec<Slot>,
    /// The board cards.
    pub community: Vec<Slot>,
    /// The player can act.
    pub controls_enabled: bool,
    /// The winner overlay text when the hand is over.
    pub winner_text: Option<String>,
}

impl Table {
    /// Projects a snapshot.
    pub fn from_snapshot(s: &GameStateSnapshot) -> Self {
        let machine_hand = if s.game_over && !s.machine.hand.is_empty() {
            render::render_row(&s.machine.hand, false, Row::Hole)
        } else {
            // Never show the machine cards while the hand is in play, even if
            // the server sent their values.
            let count = s.machine.hand_count.unwrap_or(s.machine.hand.len());
            render::render_backs(count, Row::Hole)
        };

        Self {
            phase: s.phase.label(),
            player_chips: s.player.chips.to_string(),
            machine_chips: s.machine.chips.to_string(),
            pot: s.pot.to_string(),
            current_bet: s.current_bet.to_string(),
            total_chips: (s.player.chips + s.machine.chips + s.pot).to_string(),
            hand_strength: render::hand_strength(&s.player.hand, &s.community_cards),
            player_hand: render::render_row(&s.player.hand, false, Row::Hole),
            machine_hand,
            community: render::render_row(&s.community_cards, false, Row::Community),
            controls_enabled: s.initialized && !s.game_over,
            winner_text: s.game_over.then(|| winner_text(s)),
        }
    }
}

/// The winner overlay text.
pub fn winner_text(s: &GameStateSnapshot) -> String {
    if s.is_draw() {
        return "It's a draw!".to_string();
    }

    match &s.winner {
        Some(winner) => format!("{} WINS!", winner.to_uppercase()),
        None => "GAME OVER".to_string(),
    }
}
