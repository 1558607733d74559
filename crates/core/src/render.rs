// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards rows rendering.
use crate::poker::Card;

/// A card slot in a rendered row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Slot {
    /// A face up card.
    Face(Card),
    /// A face down card.
    Back,
    /// An empty slot.
    Placeholder,
}

impl Slot {
    /// Checks if this slot is a face up card.
    pub fn is_face(&self) -> bool {
        matches!(self, Slot::Face(_))
    }
}

/// The kind of cards row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Row {
    /// The board cards.
    Community,
    /// A player hole cards.
    Hole,
}

impl Row {
    /// The number of slots in this row.
    pub const fn slots(&self) -> usize {
        match self {
            Row::Community => 5,
            Row::Hole => 2,
        }
    }
}

/// Renders a row of cards.
///
/// The row is padded with placeholders up to the row length, `None` entries
/// become placeholders unless `show_back` is set.
pub fn render_row(cards: &[Option<Card>], show_back: bool, row: Row) -> Vec<Slot> {
    let mut slots = cards
        .iter()
        .map(|card| match card {
            _ if show_back => Slot::Back,
            Some(card) => Slot::Face(card.clone()),
            None => Slot::Placeholder,
        })
        .collect::<Vec<_>>();

    if slots.len() < row.slots() {
        slots.resize(row.slots(), Slot::Placeholder);
    }

    slots
}

/// Renders a row with `count` face down cards.
pub fn render_backs(count: usize, row: Row) -> Vec<Slot> {
    render_row(&vec![None; count], true, row)
}

/// Describes a player hand strength.
///
/// Hands are evaluated by the server, before the flop this shows the player
/// ranks.
pub fn hand_strength(hand: &[Option<Card>], community: &[Option<Card>]) -> String {
    let ranks = hand
        .iter()
        .flatten()
        .map(|c| c.rank.label())
        .collect::<Vec<_>>();

    if ranks.is_empty() {
        "-".to_string()
    } else if community.is_empty() {
        ranks.join(", ")
    } else {
        "Evaluating...".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poker::{Rank, Suit};

    fn cards(n: usize) -> Vec<Option<Card>> {
        Rank::ranks()
            .take(n)
            .map(|r| Some(Card::new(r, Suit::Hearts)))
            .collect()
    }

    fn count(slots: &[Slot], f: impl Fn(&Slot) -> bool) -> usize {
        slots.iter().filter(|&s| f(s)).count()
    }

    #[test]
    fn community_row_is_padded() {
        let row = render_row(&[], false, Row::Community);
        assert_eq!(row, vec![Slot::Placeholder; 5]);

        for n in 0..=5 {
            let row = render_row(&cards(n), false, Row::Community);
            assert_eq!(row.len(), 5);
            assert_eq!(count(&row, Slot::is_face), n);
            assert!(row[n..].iter().all(|s| *s == Slot::Placeholder));
        }
    }

    #[test]
    fn hole_row_has_two_slots() {
        for n in 0..=2 {
            let row = render_row(&cards(n), false, Row::Hole);
            assert_eq!(row.len(), 2);
            assert_eq!(count(&row, Slot::is_face), n);
        }
    }

    #[test]
    fn show_back_hides_values() {
        let row = render_row(&cards(2), true, Row::Hole);
        assert_eq!(row, vec![Slot::Back, Slot::Back]);

        let row = render_backs(1, Row::Hole);
        assert_eq!(row, vec![Slot::Back, Slot::Placeholder]);

        let row = render_backs(0, Row::Hole);
        assert_eq!(row, vec![Slot::Placeholder; 2]);
    }

    #[test]
    fn missing_cards_are_placeholders() {
        let ace = Card::new(Rank::Ace, Suit::Spades);
        let row = render_row(&[None, Some(ace.clone()), None], false, Row::Community);
        assert_eq!(
            row,
            vec![
                Slot::Placeholder,
                Slot::Face(ace),
                Slot::Placeholder,
                Slot::Placeholder,
                Slot::Placeholder
            ]
        );
    }

    #[test]
    fn unknown_cards_pass_through() {
        let odd = Card::new(Rank::from("1"), Suit::from("Coins"));
        let row = render_row(&[Some(odd.clone())], false, Row::Hole);
        assert_eq!(row[0], Slot::Face(odd));
    }

    #[test]
    fn reported_cards_are_not_truncated() {
        let row = render_row(&cards(3), false, Row::Hole);
        assert_eq!(row.len(), 3);
    }

    #[test]
    fn strength_description() {
        let hand = vec![
            Some(Card::new(Rank::Ace, Suit::Spades)),
            Some(Card::new(Rank::Ten, Suit::Spades)),
        ];

        assert_eq!(hand_strength(&[], &[]), "-");
        assert_eq!(hand_strength(&[None, None], &[]), "-");
        assert_eq!(hand_strength(&hand, &[]), "A, 10");
        assert_eq!(hand_strength(&hand, &cards(3)), "Evaluating...");
    }
}
