// Copyright (C) 2025  Vince Vasta.
// SPDX-License-Identifier: Apache-2.0

//! Card, rank and suit definitions.
use serde::{Deserialize, Serialize};
use std::fmt;

/// A card as reported by the game server.
///
/// Cards carry no behavior, they are only displayed. Ranks and suits the
/// client does not know are kept as they were received so that they can be
/// shown verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// The card rank.
    pub rank: Rank,
    /// The card suit.
    pub suit: Suit,
}

impl Card {
    /// Create a card given a rank and a suit.
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// The color used to display this card.
    pub fn color(&self) -> Color {
        self.suit.color()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Card rank.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Rank {
    /// Deuce
    Deuce,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
    /// A rank this client doesn't know about.
    Other(String),
}

impl Rank {
    /// Returns all known ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The rank label as used on the wire and on screen.
    pub fn label(&self) -> &str {
        match self {
            Rank::Deuce => "2",
            Rank::Trey => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
            Rank::Other(s) => s,
        }
    }
}

impl From<&str> for Rank {
    fn from(s: &str) -> Self {
        Rank::ranks()
            .find(|r| r.label() == s)
            .unwrap_or_else(|| Rank::Other(s.to_string()))
    }
}

impl From<String> for Rank {
    fn from(s: String) -> Self {
        match Rank::from(s.as_str()) {
            Rank::Other(_) => Rank::Other(s),
            rank => rank,
        }
    }
}

impl From<Rank> for String {
    fn from(rank: Rank) -> Self {
        match rank {
            Rank::Other(s) => s,
            rank => rank.label().to_string(),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Card suit.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Suit {
    /// Clubs suit.
    Clubs,
    /// Diamonds suit.
    Diamonds,
    /// Hearts suit.
    Hearts,
    /// Spades suit.
    Spades,
    /// A suit this client doesn't know about.
    Other(String),
}

/// The color of a card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    /// Hearts and diamonds.
    Red,
    /// Clubs, spades and anything else.
    Black,
}

impl Suit {
    /// Returns all known suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }

    /// The suit name as used on the wire.
    pub fn name(&self) -> &str {
        match self {
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
            Suit::Hearts => "Hearts",
            Suit::Spades => "Spades",
            Suit::Other(s) => s,
        }
    }

    /// The suit symbol, unknown suits are displayed by name.
    pub fn symbol(&self) -> &str {
        match self {
            Suit::Clubs => "♣",
            Suit::Diamonds => "♦",
            Suit::Hearts => "♥",
            Suit::Spades => "♠",
            Suit::Other(s) => s,
        }
    }

    /// The suit color.
    pub fn color(&self) -> Color {
        match self {
            Suit::Diamonds | Suit::Hearts => Color::Red,
            _ => Color::Black,
        }
    }
}

impl From<&str> for Suit {
    fn from(s: &str) -> Self {
        Suit::suits()
            .find(|suit| suit.name() == s)
            .unwrap_or_else(|| Suit::Other(s.to_string()))
    }
}

impl From<String> for Suit {
    fn from(s: String) -> Self {
        match Suit::from(s.as_str()) {
            Suit::Other(_) => Suit::Other(s),
            suit => suit,
        }
    }
}

impl From<Suit> for String {
    fn from(suit: Suit) -> Self {
        match suit {
            Suit::Other(s) => s,
            suit => suit.name().to_string(),
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
