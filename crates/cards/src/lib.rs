// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Felt Poker cards types.
//!
//! This crate defines the cards reported by the game server:
//!
//! ```
//! # use felt_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! assert_eq!(ah.to_string(), "A♥");
//! ```
//!
//! Ranks and suits that are not part of a standard deck are kept as strings so
//! that the client can display whatever the server sent:
//!
//! ```
//! # use felt_cards::{Card, Rank, Suit};
//! let card = Card::new(Rank::from("1"), Suit::from("Coins"));
//! assert_eq!(card.to_string(), "1Coins");
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, Color, Rank, Suit};
