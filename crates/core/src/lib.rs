// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Felt Poker core types shared by the client front-ends.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod message;
pub mod poker;
pub mod render;
pub mod snapshot;
pub mod table;
