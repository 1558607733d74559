// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Display surface driven by the sync client.
use ahash::AHashMap;
use parking_lot::Mutex;

use felt_core::render::Slot;

/// A text element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    /// The hand phase label.
    GamePhase,
    /// The local player chips.
    PlayerChips,
    /// The machine chips.
    MachineChips,
    /// The pot.
    Pot,
    /// The bet to match.
    CurrentBet,
    /// All the chips on the table.
    TotalChips,
    /// The local player hand description.
    HandStrength,
}

/// A cards row element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardsElement {
    /// The local player cards.
    PlayerHand,
    /// The machine cards.
    MachineHand,
    /// The board cards.
    CommunityCards,
}

/// The kind of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// Game events.
    Info,
    /// A request completed.
    Success,
    /// A request failed.
    Error,
}

/// Traits for the client display.
///
/// The call, raise and fold controls are enabled and disabled together.
pub trait View: Send + Sync + 'static {
    /// Sets the text of an element.
    fn set_text(&self, element: Element, text: &str);

    /// Replaces the cards in a row.
    fn render_cards(&self, element: CardsElement, slots: &[Slot]);

    /// Enables or disables the action controls.
    fn set_controls_enabled(&self, enabled: bool);

    /// Shows a status message.
    fn show_message(&self, text: &str, kind: MessageKind);

    /// Hides the status message.
    fn hide_message(&self);

    /// Shows the winner overlay.
    fn show_winner(&self, text: &str);

    /// Hides the winner overlay.
    fn hide_winner(&self);
}

/// The displayed values.
#[derive(Debug, Clone, Default)]
pub struct Screen {
    /// Text elements.
    pub texts: AHashMap<Element, String>,
    /// Cards rows.
    pub cards: AHashMap<CardsElement, Vec<Slot>>,
    /// The action controls are enabled.
    pub controls_enabled: bool,
    /// The visible status message.
    pub message: Option<(String, MessageKind)>,
    /// The visible winner overlay text.
    pub winner: Option<String>,
}

impl Screen {
    /// The text of an element, empty if not set.
    pub fn text(&self, element: Element) -> &str {
        self.texts.get(&element).map(String::as_str).unwrap_or_default()
    }

    /// The slots of a cards row, empty if not set.
    pub fn cards(&self, element: CardsElement) -> &[Slot] {
        self.cards.get(&element).map(Vec::as_slice).unwrap_or_default()
    }
}

/// A view that keeps the displayed values in memory.
///
/// Front-ends wrap it and repaint from [ScreenView::screen].
#[derive(Debug, Default)]
pub struct ScreenView {
    screen: Mutex<Screen>,
}

impl ScreenView {
    /// Returns a copy of the displayed values.
    pub fn screen(&self) -> Screen {
        self.screen.lock().clone()
    }
}

impl View for ScreenView {
    fn set_text(&self, element: Element, text: &str) {
        self.screen.lock().texts.insert(element, text.to_string());
    }

    fn render_cards(&self, element: CardsElement, slots: &[Slot]) {
        self.screen.lock().cards.insert(element, slots.to_vec());
    }

    fn set_controls_enabled(&self, enabled: bool) {
        self.screen.lock().controls_enabled = enabled;
    }

    fn show_message(&self, text: &str, kind: MessageKind) {
        self.screen.lock().message = Some((text.to_string(), kind));
    }

    fn hide_message(&self) {
        self.screen.lock().message = None;
    }

    fn show_winner(&self, text: &str) {
        self.screen.lock().winner = Some(text.to_string());
    }

    fn hide_winner(&self) {
        self.screen.lock().winner = None;
    }
}
