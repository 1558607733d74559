// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Terminal I/O.
use anyhow::Result;
use crossterm::{
    cursor,
    event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{self, Stylize},
    terminal::{Clear, ClearType, disable_raw_mode, enable_raw_mode},
};
use futures_util::StreamExt;
use log::info;
use std::{io, sync::Arc};
use tokio::sync::Notify;

use felt_client::{
    CardsElement, Element, HttpApi, MessageKind, Screen, ScreenView, SyncClient, TokioScheduler,
    View,
};
use felt_core::{
    poker::{Color, PlayerAction},
    render::Slot,
};

/// The terminal client.
pub type Client = SyncClient<HttpApi, TerminalView, TokioScheduler>;

/// A view that notifies the terminal loop on every change.
#[derive(Debug, Default)]
pub struct TerminalView {
    screen: ScreenView,
    changed: Notify,
}

impl TerminalView {
    /// Returns a copy of the displayed values.
    pub fn screen(&self) -> Screen {
        self.screen.screen()
    }

    /// Waits for a change since the last call.
    pub async fn changed(&self) {
        self.changed.notified().await
    }

    fn update(&self, f: impl FnOnce(&ScreenView)) {
        f(&self.screen);
        self.changed.notify_one();
    }
}

impl View for TerminalView {
    fn set_text(&self, element: Element, text: &str) {
        self.update(|s| s.set_text(element, text));
    }

    fn render_cards(&self, element: CardsElement, slots: &[Slot]) {
        self.update(|s| s.render_cards(element, slots));
    }

    fn set_controls_enabled(&self, enabled: bool) {
        self.update(|s| s.set_controls_enabled(enabled));
    }

    fn show_message(&self, text: &str, kind: MessageKind) {
        self.update(|s| s.show_message(text, kind));
    }

    fn hide_message(&self) {
        self.update(|s| s.hide_message());
    }

    fn show_winner(&self, text: &str) {
        self.update(|s| s.show_winner(text));
    }

    fn hide_winner(&self) {
        self.update(|s| s.hide_winner());
    }
}

/// A key command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Play(PlayerAction),
    NewHand,
    HideWinner,
    Stats,
    Quit,
}

fn key_command(key: &KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        // Raw mode delivers Ctrl-C as a key.
        return match key.code {
            KeyCode::Char('c') => Some(Command::Quit),
            _ => None,
        };
    }

    if key.modifiers.contains(KeyModifiers::ALT) {
        return None;
    }

    match key.code {
        KeyCode::Char('c') => Some(Command::Play(PlayerAction::Call)),
        KeyCode::Char('r') => Some(Command::Play(PlayerAction::Raise)),
        KeyCode::Char('f') => Some(Command::Play(PlayerAction::Fold)),
        KeyCode::Char('n') => Some(Command::NewHand),
        KeyCode::Char('w') => Some(Command::HideWinner),
        KeyCode::Char('s') => Some(Command::Stats),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

/// Runs the terminal loop until the player quits.
pub async fn run(client: Arc<Client>) -> Result<()> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, cursor::Hide)?;

    let res = event_loop(&client, &mut stdout).await;
    client.stop();

    execute!(
        stdout,
        Clear(ClearType::All),
        cursor::MoveTo(0, 0),
        cursor::Show
    )?;
    disable_raw_mode()?;

    res
}

async fn event_loop(client: &Arc<Client>, stdout: &mut io::Stdout) -> Result<()> {
    client.start().await;
    print_screen(stdout, &client.view().screen())?;

    let mut reader = EventStream::new();
    loop {
        tokio::select! {
            // The view has changed.
            _ = client.view().changed() => {
                print_screen(stdout, &client.view().screen())?;
            },
            // We have received an event from the terminal.
            res = reader.next() => {
                let Some(event) = res else {
                    break;
                };

                if let Event::Key(key) = event? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }

                    match key_command(&key) {
                        Some(Command::Quit) => break,
                        Some(cmd) => handle_command(client, cmd),
                        None => {}
                    }
                }
            },
        };
    }

    Ok(())
}

fn handle_command(client: &Arc<Client>, cmd: Command) {
    let client = client.clone();
    match cmd {
        Command::Play(action) => {
            // Controls are disabled while the player cannot act.
            if client.view().screen().controls_enabled {
                tokio::spawn(async move {
                    let _ = client.play(action).await;
                });
            }
        }
        Command::NewHand => {
            tokio::spawn(async move {
                let _ = client.start_new_hand().await;
            });
        }
        Command::HideWinner => client.hide_winner(),
        Command::Stats => {
            tokio::spawn(async move {
                if let Ok(stats) = client.fetch_stats().await {
                    info!("Stats {stats:?}");
                    let text = format!(
                        "You {} Machine {} Total {}",
                        stats.player_chips, stats.machine_chips, stats.total_chips
                    );
                    client.show_message(&text, MessageKind::Info);
                }
            });
        }
        Command::Quit => {}
    }
}

fn print_screen(w: &mut impl io::Write, screen: &Screen) -> Result<()> {
    queue!(w, Clear(ClearType::All))?;

    let header = format!("FELT POKER  {}", screen.text(Element::GamePhase));
    print_line(w, 0, header.as_str().bold())?;

    let machine = format!("Machine  chips {}", screen.text(Element::MachineChips));
    print_line(w, 2, machine.as_str().dark_green())?;
    print_cards(w, 3, screen.cards(CardsElement::MachineHand))?;

    let board = format!(
        "Board    pot {}  bet {}  total {}",
        screen.text(Element::Pot),
        screen.text(Element::CurrentBet),
        screen.text(Element::TotalChips)
    );
    print_line(w, 5, board.as_str().dark_green())?;
    print_cards(w, 6, screen.cards(CardsElement::CommunityCards))?;

    let player = format!(
        "You      chips {}  hand {}",
        screen.text(Element::PlayerChips),
        screen.text(Element::HandStrength)
    );
    print_line(w, 8, player.as_str().dark_green())?;
    print_cards(w, 9, screen.cards(CardsElement::PlayerHand))?;

    let actions = "[c] Call  [r] Raise  [f] Fold";
    let actions = if screen.controls_enabled {
        actions.white()
    } else {
        actions.dark_grey()
    };
    print_line(w, 11, actions)?;
    print_line(w, 12, "[n] New hand  [s] Stats  [q] Quit".white())?;

    if let Some((text, kind)) = &screen.message {
        let text = text.as_str();
        let text = match kind {
            MessageKind::Info => text.cyan(),
            MessageKind::Success => text.green(),
            MessageKind::Error => text.red(),
        };

        print_line(w, 14, text)?;
    }

    if let Some(winner) = &screen.winner {
        let text = format!("*** {winner} ***  [w] hide");
        print_line(w, 16, text.as_str().yellow().bold())?;
    }

    w.flush()?;

    Ok(())
}

fn print_line(w: &mut impl io::Write, row: u16, text: style::StyledContent<&str>) -> Result<()> {
    queue!(w, cursor::MoveTo(0, row), style::PrintStyledContent(text))?;
    Ok(())
}

fn print_cards(w: &mut impl io::Write, row: u16, slots: &[Slot]) -> Result<()> {
    queue!(w, cursor::MoveTo(2, row))?;

    for slot in slots {
        let text = format!("{:<5}", slot_text(slot));
        let text = match slot {
            Slot::Face(card) if card.color() == Color::Red => text.as_str().red(),
            Slot::Face(_) => text.as_str().white(),
            Slot::Back => text.as_str().blue(),
            Slot::Placeholder => text.as_str().dark_grey(),
        };

        queue!(w, style::PrintStyledContent(text))?;
    }

    Ok(())
}

fn slot_text(slot: &Slot) -> String {
    match slot {
        Slot::Face(card) => card.to_string(),
        Slot::Back => "▒▒".to_string(),
        Slot::Placeholder => "··".to_string(),
    }
}
