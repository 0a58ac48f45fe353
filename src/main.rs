//! Terminal 2048 runner (default binary).
//!
//! The game is turn-based: the loop blocks on one keypress, applies the
//! resulting command to the core, and redraws. No tick timer is needed.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_2048::core::{GameState, Status};
use tui_2048::input::{map_key_event, should_quit};
use tui_2048::term::{GameView, TerminalRenderer};
use tui_2048::types::Command;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();

    if result.is_ok() {
        println!("Thanks for playing 2048!!!");
    }
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1);

    let mut game = GameState::new(seed);
    let view = GameView;

    loop {
        let fb = view.render(&game);
        term.draw(&fb)?;

        // Block until the next keypress; the board only changes on input.
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if should_quit(key) {
                game.apply_command(Command::Quit);
                return Ok(());
            }

            game.apply_command(map_key_event(key));
            if game.status() == Status::Quit {
                return Ok(());
            }
        }
    }
}
