//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested by inspecting the
//! framebuffer it produces.

use crate::core::{GameState, Outcome, Status};
use crate::fb::{FrameBuffer, Rgb, Style};
use crate::types::BOARD_SIZE;

/// Width of one rendered cell in terminal columns.
const CELL_W: u16 = 4;

/// Framebuffer width: the grid plus room for the advisory messages.
const VIEW_W: u16 = 44;

/// Framebuffer height: grid, status lines, and the key legend.
const VIEW_H: u16 = 15;

/// A lightweight terminal view for the 2048 board.
///
/// Layout: the board grid (each cell 4 columns, right-aligned, `-` for
/// empty), a status/advisory line, and the key legend. The whole screen is
/// redrawn after every keypress.
#[derive(Debug, Default)]
pub struct GameView;

impl GameView {
    /// Render the current game state into a fresh framebuffer.
    pub fn render(&self, game: &GameState) -> FrameBuffer {
        let mut fb = FrameBuffer::new(VIEW_W, VIEW_H);
        self.render_into(game, &mut fb);
        fb
    }

    /// Render into an existing framebuffer, clearing it first.
    pub fn render_into(&self, game: &GameState, fb: &mut FrameBuffer) {
        fb.clear();

        let x0: u16 = 1;
        let y0: u16 = 1;

        // Board grid.
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                let value = game.board().get(x, y).unwrap_or(0);
                let text = if value == 0 {
                    "   -".to_string()
                } else {
                    format!("{:>4}", value)
                };
                fb.put_str(x0 + (x as u16) * CELL_W, y0 + y as u16, &text, tile_style(value));
            }
        }

        // Status / advisory lines.
        let status_y = y0 + BOARD_SIZE as u16 + 1;
        match game.status() {
            Status::GameOver => {
                fb.put_str(x0, status_y, "Game over!!!", message_style());
                fb.put_str(
                    x0,
                    status_y + 1,
                    "Would you like to restart or quit [r/q]?",
                    message_style(),
                );
            }
            Status::Playing => match game.last_outcome() {
                Some(Outcome::Rejected) => {
                    fb.put_str(x0, status_y, "Choose another move!", message_style());
                }
                Some(Outcome::Ignored) => {
                    fb.put_str(x0, status_y, "You've entered invalid key.", message_style());
                }
                _ => {}
            },
            Status::Quit => {
                fb.put_str(x0, status_y, "Thanks for playing 2048!!!", message_style());
            }
        }

        // Key legend.
        let legend_y = status_y + 3;
        let legend = Style::default();
        fb.put_str(x0, legend_y, "w: up    a: left", legend);
        fb.put_str(x0, legend_y + 1, "s: down  d: right", legend);
        fb.put_str(x0, legend_y + 3, "r: restart", legend);
        fb.put_str(x0, legend_y + 4, "q: quit", legend);
    }
}

/// Per-value tile color, warming up as the value grows.
fn tile_style(value: u32) -> Style {
    let fg = match value {
        0 => Rgb::new(110, 110, 110),
        2 => Rgb::new(220, 220, 210),
        4 => Rgb::new(235, 225, 190),
        8 => Rgb::new(240, 180, 120),
        16 => Rgb::new(245, 150, 100),
        32 => Rgb::new(245, 125, 95),
        64 => Rgb::new(245, 95, 60),
        128 | 256 => Rgb::new(235, 205, 110),
        512 | 1024 => Rgb::new(235, 200, 80),
        _ => Rgb::new(235, 195, 50),
    };
    Style {
        fg,
        bg: Rgb::new(0, 0, 0),
        bold: value >= 128,
    }
}

fn message_style() -> Style {
    Style {
        fg: Rgb::new(250, 220, 120),
        bg: Rgb::new(0, 0, 0),
        bold: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Command, NUM_STARTING_TILES};

    fn rendered_text(game: &GameState) -> Vec<String> {
        let fb = GameView.render(game);
        (0..fb.height()).map(|y| fb.row_text(y)).collect()
    }

    #[test]
    fn fresh_board_renders_placeholders_and_tiles() {
        let game = GameState::new(12345);
        let lines = rendered_text(&game);

        // Four grid rows, each 16 columns of cell text starting at x=1.
        let grid: String = lines[1..5].concat();
        let dashes = grid.matches('-').count();
        assert_eq!(dashes, 16 - NUM_STARTING_TILES);
        assert!(grid.contains('2') || grid.contains('4'));
    }

    #[test]
    fn legend_is_always_visible() {
        let game = GameState::new(1);
        let text = rendered_text(&game).join("\n");
        assert!(text.contains("w: up    a: left"));
        assert!(text.contains("s: down  d: right"));
        assert!(text.contains("r: restart"));
        assert!(text.contains("q: quit"));
    }

    #[test]
    fn invalid_key_shows_advisory() {
        let mut game = GameState::new(1);
        game.apply_command(Command::Unrecognized);
        let text = rendered_text(&game).join("\n");
        assert!(text.contains("You've entered invalid key."));
    }

    #[test]
    fn tile_styles_escalate() {
        assert_ne!(tile_style(2), tile_style(64));
        assert!(tile_style(2048).bold);
        assert!(!tile_style(2).bold);
    }
}
