//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer: the view draws the board into a
//! plain framebuffer (pure, unit-testable) and the renderer flushes that
//! framebuffer to the terminal with crossterm.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep all terminal I/O behind one type with a clean enter/exit lifecycle

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::GameView;
pub use renderer::TerminalRenderer;
