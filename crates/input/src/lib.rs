//! Input module - terminal key events to game commands
//!
//! Thin layer between crossterm and the core: every keypress maps to exactly
//! one [`Command`](tui_2048_types::Command), with unknown keys mapping to
//! `Command::Unrecognized` so the session loop can re-prompt without
//! touching board state.

pub mod map;

pub use tui_2048_types as types;

pub use map::{map_key_event, should_quit};
