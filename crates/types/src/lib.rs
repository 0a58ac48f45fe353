//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, key mapping, rendering).
//!
//! # Board Dimensions
//!
//! The board is a fixed `BOARD_SIZE` x `BOARD_SIZE` grid (4x4 by default).
//! A fresh board starts with `NUM_STARTING_TILES` tiles.
//!
//! # Spawn Distribution
//!
//! Every spawned tile is a 2 or a 4. `FOUR_SPAWN_PERCENT` controls the split:
//! 10 means a 10% chance of a 4 and a 90% chance of a 2.
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Command, Direction, BOARD_SIZE};
//!
//! // Parse single-key commands
//! assert_eq!(Command::from_char('w'), Command::Move(Direction::Up));
//! assert_eq!(Command::from_char('q'), Command::Quit);
//! assert_eq!(Command::from_char('x'), Command::Unrecognized);
//!
//! // Board dimension
//! assert_eq!(BOARD_SIZE, 4);
//! ```

/// Board dimension (4 columns x 4 rows)
pub const BOARD_SIZE: usize = 4;

/// Total number of cells on the board
pub const BOARD_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// Number of tiles placed on a fresh board
pub const NUM_STARTING_TILES: usize = 2;

/// Percent chance that a spawned tile is a 4 (the rest are 2s)
pub const FOUR_SPAWN_PERCENT: u32 = 10;

/// A cell on the game board
///
/// - `0`: Empty cell
/// - Any other value: a tile; always a positive power of two >= 2
///
/// Used internally by the board as a flat array of cells.
pub type Cell = u32;

/// The four move directions
///
/// Each direction reduces to "treat the board as lines along one axis,
/// shifted toward one of the two ends":
/// - **Up**: columns, toward the start (row 0)
/// - **Left**: rows, toward the start (column 0)
/// - **Down**: columns, toward the end
/// - **Right**: rows, toward the end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Left,
    Down,
    Right,
}

impl Direction {
    /// All four directions, in probe order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Down,
        Direction::Right,
    ];

    /// True if lines shift toward index 0 (up/left), false toward the end
    pub fn toward_start(&self) -> bool {
        matches!(self, Direction::Up | Direction::Left)
    }

    /// True if the direction traverses columns rather than rows
    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}

/// A player command, one per keypress
///
/// Raw input maps to a tagged variant; anything outside the known key set is
/// `Unrecognized`, which must never change board state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Attempt a move in the given direction
    Move(Direction),
    /// Discard the board and start a fresh game
    Restart,
    /// Leave the game
    Quit,
    /// Any key outside the command set; triggers a re-prompt only
    Unrecognized,
}

impl Command {
    /// Map a single character to a command (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::{Command, Direction};
    ///
    /// assert_eq!(Command::from_char('a'), Command::Move(Direction::Left));
    /// assert_eq!(Command::from_char('S'), Command::Move(Direction::Down));
    /// assert_eq!(Command::from_char('r'), Command::Restart);
    /// assert_eq!(Command::from_char('?'), Command::Unrecognized);
    /// ```
    pub fn from_char(c: char) -> Self {
        match c.to_ascii_lowercase() {
            'w' => Command::Move(Direction::Up),
            'a' => Command::Move(Direction::Left),
            's' => Command::Move(Direction::Down),
            'd' => Command::Move(Direction::Right),
            'r' => Command::Restart,
            'q' => Command::Quit,
            _ => Command::Unrecognized,
        }
    }
}
