//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and state management.
//! It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, headless)
//! - **Fast**: Zero-allocation hot paths for move processing
//!
//! # Module Structure
//!
//! - [`line`]: the shift/combine/shift transform on a single row or column
//! - [`board`]: 4x4 board with move application, spawning, and the
//!   four-direction game-over probe
//! - [`game_state`]: session state machine (Playing / GameOver / Quit)
//! - [`rng`]: seeded LCG for deterministic tile spawning
//!
//! # Game Rules
//!
//! A move shifts every row or column toward one edge, merges equal adjacent
//! tiles once, and closes the gaps. A move that changes nothing is rejected.
//! After every effective move one new tile spawns on a random empty cell:
//! a 2 with 90% probability, a 4 with 10%. The game is over when no direction
//! would change the board.
//!
//! # Example
//!
//! ```
//! use tui_2048_core::GameState;
//! use tui_2048_types::{Command, Direction, NUM_STARTING_TILES};
//!
//! let mut game = GameState::new(12345);
//! assert_eq!(game.board().tile_count(), NUM_STARTING_TILES);
//!
//! game.apply_command(Command::Move(Direction::Left));
//! ```

pub mod board;
pub mod game_state;
pub mod line;
pub mod rng;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{GameState, Outcome, Status};
pub use line::{combine_start, shift_combine_shift, shift_start};
pub use rng::SimpleRng;
