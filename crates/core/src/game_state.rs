//! Game state module - the session state machine
//!
//! Ties the board, the spawner, and the game-over probe together behind a
//! single `apply_command` entry point. The state machine has three states:
//! Playing, GameOver, and Quit. Quit is terminal.

use crate::board::Board;
use crate::rng::SimpleRng;
use crate::types::{Command, NUM_STARTING_TILES};

/// Session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Playing,
    GameOver,
    Quit,
}

/// What the last command did (consumed by the renderer for the status line)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The move changed the board; a tile was spawned
    Moved,
    /// The move had no effect; the board is untouched
    Rejected,
    /// No direction has any effect; the session entered GameOver
    GameOver,
    /// A fresh board was created
    Restarted,
    /// The session ended
    Quit,
    /// Unrecognized key, or a move while the game is over
    Ignored,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    rng: SimpleRng,
    status: Status,
    last_outcome: Option<Outcome>,
}

impl GameState {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let board = Self::fresh_board(&mut rng);
        Self {
            board,
            rng,
            status: Status::Playing,
            last_outcome: None,
        }
    }

    /// An empty board seeded with the starting tiles
    fn fresh_board(rng: &mut SimpleRng) -> Board {
        let mut board = Board::new();
        for _ in 0..NUM_STARTING_TILES {
            // Cannot fail: the board starts empty with room for the seeds.
            board.spawn_tile(rng);
        }
        board
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Outcome of the most recent command, if any
    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }

    /// Apply one player command and return what it did.
    ///
    /// Moves are only honoured while Playing; an ineffective move is
    /// rejected and leaves the board untouched. After an effective move a
    /// tile spawns and the game-over probe runs. Restart is accepted from
    /// Playing and GameOver alike. Quit is accepted everywhere and is
    /// terminal.
    pub fn apply_command(&mut self, command: Command) -> Outcome {
        let outcome = self.dispatch(command);
        self.last_outcome = Some(outcome);
        outcome
    }

    fn dispatch(&mut self, command: Command) -> Outcome {
        match (command, self.status) {
            (_, Status::Quit) => Outcome::Ignored,
            (Command::Quit, _) => {
                self.status = Status::Quit;
                Outcome::Quit
            }
            (Command::Restart, _) => {
                self.board = Self::fresh_board(&mut self.rng);
                self.status = Status::Playing;
                Outcome::Restarted
            }
            (Command::Move(dir), Status::Playing) => {
                // Evaluated on the attempt, so a board that filled up on the
                // previous spawn is caught here.
                if !self.board.has_moves() {
                    self.status = Status::GameOver;
                    return Outcome::GameOver;
                }

                if !self.board.apply_move(dir) {
                    return Outcome::Rejected;
                }

                self.board.spawn_tile(&mut self.rng);
                if !self.board.has_moves() {
                    self.status = Status::GameOver;
                    return Outcome::GameOver;
                }
                Outcome::Moved
            }
            (Command::Move(_), Status::GameOver) => Outcome::Ignored,
            (Command::Unrecognized, _) => Outcome::Ignored,
        }
    }
}
