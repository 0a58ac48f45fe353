//! Board module - manages the game grid
//!
//! The board is a 4x4 grid where each cell holds a tile value or 0 for empty.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..3 (left to right), y ranges 0..3
//! (top to bottom).
//!
//! Rows and columns are extracted as value copies, transformed by the line
//! module, and written back. Keeping the line accessors explicit avoids
//! aliasing when the game-over probe clones the board.

use arrayvec::ArrayVec;

use crate::line::shift_combine_shift;
use crate::rng::SimpleRng;
use crate::types::{Cell, Direction, BOARD_CELLS, BOARD_SIZE, FOUR_SPAWN_PERCENT};

/// The game board - 4 columns x 4 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * BOARD_SIZE + x)
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [0; BOARD_CELLS],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: usize, y: usize) -> Option<usize> {
        if x >= BOARD_SIZE || y >= BOARD_SIZE {
            return None;
        }
        Some(y * BOARD_SIZE + x)
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy row `y` out of the board
    pub fn row(&self, y: usize) -> [Cell; BOARD_SIZE] {
        let mut out = [0; BOARD_SIZE];
        for (x, cell) in out.iter_mut().enumerate() {
            *cell = self.cells[y * BOARD_SIZE + x];
        }
        out
    }

    /// Write `line` back into row `y`
    pub fn set_row(&mut self, y: usize, line: [Cell; BOARD_SIZE]) {
        self.cells[y * BOARD_SIZE..(y + 1) * BOARD_SIZE].copy_from_slice(&line);
    }

    /// Copy column `x` out of the board, top to bottom
    pub fn col(&self, x: usize) -> [Cell; BOARD_SIZE] {
        let mut out = [0; BOARD_SIZE];
        for (y, cell) in out.iter_mut().enumerate() {
            *cell = self.cells[y * BOARD_SIZE + x];
        }
        out
    }

    /// Write `line` back into column `x`, top to bottom
    pub fn set_col(&mut self, x: usize, line: [Cell; BOARD_SIZE]) {
        for (y, cell) in line.iter().enumerate() {
            self.cells[y * BOARD_SIZE + x] = *cell;
        }
    }

    /// True if no cell is empty
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != 0)
    }

    /// Number of non-empty cells
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != 0).count()
    }

    /// Flat indices of all empty cells, in board order
    ///
    /// Stack-only; the spawner picks from this set directly instead of
    /// retrying random positions, so it terminates even on a nearly full
    /// board.
    pub fn empty_cells(&self) -> ArrayVec<usize, BOARD_CELLS> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &cell)| cell == 0)
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Apply a move to the whole board, mutating it in place.
    ///
    /// Extracts each line along the direction's axis, runs the
    /// shift/combine/shift transform toward the direction's edge, and writes
    /// back the lines that changed. Returns true if any line changed.
    /// Always succeeds; an ineffective move is a no-op.
    pub fn apply_move(&mut self, dir: Direction) -> bool {
        let toward_start = dir.toward_start();
        let mut effect = false;

        for i in 0..BOARD_SIZE {
            let mut line = if dir.is_vertical() {
                self.col(i)
            } else {
                self.row(i)
            };

            if shift_combine_shift(&mut line, toward_start) {
                if dir.is_vertical() {
                    self.set_col(i, line);
                } else {
                    self.set_row(i, line);
                }
                effect = true;
            }
        }

        effect
    }

    /// Spawn one tile on a random empty cell.
    ///
    /// Picks uniformly among the empty cells and assigns a 2 or, with
    /// `FOUR_SPAWN_PERCENT`% probability, a 4. Returns false without
    /// mutating anything if the board is full.
    pub fn spawn_tile(&mut self, rng: &mut SimpleRng) -> bool {
        let empty = self.empty_cells();
        if empty.is_empty() {
            return false;
        }

        let idx = empty[rng.next_range(empty.len() as u32) as usize];
        let value = if rng.next_range(100) < FOUR_SPAWN_PERCENT {
            4
        } else {
            2
        };
        self.cells[idx] = value;
        true
    }

    /// True if at least one direction would change the board.
    ///
    /// Probes all four directions on independent clones so the real board is
    /// never touched; the game is over exactly when this returns false.
    /// O(4*N^2) per check, which is fine at N=4.
    pub fn has_moves(&self) -> bool {
        Direction::ALL
            .iter()
            .any(|&dir| self.clone().apply_move(dir))
    }

    /// Create from rows for testing
    #[cfg(test)]
    pub fn from_rows(rows: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        let mut board = Self::new();
        for (y, row) in rows.iter().enumerate() {
            board.set_row(y, *row);
        }
        board
    }

    /// Convert to rows for testing/display
    #[cfg(test)]
    pub fn to_rows(&self) -> [[Cell; BOARD_SIZE]; BOARD_SIZE] {
        let mut rows = [[0; BOARD_SIZE]; BOARD_SIZE];
        for (y, row) in rows.iter_mut().enumerate() {
            *row = self.row(y);
        }
        rows
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
