use std::fmt;
use std::ops::{Deref, DerefMut};

use super::Mark;
use crate::error::MoveError;

pub const DEFAULT_WIDTH: usize = 7;
pub const DEFAULT_HEIGHT: usize = 6;

/// Number of aligned marks needed to win.
pub const LINE_LENGTH: usize = 4;

/// Directions scanned by `wins_for`, as (row step, column step):
/// horizontal, vertical, "/" diagonal, "\" diagonal.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (-1, 1), (1, 1)];

/// A gravity board of `height` rows by `width` columns.
///
/// Row 0 is the top and row `height - 1` is the bottom. Pieces are only ever
/// added to the lowest empty cell of a column and only ever removed from the
/// topmost occupied cell, so every column is a contiguous stack resting on
/// the bottom row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Mark>,
}

impl Board {
    /// Create an empty board with the given dimensions
    pub fn new(width: usize, height: usize) -> Self {
        Board {
            width,
            height,
            cells: vec![Mark::Empty; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row `height - 1` is the bottom
    pub fn get(&self, row: usize, col: usize) -> Mark {
        self.cells[self.index(row, col)]
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    fn check_column(&self, col: usize) -> Result<(), MoveError> {
        if col >= self.width {
            return Err(MoveError::InvalidColumn {
                column: col,
                width: self.width,
            });
        }
        Ok(())
    }

    /// Empty every cell, keeping the dimensions
    pub fn clear(&mut self) {
        self.cells.fill(Mark::Empty);
    }

    /// True iff `col` is on the board and its top cell is empty.
    /// Out-of-range columns are simply not legal.
    pub fn is_legal_move(&self, col: usize) -> bool {
        col < self.width && self.height > 0 && self.get(0, col) == Mark::Empty
    }

    /// Columns that can still take a piece, left to right
    pub fn legal_moves(&self) -> Vec<usize> {
        (0..self.width)
            .filter(|&col| self.is_legal_move(col))
            .collect()
    }

    /// Drop `mark` into `col`, returns the row where it landed
    pub fn place(&mut self, col: usize, mark: Mark) -> Result<usize, MoveError> {
        self.check_column(col)?;

        // Find the lowest empty row in this column
        for row in (0..self.height).rev() {
            let idx = self.index(row, col);
            if self.cells[idx] == Mark::Empty {
                self.cells[idx] = mark;
                return Ok(row);
            }
        }

        Err(MoveError::ColumnFull(col))
    }

    /// Remove the most recently placed piece in `col`, returns the row it
    /// was removed from
    pub fn unplace(&mut self, col: usize) -> Result<usize, MoveError> {
        self.check_column(col)?;

        // The topmost occupied cell is the latest piece
        for row in 0..self.height {
            let idx = self.index(row, col);
            if self.cells[idx] != Mark::Empty {
                self.cells[idx] = Mark::Empty;
                return Ok(row);
            }
        }

        Err(MoveError::ColumnEmpty(col))
    }

    /// Place `mark` in `col` for as long as the returned guard lives.
    ///
    /// The piece is removed when the guard is dropped, whichever way the
    /// enclosing scope exits. The guard derefs to the board so the placed
    /// position can be inspected and searched further.
    pub fn scoped_place(
        &mut self,
        col: usize,
        mark: Mark,
    ) -> Result<ScopedPlacement<'_>, MoveError> {
        let row = self.place(col, mark)?;
        Ok(ScopedPlacement {
            board: self,
            row,
            col,
        })
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.width).all(|col| !self.is_legal_move(col))
    }

    /// True iff four `mark` cells are aligned anywhere on the board.
    /// Always false for `Mark::Empty`.
    pub fn wins_for(&self, mark: Mark) -> bool {
        if !mark.is_side() {
            return false;
        }

        (0..self.height).any(|row| {
            (0..self.width).any(|col| {
                DIRECTIONS
                    .iter()
                    .any(|&(dr, dc)| self.line_from(row, col, dr, dc, mark))
            })
        })
    }

    /// Check for `LINE_LENGTH` consecutive `mark` cells starting at
    /// (row, col) and stepping by (dr, dc). Every step is bounds-checked.
    fn line_from(&self, row: usize, col: usize, dr: isize, dc: isize, mark: Mark) -> bool {
        (0..LINE_LENGTH as isize).all(|i| {
            let r = row as isize + dr * i;
            let c = col as isize + dc * i;
            r >= 0
                && c >= 0
                && (r as usize) < self.height
                && (c as usize) < self.width
                && self.get(r as usize, c as usize) == mark
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            f.write_str("|")?;
            for col in 0..self.width {
                write!(f, "{}|", self.get(row, col).symbol())?;
            }
            writeln!(f)?;
        }

        writeln!(f, "{}-", "--".repeat(self.width))?;

        for col in 0..self.width {
            write!(f, " {}", col % 10)?;
        }
        writeln!(f)
    }
}

/// A piece placed by [`Board::scoped_place`]; removed again on drop.
pub struct ScopedPlacement<'a> {
    board: &'a mut Board,
    row: usize,
    col: usize,
}

impl Deref for ScopedPlacement<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for ScopedPlacement<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for ScopedPlacement<'_> {
    fn drop(&mut self) {
        // Nested placements are dropped first, so this piece is on top again.
        let idx = self.board.index(self.row, self.col);
        debug_assert!(self.row == 0 || self.board.cells[idx - self.board.width] == Mark::Empty);
        self.board.cells[idx] = Mark::Empty;
    }
}
