use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Smallest allowed board dimension (rows or columns).
pub const MIN_DIM: usize = 4;
/// Largest allowed board dimension (rows or columns).
pub const MAX_DIM: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

/// The playing grid. Row 0 is the top; gravity pulls discs toward the
/// last row. Cells are stored in a flat row-major array.
///
/// Occupied cells in a column always form an unbroken run from the bottom
/// upward; `set`/`clear` are crate-private so only the game state machine
/// (and AI scratch copies) can touch cells, at the positions that keep
/// that invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board. Each dimension must be in
    /// [`MIN_DIM`]..=[`MAX_DIM`].
    pub fn new(rows: usize, cols: usize) -> Result<Self, GameError> {
        if !(MIN_DIM..=MAX_DIM).contains(&rows) || !(MIN_DIM..=MAX_DIM).contains(&cols) {
            return Err(GameError::InvalidDimensions { rows, cols });
        }
        Ok(Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at a specific position.
    /// Row 0 is the top, row `rows - 1` is the bottom.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * self.cols + col] = cell;
    }

    pub(crate) fn clear(&mut self, row: usize, col: usize) {
        self.cells[row * self.cols + col] = Cell::Empty;
    }

    /// Lowest empty row in a column (where a dropped disc would land),
    /// or `None` if the column is full.
    pub fn available_row(&self, col: usize) -> Option<usize> {
        (0..self.rows).rev().find(|&row| self.get(row, col) == Cell::Empty)
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        self.get(0, col) != Cell::Empty
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| self.is_column_full(col))
    }

    /// Columns that can still take a disc, in ascending order.
    pub fn valid_columns(&self) -> Vec<usize> {
        (0..self.cols)
            .filter(|&col| !self.is_column_full(col))
            .collect()
    }

    /// The full grid as rows of cells, top row first.
    pub fn grid(&self) -> Vec<Vec<Cell>> {
        (0..self.rows)
            .map(|row| (0..self.cols).map(|col| self.get(row, col)).collect())
            .collect()
    }
}
