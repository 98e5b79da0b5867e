use serde::{Deserialize, Serialize};

use super::player::Player;
use crate::error::GameError;

/// One applied drop: where the disc landed and who played it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub player: Player,
}

/// Undo/redo stacks of applied moves.
///
/// The undo stack is chronological; replaying it onto an empty board
/// reproduces the current position exactly. The redo stack holds undone
/// moves in reverse order and is cleared by any fresh (non-replay) move.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveHistory {
    undo: Vec<Move>,
    redo: Vec<Move>,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a fresh move. Invalidates anything previously undone.
    pub fn record(&mut self, mv: Move) {
        self.undo.push(mv);
        self.redo.clear();
    }

    /// Record a move that is being replayed from the redo stack. Unlike
    /// [`record`](Self::record) this leaves the redo stack alone, so a
    /// chain of redos survives.
    pub fn record_replayed(&mut self, mv: Move) {
        self.undo.push(mv);
    }

    /// Pop the most recent move onto the redo stack and return it.
    pub fn undo_last(&mut self) -> Result<Move, GameError> {
        let mv = self.undo.pop().ok_or(GameError::EmptyHistory)?;
        self.redo.push(mv);
        Ok(mv)
    }

    /// Pop the most recently undone move for replay. The caller is
    /// responsible for re-recording it via
    /// [`record_replayed`](Self::record_replayed).
    pub fn redo_last(&mut self) -> Result<Move, GameError> {
        self.redo.pop().ok_or(GameError::EmptyHistory)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn len(&self) -> usize {
        self.undo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.undo.is_empty()
    }

    /// Applied moves in chronological order.
    pub fn moves(&self) -> impl Iterator<Item = &Move> {
        self.undo.iter()
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}
