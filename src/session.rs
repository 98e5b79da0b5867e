//! The library boundary: one [`GameSession`] owns the settings, the game
//! state machine, the scoreboard, and the AI opponent, and exposes the
//! drop/undo/redo/reset operations as snapshot-returning calls.

use serde::Serialize;

use crate::ai::{agent_for, Agent};
use crate::config::GameSettings;
use crate::error::GameError;
use crate::game::{Cell, GameState, GameStatus, Player};
use crate::score::{MatchKey, ScoreEntry, Scoreboard};

/// Everything a caller needs to render the game and enable or disable
/// its undo/redo controls.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub rows: usize,
    pub cols: usize,
    /// Full grid, top row first.
    pub grid: Vec<Vec<Cell>>,
    pub current_player: Player,
    pub status: GameStatus,
    pub can_undo: bool,
    pub can_redo: bool,
}

/// A running match plus its surrounding book-keeping.
///
/// All operations are synchronous and atomic: they either fully apply
/// and return the new snapshot, or reject with a [`GameError`] leaving
/// everything untouched. The session is single-writer; callers that
/// share it across threads wrap it in their own mutex.
pub struct GameSession {
    settings: GameSettings,
    state: GameState,
    scores: Scoreboard,
    agent: Box<dyn Agent>,
}

impl GameSession {
    /// Start a session. Settings are sanitized first (dimensions clamped
    /// into range, blank names filled in), so construction cannot fail.
    pub fn new(settings: GameSettings) -> Self {
        Self::with_scores(settings, Scoreboard::new())
    }

    /// Start a session with a scoreboard restored from host persistence.
    pub fn with_scores(settings: GameSettings, scores: Scoreboard) -> Self {
        let settings = settings.normalized();
        let state = GameState::new(settings.rows, settings.cols)
            .expect("normalized dimensions are in range");
        let agent = agent_for(settings.difficulty);
        GameSession {
            settings,
            state,
            scores,
            agent,
        }
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scores
    }

    /// Whether the side to move is controlled by a human.
    pub fn is_human_turn(&self) -> bool {
        match self.settings.ai_side() {
            None => true,
            Some(side) => self.state.current_player() != side,
        }
    }

    /// Scoreboard key for the current matchup.
    pub fn match_key(&self) -> MatchKey {
        MatchKey {
            rows: self.state.board().rows(),
            cols: self.state.board().cols(),
            red_name: self.settings.red_name.clone(),
            yellow_name: self.settings.yellow_name.clone(),
        }
    }

    /// Current state of the board and controls.
    pub fn snapshot(&self) -> Snapshot {
        let board = self.state.board();
        Snapshot {
            rows: board.rows(),
            cols: board.cols(),
            grid: board.grid(),
            current_player: self.state.current_player(),
            status: self.state.status().clone(),
            can_undo: self.state.can_undo(),
            can_redo: self.state.can_redo(),
        }
    }

    /// Drop a disc for whichever side is to move. Records the result on
    /// the scoreboard if the move finishes the game.
    pub fn apply_drop(&mut self, col: usize) -> Result<Snapshot, GameError> {
        self.state.apply_drop(col)?;
        self.record_if_finished();
        Ok(self.snapshot())
    }

    /// Drop a disc on behalf of the human player. Rejected with
    /// [`GameError::InvalidTurn`] when it is the AI's move.
    pub fn human_drop(&mut self, col: usize) -> Result<Snapshot, GameError> {
        if !self.is_human_turn() {
            return Err(GameError::InvalidTurn);
        }
        self.apply_drop(col)
    }

    /// Ask the AI which column it would play for the side to move. Pure
    /// query: the game is left exactly as it was.
    pub fn ai_choose_column(&mut self) -> Result<usize, GameError> {
        if self.state.is_terminal() {
            return Err(GameError::InvalidTurn);
        }
        Ok(self.agent.choose_column(&self.state))
    }

    /// Let the AI take its turn: choose a column and drop. Rejected when
    /// it is not the AI's move.
    pub fn ai_move(&mut self) -> Result<(usize, Snapshot), GameError> {
        if self.is_human_turn() || self.state.is_terminal() {
            return Err(GameError::InvalidTurn);
        }
        let col = self.agent.choose_column(&self.state);
        let snapshot = self.apply_drop(col)?;
        Ok((col, snapshot))
    }

    /// Take back the most recent move, terminal or not.
    pub fn undo(&mut self) -> Result<Snapshot, GameError> {
        self.state.undo()?;
        Ok(self.snapshot())
    }

    /// Replay the most recently undone move through the full drop
    /// pipeline. A replayed winning or drawing move records its result
    /// on the scoreboard again, exactly like the first time.
    pub fn redo(&mut self) -> Result<Snapshot, GameError> {
        self.state.redo()?;
        self.record_if_finished();
        Ok(self.snapshot())
    }

    /// Start over at new dimensions. Fails with
    /// [`GameError::InvalidDimensions`] leaving the session untouched.
    pub fn reset(&mut self, rows: usize, cols: usize) -> Result<Snapshot, GameError> {
        self.state.reset(rows, cols)?;
        self.settings.rows = rows;
        self.settings.cols = cols;
        Ok(self.snapshot())
    }

    /// Start over at the current dimensions. The scoreboard survives.
    pub fn new_game(&mut self) -> Snapshot {
        self.state
            .reset(self.settings.rows, self.settings.cols)
            .expect("current dimensions are in range");
        self.snapshot()
    }

    /// Swap in new settings and start a fresh game at their dimensions,
    /// with the matching AI opponent. The scoreboard survives.
    pub fn apply_settings(&mut self, settings: GameSettings) -> Snapshot {
        self.settings = settings.normalized();
        self.agent = agent_for(self.settings.difficulty);
        self.new_game()
    }

    /// Tallies for the current matchup (zeroed on first access).
    pub fn score(&mut self) -> ScoreEntry {
        let key = self.match_key();
        self.scores.entry(&key).clone()
    }

    /// Zero the tallies for the current matchup.
    pub fn reset_score(&mut self) {
        let key = self.match_key();
        self.scores.reset_current(&key);
    }

    fn record_if_finished(&mut self) {
        if let Some(outcome) = self.state.outcome() {
            let key = self.match_key();
            self.scores.record_result(&key, outcome);
        }
    }
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("settings", &self.settings)
            .field("state", &self.state)
            .field("scores", &self.scores)
            .field("agent", &self.agent.name())
            .finish()
    }
}
