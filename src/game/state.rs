use serde::{Deserialize, Serialize};

use super::board::Board;
use super::history::{Move, MoveHistory};
use super::player::Player;
use super::win::{winning_line_through, WinningLine};
use crate::error::GameError;

/// Where the game stands. Terminal states reject further drops until a
/// move is undone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum GameStatus {
    InProgress,
    Won { winner: Player, line: WinningLine },
    Draw,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Terminal result of a finished game, as handed to the scoreboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// The turn-based match: board, whose turn it is, terminal status, and
/// the undo/redo history.
///
/// Red moves first. After a winning or drawing move the game freezes
/// (`current_player` stays on the mover) until `undo` re-opens it; undoing
/// a terminal move always returns the game to `InProgress`, un-winning or
/// un-drawing as needed.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    status: GameStatus,
    history: MoveHistory,
}

impl GameState {
    /// Create an empty game at the given dimensions (each in 4..=12).
    pub fn new(rows: usize, cols: usize) -> Result<Self, GameError> {
        Ok(GameState {
            board: Board::new(rows, cols)?,
            current_player: Player::Red,
            status: GameStatus::InProgress,
            history: MoveHistory::new(),
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Terminal result, if the game is over.
    pub fn outcome(&self) -> Option<GameOutcome> {
        match &self.status {
            GameStatus::InProgress => None,
            GameStatus::Won { winner, .. } => Some(GameOutcome::Winner(*winner)),
            GameStatus::Draw => Some(GameOutcome::Draw),
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Applied moves in chronological order.
    pub fn moves(&self) -> impl Iterator<Item = &Move> {
        self.history.moves()
    }

    /// Columns that can still take a disc, ascending. Empty once the game
    /// is over.
    pub fn valid_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.valid_columns()
    }

    /// Drop the current player's disc into a column.
    ///
    /// On success the move is recorded (clearing any redo history), win
    /// and draw detection run on the landed cell, and either the status
    /// turns terminal or the turn passes to the other player. On error
    /// nothing changes.
    pub fn apply_drop(&mut self, col: usize) -> Result<(), GameError> {
        self.drop_current(col, false)
    }

    /// Take back the most recent move, whoever made it.
    ///
    /// The mover becomes the current player again, and the game is back
    /// in progress even if the undone move had won or drawn it.
    pub fn undo(&mut self) -> Result<(), GameError> {
        let mv = self.history.undo_last()?;
        self.board.clear(mv.row, mv.col);
        self.current_player = mv.player;
        self.status = GameStatus::InProgress;
        Ok(())
    }

    /// Replay the most recently undone move.
    ///
    /// The move goes back through the full drop pipeline, including win
    /// and draw detection, so redoing a terminal move re-finishes the
    /// game. Unlike a fresh drop it does not clear the redo stack.
    pub fn redo(&mut self) -> Result<(), GameError> {
        let mv = self.history.redo_last()?;
        self.current_player = mv.player;
        self.drop_current(mv.col, true)
    }

    /// Throw away the board, history, and status and start over at the
    /// given dimensions. Fails without touching anything if the
    /// dimensions are out of range.
    pub fn reset(&mut self, rows: usize, cols: usize) -> Result<(), GameError> {
        let board = Board::new(rows, cols)?;
        self.board = board;
        self.current_player = Player::Red;
        self.status = GameStatus::InProgress;
        self.history.clear();
        Ok(())
    }

    /// Shared placement pipeline for fresh drops and redo replays.
    fn drop_current(&mut self, col: usize, replay: bool) -> Result<(), GameError> {
        if self.is_terminal() {
            return Err(GameError::InvalidTurn);
        }
        if col >= self.board.cols() {
            return Err(GameError::InvalidColumn {
                column: col,
                cols: self.board.cols(),
            });
        }
        let row = self
            .board
            .available_row(col)
            .ok_or(GameError::ColumnFull(col))?;

        let player = self.current_player;
        self.board.set(row, col, player.to_cell());

        let mv = Move { row, col, player };
        if replay {
            self.history.record_replayed(mv);
        } else {
            self.history.record(mv);
        }

        if let Some(line) = winning_line_through(&self.board, row, col) {
            self.status = GameStatus::Won {
                winner: player,
                line,
            };
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
        } else {
            self.current_player = player.other();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::Cell;

    fn new_game() -> GameState {
        GameState::new(6, 7).unwrap()
    }

    /// Red stacks column 3 while Yellow answers in column 0.
    fn play_vertical_red_win(state: &mut GameState) {
        for _ in 0..3 {
            state.apply_drop(3).unwrap(); // Red
            state.apply_drop(0).unwrap(); // Yellow
        }
        state.apply_drop(3).unwrap(); // Red's 4th, wins
    }

    #[test]
    fn test_initial_state() {
        let state = new_game();
        assert_eq!(state.current_player(), Player::Red);
        assert_eq!(*state.status(), GameStatus::InProgress);
        assert!(!state.can_undo());
        assert!(!state.can_redo());
        assert_eq!(state.valid_columns().len(), 7);
    }

    #[test]
    fn test_drop_alternates_players() {
        let mut state = new_game();
        state.apply_drop(3).unwrap();
        assert_eq!(state.current_player(), Player::Yellow);
        assert_eq!(state.board().get(5, 3), Cell::Red);

        state.apply_drop(3).unwrap();
        assert_eq!(state.current_player(), Player::Red);
        assert_eq!(state.board().get(4, 3), Cell::Yellow);
    }

    #[test]
    fn test_vertical_win_scenario() {
        // 7x6 board: Red drops column 3 four times, Yellow column 0 in
        // between. Red's 4th lands at row 2 and wins rows 2..=5.
        let mut state = new_game();
        play_vertical_red_win(&mut state);

        match state.status() {
            GameStatus::Won { winner, line } => {
                assert_eq!(*winner, Player::Red);
                assert_eq!(line, &vec![(2, 3), (3, 3), (4, 3), (5, 3)]);
            }
            other => panic!("expected Red win, got {other:?}"),
        }
        // Winner stays frozen as current player
        assert_eq!(state.current_player(), Player::Red);
        assert!(state.valid_columns().is_empty());
    }

    #[test]
    fn test_terminal_rejects_drops() {
        let mut state = new_game();
        play_vertical_red_win(&mut state);
        let before = state.clone();
        assert_eq!(state.apply_drop(5), Err(GameError::InvalidTurn));
        assert_eq!(state, before);
    }

    #[test]
    fn test_column_full_leaves_state_unchanged() {
        let mut state = new_game();
        for _ in 0..6 {
            state.apply_drop(2).unwrap();
        }
        let before = state.clone();
        assert_eq!(state.apply_drop(2), Err(GameError::ColumnFull(2)));
        assert_eq!(state, before);
    }

    #[test]
    fn test_invalid_column_rejected() {
        let mut state = new_game();
        assert_eq!(
            state.apply_drop(7),
            Err(GameError::InvalidColumn { column: 7, cols: 7 })
        );
    }

    #[test]
    fn test_undo_restores_mover_and_cell() {
        let mut state = new_game();
        state.apply_drop(3).unwrap(); // Red
        state.apply_drop(4).unwrap(); // Yellow

        state.undo().unwrap();
        assert_eq!(state.board().get(5, 4), Cell::Empty);
        assert_eq!(state.current_player(), Player::Yellow);

        state.undo().unwrap();
        assert_eq!(state.board().get(5, 3), Cell::Empty);
        assert_eq!(state.current_player(), Player::Red);

        assert_eq!(state.undo(), Err(GameError::EmptyHistory));
    }

    #[test]
    fn test_undo_unwins_the_game() {
        let mut state = new_game();
        play_vertical_red_win(&mut state);
        assert!(state.is_terminal());

        state.undo().unwrap();
        assert_eq!(*state.status(), GameStatus::InProgress);
        assert_eq!(state.current_player(), Player::Red);
        assert_eq!(state.board().get(2, 3), Cell::Empty);
    }

    #[test]
    fn test_undo_undraws_the_game() {
        // 4x4 board filled column by column in a 2-2 pattern that never
        // lines up 4: cols 0/1 get RYRY, cols 2/3 get YRYR.
        let mut state = GameState::new(4, 4).unwrap();
        let drops = [0, 0, 0, 0, 1, 1, 1, 1, 3, 2, 2, 3, 2, 3, 3, 2];
        for col in drops {
            state.apply_drop(col).unwrap();
        }
        assert_eq!(*state.status(), GameStatus::Draw);

        state.undo().unwrap();
        assert_eq!(*state.status(), GameStatus::InProgress);
        assert!(!state.board().is_full());
    }

    #[test]
    fn test_undo_round_trip_to_empty_board() {
        let mut state = new_game();
        for col in [3, 3, 0, 1, 6, 2, 5, 4] {
            state.apply_drop(col).unwrap();
        }
        while state.can_undo() {
            state.undo().unwrap();
        }

        let fresh = new_game();
        assert_eq!(state.board(), fresh.board());
        assert_eq!(state.current_player(), Player::Red);
        assert_eq!(*state.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_history_replay_reproduces_board() {
        let mut state = new_game();
        for col in [3, 2, 3, 3, 0, 6, 1, 1] {
            state.apply_drop(col).unwrap();
        }

        let mut replay = new_game();
        for mv in state.moves() {
            assert_eq!(replay.current_player(), mv.player);
            replay.apply_drop(mv.col).unwrap();
        }
        assert_eq!(replay.board(), state.board());
    }

    #[test]
    fn test_redo_restores_pre_undo_state() {
        let mut state = new_game();
        play_vertical_red_win(&mut state);
        let won = state.clone();

        state.undo().unwrap();
        state.redo().unwrap();
        assert_eq!(state.board(), won.board());
        assert_eq!(state.status(), won.status());
        assert_eq!(state.current_player(), won.current_player());
    }

    #[test]
    fn test_fresh_drop_clears_redo_but_redo_does_not() {
        let mut state = new_game();
        state.apply_drop(3).unwrap();
        state.apply_drop(4).unwrap();
        state.undo().unwrap();
        state.undo().unwrap();
        assert!(state.can_redo());

        // One redo keeps the rest of the redo stack
        state.redo().unwrap();
        assert!(state.can_redo());

        // A fresh drop throws the rest away
        state.apply_drop(6).unwrap();
        assert!(!state.can_redo());
    }

    #[test]
    fn test_redo_chain_replays_in_order() {
        let mut state = new_game();
        for col in [3, 0, 3, 0] {
            state.apply_drop(col).unwrap();
        }
        let played = state.clone();
        for _ in 0..4 {
            state.undo().unwrap();
        }
        for _ in 0..4 {
            state.redo().unwrap();
        }
        assert_eq!(state.board(), played.board());
        assert_eq!(state.current_player(), played.current_player());
        assert_eq!(state.redo(), Err(GameError::EmptyHistory));
    }

    #[test]
    fn test_reset_validates_dimensions_atomically() {
        let mut state = new_game();
        state.reset(5, 9).unwrap();
        assert_eq!(state.board().rows(), 5);
        assert_eq!(state.board().cols(), 9);

        state.apply_drop(4).unwrap();
        assert_eq!(
            state.reset(13, 9),
            Err(GameError::InvalidDimensions { rows: 13, cols: 9 })
        );
        // Failed reset leaves the 5x9 game as it was
        assert_eq!(state.board().rows(), 5);
        assert_eq!(state.board().cols(), 9);
        assert_eq!(state.board().get(4, 4), Cell::Red);
        assert!(state.can_undo());
    }

    #[test]
    fn test_reset_discards_history_and_status() {
        let mut state = new_game();
        play_vertical_red_win(&mut state);
        state.reset(6, 7).unwrap();
        assert_eq!(*state.status(), GameStatus::InProgress);
        assert_eq!(state.current_player(), Player::Red);
        assert!(!state.can_undo());
        assert!(!state.can_redo());
    }

    #[test]
    fn test_draw_only_when_full_without_line() {
        let mut state = GameState::new(4, 4).unwrap();
        let drops = [0, 0, 0, 0, 1, 1, 1, 1, 3, 2, 2, 3, 2, 3, 3];
        for col in drops {
            state.apply_drop(col).unwrap();
        }
        // One cell left, no line yet
        assert_eq!(*state.status(), GameStatus::InProgress);
        state.apply_drop(2).unwrap();
        assert_eq!(*state.status(), GameStatus::Draw);
        assert_eq!(state.outcome(), Some(GameOutcome::Draw));
    }

    #[test]
    fn test_status_serializes_with_line() {
        let mut state = new_game();
        play_vertical_red_win(&mut state);
        let json = serde_json::to_string(state.status()).unwrap();
        assert!(json.contains("\"state\":\"won\""), "got {json}");
        assert!(json.contains("\"winner\":\"red\""), "got {json}");
        assert!(json.contains("[2,3]"), "got {json}");
    }
}
