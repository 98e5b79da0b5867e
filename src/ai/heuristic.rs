use crate::game::{winning_line_through, Board, GameState, Player};

use super::agent::Agent;

/// The "medium" opponent: takes an immediate win, otherwise blocks the
/// opponent's immediate win, otherwise plays the safest center-most
/// column. Looks ahead exactly one reply, never deeper.
pub struct HeuristicAgent;

impl HeuristicAgent {
    pub fn new() -> Self {
        HeuristicAgent
    }
}

impl Default for HeuristicAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for HeuristicAgent {
    fn choose_column(&mut self, state: &GameState) -> usize {
        let columns = state.valid_columns();
        assert!(!columns.is_empty(), "no open columns to choose from");

        let me = state.current_player();
        let opponent = me.other();
        // All probing happens on this scratch copy; the live board is
        // never touched.
        let mut scratch = state.board().clone();

        // 1) Winning move
        for &col in &columns {
            if would_win(&mut scratch, col, me) {
                return col;
            }
        }

        // 2) Block the opponent's immediate win
        for &col in &columns {
            if would_win(&mut scratch, col, opponent) {
                return col;
            }
        }

        // 3) Center-most column that doesn't hand the opponent an
        // immediate winning reply
        let safe: Vec<usize> = columns
            .iter()
            .copied()
            .filter(|&col| !gives_opponent_immediate_win(&mut scratch, col, me))
            .collect();
        if let Some(&col) = center_preferred(safe, scratch.cols()).first() {
            return col;
        }
        center_preferred(columns, scratch.cols())[0]
    }

    fn name(&self) -> &str {
        "Heuristic"
    }
}

/// Would dropping `player`'s disc in `col` win on the spot? Places the
/// disc, checks, and reverts the single touched cell.
fn would_win(scratch: &mut Board, col: usize, player: Player) -> bool {
    let Some(row) = scratch.available_row(col) else {
        return false;
    };
    scratch.set(row, col, player.to_cell());
    let wins = winning_line_through(scratch, row, col).is_some();
    scratch.clear(row, col);
    wins
}

/// After `player` drops in `col`, does the opponent have an immediate
/// winning reply anywhere?
fn gives_opponent_immediate_win(scratch: &mut Board, col: usize, player: Player) -> bool {
    let Some(row) = scratch.available_row(col) else {
        return false;
    };
    scratch.set(row, col, player.to_cell());
    let opponent = player.other();
    let opponent_wins = scratch
        .valid_columns()
        .into_iter()
        .any(|c| would_win(scratch, c, opponent));
    scratch.clear(row, col);
    opponent_wins
}

/// Sort columns by distance to the board's horizontal center, ties
/// toward the lower index.
fn center_preferred(mut columns: Vec<usize>, board_cols: usize) -> Vec<usize> {
    let center = (board_cols - 1) as f64 / 2.0;
    columns.sort_by(|a, b| {
        let da = (*a as f64 - center).abs();
        let db = (*b as f64 - center).abs();
        da.total_cmp(&db)
    });
    columns
}
