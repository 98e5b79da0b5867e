use super::board::{Board, Cell};

/// Cells of a completed line, as (row, col) pairs ordered along the axis.
/// Always at least 4 long and always contains the cell that triggered the
/// check; longer runs are returned whole.
pub type WinningLine = Vec<(usize, usize)>;

/// Axis directions checked, in fixed order: horizontal, vertical,
/// diagonal ↘, diagonal ↙.
const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Find the line of 4+ same-color cells completed by the disc at
/// (row, col), if any.
///
/// Walks outward from the given cell in both senses of each axis,
/// collecting contiguous same-color cells, and returns the first axis
/// that reaches length 4. Only the just-placed cell needs checking, so
/// this is O(board extent) per move rather than a full-board scan; call
/// it once, immediately after each placement.
pub fn winning_line_through(board: &Board, row: usize, col: usize) -> Option<WinningLine> {
    let color = board.get(row, col);
    if color == Cell::Empty {
        return None;
    }

    for (dr, dc) in DIRECTIONS {
        // Cells behind the trigger, collected outward then reversed so the
        // final line reads front-to-back along (dr, dc).
        let mut line = collect(board, color, row, col, -dr, -dc);
        line.reverse();
        line.push((row, col));
        line.extend(collect(board, color, row, col, dr, dc));

        if line.len() >= 4 {
            return Some(line);
        }
    }
    None
}

/// Contiguous same-color cells strictly beyond (row, col) in direction
/// (dr, dc), nearest first.
fn collect(board: &Board, color: Cell, row: usize, col: usize, dr: i32, dc: i32) -> Vec<(usize, usize)> {
    let mut cells = Vec::new();
    let mut r = row as i32 + dr;
    let mut c = col as i32 + dc;
    while r >= 0
        && r < board.rows() as i32
        && c >= 0
        && c < board.cols() as i32
        && board.get(r as usize, c as usize) == color
    {
        cells.push((r as usize, c as usize));
        r += dr;
        c += dc;
    }
    cells
}
