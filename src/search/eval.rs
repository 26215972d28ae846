use crate::board::{Board, Pos, Side, DIRECTIONS, SIZE};

pub const CORNER_WEIGHT: i32 = 5;
pub const EDGE_WEIGHT: i32 = 2;
pub const CENTRE_WEIGHT: i32 = 1;
pub const ISOLATION_PENALTY: i32 = -10;

// Search bounds. Symmetric so negation never overflows.
pub const INFINITY: i32 = i32::MAX;
pub const NEG_INFINITY: i32 = -i32::MAX;

pub fn positional_weight(pos: Pos) -> i32 {
    let edge_r = pos.row == 1 || pos.row as usize == SIZE;
    let edge_c = pos.col == 1 || pos.col as usize == SIZE;
    match (edge_r, edge_c) {
        (true, true) => CORNER_WEIGHT,
        (true, false) | (false, true) => EDGE_WEIGHT,
        _ => CENTRE_WEIGHT,
    }
}

/// Any `side` disc among the eight cells around (row, col); off-board cells don't count.
/// (row, col) itself may be off the board.
fn has_neighbor(board: &Board, row: i32, col: i32, side: Side) -> bool {
    let cell = side.to_cell();
    DIRECTIONS.iter().any(|&(dr, dc)| {
        Pos::checked(row + dr as i32, col + dc as i32).is_some_and(|p| board.get(p) == cell)
    })
}

// Isolation is probed around the diagonal neighbor (row+1, col+1), not the cell itself.
fn positional(board: &Board, pos: Pos, side: Side) -> i32 {
    let mut s = positional_weight(pos);
    if !has_neighbor(board, pos.row as i32 + 1, pos.col as i32 + 1, side) { s += ISOLATION_PENALTY; }
    s
}

/// Heuristic score of `board` from `mover`'s side.
///
/// `2 * (positional(mover) - positional(opponent)) + (discs(mover) - discs(opponent))`,
/// where X always carries one extra disc in the count.
pub fn evaluate(board: &Board, mover: Side) -> i32 {
    let opponent = mover.opponent();
    let (own, opp) = (mover.to_cell(), opponent.to_cell());
    let mut own_pos = 0;
    let mut opp_pos = 0;
    for p in Pos::all() {
        let c = board.get(p);
        if c == own { own_pos += positional(board, p, mover); }
        else if c == opp { opp_pos += positional(board, p, opponent); }
    }
    let mut own_count = board.count(mover) as i32;
    let mut opp_count = board.count(opponent) as i32;
    if mover == Side::X { own_count += 1; } else { opp_count += 1; }
    2 * (own_pos - opp_pos) + (own_count - opp_count)
}
