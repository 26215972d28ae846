use crate::board::rules::{apply_move, has_legal_move, legal_moves};
use crate::board::{Board, Side};

// Leaf count of the real game tree: sides alternate, a side without a
// placement passes, and a position where neither side can move is a leaf.
pub fn perft(board: &Board, side: Side, depth: u32) -> u64 {
    if depth == 0 { return 1; }
    let moves = legal_moves(board, side);
    if moves.is_empty() {
        if !has_legal_move(board, side.opponent()) { return 1; }
        return perft(board, side.opponent(), depth - 1);
    }
    let mut nodes = 0u64;
    for m in moves {
        let child = apply_move(board, Some(m), side);
        nodes += perft(&child, side.opponent(), depth - 1);
    }
    nodes
}
