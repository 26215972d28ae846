mod common;

use reversi12::perft::perft;
use reversi12::{Board, Side};

#[test]
fn perft_opening_small_depths() {
    let b = Board::opening();
    assert_eq!(perft(&b, Side::X, 1), 4);
    assert_eq!(perft(&b, Side::X, 2), 12);
    assert_eq!(perft(&b, Side::X, 3), 56);
}

#[test]
fn perft_full_board_is_a_single_leaf() {
    let b = common::full_board();
    assert_eq!(perft(&b, Side::X, 3), 1);
}
