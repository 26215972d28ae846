#![allow(dead_code)]
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use reversi12::board::rules::{apply_move, legal_moves};
use reversi12::{Board, Cell, Pos, Side};

/// Positions reached by seeded random play from the opening, with the side to move.
pub fn random_positions(seed: u64, count: usize, max_plies: usize) -> Vec<(Board, Side)> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut out = Vec::with_capacity(count);
    while out.len() < count {
        let mut b = Board::opening();
        let mut side = Side::X;
        let plies = rng.gen_range(0..=max_plies);
        for _ in 0..plies {
            let ms = legal_moves(&b, side);
            if !ms.is_empty() {
                b = apply_move(&b, Some(ms[rng.gen_range(0..ms.len())]), side);
            }
            side = side.opponent();
        }
        out.push((b, side));
    }
    out
}

/// Every cell occupied, in a checkered X/O pattern.
pub fn full_board() -> Board {
    let mut b = Board::empty();
    for p in Pos::all() {
        b.set(p, if (p.row + p.col) % 2 == 0 { Cell::X } else { Cell::O });
    }
    b
}
