// Placement legality and capture flipping.
use super::{Board, Pos, Side, DIRECTIONS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("illegal move for {side}: {pos}")]
pub struct IllegalMove {
    pub pos: Pos,
    pub side: Side,
}

/// True if a run of `mover.opponent()` discs starting next to `pos` along (dr, dc)
/// is closed by a `mover` disc before any empty cell or the edge.
pub fn flanks(board: &Board, mover: Side, pos: Pos, dr: i8, dc: i8) -> bool {
    let own = mover.to_cell();
    let opp = mover.opponent().to_cell();
    let mut cur = match pos.step(dr, dc) {
        Some(p) if board.get(p) == opp => p,
        _ => return false,
    };
    loop {
        cur = match cur.step(dr, dc) { Some(p) => p, None => return false };
        let c = board.get(cur);
        if c == own { return true; }
        if c != opp { return false; }
    }
}

pub fn is_legal(board: &Board, mover: Side, pos: Pos) -> bool {
    if !board.get(pos).is_empty() { return false; }
    DIRECTIONS.iter().any(|&(dr, dc)| flanks(board, mover, pos, dr, dc))
}

/// Legal placements for `mover` in row-major order.
pub fn legal_moves(board: &Board, mover: Side) -> Vec<Pos> {
    Pos::all().filter(|&p| is_legal(board, mover, p)).collect()
}

pub fn has_legal_move(board: &Board, mover: Side) -> bool {
    Pos::all().any(|p| is_legal(board, mover, p))
}

/// Board after `mover` plays `mv`. `None` passes and returns the board unchanged.
///
/// The placement is not validated; a cell with no flanking direction just gets the
/// disc. Use `try_apply_move` for untrusted input.
pub fn apply_move(board: &Board, mv: Option<Pos>, mover: Side) -> Board {
    let mut next = *board;
    let Some(pos) = mv else { return next };
    next.set(pos, mover.to_cell());
    let opp = mover.opponent().to_cell();
    for &(dr, dc) in &DIRECTIONS {
        if !flanks(&next, mover, pos, dr, dc) { continue; }
        let mut cur = pos.step(dr, dc);
        while let Some(p) = cur {
            if next.get(p) != opp { break; }
            next.set(p, mover.to_cell());
            cur = p.step(dr, dc);
        }
    }
    next
}

pub fn try_apply_move(board: &Board, mv: Option<Pos>, mover: Side) -> Result<Board, IllegalMove> {
    match mv {
        Some(pos) if !is_legal(board, mover, pos) => Err(IllegalMove { pos, side: mover }),
        _ => Ok(apply_move(board, mv, mover)),
    }
}

/// Cells that would change color if `mover` played `pos`.
pub fn flips(board: &Board, mover: Side, pos: Pos) -> Vec<Pos> {
    let opp = mover.opponent().to_cell();
    let mut out = Vec::new();
    for &(dr, dc) in &DIRECTIONS {
        if !flanks(board, mover, pos, dr, dc) { continue; }
        let mut cur = pos.step(dr, dc);
        while let Some(p) = cur {
            if board.get(p) != opp { break; }
            out.push(p);
            cur = p.step(dr, dc);
        }
    }
    out
}
