use crate::board::rules::{apply_move, legal_moves};
use crate::board::{Board, Pos, Side};
use crate::search::depth::depth_for_time;
use crate::search::eval::{evaluate, INFINITY, NEG_INFINITY};
use crate::search::tt::{Memo, MemoKey};
use log::{debug, info, trace};
use serde::Serialize;
use std::time::Instant;

/// Whose moves are generated below the root.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TurnRule {
    /// Every ply expands the mover's own placements; only the maximizing flag alternates.
    #[default]
    MoverOnly,
    /// Minimizing plies expand the opponent's placements.
    Alternating,
}

#[derive(Debug, Clone, Copy)]
pub struct SearchParams {
    pub depth: u32,
    pub use_memo: bool,
    pub memo_key: MemoKey,
    pub use_pruning: bool,
    pub turn_rule: TurnRule,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self { depth: 1, use_memo: true, memo_key: MemoKey::BoardOnly, use_pruning: true, turn_rule: TurnRule::MoverOnly }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    pub side: Side,
    pub bestmove: Option<Pos>,
    /// `None` when the mover had no legal placement.
    pub score: Option<i32>,
    /// Position after `bestmove`; the input position when there is none.
    pub board: Board,
    pub depth: u32,
    pub nodes: u64,
    pub memo_entries: usize,
}

pub struct Searcher {
    memo: Memo,
    params: SearchParams,
    pub(crate) nodes: u64,
}

impl Default for Searcher {
    fn default() -> Self { Self::new(SearchParams::default()) }
}

impl Searcher {
    pub fn new(params: SearchParams) -> Self {
        Self { memo: Memo::new(params.memo_key), params, nodes: 0 }
    }

    pub fn params(&self) -> SearchParams { self.params }

    pub fn nodes(&self) -> u64 { self.nodes }

    pub fn memo(&self) -> &Memo { &self.memo }

    pub fn clear_memo(&mut self) { self.memo.clear(); }

    fn side_to_move(&self, mover: Side, maximizing: bool) -> Side {
        match self.params.turn_rule {
            TurnRule::MoverOnly => mover,
            TurnRule::Alternating => if maximizing { mover } else { mover.opponent() },
        }
    }

    /// Full-window value of `board` with `ply` plies left.
    pub fn minimax_value(&mut self, board: &Board, mover: Side, maximizing: bool, ply: u32) -> i32 {
        self.minimax(board, mover, maximizing, NEG_INFINITY, INFINITY, ply)
    }

    fn minimax(&mut self, board: &Board, mover: Side, maximizing: bool, mut alpha: i32, mut beta: i32, ply: u32) -> i32 {
        self.nodes += 1;
        let to_move = self.side_to_move(mover, maximizing);
        let moves = legal_moves(board, to_move);
        if ply == 0 || moves.is_empty() { return evaluate(board, mover); }

        if self.params.use_memo {
            if let Some(v) = self.memo.get(board, ply, maximizing) { return v; }
        }

        let mut best = if maximizing { NEG_INFINITY } else { INFINITY };
        for m in moves {
            let child = apply_move(board, Some(m), to_move);
            let score = self.minimax(&child, mover, !maximizing, alpha, beta, ply - 1);
            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if self.params.use_pruning && beta <= alpha { break; }
        }
        if self.params.use_memo { self.memo.put(board, ply, maximizing, best); }
        best
    }

    /// Scores every root placement of `mover` and keeps the first strictly best one.
    ///
    /// Each child is searched with the full window and the full `depth`; the memo
    /// carries over between root moves.
    pub fn search_depth(&mut self, board: &Board, mover: Side, depth: u32) -> SearchResult {
        self.nodes = 0;
        let child_maximizing = self.params.turn_rule == TurnRule::MoverOnly;
        let mut best: Option<(Pos, i32)> = None;
        for m in legal_moves(board, mover) {
            let child = apply_move(board, Some(m), mover);
            let score = self.minimax(&child, mover, child_maximizing, NEG_INFINITY, INFINITY, depth);
            debug!("root {} score {}", m, score);
            if best.map_or(true, |(_, bs)| score > bs) { best = Some((m, score)); }
        }
        let bestmove = best.map(|(m, _)| m);
        SearchResult {
            side: mover,
            bestmove,
            score: best.map(|(_, s)| s),
            board: apply_move(board, bestmove, mover),
            depth,
            nodes: self.nodes,
            memo_entries: self.memo.len(),
        }
    }

    pub fn search_with_params(&mut self, board: &Board, mover: Side, params: SearchParams) -> SearchResult {
        if params.memo_key != self.memo.mode() || !params.use_memo { self.memo = Memo::new(params.memo_key); }
        self.params = params;
        self.search_depth(board, mover, params.depth)
    }

    /// One decision: the ply limit comes from `remaining` seconds and is never revised.
    pub fn choose_move(&mut self, board: &Board, mover: Side, remaining: f64) -> SearchResult {
        let depth = depth_for_time(remaining);
        info!("side {} time {:.3}s depth {}", mover, remaining, depth);
        let t0 = Instant::now();
        let res = self.search_depth(board, mover, depth);
        let dt = t0.elapsed();
        match (res.bestmove, res.score) {
            (Some(m), Some(s)) => info!("bestmove {} score {} nodes {} memo {} elapsed {:.3}s", m, s, res.nodes, res.memo_entries, dt.as_secs_f64()),
            _ => info!("no legal move for {}; passing", mover),
        }
        trace!("resulting board:{:?}", res.board);
        res
    }
}
