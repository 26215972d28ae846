use crate::board::rules::{apply_move, has_legal_move, legal_moves};
use crate::board::{notation, Board, Pos, Side};
use crate::search::alphabeta::{Searcher, SearchParams};
use anyhow::{Context, Result};
use log::debug;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

pub const PASS: &str = "pass";

#[derive(Clone, Debug)]
pub struct SelfPlayParams {
    pub games: usize,
    pub max_plies: usize,
    pub threads: usize,
    pub depth: u32,
    pub seed: u64,
    pub random_plies: usize,      // both sides play uniformly random for the first N plies
    pub random_opponent: bool,    // O plays random for the whole game
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub moves: Vec<String>,
    pub x_discs: u32,
    pub o_discs: u32,
    pub result: i8, // 1 X wins, 0 draw, -1 O wins
}

/// Plays `params.games` games from the opening cross, X first, on `params.threads` threads.
pub fn generate_games(params: &SelfPlayParams) -> Result<Vec<GameRecord>> {
    generate_games_with(params, |_| {})
}

/// `generate_games`, calling `on_game` as each game finishes.
pub fn generate_games_with<F>(params: &SelfPlayParams, on_game: F) -> Result<Vec<GameRecord>>
where
    F: Fn(&GameRecord) + Sync,
{
    let pool = rayon::ThreadPoolBuilder::new().num_threads(params.threads.max(1)).build().context("thread pool")?;
    Ok(pool.install(|| {
        (0..params.games).into_par_iter().map(|gi| {
            let g = play_game(params, gi);
            on_game(&g);
            g
        }).collect()
    }))
}

pub fn play_game(params: &SelfPlayParams, game_index: usize) -> GameRecord {
    let mut rng = SmallRng::seed_from_u64(params.seed ^ (game_index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    let mut board = Board::opening();
    let mut side = Side::X;
    let mut moves = Vec::new();
    while moves.len() < params.max_plies {
        let legal = legal_moves(&board, side);
        if legal.is_empty() {
            if !has_legal_move(&board, side.opponent()) { break; }
            moves.push(PASS.to_string());
            side = side.opponent();
            continue;
        }
        let random = moves.len() < params.random_plies || (params.random_opponent && side == Side::O);
        let pick = if random { Some(legal[rng.gen_range(0..legal.len())]) } else { select_engine_move(&board, side, params.depth) };
        let Some(m) = pick else { break };
        board = apply_move(&board, Some(m), side);
        moves.push(notation::to_token(m));
        side = side.opponent();
    }
    let (x, o) = (board.count(Side::X), board.count(Side::O));
    debug!("game {} finished after {} plies: X {} O {}", game_index, moves.len(), x, o);
    GameRecord { moves, x_discs: x, o_discs: o, result: (x as i64 - o as i64).signum() as i8 }
}

// Fresh searcher per decision so the memo never outlives one move.
fn select_engine_move(board: &Board, side: Side, depth: u32) -> Option<Pos> {
    let mut s = Searcher::new(SearchParams { depth, ..SearchParams::default() });
    s.search_depth(board, side, depth).bestmove
}

/// Replays a record's tokens from the opening and returns the final board.
pub fn replay(record: &GameRecord) -> Result<Board> {
    let mut board = Board::opening();
    let mut side = Side::X;
    for tok in &record.moves {
        let mv = if tok == PASS { None } else { Some(notation::parse_token(tok)?) };
        board = crate::board::rules::try_apply_move(&board, mv, side)?;
        side = side.opponent();
    }
    Ok(board)
}

pub fn write_jsonl<P: AsRef<Path>>(games: &[GameRecord], path: P) -> Result<()> {
    let path = path.as_ref();
    let f = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut w = BufWriter::new(f);
    for g in games {
        serde_json::to_writer(&mut w, g)?;
        w.write_all(b"\n")?;
    }
    w.flush()?;
    Ok(())
}

pub fn read_jsonl<P: AsRef<Path>>(path: P) -> Result<Vec<GameRecord>> {
    let path = path.as_ref();
    let f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let mut out = Vec::new();
    for (i, line) in BufReader::new(f).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        out.push(serde_json::from_str(&line).with_context(|| format!("{}:{}", path.display(), i + 1))?);
    }
    Ok(out)
}
