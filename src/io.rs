//! Input file parsing and output token writing.
//!
//! Input layout: side symbol on line 1, two space separated time budgets on line 2
//! (own, opponent), then 12 rows of 12 symbols from `X`, `O` and `.`.
use crate::board::{notation, Board, Cell, Pos, Side, SIZE};
use std::fs;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing {0} line")]
    MissingLine(&'static str),
    #[error("bad side symbol {0:?} (expected X or O)")]
    Side(String),
    #[error("bad time line {0:?} (expected two numbers)")]
    Time(String),
    #[error("expected 12 board rows, found {0}")]
    RowCount(usize),
    #[error("row {row}: expected 12 cells, found {len}")]
    RowWidth { row: usize, len: usize },
    #[error("row {row}, column {col}: bad cell {ch:?}")]
    Cell { row: usize, col: usize, ch: char },
}

#[derive(Debug, Clone, Copy)]
pub struct GameInput {
    pub side: Side,
    pub own_time: f64,
    pub opponent_time: f64,
    pub board: Board,
}

pub fn parse_rows(lines: &[&str]) -> Result<Board, InputError> {
    if lines.len() != SIZE { return Err(InputError::RowCount(lines.len())); }
    let mut board = Board::empty();
    for (r, line) in lines.iter().enumerate() {
        let chars: Vec<char> = line.chars().collect();
        if chars.len() != SIZE { return Err(InputError::RowWidth { row: r + 1, len: chars.len() }); }
        for (c, &ch) in chars.iter().enumerate() {
            let cell = Cell::from_symbol(ch).ok_or(InputError::Cell { row: r + 1, col: c + 1, ch })?;
            board.set(Pos::new(r as u8 + 1, c as u8 + 1), cell);
        }
    }
    Ok(board)
}

pub fn parse_input(text: &str) -> Result<GameInput, InputError> {
    let mut lines = text.lines();
    let side_line = lines.next().ok_or(InputError::MissingLine("side"))?.trim();
    let mut sc = side_line.chars();
    let side = match (sc.next().and_then(Side::from_symbol), sc.next()) {
        (Some(s), None) => s,
        _ => return Err(InputError::Side(side_line.to_string())),
    };
    let time_line = lines.next().ok_or(InputError::MissingLine("time"))?.trim();
    let times: Vec<f64> = time_line
        .split_whitespace()
        .map(str::parse)
        .collect::<Result<_, _>>()
        .map_err(|_| InputError::Time(time_line.to_string()))?;
    let [own_time, opponent_time] = times[..] else { return Err(InputError::Time(time_line.to_string())) };
    let rows: Vec<&str> = lines.map(str::trim).filter(|l| !l.is_empty()).collect();
    let board = parse_rows(&rows)?;
    Ok(GameInput { side, own_time, opponent_time, board })
}

pub fn read_input<P: AsRef<Path>>(path: P) -> Result<GameInput, InputError> {
    let text = fs::read_to_string(path)?;
    parse_input(&text)
}

/// Writes the single move token, or `pass_token` when there is no move.
pub fn write_move<P: AsRef<Path>>(path: P, mv: Option<Pos>, pass_token: &str) -> std::io::Result<()> {
    fs::write(path, notation::move_token(mv, pass_token))
}
