//! `<column-letter><row-number>` tokens: column 1..12 is `a`..`l`, row is 1-based.
use super::{Pos, SIZE};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    #[error("empty move token")]
    Empty,
    #[error("bad column letter {0:?} (expected a..l)")]
    Column(char),
    #[error("bad row number {0:?} (expected 1..12)")]
    Row(String),
}

pub fn column_letter(col: u8) -> char { (b'a' + col - 1) as char }

pub fn to_token(pos: Pos) -> String { format!("{}{}", column_letter(pos.col), pos.row) }

/// Token for a decision; `None` becomes `pass_token`.
pub fn move_token(mv: Option<Pos>, pass_token: &str) -> String {
    mv.map(to_token).unwrap_or_else(|| pass_token.to_string())
}

pub fn parse_token(s: &str) -> Result<Pos, NotationError> {
    let s = s.trim();
    let mut chars = s.chars();
    let c = chars.next().ok_or(NotationError::Empty)?;
    let col = match c {
        'a'..='l' => c as u8 - b'a' + 1,
        _ => return Err(NotationError::Column(c)),
    };
    let rest = chars.as_str();
    let row: u8 = rest.parse().map_err(|_| NotationError::Row(rest.to_string()))?;
    if row == 0 || row as usize > SIZE { return Err(NotationError::Row(rest.to_string())); }
    Ok(Pos::new(row, col))
}
