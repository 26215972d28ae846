pub mod notation;
pub mod rules;

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

pub const SIZE: usize = 12;
pub const CELLS: usize = SIZE * SIZE;

/// The eight unit vectors (drow, dcol) a capture can run along.
pub const DIRECTIONS: [(i8, i8); 8] = [
    (0, 1), (1, 0), (0, -1), (-1, 0),
    (1, 1), (1, -1), (-1, 1), (-1, -1),
];

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
pub enum Side {
    X,
    O,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::X => Side::O,
            Side::O => Side::X,
        }
    }

    pub fn to_cell(self) -> Cell {
        match self {
            Side::X => Cell::X,
            Side::O => Cell::O,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Side::X => 'X',
            Side::O => 'O',
        }
    }

    pub fn from_symbol(c: char) -> Option<Side> {
        match c {
            'X' => Some(Side::X),
            'O' => Some(Side::O),
            _ => None,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.symbol()) }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_symbol(c: char) -> Option<Cell> {
        match c {
            '.' => Some(Cell::Empty),
            'X' => Some(Cell::X),
            'O' => Some(Cell::O),
            _ => None,
        }
    }

    pub fn is_empty(self) -> bool { self == Cell::Empty }
}

/// 1-based (row, col) on the 12x12 grid.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord, Serialize)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    /// Panics outside 1..=12; use `Pos::checked` for untrusted coordinates.
    pub fn new(row: u8, col: u8) -> Self {
        assert!(Self::in_bounds(row as i32, col as i32), "position ({row}, {col}) off the board");
        Self { row, col }
    }

    pub fn checked(row: i32, col: i32) -> Option<Self> {
        if Self::in_bounds(row, col) { Some(Self { row: row as u8, col: col as u8 }) } else { None }
    }

    pub fn in_bounds(row: i32, col: i32) -> bool {
        (1..=SIZE as i32).contains(&row) && (1..=SIZE as i32).contains(&col)
    }

    /// Neighbor one step along (dr, dc), if still on the board.
    pub fn step(self, dr: i8, dc: i8) -> Option<Self> {
        Self::checked(self.row as i32 + dr as i32, self.col as i32 + dc as i32)
    }

    fn index(self) -> usize { (self.row as usize - 1) * SIZE + (self.col as usize - 1) }

    /// Every position in row-major order.
    pub fn all() -> impl Iterator<Item = Pos> {
        (1..=SIZE as u8).flat_map(|row| (1..=SIZE as u8).map(move |col| Pos { row, col }))
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", notation::to_token(*self)) }
}

/// Full 12x12 grid. `Copy` so every ply works on its own value.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; CELLS],
}

impl Default for Board {
    fn default() -> Self { Self::empty() }
}

impl Board {
    pub fn empty() -> Self { Self { cells: [Cell::Empty; CELLS] } }

    /// Standard opening cross: X on (6,6) and (7,7), O on (6,7) and (7,6).
    pub fn opening() -> Self {
        let mut b = Self::empty();
        b.set(Pos::new(6, 6), Cell::X);
        b.set(Pos::new(7, 7), Cell::X);
        b.set(Pos::new(6, 7), Cell::O);
        b.set(Pos::new(7, 6), Cell::O);
        b
    }

    pub fn get(&self, pos: Pos) -> Cell { self.cells[pos.index()] }

    pub fn set(&mut self, pos: Pos, cell: Cell) { self.cells[pos.index()] = cell; }

    /// Copy of this board with one cell replaced.
    pub fn with(&self, pos: Pos, cell: Cell) -> Self {
        let mut b = *self;
        b.set(pos, cell);
        b
    }

    pub fn count(&self, side: Side) -> u32 {
        let c = side.to_cell();
        self.cells.iter().filter(|&&x| x == c).count() as u32
    }

    pub fn discs(&self) -> u32 { self.cells.iter().filter(|c| !c.is_empty()).count() as u32 }

    pub fn empties(&self) -> u32 { CELLS as u32 - self.discs() }

    pub fn rows(&self) -> Vec<String> {
        self.cells.chunks(SIZE).map(|r| r.iter().map(|c| c.symbol()).collect()).collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() { writeln!(f, "{row}")?; }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "\n{self}") }
}

impl Serialize for Board {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> { self.rows().serialize(s) }
}

impl FromStr for Board {
    type Err = crate::io::InputError;

    /// Parses exactly 12 non-blank lines of 12 symbols; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        crate::io::parse_rows(&lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pos_all_is_row_major() {
        let v: Vec<Pos> = Pos::all().take(13).collect();
        assert_eq!(v[0], Pos::new(1, 1));
        assert_eq!(v[11], Pos::new(1, 12));
        assert_eq!(v[12], Pos::new(2, 1));
        assert_eq!(Pos::all().count(), CELLS);
    }

    #[test]
    fn step_stops_at_edges() {
        assert_eq!(Pos::new(1, 1).step(-1, 0), None);
        assert_eq!(Pos::new(12, 12).step(0, 1), None);
        assert_eq!(Pos::new(6, 6).step(1, -1), Some(Pos::new(7, 5)));
    }

    #[test]
    fn opening_has_two_discs_each() {
        let b = Board::opening();
        assert_eq!(b.count(Side::X), 2);
        assert_eq!(b.count(Side::O), 2);
        assert_eq!(b.empties(), 140);
    }

    #[test]
    fn text_form_parses_back() {
        let b = Board::opening();
        let parsed: Board = b.to_string().parse().unwrap();
        assert_eq!(parsed, b);
    }
}
