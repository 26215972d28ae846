// 12x12 Reversi move picker: legality engine + memoized alpha-beta search
pub mod board;
pub mod io;
pub mod perft;
pub mod search;
pub mod selfplay;

pub use board::{Board, Cell, Pos, Side};
pub use search::alphabeta::{SearchParams, SearchResult, Searcher, TurnRule};
pub use search::tt::MemoKey;
