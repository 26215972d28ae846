use crate::board::Board;
use std::collections::HashMap;

/// What a memo entry is keyed by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MemoKey {
    /// Board content only. A value stored at one depth or perspective is
    /// returned for the same board reached at any other.
    #[default]
    BoardOnly,
    /// Board content plus remaining plies and the maximizing flag.
    DepthAware,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct Key {
    board: Board,
    ply: u32,
    maximizing: bool,
}

/// Board -> search value cache. Never evicts.
#[derive(Debug, Default)]
pub struct Memo {
    mode: MemoKey,
    map: HashMap<Key, i32>,
    hits: u64,
}

impl Memo {
    pub fn new(mode: MemoKey) -> Self { Self { mode, map: HashMap::new(), hits: 0 } }

    pub fn mode(&self) -> MemoKey { self.mode }

    fn key(&self, board: &Board, ply: u32, maximizing: bool) -> Key {
        match self.mode {
            MemoKey::BoardOnly => Key { board: *board, ply: 0, maximizing: false },
            MemoKey::DepthAware => Key { board: *board, ply, maximizing },
        }
    }

    pub fn get(&mut self, board: &Board, ply: u32, maximizing: bool) -> Option<i32> {
        let v = self.map.get(&self.key(board, ply, maximizing)).copied();
        if v.is_some() { self.hits += 1; }
        v
    }

    pub fn put(&mut self, board: &Board, ply: u32, maximizing: bool, score: i32) {
        let k = self.key(board, ply, maximizing);
        self.map.insert(k, score);
    }

    pub fn len(&self) -> usize { self.map.len() }

    pub fn is_empty(&self) -> bool { self.map.is_empty() }

    pub fn hits(&self) -> u64 { self.hits }

    pub fn clear(&mut self) {
        self.map.clear();
        self.hits = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_only_ignores_depth_and_perspective() {
        let b = Board::opening();
        let mut m = Memo::new(MemoKey::BoardOnly);
        m.put(&b, 3, true, 7);
        assert_eq!(m.get(&b, 1, false), Some(7));
        assert_eq!(m.hits(), 1);
    }

    #[test]
    fn depth_aware_separates_entries() {
        let b = Board::opening();
        let mut m = Memo::new(MemoKey::DepthAware);
        m.put(&b, 3, true, 7);
        m.put(&b, 3, false, -2);
        assert_eq!(m.get(&b, 1, false), None);
        assert_eq!(m.get(&b, 3, true), Some(7));
        assert_eq!(m.get(&b, 3, false), Some(-2));
        assert_eq!(m.len(), 2);
    }

    #[test]
    fn later_put_overwrites() {
        let b = Board::opening();
        let mut m = Memo::default();
        m.put(&b, 2, true, 1);
        m.put(&b, 0, false, 9);
        assert_eq!(m.len(), 1);
        assert_eq!(m.get(&b, 5, true), Some(9));
        m.clear();
        assert!(m.is_empty());
    }
}
