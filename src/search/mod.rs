pub mod alphabeta;
pub mod depth;
pub mod eval;
pub mod tt;
