use territory_core::Move;

use crate::evaluation::Evaluation;

/// Whether a stored score is exact or a bound, per spec.md 4.5 step 6.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NodeType {
    Exact,
    Alpha, // upper bound
    Beta,  // lower bound
}

#[derive(Clone)]
pub struct TTEntry {
    pub zobrist: u64,
    pub depth: u8,
    pub score: Evaluation,
    pub node_type: NodeType,
    pub best_move: Option<Move>,
}

impl TTEntry {
    pub fn new(zobrist: u64, depth: u8, score: Evaluation, node_type: NodeType, best_move: Option<Move>) -> Self {
        Self { zobrist, depth, score, node_type, best_move }
    }
}
