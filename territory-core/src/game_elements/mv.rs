use serde::{Deserialize, Serialize};

/// A single cell coordinate, row-major. `row` and `col` are both in
/// `[0, size)` for a board of the given size.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub row: u8,
    pub col: u8,
}

impl Placement {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

/// An atomic move: 1 or 2 placements applied together in one turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub placements: Vec<Placement>,
}

impl Move {
    pub fn single(p: Placement) -> Self {
        Self { placements: vec![p] }
    }

    pub fn double(p1: Placement, p2: Placement) -> Self {
        Self { placements: vec![p1, p2] }
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}
