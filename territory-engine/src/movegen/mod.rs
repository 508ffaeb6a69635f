mod ordering;

pub use ordering::{conversion_moves, ordered_moves, MoveScore, RatedMove};
