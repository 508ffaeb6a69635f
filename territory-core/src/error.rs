use thiserror::Error;

/// Errors surfaced by the board model. `InvalidSize` corresponds to the
/// `InvalidConfig` error kind of spec.md 7 at the board-construction
/// boundary; `IllegalPlacement` is raised by the checked move-application
/// path when a caller-supplied move does not satisfy spec.md 4.1.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("board size must be at least 3, got {0}")]
    InvalidSize(u8),

    #[error("cell ({row}, {col}) is out of bounds for board of size {size}")]
    OutOfBounds { row: u8, col: u8, size: u8 },

    #[error("move has no placements")]
    EmptyMove,

    #[error("move has more than 2 placements")]
    TooManyPlacements,

    #[error("placement at ({row}, {col}) is illegal")]
    IllegalPlacement { row: u8, col: u8 },
}
