mod board;
mod error;
mod game_elements;
mod zobrist;

pub use board::{
    apply_move, apply_move_unchecked, check_win, get_conversions, is_near, is_valid_placement,
    neighbors, region_of, Board, Region, WinResult, DIRECTIONS,
};
pub use error::CoreError;
pub use game_elements::{Color, Move, Piece, Placement, Posture, Team, COLORS};
pub use zobrist::ZobristTables;
