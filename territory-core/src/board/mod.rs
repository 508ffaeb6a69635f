mod grid;
mod region;
mod rules;

pub use grid::Board;
pub use region::{is_near, neighbors, region_of, Region, DIRECTIONS};
pub use rules::{apply_move, apply_move_unchecked, check_win, get_conversions, is_valid_placement, WinResult};
