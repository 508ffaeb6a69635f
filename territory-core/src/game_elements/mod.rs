mod color;
mod mv;
mod piece;

pub use color::{Color, Team, COLORS};
pub use mv::{Move, Placement};
pub use piece::{Piece, Posture};
