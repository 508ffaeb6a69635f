use serde::{Deserialize, Serialize};
use super::color::Color;

/// Whether a piece was placed this turn (`New`, unconvertable, blocks
/// captures along the line it sits on) or has survived to a later turn
/// (`Old`, convertable by flanking).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Posture {
    New,
    Old,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub posture: Posture,
}

impl Piece {
    pub const fn new(color: Color, posture: Posture) -> Self {
        Self { color, posture }
    }

    pub const fn placed(color: Color) -> Self {
        Self::new(color, Posture::New)
    }

    /// Packed index in `[0, 8)`: colorIndex + 4 if `Old`. Used for Zobrist
    /// keying, per spec.md 4.4.
    pub const fn piece_index(&self) -> usize {
        self.color.to_index() + if matches!(self.posture, Posture::Old) { 4 } else { 0 }
    }

    pub const fn is_new(&self) -> bool {
        matches!(self.posture, Posture::New)
    }

    pub const fn aged(&self) -> Self {
        Self::new(self.color, Posture::Old)
    }
}
