use std::fmt::{self, Display};
use serde::{Deserialize, Serialize};

/// One of the four piece controllers. Teams are a fixed partition:
/// `{A, C}` vs `{B, D}`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    A,
    B,
    C,
    D,
}

/// Which of the two alliances a color belongs to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Team {
    One,
    Two,
}

pub const COLORS: [Color; 4] = [Color::A, Color::B, Color::C, Color::D];

impl Color {
    /// Index into per-color arrays (Zobrist tables, piece-index packing).
    pub const fn to_index(&self) -> usize {
        match self {
            Color::A => 0,
            Color::B => 1,
            Color::C => 2,
            Color::D => 3,
        }
    }

    pub const fn from_index(i: usize) -> Self {
        match i {
            0 => Color::A,
            1 => Color::B,
            2 => Color::C,
            _ => Color::D,
        }
    }

    /// The team this color belongs to.
    pub const fn team(&self) -> Team {
        match self {
            Color::A | Color::C => Team::One,
            Color::B | Color::D => Team::Two,
        }
    }

    /// This color's team partner.
    pub const fn ally(&self) -> Color {
        match self {
            Color::A => Color::C,
            Color::C => Color::A,
            Color::B => Color::D,
            Color::D => Color::B,
        }
    }

    /// Whether `other` is on the opposing team.
    pub fn is_enemy_of(&self, other: Color) -> bool {
        self.team() != other.team()
    }

    pub fn is_ally_of(&self, other: Color) -> bool {
        *self == other || self.ally() == other
    }
}

impl Team {
    /// +1 for team 1, -1 for team 2. Used to flip evaluation sign.
    pub const fn sign(&self) -> i32 {
        match self {
            Team::One => 1,
            Team::Two => -1,
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Color::A => 'A',
            Color::B => 'B',
            Color::C => 'C',
            Color::D => 'D',
        };
        write!(f, "{c}")
    }
}
