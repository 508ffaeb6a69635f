use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::game_elements::{Color, Piece, Placement, Posture};

/// An N×N grid of optional pieces, stored flat row-major (spec.md 9:
/// "precompute region once per N into a lookup table" — the grid itself
/// needs no such table since occupancy is the only thing it tracks).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: u8,
    cells: Vec<Option<Piece>>,
}

impl Board {
    pub fn new(size: u8) -> Result<Self, CoreError> {
        if size < 3 {
            return Err(CoreError::InvalidSize(size));
        }
        let n = size as usize * size as usize;
        Ok(Self { size, cells: vec![None; n] })
    }

    pub const fn size(&self) -> u8 {
        self.size
    }

    pub fn in_bounds(&self, row: u8, col: u8) -> bool {
        row < self.size && col < self.size
    }

    fn index(&self, row: u8, col: u8) -> usize {
        row as usize * self.size as usize + col as usize
    }

    pub fn get(&self, row: u8, col: u8) -> Option<Piece> {
        self.cells[self.index(row, col)]
    }

    pub fn is_empty_cell(&self, row: u8, col: u8) -> bool {
        self.get(row, col).is_none()
    }

    pub fn is_empty_board(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    pub fn set(&mut self, row: u8, col: u8, piece: Option<Piece>) {
        let i = self.index(row, col);
        self.cells[i] = piece;
    }

    /// Iterates all occupied cells as `((row, col), Piece)`.
    pub fn occupied(&self) -> impl Iterator<Item = ((u8, u8), Piece)> + '_ {
        let size = self.size;
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.map(|p| {
                let row = (i / size as usize) as u8;
                let col = (i % size as usize) as u8;
                ((row, col), p)
            })
        })
    }

    /// Every cell on the board, occupied or not.
    pub fn all_cells(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        let size = self.size;
        (0..size).flat_map(move |r| (0..size).map(move |c| (r, c)))
    }

    pub fn checked_get(&self, row: u8, col: u8) -> Result<Option<Piece>, CoreError> {
        if !self.in_bounds(row, col) {
            return Err(CoreError::OutOfBounds { row, col, size: self.size });
        }
        Ok(self.get(row, col))
    }

    /// Ages every `New` piece of `color` to `Old`. Idempotent: a second
    /// call with no intervening placements is a no-op (spec.md 8).
    pub fn age_color(&mut self, color: Color) {
        for cell in self.cells.iter_mut() {
            if let Some(p) = cell {
                if p.color == color && p.is_new() {
                    *p = p.aged();
                }
            }
        }
    }

    pub fn place_new(&mut self, placement: Placement, color: Color) {
        self.set(placement.row, placement.col, Some(Piece::new(color, Posture::New)));
    }

    pub fn recolor(&mut self, row: u8, col: u8, color: Color) {
        if let Some(p) = self.get(row, col) {
            self.set(row, col, Some(Piece::new(color, p.posture)));
        }
    }
}
