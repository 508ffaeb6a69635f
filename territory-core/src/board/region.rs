use serde::{Deserialize, Serialize};

/// A coordinate-only classification of a cell, per spec.md 3. Depends
/// solely on `size` and the cell's coordinates, never on occupancy.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Region {
    Corner,
    Border,
    Preborder,
    Interior,
}

/// Classifies `(row, col)` on a board of the given `size`.
///
/// For `size < 5` the preborder ring and the interior ring coincide (the
/// formula in spec.md 4 would otherwise classify the lone non-border cell
/// of a 3x3 board as preborder, contradicting spec.md 8's explicit "N=3:
/// there is no preborder region"); below that threshold the innermost
/// ring is treated as interior.
pub fn region_of(row: u8, col: u8, size: u8) -> Region {
    let last = size - 1;
    let is_edge_axis = |v: u8| v == 0 || v == last;

    if is_edge_axis(row) && is_edge_axis(col) {
        return Region::Corner;
    }
    if is_edge_axis(row) || is_edge_axis(col) {
        return Region::Border;
    }

    if size >= 5 {
        let is_preborder_axis = |v: u8| v == 1 || v == last - 1;
        if is_preborder_axis(row) || is_preborder_axis(col) {
            return Region::Preborder;
        }
    }
    Region::Interior
}

/// Chebyshev-distance-2 neighborhood: two cells are "near" iff both their
/// row and column differ by at most 2.
pub fn is_near(a: (u8, u8), b: (u8, u8)) -> bool {
    (a.0 as i16 - b.0 as i16).abs() <= 2 && (a.1 as i16 - b.1 as i16).abs() <= 2
}

/// The 8 compass offsets, used both for neighbor checks and conversion
/// scans.
pub const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Returns the in-bounds 8-neighbors of `(row, col)` on a board of `size`.
pub fn neighbors(row: u8, col: u8, size: u8) -> impl Iterator<Item = (u8, u8)> {
    DIRECTIONS.iter().filter_map(move |&(dr, dc)| {
        let nr = row as i16 + dr as i16;
        let nc = col as i16 + dc as i16;
        if nr >= 0 && nc >= 0 && nr < size as i16 && nc < size as i16 {
            Some((nr as u8, nc as u8))
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn near_symmetry() {
        assert!(is_near((0, 0), (2, 2)));
        assert!(is_near((2, 2), (0, 0)));
        assert!(!is_near((0, 0), (3, 0)));
        assert!(!is_near((0, 0), (0, 3)));
    }

    #[test]
    fn region_classification_11() {
        assert_eq!(region_of(0, 0, 11), Region::Corner);
        assert_eq!(region_of(10, 10, 11), Region::Corner);
        assert_eq!(region_of(0, 5, 11), Region::Border);
        assert_eq!(region_of(1, 5, 11), Region::Preborder);
        assert_eq!(region_of(9, 5, 11), Region::Preborder);
        assert_eq!(region_of(5, 5, 11), Region::Interior);
        assert_eq!(region_of(2, 2, 11), Region::Interior);
    }

    #[test]
    fn region_classification_3() {
        // N=3: there is no preborder ring, only corner/border/interior(center)
        assert_eq!(region_of(0, 0, 3), Region::Corner);
        assert_eq!(region_of(0, 1, 3), Region::Border);
        assert_eq!(region_of(1, 1, 3), Region::Interior);
    }
}
