use std::collections::VecDeque;

use crate::error::CoreError;
use crate::game_elements::{Color, Move, Placement, Posture, COLORS};

use super::grid::Board;
use super::region::{is_near, neighbors, region_of, Region};

/// Whether `(row, col)` may legally receive a placement this turn, given
/// the board as it stood at the start of the turn and the placements
/// already chosen earlier in this same turn. Per spec.md 9 (Open
/// Question 4): occupancy and region are checked against the unmodified
/// `board`, while nearness is checked against `already_chosen`.
pub fn is_valid_placement(board: &Board, row: u8, col: u8, already_chosen: &[Placement]) -> bool {
    if !board.in_bounds(row, col) {
        return false;
    }
    if !board.is_empty_cell(row, col) {
        return false;
    }
    if already_chosen.iter().any(|p| is_near((p.row, p.col), (row, col))) {
        return false;
    }

    match region_of(row, col, board.size()) {
        Region::Interior => true,
        region => {
            if board.is_empty_board() && already_chosen.is_empty() {
                // Safety clamp: the only legal opening is interior.
                return false;
            }
            match region {
                Region::Preborder => neighbors(row, col, board.size())
                    .any(|(r, c)| region_of(r, c, board.size()) == Region::Interior && !board.is_empty_cell(r, c)),
                Region::Border => neighbors(row, col, board.size())
                    .any(|(r, c)| region_of(r, c, board.size()) == Region::Preborder && !board.is_empty_cell(r, c)),
                Region::Corner => {
                    // The only in-bounds neighbors of a corner are 1 diagonal
                    // plus 2 cardinals; the diagonal one is the only preborder
                    // candidate (the rule requires it specifically).
                    neighbors(row, col, board.size()).any(|(r, c)| {
                        let is_diagonal = r != row && c != col;
                        is_diagonal
                            && region_of(r, c, board.size()) == Region::Preborder
                            && !board.is_empty_cell(r, c)
                    })
                }
                Region::Interior => unreachable!(),
            }
        }
    }
}

/// Resolves conversions triggered by a piece of color `anchor_color` just
/// placed at `(row, col)`, scanning all 8 directions per spec.md 4.1.
/// Returns the set of captured cells (union across directions).
pub fn get_conversions(board: &Board, row: u8, col: u8, anchor_color: Color) -> Vec<(u8, u8)> {
    let size = board.size() as i16;
    let mut captured = Vec::new();

    for &(dr, dc) in super::region::DIRECTIONS.iter() {
        let mut candidates: Vec<(u8, u8)> = Vec::new();
        let mut line_color: Option<Color> = None;

        let mut i: i16 = 1;
        loop {
            let r = row as i16 + dr as i16 * i;
            let c = col as i16 + dc as i16 * i;
            if r < 0 || c < 0 || r >= size || c >= size {
                break;
            }
            let (r, c) = (r as u8, c as u8);
            let Some(piece) = board.get(r, c) else { break };

            if i == 1 {
                if piece.is_new() || piece.color.is_ally_of(anchor_color) {
                    break;
                }
                line_color = Some(piece.color);
                candidates.push((r, c));
            } else {
                let lc = line_color.expect("set on i==1 before any i>=2 iteration");
                if piece.posture == Posture::Old && piece.color == lc {
                    candidates.push((r, c));
                } else if piece.color == anchor_color {
                    captured.extend(candidates.drain(..));
                    break;
                } else {
                    break;
                }
            }
            i += 1;
        }
    }

    captured
}

/// Applies `mv` (already legal) for `color` to `board`, returning the
/// resulting board. Ages `color`'s `New` pieces, places the new pieces,
/// then resolves conversions placement-by-placement against the
/// in-progress board (so earlier placements in the same move are visible
/// to later ones' conversion scans, per spec.md 4.1 step 4).
pub fn apply_move_unchecked(board: &Board, mv: &Move, color: Color) -> Board {
    let mut next = board.clone();
    next.age_color(color);

    for placement in &mv.placements {
        next.place_new(*placement, color);
        let captured = get_conversions(&next, placement.row, placement.col, color);
        for (r, c) in captured {
            next.recolor(r, c, color);
        }
    }

    next
}

/// Checked variant: validates every placement against the turn-start
/// board (and pairwise nearness within the move) before applying.
pub fn apply_move(board: &Board, mv: &Move, color: Color) -> Result<Board, CoreError> {
    if mv.is_empty() {
        return Err(CoreError::EmptyMove);
    }
    if mv.len() > 2 {
        return Err(CoreError::TooManyPlacements);
    }

    let mut chosen: Vec<Placement> = Vec::with_capacity(mv.len());
    for p in &mv.placements {
        if !is_valid_placement(board, p.row, p.col, &chosen) {
            return Err(CoreError::IllegalPlacement { row: p.row, col: p.col });
        }
        chosen.push(*p);
    }

    Ok(apply_move_unchecked(board, mv, color))
}

/// The result of a win-condition scan: the winning color and the
/// connecting path, non-corner cells only, from one edge to the
/// opposite one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinResult {
    pub color: Color,
    pub path: Vec<(u8, u8)>,
}

/// Tests each color in stable order `[A, B, C, D]` for a connected,
/// 8-connected path of that color's cells (excluding corners) touching
/// top+bottom rows or left+right columns. Returns the first winner found.
pub fn check_win(board: &Board) -> Option<WinResult> {
    for &color in COLORS.iter() {
        if let Some(path) = find_edge_to_edge_path(board, color) {
            return Some(WinResult { color, path });
        }
    }
    None
}

fn find_edge_to_edge_path(board: &Board, color: Color) -> Option<Vec<(u8, u8)>> {
    let size = board.size();
    let last = size - 1;

    let owns = |r: u8, c: u8| -> bool {
        region_of(r, c, size) != Region::Corner
            && board.get(r, c).map(|p| p.color == color).unwrap_or(false)
    };

    // North/south: any top-row non-corner cell of `color` reaching any
    // bottom-row non-corner cell of `color`.
    let sources: Vec<(u8, u8)> = (0..size).filter(|&c| owns(0, c)).map(|c| (0, c)).collect();
    if !sources.is_empty() {
        if let Some(path) = bfs_to_target(board, color, &sources, |r, _| r == last) {
            return Some(path);
        }
    }

    // East/west: any left-column non-corner cell reaching any right-column
    // non-corner cell.
    let sources: Vec<(u8, u8)> = (0..size).filter(|&r| owns(r, 0)).map(|r| (r, 0)).collect();
    if !sources.is_empty() {
        if let Some(path) = bfs_to_target(board, color, &sources, |_, c| c == last) {
            return Some(path);
        }
    }

    None
}

fn bfs_to_target(
    board: &Board,
    color: Color,
    sources: &[(u8, u8)],
    is_target: impl Fn(u8, u8) -> bool,
) -> Option<Vec<(u8, u8)>> {
    let size = board.size();
    let mut visited = vec![false; size as usize * size as usize];
    let mut parent: Vec<Option<(u8, u8)>> = vec![None; size as usize * size as usize];
    let idx = |r: u8, c: u8| r as usize * size as usize + c as usize;

    let owns = |r: u8, c: u8| -> bool {
        region_of(r, c, size) != Region::Corner
            && board.get(r, c).map(|p| p.color == color).unwrap_or(false)
    };

    let mut queue: VecDeque<(u8, u8)> = VecDeque::new();
    for &(r, c) in sources {
        if !visited[idx(r, c)] {
            visited[idx(r, c)] = true;
            queue.push_back((r, c));
        }
    }

    while let Some((r, c)) = queue.pop_front() {
        if is_target(r, c) {
            // Reconstruct the path back to a source.
            let mut path = vec![(r, c)];
            let mut cur = (r, c);
            while let Some(p) = parent[idx(cur.0, cur.1)] {
                path.push(p);
                cur = p;
            }
            path.reverse();
            return Some(path);
        }

        for (nr, nc) in neighbors(r, c, size) {
            if owns(nr, nc) && !visited[idx(nr, nc)] {
                visited[idx(nr, nc)] = true;
                parent[idx(nr, nc)] = Some((r, c));
                queue.push_back((nr, nc));
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_elements::Color::*;

    fn place(board: &mut Board, r: u8, c: u8, color: Color, posture: Posture) {
        board.set(r, c, Some(crate::game_elements::Piece::new(color, posture)));
    }

    #[test]
    fn opening_must_be_interior() {
        let board = Board::new(11).unwrap();
        assert!(is_valid_placement(&board, 5, 5, &[]));
        assert!(!is_valid_placement(&board, 0, 0, &[]));
        assert!(!is_valid_placement(&board, 0, 5, &[]));
        assert!(!is_valid_placement(&board, 1, 5, &[]));
    }

    #[test]
    fn s2_capture_along_a_row() {
        let mut board = Board::new(11).unwrap();
        place(&mut board, 5, 3, A, Posture::Old);
        place(&mut board, 5, 5, B, Posture::Old);

        // A places at (5,4): B is adjacent but no closer A exists beyond it.
        let mut b2 = board.clone();
        b2.set(5, 4, Some(crate::game_elements::Piece::placed(A)));
        let captures = get_conversions(&b2, 5, 4, A);
        assert!(captures.is_empty());

        // Now instead: B at (5,4) old, A places at (5,5).
        let mut b3 = Board::new(11).unwrap();
        place(&mut b3, 5, 3, A, Posture::Old);
        place(&mut b3, 5, 4, B, Posture::Old);
        b3.set(5, 5, Some(crate::game_elements::Piece::placed(A)));
        let captures = get_conversions(&b3, 5, 5, A);
        assert_eq!(captures, vec![(5, 4)]);
    }

    #[test]
    fn s3_new_piece_shield_blocks_capture() {
        let mut board = Board::new(11).unwrap();
        place(&mut board, 5, 3, A, Posture::Old);
        place(&mut board, 5, 4, B, Posture::New);
        board.set(5, 5, Some(crate::game_elements::Piece::placed(A)));
        let captures = get_conversions(&board, 5, 5, A);
        assert!(captures.is_empty());
    }

    #[test]
    fn s4_winning_path() {
        let mut board = Board::new(11).unwrap();
        for r in 0..11u8 {
            place(&mut board, r, 5, A, Posture::Old);
        }
        let result = check_win(&board).expect("A should win");
        assert_eq!(result.color, A);
        assert_eq!(result.path.len(), 11);
    }

    #[test]
    fn s5_corner_path_invalid() {
        let mut board = Board::new(11).unwrap();
        for r in 1..10u8 {
            place(&mut board, r, 5, A, Posture::Old);
        }
        place(&mut board, 0, 0, A, Posture::Old);
        place(&mut board, 10, 5, A, Posture::Old);
        assert!(check_win(&board).is_none());
    }
}
