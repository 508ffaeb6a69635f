use std::collections::VecDeque;
use std::fmt::{self, Display};
use std::ops::{Add, Mul, Neg, Sub};

use territory_core::{check_win, Board, Color, Region, Team, COLORS};

use crate::config::SearchConstants;

/// Score of a position, always from team 1's perspective (spec.md 4.2).
/// The goal of using a newtype instead of a raw `i32` is to expose
/// `Display` and keep arithmetic overflow-safe at the extremes, the same
/// motivation the teacher's `Evaluation` newtype documents.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Evaluation {
    score: i32,
}

impl Evaluation {
    pub const fn new(score: i32) -> Self {
        Self { score }
    }

    pub fn min_val() -> Self {
        Self::new(i32::MIN + 1)
    }

    pub fn max_val() -> Self {
        Self::new(i32::MAX)
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn is_win(&self, constants: &SearchConstants) -> bool {
        self.score.abs() >= constants.win_score
    }
}

impl Neg for Evaluation {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self::new(-self.score)
    }
}

impl Add<i32> for Evaluation {
    type Output = Self;
    fn add(self, rhs: i32) -> Self::Output {
        Self::new(self.score + rhs)
    }
}

impl Sub<i32> for Evaluation {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self::Output {
        Self::new(self.score - rhs)
    }
}

impl Add<Self> for Evaluation {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.score + rhs.score)
    }
}

impl Sub<Self> for Evaluation {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.score - rhs.score)
    }
}

impl Mul<i32> for Evaluation {
    type Output = Self;
    fn mul(self, rhs: i32) -> Self::Output {
        Self::new(self.score * rhs)
    }
}

impl Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.score >= 100_000 {
            write!(f, "W")
        } else if self.score <= -100_000 {
            write!(f, "-W")
        } else {
            write!(f, "{:+.2}", self.score as f64 / 100.0)
        }
    }
}

/// Evaluates `board` from team 1's perspective, per spec.md 4.2: winner
/// short-circuit, then material + corner penalty + territorial extent.
pub fn evaluate_position(board: &Board, constants: &SearchConstants) -> Evaluation {
    if let Some(win) = check_win(board) {
        return if win.color.team() == Team::One {
            Evaluation::new(constants.win_score)
        } else {
            Evaluation::new(-constants.win_score)
        };
    }

    let mut piece_count = [0i32; 2]; // [team1, team2]
    let mut corner_penalty = [0i32; 2];

    for (_, piece) in board.occupied() {
        let team_idx = team_index(piece.color);
        piece_count[team_idx] += 1;
    }

    for &color in COLORS.iter() {
        for r in [0u8, board.size() - 1] {
            for c in [0u8, board.size() - 1] {
                if let Some(p) = board.get(r, c) {
                    if p.color == color {
                        corner_penalty[team_index(color)] += constants.static_corner_penalty;
                    }
                }
            }
        }
    }

    let piece_advantage = (piece_count[0] - piece_count[1]) * constants.piece_value;
    let extent_bonus = team_extent_bonus(board, constants);

    Evaluation::new(
        piece_advantage + (extent_bonus[0] - extent_bonus[1]) - corner_penalty[0] + corner_penalty[1],
    )
}

fn team_index(color: Color) -> usize {
    match color.team() {
        Team::One => 0,
        Team::Two => 1,
    }
}

/// Flood-fills 8-connected same-team components and sums `extent^2 *
/// EXTENT_BONUS_MULTIPLIER` per component into that team's bucket.
/// Iterative BFS (not recursive) so the call stack stays bounded
/// regardless of board size, per SPEC_FULL.md 4.2.
fn team_extent_bonus(board: &Board, constants: &SearchConstants) -> [i32; 2] {
    let size = board.size();
    let mut visited = vec![false; size as usize * size as usize];
    let idx = |r: u8, c: u8| r as usize * size as usize + c as usize;
    let mut bonus = [0i32; 2];

    for (r, c) in board.all_cells() {
        if visited[idx(r, c)] {
            continue;
        }
        let Some(piece) = board.get(r, c) else {
            visited[idx(r, c)] = true;
            continue;
        };
        let team = piece.color.team();

        let (mut min_r, mut max_r, mut min_c, mut max_c) = (r, r, c, c);
        let mut queue = VecDeque::new();
        queue.push_back((r, c));
        visited[idx(r, c)] = true;

        while let Some((cr, cc)) = queue.pop_front() {
            min_r = min_r.min(cr);
            max_r = max_r.max(cr);
            min_c = min_c.min(cc);
            max_c = max_c.max(cc);

            for (nr, nc) in territory_core::neighbors(cr, cc, size) {
                if visited[idx(nr, nc)] {
                    continue;
                }
                if let Some(np) = board.get(nr, nc) {
                    if np.color.team() == team {
                        visited[idx(nr, nc)] = true;
                        queue.push_back((nr, nc));
                    }
                }
            }
        }

        let extent = (max_r - min_r).max(max_c - min_c) as i32;
        let team_idx = match team {
            Team::One => 0,
            Team::Two => 1,
        };
        bonus[team_idx] += extent * extent * constants.extent_bonus_multiplier;
    }

    bonus
}

#[cfg(test)]
mod tests {
    use super::*;
    use territory_core::{Piece, Posture};

    #[test]
    fn empty_board_evaluates_to_zero() {
        let board = Board::new(11).unwrap();
        assert_eq!(evaluate_position(&board, &SearchConstants::default()).score(), 0);
    }

    #[test]
    fn material_advantage_favors_team_one() {
        let mut board = Board::new(11).unwrap();
        board.set(5, 5, Some(Piece::new(Color::A, Posture::Old)));
        board.set(2, 2, Some(Piece::new(Color::B, Posture::Old)));
        // Equal material (1 vs 1): zero material term, but extents may differ.
        let eval = evaluate_position(&board, &SearchConstants::default());
        board.set(3, 3, Some(Piece::new(Color::C, Posture::Old)));
        let eval2 = evaluate_position(&board, &SearchConstants::default());
        assert!(eval2.score() > eval.score());
    }

    #[test]
    fn team_swap_is_antisymmetric() {
        let mut board = Board::new(11).unwrap();
        board.set(5, 5, Some(Piece::new(Color::A, Posture::Old)));
        board.set(2, 2, Some(Piece::new(Color::B, Posture::Old)));
        board.set(4, 4, Some(Piece::new(Color::B, Posture::Old)));

        let mut swapped = Board::new(11).unwrap();
        swapped.set(5, 5, Some(Piece::new(Color::B, Posture::Old)));
        swapped.set(2, 2, Some(Piece::new(Color::A, Posture::Old)));
        swapped.set(4, 4, Some(Piece::new(Color::A, Posture::Old)));

        let constants = SearchConstants::default();
        assert_eq!(
            evaluate_position(&board, &constants).score(),
            -evaluate_position(&swapped, &constants).score()
        );
    }

    #[test]
    fn win_dominates_evaluation() {
        let mut board = Board::new(11).unwrap();
        for r in 0..11u8 {
            board.set(r, 5, Some(Piece::new(Color::A, Posture::Old)));
        }
        let eval = evaluate_position(&board, &SearchConstants::default());
        assert_eq!(eval.score(), SearchConstants::default().win_score);
    }
}
