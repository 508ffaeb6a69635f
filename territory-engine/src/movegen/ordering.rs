use territory_core::{is_near, is_valid_placement, neighbors, region_of, Board, Color, Move, Placement, Region};

use crate::config::SearchConstants;

pub type MoveScore = i32;

/// A candidate move paired with its heuristic score (higher is better).
#[derive(Debug, Clone)]
pub struct RatedMove {
    pub mv: Move,
    pub score: MoveScore,
}

/// Enumerates all legal single placements for `color` on `board`.
fn legal_singles(board: &Board, color: Color) -> Vec<Placement> {
    let _ = color; // legality does not depend on the mover's color (spec.md 4.1)
    board
        .all_cells()
        .filter(|&(r, c)| is_valid_placement(board, r, c, &[]))
        .map(|(r, c)| Placement::new(r, c))
        .collect()
}

fn score_single(board: &Board, p: Placement, color: Color, constants: &SearchConstants) -> MoveScore {
    let mut score = 0;
    if region_of(p.row, p.col, board.size()) == Region::Corner {
        score -= constants.corner_placement_penalty;
    }
    for (r, c) in neighbors(p.row, p.col, board.size()) {
        if let Some(piece) = board.get(r, c) {
            if color.is_enemy_of(piece.color) {
                score += constants.contact_bonus;
            }
        }
    }
    score
}

/// Returns the candidate moves for `color` on `board` at `turn_count`,
/// sorted best-first, per spec.md 4.3.
pub fn ordered_moves(board: &Board, turn_count: u32, color: Color, constants: &SearchConstants) -> Vec<RatedMove> {
    let singles = legal_singles(board, color);

    let pawns_to_place = if turn_count == 1 {
        1
    } else if singles.len() >= 2 {
        2
    } else {
        singles.len()
    };

    if pawns_to_place == 0 {
        return Vec::new();
    }

    let mut rated: Vec<RatedMove> = singles
        .iter()
        .map(|&p| RatedMove { mv: Move::single(p), score: score_single(board, p, color, constants) })
        .collect();
    rated.sort_unstable_by(|a, b| b.score.cmp(&a.score));

    if pawns_to_place == 1 {
        return rated;
    }

    // Double moves: pair up the top CANDIDATE_SINGLES_LIMIT singles.
    let limit = constants.candidate_singles_limit.min(rated.len());
    let top = &rated[..limit];

    let mut doubles = Vec::new();
    for i in 0..top.len() {
        for j in (i + 1)..top.len() {
            let (p1, p2) = (single_placement(&top[i].mv), single_placement(&top[j].mv));
            if !is_near((p1.row, p1.col), (p2.row, p2.col)) {
                doubles.push(RatedMove {
                    mv: Move::double(p1, p2),
                    score: top[i].score + top[j].score,
                });
            }
        }
    }

    if !doubles.is_empty() {
        doubles.sort_unstable_by(|a, b| b.score.cmp(&a.score));
        return doubles;
    }

    // Fallback: no non-near pair within the candidate slice. If any
    // non-near pair exists anywhere in `singles`, use it.
    for i in 0..singles.len() {
        for j in (i + 1)..singles.len() {
            if !is_near((singles[i].row, singles[i].col), (singles[j].row, singles[j].col)) {
                return vec![RatedMove {
                    mv: Move::double(singles[i], singles[j]),
                    score: score_single(board, singles[i], color, constants)
                        + score_single(board, singles[j], color, constants),
                }];
            }
        }
    }

    // Final fallback: the top singleton as a one-placement move.
    rated.into_iter().take(1).collect()
}

fn single_placement(mv: &Move) -> Placement {
    mv.placements[0]
}

/// Conversion-only moves (used by quiescence, spec.md 4.3): the same
/// single/double enumeration restricted to moves that would capture at
/// least one enemy piece when fully applied, annotated with the
/// conversion count and sorted by that count descending.
pub fn conversion_moves(board: &Board, turn_count: u32, color: Color, constants: &SearchConstants) -> Vec<(Move, usize)> {
    let all = ordered_moves(board, turn_count, color, constants);
    let mut out: Vec<(Move, usize)> = Vec::new();

    for rated in all {
        // Mirrors apply_move_unchecked's own loop exactly: each placement's
        // conversions must be recolored into `working` before the next
        // placement's scan runs, or a later placement's own scan line would
        // see the earlier capture's cells still in their stale color.
        let mut working = board.clone();
        working.age_color(color);
        let mut conversions = 0;
        for p in &rated.mv.placements {
            working.place_new(*p, color);
            let captured = territory_core::get_conversions(&working, p.row, p.col, color);
            conversions += captured.len();
            for (r, c) in captured {
                working.recolor(r, c, color);
            }
        }
        if conversions > 0 {
            out.push((rated.mv, conversions));
        }
    }

    out.sort_unstable_by(|a, b| b.1.cmp(&a.1));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use territory_core::Posture;

    #[test]
    fn s1_opening_only_interior_singles_scored_zero() {
        let board = Board::new(11).unwrap();
        let moves = ordered_moves(&board, 1, Color::A, &SearchConstants::default());
        assert!(!moves.is_empty());
        for rm in &moves {
            assert_eq!(rm.mv.len(), 1);
            assert_eq!(rm.score, 0);
            let p = rm.mv.placements[0];
            assert!((2..=8).contains(&p.row) && (2..=8).contains(&p.col));
        }
    }

    #[test]
    fn first_turn_always_single_placement() {
        let mut board = Board::new(11).unwrap();
        board.set(5, 5, Some(territory_core::Piece::new(Color::A, Posture::Old)));
        let moves = ordered_moves(&board, 1, Color::A, &SearchConstants::default());
        for rm in &moves {
            assert_eq!(rm.mv.len(), 1);
        }
    }

    #[test]
    fn corner_contact_scores_applied_later_in_game() {
        let mut board = Board::new(11).unwrap();
        // populate enough cells so corners become reachable and contacts exist
        board.set(1, 1, Some(territory_core::Piece::new(Color::B, Posture::Old)));
        board.set(5, 5, Some(territory_core::Piece::new(Color::A, Posture::Old)));
        let moves = ordered_moves(&board, 3, Color::A, &SearchConstants::default());
        assert!(!moves.is_empty());
        // moves should be sorted best-first
        for w in moves.windows(2) {
            assert!(w[0].score >= w[1].score);
        }
    }
}
