use rand::rngs::StdRng;
use rand::SeedableRng;
use territory_core::{Board, Color::A, Piece, Posture, ZobristTables};

#[test]
fn hash_changes_when_a_piece_is_added() {
    let mut rng = StdRng::seed_from_u64(1);
    let tables = ZobristTables::new(11, &mut rng);

    let empty = Board::new(11).unwrap();
    let h_empty = tables.hash(&empty, 0);

    let mut with_piece = empty.clone();
    with_piece.set(5, 5, Some(Piece::new(A, Posture::New)));
    let h_piece = tables.hash(&with_piece, 0);

    assert_ne!(h_empty, h_piece);
}

#[test]
fn hash_is_order_independent_for_the_same_final_board() {
    let mut rng = StdRng::seed_from_u64(2);
    let tables = ZobristTables::new(11, &mut rng);

    let mut b1 = Board::new(11).unwrap();
    b1.set(2, 2, Some(Piece::new(A, Posture::Old)));
    b1.set(3, 3, Some(Piece::new(territory_core::Color::B, Posture::Old)));

    let mut b2 = Board::new(11).unwrap();
    b2.set(3, 3, Some(Piece::new(territory_core::Color::B, Posture::Old)));
    b2.set(2, 2, Some(Piece::new(A, Posture::Old)));

    assert_eq!(tables.hash(&b1, 2), tables.hash(&b2, 2));
}
