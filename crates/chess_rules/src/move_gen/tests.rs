use super::attack::{is_king_attacked, is_square_attacked, leaves_king_attacked};
use super::*;

fn sq(s: &str) -> Position {
    s.parse().unwrap()
}

fn targets(moves: &MoveSet) -> Vec<String> {
    moves.iter().map(|mv| mv.end().to_string()).collect()
}

fn board_with(pieces: &[(&str, Color, PieceKind)]) -> Board {
    pieces
        .iter()
        .map(|&(pos, color, kind)| (sq(pos), Piece::new(color, kind)))
        .collect()
}

// ============================================================================
// Sliding pieces
// ============================================================================

#[test]
fn test_rook_on_empty_board() {
    //! A rook on A1 of an empty board reaches all of rank 1 and file A

    let board = board_with(&[("A1", Color::White, PieceKind::Rook)]);
    let rook = Piece::new(Color::White, PieceKind::Rook);

    let moves = rook.piece_moves(&board, sq("A1"));
    assert_eq!(moves.len(), 14);
    assert!(moves.iter().all(|mv| mv.start() == sq("A1")));
    assert!(moves.iter().all(|mv| mv.promotion().is_none()));
}

#[test]
fn test_rook_stops_at_own_piece_and_captures_enemy() {
    //! Own blockers end the ray without a move; enemy blockers are captured

    let board = board_with(&[
        ("D4", Color::White, PieceKind::Rook),
        ("D6", Color::White, PieceKind::Pawn),
        ("F4", Color::Black, PieceKind::Knight),
    ]);
    let rook = Piece::new(Color::White, PieceKind::Rook);

    let moves = rook.piece_moves(&board, sq("D4"));
    let ends = targets(&moves);

    assert!(ends.contains(&"D5".to_string()));
    assert!(!ends.contains(&"D6".to_string()));
    assert!(!ends.contains(&"D7".to_string()));
    assert!(ends.contains(&"E4".to_string()));
    assert!(ends.contains(&"F4".to_string()));
    assert!(!ends.contains(&"G4".to_string()));
    // D5 up, E4 F4 right, D3 D2 D1 down, C4 B4 A4 left
    assert_eq!(moves.len(), 9);
}

#[test]
fn test_bishop_diagonals() {
    //! Bishop in the centre of an empty board sees 13 squares

    let board = board_with(&[("D4", Color::Black, PieceKind::Bishop)]);
    let bishop = Piece::new(Color::Black, PieceKind::Bishop);

    let moves = bishop.piece_moves(&board, sq("D4"));
    assert_eq!(moves.len(), 13);
    assert!(moves
        .iter()
        .all(|mv| mv.end().rank() != 4 && mv.end().file() != 4));
}

#[test]
fn test_queen_is_rook_plus_bishop() {
    let board = board_with(&[
        ("E5", Color::White, PieceKind::Queen),
        ("E7", Color::Black, PieceKind::Pawn),
        ("C3", Color::White, PieceKind::Pawn),
    ]);
    let queen = Piece::new(Color::White, PieceKind::Queen);
    let rook = Piece::new(Color::White, PieceKind::Rook);
    let bishop = Piece::new(Color::White, PieceKind::Bishop);

    let from = sq("E5");
    let mut union = rook.piece_moves(&board, from);
    union.extend(bishop.piece_moves(&board, from));

    assert_eq!(queen.piece_moves(&board, from), union);
}

#[test]
fn test_sliders_never_pass_first_blocker() {
    //! No generated move lies beyond the first occupied square on its ray

    let board = Board::standard();
    for (from, piece) in board.pieces() {
        if !matches!(
            piece.kind,
            PieceKind::Rook | PieceKind::Bishop | PieceKind::Queen
        ) {
            continue;
        }
        for mv in piece.covered_squares(&board, from) {
            let ranks = i16::from(mv.end().rank()) - i16::from(from.rank());
            let files = i16::from(mv.end().file()) - i16::from(from.file());
            let steps = ranks.abs().max(files.abs());
            let (dr, df) = ((ranks / steps) as i8, (files / steps) as i8);

            let mut current = from;
            for _ in 1..steps {
                current = current.offset(dr, df).unwrap();
                assert!(
                    board.is_empty(current),
                    "{mv} passes through occupied {current}"
                );
            }
        }
    }
}

// ============================================================================
// Leapers
// ============================================================================

#[test]
fn test_knight_in_corner() {
    let board = board_with(&[("A1", Color::White, PieceKind::Knight)]);
    let knight = Piece::new(Color::White, PieceKind::Knight);

    let moves = knight.piece_moves(&board, sq("A1"));
    assert_eq!(targets(&moves), vec!["C2", "B3"]);
}

#[test]
fn test_knight_excludes_own_but_covers_it() {
    //! Own-occupied destinations are covered but never moved to

    let board = board_with(&[
        ("G1", Color::White, PieceKind::Knight),
        ("F3", Color::White, PieceKind::Pawn),
        ("H3", Color::Black, PieceKind::Pawn),
    ]);
    let knight = Piece::new(Color::White, PieceKind::Knight);

    let moves = knight.piece_moves(&board, sq("G1"));
    assert_eq!(targets(&moves), vec!["E2", "H3"]);

    let covered = knight.covered_squares(&board, sq("G1"));
    assert_eq!(targets(&covered), vec!["E2", "F3", "H3"]);
}

#[test]
fn test_king_adjacent_squares() {
    let board = board_with(&[("E1", Color::White, PieceKind::King)]);
    let king = Piece::new(Color::White, PieceKind::King);

    let moves = king.piece_moves(&board, sq("E1"));
    assert_eq!(targets(&moves), vec!["D1", "F1", "D2", "E2", "F2"]);

    let board = board_with(&[("D5", Color::Black, PieceKind::King)]);
    let king = Piece::new(Color::Black, PieceKind::King);
    assert_eq!(king.piece_moves(&board, sq("D5")).len(), 8);
}

// ============================================================================
// Pawns
// ============================================================================

#[test]
fn test_pawn_single_and_double_push() {
    let board = Board::standard();
    let white = Piece::new(Color::White, PieceKind::Pawn);
    let black = Piece::new(Color::Black, PieceKind::Pawn);

    assert_eq!(targets(&white.piece_moves(&board, sq("E2"))), vec!["E3", "E4"]);
    assert_eq!(targets(&black.piece_moves(&board, sq("D7"))), vec!["D5", "D6"]);
}

#[test]
fn test_pawn_double_push_needs_both_squares_empty() {
    //! A blocker on the intermediate square stops both pushes

    let pawn = Piece::new(Color::White, PieceKind::Pawn);

    let board = board_with(&[
        ("E2", Color::White, PieceKind::Pawn),
        ("E3", Color::Black, PieceKind::Knight),
    ]);
    assert!(pawn.piece_moves(&board, sq("E2")).is_empty());

    let board = board_with(&[
        ("E2", Color::White, PieceKind::Pawn),
        ("E4", Color::Black, PieceKind::Knight),
    ]);
    assert_eq!(targets(&pawn.piece_moves(&board, sq("E2"))), vec!["E3"]);
}

#[test]
fn test_pawn_no_double_push_off_start_rank() {
    let board = board_with(&[("E3", Color::White, PieceKind::Pawn)]);
    let pawn = Piece::new(Color::White, PieceKind::Pawn);
    assert_eq!(targets(&pawn.piece_moves(&board, sq("E3"))), vec!["E4"]);
}

#[test]
fn test_pawn_captures_enemy_only() {
    let board = board_with(&[
        ("D4", Color::Black, PieceKind::Pawn),
        ("C3", Color::Black, PieceKind::Bishop),
        ("E3", Color::White, PieceKind::Rook),
    ]);
    let pawn = Piece::new(Color::Black, PieceKind::Pawn);

    // Own bishop on C3 is not capturable; D3 push and E3 capture remain
    assert_eq!(targets(&pawn.piece_moves(&board, sq("D4"))), vec!["D3", "E3"]);
}

#[test]
fn test_pawn_promotion_expands_to_four() {
    //! Pushes and captures onto the last rank each become four moves

    let board = board_with(&[
        ("B7", Color::White, PieceKind::Pawn),
        ("A8", Color::Black, PieceKind::Rook),
    ]);
    let pawn = Piece::new(Color::White, PieceKind::Pawn);

    let moves = pawn.piece_moves(&board, sq("B7"));
    assert_eq!(moves.len(), 8);
    assert!(moves.iter().all(|mv| mv.end().rank() == 8));
    for kind in PieceKind::PROMOTIONS {
        assert!(moves.contains(&Move::with_promotion(sq("B7"), sq("B8"), kind)));
        assert!(moves.contains(&Move::with_promotion(sq("B7"), sq("A8"), kind)));
    }
    assert!(!moves.contains(&Move::new(sq("B7"), sq("B8"))));
}

#[test]
fn test_black_pawn_promotes_on_rank_one() {
    let board = board_with(&[("H2", Color::Black, PieceKind::Pawn)]);
    let pawn = Piece::new(Color::Black, PieceKind::Pawn);

    let moves = pawn.piece_moves(&board, sq("H2"));
    assert_eq!(moves.len(), 4);
    assert!(moves
        .iter()
        .all(|mv| mv.end() == sq("H1") && mv.promotion().is_some()));
}

#[test]
fn test_pawn_covers_diagonals_regardless_of_occupancy() {
    //! Empty diagonals are covered; the square ahead never is

    let board = board_with(&[
        ("A2", Color::White, PieceKind::Pawn),
        ("E4", Color::White, PieceKind::Pawn),
        ("D5", Color::White, PieceKind::Knight),
    ]);
    let pawn = Piece::new(Color::White, PieceKind::Pawn);

    assert_eq!(targets(&pawn.covered_squares(&board, sq("E4"))), vec!["D5", "F5"]);
    assert_eq!(targets(&pawn.covered_squares(&board, sq("A2"))), vec!["B3"]);
}

// ============================================================================
// Pseudo-legal invariants
// ============================================================================

#[test]
fn test_moves_never_target_own_pieces() {
    //! Every pseudo-legal move lands on an empty or enemy square

    let mut board = Board::standard();
    board.apply_move(&Move::new(sq("E2"), sq("E4")));
    board.apply_move(&Move::new(sq("D7"), sq("D5")));
    board.apply_move(&Move::new(sq("G1"), sq("F3")));

    for (from, piece) in board.pieces() {
        for mv in piece.piece_moves(&board, from) {
            assert_ne!(
                board.occupancy(mv.end(), piece.color),
                Occupancy::Own,
                "{piece} on {from} targets own piece with {mv}"
            );
        }
    }
}

#[test]
fn test_starting_position_move_count() {
    let board = Board::standard();
    for color in Color::ALL {
        let count: usize = board
            .pieces_of(color)
            .map(|(from, piece)| piece.piece_moves(&board, from).len())
            .sum();
        assert_eq!(count, 20);
    }
}

// ============================================================================
// Attack detection
// ============================================================================

#[test]
fn test_square_attacked_through_open_line() {
    let board = board_with(&[
        ("A1", Color::Black, PieceKind::Rook),
        ("E1", Color::White, PieceKind::King),
    ]);
    assert!(is_square_attacked(&board, sq("E1"), Color::Black));
    assert!(is_king_attacked(&board, Color::White));
    assert!(!is_king_attacked(&board, Color::Black));
}

#[test]
fn test_blocked_line_is_not_attacked() {
    let board = board_with(&[
        ("A1", Color::Black, PieceKind::Rook),
        ("C1", Color::White, PieceKind::Bishop),
        ("E1", Color::White, PieceKind::King),
    ]);
    assert!(!is_king_attacked(&board, Color::White));
}

#[test]
fn test_defended_piece_counts_as_attacked() {
    //! Covered squares include own pieces, so a defended piece is attacked by its own side

    let board = board_with(&[
        ("D4", Color::White, PieceKind::Knight),
        ("C3", Color::White, PieceKind::Pawn),
    ]);
    assert!(is_square_attacked(&board, sq("D4"), Color::White));
}

#[test]
fn test_missing_king_is_never_attacked() {
    let board = board_with(&[("A1", Color::Black, PieceKind::Queen)]);
    assert!(!is_king_attacked(&board, Color::White));
}

#[test]
fn test_leaves_king_attacked_for_pinned_piece() {
    //! Moving a pinned piece off the pin line exposes the king

    let board = board_with(&[
        ("E1", Color::White, PieceKind::King),
        ("E2", Color::White, PieceKind::Bishop),
        ("E8", Color::Black, PieceKind::Rook),
    ]);

    let off_line = Move::new(sq("E2"), sq("D3"));
    assert!(leaves_king_attacked(&board, &off_line, Color::White));

    let king_step = Move::new(sq("E1"), sq("D1"));
    assert!(!leaves_king_attacked(&board, &king_step, Color::White));

    // Scratch copy only; the board itself is untouched
    assert!(board.get_piece(sq("E2")).is_some());
}
