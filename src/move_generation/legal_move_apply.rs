//! Board mutation primitive shared by validation, legality search and commit.
//!
//! Every function here works on a copy: the input board is never touched.

use crate::game_state::chess_rules::{castle_king_target, castle_rook_target, king_home, rook_home};
use crate::game_state::chess_types::{Board, CastleSide, Color, Piece, PieceKind, Square};

/// Result of moving one piece on a board copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub board: Board,
    pub captured: bool,
}

/// Moves the piece on `from` to `to` on a copy of `board`.
///
/// Order matters: the destination is read before stale phantom markers are
/// purged, so a pawn may still capture the marker it was aimed at. A pawn
/// double step leaves a fresh marker of its own color on the skipped square;
/// a pawn capturing an enemy marker removes the pawn standing beside it.
pub fn apply_move_to_board(board: &Board, from: Square, to: Square) -> AppliedMove {
    let mut next = *board;
    let mover = board[from];
    let target = board[to];

    next.purge_phantoms();
    next[from] = Piece::EMPTY;
    next[to] = mover;

    let mut captured = target.is_real();
    if mover.kind == PieceKind::Pawn {
        let (d_file, d_rank) = from.delta(to);
        if d_rank == 2 {
            next[from.offset(0, mover.color.forward())] = Piece::phantom(mover.color);
        } else if d_file == 1 && target.is_phantom() && target.color != mover.color {
            next[Square::new(to.file, from.rank)] = Piece::EMPTY;
            captured = true;
        }
    }

    AppliedMove {
        board: next,
        captured,
    }
}

/// Whether moving `from` to `to` would capture something, without building
/// the new board.
pub fn is_capture(board: &Board, from: Square, to: Square) -> bool {
    let mover = board[from];
    let target = board[to];
    if target.is_real() {
        return true;
    }
    mover.kind == PieceKind::Pawn
        && from.file != to.file
        && target.is_phantom()
        && target.color != mover.color
}

/// Castles on a copy of `board`: king from its home square to the g or c
/// file, rook from its corner to the square the king crossed.
pub fn apply_castle_to_board(board: &Board, color: Color, side: CastleSide) -> Board {
    let mut next = *board;
    next.purge_phantoms();
    let king = next[king_home(color)];
    let rook = next[rook_home(color, side)];
    next[king_home(color)] = Piece::EMPTY;
    next[rook_home(color, side)] = Piece::EMPTY;
    next[castle_king_target(color, side)] = king;
    next[castle_rook_target(color, side)] = rook;
    next
}

#[cfg(test)]
mod tests {
    use super::{apply_castle_to_board, apply_move_to_board, is_capture};
    use crate::game_state::chess_types::{Board, CastleSide, Color, Piece, PieceKind, Square};

    #[test]
    fn double_step_leaves_one_marker_of_mover_color() {
        let board = Board::starting();
        let e2 = Square::new(4, 6);
        let e4 = Square::new(4, 4);
        let applied = apply_move_to_board(&board, e2, e4);
        assert!(!applied.captured);
        assert_eq!(applied.board.phantom(), Some((Square::new(4, 5), Color::White)));
        assert!(applied.board[e4].is(PieceKind::Pawn, Color::White));
        // Input board untouched.
        assert_eq!(board, Board::starting());
    }

    #[test]
    fn next_move_purges_marker() {
        let board = Board::starting();
        let after_e4 = apply_move_to_board(&board, Square::new(4, 6), Square::new(4, 4)).board;
        let after_nf6 = apply_move_to_board(&after_e4, Square::new(6, 0), Square::new(5, 2)).board;
        assert_eq!(after_nf6.phantom(), None);
    }

    #[test]
    fn en_passant_capture_removes_the_passed_pawn() {
        let mut board = Board::empty();
        let d4 = Square::new(3, 4);
        let e4 = Square::new(4, 4);
        let e3 = Square::new(4, 5);
        board[d4] = Piece::new(PieceKind::Pawn, Color::Black);
        board[e4] = Piece::new(PieceKind::Pawn, Color::White);
        board[e3] = Piece::phantom(Color::White);

        assert!(is_capture(&board, d4, e3));
        let applied = apply_move_to_board(&board, d4, e3);
        assert!(applied.captured);
        assert!(applied.board[e4].is_empty());
        assert!(applied.board[e3].is(PieceKind::Pawn, Color::Black));
        assert_eq!(applied.board.phantom(), None);
    }

    #[test]
    fn piece_landing_on_marker_is_not_a_capture() {
        let mut board = Board::empty();
        let e3 = Square::new(4, 5);
        let b6 = Square::new(1, 2);
        board[b6] = Piece::new(PieceKind::Bishop, Color::Black);
        board[e3] = Piece::phantom(Color::White);
        board[Square::new(4, 4)] = Piece::new(PieceKind::Pawn, Color::White);

        assert!(!is_capture(&board, b6, e3));
        let applied = apply_move_to_board(&board, b6, e3);
        assert!(!applied.captured);
        assert!(applied.board[Square::new(4, 4)].is(PieceKind::Pawn, Color::White));
    }

    #[test]
    fn castle_moves_king_and_rook() {
        let mut board = Board::empty();
        board[Square::new(4, 7)] = Piece::new(PieceKind::King, Color::White);
        board[Square::new(0, 7)] = Piece::new(PieceKind::Rook, Color::White);
        let castled = apply_castle_to_board(&board, Color::White, CastleSide::Queenside);
        assert!(castled[Square::new(2, 7)].is(PieceKind::King, Color::White));
        assert!(castled[Square::new(3, 7)].is(PieceKind::Rook, Color::White));
        assert!(castled[Square::new(0, 7)].is_empty());
        assert!(castled[Square::new(4, 7)].is_empty());
    }
}
