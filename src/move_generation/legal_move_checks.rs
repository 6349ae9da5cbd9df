//! Check oracle: whether a square is attacked, and which enemy pieces
//! currently attack it.

use crate::game_state::chess_types::{Board, Color, PieceKind, Square};
use crate::moves::knight_moves::KnightCandidates;
use crate::moves::pawn_moves::pawn_capture_origins;
use crate::moves::pseudo_legal::can_move;
use crate::moves::queen_moves::QUEEN_DIRECTIONS;
use crate::moves::ray_candidates::RayCandidates;

/// Whether the piece on `from` attacks `to`. Pawns attack their forward
/// diagonals whether or not anything stands there.
#[inline]
fn attacks(board: &Board, from: Square, to: Square) -> bool {
    let piece = board[from];
    if piece.kind == PieceKind::Pawn {
        return pawn_capture_origins(to, piece.color).contains(&from);
    }
    can_move(board, from, to)
}

/// Full-board scan: true when any real piece of `by` attacks `square`.
pub fn is_square_attacked(board: &Board, square: Square, by: Color) -> bool {
    board
        .squares_of(by)
        .any(|from| attacks(board, from, square))
}

/// Squares holding enemy pieces (of `color`'s opponent) that attack `square`.
///
/// Works outward from the target instead of scanning the board: pawn capture
/// origins, knight jumps, and the first piece met on each queen ray. Kings are
/// never reported since a king cannot give check.
pub fn reverse_attackers(board: &Board, color: Color, square: Square) -> Vec<Square> {
    let enemy = color.opposite();
    let mut attackers = Vec::new();

    attackers.extend(
        pawn_capture_origins(square, enemy)
            .into_iter()
            .filter(|&origin| board.get(origin).is_some_and(|p| p.is(PieceKind::Pawn, enemy))),
    );

    attackers.extend(KnightCandidates::new(square).filter(|&sq| board[sq].is(PieceKind::Knight, enemy)));

    attackers.extend(
        RayCandidates::new(board, square, &QUEEN_DIRECTIONS, 7).filter(|&sq| {
            let piece = board[sq];
            if !piece.is_real() || piece.color != enemy {
                return false;
            }
            let diagonal = sq.file != square.file && sq.rank != square.rank;
            match piece.kind {
                PieceKind::Queen => true,
                PieceKind::Bishop => diagonal,
                PieceKind::Rook => !diagonal,
                _ => false,
            }
        }),
    );

    attackers
}
