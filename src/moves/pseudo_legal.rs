//! Pseudo-legal move test: movement pattern and occupancy only, ignoring
//! whether the mover's own king ends up attacked.

use crate::game_state::chess_types::{Board, PieceKind, Square};
use crate::moves::bishop_moves::bishop_pattern;
use crate::moves::candidates::candidates;
use crate::moves::king_moves::king_pattern;
use crate::moves::knight_moves::knight_pattern;
use crate::moves::line_of_sight::path_is_clear;
use crate::moves::pawn_moves::pawn_can_move;
use crate::moves::queen_moves::queen_pattern;
use crate::moves::rook_moves::rook_pattern;

/// Whether the piece on `from` may move to `to` by its movement pattern.
///
/// Gates run in order: destination on the board, destination differs from
/// the source, no friendly fire (phantom markers never count as friendly),
/// source holds a real piece. Then the per-kind pattern applies.
pub fn can_move(board: &Board, from: Square, to: Square) -> bool {
    let Some(target) = board.get(to) else {
        return false;
    };
    if to == from {
        return false;
    }
    let Some(piece) = board.get(from).filter(|p| p.is_real()) else {
        return false;
    };
    if target.is_real() && target.color == piece.color {
        return false;
    }

    let (d_file, d_rank) = from.delta(to);
    match piece.kind {
        PieceKind::Pawn => pawn_can_move(board, piece, from, to),
        PieceKind::Knight => knight_pattern(d_file, d_rank),
        PieceKind::King => king_pattern(d_file, d_rank),
        PieceKind::Rook => rook_pattern(d_file, d_rank) && path_is_clear(board, from, to),
        PieceKind::Bishop => bishop_pattern(d_file, d_rank) && path_is_clear(board, from, to),
        PieceKind::Queen => queen_pattern(d_file, d_rank) && path_is_clear(board, from, to),
        PieceKind::Empty | PieceKind::EnPassantMarker => false,
    }
}

/// Pseudo-legal destinations of the piece on `from`, in candidate order.
pub fn pseudo_legal_destinations(board: &Board, from: Square) -> impl Iterator<Item = Square> + '_ {
    candidates(board, from).filter(move |&to| can_move(board, from, to))
}
