//! Per-piece candidate square generation.
//!
//! A candidate is a square the piece could reach if the board were otherwise
//! friendly: sliding rays stop at the first real piece, but no friendly-fire,
//! pawn-capture or king-safety filtering happens here. The same cursors serve
//! move generation and reverse attack detection.

use crate::game_state::chess_types::{Board, Color, PieceKind, Square};
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::knight_moves::KnightCandidates;
use crate::moves::pawn_moves::PawnCandidates;
use crate::moves::queen_moves::QUEEN_DIRECTIONS;
use crate::moves::ray_candidates::RayCandidates;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

#[derive(Debug, Clone)]
pub enum Candidates<'a> {
    Pawn(PawnCandidates),
    Knight(KnightCandidates),
    Ray(RayCandidates<'a>),
    Nothing,
}

impl Iterator for Candidates<'_> {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        match self {
            Candidates::Pawn(cursor) => cursor.next(),
            Candidates::Knight(cursor) => cursor.next(),
            Candidates::Ray(cursor) => cursor.next(),
            Candidates::Nothing => None,
        }
    }
}

/// Candidate cursor for whatever stands on `from`. Empty squares and phantom
/// markers produce nothing.
pub fn candidates(board: &Board, from: Square) -> Candidates<'_> {
    let Some(piece) = board.get(from) else {
        return Candidates::Nothing;
    };
    candidates_for(board, from, piece.kind, piece.color)
}

/// Candidate cursor for a hypothetical piece of `kind` placed on `from`.
pub fn candidates_for(
    board: &Board,
    from: Square,
    kind: PieceKind,
    color: Color,
) -> Candidates<'_> {
    match kind {
        PieceKind::Pawn => Candidates::Pawn(PawnCandidates::new(from, color)),
        PieceKind::Knight => Candidates::Knight(KnightCandidates::new(from)),
        PieceKind::Rook => Candidates::Ray(RayCandidates::new(board, from, &ROOK_DIRECTIONS, 7)),
        PieceKind::Bishop => {
            Candidates::Ray(RayCandidates::new(board, from, &BISHOP_DIRECTIONS, 7))
        }
        PieceKind::Queen => Candidates::Ray(RayCandidates::new(board, from, &QUEEN_DIRECTIONS, 7)),
        PieceKind::King => Candidates::Ray(RayCandidates::new(board, from, &QUEEN_DIRECTIONS, 1)),
        PieceKind::Empty | PieceKind::EnPassantMarker => Candidates::Nothing,
    }
}
