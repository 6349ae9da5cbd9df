//! Short-circuiting search for any legal move of one side.
//!
//! Out of check every piece streams its candidates until one leaves the king
//! safe. In check the search runs three phases, each stopping at the first
//! success: king escape, capture of a checking piece, and interposition on
//! the line of a checking slider. A double check fails the last two phases
//! on its own because every candidate is re-tested against the whole board.

use crate::game_state::chess_types::{Board, Color, PieceKind, Square};
use crate::move_generation::legal_move_apply::apply_move_to_board;
use crate::move_generation::legal_move_checks::{is_square_attacked, reverse_attackers};
use crate::moves::line_of_sight::squares_between;
use crate::moves::pseudo_legal::{can_move, pseudo_legal_destinations};

/// True when `from`->`to` does not leave `color`'s king attacked.
pub fn leaves_king_safe(
    board: &Board,
    color: Color,
    king_square: Square,
    from: Square,
    to: Square,
) -> bool {
    let applied = apply_move_to_board(board, from, to);
    let king = if from == king_square { to } else { king_square };
    !is_square_attacked(&applied.board, king, color.opposite())
}

/// Whether `color` has at least one legal move.
pub fn has_legal_move(board: &Board, color: Color, king_square: Square, in_check: bool) -> bool {
    if !in_check {
        return board.squares_of(color).any(|from| {
            pseudo_legal_destinations(board, from)
                .any(|to| leaves_king_safe(board, color, king_square, from, to))
        });
    }

    if pseudo_legal_destinations(board, king_square)
        .any(|to| leaves_king_safe(board, color, king_square, king_square, to))
    {
        return true;
    }

    let checkers = reverse_attackers(board, color, king_square);
    let can_reach_safely = |target: Square| {
        board
            .squares_of(color)
            .filter(|&from| from != king_square)
            .any(|from| {
                can_move(board, from, target)
                    && leaves_king_safe(board, color, king_square, from, target)
            })
    };

    for &checker in &checkers {
        if can_reach_safely(checker) {
            return true;
        }
        // A pawn that just double-stepped into check may be taken en passant.
        let piece = board[checker];
        if piece.kind == PieceKind::Pawn {
            let skipped = checker.offset(0, -piece.color.forward());
            let marker = board.get(skipped);
            if marker.is_some_and(|m| m.is_phantom() && m.color == piece.color)
                && can_reach_safely(skipped)
            {
                return true;
            }
        }
    }

    checkers
        .iter()
        .filter(|&&checker| board[checker].kind.is_slider())
        .any(|&checker| squares_between(checker, king_square).any(can_reach_safely))
}
