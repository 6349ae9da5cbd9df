//! Renders an already-validated move back into minimal algebraic notation.

use crate::game_state::chess_types::{Board, CastleSide, MoveStatus, PieceKind, Square};
use crate::moves::pseudo_legal::can_move;
use crate::utils::algebraic::{file_to_char, rank_to_char};

/// Source-square hint needed to tell `from` apart from every other piece of
/// the same kind and color that could also reach `to` on `board`.
///
/// No rival: nothing. Otherwise the file when no rival shares it, else the
/// rank when no rival shares that, else both.
fn disambiguation(board: &Board, from: Square, to: Square) -> String {
    let mover = board[from];
    let rivals: Vec<Square> = board
        .squares_of(mover.color)
        .filter(|&sq| sq != from && board[sq].kind == mover.kind && can_move(board, sq, to))
        .collect();

    if rivals.is_empty() {
        return String::new();
    }
    if rivals.iter().all(|sq| sq.file != from.file) {
        return file_to_char(from.file).to_string();
    }
    if rivals.iter().all(|sq| sq.rank != from.rank) {
        return rank_to_char(from.rank).to_string();
    }
    format!("{}{}", file_to_char(from.file), rank_to_char(from.rank))
}

/// Notation for a castle with its result suffix.
pub fn write_castle(side: CastleSide, status: MoveStatus) -> String {
    let mut out = match side {
        CastleSide::Kingside => "O-O".to_owned(),
        CastleSide::Queenside => "O-O-O".to_owned(),
    };
    out.push_str(status_suffix(status));
    out
}

/// Notation for a non-castling move, computed against the board *before* the
/// move. Pawn captures always carry the source file.
pub fn write_san(
    board: &Board,
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
    captured: bool,
    status: MoveStatus,
) -> String {
    let mover = board[from];
    let mut out = String::with_capacity(8);

    match mover.kind.letter() {
        Some(letter) => {
            out.push(letter);
            out.push_str(&disambiguation(board, from, to));
        }
        None if captured => out.push(file_to_char(from.file)),
        None => {}
    }

    if captured {
        out.push('x');
    }
    out.push(file_to_char(to.file));
    out.push(rank_to_char(to.rank));

    if let Some(letter) = promotion.and_then(PieceKind::letter) {
        out.push('=');
        out.push(letter);
    }
    out.push_str(status_suffix(status));
    out
}

#[inline]
fn status_suffix(status: MoveStatus) -> &'static str {
    match status {
        MoveStatus::Check => "+",
        MoveStatus::Checkmate => "#",
        MoveStatus::Normal | MoveStatus::Stalemate => "",
    }
}
