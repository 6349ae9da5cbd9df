//! Terminal-oriented board renderer.
//!
//! Creates a human-readable board view with file and rank labels, using either
//! chess glyphs or FEN letters for terminals without Unicode support.

use crate::game_state::{chess_types::*, game_state::GameState};

/// Board plus a status line naming the side to move and any check.
pub fn render_game_state(game_state: &GameState, unicode: bool) -> String {
    let mut out = render_board(game_state.board(), unicode);
    out.push('\n');

    let to_move = game_state.side_to_move();
    let status = match game_state.status() {
        MoveStatus::Checkmate => format!("{} is checkmated", to_move.name()),
        MoveStatus::Stalemate => format!("{} is stalemated", to_move.name()),
        MoveStatus::Check => format!("{} to move, in check", to_move.name()),
        MoveStatus::Normal => format!("{} to move", to_move.name()),
    };
    out.push_str(&status);

    out
}

/// Render the board with White at the bottom.
pub fn render_board(board: &Board, unicode: bool) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in 0..8i8 {
        let label = char::from(b'8' - rank as u8);
        out.push(label);
        out.push(' ');

        for file in 0..8i8 {
            let piece = board[Square::new(file, rank)];
            out.push(piece_glyph(piece, unicode));

            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(label);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_glyph(piece: Piece, unicode: bool) -> char {
    if !piece.is_real() {
        return if unicode { '·' } else { '.' };
    }

    if !unicode {
        let letter = piece.kind.letter().unwrap_or('P');
        return match piece.color {
            Color::White => letter,
            Color::Black => letter.to_ascii_lowercase(),
        };
    }

    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
        (_, PieceKind::Empty | PieceKind::EnPassantMarker) => '·',
    }
}
