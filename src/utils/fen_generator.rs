use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::square_to_algebraic;

pub fn generate_fen(game_state: &GameState) -> String {
    let board = generate_board_field(game_state.board());
    let side_to_move = match game_state.side_to_move() {
        Color::White => "w",
        Color::Black => "b",
    };
    let castling = generate_castling_field(game_state.castling_rights());
    let en_passant = generate_en_passant_field(game_state.board());

    format!(
        "{} {} {} {} {} {}",
        board,
        side_to_move,
        castling,
        en_passant,
        game_state.halfmove_clock(),
        game_state.fullmove_number()
    )
}

fn generate_board_field(board: &Board) -> String {
    let mut out = String::new();

    for rank in 0..8i8 {
        let mut empty_count = 0u8;

        for file in 0..8i8 {
            match piece_to_fen_char(board[Square::new(file, rank)]) {
                Some(ch) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(ch);
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank < 7 {
            out.push('/');
        }
    }

    out
}

/// Phantom markers are written as empty squares; they surface in the
/// en-passant field instead.
fn piece_to_fen_char(piece: Piece) -> Option<char> {
    let base = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
        PieceKind::Empty | PieceKind::EnPassantMarker => return None,
    };

    Some(match piece.color {
        Color::White => base.to_ascii_uppercase(),
        Color::Black => base,
    })
}

fn generate_castling_field(castling_rights: CastlingRights) -> String {
    let mut out = String::new();

    if castling_rights & CASTLE_WHITE_KINGSIDE != 0 {
        out.push('K');
    }
    if castling_rights & CASTLE_WHITE_QUEENSIDE != 0 {
        out.push('Q');
    }
    if castling_rights & CASTLE_BLACK_KINGSIDE != 0 {
        out.push('k');
    }
    if castling_rights & CASTLE_BLACK_QUEENSIDE != 0 {
        out.push('q');
    }

    if out.is_empty() {
        out.push('-');
    }

    out
}

fn generate_en_passant_field(board: &Board) -> String {
    board
        .phantom()
        .and_then(|(square, _)| square_to_algebraic(square).ok())
        .unwrap_or_else(|| "-".to_owned())
}
