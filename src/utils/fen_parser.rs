//! FEN-to-GameState parser.
//!
//! Builds a fully-populated game state from a Forsyth-Edwards Notation
//! string: board, side, castling rights, en-passant marker and clocks, plus
//! the derived check flag, king cache and status.

use crate::chess_errors::FenError;
use crate::game_state::chess_rules::{king_home, pawn_home_rank, rook_home, STARTING_POSITION_FEN};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_existence::has_legal_move;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> Result<GameState, FenError> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or(FenError::MissingField("board layout"))?;
    let side_part = parts.next().ok_or(FenError::MissingField("side to move"))?;
    let castling_part = parts.next().ok_or(FenError::MissingField("castling rights"))?;
    let en_passant_part = parts.next().ok_or(FenError::MissingField("en-passant square"))?;
    let halfmove_part = parts.next().ok_or(FenError::MissingField("halfmove clock"))?;
    let fullmove_part = parts.next().ok_or(FenError::MissingField("fullmove number"))?;

    if parts.next().is_some() {
        return Err(FenError::TrailingFields);
    }

    let mut game_state = GameState::new_game();
    game_state.board = parse_board(board_part)?;
    game_state.side_to_move = parse_side_to_move(side_part)?;

    let white_king = find_single_king(&game_state.board, Color::White)?;
    let black_king = find_single_king(&game_state.board, Color::Black)?;
    game_state.king_squares = [white_king, black_king];

    game_state.castling_rights =
        parse_castling_rights(castling_part)? & castling_rights_in_place(&game_state.board);
    place_en_passant_marker(en_passant_part, game_state.side_to_move, &mut game_state.board)?;

    game_state.halfmove_clock = halfmove_part
        .parse::<u16>()
        .map_err(|_| FenError::InvalidCounter(halfmove_part.to_owned()))?;
    game_state.fullmove_number = fullmove_part
        .parse::<u16>()
        .map_err(|_| FenError::InvalidCounter(fullmove_part.to_owned()))?;

    let color = game_state.side_to_move;
    if is_square_attacked(&game_state.board, game_state.king_square(color.opposite()), color) {
        return Err(FenError::OpponentInCheck(color.opposite().name()));
    }

    let king = game_state.king_square(color);
    let in_check = is_square_attacked(&game_state.board, king, color.opposite());
    let can_move = has_legal_move(&game_state.board, color, king, in_check);
    game_state.check = in_check.then_some(color);
    game_state.status = match (in_check, can_move) {
        (true, true) => MoveStatus::Check,
        (true, false) => MoveStatus::Checkmate,
        (false, true) => MoveStatus::Normal,
        (false, false) => MoveStatus::Stalemate,
    };

    if game_state.get_fen() != STARTING_POSITION_FEN {
        game_state.start_fen = Some(game_state.get_fen());
    }

    Ok(game_state)
}

fn parse_board(board_part: &str) -> Result<Board, FenError> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::RankCount(ranks.len()));
    }

    let mut board = Board::empty();
    // FEN lists the eighth rank first, which is internal rank index 0.
    for (rank, rank_str) in ranks.iter().enumerate() {
        let mut file = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(FenError::InvalidPiece(ch));
                }
                file += empty_count as usize;
                continue;
            }

            let piece = piece_from_fen_char(ch).ok_or(FenError::InvalidPiece(ch))?;
            if file >= 8 {
                return Err(FenError::FileCount { rank: 8 - rank });
            }
            board[Square::new(file as i8, rank as i8)] = piece;
            file += 1;
        }

        if file != 8 {
            return Err(FenError::FileCount { rank: 8 - rank });
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> Result<Color, FenError> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(FenError::InvalidSide(side_part.to_owned())),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, FenError> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;

    for ch in castling_part.chars() {
        match ch {
            'K' => rights |= CASTLE_WHITE_KINGSIDE,
            'Q' => rights |= CASTLE_WHITE_QUEENSIDE,
            'k' => rights |= CASTLE_BLACK_KINGSIDE,
            'q' => rights |= CASTLE_BLACK_QUEENSIDE,
            _ => return Err(FenError::InvalidCastling(castling_part.to_owned())),
        }
    }

    Ok(rights)
}

/// Rights whose king and rook actually stand on their home squares.
fn castling_rights_in_place(board: &Board) -> CastlingRights {
    let mut rights = 0;
    for color in [Color::White, Color::Black] {
        if !board[king_home(color)].is(PieceKind::King, color) {
            continue;
        }
        for side in [CastleSide::Kingside, CastleSide::Queenside] {
            if board[rook_home(color, side)].is(PieceKind::Rook, color) {
                rights |= castling_right(color, side);
            }
        }
    }
    rights
}

/// The en-passant square becomes a phantom marker owned by the side that
/// just moved, on the rank its pawn skipped. That pawn must stand right in
/// front of the marker.
fn place_en_passant_marker(
    en_passant_part: &str,
    side_to_move: Color,
    board: &mut Board,
) -> Result<(), FenError> {
    if en_passant_part == "-" {
        return Ok(());
    }

    let invalid = || FenError::InvalidEnPassant(en_passant_part.to_owned());
    let square = algebraic_to_square(en_passant_part).map_err(|_| invalid())?;
    let owner = side_to_move.opposite();
    let skipped_rank = pawn_home_rank(owner) + owner.forward();
    if square.rank != skipped_rank || board.is_occupied(square) {
        return Err(invalid());
    }
    let pawn_behind = board
        .get(square.offset(0, owner.forward()))
        .is_some_and(|piece| piece.is(PieceKind::Pawn, owner));
    if !pawn_behind {
        return Err(invalid());
    }

    board[square] = Piece::phantom(owner);
    Ok(())
}

fn find_single_king(board: &Board, color: Color) -> Result<Square, FenError> {
    if board.count(PieceKind::King, color) != 1 {
        return Err(FenError::KingCount(color.name()));
    }
    board.find_king(color).ok_or(FenError::KingCount(color.name()))
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(kind, color))
}
