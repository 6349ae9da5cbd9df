//! Move orchestration: parse, resolve, validate, classify, commit.
//!
//! Each gate works on copies of the position; only [`commit`] writes to the
//! game state, so any rejection leaves it untouched.

use tracing::{debug, info};

use crate::chess_errors::{IllegalReason, MoveError};
use crate::game_state::chess_rules::{
    castle_king_target, castle_rook_target, king_home, promotion_rank, rook_home,
    PROMOTION_PIECES,
};
use crate::game_state::chess_types::{
    castling_right, castling_rights_of, Board, CastleSide, CastlingRights, Color, MoveStatus,
    Piece, PieceKind, Square,
};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{apply_castle_to_board, apply_move_to_board};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_existence::has_legal_move;
use crate::moves::line_of_sight::path_is_clear;
use crate::moves::move_descriptions::{
    MoveDescriptor, FLAG_ASSERTED_CHECK, FLAG_ASSERTED_MATE, FLAG_CAPTURE,
};
use crate::utils::san_parser::{parse_san, resolve_source};
use crate::utils::san_writer::{write_castle, write_san};

/// A move that passed every rule gate, with the position it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedMove {
    pub from: Square,
    pub to: Square,
    pub mover: Piece,
    pub promotion: Option<PieceKind>,
    pub castle: Option<CastleSide>,
    pub captured: bool,
    pub en_passant: bool,
    pub board: Board,
}

/// Runs a notation token through every gate and commits it on success.
pub fn play_move(state: &mut GameState, notation: &str) -> Result<MoveStatus, MoveError> {
    let color = state.side_to_move;
    let descriptor =
        parse_san(notation, color).inspect_err(|err| debug!(notation, %err, "rejected"))?;

    let from = match descriptor.castle {
        Some(_) => king_home(color),
        None => resolve_source(&state.board, color, &descriptor, notation)?,
    };

    let validated = validate_move(state, from, &descriptor)
        .inspect_err(|err| debug!(notation, %err, "rejected"))?;
    let status = classify(state, &validated);
    check_promise(&descriptor, status).inspect_err(|err| debug!(notation, %err, "rejected"))?;

    let san = commit(state, validated, status);
    debug!(notation, san = %san, code = status.code(), "move played");
    match status {
        MoveStatus::Checkmate => info!(winner = %color, "checkmate"),
        MoveStatus::Stalemate => info!("stalemate"),
        _ => {}
    }
    Ok(status)
}

/// Checks every rule gate for the piece on `from` playing `descriptor`.
///
/// `from` must hold a piece of the side to move that can pseudo-legally reach
/// the destination, as produced by source resolution or move enumeration.
pub fn validate_move(
    state: &GameState,
    from: Square,
    descriptor: &MoveDescriptor,
) -> Result<ValidatedMove, MoveError> {
    let color = state.side_to_move;
    if let Some(side) = descriptor.castle {
        return validate_castle(state, color, side);
    }

    let board = &state.board;
    let to = descriptor.to;
    let mover = board[from];

    match descriptor.promotion {
        Some(_) if mover.kind != PieceKind::Pawn => {
            return Err(IllegalReason::PromotionNotPawn.into());
        }
        Some(_) if to.rank != promotion_rank(color) => {
            return Err(IllegalReason::PromotionWrongRank.into());
        }
        Some(kind) if !PROMOTION_PIECES.contains(&kind) => {
            return Err(IllegalReason::InvalidPromotionPiece.into());
        }
        None if mover.kind == PieceKind::Pawn && to.rank == promotion_rank(color) => {
            return Err(IllegalReason::PromotionRequired.into());
        }
        _ => {}
    }

    let mut applied = apply_move_to_board(board, from, to);
    if let Some(kind) = descriptor.promotion {
        applied.board[to] = Piece::new(kind, color);
    }

    let declared = descriptor.has(FLAG_CAPTURE);
    if declared && !applied.captured {
        return Err(IllegalReason::CaptureMarkerWithoutCapture.into());
    }
    if applied.captured && !declared {
        return Err(IllegalReason::CaptureWithoutMarker.into());
    }

    let king = if mover.kind == PieceKind::King {
        to
    } else {
        state.king_square(color)
    };
    if is_square_attacked(&applied.board, king, color.opposite()) {
        return Err(IllegalReason::KingLeftInCheck.into());
    }

    Ok(ValidatedMove {
        from,
        to,
        mover,
        promotion: descriptor.promotion,
        castle: None,
        captured: applied.captured,
        en_passant: applied.captured && !board[to].is_real(),
        board: applied.board,
    })
}

fn validate_castle(
    state: &GameState,
    color: Color,
    side: CastleSide,
) -> Result<ValidatedMove, MoveError> {
    let board = &state.board;
    let enemy = color.opposite();
    let king_from = king_home(color);
    let rook_from = rook_home(color, side);

    let pieces_home = board[king_from].is(PieceKind::King, color)
        && board[rook_from].is(PieceKind::Rook, color);
    if state.castling_rights & castling_right(color, side) == 0 || !pieces_home {
        return Err(IllegalReason::CastlingRightRevoked.into());
    }
    if !path_is_clear(board, king_from, rook_from) {
        return Err(IllegalReason::CastlingPathBlocked.into());
    }
    if is_square_attacked(board, king_from, enemy) {
        return Err(IllegalReason::CastlingOutOfCheck.into());
    }
    // The king crosses the square its rook lands on.
    if is_square_attacked(board, castle_rook_target(color, side), enemy) {
        return Err(IllegalReason::CastlingThroughCheck.into());
    }

    let king_to = castle_king_target(color, side);
    let castled = apply_castle_to_board(board, color, side);
    if is_square_attacked(&castled, king_to, enemy) {
        return Err(IllegalReason::KingLeftInCheck.into());
    }

    Ok(ValidatedMove {
        from: king_from,
        to: king_to,
        mover: board[king_from],
        promotion: None,
        castle: Some(side),
        captured: false,
        en_passant: false,
        board: castled,
    })
}

/// Status of the position after `mv`, seen from the side that must reply.
pub fn classify(state: &GameState, mv: &ValidatedMove) -> MoveStatus {
    let mover = mv.mover.color;
    let opponent = mover.opposite();
    let opponent_king = state.king_square(opponent);
    let in_check = is_square_attacked(&mv.board, opponent_king, mover);
    let can_reply = has_legal_move(&mv.board, opponent, opponent_king, in_check);
    match (in_check, can_reply) {
        (true, true) => MoveStatus::Check,
        (true, false) => MoveStatus::Checkmate,
        (false, true) => MoveStatus::Normal,
        (false, false) => MoveStatus::Stalemate,
    }
}

/// Rejects a `+` or `#` suffix that the computed status does not support.
pub fn check_promise(descriptor: &MoveDescriptor, status: MoveStatus) -> Result<(), MoveError> {
    let claimed = if descriptor.has(FLAG_ASSERTED_MATE) {
        MoveStatus::Checkmate
    } else if descriptor.has(FLAG_ASSERTED_CHECK) {
        MoveStatus::Check
    } else {
        return Ok(());
    };

    let kept = match claimed {
        MoveStatus::Checkmate => status == MoveStatus::Checkmate,
        _ => matches!(status, MoveStatus::Check | MoveStatus::Checkmate),
    };
    if kept {
        Ok(())
    } else {
        Err(MoveError::PromiseMismatch {
            claimed,
            actual: status,
        })
    }
}

/// Notation for `mv` as played from `board`.
pub fn render_san(board: &Board, mv: &ValidatedMove, status: MoveStatus) -> String {
    match mv.castle {
        Some(side) => write_castle(side, status),
        None => write_san(board, mv.from, mv.to, mv.promotion, mv.captured, status),
    }
}

/// Castling rights left after a move from `from` to `to` by `mover`.
///
/// A king move clears both of its side's rights; a move out of a rook corner
/// clears that corner's right; landing on an enemy rook corner clears the
/// enemy's right there.
pub fn revoke_castling_rights(
    rights: CastlingRights,
    mover: Piece,
    from: Square,
    to: Square,
) -> CastlingRights {
    let mut rights = rights;
    if mover.kind == PieceKind::King {
        rights &= !castling_rights_of(mover.color);
    }
    for color in [Color::White, Color::Black] {
        for side in [CastleSide::Kingside, CastleSide::Queenside] {
            let corner = rook_home(color, side);
            if from == corner || to == corner {
                rights &= !castling_right(color, side);
            }
        }
    }
    rights
}

/// Writes a validated move into the game state and returns its notation.
pub fn commit(state: &mut GameState, mv: ValidatedMove, status: MoveStatus) -> String {
    let color = mv.mover.color;
    let san = render_san(&state.board, &mv, status);

    state.castling_rights = revoke_castling_rights(state.castling_rights, mv.mover, mv.from, mv.to);
    if mv.mover.kind == PieceKind::King {
        state.king_squares[color.index()] = mv.to;
    }
    if mv.mover.kind == PieceKind::Pawn || mv.captured {
        state.halfmove_clock = 0;
    } else {
        state.halfmove_clock = state.halfmove_clock.saturating_add(1);
    }

    state.history.record(color, state.fullmove_number, &san);
    if color == Color::Black {
        state.fullmove_number = state.fullmove_number.saturating_add(1);
    }

    state.board = mv.board;
    state.side_to_move = color.opposite();
    state.check = matches!(status, MoveStatus::Check | MoveStatus::Checkmate)
        .then_some(color.opposite());
    state.status = status;
    san
}

#[cfg(test)]
mod tests {
    use super::{check_promise, revoke_castling_rights};
    use crate::chess_errors::{IllegalReason, MoveError};
    use crate::game_state::chess_types::{
        Color, MoveStatus, Piece, PieceKind, Square, CASTLE_ALL, CASTLE_BLACK_KINGSIDE,
        CASTLE_BLACK_QUEENSIDE, CASTLE_WHITE_KINGSIDE, CASTLE_WHITE_QUEENSIDE,
    };
    use crate::game_state::game_state::GameState;
    use crate::moves::move_descriptions::{MoveDescriptor, FLAG_ASSERTED_CHECK, FLAG_ASSERTED_MATE};

    fn play_all(state: &mut GameState, moves: &[&str]) {
        for notation in moves {
            state
                .play_move(notation)
                .unwrap_or_else(|err| panic!("{notation} rejected: {err}"));
        }
    }

    #[test]
    fn fools_mate_is_checkmate() {
        let mut state = GameState::new_game();
        play_all(&mut state, &["f3", "e5", "g4"]);
        assert_eq!(state.play_move("Qh4#"), Ok(MoveStatus::Checkmate));
        assert_eq!(state.check(), Some(Color::White));
        assert_eq!(state.status(), MoveStatus::Checkmate);
        assert_eq!(state.history().as_str(), "1. f3 e5 2. g4 Qh4#");
    }

    #[test]
    fn castling_through_pieces_is_blocked() {
        let mut state = GameState::new_game();
        let before = state.clone();
        assert_eq!(
            state.play_move("O-O"),
            Err(MoveError::Illegal(IllegalReason::CastlingPathBlocked))
        );
        assert_eq!(state, before);
    }

    #[test]
    fn false_check_claim_is_a_promise_mismatch() {
        let mut state = GameState::new_game();
        assert_eq!(
            state.play_move("e4+"),
            Err(MoveError::PromiseMismatch {
                claimed: MoveStatus::Check,
                actual: MoveStatus::Normal
            })
        );
        assert_eq!(state.side_to_move(), Color::White);
        assert!(state.history().is_empty());
    }

    #[test]
    fn closed_queen_line_means_no_piece_available() {
        let mut state = GameState::new_game();
        play_all(&mut state, &["e4", "e5"]);
        assert_eq!(state.play_move("Qd3"), Err(MoveError::NoPieceAvailable("Qd3".into())));
        // The d1-h5 diagonal is open after e4.
        assert_eq!(state.play_move("Qh5"), Ok(MoveStatus::Normal));
    }

    #[test]
    fn pawn_reaching_last_rank_must_promote() {
        let mut state = GameState::from_fen("7k/4P3/8/8/8/8/8/4K3 w - - 0 1").expect("fen");
        assert_eq!(
            state.play_move("e8"),
            Err(MoveError::Illegal(IllegalReason::PromotionRequired))
        );
        assert_eq!(
            state.play_move("e8=K"),
            Err(MoveError::Illegal(IllegalReason::InvalidPromotionPiece))
        );
        assert_eq!(state.play_move("e8=Q+"), Ok(MoveStatus::Check));
        assert_eq!(state.board()[Square::new(4, 0)], Piece::new(PieceKind::Queen, Color::White));
        assert_eq!(state.history().as_str(), "1. e8=Q+");
    }

    #[test]
    fn promotion_gates_reject_wrong_piece_and_rank() {
        let mut state = GameState::from_fen("7k/8/8/8/8/8/4P3/4K1N1 w - - 0 1").expect("fen");
        assert_eq!(
            state.play_move("e4=Q"),
            Err(MoveError::Illegal(IllegalReason::PromotionWrongRank))
        );
        assert_eq!(
            state.play_move("Nf3=Q"),
            Err(MoveError::Illegal(IllegalReason::PromotionNotPawn))
        );
    }

    #[test]
    fn capture_marker_must_match_reality() {
        let mut state = GameState::new_game();
        play_all(&mut state, &["e4", "d5"]);
        assert_eq!(
            state.play_move("ed5"),
            Err(MoveError::Illegal(IllegalReason::CaptureWithoutMarker))
        );
        assert_eq!(
            state.play_move("Nxf3"),
            Err(MoveError::Illegal(IllegalReason::CaptureMarkerWithoutCapture))
        );
        assert_eq!(state.play_move("exd5"), Ok(MoveStatus::Normal));
    }

    #[test]
    fn en_passant_capture_through_notation() {
        let mut state = GameState::new_game();
        play_all(&mut state, &["e4", "a6", "e5", "d5"]);
        assert_eq!(state.play_move("exd6"), Ok(MoveStatus::Normal));
        assert!(state.board()[Square::new(3, 3)].is_empty());
        assert!(state.board()[Square::new(3, 2)].is(PieceKind::Pawn, Color::White));
        assert_eq!(state.board().phantom(), None);
    }

    #[test]
    fn en_passant_expires_after_one_move() {
        let mut state = GameState::new_game();
        play_all(&mut state, &["e4", "a6", "e5", "d5", "Nf3", "h6"]);
        assert_eq!(
            state.play_move("exd6"),
            Err(MoveError::NoPieceAvailable("exd6".into()))
        );
    }

    #[test]
    fn kingside_castle_moves_rook_and_clears_rights() {
        let mut state = GameState::new_game();
        play_all(&mut state, &["e4", "e5", "Nf3", "Nf6", "Bc4", "Bc5"]);
        assert_eq!(state.play_move("O-O"), Ok(MoveStatus::Normal));
        assert!(state.board()[Square::new(6, 7)].is(PieceKind::King, Color::White));
        assert!(state.board()[Square::new(5, 7)].is(PieceKind::Rook, Color::White));
        assert_eq!(state.king_square(Color::White), Square::new(6, 7));
        assert_eq!(state.castling_rights() & (CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE), 0);
        assert_eq!(state.play_move("0-0"), Ok(MoveStatus::Normal));
        assert_eq!(state.history().as_str(), "1. e4 e5 2. Nf3 Nf6 3. Bc4 Bc5 4. O-O O-O");
    }

    #[test]
    fn castling_gates_in_order() {
        // Black rook on f8 covers f1; the white king is otherwise free to castle.
        let mut state = GameState::from_fen("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1").expect("fen");
        assert_eq!(
            state.clone().play_move("O-O"),
            Err(MoveError::Illegal(IllegalReason::CastlingThroughCheck))
        );
        assert_eq!(state.play_move("O-O-O"), Ok(MoveStatus::Normal));

        let mut state = GameState::from_fen("4k3/8/8/8/8/8/8/R3K2r w Q - 0 1").expect("fen");
        assert_eq!(
            state.play_move("O-O-O"),
            Err(MoveError::Illegal(IllegalReason::CastlingOutOfCheck))
        );

        let mut state = GameState::from_fen("4k3/8/8/8/8/8/8/R3K2R w Q - 0 1").expect("fen");
        assert_eq!(
            state.play_move("O-O"),
            Err(MoveError::Illegal(IllegalReason::CastlingRightRevoked))
        );
    }

    #[test]
    fn moving_into_check_is_illegal() {
        let mut state = GameState::from_fen("4k3/8/8/8/8/8/4r3/4K3 w - - 0 1").expect("fen");
        assert_eq!(state.play_move("Kd1"), Ok(MoveStatus::Normal));
        let mut state = GameState::from_fen("4k3/8/8/8/8/8/3r4/4K3 w - - 0 1").expect("fen");
        assert_eq!(
            state.play_move("Ke2"),
            Err(MoveError::Illegal(IllegalReason::KingLeftInCheck))
        );
    }

    #[test]
    fn ambiguous_knights_need_a_hint() {
        let mut state = GameState::from_fen("4k3/8/8/8/8/8/8/1N2KN2 w - - 0 1").expect("fen");
        assert_eq!(state.play_move("Nd2"), Err(MoveError::Ambiguous("Nd2".into())));
        assert_eq!(state.play_move("Nfd2"), Ok(MoveStatus::Normal));
        assert_eq!(state.history().as_str(), "1. Nfd2");
    }

    #[test]
    fn stalemate_is_reported() {
        let mut state = GameState::from_fen("7k/8/5K2/8/8/8/8/6Q1 w - - 0 1").expect("fen");
        assert_eq!(state.play_move("Qg6"), Ok(MoveStatus::Stalemate));
        assert_eq!(state.check(), None);
    }

    #[test]
    fn promise_rules() {
        let check = MoveDescriptor::resolved(Square::new(0, 0), Square::new(0, 1), PieceKind::Rook)
            .with_flags(FLAG_ASSERTED_CHECK);
        assert!(check_promise(&check, MoveStatus::Check).is_ok());
        assert!(check_promise(&check, MoveStatus::Checkmate).is_ok());
        assert!(check_promise(&check, MoveStatus::Stalemate).is_err());

        let mate = check.with_flags(FLAG_ASSERTED_MATE);
        assert!(check_promise(&mate, MoveStatus::Check).is_err());
    }

    #[test]
    fn rook_corner_moves_and_captures_revoke_rights() {
        let rook = Piece::new(PieceKind::Rook, Color::White);
        let after = revoke_castling_rights(CASTLE_ALL, rook, Square::new(7, 7), Square::new(7, 4));
        assert_eq!(after, CASTLE_ALL & !CASTLE_WHITE_KINGSIDE);

        let bishop = Piece::new(PieceKind::Bishop, Color::White);
        let after = revoke_castling_rights(CASTLE_ALL, bishop, Square::new(1, 6), Square::new(7, 0));
        assert_eq!(after, CASTLE_ALL & !CASTLE_BLACK_KINGSIDE);

        let king = Piece::new(PieceKind::King, Color::Black);
        let after = revoke_castling_rights(CASTLE_ALL, king, Square::new(4, 0), Square::new(3, 0));
        assert_eq!(after, CASTLE_ALL & !(CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE));
    }
}
