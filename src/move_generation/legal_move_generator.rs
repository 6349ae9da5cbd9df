//! Full legal move enumeration.
//!
//! Walks every piece of the side to move, expands its pseudo-legal
//! destinations (and promotion choices), and keeps the ones that pass the same
//! rule gates a typed move goes through.

use crate::game_state::chess_rules::{king_home, promotion_rank, PROMOTION_PIECES};
use crate::game_state::chess_types::{CastleSide, MoveStatus, PieceKind};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::is_capture;
use crate::move_generation::move_execution::{render_san, validate_move, ValidatedMove};
use crate::moves::move_descriptions::{MoveDescriptor, FLAG_CAPTURE};
use crate::moves::pseudo_legal::pseudo_legal_destinations;

pub fn generate_legal_moves(game_state: &GameState) -> Vec<ValidatedMove> {
    let color = game_state.side_to_move();
    let board = game_state.board();
    let mut legal = Vec::with_capacity(64);

    for from in board.squares_of(color) {
        let piece = board[from].kind;

        for to in pseudo_legal_destinations(board, from) {
            let mut descriptor = MoveDescriptor::resolved(from, to, piece);
            if is_capture(board, from, to) {
                descriptor = descriptor.with_flags(FLAG_CAPTURE);
            }

            if piece == PieceKind::Pawn && to.rank == promotion_rank(color) {
                for promotion in PROMOTION_PIECES {
                    let promoting = descriptor.with_promotion(promotion);
                    if let Ok(mv) = validate_move(game_state, from, &promoting) {
                        legal.push(mv);
                    }
                }
            } else if let Ok(mv) = validate_move(game_state, from, &descriptor) {
                legal.push(mv);
            }
        }
    }

    for side in [CastleSide::Kingside, CastleSide::Queenside] {
        let descriptor = MoveDescriptor::castle(color, side);
        if let Ok(mv) = validate_move(game_state, king_home(color), &descriptor) {
            legal.push(mv);
        }
    }

    legal
}

/// Notation of every legal move, without check suffixes.
pub fn legal_move_sans(game_state: &GameState) -> Vec<String> {
    generate_legal_moves(game_state)
        .iter()
        .map(|mv| render_san(game_state.board(), mv, MoveStatus::Normal))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{generate_legal_moves, legal_move_sans};
    use crate::game_state::game_state::GameState;
    use crate::move_generation::legal_move_existence::has_legal_move;

    #[test]
    fn twenty_moves_from_the_start() {
        let game = GameState::new_game();
        assert_eq!(generate_legal_moves(&game).len(), 20);

        let sans = legal_move_sans(&game);
        for expected in ["a3", "a4", "e4", "Na3", "Nc3", "Nf3", "Nh3"] {
            assert!(sans.iter().any(|san| san == expected), "{expected}");
        }
    }

    #[test]
    fn promotions_expand_to_four_moves() {
        let game = GameState::from_fen("7k/4P3/8/8/8/8/8/4K3 w - - 0 1").expect("fen");
        let sans = legal_move_sans(&game);
        for expected in ["e8=Q", "e8=R", "e8=B", "e8=N"] {
            assert!(sans.iter().any(|san| san == expected), "{expected}");
        }
        assert!(!sans.iter().any(|san| san == "e8"));
    }

    #[test]
    fn castles_are_enumerated() {
        let game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("fen");
        let sans = legal_move_sans(&game);
        assert!(sans.iter().any(|san| san == "O-O"));
        assert!(sans.iter().any(|san| san == "O-O-O"));
        assert_eq!(sans.len(), 26);
    }

    #[test]
    fn en_passant_is_enumerated() {
        let game =
            GameState::from_fen("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3")
                .expect("fen");
        let moves = generate_legal_moves(&game);
        assert_eq!(moves.iter().filter(|mv| mv.en_passant).count(), 1);
        assert!(legal_move_sans(&game).iter().any(|san| san == "exd6"));
    }

    #[test]
    fn existence_check_agrees_with_enumeration() {
        for fen in [
            "R5k1/5ppp/8/8/8/8/8/4K3 b - - 0 1",
            "7k/8/6Q1/8/8/8/8/5K2 b - - 0 1",
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        ] {
            let game = GameState::from_fen(fen).expect("fen");
            let color = game.side_to_move();
            let king = game.king_square(color);
            assert_eq!(
                has_legal_move(game.board(), color, king, game.check().is_some()),
                !generate_legal_moves(&game).is_empty(),
                "{fen}"
            );
        }
    }
}
