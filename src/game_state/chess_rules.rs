//! Canonical chess-rule constants.
//!
//! Static rule literals: the standard starting position and the fixed squares
//! that pawn double steps, promotion and castling are defined against, all in
//! internal top-left coordinates.

use crate::game_state::chess_types::{CastleSide, Color, PieceKind, Square};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub const KING_HOME_FILE: i8 = 4;

/// Rank index holding this side's major pieces at the start.
#[inline]
pub const fn back_rank(color: Color) -> i8 {
    match color {
        Color::White => 7,
        Color::Black => 0,
    }
}

/// Rank index pawns start on; the only rank a double step may begin from.
#[inline]
pub const fn pawn_home_rank(color: Color) -> i8 {
    match color {
        Color::White => 6,
        Color::Black => 1,
    }
}

/// Far rank a pawn of this side promotes on.
#[inline]
pub const fn promotion_rank(color: Color) -> i8 {
    back_rank(color.opposite())
}

#[inline]
pub const fn king_home(color: Color) -> Square {
    Square::new(KING_HOME_FILE, back_rank(color))
}

#[inline]
pub const fn rook_home(color: Color, side: CastleSide) -> Square {
    match side {
        CastleSide::Kingside => Square::new(7, back_rank(color)),
        CastleSide::Queenside => Square::new(0, back_rank(color)),
    }
}

/// Where the king lands when castling.
#[inline]
pub const fn castle_king_target(color: Color, side: CastleSide) -> Square {
    match side {
        CastleSide::Kingside => Square::new(6, back_rank(color)),
        CastleSide::Queenside => Square::new(2, back_rank(color)),
    }
}

/// Where the rook lands when castling.
#[inline]
pub const fn castle_rook_target(color: Color, side: CastleSide) -> Square {
    match side {
        CastleSide::Kingside => Square::new(5, back_rank(color)),
        CastleSide::Queenside => Square::new(3, back_rank(color)),
    }
}

/// Pieces a pawn may promote to.
pub const PROMOTION_PIECES: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];
