//! Structured move descriptor produced by the notation parser.
//!
//! The source square may be partially unknown (either axis independently)
//! until disambiguation resolves it. Flags record both what the notation
//! claimed (`FLAG_ASSERTED_*`, `FLAG_CAPTURE` on input) and, once a move is
//! executed, what actually happened.

use crate::game_state::chess_rules::{castle_king_target, king_home};
use crate::game_state::chess_types::{CastleSide, Color, PieceKind, Square};

pub type MoveFlags = u8;

pub const FLAG_ASSERTED_CHECK: MoveFlags = 1 << 0;
pub const FLAG_ASSERTED_MATE: MoveFlags = 1 << 1;
pub const FLAG_PROMOTION: MoveFlags = 1 << 2;
pub const FLAG_CASTLE: MoveFlags = 1 << 3;
pub const FLAG_CAPTURE: MoveFlags = 1 << 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveDescriptor {
    pub from_file: Option<i8>,
    pub from_rank: Option<i8>,
    pub to: Square,
    pub piece: PieceKind,
    pub promotion: Option<PieceKind>,
    pub castle: Option<CastleSide>,
    pub flags: MoveFlags,
}

impl MoveDescriptor {
    /// Descriptor for a move whose source is fully known.
    pub fn resolved(from: Square, to: Square, piece: PieceKind) -> Self {
        Self {
            from_file: Some(from.file),
            from_rank: Some(from.rank),
            to,
            piece,
            promotion: None,
            castle: None,
            flags: 0,
        }
    }

    /// Castle for `color`: the king's home square to its castled square.
    pub fn castle(color: Color, side: CastleSide) -> Self {
        let home = king_home(color);
        Self {
            castle: Some(side),
            flags: FLAG_CASTLE,
            ..Self::resolved(home, castle_king_target(color, side), PieceKind::King)
        }
    }

    /// Source square once both axes are known.
    #[inline]
    pub fn source(&self) -> Option<Square> {
        Some(Square::new(self.from_file?, self.from_rank?))
    }

    #[inline]
    pub fn has(&self, flag: MoveFlags) -> bool {
        self.flags & flag != 0
    }

    /// True when `square` satisfies whatever source constraint is known.
    #[inline]
    pub fn source_matches(&self, square: Square) -> bool {
        self.from_file.map_or(true, |file| file == square.file)
            && self.from_rank.map_or(true, |rank| rank == square.rank)
    }

    pub fn with_promotion(mut self, promotion: PieceKind) -> Self {
        self.promotion = Some(promotion);
        self.flags |= FLAG_PROMOTION;
        self
    }

    pub fn with_flags(mut self, flags: MoveFlags) -> Self {
        self.flags |= flags;
        self
    }
}
