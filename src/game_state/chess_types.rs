//! Core value types shared by every engine subsystem.
//!
//! Squares use the internal top-left origin: rank index 0 is the eighth rank
//! (Black's back rank) and rank index 7 is the first rank. Files run a..h as
//! indices 0..7.

pub use crate::game_state::board::Board;
pub use crate::game_state::game_state::GameState;

/// Side of a piece or side to move. The "no color" sentinel is `Option<Color>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank delta of one pawn step for this side.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Human-readable side name; `None` for the no-color sentinel.
#[inline]
pub fn color_name(color: Option<Color>) -> Option<&'static str> {
    color.map(Color::name)
}

/// Contents kind of a square.
///
/// `EnPassantMarker` is the phantom pawn left on the square a pawn skipped over
/// with a two-square advance. It only matters to an enemy pawn's diagonal
/// capture and is otherwise treated as an empty square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Empty,
    EnPassantMarker,
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Rook | PieceKind::Bishop | PieceKind::Queen)
    }

    /// Notation letter for real pieces. Pawns, empties and markers have none.
    #[inline]
    pub const fn letter(self) -> Option<char> {
        match self {
            PieceKind::Rook => Some('R'),
            PieceKind::Knight => Some('N'),
            PieceKind::Bishop => Some('B'),
            PieceKind::Queen => Some('Q'),
            PieceKind::King => Some('K'),
            _ => None,
        }
    }

    #[inline]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'R' => Some(PieceKind::Rook),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// Content of one board square. The color of an `Empty` square is stored as
/// White and carries no meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub const EMPTY: Piece = Piece {
        kind: PieceKind::Empty,
        color: Color::White,
    };

    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    #[inline]
    pub const fn phantom(color: Color) -> Self {
        Self {
            kind: PieceKind::EnPassantMarker,
            color,
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.kind == PieceKind::Empty
    }

    #[inline]
    pub fn is_phantom(self) -> bool {
        self.kind == PieceKind::EnPassantMarker
    }

    /// True for an actual chessman: neither empty nor a phantom marker.
    #[inline]
    pub fn is_real(self) -> bool {
        !self.is_empty() && !self.is_phantom()
    }

    #[inline]
    pub fn is(self, kind: PieceKind, color: Color) -> bool {
        self.kind == kind && self.color == color
    }
}

/// A board coordinate. Producers do not guarantee bounds; check with
/// [`Square::in_bounds`] before indexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub file: i8,
    pub rank: i8,
}

impl Square {
    #[inline]
    pub const fn new(file: i8, rank: i8) -> Self {
        Self { file, rank }
    }

    #[inline]
    pub const fn in_bounds(self) -> bool {
        self.file >= 0 && self.file < 8 && self.rank >= 0 && self.rank < 8
    }

    #[inline]
    pub const fn offset(self, d_file: i8, d_rank: i8) -> Self {
        Self {
            file: self.file + d_file,
            rank: self.rank + d_rank,
        }
    }

    /// Absolute (file, rank) distance to `other`.
    #[inline]
    pub fn delta(self, other: Square) -> (i8, i8) {
        ((other.file - self.file).abs(), (other.rank - self.rank).abs())
    }

    /// Iterates all 64 squares, top rank first.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8i8).flat_map(|rank| (0..8i8).map(move |file| Square::new(file, rank)))
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.in_bounds() {
            return write!(f, "({}, {})", self.file, self.rank);
        }
        write!(
            f,
            "{}{}",
            char::from(b'a' + self.file as u8),
            char::from(b'8' - self.rank as u8)
        )
    }
}

/// Which rook a castling move uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

/// Castling rights bitmask. Bits are only ever cleared during play.
pub type CastlingRights = u8;

pub const CASTLE_WHITE_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_WHITE_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_BLACK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_BLACK_QUEENSIDE: CastlingRights = 1 << 3;
pub const CASTLE_ALL: CastlingRights =
    CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE | CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE;

#[inline]
pub const fn castling_right(color: Color, side: CastleSide) -> CastlingRights {
    match (color, side) {
        (Color::White, CastleSide::Kingside) => CASTLE_WHITE_KINGSIDE,
        (Color::White, CastleSide::Queenside) => CASTLE_WHITE_QUEENSIDE,
        (Color::Black, CastleSide::Kingside) => CASTLE_BLACK_KINGSIDE,
        (Color::Black, CastleSide::Queenside) => CASTLE_BLACK_QUEENSIDE,
    }
}

#[inline]
pub const fn castling_rights_of(color: Color) -> CastlingRights {
    castling_right(color, CastleSide::Kingside) | castling_right(color, CastleSide::Queenside)
}

/// Outcome of a successfully applied move, from the point of view of the side
/// that must reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveStatus {
    Normal,
    Check,
    Checkmate,
    Stalemate,
}

impl MoveStatus {
    /// Numeric protocol code: 0 normal, 1 check, 2 checkmate, 3 stalemate.
    #[inline]
    pub const fn code(self) -> i8 {
        match self {
            MoveStatus::Normal => 0,
            MoveStatus::Check => 1,
            MoveStatus::Checkmate => 2,
            MoveStatus::Stalemate => 3,
        }
    }

    #[inline]
    pub const fn is_game_over(self) -> bool {
        matches!(self, MoveStatus::Checkmate | MoveStatus::Stalemate)
    }
}

impl std::fmt::Display for MoveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            MoveStatus::Normal => "no check",
            MoveStatus::Check => "check",
            MoveStatus::Checkmate => "checkmate",
            MoveStatus::Stalemate => "stalemate",
        })
    }
}
