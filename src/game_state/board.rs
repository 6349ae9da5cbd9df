//! Mailbox board: an 8x8 grid of [`Piece`] values.
//!
//! The board is a plain `Copy` value so validation can always work on a
//! throwaway copy and commit with a single assignment.

use std::ops::{Index, IndexMut};

use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

const BACK_ROW: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Grid indexed `[rank][file]` with rank 0 at the top (Black's side).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Piece; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            cells: [[Piece::EMPTY; 8]; 8],
        }
    }

    /// Standard initial arrangement.
    pub fn starting() -> Self {
        let mut board = Self::empty();
        for file in 0..8usize {
            board.cells[0][file] = Piece::new(BACK_ROW[file], Color::Black);
            board.cells[1][file] = Piece::new(PieceKind::Pawn, Color::Black);
            board.cells[6][file] = Piece::new(PieceKind::Pawn, Color::White);
            board.cells[7][file] = Piece::new(BACK_ROW[file], Color::White);
        }
        board
    }

    /// Bounds-checked read.
    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        square
            .in_bounds()
            .then(|| self.cells[square.rank as usize][square.file as usize])
    }

    /// True when the square holds a real piece (markers do not occupy).
    #[inline]
    pub fn is_occupied(&self, square: Square) -> bool {
        self.get(square).is_some_and(Piece::is_real)
    }

    /// Removes every phantom marker on the board.
    pub fn purge_phantoms(&mut self) {
        for cell in self.cells.iter_mut().flatten() {
            if cell.is_phantom() {
                *cell = Piece::EMPTY;
            }
        }
    }

    /// The phantom marker currently on the board, if any.
    pub fn phantom(&self) -> Option<(Square, Color)> {
        Square::all().find_map(|sq| {
            let piece = self[sq];
            piece.is_phantom().then_some((sq, piece.color))
        })
    }

    /// Squares holding real pieces of `color`, top rank first.
    pub fn squares_of(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(move |sq| {
            let piece = self[*sq];
            piece.is_real() && piece.color == color
        })
    }

    /// Linear scan for a king. Only used when a position is set up; during
    /// play the game state keeps its own king cache.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        Square::all().find(|sq| self[*sq].is(PieceKind::King, color))
    }

    pub fn count(&self, kind: PieceKind, color: Color) -> usize {
        Square::all().filter(|sq| self[*sq].is(kind, color)).count()
    }
}

impl Index<Square> for Board {
    type Output = Piece;

    #[inline]
    fn index(&self, square: Square) -> &Piece {
        &self.cells[square.rank as usize][square.file as usize]
    }
}

impl IndexMut<Square> for Board {
    #[inline]
    fn index_mut(&mut self, square: Square) -> &mut Piece {
        &mut self.cells[square.rank as usize][square.file as usize]
    }
}
