//! Line walking between two colinear squares.
//!
//! Both helpers must only be called with squares that share a rank, a file or
//! a diagonal; the walk steps one square per iteration toward the target and
//! would never reach it otherwise.

use crate::game_state::chess_types::{Board, Square};

/// Unit step from `from` toward `to` on each axis.
#[inline]
fn step(from: Square, to: Square) -> (i8, i8) {
    ((to.file - from.file).signum(), (to.rank - from.rank).signum())
}

/// True when the two squares share a rank, a file or a diagonal.
#[inline]
pub fn is_colinear(from: Square, to: Square) -> bool {
    let (d_file, d_rank) = from.delta(to);
    from != to && (d_file == 0 || d_rank == 0 || d_file == d_rank)
}

/// Squares strictly between `from` and `to`.
pub fn squares_between(from: Square, to: Square) -> impl Iterator<Item = Square> {
    debug_assert!(is_colinear(from, to));
    let (d_file, d_rank) = step(from, to);
    let mut current = from;
    std::iter::from_fn(move || {
        current = current.offset(d_file, d_rank);
        (current != to).then_some(current)
    })
}

/// True when no real piece stands strictly between `from` and `to`.
/// Phantom markers do not block.
#[inline]
pub fn path_is_clear(board: &Board, from: Square, to: Square) -> bool {
    squares_between(from, to).all(|sq| !board.is_occupied(sq))
}

#[cfg(test)]
mod tests {
    use super::{is_colinear, path_is_clear, squares_between};
    use crate::game_state::chess_types::{Board, Color, Piece, PieceKind, Square};

    #[test]
    fn squares_between_excludes_both_ends() {
        let between: Vec<Square> = squares_between(Square::new(0, 7), Square::new(3, 4)).collect();
        assert_eq!(between, vec![Square::new(1, 6), Square::new(2, 5)]);

        let adjacent: Vec<Square> = squares_between(Square::new(4, 4), Square::new(4, 3)).collect();
        assert!(adjacent.is_empty());
    }

    #[test]
    fn path_blocked_by_piece_but_not_by_marker() {
        let mut board = Board::empty();
        let from = Square::new(0, 7);
        let to = Square::new(0, 0);
        assert!(path_is_clear(&board, from, to));

        board[Square::new(0, 5)] = Piece::phantom(Color::White);
        assert!(path_is_clear(&board, from, to));

        board[Square::new(0, 3)] = Piece::new(PieceKind::Knight, Color::Black);
        assert!(!path_is_clear(&board, from, to));
        // The destination itself never blocks.
        assert!(path_is_clear(&board, from, Square::new(0, 3)));
    }

    #[test]
    fn colinearity() {
        assert!(is_colinear(Square::new(0, 0), Square::new(7, 7)));
        assert!(is_colinear(Square::new(2, 3), Square::new(2, 6)));
        assert!(!is_colinear(Square::new(0, 0), Square::new(1, 2)));
        assert!(!is_colinear(Square::new(3, 3), Square::new(3, 3)));
    }
}
