use crate::game_state::chess_rules::pawn_home_rank;
use crate::game_state::chess_types::{Board, Color, Piece, Square};
use crate::moves::line_of_sight::path_is_clear;

/// Pawn movement rules for a pawn of `pawn.color` standing on `from`.
///
/// Straight steps need an unoccupied destination (a phantom marker does not
/// occupy); diagonal steps need an enemy piece or an enemy phantom marker.
pub fn pawn_can_move(board: &Board, pawn: Piece, from: Square, to: Square) -> bool {
    let forward = pawn.color.forward();
    let rank_step = to.rank - from.rank;
    if rank_step.signum() != forward {
        return false;
    }

    let (d_file, d_rank) = from.delta(to);
    if d_file > 1 || d_rank > 2 {
        return false;
    }
    if d_rank == 2 && (from.rank != pawn_home_rank(pawn.color) || d_file > 0) {
        return false;
    }

    let target = board[to];
    if d_file == 0 {
        return !target.is_real() && (d_rank == 1 || path_is_clear(board, from, to));
    }

    let enemy_piece = target.is_real() && target.color != pawn.color;
    let enemy_marker = target.is_phantom() && target.color != pawn.color;
    enemy_piece || enemy_marker
}

/// Squares from which a pawn of `attacker` would capture onto `square`.
#[inline]
pub fn pawn_capture_origins(square: Square, attacker: Color) -> [Square; 2] {
    let back = -attacker.forward();
    [square.offset(-1, back), square.offset(1, back)]
}

/// Resumable cursor over a pawn's reachable squares: single step, the two
/// forward diagonals, then the double step when standing on the home rank.
#[derive(Debug, Clone)]
pub struct PawnCandidates {
    from: Square,
    color: Color,
    stage: u8,
}

impl PawnCandidates {
    pub fn new(from: Square, color: Color) -> Self {
        Self {
            from,
            color,
            stage: 0,
        }
    }
}

impl Iterator for PawnCandidates {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        let forward = self.color.forward();
        while self.stage < 4 {
            let stage = self.stage;
            self.stage += 1;
            let candidate = match stage {
                0 => self.from.offset(0, forward),
                1 => self.from.offset(-1, forward),
                2 => self.from.offset(1, forward),
                _ if self.from.rank == pawn_home_rank(self.color) => {
                    self.from.offset(0, 2 * forward)
                }
                _ => continue,
            };
            if candidate.in_bounds() {
                return Some(candidate);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::{pawn_can_move, pawn_capture_origins, PawnCandidates};
    use crate::game_state::chess_types::{Board, Color, Piece, PieceKind, Square};

    fn white_pawn() -> Piece {
        Piece::new(PieceKind::Pawn, Color::White)
    }

    #[test]
    fn white_pawn_candidates_from_home_rank_in_order() {
        let e2 = Square::new(4, 6);
        let got: Vec<Square> = PawnCandidates::new(e2, Color::White).collect();
        assert_eq!(
            got,
            vec![
                Square::new(4, 5),
                Square::new(3, 5),
                Square::new(5, 5),
                Square::new(4, 4)
            ]
        );
    }

    #[test]
    fn edge_pawn_off_home_rank_has_two_candidates() {
        let h5 = Square::new(7, 3);
        let got: Vec<Square> = PawnCandidates::new(h5, Color::Black).collect();
        assert_eq!(got, vec![Square::new(7, 4), Square::new(6, 4)]);
    }

    #[test]
    fn double_step_only_from_home_and_unblocked() {
        let mut board = Board::starting();
        let e2 = Square::new(4, 6);
        assert!(pawn_can_move(&board, white_pawn(), e2, Square::new(4, 4)));

        board[Square::new(4, 5)] = Piece::new(PieceKind::Knight, Color::Black);
        assert!(!pawn_can_move(&board, white_pawn(), e2, Square::new(4, 4)));

        let e3 = Square::new(4, 5);
        assert!(!pawn_can_move(&Board::empty(), white_pawn(), e3, Square::new(4, 3)));
    }

    #[test]
    fn pawn_never_moves_backwards_or_sideways() {
        let board = Board::empty();
        let d4 = Square::new(3, 4);
        assert!(!pawn_can_move(&board, white_pawn(), d4, Square::new(3, 5)));
        assert!(!pawn_can_move(&board, white_pawn(), d4, Square::new(4, 4)));
    }

    #[test]
    fn diagonal_needs_enemy_piece_or_enemy_marker() {
        let mut board = Board::empty();
        let d5 = Square::new(3, 3);
        let e6 = Square::new(4, 2);
        assert!(!pawn_can_move(&board, white_pawn(), d5, e6));

        board[e6] = Piece::phantom(Color::White);
        assert!(!pawn_can_move(&board, white_pawn(), d5, e6));

        board[e6] = Piece::phantom(Color::Black);
        assert!(pawn_can_move(&board, white_pawn(), d5, e6));

        board[e6] = Piece::new(PieceKind::Rook, Color::Black);
        assert!(pawn_can_move(&board, white_pawn(), d5, e6));
    }

    #[test]
    fn capture_origins_sit_behind_the_target() {
        let e4 = Square::new(4, 4);
        assert_eq!(
            pawn_capture_origins(e4, Color::Black),
            [Square::new(3, 3), Square::new(5, 3)]
        );
        assert_eq!(
            pawn_capture_origins(e4, Color::White),
            [Square::new(3, 5), Square::new(5, 5)]
        );
    }
}
