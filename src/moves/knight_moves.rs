use crate::game_state::chess_types::Square;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, -2),
    (2, -1),
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
];

/// L-shape test on absolute deltas: rules out the king-step square, the
/// outer 2x2 corner, the diagonals and the straight lines.
#[inline]
pub fn knight_pattern(d_file: i8, d_rank: i8) -> bool {
    if d_file <= 1 && d_rank <= 1 {
        return false;
    }
    if d_file > 2 || d_rank > 2 {
        return false;
    }
    if d_file == d_rank {
        return false;
    }
    d_file > 0 && d_rank > 0
}

/// Resumable cursor over the in-bounds knight jumps from a square.
#[derive(Debug, Clone)]
pub struct KnightCandidates {
    from: Square,
    next: usize,
}

impl KnightCandidates {
    pub fn new(from: Square) -> Self {
        Self { from, next: 0 }
    }
}

impl Iterator for KnightCandidates {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        while let Some(&(d_file, d_rank)) = KNIGHT_OFFSETS.get(self.next) {
            self.next += 1;
            let candidate = self.from.offset(d_file, d_rank);
            if candidate.in_bounds() {
                return Some(candidate);
            }
        }
        None
    }
}
