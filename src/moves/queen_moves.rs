use crate::moves::bishop_moves::{bishop_pattern, BISHOP_DIRECTIONS};
use crate::moves::rook_moves::{rook_pattern, ROOK_DIRECTIONS};

pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    ROOK_DIRECTIONS[0],
    BISHOP_DIRECTIONS[0],
    ROOK_DIRECTIONS[1],
    BISHOP_DIRECTIONS[1],
    ROOK_DIRECTIONS[2],
    BISHOP_DIRECTIONS[2],
    ROOK_DIRECTIONS[3],
    BISHOP_DIRECTIONS[3],
];

#[inline]
pub fn queen_pattern(d_file: i8, d_rank: i8) -> bool {
    rook_pattern(d_file, d_rank) || bishop_pattern(d_file, d_rank)
}
