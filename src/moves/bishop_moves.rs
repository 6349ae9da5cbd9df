pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, -1), (1, 1), (-1, 1), (-1, -1)];

/// Equal nonzero displacement on both axes.
#[inline]
pub fn bishop_pattern(d_file: i8, d_rank: i8) -> bool {
    d_file == d_rank && d_file > 0
}
