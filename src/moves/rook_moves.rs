pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// Purely horizontal or vertical displacement.
#[inline]
pub fn rook_pattern(d_file: i8, d_rank: i8) -> bool {
    d_file == 0 || d_rank == 0
}

#[cfg(test)]
mod tests {
    use super::rook_pattern;

    #[test]
    fn rook_pattern_rejects_diagonals_and_jumps() {
        assert!(rook_pattern(0, 5));
        assert!(rook_pattern(3, 0));
        assert!(!rook_pattern(2, 2));
        assert!(!rook_pattern(1, 2));
    }
}
