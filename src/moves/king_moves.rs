//! King single-step rules. Castling is a composite move handled by the move
//! execution layer, never by this pattern.

/// One step in any direction.
#[inline]
pub fn king_pattern(d_file: i8, d_rank: i8) -> bool {
    d_file <= 1 && d_rank <= 1
}
