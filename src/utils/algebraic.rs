//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and internal
//! top-left squares, reused by the notation, FEN and PGN components.

use crate::game_state::chess_types::Square;

/// File index for a file letter `a..=h`.
#[inline]
pub fn file_from_char(file: char) -> Option<i8> {
    ('a'..='h').contains(&file).then(|| (file as u8 - b'a') as i8)
}

/// Internal rank index for a rank digit `1..=8` (digit 8 is index 0).
#[inline]
pub fn rank_from_char(rank: char) -> Option<i8> {
    ('1'..='8').contains(&rank).then(|| (b'8' - rank as u8) as i8)
}

#[inline]
pub fn file_to_char(file: i8) -> char {
    char::from(b'a' + file as u8)
}

#[inline]
pub fn rank_to_char(rank: i8) -> char {
    char::from(b'8' - rank as u8)
}

/// Convert algebraic notation (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, String> {
    let mut chars = square.chars();
    let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(format!("Invalid algebraic square: {square}"));
    };

    let file = file_from_char(file).ok_or_else(|| format!("Invalid algebraic file: {file}"))?;
    let rank = rank_from_char(rank).ok_or_else(|| format!("Invalid algebraic rank: {rank}"))?;
    Ok(Square::new(file, rank))
}

/// Convert a square to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> Result<String, String> {
    if !square.in_bounds() {
        return Err(format!("Square out of bounds: {square}"));
    }
    Ok(format!("{}{}", file_to_char(square.file), rank_to_char(square.rank)))
}
