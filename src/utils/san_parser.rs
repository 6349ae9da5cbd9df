//! Standard algebraic notation parser.
//!
//! Grammar: `[Piece][file][rank][x]<file><rank>[[=]Promotion][+|#]`, or a
//! castle written as two (kingside) or three (queenside) groups of one
//! repeated symbol `O`, `o` or `0` joined by dashes. The source square may
//! stay partly unknown; [`resolve_source`] fills it in against a board.

use tracing::debug;

use crate::chess_errors::MoveError;
use crate::game_state::chess_types::{Board, CastleSide, Color, PieceKind, Square};
use crate::moves::move_descriptions::{
    MoveDescriptor, FLAG_ASSERTED_CHECK, FLAG_ASSERTED_MATE, FLAG_CAPTURE,
};
use crate::moves::pseudo_legal::can_move;
use crate::utils::algebraic::{file_from_char, rank_from_char};

/// Parse `notation` for the side `color`. Only castling needs the side, to
/// place the king's source and destination squares.
pub fn parse_san(notation: &str, color: Color) -> Result<MoveDescriptor, MoveError> {
    let parse_error = || MoveError::Parse(notation.to_owned());

    let mut chars: Vec<char> = notation.chars().collect();
    let mut flags = 0;
    match chars.last() {
        Some('+') => {
            flags |= FLAG_ASSERTED_CHECK;
            chars.pop();
        }
        Some('#') => {
            flags |= FLAG_ASSERTED_MATE;
            chars.pop();
        }
        _ => {}
    }

    if matches!(chars.first(), Some('O' | 'o' | '0')) {
        let side = parse_castle(&chars).ok_or_else(parse_error)?;
        return Ok(MoveDescriptor::castle(color, side).with_flags(flags));
    }

    let mut rest = chars.as_slice();

    let piece = match rest.first().copied() {
        Some(letter) if letter.is_ascii_uppercase() => {
            rest = &rest[1..];
            PieceKind::from_letter(letter).ok_or_else(parse_error)?
        }
        _ => PieceKind::Pawn,
    };

    let mut promotion = None;
    if let Some((&letter, head)) = rest.split_last() {
        if letter.is_ascii_uppercase() {
            promotion = Some(PieceKind::from_letter(letter).ok_or_else(parse_error)?);
            rest = head.strip_suffix(&['=']).unwrap_or(head);
        } else if letter == '=' {
            return Err(parse_error());
        }
    }

    let [head @ .., file, rank] = rest else {
        return Err(parse_error());
    };
    let to = Square::new(
        file_from_char(*file).ok_or_else(parse_error)?,
        rank_from_char(*rank).ok_or_else(parse_error)?,
    );

    let mut head = head;
    if let Some(before) = head.strip_suffix(&['x']) {
        flags |= FLAG_CAPTURE;
        head = before;
    }

    let (from_file, from_rank) = match head {
        [] => (None, None),
        [c] => match (file_from_char(*c), rank_from_char(*c)) {
            (Some(f), _) => (Some(f), None),
            (_, Some(r)) => (None, Some(r)),
            _ => return Err(parse_error()),
        },
        [f, r] => (
            Some(file_from_char(*f).ok_or_else(parse_error)?),
            Some(rank_from_char(*r).ok_or_else(parse_error)?),
        ),
        _ => return Err(parse_error()),
    };

    let descriptor = MoveDescriptor {
        from_file,
        from_rank,
        to,
        piece,
        promotion: None,
        castle: None,
        flags,
    };
    Ok(match promotion {
        Some(kind) => descriptor.with_promotion(kind),
        None => descriptor,
    })
}

/// Counts dash-separated groups of one repeated castle symbol.
fn parse_castle(chars: &[char]) -> Option<CastleSide> {
    let symbol = *chars.first()?;
    let groups: Vec<&[char]> = chars.split(|&c| c == '-').collect();
    if !groups.iter().all(|group| *group == [symbol]) {
        return None;
    }
    match groups.len() {
        2 => Some(CastleSide::Kingside),
        3 => Some(CastleSide::Queenside),
        _ => None,
    }
}

/// Find the unique piece of `color` matching the descriptor's kind and source
/// constraints that can pseudo-legally reach the destination.
pub fn resolve_source(
    board: &Board,
    color: Color,
    descriptor: &MoveDescriptor,
    notation: &str,
) -> Result<Square, MoveError> {
    let mut matches = board.squares_of(color).filter(|&sq| {
        board[sq].kind == descriptor.piece
            && descriptor.source_matches(sq)
            && can_move(board, sq, descriptor.to)
    });

    let Some(source) = matches.next() else {
        debug!(notation, "no piece available");
        return Err(MoveError::NoPieceAvailable(notation.to_owned()));
    };
    if matches.next().is_some() {
        debug!(notation, "ambiguous source");
        return Err(MoveError::Ambiguous(notation.to_owned()));
    }
    Ok(source)
}

#[cfg(test)]
mod tests {
    use super::{parse_san, resolve_source};
    use crate::chess_errors::MoveError;
    use crate::game_state::chess_types::{Board, CastleSide, Color, Piece, PieceKind, Square};
    use crate::moves::move_descriptions::{
        FLAG_ASSERTED_CHECK, FLAG_ASSERTED_MATE, FLAG_CAPTURE, FLAG_CASTLE, FLAG_PROMOTION,
    };

    #[test]
    fn pawn_push_has_unknown_source() {
        let parsed = parse_san("e4", Color::White).expect("e4 parses");
        assert_eq!(parsed.piece, PieceKind::Pawn);
        assert_eq!(parsed.to, Square::new(4, 4));
        assert_eq!((parsed.from_file, parsed.from_rank), (None, None));
        assert_eq!(parsed.flags, 0);
    }

    #[test]
    fn disambiguators_capture_and_check_suffix() {
        let parsed = parse_san("Nbxd2+", Color::White).expect("parses");
        assert_eq!(parsed.piece, PieceKind::Knight);
        assert_eq!(parsed.from_file, Some(1));
        assert_eq!(parsed.from_rank, None);
        assert!(parsed.has(FLAG_CAPTURE));
        assert!(parsed.has(FLAG_ASSERTED_CHECK));

        let parsed = parse_san("R1a3", Color::White).expect("parses");
        assert_eq!((parsed.from_file, parsed.from_rank), (None, Some(7)));

        let parsed = parse_san("Qh4e1#", Color::Black).expect("parses");
        assert_eq!(parsed.source(), Some(Square::new(7, 4)));
        assert!(parsed.has(FLAG_ASSERTED_MATE));
    }

    #[test]
    fn promotion_with_and_without_equals() {
        for text in ["e8=Q", "e8Q"] {
            let parsed = parse_san(text, Color::White).expect("parses");
            assert_eq!(parsed.promotion, Some(PieceKind::Queen));
            assert!(parsed.has(FLAG_PROMOTION));
            assert_eq!(parsed.to, Square::new(4, 0));
        }
        let parsed = parse_san("exd1=N", Color::Black).expect("parses");
        assert_eq!(parsed.promotion, Some(PieceKind::Knight));
        assert_eq!(parsed.from_file, Some(4));

        // King is a piece letter; the rule gate rejects it later.
        assert_eq!(
            parse_san("e8=K", Color::White).expect("parses").promotion,
            Some(PieceKind::King)
        );
        assert!(parse_san("e8=X", Color::White).is_err());
        assert!(parse_san("e8=", Color::White).is_err());
    }

    #[test]
    fn castle_symbols_must_repeat_one_character() {
        for text in ["O-O", "0-0", "o-o", "O-O+"] {
            let parsed = parse_san(text, Color::White).expect("castle parses");
            assert_eq!(parsed.castle, Some(CastleSide::Kingside));
            assert!(parsed.has(FLAG_CASTLE));
            assert_eq!(parsed.to, Square::new(6, 7));
        }
        let parsed = parse_san("0-0-0", Color::Black).expect("castle parses");
        assert_eq!(parsed.castle, Some(CastleSide::Queenside));
        assert_eq!(parsed.to, Square::new(2, 0));

        for text in ["O-0", "O", "O-O-O-O", "OO", "O--O"] {
            assert!(matches!(parse_san(text, Color::White), Err(MoveError::Parse(_))), "{text}");
        }
    }

    #[test]
    fn malformed_text_is_a_parse_error() {
        for text in ["", "+", "e9", "i4", "Xe4", "Nbb1d2", "e4x", "xe", "N"] {
            assert!(matches!(parse_san(text, Color::White), Err(MoveError::Parse(_))), "{text}");
        }
    }

    #[test]
    fn resolution_reports_missing_and_ambiguous_sources() {
        let board = Board::starting();
        let nf3 = parse_san("Nf3", Color::White).expect("parses");
        assert_eq!(
            resolve_source(&board, Color::White, &nf3, "Nf3"),
            Ok(Square::new(6, 7))
        );

        let qh5 = parse_san("Qh5", Color::White).expect("parses");
        assert_eq!(
            resolve_source(&board, Color::White, &qh5, "Qh5"),
            Err(MoveError::NoPieceAvailable("Qh5".into()))
        );

        let mut board = Board::empty();
        board[Square::new(1, 7)] = Piece::new(PieceKind::Knight, Color::White);
        board[Square::new(5, 7)] = Piece::new(PieceKind::Knight, Color::White);
        let nd2 = parse_san("Nd2", Color::White).expect("parses");
        assert_eq!(
            resolve_source(&board, Color::White, &nd2, "Nd2"),
            Err(MoveError::Ambiguous("Nd2".into()))
        );
        let nbd2 = parse_san("Nbd2", Color::White).expect("parses");
        assert_eq!(
            resolve_source(&board, Color::White, &nbd2, "Nbd2"),
            Ok(Square::new(1, 7))
        );
    }
}
