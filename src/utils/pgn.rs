//! PGN export for finished or in-progress games.
//!
//! Serializes the tag pairs and the move log to PGN text. Games set up from a
//! custom position carry `SetUp`/`FEN` tags so they can be replayed.

use std::collections::BTreeMap;

use chrono::Local;

use crate::game_state::chess_types::{Color, MoveStatus};
use crate::game_state::game_state::GameState;

/// Result token for the game as it stands.
pub fn result_token(game_state: &GameState) -> &'static str {
    match game_state.status() {
        MoveStatus::Checkmate => match game_state.side_to_move() {
            Color::White => "0-1",
            Color::Black => "1-0",
        },
        MoveStatus::Stalemate => "1/2-1/2",
        MoveStatus::Normal | MoveStatus::Check => "*",
    }
}

/// Seven-tag roster, dated today.
pub fn default_headers(game_state: &GameState) -> BTreeMap<String, String> {
    let mut headers = BTreeMap::<String, String>::new();
    headers.insert("Event".to_owned(), "Casual Game".to_owned());
    headers.insert("Site".to_owned(), "Local".to_owned());
    headers.insert("Date".to_owned(), Local::now().format("%Y.%m.%d").to_string());
    headers.insert("Round".to_owned(), "-".to_owned());
    headers.insert("White".to_owned(), "White".to_owned());
    headers.insert("Black".to_owned(), "Black".to_owned());
    headers.insert("Result".to_owned(), result_token(game_state).to_owned());
    headers
}

pub fn write_pgn(game_state: &GameState) -> String {
    write_pgn_with_headers(game_state, &default_headers(game_state))
}

/// Writes `headers` followed by the movetext. `Result` always reflects the
/// game, and `SetUp`/`FEN` are added for games that began from a custom
/// position.
pub fn write_pgn_with_headers(game_state: &GameState, headers: &BTreeMap<String, String>) -> String {
    let mut headers = headers.clone();
    let result = result_token(game_state);
    headers.insert("Result".to_owned(), result.to_owned());

    if !game_state.started_from_standard_position() {
        headers.insert("SetUp".to_owned(), "1".to_owned());
        headers.insert("FEN".to_owned(), game_state.start_fen().to_owned());
    }

    let mut out = String::new();
    for (key, value) in &headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_pgn_value(value)));
    }
    out.push('\n');

    let history = game_state.history();
    if !history.is_empty() {
        out.push_str(history.as_str());
        out.push(' ');
    }
    out.push_str(result);
    out.push('\n');

    out
}

fn escape_pgn_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::{result_token, write_pgn, write_pgn_with_headers};
    use std::collections::BTreeMap;

    use crate::game_state::game_state::GameState;

    #[test]
    fn finished_game_carries_result_and_date() {
        let mut game = GameState::new_game();
        for notation in ["f3", "e5", "g4", "Qh4#"] {
            game.play_move(notation).expect("legal");
        }
        assert_eq!(result_token(&game), "0-1");

        let pgn = write_pgn(&game);
        assert!(pgn.contains("[Result \"0-1\"]\n"));
        assert!(pgn.contains("[Date \""));
        assert!(!pgn.contains("[SetUp"));
        assert!(pgn.ends_with("\n1. f3 e5 2. g4 Qh4# 0-1\n"));
    }

    #[test]
    fn custom_start_adds_setup_tags() {
        let fen = "4k3/8/8/8/8/8/4P3/4K3 w - - 0 1";
        let mut game = GameState::from_fen(fen).expect("fen");
        game.play_move("e4").expect("legal");

        let mut headers = BTreeMap::<String, String>::new();
        headers.insert("Event".to_owned(), "Custom \"test\"".to_owned());
        let pgn = write_pgn_with_headers(&game, &headers);

        assert!(pgn.contains("[Event \"Custom \\\"test\\\"\"]\n"));
        assert!(pgn.contains("[SetUp \"1\"]\n"));
        assert!(pgn.contains(&format!("[FEN \"{fen}\"]\n")));
        assert!(pgn.ends_with("\n1. e4 *\n"));
    }

    #[test]
    fn empty_game_is_just_the_result() {
        let pgn = write_pgn(&GameState::new_game());
        assert!(pgn.ends_with("\n\n*\n"));
    }
}
