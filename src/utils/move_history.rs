//! Append-only move log.
//!
//! Keeps both the rendered text (`1. e4 e5 2. Nf3`) and the individual
//! entries so callers can replay or export a game.

use crate::game_state::chess_types::Color;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub color: Color,
    pub fullmove_number: u16,
    pub san: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveHistory {
    text: String,
    entries: Vec<HistoryEntry>,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one move. White moves get a `"<n>. "` label; a log that opens
    /// with a Black move gets `"<n>... "` instead.
    pub fn record(&mut self, color: Color, fullmove_number: u16, san: &str) {
        if !self.text.is_empty() {
            self.text.push(' ');
        }
        match color {
            Color::White => self.text.push_str(&format!("{fullmove_number}. ")),
            Color::Black if self.entries.is_empty() => {
                self.text.push_str(&format!("{fullmove_number}... "))
            }
            Color::Black => {}
        }
        self.text.push_str(san);
        self.entries.push(HistoryEntry {
            color,
            fullmove_number,
            san: san.to_owned(),
        });
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }
}

impl std::fmt::Display for MoveHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
