//! Single in-memory game.
//!
//! `GameState` is the central model of the referee. It holds the board plus
//! the derived state every rule gate needs (turn, check flag, castling rights,
//! king cache, clocks) and the move log. The only mutator during play is
//! [`GameState::play_move`].

use crate::chess_errors::{FenError, MoveError};
use crate::game_state::chess_rules::{king_home, STARTING_POSITION_FEN};
use crate::game_state::chess_types::*;
use crate::move_generation::move_execution;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;
use crate::utils::move_history::MoveHistory;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    // --- Position ---
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,

    // --- Derived flags ---
    pub(crate) check: Option<Color>,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) status: MoveStatus,

    // Updated on every king move; never recomputed by scanning during play.
    pub(crate) king_squares: [Square; 2],

    // --- Clocks / move counters ---
    pub(crate) halfmove_clock: u16,
    pub(crate) fullmove_number: u16,

    // --- Log ---
    pub(crate) history: MoveHistory,
    /// FEN of the setup position when the game did not begin from the
    /// standard start.
    pub(crate) start_fen: Option<String>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard starting position, White to move, every castling right.
    pub fn new_game() -> Self {
        Self {
            board: Board::starting(),
            side_to_move: Color::White,
            check: None,
            castling_rights: CASTLE_ALL,
            status: MoveStatus::Normal,
            king_squares: [king_home(Color::White), king_home(Color::Black)],
            halfmove_clock: 0,
            fullmove_number: 1,
            history: MoveHistory::new(),
            start_fen: None,
        }
    }

    /// Returns the game to the standard starting position.
    pub fn reset(&mut self) {
        *self = Self::new_game();
    }

    /// Sets up an arbitrary position. The log starts empty.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Plays one move in algebraic notation. On error nothing changes.
    pub fn play_move(&mut self, notation: &str) -> Result<MoveStatus, MoveError> {
        move_execution::play_move(self, notation)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Side currently in check (or checkmated), if any.
    #[inline]
    pub fn check(&self) -> Option<Color> {
        self.check
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    #[inline]
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Result of the last move played, or of the setup position.
    #[inline]
    pub fn status(&self) -> MoveStatus {
        self.status
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.status.is_game_over()
    }

    /// FEN the game was set up from; the standard start position otherwise.
    pub fn start_fen(&self) -> &str {
        self.start_fen.as_deref().unwrap_or(STARTING_POSITION_FEN)
    }

    #[inline]
    pub fn started_from_standard_position(&self) -> bool {
        self.start_fen.is_none()
    }
}
