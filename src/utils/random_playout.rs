//! Seeded random games for demos and self-checks.
//!
//! Every move is chosen uniformly among the legal moves, rendered to notation
//! and played back through [`GameState::play_move`], so a playout exercises
//! the parser, the rule gates and the writer together.

use rand::{rngs::StdRng, seq::IndexedRandom, Rng, SeedableRng};
use tracing::debug;

use crate::chess_errors::MoveError;
use crate::game_state::chess_types::{Color, MoveStatus};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::move_generation::move_execution::render_san;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayoutOutcome {
    WhiteWinCheckmate,
    BlackWinCheckmate,
    DrawStalemate,
    DrawMaxPlies,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayoutConfig {
    pub max_plies: usize,
    pub seed: u64,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            seed: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayoutResult {
    pub outcome: PlayoutOutcome,
    pub plies: usize,
    pub played: Vec<String>,
}

/// Plays random moves on `game_state` until the game ends or `max_plies`
/// moves have been made.
pub fn random_playout<R: Rng + ?Sized>(
    game_state: &mut GameState,
    rng: &mut R,
    max_plies: usize,
) -> Result<PlayoutResult, MoveError> {
    let mut played = Vec::new();

    while !game_state.is_game_over() && played.len() < max_plies {
        let moves = generate_legal_moves(game_state);
        let Some(mv) = moves.choose(rng) else {
            break;
        };

        let notation = render_san(game_state.board(), mv, MoveStatus::Normal);
        let status = game_state.play_move(&notation)?;
        debug!(ply = played.len() + 1, notation = %notation, code = status.code(), "random move");
        played.push(notation);
    }

    let outcome = match game_state.status() {
        MoveStatus::Checkmate => match game_state.side_to_move() {
            Color::White => PlayoutOutcome::BlackWinCheckmate,
            Color::Black => PlayoutOutcome::WhiteWinCheckmate,
        },
        MoveStatus::Stalemate => PlayoutOutcome::DrawStalemate,
        MoveStatus::Normal | MoveStatus::Check => PlayoutOutcome::DrawMaxPlies,
    };

    Ok(PlayoutResult {
        outcome,
        plies: played.len(),
        played,
    })
}

/// Random game from `start` driven by a generator seeded from `config`.
pub fn seeded_random_playout(
    start: &GameState,
    config: PlayoutConfig,
) -> Result<(GameState, PlayoutResult), MoveError> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut game_state = start.clone();
    let result = random_playout(&mut game_state, &mut rng, config.max_plies)?;
    Ok((game_state, result))
}
