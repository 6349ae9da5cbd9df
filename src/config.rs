//! Shell configuration: defaults overridden by `CHESS_REFEREE_*` environment
//! variables. Values that fail to parse are ignored.

use std::env;

use tracing::info;

pub const ENV_UNICODE: &str = "CHESS_REFEREE_UNICODE";
pub const ENV_SHOW_HISTORY: &str = "CHESS_REFEREE_SHOW_HISTORY";
pub const ENV_RANDOM_SEED: &str = "CHESS_REFEREE_RANDOM_SEED";
pub const ENV_MAX_PLIES: &str = "CHESS_REFEREE_MAX_PLIES";
pub const ENV_START_FEN: &str = "CHESS_REFEREE_START_FEN";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Draw pieces with chess glyphs instead of FEN letters.
    pub unicode: bool,

    /// Print the move log after every move.
    pub show_history: bool,

    /// Seed for random games; drawn from the OS when unset.
    pub random_seed: Option<u64>,

    /// Ply limit for random games.
    pub max_plies: usize,

    /// Position to start from instead of the standard one.
    pub start_fen: Option<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            unicode: true,
            show_history: true,
            random_seed: None,
            max_plies: 300,
            start_fen: None,
        }
    }
}

impl CliConfig {
    pub fn load() -> Self {
        let mut config = Self::default();
        config.merge_env();

        info!(
            unicode = config.unicode,
            show_history = config.show_history,
            random_seed = ?config.random_seed,
            max_plies = config.max_plies,
            start_fen = ?config.start_fen,
            "configuration loaded"
        );

        config
    }

    pub fn merge_env(&mut self) {
        self.merge_vars(|key| env::var(key).ok());
    }

    /// Applies every variable `lookup` knows about.
    pub fn merge_vars<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(parsed) = lookup(ENV_UNICODE).as_deref().and_then(parse_flag) {
            self.unicode = parsed;
        }
        if let Some(parsed) = lookup(ENV_SHOW_HISTORY).as_deref().and_then(parse_flag) {
            self.show_history = parsed;
        }
        if let Some(parsed) = lookup(ENV_RANDOM_SEED).and_then(|v| v.trim().parse().ok()) {
            self.random_seed = Some(parsed);
        }
        if let Some(parsed) = lookup(ENV_MAX_PLIES).and_then(|v| v.trim().parse().ok()) {
            self.max_plies = parsed;
        }
        if let Some(fen) = lookup(ENV_START_FEN) {
            let fen = fen.trim();
            if !fen.is_empty() {
                self.start_fen = Some(fen.to_owned());
            }
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
