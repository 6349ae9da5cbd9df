use crate::game_state::chess_types::MoveStatus;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::move_generation::move_execution::{classify, commit, ValidatedMove};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }

    fn tally(&mut self, mv: &ValidatedMove, status: MoveStatus) {
        self.nodes += 1;

        if mv.captured {
            self.captures += 1;
        }
        if mv.en_passant {
            self.en_passant += 1;
        }
        if mv.castle.is_some() {
            self.castles += 1;
        }
        if mv.promotion.is_some() {
            self.promotions += 1;
        }

        match status {
            MoveStatus::Check => self.checks += 1,
            MoveStatus::Checkmate => {
                self.checks += 1;
                self.checkmates += 1;
            }
            _ => {}
        }
    }
}

/// Counts leaf positions `depth` plies below `game_state`, with a breakdown
/// of the moves that reach them.
pub fn perft(game_state: &GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in generate_legal_moves(game_state) {
        let status = classify(game_state, &mv);
        if depth == 1 {
            total.tally(&mv, status);
            continue;
        }

        let mut child = game_state.clone();
        commit(&mut child, mv, status);
        total.merge(perft(&child, depth - 1));
    }

    total
}

/// Leaf count per root move, in notation, for comparing against other tools.
pub fn perft_divide(game_state: &GameState, depth: u8) -> Vec<(String, usize)> {
    if depth == 0 {
        return Vec::new();
    }

    generate_legal_moves(game_state)
        .into_iter()
        .map(|mv| {
            let status = classify(game_state, &mv);
            let mut child = game_state.clone();
            let san = commit(&mut child, mv, status);
            (san, perft(&child, depth - 1).nodes)
        })
        .collect()
}
