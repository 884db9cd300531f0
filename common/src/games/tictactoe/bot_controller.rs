use crate::error::{GameError, Result};
use crate::games::SessionRng;

use super::board::Board;
use super::search::SearchEngine;
use super::types::{Difficulty, Move, Player};

pub const DEFAULT_SECOND_BEST_CHANCE: f64 = 0.30;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpponentPolicy {
    pub difficulty: Difficulty,
    /// Probability that Medium plays its second-ranked move instead of the best one.
    pub second_best_chance: f64,
}

impl OpponentPolicy {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            second_best_chance: DEFAULT_SECOND_BEST_CHANCE,
        }
    }

    pub fn with_second_best_chance(mut self, chance: f64) -> Self {
        self.second_best_chance = chance;
        self
    }

    pub fn choose_move(
        &self,
        engine: &mut SearchEngine,
        board: &Board,
        symbol: Player,
        rng: &mut SessionRng,
    ) -> Result<Move> {
        if board.outcome().is_terminal() {
            return Err(GameError::NoLegalMove);
        }

        match self.difficulty {
            Difficulty::Easy => calculate_random_move(board, rng),
            Difficulty::Medium => {
                calculate_noisy_move(engine, board, symbol, self.second_best_chance, rng)
            }
            Difficulty::Hard => calculate_minimax_move(engine, board, symbol),
        }
    }
}

fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Result<Move> {
    let available_moves = board.legal_moves();
    if available_moves.is_empty() {
        return Err(GameError::NoLegalMove);
    }
    Ok(available_moves[rng.index(available_moves.len())])
}

fn calculate_noisy_move(
    engine: &mut SearchEngine,
    board: &Board,
    symbol: Player,
    second_best_chance: f64,
    rng: &mut SessionRng,
) -> Result<Move> {
    let ranked = engine.rank_moves(board, symbol);
    match ranked.as_slice() {
        [] => Err(GameError::NoLegalMove),
        [only] => Ok(only.position),
        [best, second, ..] => {
            if rng.chance(second_best_chance) {
                Ok(second.position)
            } else {
                Ok(best.position)
            }
        }
    }
}

pub fn calculate_minimax_move(
    engine: &mut SearchEngine,
    board: &Board,
    symbol: Player,
) -> Result<Move> {
    engine
        .rank_moves(board, symbol)
        .first()
        .map(|scored| scored.position)
        .ok_or(GameError::NoLegalMove)
}
