use crate::error::{GameError, Result};

use super::board::Board;
use super::search::SearchEngine;
use super::types::{Move, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintVerdict {
    /// The best move wins or forces a win.
    Winning,
    /// The best move holds at least a draw.
    Drawing,
    /// Every move loses against perfect play.
    Losing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    pub best_move: Move,
    pub score: i32,
    /// Every move tying with `best_move`, ascending.
    pub best_moves: Vec<Move>,
    pub verdict: HintVerdict,
}

pub fn hint(engine: &mut SearchEngine, board: &Board, human: Player) -> Result<Move> {
    hint_details(engine, board, human).map(|hint| hint.best_move)
}

pub fn hint_details(engine: &mut SearchEngine, board: &Board, human: Player) -> Result<Hint> {
    if board.outcome().is_terminal() {
        return Err(GameError::NoLegalMove);
    }

    let to_move = board.turn();
    if to_move != human {
        return Err(GameError::OutOfTurn(to_move));
    }

    let ranked = engine.rank_moves(board, human);
    let best = *ranked.first().ok_or(GameError::NoLegalMove)?;

    let best_moves = ranked
        .iter()
        .take_while(|scored| scored.score == best.score)
        .map(|scored| scored.position)
        .collect();

    let verdict = match best.score {
        s if s > 0 => HintVerdict::Winning,
        0 => HintVerdict::Drawing,
        _ => HintVerdict::Losing,
    };

    Ok(Hint {
        best_move: best.position,
        score: best.score,
        best_moves,
        verdict,
    })
}
