use crate::error::{GameError, Result};
use crate::games::SessionRng;

use super::board::Board;
use super::bot_controller::OpponentPolicy;
use super::hint::{Hint, hint_details};
use super::search::SearchEngine;
use super::settings::RoundSettings;
use super::types::{Difficulty, GameOutcome, Move, Player, RoundResult};

/// One round against the computer. X always opens, whichever side the human holds.
#[derive(Debug, Clone)]
pub struct Round {
    board: Board,
    human: Player,
    policy: OpponentPolicy,
    status: GameOutcome,
    moves: Vec<(Player, Move)>,
}

impl Round {
    pub fn new(settings: &RoundSettings) -> Self {
        Self {
            board: Board::new(),
            human: settings.human,
            policy: settings.policy(),
            status: GameOutcome::InProgress,
            moves: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn human(&self) -> Player {
        self.human
    }

    pub fn opponent(&self) -> Player {
        self.human.opponent()
    }

    pub fn difficulty(&self) -> Difficulty {
        self.policy.difficulty
    }

    pub fn current_player(&self) -> Player {
        self.board.turn()
    }

    pub fn is_human_turn(&self) -> bool {
        !self.status.is_terminal() && self.current_player() == self.human
    }

    pub fn outcome(&self) -> GameOutcome {
        self.status
    }

    pub fn moves(&self) -> &[(Player, Move)] {
        &self.moves
    }

    pub fn last_move(&self) -> Option<Move> {
        self.moves.last().map(|&(_, position)| position)
    }

    pub fn play_human(&mut self, position: Move) -> Result<GameOutcome> {
        self.place_mark(self.human, position)
    }

    pub fn play_opponent(
        &mut self,
        engine: &mut SearchEngine,
        rng: &mut SessionRng,
    ) -> Result<Move> {
        if self.status.is_terminal() {
            return Err(GameError::RoundOver);
        }
        let position = self
            .policy
            .choose_move(engine, &self.board, self.opponent(), rng)?;
        self.place_mark(self.opponent(), position)?;
        Ok(position)
    }

    /// Only available on the human's turn of a round still in progress.
    pub fn hint(&self, engine: &mut SearchEngine) -> Result<Hint> {
        if self.status.is_terminal() {
            return Err(GameError::RoundOver);
        }
        if !self.is_human_turn() {
            return Err(GameError::OutOfTurn(self.current_player()));
        }
        hint_details(engine, &self.board, self.human)
    }

    /// `None` while the round is in progress.
    pub fn result(&self) -> Option<RoundResult> {
        match self.status {
            GameOutcome::InProgress => None,
            GameOutcome::Draw => Some(RoundResult::Draw),
            GameOutcome::Win(winner) if winner == self.human => Some(RoundResult::HumanWon),
            GameOutcome::Win(_) => Some(RoundResult::OpponentWon),
        }
    }

    fn place_mark(&mut self, player: Player, position: Move) -> Result<GameOutcome> {
        if self.status.is_terminal() {
            return Err(GameError::RoundOver);
        }

        self.board = self.board.apply(position, player)?;
        self.moves.push((player, position));
        self.status = self.board.outcome();
        Ok(self.status)
    }
}
