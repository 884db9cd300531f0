use super::bot_controller::{DEFAULT_SECOND_BEST_CHANCE, OpponentPolicy};
use super::types::{Difficulty, Player};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundSettings {
    pub human: Player,
    pub difficulty: Difficulty,
    pub second_best_chance: f64,
}

impl RoundSettings {
    pub fn new(human: Player, difficulty: Difficulty) -> Self {
        Self {
            human,
            difficulty,
            second_best_chance: DEFAULT_SECOND_BEST_CHANCE,
        }
    }

    pub fn opponent(&self) -> Player {
        self.human.opponent()
    }

    pub fn policy(&self) -> OpponentPolicy {
        OpponentPolicy::new(self.difficulty).with_second_best_chance(self.second_best_chance)
    }
}

impl Default for RoundSettings {
    fn default() -> Self {
        Self::new(Player::X, Difficulty::default())
    }
}

pub fn validate_second_best_chance(chance: f64) -> Result<(), String> {
    if !(0.0..=1.0).contains(&chance) {
        return Err(format!(
            "second best chance must be between 0.0 and 1.0, got {}",
            chance
        ));
    }
    Ok(())
}
