use std::io::{BufRead, Write};

use common::config::ConfigContentProvider;
use common::games::SessionRng;
use common::games::tictactoe::{
    Difficulty, HintVerdict, Player, Round, RoundResult, RoundSettings, SearchEngine,
};
use common::{GameError, InvalidMoveReason, log};

use crate::error::{ClientError, Result};
use crate::prompt::{Console, TurnCommand, parse_turn_input};
use crate::renderer::BoardRenderer;
use crate::stats::{GameStats, StatsStore};

/// Choices fixed before the first round. `None` means ask every round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionOptions {
    pub human: Option<Player>,
    pub difficulty: Option<Difficulty>,
    pub second_best_chance: f64,
    pub use_color: bool,
}

pub struct GameSession<R: BufRead, W: Write, P: ConfigContentProvider> {
    console: Console<R, W>,
    engine: SearchEngine,
    rng: SessionRng,
    stats_store: StatsStore<P>,
    stats: GameStats,
    /// Shown once the session starts talking to the player.
    load_warning: Option<String>,
    options: SessionOptions,
}

impl<R: BufRead, W: Write, P: ConfigContentProvider> GameSession<R, W, P> {
    pub fn new(
        console: Console<R, W>,
        engine: SearchEngine,
        rng: SessionRng,
        stats_store: StatsStore<P>,
        options: SessionOptions,
    ) -> Self {
        let (stats, load_warning) = match stats_store.load() {
            Ok(stats) => (stats, None),
            Err(err) => {
                log!("Failed to load stats, starting fresh: {}", err);
                let warning =
                    format!("Could not load previous stats ({}). Starting fresh.", err);
                (GameStats::default(), Some(warning))
            }
        };

        Self {
            console,
            engine,
            rng,
            stats_store,
            stats,
            load_warning,
            options,
        }
    }

    pub fn stats(&self) -> GameStats {
        self.stats
    }

    /// Plays rounds until the player declines another one or quits.
    pub fn run(&mut self) -> Result<GameStats> {
        self.console.say("Welcome to Smart Tic-Tac-Toe!")?;
        self.console.say(
            "Cells are numbered 0-8, left to right, top to bottom. Type h for a hint or q to quit.",
        )?;
        if let Some(warning) = self.load_warning.take() {
            self.console.say(&warning)?;
        }
        if self.stats.rounds() > 0 {
            self.console.say(&self.stats.summary())?;
        }

        let outcome = self.play_rounds();

        match outcome {
            Ok(()) | Err(ClientError::Quit) => {
                self.save_stats()?;
                self.console.say("")?;
                self.console.say(&self.stats.summary())?;
                self.console.say("Thanks for playing!")?;
                Ok(self.stats)
            }
            Err(err) => {
                let _ = self.save_stats();
                Err(err)
            }
        }
    }

    fn play_rounds(&mut self) -> Result<()> {
        loop {
            let settings = self.configure_round()?;
            let result = self.play_round(&settings)?;

            self.stats.record(result);
            self.save_stats()?;
            self.console.say(&self.stats.summary())?;

            if !self.console.prompt_yes_no("Play again? [Y/n]: ", true)? {
                return Ok(());
            }
        }
    }

    fn configure_round(&mut self) -> Result<RoundSettings> {
        let human = match self.options.human {
            Some(human) => human,
            None => self.console.prompt_choice(
                "Choose your symbol (X moves first) [X/o]: ",
                &[("x", Player::X), ("o", Player::O)],
                Some(Player::X),
            )?,
        };

        let difficulty = match self.options.difficulty {
            Some(difficulty) => difficulty,
            None => self.console.prompt_parsed(
                "Difficulty: 1) Easy 2) Medium 3) Hard [2]: ",
                Difficulty::Medium,
                "1, 2, 3, easy, medium, hard",
            )?,
        };

        Ok(RoundSettings {
            human,
            difficulty,
            second_best_chance: self.options.second_best_chance,
        })
    }

    fn play_round(&mut self, settings: &RoundSettings) -> Result<RoundResult> {
        let mut round = Round::new(settings);
        let renderer = BoardRenderer::new(round.human(), self.options.use_color);

        self.console.say(&format!(
            "\nYou are {}. The computer plays {} on {}.",
            round.human(),
            round.opponent(),
            round.difficulty()
        ))?;
        log!(
            "Round started: human {}, difficulty {}",
            round.human(),
            round.difficulty()
        );

        let result = loop {
            if let Some(result) = round.result() {
                break result;
            }

            if round.is_human_turn() {
                self.console.say(&format!("\n{}\n", renderer.render(round.board())))?;
                self.human_turn(&mut round)?;
            } else {
                let position = round.play_opponent(&mut self.engine, &mut self.rng)?;
                self.console.say(&format!("Computer plays {}.", position))?;
                log!(
                    "Opponent {} played {} (score {})",
                    round.difficulty(),
                    position,
                    self.engine
                        .evaluate(round.board(), round.current_player(), round.opponent())
                        .score
                );
            }
        };

        self.console.say(&format!("\n{}\n", renderer.render(round.board())))?;
        let message = match result {
            RoundResult::HumanWon => "You win!",
            RoundResult::OpponentWon => "The computer wins.",
            RoundResult::Draw => "It's a tie.",
        };
        self.console.say(message)?;

        let cache = self.engine.cache_stats();
        log!(
            "Round over: {:?} after {} moves; cache {} entries, {} hits, {} misses",
            result,
            round.moves().len(),
            cache.entries,
            cache.hits,
            cache.misses
        );

        Ok(result)
    }

    fn human_turn(&mut self, round: &mut Round) -> Result<()> {
        loop {
            let raw = self
                .console
                .read_line("Your move (0-8, h for hint, q to quit): ")?;

            let position = match parse_turn_input(&raw) {
                Ok(TurnCommand::Move(position)) => position,
                Ok(TurnCommand::Hint) => {
                    self.show_hint(round)?;
                    continue;
                }
                Ok(TurnCommand::Quit) => return Err(ClientError::Quit),
                Err(message) => {
                    self.console.say(&message)?;
                    continue;
                }
            };

            match round.play_human(position) {
                Ok(_) => return Ok(()),
                Err(GameError::InvalidMove {
                    reason: InvalidMoveReason::Occupied,
                    ..
                }) => {
                    self.console
                        .say("That cell is already taken!...Choose another.")?;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    fn show_hint(&mut self, round: &Round) -> Result<()> {
        let hint = round.hint(&mut self.engine)?;

        let verdict = match hint.verdict {
            HintVerdict::Winning => "This move wins with best play.",
            HintVerdict::Drawing => "Best play from here is a draw.",
            HintVerdict::Losing => "Every move loses against perfect play.",
        };
        self.console
            .say(&format!("Hint: play {}. {}", hint.best_move, verdict))?;

        if hint.best_moves.len() > 1 {
            let alternatives: Vec<String> =
                hint.best_moves.iter().map(ToString::to_string).collect();
            self.console
                .say(&format!("Equally good: {}", alternatives.join(", ")))?;
        }
        Ok(())
    }

    /// A failed save is reported to the player but does not end the session.
    fn save_stats(&mut self) -> Result<()> {
        if let Err(err) = self.stats_store.save(&self.stats) {
            log!("Failed to save stats: {}", err);
            self.console.say(&format!(
                "Failed to save stats ({}). Your progress may not persist!",
                err
            ))?;
        }
        Ok(())
    }
}
