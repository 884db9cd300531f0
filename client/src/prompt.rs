use std::io::{BufRead, Write};
use std::str::FromStr;

use common::games::tictactoe::{CELL_COUNT, Move};

use crate::error::{ClientError, Result};

const QUIT_WORDS: [&str; 3] = ["q", "quit", "exit"];
const HINT_WORDS: [&str; 2] = ["h", "hint"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnCommand {
    Move(Move),
    Hint,
    Quit,
}

/// Parses one line typed on the human's turn. `Err` carries the message to show.
pub fn parse_turn_input(raw: &str) -> std::result::Result<TurnCommand, String> {
    let input = raw.trim().to_lowercase();

    if QUIT_WORDS.contains(&input.as_str()) {
        return Ok(TurnCommand::Quit);
    }

    if HINT_WORDS.contains(&input.as_str()) {
        return Ok(TurnCommand::Hint);
    }

    if input.is_empty() || !input.chars().all(|c| c.is_ascii_digit()) {
        return Err("Please enter a number or a supported command.".to_string());
    }

    match input.parse::<Move>() {
        Ok(position) if position < CELL_COUNT => Ok(TurnCommand::Move(position)),
        _ => Err("Move out of range!...Choose between 0 and 8.".to_string()),
    }
}

/// Line-oriented terminal I/O over any reader and writer.
pub struct Console<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    /// End of input counts as a request to quit.
    pub fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ClientError::Quit);
        }
        Ok(line.trim().to_lowercase())
    }

    /// Asks until one of `options` is typed. Empty input picks `default` when given.
    pub fn prompt_choice<T: Clone>(
        &mut self,
        prompt: &str,
        options: &[(&str, T)],
        default: Option<T>,
    ) -> Result<T> {
        let mut display_choices: Vec<&str> = Vec::new();
        for (key, _) in options {
            if !display_choices.contains(key) {
                display_choices.push(*key);
            }
        }

        loop {
            let raw = self.read_line(prompt)?;

            if raw.is_empty()
                && let Some(value) = default.clone()
            {
                return Ok(value);
            }

            if let Some((_, value)) = options.iter().find(|(key, _)| *key == raw) {
                return Ok(value.clone());
            }

            if QUIT_WORDS.contains(&raw.as_str()) {
                return Err(ClientError::Quit);
            }

            self.say(&format!(
                "Invalid choice!...Accepted options: {}.",
                display_choices.join(", ")
            ))?;
        }
    }

    /// Like `prompt_choice`, but any spelling `T::from_str` understands is accepted.
    /// `accepted` is shown when the input does not parse.
    pub fn prompt_parsed<T: FromStr>(
        &mut self,
        prompt: &str,
        default: T,
        accepted: &str,
    ) -> Result<T> {
        loop {
            let raw = self.read_line(prompt)?;

            if raw.is_empty() {
                return Ok(default);
            }

            if QUIT_WORDS.contains(&raw.as_str()) {
                return Err(ClientError::Quit);
            }

            match raw.parse::<T>() {
                Ok(value) => return Ok(value),
                Err(_) => {
                    self.say(&format!("Invalid choice!...Accepted options: {}.", accepted))?
                }
            }
        }
    }

    pub fn prompt_yes_no(&mut self, prompt: &str, default: bool) -> Result<bool> {
        self.prompt_choice(
            prompt,
            &[("y", true), ("yes", true), ("n", false), ("no", false)],
            Some(default),
        )
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}
