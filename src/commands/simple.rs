//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI. Works over any reader/writer pair so the
//! transcript can be driven from tests.

use crate::core::fold_letter;
use crate::solver::{EngineError, Solution};
use colored::Colorize;
use std::collections::{BTreeSet, HashSet};
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Why a line of input was not accepted as a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Please enter a single character.")]
    NotSingleCharacter,
    #[error("You've already guessed that.")]
    AlreadyGuessed,
    #[error("Please enter an alphabetic character.")]
    NotAlphabetic,
}

/// Letters guessed so far, kept by the front end rather than the engine
#[derive(Debug, Clone, Default)]
pub struct GuessTracker {
    guessed: HashSet<char>,
    order: Vec<char>,
    incorrect: BTreeSet<char>,
}

impl GuessTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn raw input into a fresh lowercase letter
    ///
    /// # Errors
    ///
    /// Returns the `GuessError` to show the player; checks run in order:
    /// exactly one character, not guessed before, alphabetic.
    pub fn validate(&self, input: &str) -> Result<char, GuessError> {
        let mut chars = input.trim().chars();
        let (Some(ch), None) = (chars.next(), chars.next()) else {
            return Err(GuessError::NotSingleCharacter);
        };

        let letter = fold_letter(ch);
        if self.guessed.contains(&letter) {
            return Err(GuessError::AlreadyGuessed);
        }
        if !letter.is_alphabetic() {
            return Err(GuessError::NotAlphabetic);
        }
        Ok(letter)
    }

    /// Remember a guess and whether the engine accepted it
    pub fn record(&mut self, letter: char, correct: bool) {
        if self.guessed.insert(letter) {
            self.order.push(letter);
        }
        if !correct {
            self.incorrect.insert(letter);
        }
    }

    /// Guesses in the order they were made
    #[must_use]
    pub fn guesses(&self) -> &[char] {
        &self.order
    }

    /// Incorrect guesses in alphabetical order
    #[must_use]
    pub fn incorrect(&self) -> Vec<char> {
        self.incorrect.iter().copied().collect()
    }

    #[must_use]
    pub fn incorrect_count(&self) -> usize {
        self.incorrect.len()
    }
}

/// Outcome of a finished game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub target: String,
    pub guesses: Vec<char>,
    pub incorrect: Vec<char>,
}

/// Errors that end a console session early
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("input ended before the word was solved")]
    InputClosed,
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// One console game
pub struct Session<R, W> {
    solution: Solution,
    tracker: GuessTracker,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    #[must_use]
    pub fn new(solution: Solution, input: R, output: W) -> Self {
        Self {
            solution,
            tracker: GuessTracker::new(),
            input,
            output,
        }
    }

    /// Play until the word is solved
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InputClosed` if input runs out first, or
    /// `SessionError::Io` if reading or writing fails.
    pub fn run(mut self) -> Result<GameSummary, SessionError> {
        while !self.solution.is_solved() {
            let letter = self.prompt_for_guess()?;
            let correct = self.solution.guess(letter);
            self.tracker.record(letter, correct);
        }

        let target = self.solution.current_target()?.text().to_string();
        writeln!(self.output, "Congrats! The word was {target}")?;
        self.output.flush()?;

        Ok(GameSummary {
            target,
            guesses: self.tracker.guesses().to_vec(),
            incorrect: self.tracker.incorrect(),
        })
    }

    fn prompt_for_guess(&mut self) -> Result<char, SessionError> {
        loop {
            writeln!(self.output, "Guess a letter.\n")?;
            writeln!(self.output, "{}", self.solution.progress_text())?;
            writeln!(
                self.output,
                "Incorrect guesses:\n{}",
                crate::output::formatters::letter_list(&self.tracker.incorrect())
            )?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(SessionError::InputClosed);
            }

            match self.tracker.validate(&line) {
                Ok(letter) => return Ok(letter),
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
    }
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error or stdin closes before the game
/// is solved.
pub fn run_simple(solution: Solution) -> Result<GameSummary, SessionError> {
    println!("\n{}", "═".repeat(62).bright_cyan());
    println!(
        "{}",
        "                 Evil Hangman - Interactive Mode".bright_green().bold()
    );
    println!("{}\n", "═".repeat(62).bright_cyan());
    println!(
        "I'm thinking of a {}-letter word. Probably.\n",
        solution.word_length()
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(solution, stdin.lock(), stdout.lock()).run()
}
