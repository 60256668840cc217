//! Adversarial Hangman engine
//!
//! Instead of committing to a secret word, the engine keeps every word still
//! consistent with the guesses so far and, on each guess, keeps whichever
//! family of candidates is least helpful to the guesser.

use super::error::{EngineError, InvalidInput};
use super::family::{Family, partition, select_family, selection_order};
use crate::core::{RevealedPattern, Word};
use log::debug;

/// Progress of a single game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// At least one cell is still hidden
    Playing,
    /// Every cell has been revealed; never left once entered
    Solved,
}

/// State of one adversarial game
///
/// Owns the shrinking candidate set and the partially revealed pattern. Only
/// [`Solution::guess`] mutates either.
#[derive(Debug, Clone)]
pub struct Solution {
    candidates: Vec<Word>,
    revealed: RevealedPattern,
    missing: usize,
}

impl Solution {
    /// Create a game from a pre-filtered candidate list
    ///
    /// The word length is taken from the first candidate; every other candidate
    /// must share it.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidInput` if `candidates` is empty or the
    /// words differ in length.
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::Word;
    /// use evil_hangman::solver::Solution;
    ///
    /// let words: Vec<Word> = ["echo", "heal", "belt", "peel", "hazy"]
    ///     .iter()
    ///     .map(|w| Word::new(*w).unwrap())
    ///     .collect();
    ///
    /// let mut game = Solution::new(words).unwrap();
    /// assert_eq!(game.progress_text(), "_ _ _ _");
    ///
    /// assert!(game.guess('e'));
    /// assert_eq!(game.progress_text(), "_ e _ _");
    /// assert_eq!(game.candidate_count(), 2);
    /// ```
    pub fn new(candidates: Vec<Word>) -> Result<Self, EngineError> {
        let Some(first) = candidates.first() else {
            return Err(InvalidInput::EmptyCandidates.into());
        };
        let length = first.len();

        if let Some(odd) = candidates.iter().find(|word| word.len() != length) {
            return Err(InvalidInput::MixedLengths {
                expected: length,
                found: odd.len(),
                word: odd.text().to_string(),
            }
            .into());
        }

        Ok(Self {
            candidates,
            revealed: RevealedPattern::unknown(length),
            missing: length,
        })
    }

    /// Whether every cell has been revealed
    #[inline]
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.missing == 0
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        if self.is_solved() {
            GameState::Solved
        } else {
            GameState::Playing
        }
    }

    /// Revealed pattern with cells separated by spaces, `_` for hidden cells
    #[must_use]
    pub fn progress_text(&self) -> String {
        self.revealed.to_string()
    }

    /// Apply a guessed letter
    ///
    /// Partitions the candidates by the pattern `letter` would induce, keeps
    /// the largest family (fewest new reveals on ties, then the smallest
    /// pattern), and reveals the family's new cells.
    ///
    /// Returns `true` if at least one cell was revealed. The caller is
    /// responsible for rejecting repeated letters; a repeat simply reveals
    /// nothing and returns `false`.
    ///
    /// # Panics
    ///
    /// Panics if partitioning a non-empty candidate set yields no family,
    /// which correct partitioning cannot do.
    pub fn guess(&mut self, letter: char) -> bool {
        let before = self.candidates.len();
        let candidates = std::mem::take(&mut self.candidates);
        let families = partition(candidates, &self.revealed, letter);
        let family_count = families.len();

        let winner = select_family(families)
            .expect("a non-empty candidate set always yields at least one family");

        debug!(
            "guess '{letter}': {family_count} families, kept {} ({} of {before} words, {} new reveals)",
            winner.pattern.compact(),
            winner.size(),
            winner.new_reveals
        );

        let new_reveals = winner.new_reveals;
        self.candidates = winner.words;

        if new_reveals == 0 {
            return false;
        }

        let revealed = self.revealed.reveal(&winner.pattern, letter);
        debug_assert_eq!(revealed, new_reveals);
        self.missing -= revealed;
        true
    }

    /// Any word consistent with the game so far
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvariantViolation` if the candidate set is empty,
    /// which no sequence of guesses can cause.
    pub fn current_target(&self) -> Result<&Word, EngineError> {
        self.candidates
            .first()
            .ok_or(EngineError::InvariantViolation("candidate set is empty"))
    }

    /// Families `letter` would produce, worst for the guesser first
    ///
    /// Does not change the game; the first family is the one
    /// [`Solution::guess`] would keep.
    #[must_use]
    pub fn families(&self, letter: char) -> Vec<Family> {
        let mut families = partition(self.candidates.iter().cloned(), &self.revealed, letter);
        families.sort_by(selection_order);
        families
    }

    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    #[inline]
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    #[inline]
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.revealed.len()
    }

    #[inline]
    #[must_use]
    pub const fn revealed(&self) -> &RevealedPattern {
        &self.revealed
    }

    /// Number of hidden cells
    #[inline]
    #[must_use]
    pub const fn missing_count(&self) -> usize {
        self.missing
    }
}
