//! Initial candidate selection
//!
//! Picks the word length for a game and filters the dictionary down to the
//! candidates of that length. Randomness is always supplied by the caller.

use crate::core::Word;
use log::info;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::collections::BTreeSet;
use thiserror::Error;

/// How the word length of a game is decided
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthChoice {
    /// Length of a uniformly sampled dictionary word
    #[default]
    Random,
    /// Length of the first dictionary word
    FirstWord,
    /// A specific length
    Fixed(usize),
}

/// Error type for candidate selection
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    #[error("dictionary contains no usable words")]
    EmptyDictionary,
    #[error("dictionary has no words of length {0}")]
    NoWordsOfLength(usize),
}

/// A dictionary ready to hand out candidate sets
#[derive(Debug, Clone)]
pub struct DictionarySelector {
    words: Vec<Word>,
}

impl DictionarySelector {
    /// Create a selector over `words`
    ///
    /// Duplicate words are dropped, keeping the first occurrence.
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        let mut seen = FxHashSet::default();
        let words = words
            .into_iter()
            .filter(|word| seen.insert(word.text().to_string()))
            .collect();
        Self { words }
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Distinct word lengths in the dictionary, ascending
    #[must_use]
    pub fn word_lengths(&self) -> Vec<usize> {
        self.words
            .iter()
            .map(Word::len)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Decide the word length for a game
    ///
    /// # Errors
    ///
    /// Returns `SelectError::EmptyDictionary` if there are no words, or
    /// `SelectError::NoWordsOfLength` if a fixed length has no words.
    pub fn pick_length<R: Rng + ?Sized>(
        &self,
        choice: LengthChoice,
        rng: &mut R,
    ) -> Result<usize, SelectError> {
        if self.words.is_empty() {
            return Err(SelectError::EmptyDictionary);
        }

        match choice {
            LengthChoice::Random => self
                .words
                .choose(rng)
                .map(Word::len)
                .ok_or(SelectError::EmptyDictionary),
            LengthChoice::FirstWord => self
                .words
                .first()
                .map(Word::len)
                .ok_or(SelectError::EmptyDictionary),
            LengthChoice::Fixed(length) => {
                if self.words.iter().any(|word| word.len() == length) {
                    Ok(length)
                } else {
                    Err(SelectError::NoWordsOfLength(length))
                }
            }
        }
    }

    /// All dictionary words of `length`, in dictionary order
    #[must_use]
    pub fn candidates_of_length(&self, length: usize) -> Vec<Word> {
        self.words
            .iter()
            .filter(|word| word.len() == length)
            .cloned()
            .collect()
    }

    /// Pick a length and return the initial candidate set for it
    ///
    /// # Errors
    ///
    /// See [`DictionarySelector::pick_length`].
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::wordlists::loader::words_from_slice;
    /// use evil_hangman::wordlists::{DictionarySelector, LengthChoice};
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let selector = DictionarySelector::new(words_from_slice(&["cat", "dog", "echo"]));
    /// let mut rng = StdRng::seed_from_u64(7);
    ///
    /// let candidates = selector.select(LengthChoice::Fixed(3), &mut rng).unwrap();
    /// assert_eq!(candidates.len(), 2);
    /// ```
    pub fn select<R: Rng + ?Sized>(
        &self,
        choice: LengthChoice,
        rng: &mut R,
    ) -> Result<Vec<Word>, SelectError> {
        let length = self.pick_length(choice, rng)?;
        let candidates = self.candidates_of_length(length);
        info!(
            "playing with {length}-letter words ({} candidates)",
            candidates.len()
        );
        Ok(candidates)
    }
}
