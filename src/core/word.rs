//! Hangman word representation
//!
//! A Word stores a lowercased alphabetic word of any length along with letter
//! position indices used when partitioning candidates.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// A dictionary word with letter position tracking
///
/// Stores the word as characters and maintains a map of letter positions so the
/// engine can place a guessed letter without rescanning the word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    chars: Box<[char]>,
    char_positions: FxHashMap<char, Vec<usize>>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must contain at least one letter")]
    Empty,
    #[error("Word '{0}' contains non-alphabetic characters")]
    NonAlphabetic(String),
}

/// Lowercase a single letter without regard to its position in a word
///
/// Letters whose lowercase form is more than one character are kept as is, so
/// a word and a typed guess always fold the same way.
#[must_use]
pub fn fold_letter(letter: char) -> char {
    let mut lower = letter.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(folded), None) => folded,
        _ => letter,
    }
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The word is empty
    /// - Contains anything other than alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::Word;
    ///
    /// let word = Word::new("Echo").unwrap();
    /// assert_eq!(word.text(), "echo");
    /// assert_eq!(word.len(), 4);
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("don't").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().chars().map(fold_letter).collect();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.chars().all(char::is_alphabetic) {
            return Err(WordError::NonAlphabetic(text));
        }

        let chars: Box<[char]> = text.chars().collect();

        let mut char_positions: FxHashMap<char, Vec<usize>> = FxHashMap::default();
        for (i, &ch) in chars.iter().enumerate() {
            char_positions.entry(ch).or_default().push(i);
        }

        Ok(Self {
            text,
            chars,
            char_positions,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's letters
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false; words are validated non-empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.char_positions.contains_key(&letter)
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: char) -> &[usize] {
        self.char_positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }

    /// Distinct letters of the word, sorted
    #[must_use]
    pub fn distinct_letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.char_positions.keys().copied().collect();
        letters.sort_unstable();
        letters
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("echo").unwrap();
        assert_eq!(word.text(), "echo");
        assert_eq!(word.chars(), &['e', 'c', 'h', 'o']);
        assert_eq!(word.len(), 4);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("HEAL").unwrap();
        assert_eq!(word.text(), "heal");

        let word2 = Word::new("HeAl").unwrap();
        assert_eq!(word2.text(), "heal");
    }

    #[test]
    fn word_creation_any_length() {
        assert_eq!(Word::new("a").unwrap().len(), 1);
        assert_eq!(Word::new("tornado").unwrap().len(), 7);
    }

    #[test]
    fn word_creation_empty() {
        assert!(matches!(Word::new(""), Err(WordError::Empty)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(matches!(
            Word::new("cat3"),
            Err(WordError::NonAlphabetic(_))
        ));
        assert!(Word::new("ca t").is_err()); // Space
        assert!(Word::new("can't").is_err()); // Punctuation
    }

    #[test]
    fn word_folds_each_letter_alone() {
        let word = Word::new("ΟΔΟΣ").unwrap();
        assert_eq!(word.text(), "οδοσ");
        assert!(word.has_letter(fold_letter('Σ')));
        assert_eq!(fold_letter('Q'), 'q');
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("hazy").unwrap();
        assert!(word.has_letter('h'));
        assert!(word.has_letter('z'));
        assert!(!word.has_letter('e'));
    }

    #[test]
    fn word_positions_of_duplicates() {
        let word = Word::new("peel").unwrap();
        assert_eq!(word.positions_of('e'), &[1, 2]);
        assert_eq!(word.positions_of('p'), &[0]);
        assert_eq!(word.positions_of('z'), &[]);
    }

    #[test]
    fn word_distinct_letters_sorted() {
        let word = Word::new("peel").unwrap();
        assert_eq!(word.distinct_letters(), vec!['e', 'l', 'p']);
    }

    #[test]
    fn word_display() {
        let word = Word::new("echo").unwrap();
        assert_eq!(format!("{word}"), "echo");
    }

    #[test]
    fn word_equality() {
        let word1 = Word::new("echo").unwrap();
        let word2 = Word::new("ECHO").unwrap();
        let word3 = Word::new("heal").unwrap();

        assert_eq!(word1, word2);
        assert_ne!(word1, word3);
    }
}
