//! Partially revealed word patterns
//!
//! A pattern holds one cell per letter position:
//! - `Some(letter)` = the letter is known at this position
//! - `None` = still hidden, rendered as `_`
//!
//! Patterns double as family keys: the pattern a candidate word would induce
//! for a guessed letter identifies the family the word belongs to.

use super::Word;
use std::fmt;

/// Character used to render a hidden cell
pub const PLACEHOLDER: char = '_';

/// Revealed (or hypothetical) state of every letter position
///
/// Ordering is lexicographic over cells with hidden cells sorting before
/// letters, so `_e__ < e___`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RevealedPattern(Box<[Option<char>]>);

impl RevealedPattern {
    /// Create a pattern with every cell hidden
    #[must_use]
    pub fn unknown(len: usize) -> Self {
        Self(vec![None; len].into_boxed_slice())
    }

    /// Number of cells
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Option<char>] {
        &self.0
    }

    /// Count hidden cells
    #[must_use]
    pub fn unknown_count(&self) -> usize {
        self.0.iter().filter(|cell| cell.is_none()).count()
    }

    /// Pattern `word` would produce if `letter` were accepted
    ///
    /// Every position where `word` has `letter` shows `letter`; every other
    /// position keeps this pattern's cell.
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::{RevealedPattern, Word};
    ///
    /// let revealed = RevealedPattern::unknown(4);
    /// let peel = Word::new("peel").unwrap();
    ///
    /// assert_eq!(revealed.induced_by(&peel, 'e').compact(), "_ee_");
    /// assert_eq!(revealed.induced_by(&peel, 'z').compact(), "____");
    /// ```
    #[must_use]
    pub fn induced_by(&self, word: &Word, letter: char) -> Self {
        debug_assert_eq!(word.len(), self.len(), "word length must match pattern");

        let mut cells = self.0.clone();
        for &position in word.positions_of(letter) {
            cells[position] = Some(letter);
        }
        Self(cells)
    }

    /// Count cells showing `letter` here that are hidden in `base`
    #[must_use]
    pub fn new_reveals(&self, base: &Self, letter: char) -> usize {
        self.0
            .iter()
            .zip(base.0.iter())
            .filter(|&(&cell, &known)| cell == Some(letter) && known.is_none())
            .count()
    }

    /// Copy the newly revealed `letter` cells of `other` into this pattern
    ///
    /// Known cells are never overwritten. Returns the number of cells revealed.
    pub fn reveal(&mut self, other: &Self, letter: char) -> usize {
        let mut revealed = 0;
        for (cell, &shown) in self.0.iter_mut().zip(other.0.iter()) {
            if cell.is_none() && shown == Some(letter) {
                *cell = Some(letter);
                revealed += 1;
            }
        }
        revealed
    }

    /// Check that `word` agrees with every known cell
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        word.len() == self.len()
            && self
                .0
                .iter()
                .zip(word.chars())
                .all(|(cell, &ch)| cell.is_none_or(|known| known == ch))
    }

    /// Render without separators, e.g. `_e__`
    #[must_use]
    pub fn compact(&self) -> String {
        self.0
            .iter()
            .map(|cell| cell.unwrap_or(PLACEHOLDER))
            .collect()
    }
}

/// Renders cells separated by single spaces, e.g. `_ e _ _`
impl fmt::Display for RevealedPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", cell.unwrap_or(PLACEHOLDER))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn unknown_pattern_is_all_hidden() {
        let pattern = RevealedPattern::unknown(4);
        assert_eq!(pattern.len(), 4);
        assert_eq!(pattern.unknown_count(), 4);
        assert_eq!(pattern.to_string(), "_ _ _ _");
        assert_eq!(pattern.compact(), "____");
    }

    #[test]
    fn induced_patterns_for_example_words() {
        let base = RevealedPattern::unknown(4);

        assert_eq!(base.induced_by(&word("heal"), 'e').compact(), "_e__");
        assert_eq!(base.induced_by(&word("belt"), 'e').compact(), "_e__");
        assert_eq!(base.induced_by(&word("echo"), 'e').compact(), "e___");
        assert_eq!(base.induced_by(&word("peel"), 'e').compact(), "_ee_");
        assert_eq!(base.induced_by(&word("hazy"), 'e').compact(), "____");
    }

    #[test]
    fn induced_pattern_keeps_known_cells() {
        let mut base = RevealedPattern::unknown(4);
        let peel = word("peel");
        let with_e = base.induced_by(&peel, 'e');
        base.reveal(&with_e, 'e');

        assert_eq!(base.induced_by(&peel, 'l').compact(), "_eel");
        assert_eq!(base.induced_by(&peel, 'z').compact(), "_ee_");
    }

    #[test]
    fn new_reveals_counts_only_hidden_cells() {
        let base = RevealedPattern::unknown(4);
        let peel = word("peel");
        let induced = base.induced_by(&peel, 'e');

        assert_eq!(induced.new_reveals(&base, 'e'), 2);
        assert_eq!(induced.new_reveals(&induced, 'e'), 0);
        assert_eq!(base.new_reveals(&base, 'e'), 0);
    }

    #[test]
    fn reveal_never_overwrites_known_cells() {
        let mut base = RevealedPattern::unknown(3);
        let cat = word("cat");
        let with_c = base.induced_by(&cat, 'c');
        assert_eq!(base.reveal(&with_c, 'c'), 1);
        assert_eq!(base.reveal(&with_c, 'c'), 0);
        assert_eq!(base.compact(), "c__");
        assert_eq!(base.unknown_count(), 2);
    }

    #[test]
    fn matches_checks_known_cells() {
        let base = RevealedPattern::unknown(4);
        let pattern = base.induced_by(&word("heal"), 'e');

        assert!(pattern.matches(&word("belt")));
        assert!(!pattern.matches(&word("echo")));
        assert!(!pattern.matches(&word("bee")));
    }

    #[test]
    fn ordering_puts_hidden_cells_first() {
        let base = RevealedPattern::unknown(4);
        let hidden_first = base.induced_by(&word("heal"), 'e');
        let letter_first = base.induced_by(&word("echo"), 'e');
        let none = base.induced_by(&word("hazy"), 'e');

        assert!(none < hidden_first);
        assert!(hidden_first < letter_first);
    }

    #[test]
    fn display_separates_cells() {
        let base = RevealedPattern::unknown(4);
        let pattern = base.induced_by(&word("peel"), 'e');
        assert_eq!(format!("{pattern}"), "_ e e _");
    }
}
