//! Word families
//!
//! Given a guessed letter, candidates are partitioned by the pattern each one
//! would induce. The engine keeps the family that is worst for the guesser.

use crate::core::{RevealedPattern, Word};
use rustc_hash::FxHashMap;
use std::cmp::Ordering;

/// Candidates that would all produce the same pattern for one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Family {
    /// Pattern shared by every word in the family
    pub pattern: RevealedPattern,
    /// Members, in the order they appeared among the candidates
    pub words: Vec<Word>,
    /// Hidden cells this family would reveal
    pub new_reveals: usize,
}

impl Family {
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.words.len()
    }
}

/// Partition candidates into families for `letter`
///
/// Every candidate lands in exactly one family. Families are returned in order
/// of first appearance.
///
/// # Examples
/// ```
/// use evil_hangman::core::{RevealedPattern, Word};
/// use evil_hangman::solver::family::partition;
///
/// let words: Vec<Word> = ["echo", "heal", "belt", "peel", "hazy"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
///
/// let families = partition(words, &RevealedPattern::unknown(4), 'e');
/// assert_eq!(families.len(), 4);
/// assert_eq!(families.iter().map(|f| f.size()).sum::<usize>(), 5);
/// ```
pub fn partition<I>(candidates: I, revealed: &RevealedPattern, letter: char) -> Vec<Family>
where
    I: IntoIterator<Item = Word>,
{
    let mut families: Vec<Family> = Vec::new();
    let mut index: FxHashMap<RevealedPattern, usize> = FxHashMap::default();

    for word in candidates {
        let pattern = revealed.induced_by(&word, letter);

        if let Some(&slot) = index.get(&pattern) {
            families[slot].words.push(word);
            continue;
        }

        let new_reveals = pattern.new_reveals(revealed, letter);
        index.insert(pattern.clone(), families.len());
        families.push(Family {
            pattern,
            words: vec![word],
            new_reveals,
        });
    }

    families
}

/// Order families from worst to best for the guesser
///
/// Larger families come first; among equal sizes, fewer new reveals come
/// first; any remaining tie goes to the lexicographically smallest pattern.
#[must_use]
pub fn selection_order(a: &Family, b: &Family) -> Ordering {
    b.size()
        .cmp(&a.size())
        .then_with(|| a.new_reveals.cmp(&b.new_reveals))
        .then_with(|| a.pattern.cmp(&b.pattern))
}

/// Pick the family the engine keeps
///
/// Returns `None` only if `families` is empty.
#[must_use]
pub fn select_family(families: Vec<Family>) -> Option<Family> {
    families.into_iter().min_by(selection_order)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn texts(family: &Family) -> Vec<&str> {
        family.words.iter().map(Word::text).collect()
    }

    #[test]
    fn partition_groups_by_induced_pattern() {
        let families = partition(
            words(&["echo", "heal", "belt", "peel", "hazy"]),
            &RevealedPattern::unknown(4),
            'e',
        );

        let by_pattern: Vec<(String, Vec<&str>)> = families
            .iter()
            .map(|f| (f.pattern.compact(), texts(f)))
            .collect();

        assert_eq!(
            by_pattern,
            vec![
                ("e___".to_string(), vec!["echo"]),
                ("_e__".to_string(), vec!["heal", "belt"]),
                ("_ee_".to_string(), vec!["peel"]),
                ("____".to_string(), vec!["hazy"]),
            ]
        );
    }

    #[test]
    fn partition_loses_and_duplicates_nothing() {
        let input = words(&["echo", "heal", "belt", "peel", "hazy", "feel", "bell"]);
        let families = partition(input.clone(), &RevealedPattern::unknown(4), 'l');

        let mut all: Vec<String> = families
            .iter()
            .flat_map(|f| f.words.iter().map(|w| w.text().to_string()))
            .collect();
        let mut expected: Vec<String> = input.iter().map(|w| w.text().to_string()).collect();
        all.sort();
        expected.sort();

        assert_eq!(all, expected);
    }

    #[test]
    fn partition_records_new_reveals() {
        let families = partition(
            words(&["peel", "hazy"]),
            &RevealedPattern::unknown(4),
            'e',
        );

        assert_eq!(families[0].new_reveals, 2);
        assert_eq!(families[1].new_reveals, 0);
    }

    #[test]
    fn partition_of_empty_input_is_empty() {
        let families = partition(Vec::new(), &RevealedPattern::unknown(4), 'e');
        assert!(families.is_empty());
        assert!(select_family(families).is_none());
    }

    #[test]
    fn select_prefers_largest_family() {
        let families = partition(
            words(&["echo", "heal", "belt", "peel", "hazy"]),
            &RevealedPattern::unknown(4),
            'e',
        );

        let winner = select_family(families).unwrap();
        assert_eq!(winner.pattern.compact(), "_e__");
        assert_eq!(texts(&winner), vec!["heal", "belt"]);
    }

    #[test]
    fn select_breaks_size_ties_by_fewest_reveals() {
        // "peel" reveals two cells, "hazy" reveals none
        let families = partition(
            words(&["peel", "hazy"]),
            &RevealedPattern::unknown(4),
            'e',
        );

        let winner = select_family(families).unwrap();
        assert_eq!(texts(&winner), vec!["hazy"]);
        assert_eq!(winner.new_reveals, 0);
    }

    #[test]
    fn select_breaks_full_ties_by_smallest_pattern() {
        // Both reveal one cell: "e___" vs "___e"
        let families = partition(
            words(&["echo", "care"]),
            &RevealedPattern::unknown(4),
            'e',
        );

        let winner = select_family(families).unwrap();
        assert_eq!(winner.pattern.compact(), "___e");
    }

    #[test]
    fn selection_is_independent_of_input_order() {
        let forward = words(&["echo", "care", "hazy", "tide", "bold"]);
        let mut backward = forward.clone();
        backward.reverse();

        let a = select_family(partition(forward, &RevealedPattern::unknown(4), 'e')).unwrap();
        let b = select_family(partition(backward, &RevealedPattern::unknown(4), 'e')).unwrap();

        assert_eq!(a.pattern, b.pattern);
        assert_eq!(a.size(), b.size());
    }
}
