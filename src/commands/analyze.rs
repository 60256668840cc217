//! Letter analysis command
//!
//! Shows every family a letter would split the candidates into, and which one
//! the engine would keep.

use crate::core::{Word, fold_letter};
use crate::solver::Solution;

/// Number of example words kept per family
const SAMPLE_SIZE: usize = 5;

/// One family in an analysis
pub struct FamilyRow {
    pub pattern: String,
    pub size: usize,
    pub new_reveals: usize,
    pub sample: Vec<String>,
}

/// Result of analyzing a letter
pub struct AnalysisResult {
    pub letter: char,
    pub progress: String,
    pub total_candidates: usize,
    /// Families in selection order; the first is the one the engine keeps
    pub families: Vec<FamilyRow>,
}

impl AnalysisResult {
    /// Whether the engine would have to reveal the letter
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.families.first().is_some_and(|f| f.new_reveals > 0)
    }

    /// Candidates left after the guess
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.families.first().map_or(0, |f| f.size)
    }
}

/// Analyze how `letter` would split the candidates after `prior_guesses`
///
/// # Errors
///
/// Returns an error if:
/// - The candidate list is empty or mixes word lengths
/// - `letter` or any prior guess is not alphabetic
/// - `letter` was already among the prior guesses
pub fn analyze_letter(
    candidates: Vec<Word>,
    prior_guesses: &[char],
    letter: char,
) -> Result<AnalysisResult, String> {
    let letter = normalize(letter)?;
    let mut solution = Solution::new(candidates).map_err(|e| e.to_string())?;

    let mut seen = Vec::with_capacity(prior_guesses.len());
    for &guess in prior_guesses {
        let guess = normalize(guess)?;
        if seen.contains(&guess) {
            continue;
        }
        seen.push(guess);
        solution.guess(guess);
    }

    if seen.contains(&letter) {
        return Err(format!("Letter '{letter}' was already guessed"));
    }

    let families = solution
        .families(letter)
        .into_iter()
        .map(|family| FamilyRow {
            pattern: family.pattern.compact(),
            size: family.size(),
            new_reveals: family.new_reveals,
            sample: family
                .words
                .iter()
                .take(SAMPLE_SIZE)
                .map(|word| word.text().to_string())
                .collect(),
        })
        .collect();

    Ok(AnalysisResult {
        letter,
        progress: solution.progress_text(),
        total_candidates: solution.candidate_count(),
        families,
    })
}

fn normalize(letter: char) -> Result<char, String> {
    if !letter.is_alphabetic() {
        return Err(format!("'{letter}' is not an alphabetic character"));
    }
    Ok(fold_letter(letter))
}
