//! Benchmark command
//!
//! Plays a greedy guesser against the engine over many seeded games and
//! measures how many wrong guesses the engine forces.

use crate::solver::Solution;
use crate::wordlists::{DictionarySelector, LengthChoice};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    pub games: usize,
    /// Game `i` is seeded with `seed + i`
    pub seed: u64,
    pub length: LengthChoice,
    pub show_progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(games: usize, seed: u64) -> Self {
        Self {
            games,
            seed,
            length: LengthChoice::Random,
            show_progress: false,
        }
    }
}

/// Outcome of one simulated game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub word_length: usize,
    pub starting_candidates: usize,
    pub target: String,
    pub guesses: usize,
    pub wrong_guesses: usize,
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub records: Vec<GameRecord>,
    pub average_wrong: f64,
    pub min_wrong: usize,
    pub max_wrong: usize,
    /// Wrong-guess count → number of games
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Letter the greedy guesser plays next
///
/// Chooses the unguessed letter that appears in the most remaining candidates,
/// breaking ties alphabetically. Returns `None` once every candidate letter has
/// been guessed.
#[must_use]
pub fn greedy_letter(solution: &Solution, guessed: &FxHashSet<char>) -> Option<char> {
    let mut counts: FxHashMap<char, usize> = FxHashMap::default();
    for word in solution.candidates() {
        for letter in word.distinct_letters() {
            if !guessed.contains(&letter) {
                *counts.entry(letter).or_insert(0) += 1;
            }
        }
    }

    counts
        .into_iter()
        .max_by(|(a, a_count), (b, b_count)| a_count.cmp(b_count).then_with(|| b.cmp(a)))
        .map(|(letter, _)| letter)
}

/// Play one game to completion with the greedy guesser
///
/// # Errors
///
/// Returns an error if the engine runs out of candidates, which only a broken
/// invariant can cause.
pub fn play_greedy(mut solution: Solution) -> Result<GameRecord, String> {
    let word_length = solution.word_length();
    let starting_candidates = solution.candidate_count();
    let mut guessed = FxHashSet::default();
    let mut wrong_guesses = 0;

    while !solution.is_solved() {
        let letter = greedy_letter(&solution, &guessed)
            .ok_or_else(|| "Guesser ran out of letters before solving".to_string())?;
        guessed.insert(letter);
        if !solution.guess(letter) {
            wrong_guesses += 1;
        }
    }

    let target = solution
        .current_target()
        .map_err(|e| e.to_string())?
        .text()
        .to_string();

    Ok(GameRecord {
        word_length,
        starting_candidates,
        target,
        guesses: guessed.len(),
        wrong_guesses,
    })
}

/// Run the benchmark
///
/// Games are independent and run in parallel, each on its own engine.
///
/// # Errors
///
/// Returns an error if a game's candidate set cannot be selected.
///
/// # Panics
///
/// Panics if the progress bar template is invalid.
pub fn run_benchmark(
    selector: &DictionarySelector,
    config: &BenchmarkConfig,
) -> Result<BenchmarkResult, String> {
    let start = Instant::now();

    let pb = if config.show_progress {
        let pb = ProgressBar::new(config.games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let records = (0..config.games)
        .into_par_iter()
        .map(|i| -> Result<GameRecord, String> {
            let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(i as u64));
            let candidates = selector
                .select(config.length, &mut rng)
                .map_err(|e| e.to_string())?;
            let solution = Solution::new(candidates).map_err(|e| e.to_string())?;
            let record = play_greedy(solution)?;
            pb.inc(1);
            Ok(record)
        })
        .collect::<Result<Vec<GameRecord>, String>>()?;

    pb.finish_with_message("done");

    let duration = start.elapsed();
    let mut distribution = BTreeMap::new();
    for record in &records {
        *distribution.entry(record.wrong_guesses).or_insert(0) += 1;
    }

    let total_wrong: usize = records.iter().map(|r| r.wrong_guesses).sum();
    let games = records.len();

    Ok(BenchmarkResult {
        average_wrong: if games == 0 {
            0.0
        } else {
            total_wrong as f64 / games as f64
        },
        min_wrong: records.iter().map(|r| r.wrong_guesses).min().unwrap_or(0),
        max_wrong: records.iter().map(|r| r.wrong_guesses).max().unwrap_or(0),
        distribution,
        duration,
        games_per_second: games as f64 / duration.as_secs_f64().max(f64::EPSILON),
        records,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::wordlists::DICTIONARY;
    use crate::wordlists::loader::words_from_slice;

    fn solution(list: &[&str]) -> Solution {
        Solution::new(words_from_slice(list)).unwrap()
    }

    #[test]
    fn greedy_prefers_most_common_letter() {
        let game = solution(&["bake", "cake", "lake", "bike"]);
        let letter = greedy_letter(&game, &FxHashSet::default());

        // 'e' and 'k' are in all four
        assert_eq!(letter, Some('e'));
    }

    #[test]
    fn greedy_skips_guessed_letters() {
        let game = solution(&["bake", "cake", "lake", "bike"]);
        let guessed: FxHashSet<char> = ['e', 'k'].into_iter().collect();

        assert_eq!(greedy_letter(&game, &guessed), Some('a'));
    }

    #[test]
    fn play_greedy_solves_and_counts() {
        let record = play_greedy(solution(&["echo", "heal", "belt", "peel", "hazy"])).unwrap();

        assert_eq!(record.word_length, 4);
        assert_eq!(record.starting_candidates, 5);
        assert_eq!(record.target, "heal");
        assert_eq!(record.guesses, 4);
        assert_eq!(record.wrong_guesses, 0);
        assert!(Word::new(&record.target).is_ok());
    }

    #[test]
    fn benchmark_runs() {
        let selector = DictionarySelector::new(words_from_slice(DICTIONARY));
        let result = run_benchmark(&selector, &BenchmarkConfig::new(12, 1)).unwrap();

        assert_eq!(result.records.len(), 12);
        assert!(result.average_wrong >= result.min_wrong as f64);
        assert!(result.average_wrong <= result.max_wrong as f64);
        assert_eq!(result.distribution.values().sum::<usize>(), 12);
    }

    #[test]
    fn benchmark_is_reproducible() {
        let selector = DictionarySelector::new(words_from_slice(DICTIONARY));
        let config = BenchmarkConfig::new(6, 99);

        let first = run_benchmark(&selector, &config).unwrap();
        let second = run_benchmark(&selector, &config).unwrap();

        assert_eq!(first.records, second.records);
    }

    #[test]
    fn benchmark_fixed_length() {
        let selector = DictionarySelector::new(words_from_slice(DICTIONARY));
        let mut config = BenchmarkConfig::new(4, 5);
        config.length = LengthChoice::Fixed(3);

        let result = run_benchmark(&selector, &config).unwrap();
        assert!(result.records.iter().all(|r| r.word_length == 3));
    }

    #[test]
    fn benchmark_reports_selection_errors() {
        let selector = DictionarySelector::new(words_from_slice(&["cat"]));
        let mut config = BenchmarkConfig::new(2, 0);
        config.length = LengthChoice::Fixed(9);

        assert!(run_benchmark(&selector, &config).is_err());
    }

    #[test]
    fn benchmark_with_no_games() {
        let selector = DictionarySelector::new(words_from_slice(&["cat"]));
        let result = run_benchmark(&selector, &BenchmarkConfig::new(0, 0)).unwrap();

        assert!(result.records.is_empty());
        assert_eq!(result.max_wrong, 0);
    }
}
