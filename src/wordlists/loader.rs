//! Dictionary loading utilities
//!
//! Dictionaries are plain text with whitespace-delimited words.

use crate::core::Word;
use log::debug;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping any invalid tokens.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use evil_hangman::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/dictionary.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_tokens(&content))
}

/// Split text on whitespace and keep the tokens that are valid words
#[must_use]
pub fn words_from_tokens(content: &str) -> Vec<Word> {
    content
        .split_whitespace()
        .filter_map(|token| match Word::new(token) {
            Ok(word) => Some(word),
            Err(e) => {
                debug!("skipping dictionary token: {e}");
                None
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use evil_hangman::wordlists::loader::words_from_slice;
/// use evil_hangman::wordlists::DICTIONARY;
///
/// let words = words_from_slice(DICTIONARY);
/// assert_eq!(words.len(), DICTIONARY.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_tokens_splits_on_any_whitespace() {
        let words = words_from_tokens("echo heal\n\tbelt\r\n\n  peel ");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["echo", "heal", "belt", "peel"]);
    }

    #[test]
    fn words_from_tokens_skips_invalid() {
        let words = words_from_tokens("cat don't r2d2 Dog");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["cat", "dog"]);
    }

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["a", "cat", "tornado"]);
        assert_eq!(words.len(), 3);
        assert_eq!(words[2].text(), "tornado");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn load_from_file_reads_tokens() {
        let path = std::env::temp_dir().join(format!(
            "evil_hangman_loader_{}.txt",
            std::process::id()
        ));
        {
            let mut file = fs::File::create(&path).unwrap();
            writeln!(file, "echo heal").unwrap();
            writeln!(file, "belt").unwrap();
        }

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words.len(), 3);
        assert_eq!(words[1].text(), "heal");
    }

    #[test]
    fn load_from_missing_file_fails() {
        assert!(load_from_file("/nonexistent/evil_hangman/dictionary.txt").is_err());
    }
}
