//! Game configuration
//!
//! Everything a front end needs to start games: where the dictionary comes
//! from, how the word length is chosen, and the random seed.

use crate::wordlists::loader::{load_from_file, words_from_slice};
use crate::wordlists::{DICTIONARY, DictionarySelector, LengthChoice};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::PathBuf;

/// Where dictionary words come from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DictionarySource {
    /// The dictionary compiled into the binary
    #[default]
    Embedded,
    /// A whitespace-delimited word file
    File(PathBuf),
}

impl DictionarySource {
    /// Parse the `-d` flag: `all` for the embedded dictionary, otherwise a path
    #[must_use]
    pub fn from_flag(flag: &str) -> Self {
        match flag {
            "all" | "embedded" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        }
    }
}

/// Settings shared by every front end
#[derive(Debug, Clone, Default)]
pub struct GameConfig {
    pub dictionary: DictionarySource,
    pub length: LengthChoice,
    pub seed: Option<u64>,
}

impl GameConfig {
    #[must_use]
    pub const fn new(
        dictionary: DictionarySource,
        length: LengthChoice,
        seed: Option<u64>,
    ) -> Self {
        Self {
            dictionary,
            length,
            seed,
        }
    }

    /// Random source for length selection
    ///
    /// Seeded from `seed` when set, from the OS otherwise.
    #[must_use]
    pub fn rng(&self) -> StdRng {
        self.seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }

    /// Load the configured dictionary
    ///
    /// # Errors
    ///
    /// Returns an I/O error if a dictionary file cannot be read.
    pub fn load_selector(&self) -> io::Result<DictionarySelector> {
        let words = match &self.dictionary {
            DictionarySource::Embedded => words_from_slice(DICTIONARY),
            DictionarySource::File(path) => load_from_file(path)?,
        };
        Ok(DictionarySelector::new(words))
    }
}
