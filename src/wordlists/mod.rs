//! Dictionaries for Hangman
//!
//! Provides the embedded dictionary, file loading, and the selector that turns
//! a dictionary into the initial candidate set of one game.

mod embedded;
pub mod loader;
pub mod selector;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};
pub use selector::{DictionarySelector, LengthChoice, SelectError};
