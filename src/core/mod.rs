//! Core domain types for Hangman
//!
//! Words and revealed patterns. Everything here is pure and has no knowledge of
//! the adversarial engine built on top of it.

mod pattern;
mod word;

pub use pattern::{PLACEHOLDER, RevealedPattern};
pub use word::{Word, WordError, fold_letter};
