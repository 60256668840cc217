//! Evil Hangman
//!
//! A Hangman engine that never commits to a secret word. After each guess it
//! splits the remaining candidates into families by where the letter appears
//! and keeps the largest family.
//!
//! # Quick Start
//!
//! ```rust
//! use evil_hangman::core::Word;
//! use evil_hangman::solver::Solution;
//!
//! let words = ["echo", "heal", "belt", "peel", "hazy"]
//!     .into_iter()
//!     .map(|w| Word::new(w).unwrap())
//!     .collect();
//! let mut game = Solution::new(words).unwrap();
//!
//! assert!(game.guess('e'));
//! assert_eq!(game.progress_text(), "_ e _ _");
//! assert_eq!(game.candidate_count(), 2);
//! ```

// Core domain types
pub mod core;

// Adversarial engine
pub mod solver;

// Word lists
pub mod wordlists;

// Shared settings
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
