//! Adversarial solution engine
//!
//! This module contains the family partitioning and the engine that applies it
//! guess by guess.

mod engine;
mod error;
pub mod family;

pub use engine::{GameState, Solution};
pub use error::{EngineError, InvalidInput};
pub use family::Family;
