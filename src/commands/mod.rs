//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod simple;

pub use analyze::{AnalysisResult, FamilyRow, analyze_letter};
pub use benchmark::{BenchmarkConfig, BenchmarkResult, GameRecord, run_benchmark};
pub use simple::{GameSummary, GuessError, GuessTracker, Session, SessionError, run_simple};
