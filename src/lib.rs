//! Solver library for sheep and wolves river-crossing puzzles.
//!
//! This crate finds shortest crossing plans by breadth-first search over
//! bank configurations, and replays plans crossing-by-crossing to verify
//! them independently of the search.

pub mod executor;
pub mod pruning;
pub mod puzzle;
pub mod solver;

// Re-export main types
pub use executor::{execute, verify_plan, ExecutionResult, ExecutionStatus};
pub use pruning::{is_repeated_cargo, PruneRules};
pub use puzzle::{BankCount, BoatSide, Configuration, Move, Puzzle};
pub use solver::{find_crossing_plan, solve, SolverConfig, SolverResult};
