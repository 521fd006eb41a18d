//! Step-by-step replay of crossing plans.
//!
//! The executor applies a plan one crossing at a time against the same
//! rules the solver searches under, reporting how far the plan got and why
//! it stopped. It is the independent check that a plan produced elsewhere
//! actually ferries every animal across.

use serde::{Deserialize, Serialize};

use crate::puzzle::{Configuration, Move, Puzzle};

/// Why a replay stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionStatus {
    /// Every animal reached the far bank.
    Solved,
    /// The plan ran out of crossings before reaching the goal.
    Incomplete,
    /// A crossing used a cargo the boat's direction does not allow.
    IllegalCargo,
    /// A crossing asked for more animals than the departure bank holds.
    MissingAnimals,
    /// Wolves outnumbered sheep on a bank.
    Eaten,
}

/// Outcome of replaying a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    pub status: ExecutionStatus,
    /// The last configuration reached before the replay stopped. For a
    /// rejected crossing this is the configuration the boat departed from.
    pub final_configuration: Configuration,
    /// Crossings applied before the replay stopped.
    pub crossings: usize,
    pub solved: bool,
}

impl ExecutionResult {
    fn stopped(status: ExecutionStatus, config: Configuration, crossings: usize) -> Self {
        ExecutionResult {
            status,
            final_configuration: config,
            crossings,
            solved: status == ExecutionStatus::Solved,
        }
    }
}

/// Replay `plan` against `puzzle` from its initial configuration.
///
/// Crossings are checked in order: the cargo must be permitted for the
/// boat's current direction, the departure bank must hold the animals, and
/// the configuration after the crossing must leave every bank safe. The
/// first violation stops the replay.
pub fn execute(puzzle: &Puzzle, plan: &[Move]) -> ExecutionResult {
    let mut current = puzzle.initial_configuration();

    if !current.is_valid(puzzle) {
        return ExecutionResult::stopped(ExecutionStatus::Eaten, current, 0);
    }

    for (applied, &cargo) in plan.iter().enumerate() {
        if !current.boat.allowed_cargo().contains(&cargo) {
            return ExecutionResult::stopped(ExecutionStatus::IllegalCargo, current, applied);
        }
        let next = match current.apply(cargo) {
            Some(next) => next,
            None => {
                return ExecutionResult::stopped(ExecutionStatus::MissingAnimals, current, applied)
            }
        };
        if !next.is_valid(puzzle) {
            return ExecutionResult::stopped(ExecutionStatus::Eaten, current, applied);
        }
        current = next;
    }

    let status = if current.is_goal(puzzle) {
        ExecutionStatus::Solved
    } else {
        ExecutionStatus::Incomplete
    };
    ExecutionResult::stopped(status, current, plan.len())
}

/// Check whether `plan` solves `puzzle`.
pub fn verify_plan(puzzle: &Puzzle, plan: &[Move]) -> bool {
    execute(puzzle, plan).solved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::{BankCount, BoatSide};

    fn config(left: (u32, u32), right: (u32, u32), boat: BoatSide) -> Configuration {
        Configuration {
            left: BankCount {
                sheep: left.0,
                wolves: left.1,
            },
            right: BankCount {
                sheep: right.0,
                wolves: right.1,
            },
            boat,
        }
    }

    #[test]
    fn test_full_plan_solves() {
        let puzzle = Puzzle::new(2, 2);
        let plan = [
            Move::new(1, 1),
            Move::new(1, 0),
            Move::new(2, 0),
            Move::new(0, 1),
            Move::new(0, 2),
        ];
        let result = execute(&puzzle, &plan);
        assert!(result.solved);
        assert_eq!(result.status, ExecutionStatus::Solved);
        assert_eq!(result.crossings, 5);
        assert_eq!(
            result.final_configuration,
            config((0, 0), (2, 2), BoatSide::Right)
        );
    }

    #[test]
    fn test_unsafe_crossing_is_caught() {
        // Shipping both wolves back-to-back with a lone wolf return leaves
        // the sheep outnumbered when the two wolves land.
        let puzzle = Puzzle::new(3, 3);
        let plan = [Move::new(0, 2), Move::new(0, 1), Move::new(2, 0)];
        let result = execute(&puzzle, &plan);
        assert_eq!(result.status, ExecutionStatus::Eaten);
        assert!(!result.solved);
        assert_eq!(result.crossings, 2);
        assert_eq!(
            result.final_configuration,
            config((3, 2), (0, 1), BoatSide::Left)
        );
    }

    #[test]
    fn test_overdrawn_bank_is_caught() {
        let puzzle = Puzzle::new(1, 1);
        let result = execute(&puzzle, &[Move::new(2, 0)]);
        assert_eq!(result.status, ExecutionStatus::MissingAnimals);
        assert_eq!(result.crossings, 0);
        assert_eq!(result.final_configuration, puzzle.initial_configuration());
    }

    #[test]
    fn test_single_animal_outbound_is_illegal() {
        let puzzle = Puzzle::new(3, 3);
        let result = execute(&puzzle, &[Move::new(0, 1)]);
        assert_eq!(result.status, ExecutionStatus::IllegalCargo);
        assert_eq!(result.crossings, 0);
    }

    #[test]
    fn test_partial_plan_is_incomplete() {
        let puzzle = Puzzle::new(3, 3);
        let result = execute(&puzzle, &[Move::new(1, 1)]);
        assert_eq!(result.status, ExecutionStatus::Incomplete);
        assert!(!result.solved);
        assert_eq!(result.crossings, 1);
        assert_eq!(
            result.final_configuration,
            config((2, 2), (1, 1), BoatSide::Right)
        );
    }

    #[test]
    fn test_empty_plan_on_solved_start() {
        let puzzle = Puzzle::new(0, 0);
        let result = execute(&puzzle, &[]);
        assert_eq!(result.status, ExecutionStatus::Solved);
        assert!(result.solved);
        assert_eq!(result.crossings, 0);
    }

    #[test]
    fn test_unsafe_start_stops_before_any_crossing() {
        let puzzle = Puzzle::new(1, 4);
        let result = execute(&puzzle, &[]);
        assert_eq!(result.status, ExecutionStatus::Eaten);
        assert_eq!(result.crossings, 0);
    }

    #[test]
    fn test_verify_plan_accepts_and_rejects() {
        let puzzle = Puzzle::new(3, 3);
        let plan = [
            Move::new(1, 1),
            Move::new(1, 0),
            Move::new(0, 2),
            Move::new(0, 1),
            Move::new(2, 0),
            Move::new(1, 1),
            Move::new(2, 0),
            Move::new(0, 1),
            Move::new(0, 2),
            Move::new(0, 1),
            Move::new(0, 2),
        ];
        assert!(verify_plan(&puzzle, &plan));
        assert!(!verify_plan(&puzzle, &plan[..plan.len() - 1]));
        assert!(!verify_plan(&puzzle, &[]));
    }
}
