//! Breadth-first search for a shortest crossing plan.
//!
//! The solver expands configurations oldest-first, so the first goal it
//! generates is reached by a minimum number of crossings. Visited
//! configurations are deduplicated by value, parent links are kept in a
//! per-call node arena, and the discovered goal is handed straight to path
//! reconstruction.

use std::collections::{HashSet, VecDeque};
use std::time::Instant;

use crate::pruning::PruneRules;
use crate::puzzle::{Configuration, Move, Puzzle};

/// Configuration for the solver.
#[derive(Debug, Clone, Default)]
pub struct SolverConfig {
    /// Frontier-admission rules; the default reproduces the repeat-cargo
    /// guard.
    pub prune: PruneRules,
}

/// Result of one solve.
#[derive(Debug, Clone)]
pub struct SolverResult {
    /// Whether a crossing plan reaching the goal was found.
    pub solved: bool,
    /// The crossings of the plan, oldest first. Empty when unsolvable, and
    /// also for an instance that already starts at the goal.
    pub moves: Vec<Move>,
    /// Number of configurations taken off the frontier and expanded.
    pub states_expanded: usize,
    /// Whether the reachable state space was fully enumerated. False for
    /// solved instances and for starts rejected before searching.
    pub search_exhausted: bool,
    /// Time elapsed in milliseconds.
    pub time_elapsed_ms: u64,
}

/// A node in the search arena: a configuration, the cargo that produced
/// it, and the index of its parent. The root carries neither.
#[derive(Debug, Clone, Copy)]
struct SearchNode {
    config: Configuration,
    cargo: Option<Move>,
    parent: Option<usize>,
}

/// Walk parent links from `index` back to the root, collecting cargos,
/// and return them oldest first.
fn reconstruct_moves(nodes: &[SearchNode], index: usize) -> Vec<Move> {
    let mut moves = Vec::new();
    let mut at = index;
    while let (Some(cargo), Some(parent)) = (nodes[at].cargo, nodes[at].parent) {
        moves.push(cargo);
        at = parent;
    }
    moves.reverse();
    moves
}

/// Find a shortest crossing plan for `puzzle`.
///
/// All bookkeeping (arena, frontier, visited set) is created fresh inside
/// this call, so repeated and concurrent invocations cannot observe each
/// other.
pub fn find_crossing_plan(puzzle: &Puzzle, config: &SolverConfig) -> SolverResult {
    let start_time = Instant::now();
    let start = puzzle.initial_configuration();

    // A start where wolves already outnumber sheep is lost before the
    // first crossing.
    if !start.is_valid(puzzle) {
        return SolverResult {
            solved: false,
            moves: Vec::new(),
            states_expanded: 0,
            search_exhausted: false,
            time_elapsed_ms: start_time.elapsed().as_millis() as u64,
        };
    }

    // The empty instance begins at the goal; answer without searching.
    if start.is_goal(puzzle) {
        return SolverResult {
            solved: true,
            moves: Vec::new(),
            states_expanded: 0,
            search_exhausted: false,
            time_elapsed_ms: start_time.elapsed().as_millis() as u64,
        };
    }

    let mut nodes = vec![SearchNode {
        config: start,
        cargo: None,
        parent: None,
    }];
    let mut frontier: VecDeque<usize> = VecDeque::new();
    frontier.push_back(0);
    let mut visited: HashSet<Configuration> = HashSet::new();
    visited.insert(start);
    let mut states_expanded: usize = 0;

    while let Some(index) = frontier.pop_front() {
        states_expanded += 1;
        let current = nodes[index];

        for (child, cargo) in current.config.successors(puzzle) {
            // Goal children end the search immediately, bypassing both the
            // visited check and the admission rules.
            if child.is_goal(puzzle) {
                let mut moves = reconstruct_moves(&nodes, index);
                moves.push(cargo);
                return SolverResult {
                    solved: true,
                    moves,
                    states_expanded,
                    search_exhausted: false,
                    time_elapsed_ms: start_time.elapsed().as_millis() as u64,
                };
            }

            if visited.contains(&child) {
                continue;
            }
            if !config.prune.admits(current.cargo, cargo) {
                continue;
            }

            visited.insert(child);
            nodes.push(SearchNode {
                config: child,
                cargo: Some(cargo),
                parent: Some(index),
            });
            frontier.push_back(nodes.len() - 1);
        }
    }

    // Frontier drained: every reachable configuration was enumerated.
    SolverResult {
        solved: false,
        moves: Vec::new(),
        states_expanded,
        search_exhausted: true,
        time_elapsed_ms: start_time.elapsed().as_millis() as u64,
    }
}

/// Solve a sheep and wolves instance with the default configuration.
///
/// Returns a shortest crossing plan, or an empty list when the instance is
/// unsolvable (an empty list is also the answer for the zero-animal
/// instance, which starts solved; use [`find_crossing_plan`] to tell the
/// two apart).
pub fn solve(sheep: u32, wolves: u32) -> Vec<Move> {
    find_crossing_plan(&Puzzle::new(sheep, wolves), &SolverConfig::default()).moves
}
