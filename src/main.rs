//! CLI entry point for the crossing solver.
//!
//! Usage:
//!   crossing-solver solve --sheep <n> --wolves <n> [options]
//!   crossing-solver verify <plan.json>
//!   crossing-solver verify --stdin
//!
//! Options:
//!   --no-repeat-filter   Search without the repeated-cargo filter

mod executor;
mod pruning;
mod puzzle;
mod solver;

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use executor::{execute, ExecutionResult, ExecutionStatus};
use pruning::PruneRules;
use puzzle::{Configuration, Move, Puzzle};
use solver::{find_crossing_plan, SolverConfig, SolverResult};

#[derive(Parser)]
#[command(name = "crossing-solver")]
#[command(about = "Breadth-first solver for sheep and wolves river crossings")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find a shortest crossing plan for an instance
    Solve {
        /// Number of sheep starting on the left bank
        #[arg(long)]
        sheep: u32,

        /// Number of wolves starting on the left bank
        #[arg(long)]
        wolves: u32,

        /// Search without the repeated-cargo filter
        #[arg(long)]
        no_repeat_filter: bool,
    },

    /// Replay a crossing plan and check that it solves its instance
    Verify {
        /// Path to plan JSON file (use --stdin to read from stdin)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Read plan from stdin instead of file
        #[arg(long)]
        stdin: bool,
    },
}

/// Input format for plan verification
#[derive(Debug, Serialize, Deserialize)]
struct PlanFile {
    sheep: u32,
    wolves: u32,
    #[serde(default)]
    moves: Vec<Move>,
}

/// Output format for a solve
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SolveOutput {
    solved: bool,
    moves: Vec<Move>,
    crossings: usize,
    states_expanded: usize,
    search_exhausted: bool,
    time_elapsed_ms: u64,
}

/// Output format for a verification
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VerificationOutput {
    valid: bool,
    status: ExecutionStatus,
    crossings_applied: usize,
    final_configuration: Configuration,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            sheep,
            wolves,
            no_repeat_filter,
        } => {
            let puzzle = Puzzle::new(sheep, wolves);
            let config = SolverConfig {
                prune: PruneRules {
                    skip_repeated_cargo: !no_repeat_filter,
                },
            };

            // Run solver
            let result = find_crossing_plan(&puzzle, &config);

            let output = format_solve(&result);
            println!("{}", serde_json::to_string_pretty(&output).unwrap());

            if result.solved {
                std::process::exit(0);
            } else {
                std::process::exit(1);
            }
        }
        Commands::Verify { file, stdin } => {
            // Read plan JSON
            let json_content = if stdin {
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .expect("Failed to read from stdin");
                buffer
            } else if let Some(path) = file {
                fs::read_to_string(&path)
                    .unwrap_or_else(|e| panic!("Failed to read file {:?}: {}", path, e))
            } else {
                eprintln!("Error: Must provide either a file path or --stdin");
                std::process::exit(1);
            };

            // Parse plan
            let plan: PlanFile = match serde_json::from_str(&json_content) {
                Ok(p) => p,
                Err(e) => {
                    eprintln!("Error parsing plan JSON: {}", e);
                    std::process::exit(1);
                }
            };

            // Replay it
            let puzzle = Puzzle::new(plan.sheep, plan.wolves);
            let result = execute(&puzzle, &plan.moves);

            let output = format_verification(&result);
            println!("{}", serde_json::to_string_pretty(&output).unwrap());

            if result.solved {
                std::process::exit(0);
            } else {
                std::process::exit(1);
            }
        }
    }
}

fn format_solve(result: &SolverResult) -> SolveOutput {
    SolveOutput {
        solved: result.solved,
        moves: result.moves.clone(),
        crossings: result.moves.len(),
        states_expanded: result.states_expanded,
        search_exhausted: result.search_exhausted,
        time_elapsed_ms: result.time_elapsed_ms,
    }
}

fn format_verification(result: &ExecutionResult) -> VerificationOutput {
    VerificationOutput {
        valid: result.solved,
        status: result.status,
        crossings_applied: result.crossings,
        final_configuration: result.final_configuration,
    }
}
