//! Liquid-Sort Puzzle Solver
//!
//! Solves liquid-sorting puzzles: pour colored units between tubes until
//! every non-empty tube holds a single color and is full. Puzzles are given
//! in bracketed notation on the command line; the solver prints each state
//! along the solution path. A scrambled puzzle can also be generated by
//! reverse-building from a solved layout.

use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use tubesort::render::render;
use tubesort::{generator, heuristics, notation, search, PuzzleState};

/// Solves and generates liquid-sorting puzzles.
#[derive(Parser)]
#[command(name = "tubesort")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a puzzle and print the solution path.
    Solve {
        /// Puzzle in bracketed notation, e.g. "[[], [0, 1, 1], [2, 0, 1], [0, 2, 2]]".
        puzzle: String,
        /// Search algorithm to run.
        #[arg(long, value_enum, default_value_t = Algorithm::AStar)]
        algorithm: Algorithm,
        /// Heuristic guiding the search.
        #[arg(long, value_enum, default_value_t = Heuristic::Emptying)]
        heuristic: Heuristic,
    },
    /// Generate a scrambled puzzle and print it in notation.
    Generate {
        /// Total number of tubes, empty ones included.
        tubes: usize,
        /// Units per tube.
        capacity: usize,
        /// Number of distinct colors (must leave at least one tube empty).
        colors: usize,
        /// Number of random reverse pours to apply.
        #[arg(long, default_value_t = 40)]
        moves: usize,
        /// Seed for a reproducible scramble.
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Algorithm {
    /// Best-first search; memory-hungry, shortest path with `runs`.
    AStar,
    /// Iterative-deepening search; slower, but only the path in memory.
    IdaStar,
}

#[derive(Clone, Copy, ValueEnum)]
enum Heuristic {
    /// Mixed-tube count plus topping-off cost.
    Mixed,
    /// Mixed tubes also pay their unit count. Fast, not admissible.
    Emptying,
    /// Color-run lower bound. Admissible: guarantees a shortest path.
    Runs,
}

impl Heuristic {
    fn function(self) -> fn(&PuzzleState) -> i32 {
        match self {
            Self::Mixed => heuristics::mixed_tubes,
            Self::Emptying => heuristics::emptying_cost,
            Self::Runs => heuristics::color_runs,
        }
    }
}

fn main() -> ExitCode {
    match Cli::parse().command {
        Command::Solve {
            puzzle,
            algorithm,
            heuristic,
        } => run_solve(&puzzle, algorithm, heuristic),
        Command::Generate {
            tubes,
            capacity,
            colors,
            moves,
            seed,
        } => run_generate(tubes, capacity, colors, moves, seed),
    }
}

/// Parses, solves, and prints the solution path with a runtime summary.
fn run_solve(puzzle: &str, algorithm: Algorithm, heuristic: Heuristic) -> ExitCode {
    let initial = match notation::parse(puzzle) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("Invalid puzzle: {e}");
            return ExitCode::FAILURE;
        }
    };

    let h = heuristic.function();
    let started = Instant::now();
    let result = match algorithm {
        Algorithm::AStar => search::solve_astar(&initial, h),
        Algorithm::IdaStar => search::solve_idastar(&initial, h),
    };
    let elapsed = started.elapsed();

    match result {
        Ok(path) => {
            for state in &path {
                println!("{}\n", render(state));
            }
            println!("Solved in {} moves ({elapsed:.2?})", path.len() - 1);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e} ({elapsed:.2?})");
            ExitCode::FAILURE
        }
    }
}

/// Generates a scrambled puzzle and prints it as a board and in notation.
fn run_generate(
    tubes: usize,
    capacity: usize,
    colors: usize,
    moves: usize,
    seed: Option<u64>,
) -> ExitCode {
    let solved = match generator::solved(tubes, capacity, colors) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("Invalid parameters: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut rng = match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    let scrambled = generator::scramble(&solved, moves, &mut rng);

    println!("{}\n", render(&scrambled));
    println!("{}", notation::format(&scrambled));
    ExitCode::SUCCESS
}
