//! Liquid-Sort Puzzle Solver Library
//!
//! Provides the search core for liquid-sorting puzzles: a fixed set of
//! tubes holding stacks of colored units that must be rearranged by pouring
//! until every non-empty tube is monochrome and full.
//!
//! The entry points are [`PuzzleState::new`] to validate raw tube contents,
//! and [`solve_astar`] / [`solve_idastar`] to search for a solution path
//! with a caller-chosen heuristic from [`heuristics`]. The surrounding
//! modules cover the text [`notation`], a fixed-width [`render`], and a
//! reverse-building [`generator`].

pub mod generator;
pub mod heuristics;
pub mod moves;
pub mod notation;
pub mod render;
pub mod search;
pub mod state;

pub use moves::{neighbors, Pour};
pub use search::{solve_astar, solve_idastar, NoSolutionFound};
pub use state::{Color, InvalidPuzzleError, PuzzleState};
