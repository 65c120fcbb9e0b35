//! Puzzle state representation and goal test.
//!
//! A puzzle is an ordered sequence of tubes, each a stack of colored units
//! bounded by a shared capacity. Tube order is significant: two states that
//! differ only in which tube holds which contents are distinct states.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use rustc_hash::FxHashMap;
use thiserror::Error;

/// A color identifier. Values are arbitrary small integers chosen by the
/// caller; they carry no meaning beyond equality.
pub type Color = u8;

/// Raised when raw tube contents violate the puzzle invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidPuzzleError {
    /// The puzzle has no tubes at all.
    #[error("puzzle has no tubes")]
    NoTubes,
    /// A color does not appear exactly `capacity` times, so it can never
    /// fill exactly one tube.
    #[error("color {color} appears {count} times, expected {capacity}")]
    ColorCount {
        color: Color,
        count: usize,
        capacity: usize,
    },
    /// A solved puzzle cannot be built: every color needs its own tube and
    /// at least one tube must remain empty for moves to exist.
    #[error("{color_count} colors cannot fit in {tube_count} tubes")]
    NotEnoughTubes {
        tube_count: usize,
        color_count: usize,
    },
}

/// An immutable liquid-sort puzzle state.
///
/// Tubes are stored bottom-to-top: the last element of each inner vector is
/// the unit at the opening. Every move produces a new state; nothing mutates
/// a state after construction.
#[derive(Debug, Clone)]
pub struct PuzzleState {
    tubes: Vec<Vec<Color>>,
    capacity: usize,
    color_count: usize,
}

impl PuzzleState {
    /// Validates raw tube contents and builds a state.
    ///
    /// The capacity is the maximum tube length observed. Construction fails
    /// unless every color present appears exactly `capacity` times, i.e.
    /// enough units of each color exist to fill exactly one tube.
    pub fn new(tubes: Vec<Vec<Color>>) -> Result<Self, InvalidPuzzleError> {
        if tubes.is_empty() {
            return Err(InvalidPuzzleError::NoTubes);
        }

        let capacity = tubes.iter().map(Vec::len).max().unwrap_or(0);

        let mut counts: FxHashMap<Color, usize> = FxHashMap::default();
        for tube in &tubes {
            for &color in tube {
                *counts.entry(color).or_insert(0) += 1;
            }
        }
        for (&color, &count) in &counts {
            if count != capacity {
                return Err(InvalidPuzzleError::ColorCount {
                    color,
                    count,
                    capacity,
                });
            }
        }

        Ok(Self {
            tubes,
            capacity,
            color_count: counts.len(),
        })
    }

    /// Builds a successor state without re-validating the invariants.
    ///
    /// Pours conserve units per color, so any state derived from a valid one
    /// by a legal pour is valid by construction.
    pub(crate) fn with_tubes(&self, tubes: Vec<Vec<Color>>) -> Self {
        Self {
            tubes,
            capacity: self.capacity,
            color_count: self.color_count,
        }
    }

    /// The shared tube capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of tubes, empty ones included.
    pub fn tube_count(&self) -> usize {
        self.tubes.len()
    }

    /// Number of distinct colors in the puzzle.
    pub fn color_count(&self) -> usize {
        self.color_count
    }

    /// The tubes, bottom-to-top.
    pub fn tubes(&self) -> &[Vec<Color>] {
        &self.tubes
    }

    /// Color at the opening of tube `index`, or `None` if the tube is empty.
    pub fn top_color(&self, index: usize) -> Option<Color> {
        self.tubes[index].last().copied()
    }

    /// Length of the contiguous same-color run at the opening of tube
    /// `index`. Zero for an empty tube.
    pub fn top_run(&self, index: usize) -> usize {
        let tube = &self.tubes[index];
        let Some(&top) = tube.last() else {
            return 0;
        };
        tube.iter().rev().take_while(|&&c| c == top).count()
    }

    /// Free space remaining in tube `index`.
    pub fn free_space(&self, index: usize) -> usize {
        self.capacity - self.tubes[index].len()
    }

    /// True iff every tube is empty, or monochrome and full.
    ///
    /// A monochrome tube that is not full does not count as solved; it still
    /// needs topping off from elsewhere.
    pub fn is_goal(&self) -> bool {
        self.tubes.iter().all(|tube| {
            tube.is_empty()
                || (tube.len() == self.capacity && tube.iter().all(|&c| c == tube[0]))
        })
    }
}

// Equality, hashing, and ordering look at tube contents only. The cached
// capacity and color count are derived from the same construction and would
// only add noise to the comparisons.

impl PartialEq for PuzzleState {
    fn eq(&self, other: &Self) -> bool {
        self.tubes == other.tubes
    }
}

impl Eq for PuzzleState {}

impl Hash for PuzzleState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tubes.hash(state);
    }
}

impl PartialOrd for PuzzleState {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Lexicographic order over tube contents. Semantically meaningless; it only
/// makes priority-queue tie-breaking deterministic.
impl Ord for PuzzleState {
    fn cmp(&self, other: &Self) -> Ordering {
        self.tubes.cmp(&other.tubes)
    }
}
