//! Legal pour enumeration.
//!
//! Each generated neighbor moves the maximal contiguous same-color run from
//! the top of one tube into another, truncated to the destination's free
//! space. Generating the maximal pour directly is equivalent to, and far
//! cheaper than, emitting every intermediate one-unit pour: leaving part of
//! a pourable run behind is always dominated by pouring all of it.

use crate::state::PuzzleState;

/// A single pour of `units` consecutive same-color units from the top of
/// tube `from` into tube `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pour {
    pub from: usize,
    pub to: usize,
    pub units: usize,
}

/// Enumerates every legal pour from `state`, paired with the resulting state.
///
/// A pour from `from` to `to` is legal iff `from != to`, the source is
/// non-empty, the destination has free space, and the destination is empty
/// or its top color matches the source's. Each ordered `(from, to)` pair
/// yields at most one neighbor. Iteration order is fixed (ascending source,
/// then ascending destination), so the output is deterministic.
pub fn neighbors(state: &PuzzleState) -> Vec<(PuzzleState, Pour)> {
    let tube_count = state.tube_count();
    let mut result = Vec::new();

    for from in 0..tube_count {
        let Some(color) = state.top_color(from) else {
            continue;
        };
        let run = state.top_run(from);

        for to in 0..tube_count {
            if to == from {
                continue;
            }
            let free = state.free_space(to);
            if free == 0 {
                continue;
            }
            if state.top_color(to).is_some_and(|c| c != color) {
                continue;
            }

            // partial pour when the run exceeds the free space
            let units = run.min(free);
            let pour = Pour { from, to, units };
            result.push((apply(state, pour), pour));
        }
    }

    result
}

/// Applies a pour, returning the successor state.
///
/// The pour must reference in-range tubes and respect the destination's free
/// space; `neighbors` only produces such pours, so a violation here is a bug
/// in the generator rather than a runtime condition.
fn apply(state: &PuzzleState, pour: Pour) -> PuzzleState {
    debug_assert!(pour.from < state.tube_count() && pour.to < state.tube_count());
    debug_assert!(pour.units > 0 && pour.units <= state.free_space(pour.to));
    debug_assert!(pour.units <= state.top_run(pour.from));

    let mut tubes = state.tubes().to_vec();
    let source_len = tubes[pour.from].len();
    let moved: Vec<_> = tubes[pour.from].drain(source_len - pour.units..).collect();
    tubes[pour.to].extend(moved);

    state.with_tubes(tubes)
}
