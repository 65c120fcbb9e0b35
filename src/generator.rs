//! Random puzzle generation by reverse-building.
//!
//! A puzzle is generated by starting from the canonical solved layout and
//! applying random reverse pours, so every unit ends up reachable from a
//! solved state by some move sequence run backwards. Scrambles are not
//! verified for forward solvability.

use rand::Rng;

use crate::state::{Color, InvalidPuzzleError, PuzzleState};

/// Builds the canonical solved puzzle: one full tube per color, the
/// remaining tubes empty. Colors are numbered from 1.
///
/// Requires `color_count < tube_count`; with no empty tube a scramble (and
/// the forward game) would have no legal moves.
pub fn solved(
    tube_count: usize,
    capacity: usize,
    color_count: usize,
) -> Result<PuzzleState, InvalidPuzzleError> {
    if color_count >= tube_count {
        return Err(InvalidPuzzleError::NotEnoughTubes {
            tube_count,
            color_count,
        });
    }

    let mut tubes = vec![Vec::new(); tube_count];
    for (i, tube) in tubes.iter_mut().enumerate().take(color_count) {
        *tube = vec![(i + 1) as Color; capacity];
    }

    PuzzleState::new(tubes)
}

/// Scrambles a state with up to `moves` random single-unit reverse pours.
///
/// A reverse pour undoes a forward pour: a unit may land on any tube with
/// free space regardless of its top color, but may only leave a tube whose
/// top two units share a color (otherwise the forward pour it undoes would
/// have been illegal). Gives up after `5 * moves` consecutive rejected
/// draws, which happens when the state runs out of reverse pours.
pub fn scramble<R: Rng>(state: &PuzzleState, moves: usize, rng: &mut R) -> PuzzleState {
    let tube_count = state.tube_count();
    let mut tubes = state.tubes().to_vec();
    let capacity = state.capacity();

    let mut remaining = moves;
    let limit = moves.saturating_mul(5);
    let mut misses = 0;

    while remaining > 0 && misses < limit {
        let from = rng.gen_range(0..tube_count);
        let to = rng.gen_range(0..tube_count);

        if !reverse_pour_legal(&tubes, capacity, from, to) {
            misses += 1;
            continue;
        }

        if let Some(unit) = tubes[from].pop() {
            tubes[to].push(unit);
            remaining -= 1;
            misses = 0;
        }
    }

    state.with_tubes(tubes)
}

fn reverse_pour_legal(tubes: &[Vec<Color>], capacity: usize, from: usize, to: usize) -> bool {
    if from == to || tubes[from].is_empty() || tubes[to].len() >= capacity {
        return false;
    }
    // the moved unit must sit on one of its own color, or be alone, for the
    // undone forward pour to have been legal
    let source = &tubes[from];
    source.len() < 2 || source[source.len() - 1] == source[source.len() - 2]
}
