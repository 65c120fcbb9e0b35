//! Heuristic cost estimates for the search engines.
//!
//! A heuristic is any pure `Fn(&PuzzleState) -> i32`; the solvers take it as
//! a parameter, so callers pick a variant per search and never swap it
//! mid-search (the open set's priorities would no longer be comparable).
//! Every variant returns 0 on a goal state. Only `color_runs` is admissible;
//! the other two trade the shortest-path guarantee for stronger guidance.

use crate::state::PuzzleState;

/// Baseline estimate: one point per mixed tube, plus the missing units of
/// every monochrome tube that still needs topping off.
pub fn mixed_tubes(state: &PuzzleState) -> i32 {
    let capacity = state.capacity();
    let mut estimate = 0;

    for tube in state.tubes() {
        if tube.is_empty() {
            continue;
        }
        if tube.iter().any(|&c| c != tube[0]) {
            estimate += 1;
        } else if tube.len() < capacity {
            estimate += (capacity - tube.len()) as i32;
        }
    }

    estimate
}

/// Emptying-cost estimate: like [`mixed_tubes`], but a mixed tube also pays
/// one point per unit it holds, since all of them must be poured out before
/// the tube can settle. Overestimates freely; fast in practice.
pub fn emptying_cost(state: &PuzzleState) -> i32 {
    let capacity = state.capacity();
    let mut estimate = 0;

    for tube in state.tubes() {
        if tube.is_empty() {
            continue;
        }
        if tube.iter().any(|&c| c != tube[0]) {
            estimate += 1 + tube.len() as i32;
        } else if tube.len() < capacity {
            estimate += (capacity - tube.len()) as i32;
        }
    }

    estimate
}

/// Admissible lower bound: per tube, the number of contiguous same-color
/// runs minus one.
///
/// Every run sitting above another must leave its tube at least once, and a
/// single pour removes at most one run from the puzzle, so this never
/// overestimates. A* and IDA* return shortest paths with it.
pub fn color_runs(state: &PuzzleState) -> i32 {
    state
        .tubes()
        .iter()
        .map(|tube| {
            let runs = tube
                .windows(2)
                .filter(|pair| pair[0] != pair[1])
                .count() as i32;
            // `runs` counts color changes, which is exactly runs - 1 for a
            // non-empty tube and 0 for an empty one
            runs
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(tubes: Vec<Vec<u8>>) -> PuzzleState {
        PuzzleState::new(tubes).expect("test puzzle should be valid")
    }

    #[test]
    fn test_all_variants_are_zero_on_goal() {
        let goal = state(vec![vec![1, 1, 1], vec![2, 2, 2], vec![]]);
        assert_eq!(mixed_tubes(&goal), 0);
        assert_eq!(emptying_cost(&goal), 0);
        assert_eq!(color_runs(&goal), 0);
    }

    #[test]
    fn test_disorder_scores_higher_than_order() {
        // two mixed tubes vs. four
        let near = state(vec![vec![1, 2], vec![2, 1], vec![3, 3], vec![4, 4]]);
        let far = state(vec![vec![1, 2], vec![2, 1], vec![3, 4], vec![4, 3]]);

        assert!(mixed_tubes(&far) > mixed_tubes(&near));
        assert!(emptying_cost(&far) > emptying_cost(&near));
        assert!(color_runs(&far) > color_runs(&near));
    }

    #[test]
    fn test_mixed_tubes_counts_topping_off() {
        // two monochrome tubes short of full: 2 missing + 1 missing
        let state = state(vec![vec![1], vec![1, 1], vec![2, 2, 2]]);
        assert_eq!(mixed_tubes(&state), 3);
    }

    #[test]
    fn test_emptying_cost_charges_mixed_tube_contents() {
        let state = state(vec![vec![2, 1], vec![1, 2], vec![], vec![]]);
        // each mixed tube: 1 + its 2 units
        assert_eq!(emptying_cost(&state), 6);
    }

    #[test]
    fn test_color_runs_counts_color_changes() {
        let mixed = state(vec![vec![1, 2, 1], vec![2, 1, 2], vec![]]);
        assert_eq!(color_runs(&mixed), 4);

        let nearly = state(vec![vec![1, 1, 1], vec![2, 2], vec![2]]);
        assert_eq!(color_runs(&nearly), 0);
    }
}
