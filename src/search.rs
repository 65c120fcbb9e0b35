//! A* and IDA* search over puzzle states.
//!
//! Both engines are synchronous and deterministic: the open set breaks f-ties
//! with the states' lexicographic order, and the move generator emits
//! neighbors in a fixed order. A* keeps the full open/closed bookkeeping in
//! memory; IDA* re-explores across iterations and only remembers the current
//! depth-first path, trading time for a frontier-free footprint.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;

use crate::moves::neighbors;
use crate::state::PuzzleState;

/// Reported when the reachable state space is exhausted without finding a
/// goal. A normal outcome, not a fault: not every puzzle is solvable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no solution found")]
pub struct NoSolutionFound;

/// Min-ordered open-set entry: lowest f first, ties broken by state order.
struct OpenEntry {
    f: i32,
    state: PuzzleState,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f && self.state == other.state
    }
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // reversed: BinaryHeap is a max-heap, we want the smallest f on top
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.state.cmp(&self.state))
    }
}

/// Finds a path from `initial` to a goal state with A*.
///
/// Returns the full state sequence, `initial` first and the goal last. With
/// an admissible heuristic the path is shortest; otherwise it is merely
/// valid. Fails with [`NoSolutionFound`] once the open set empties.
pub fn solve_astar<H>(initial: &PuzzleState, heuristic: H) -> Result<Vec<PuzzleState>, NoSolutionFound>
where
    H: Fn(&PuzzleState) -> i32,
{
    solve_astar_observed(initial, heuristic, |_| {})
}

/// [`solve_astar`] with an observer invoked once per expanded state.
pub fn solve_astar_observed<H, O>(
    initial: &PuzzleState,
    heuristic: H,
    mut observer: O,
) -> Result<Vec<PuzzleState>, NoSolutionFound>
where
    H: Fn(&PuzzleState) -> i32,
    O: FnMut(&PuzzleState),
{
    let mut open = BinaryHeap::new();
    let mut came_from: FxHashMap<PuzzleState, PuzzleState> = FxHashMap::default();
    let mut g_score: FxHashMap<PuzzleState, u32> = FxHashMap::default();
    let mut closed: FxHashSet<PuzzleState> = FxHashSet::default();

    g_score.insert(initial.clone(), 0);
    open.push(OpenEntry {
        f: heuristic(initial),
        state: initial.clone(),
    });

    while let Some(OpenEntry { state: current, .. }) = open.pop() {
        // stale duplicate of a state already expanded under a better f
        if closed.contains(&current) {
            continue;
        }

        if current.is_goal() {
            return Ok(reconstruct_path(&came_from, current));
        }

        closed.insert(current.clone());
        observer(&current);
        let current_g = g_score[&current];

        for (neighbor, _) in neighbors(&current) {
            if closed.contains(&neighbor) {
                continue;
            }

            // a move costs 1 regardless of how many units it pours
            let tentative_g = current_g + 1;
            if g_score.get(&neighbor).is_none_or(|&g| tentative_g < g) {
                came_from.insert(neighbor.clone(), current.clone());
                g_score.insert(neighbor.clone(), tentative_g);
                open.push(OpenEntry {
                    f: tentative_g as i32 + heuristic(&neighbor),
                    state: neighbor,
                });
            }
        }
    }

    Err(NoSolutionFound)
}

/// Walks predecessor links from the goal back to the start.
fn reconstruct_path(
    came_from: &FxHashMap<PuzzleState, PuzzleState>,
    goal: PuzzleState,
) -> Vec<PuzzleState> {
    let mut path = Vec::new();
    let mut current = goal;
    while let Some(previous) = came_from.get(&current) {
        let previous = previous.clone();
        path.push(current);
        current = previous;
    }
    path.push(current);
    path.reverse();
    path
}

/// Outcome of one bounded depth-first probe.
enum Probe {
    /// A goal was reached; the path lives in the shared path stack.
    Found,
    /// Smallest f that exceeded the bound anywhere below this node.
    Min(i32),
    /// Every branch dead-ended without exceeding the bound.
    Exhausted,
}

/// Finds a path from `initial` to a goal state with IDA*.
///
/// Depth-first probes bounded by an iteratively raised f-threshold, starting
/// at `h(initial)`. Optimal under an admissible heuristic, like A*, but only
/// the current path is kept in memory.
pub fn solve_idastar<H>(initial: &PuzzleState, heuristic: H) -> Result<Vec<PuzzleState>, NoSolutionFound>
where
    H: Fn(&PuzzleState) -> i32,
{
    solve_idastar_observed(initial, heuristic, |_| {})
}

/// [`solve_idastar`] with an observer invoked once per expanded state.
pub fn solve_idastar_observed<H, O>(
    initial: &PuzzleState,
    heuristic: H,
    mut observer: O,
) -> Result<Vec<PuzzleState>, NoSolutionFound>
where
    H: Fn(&PuzzleState) -> i32,
    O: FnMut(&PuzzleState),
{
    let mut bound = heuristic(initial);
    // on-path cycle check only; IDA* re-explores states across iterations
    let mut visited: FxHashSet<PuzzleState> = FxHashSet::default();
    visited.insert(initial.clone());

    loop {
        let mut path = vec![initial.clone()];
        match probe(
            initial,
            0,
            bound,
            &heuristic,
            &mut observer,
            &mut visited,
            &mut path,
        ) {
            Probe::Found => return Ok(path),
            Probe::Min(next_bound) => bound = next_bound,
            Probe::Exhausted => return Err(NoSolutionFound),
        }
    }
}

fn probe<H, O>(
    node: &PuzzleState,
    g: u32,
    bound: i32,
    heuristic: &H,
    observer: &mut O,
    visited: &mut FxHashSet<PuzzleState>,
    path: &mut Vec<PuzzleState>,
) -> Probe
where
    H: Fn(&PuzzleState) -> i32,
    O: FnMut(&PuzzleState),
{
    let f = g as i32 + heuristic(node);
    if f > bound {
        return Probe::Min(f);
    }
    if node.is_goal() {
        return Probe::Found;
    }

    observer(node);
    let mut next_bound: Option<i32> = None;

    for (neighbor, _) in neighbors(node) {
        if visited.contains(&neighbor) {
            continue;
        }
        visited.insert(neighbor.clone());
        path.push(neighbor.clone());

        match probe(&neighbor, g + 1, bound, heuristic, observer, visited, path) {
            Probe::Found => return Probe::Found,
            Probe::Min(child_bound) => {
                next_bound = Some(next_bound.map_or(child_bound, |b| b.min(child_bound)));
            }
            Probe::Exhausted => {}
        }

        // backtrack before trying the next sibling
        path.pop();
        visited.remove(&neighbor);
    }

    match next_bound {
        Some(bound) => Probe::Min(bound),
        None => Probe::Exhausted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristics::{color_runs, emptying_cost, mixed_tubes};
    use std::collections::VecDeque;

    fn state(tubes: Vec<Vec<u8>>) -> PuzzleState {
        PuzzleState::new(tubes).expect("test puzzle should be valid")
    }

    /// Exhaustive breadth-first search; the ground truth for shortest paths.
    fn bfs_optimal_moves(start: &PuzzleState) -> Option<usize> {
        let mut seen: FxHashSet<PuzzleState> = FxHashSet::default();
        let mut queue = VecDeque::new();
        seen.insert(start.clone());
        queue.push_back((start.clone(), 0));

        while let Some((current, depth)) = queue.pop_front() {
            if current.is_goal() {
                return Some(depth);
            }
            for (next, _) in neighbors(&current) {
                if seen.insert(next.clone()) {
                    queue.push_back((next, depth + 1));
                }
            }
        }
        None
    }

    fn small_instance() -> PuzzleState {
        // [[], [0, 1, 1], [2, 0, 1], [0, 2, 2]] in top-to-bottom notation
        state(vec![vec![], vec![1, 1, 0], vec![1, 0, 2], vec![2, 2, 0]])
    }

    #[test]
    fn test_astar_path_endpoints() {
        let start = small_instance();
        let path = solve_astar(&start, color_runs).expect("instance is solvable");
        assert_eq!(path[0], start);
        assert!(path.last().expect("path is never empty").is_goal());
    }

    #[test]
    fn test_astar_is_optimal_with_admissible_heuristic() {
        let start = small_instance();
        let optimal = bfs_optimal_moves(&start).expect("instance is solvable");
        let path = solve_astar(&start, color_runs).expect("instance is solvable");
        assert_eq!(path.len() - 1, optimal);
    }

    #[test]
    fn test_astar_is_deterministic() {
        let start = small_instance();
        let first = solve_astar(&start, emptying_cost).expect("instance is solvable");
        let second = solve_astar(&start, emptying_cost).expect("instance is solvable");
        assert_eq!(first, second);
    }

    #[test]
    fn test_astar_on_already_solved_puzzle() {
        let goal = state(vec![vec![1, 1], vec![2, 2], vec![]]);
        let path = solve_astar(&goal, mixed_tubes).expect("goal state solves trivially");
        assert_eq!(path, vec![goal]);
    }

    #[test]
    fn test_idastar_on_already_solved_puzzle() {
        let goal = state(vec![vec![1, 1], vec![2, 2], vec![]]);
        let path = solve_idastar(&goal, mixed_tubes).expect("goal state solves trivially");
        assert_eq!(path, vec![goal]);
    }

    #[test]
    fn test_stuck_puzzle_reports_no_solution() {
        // full tubes, mismatched tops, no empty tube: zero legal moves
        let stuck = state(vec![vec![1, 2], vec![2, 1]]);
        assert_eq!(solve_astar(&stuck, mixed_tubes), Err(NoSolutionFound));
        assert_eq!(solve_idastar(&stuck, mixed_tubes), Err(NoSolutionFound));
    }

    #[test]
    fn test_idastar_matches_astar_on_small_instances() {
        let instances = vec![
            small_instance(),
            state(vec![vec![2, 1, 1], vec![1, 2, 2], vec![]]),
            state(vec![vec![1, 2], vec![2, 1], vec![], vec![]]),
            state(vec![vec![1, 2], vec![2, 1], vec![3, 4], vec![4, 3], vec![]]),
        ];

        for start in instances {
            let astar = solve_astar(&start, color_runs).expect("instance is solvable");
            let idastar = solve_idastar(&start, color_runs).expect("instance is solvable");
            // both optimal under an admissible heuristic, so lengths agree
            assert_eq!(
                astar.len(),
                idastar.len(),
                "path lengths diverge on {:?}",
                start.tubes()
            );
            assert!(idastar.last().expect("path is never empty").is_goal());
        }
    }

    #[test]
    fn test_idastar_path_is_a_legal_move_sequence() {
        let start = small_instance();
        let path = solve_idastar(&start, color_runs).expect("instance is solvable");
        for pair in path.windows(2) {
            assert!(
                neighbors(&pair[0]).iter().any(|(next, _)| *next == pair[1]),
                "consecutive path states must be one legal pour apart"
            );
        }
    }

    #[test]
    fn test_observer_sees_each_expansion_once() {
        let start = small_instance();
        let mut expanded = Vec::new();
        solve_astar_observed(&start, color_runs, |s| expanded.push(s.clone()))
            .expect("instance is solvable");

        assert!(!expanded.is_empty());
        assert_eq!(expanded[0], start, "the start is expanded first");
        let unique: FxHashSet<_> = expanded.iter().cloned().collect();
        assert_eq!(unique.len(), expanded.len(), "no state is expanded twice");
    }
}
