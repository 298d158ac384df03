//! Uninformed search over the river-crossing state graph.
//!
//! All four algorithms share one expand loop (`search_with`): pop a state
//! from the open list, record it in the closed set, expand it, and either
//! return a goal child or push the new children. They differ only in the
//! [`Frontier`] implementation backing the open list:
//! - `bfs`: FIFO queue.
//! - `dfs`: LIFO stack, with an optional depth limit.
//! - `iterative_deepening`: repeated depth-limited `dfs` at limits 0, 1, 2, …
//! - `ucs`: cheapest path cost first.
//!
//! An exhausted open list is a normal outcome, reported as `None`, never as
//! an error. Duplicate suppression is by state identity only (right-bank
//! counts plus boat side): a cheaper re-derivation of an already-seen state
//! is discarded, not swapped in.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet, VecDeque};
use std::rc::Rc;

use log::debug;

use crate::engine::{generate_child_states, is_goal_state, State};

/// Receives one report per expanded state.
///
/// The report is purely observational: suppressing it (or swapping the sink)
/// must not change any search result. The default implementation used by the
/// plain entry points logs through the `log` facade, so expansion traces show
/// up under `RUST_LOG=debug` and cost nothing otherwise.
pub trait ExpansionObserver {
    /// Called once for each state about to be expanded.
    fn on_expand(&mut self, state: &State);
}

/// Default observer: one `debug!` line per expansion.
pub struct LogObserver;

impl ExpansionObserver for LogObserver {
    fn on_expand(&mut self, state: &State) {
        debug!("expanding {:?}", state);
    }
}

/// Open-list policy: how the next state to expand is chosen.
///
/// Every implementation also answers identity-membership queries so the
/// shared loop can drop children that are already queued.
trait Frontier {
    fn push(&mut self, state: Rc<State>);
    fn pop(&mut self) -> Option<Rc<State>>;
    fn contains(&self, state: &State) -> bool;
}

/// FIFO open list (breadth-first).
#[derive(Default)]
struct FifoFrontier {
    queue: VecDeque<Rc<State>>,
    members: HashSet<Rc<State>>,
}

impl Frontier for FifoFrontier {
    fn push(&mut self, state: Rc<State>) {
        self.queue.push_back(Rc::clone(&state));
        self.members.insert(state);
    }

    fn pop(&mut self) -> Option<Rc<State>> {
        let state = self.queue.pop_front()?;
        self.members.remove(&state);
        Some(state)
    }

    fn contains(&self, state: &State) -> bool {
        self.members.contains(state)
    }
}

/// LIFO open list (depth-first).
#[derive(Default)]
struct LifoFrontier {
    stack: Vec<Rc<State>>,
    members: HashSet<Rc<State>>,
}

impl Frontier for LifoFrontier {
    fn push(&mut self, state: Rc<State>) {
        self.stack.push(Rc::clone(&state));
        self.members.insert(state);
    }

    fn pop(&mut self) -> Option<Rc<State>> {
        let state = self.stack.pop()?;
        self.members.remove(&state);
        Some(state)
    }

    fn contains(&self, state: &State) -> bool {
        self.members.contains(state)
    }
}

/// A heap entry keyed by `(path_cost, insertion_seq)`.
///
/// `BinaryHeap` is a max-heap, so the key is wrapped in `Reverse` to pop the
/// cheapest state first. The insertion sequence breaks cost ties in favor of
/// the earliest-queued state.
struct CostEntry {
    key: Reverse<(u32, u64)>,
    state: Rc<State>,
}

impl PartialEq for CostEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for CostEntry {}

impl PartialOrd for CostEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CostEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Cheapest-first open list (uniform cost).
#[derive(Default)]
struct CheapestFirstFrontier {
    heap: BinaryHeap<CostEntry>,
    members: HashSet<Rc<State>>,
    insertions: u64,
}

impl Frontier for CheapestFirstFrontier {
    fn push(&mut self, state: Rc<State>) {
        self.heap.push(CostEntry {
            key: Reverse((state.path_cost(), self.insertions)),
            state: Rc::clone(&state),
        });
        self.insertions += 1;
        self.members.insert(state);
    }

    fn pop(&mut self) -> Option<Rc<State>> {
        let state = self.heap.pop()?.state;
        self.members.remove(&state);
        Some(state)
    }

    fn contains(&self, state: &State) -> bool {
        self.members.contains(state)
    }
}

/// How a single search run ended. `Cutoff` and `Exhausted` collapse to the
/// same `None` at the public boundary; the distinction stays internal.
enum SearchOutcome {
    Found(Rc<State>),
    Cutoff,
    Exhausted,
}

impl SearchOutcome {
    fn into_goal(self) -> Option<Rc<State>> {
        match self {
            SearchOutcome::Found(goal) => Some(goal),
            SearchOutcome::Cutoff | SearchOutcome::Exhausted => None,
        }
    }
}

/// The expand loop shared by all four algorithms.
///
/// Children already present (by identity) in the closed set or the open list
/// are skipped. A child that passes the goal test is returned immediately,
/// before it is ever queued. With a depth limit, a popped state at or beyond
/// the limit is discarded without expansion and the run is flagged as cut
/// off.
fn search_with<F: Frontier>(
    initial: &Rc<State>,
    mut open: F,
    depth_limit: Option<u32>,
    observer: &mut dyn ExpansionObserver,
) -> SearchOutcome {
    let mut closed: HashSet<Rc<State>> = HashSet::new();
    let mut cutoff_reached = false;

    open.push(Rc::clone(initial));

    loop {
        let Some(next) = open.pop() else {
            return if cutoff_reached {
                SearchOutcome::Cutoff
            } else {
                SearchOutcome::Exhausted
            };
        };
        closed.insert(Rc::clone(&next));

        if let Some(limit) = depth_limit {
            if next.depth() >= limit {
                cutoff_reached = true;
                continue;
            }
        }

        observer.on_expand(&next);

        for child in generate_child_states(&next) {
            if closed.contains(&child) || open.contains(&child) {
                continue;
            }
            if is_goal_state(&child) {
                return SearchOutcome::Found(child);
            }
            open.push(child);
        }
    }
}

/// Breadth-first search.
///
/// Complete (the branching factor is finite) and optimal in crossing count;
/// not in fare, since crossings are not uniformly priced.
///
/// Returns the goal state, or `None` if the reachable graph contains no goal.
pub fn bfs(initial: &Rc<State>) -> Option<Rc<State>> {
    bfs_with_observer(initial, &mut LogObserver)
}

/// [`bfs`] with a caller-supplied expansion observer.
pub fn bfs_with_observer(
    initial: &Rc<State>,
    observer: &mut dyn ExpansionObserver,
) -> Option<Rc<State>> {
    search_with(initial, FifoFrontier::default(), None, observer).into_goal()
}

/// Depth-first search, optionally depth-limited.
///
/// Neither complete nor optimal. With `Some(limit)`, a popped state whose
/// depth has reached the limit is discarded without expansion. Whether the
/// run then failed genuinely or only because of the cutoff is not surfaced;
/// both come back as `None`.
pub fn dfs(initial: &Rc<State>, depth_limit: Option<u32>) -> Option<Rc<State>> {
    dfs_with_observer(initial, depth_limit, &mut LogObserver)
}

/// [`dfs`] with a caller-supplied expansion observer.
pub fn dfs_with_observer(
    initial: &Rc<State>,
    depth_limit: Option<u32>,
    observer: &mut dyn ExpansionObserver,
) -> Option<Rc<State>> {
    search_with(initial, LifoFrontier::default(), depth_limit, observer).into_goal()
}

/// Iterative deepening: depth-limited [`dfs`] at limits 0, 1, 2, … until a
/// round finds the goal.
///
/// Complete when a goal exists at some finite depth, but not optimal in fare.
/// If no goal is reachable at any depth this loops forever; the caller must
/// ensure the instance is solvable.
pub fn iterative_deepening(initial: &Rc<State>) -> Option<Rc<State>> {
    iterative_deepening_with_observer(initial, &mut LogObserver)
}

/// [`iterative_deepening`] with a caller-supplied expansion observer.
pub fn iterative_deepening_with_observer(
    initial: &Rc<State>,
    observer: &mut dyn ExpansionObserver,
) -> Option<Rc<State>> {
    let mut depth_limit = 0;

    loop {
        let round = dfs_with_observer(initial, Some(depth_limit), observer);
        debug!("finished depth-limited round at limit {}", depth_limit);
        if round.is_some() {
            return round;
        }
        depth_limit += 1;
    }
}

/// Uniform-cost search: always expands the cheapest queued state.
///
/// Complete and fare-optimal (the branching factor is finite and every
/// crossing costs at least one fare unit).
pub fn ucs(initial: &Rc<State>) -> Option<Rc<State>> {
    ucs_with_observer(initial, &mut LogObserver)
}

/// [`ucs`] with a caller-supplied expansion observer.
pub fn ucs_with_observer(
    initial: &Rc<State>,
    observer: &mut dyn ExpansionObserver,
) -> Option<Rc<State>> {
    search_with(initial, CheapestFirstFrontier::default(), None, observer).into_goal()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{is_goal_state, BankSide};

    /// Test observer that records the identity triple of every expansion.
    struct RecordingObserver {
        expanded: Vec<(u8, u8, BankSide)>,
    }

    impl RecordingObserver {
        fn new() -> Self {
            RecordingObserver {
                expanded: Vec::new(),
            }
        }
    }

    impl ExpansionObserver for RecordingObserver {
        fn on_expand(&mut self, state: &State) {
            self.expanded.push((
                state.missionaries_right(),
                state.cannibals_right(),
                state.boat_location(),
            ));
        }
    }

    fn canonical_start() -> Rc<State> {
        Rc::new(State::initial())
    }

    fn assert_chain_reaches_root(goal: &Rc<State>) {
        let mut current = Rc::clone(goal);
        let mut hops = 0;
        while let Some(parent) = current.parent() {
            current = Rc::clone(parent);
            hops += 1;
            assert!(hops <= 64, "parent chain suspiciously long");
        }
        assert_eq!(*current, State::initial());
        assert_eq!(current.depth(), 0);
        assert_eq!(hops, goal.depth());
    }

    #[test]
    fn test_bfs_solves_canonical_puzzle() {
        let goal = bfs(&canonical_start()).expect("BFS should find a solution");
        assert!(is_goal_state(&goal));
        assert_chain_reaches_root(&goal);
    }

    #[test]
    fn test_dfs_solves_canonical_puzzle() {
        let goal = dfs(&canonical_start(), None).expect("DFS should find a solution");
        assert!(is_goal_state(&goal));
        assert_chain_reaches_root(&goal);
    }

    #[test]
    fn test_iterative_deepening_solves_canonical_puzzle() {
        let goal =
            iterative_deepening(&canonical_start()).expect("IDS should find a solution");
        assert!(is_goal_state(&goal));
        assert_chain_reaches_root(&goal);
    }

    #[test]
    fn test_ucs_solves_canonical_puzzle() {
        let goal = ucs(&canonical_start()).expect("UCS should find a solution");
        assert!(is_goal_state(&goal));
        assert_chain_reaches_root(&goal);
    }

    #[test]
    fn test_bfs_is_depth_minimal() {
        let start = canonical_start();
        let by_bfs = bfs(&start).unwrap();
        let by_dfs = dfs(&start, None).unwrap();
        let by_ids = iterative_deepening(&start).unwrap();
        let by_ucs = ucs(&start).unwrap();

        assert!(by_bfs.depth() <= by_dfs.depth());
        assert!(by_bfs.depth() <= by_ids.depth());
        assert!(by_bfs.depth() <= by_ucs.depth());
        // The 3+3 puzzle with a two-seat boat needs exactly 11 crossings.
        assert_eq!(by_bfs.depth(), 11);
    }

    #[test]
    fn test_ucs_is_cost_minimal() {
        let start = canonical_start();
        let by_bfs = bfs(&start).unwrap();
        let by_dfs = dfs(&start, None).unwrap();
        let by_ids = iterative_deepening(&start).unwrap();
        let by_ucs = ucs(&start).unwrap();

        assert!(by_ucs.path_cost() <= by_bfs.path_cost());
        assert!(by_ucs.path_cost() <= by_dfs.path_cost());
        assert!(by_ucs.path_cost() <= by_ids.path_cost());
    }

    #[test]
    fn test_dfs_with_zero_limit_reports_failure() {
        // The canonical start is not a goal, and a limit of 0 forbids
        // expanding anything at all.
        assert!(dfs(&canonical_start(), Some(0)).is_none());
    }

    #[test]
    fn test_no_state_expanded_twice() {
        for run in 0..3 {
            let mut observer = RecordingObserver::new();
            let start = canonical_start();
            match run {
                0 => bfs_with_observer(&start, &mut observer),
                1 => dfs_with_observer(&start, None, &mut observer),
                _ => ucs_with_observer(&start, &mut observer),
            };
            let unique: HashSet<_> = observer.expanded.iter().collect();
            assert_eq!(
                unique.len(),
                observer.expanded.len(),
                "run {} expanded some state twice",
                run
            );
        }
    }

    #[test]
    fn test_observer_choice_does_not_affect_results() {
        let start = canonical_start();
        let mut recording = RecordingObserver::new();
        let with_recorder = bfs_with_observer(&start, &mut recording).unwrap();
        let with_default = bfs(&start).unwrap();
        assert_eq!(*with_recorder, *with_default);
        assert_eq!(with_recorder.depth(), with_default.depth());
        assert_eq!(with_recorder.path_cost(), with_default.path_cost());
        assert!(!recording.expanded.is_empty());
    }

    #[test]
    fn test_solution_alternates_boat_sides() {
        // Consecutive states along any returned path differ by exactly one
        // crossing, so the boat side must flip at every step.
        let goal = bfs(&canonical_start()).unwrap();
        let mut current = Rc::clone(&goal);
        while let Some(parent) = current.parent() {
            assert_eq!(current.boat_location(), parent.boat_location().opposite());
            assert_eq!(current.depth(), parent.depth() + 1);
            assert!(current.path_cost() > parent.path_cost());
            current = Rc::clone(parent);
        }
    }
}
