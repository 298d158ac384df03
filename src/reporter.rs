//! Rendering of search results for the command-line binaries.
//!
//! A goal state returned by the solver carries the whole solution in its
//! parent chain. This module walks that chain back to the root, reverses it,
//! and renders one block per configuration with the boat movement between
//! consecutive configurations spelled out.

use std::rc::Rc;

use crate::engine::State;

/// Reconstructs the path from the root to `goal`, in root-to-goal order.
///
/// The parent chain is acyclic by construction and always ends at a
/// parent-less root, so this terminates for any state the solver returns.
pub fn solution_path(goal: &Rc<State>) -> Vec<Rc<State>> {
    let mut path = Vec::with_capacity(goal.depth() as usize + 1);
    let mut current = Some(Rc::clone(goal));
    while let Some(state) = current {
        current = state.parent().map(Rc::clone);
        path.push(state);
    }
    path.reverse();
    path
}

/// Renders the full solution report for a found goal state.
///
/// The report shows the goal configuration first, then the path from the
/// initial configuration to the goal with a "Moving boat" line between each
/// pair of consecutive configurations.
pub fn format_solution(goal: &Rc<State>) -> String {
    let mut out = String::new();
    out.push_str(&format!("Goal state:\n{}\n", goal));
    out.push_str("\nPath:\n");

    let path = solution_path(goal);
    for (index, state) in path.iter().enumerate() {
        out.push_str(&format!("{}\n\n", state));
        if index + 1 < path.len() {
            out.push_str(&format!(
                "Moving boat to the {} side\n\n",
                state.boat_location().opposite()
            ));
        }
    }
    out
}

/// Renders a search outcome: the full report for a goal, or a fixed line for
/// the no-solution sentinel.
pub fn format_outcome(outcome: Option<&Rc<State>>) -> String {
    match outcome {
        Some(goal) => format_solution(goal),
        None => String::from("No solution found.\n"),
    }
}
