//! # River Crossing Solver Library
//!
//! This library solves the classic missionaries-and-cannibals river-crossing
//! puzzle with uninformed search: three missionaries and three cannibals must
//! cross from the right bank to the left in a two-seat boat, without
//! cannibals ever outnumbering missionaries on either bank.
//!
//! It is used by two binaries:
//! - `solve_all`: Runs all four search algorithms in sequence and prints
//!   each solution path.
//! - `single_search`: Runs one chosen algorithm, with an optional depth
//!   limit for depth-first search.
//!
//! ## Modules
//! - `engine`: The puzzle state representation (`State`, `BankSide`), the
//!   bank-safety validity rule, the successor function, and the goal test.
//! - `solver`: The four search algorithms (`bfs`, `dfs`, `iterative_deepening`,
//!   `ucs`) over a shared open/closed-list expand loop, plus the
//!   `ExpansionObserver` hook for expansion traces.
//! - `reporter`: Solution-path reconstruction and text rendering.

pub mod engine;
pub mod reporter;
pub mod solver;
