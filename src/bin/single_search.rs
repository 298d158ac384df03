use std::rc::Rc;

use clap::{Parser, ValueEnum};
use river_crossing_solver::engine::State;
use river_crossing_solver::reporter::format_outcome;
use river_crossing_solver::solver;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Algorithm {
    /// Breadth-first search (fewest crossings)
    Bfs,
    /// Depth-first search, optionally depth-limited
    Dfs,
    /// Iterative deepening
    Ids,
    /// Uniform-cost search (cheapest fare)
    Ucs,
}

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Search algorithm to run
    #[clap(value_enum)]
    algorithm: Algorithm,

    /// Depth limit for DFS (ignored by the other algorithms)
    #[clap(short, long)]
    depth_limit: Option<u32>,
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    let initial_state = Rc::new(State::initial());

    println!("Initial state:\n{}\n", initial_state);
    println!("Searching with {:?}...\n", args.algorithm);

    let outcome = match args.algorithm {
        Algorithm::Bfs => solver::bfs(&initial_state),
        Algorithm::Dfs => solver::dfs(&initial_state, args.depth_limit),
        Algorithm::Ids => solver::iterative_deepening(&initial_state),
        Algorithm::Ucs => solver::ucs(&initial_state),
    };

    println!("{}", format_outcome(outcome.as_ref()));
}
