use std::rc::Rc;

use river_crossing_solver::engine::State;
use river_crossing_solver::reporter::format_outcome;
use river_crossing_solver::solver;

fn banner(title: &str) {
    println!("***************************************************");
    println!("{:^51}", title);
    println!("***************************************************");
}

fn main() {
    env_logger::init();

    let initial_state = Rc::new(State::initial());

    banner("BFS");
    println!("{}", format_outcome(solver::bfs(&initial_state).as_ref()));

    println!();
    banner("DFS");
    println!(
        "{}",
        format_outcome(solver::dfs(&initial_state, None).as_ref())
    );

    println!();
    banner("IDS");
    println!(
        "{}",
        format_outcome(solver::iterative_deepening(&initial_state).as_ref())
    );

    println!();
    banner("UCS");
    println!("{}", format_outcome(solver::ucs(&initial_state).as_ref()));
}
