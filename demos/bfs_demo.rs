//! Console BFS pathfinding demo on a built-in map.
//!
//! Run: cargo run --bin bfs-demo
//! Set `RUST_LOG=debug` (or `trace`) to see search progress.

use gridbfs_demos::{Scenario, run};

fn main() {
    env_logger::init();

    let scenario = Scenario::builtin();
    match run(&scenario) {
        Ok(report) => print!("{report}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
