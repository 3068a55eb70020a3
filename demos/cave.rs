//! Time-sliced searches over a seeded random cave.
//!
//! Run: cargo run --bin pathslice-demo [seed]

use pathslice::{OracleConfig, Pathfinder, SearchOptions};
use pathslice_demos::{CaveConfig, generate_cave, random_floor, run_query};
use pathslice_grid::{Connectivity, GridExplorer};
use rand::SeedableRng;

const QUERIES: usize = 6;

fn main() {
    let seed = match std::env::args().nth(1).map(|s| s.parse::<u64>()) {
        None => 42,
        Some(Ok(seed)) => seed,
        Some(Err(e)) => {
            eprintln!("Error: invalid seed: {e}");
            std::process::exit(1);
        }
    };

    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let map = generate_cave(&mut rng, CaveConfig::default());
    let explorer = GridExplorer::new(&map, Connectivity::Eight).with_components();
    let finder = Pathfinder::new(
        SearchOptions::default().with_check_limit(600),
        OracleConfig::default(),
    );

    if let Some(cc) = explorer.components() {
        println!("seed {seed}: {} connected region(s)", cc.count());
    }

    for i in 0..QUERIES {
        let (Some(start), Some(goal)) = (random_floor(&mut rng, &map), random_floor(&mut rng, &map))
        else {
            eprintln!("Error: cave has no floor");
            std::process::exit(1);
        };

        let report = run_query(&finder, &explorer, start, goal);
        println!();
        println!(
            "query {i}: {start} -> {goal}: {} after {} poll(s) of {} iteration(s), {} expanded",
            report.state, report.polls, report.iterations_per_poll, report.expanded
        );
        match report.cost {
            Some(cost) if !report.path.is_empty() => println!(
                "path: {} step(s), cost {cost:.2}, valid: {}",
                report.path.len() - 1,
                report.valid
            ),
            _ => println!("no path"),
        }
        println!("oracle average: {:.1}", finder.oracle().average());
        println!("{}", map.render(&report.path));
    }
}
