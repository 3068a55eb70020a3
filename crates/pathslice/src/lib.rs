//! Generic, time-sliced A*/Dijkstra search.
//!
//! The engine knows nothing about the graph it searches. A caller supplies an
//! [`Explorer`] (adjacency, edge costs, heuristic, reachability and
//! passability over its own node type) and gets back a [`SearchProcess`]
//! that it drives at its own pace:
//!
//! - [`SearchProcess::poll`] runs one time slice, sized automatically,
//! - [`SearchProcess::step`] runs an explicit number of iterations,
//! - [`SearchProcess::run`] goes to completion.
//!
//! Failures are terminal [`SearchState`]s rather than errors. After any of
//! them [`SearchProcess::build_closest_path`] still yields a partial route
//! towards the nearest goal.
//!
//! A [`CapacityOracle`] carries a rolling average of past search sizes from
//! one query to the next. It pre-sizes the per-search collections and sets
//! how much work one poll does, so repeated queries over the same map settle
//! into allocation-free, evenly sliced searches.
//!
//! ```
//! use pathslice::{CapacityOracle, Explorer, SearchOptions, SearchState, find_path};
//!
//! struct Line;
//!
//! impl Explorer for Line {
//!     type Node = i32;
//!     fn neighbours(&self, n: &i32, buf: &mut Vec<i32>) {
//!         buf.extend([n - 1, n + 1]);
//!     }
//!     fn path_cost(&self, _: &i32, _: &i32) -> f32 {
//!         1.0
//!     }
//!     fn shortest_path(&self, a: &i32, b: &i32) -> f32 {
//!         (a - b).abs() as f32
//!     }
//! }
//!
//! let line = Line;
//! let oracle = CapacityOracle::default();
//! let mut search = find_path(&line, &oracle, SearchOptions::default(), Some(0), [3]);
//! while search.poll() == SearchState::Running {}
//! assert_eq!(search.path(), &[0, 1, 2, 3]);
//! ```

mod closed;
mod entry;
mod open;
mod options;
mod oracle;
mod process;
mod record;
mod state;
mod traits;

#[cfg(test)]
mod testing;

pub use entry::{Pathfinder, find_path};
pub use options::{DEFAULT_CHECK_LIMIT, SearchOptions};
pub use oracle::{CapacityOracle, EXPERIENCE_MARGIN, ITERATION_FANOUT, OracleConfig};
pub use process::SearchProcess;
pub use state::SearchState;
pub use traits::Explorer;
