//! Request validation and process construction.

use crate::options::SearchOptions;
use crate::oracle::{CapacityOracle, OracleConfig};
use crate::process::SearchProcess;
use crate::state::SearchState;
use crate::traits::Explorer;

/// Start a search from `start` towards the nearest of `goals`.
///
/// The returned process is already initialised: it is
/// [`SearchState::Running`] unless the request was rejected, in which case it
/// is [`SearchState::BadArguments`] (no start, or no goals) or
/// [`SearchState::NotReachable`] (no goal passed [`Explorer::reachable`]).
/// Drive it with [`SearchProcess::poll`] or [`SearchProcess::run`].
pub fn find_path<'a, E: Explorer>(
    explorer: &'a E,
    oracle: &'a CapacityOracle,
    options: SearchOptions,
    start: Option<E::Node>,
    goals: impl IntoIterator<Item = E::Node>,
) -> SearchProcess<'a, E> {
    let mut process = SearchProcess::new(explorer, oracle, options);
    process.restart(start, goals);
    process
}

/// Validate a request. On success `out` holds the goals that passed the
/// reachability pre-filter and the start node is returned.
pub(crate) fn admit<E: Explorer>(
    explorer: &E,
    start: Option<E::Node>,
    goals: impl IntoIterator<Item = E::Node>,
    out: &mut Vec<E::Node>,
) -> Result<E::Node, SearchState> {
    out.clear();
    out.extend(goals);
    let Some(start) = start else {
        return Err(SearchState::BadArguments);
    };
    if out.is_empty() {
        return Err(SearchState::BadArguments);
    }
    out.retain(|goal| explorer.reachable(&start, goal));
    if out.is_empty() {
        return Err(SearchState::NotReachable);
    }
    Ok(start)
}

/// Convenience owner of a [`CapacityOracle`] and default options.
///
/// Keep one per explorer type (or per map) so that repeated queries of a
/// similar size share their learned sizing.
#[derive(Default)]
pub struct Pathfinder {
    oracle: CapacityOracle,
    options: SearchOptions,
}

impl Pathfinder {
    pub fn new(options: SearchOptions, oracle: OracleConfig) -> Self {
        Self {
            oracle: CapacityOracle::new(oracle),
            options,
        }
    }

    /// Start a search with this pathfinder's options.
    pub fn search<'a, E: Explorer>(
        &'a self,
        explorer: &'a E,
        start: Option<E::Node>,
        goals: impl IntoIterator<Item = E::Node>,
    ) -> SearchProcess<'a, E> {
        find_path(explorer, &self.oracle, self.options, start, goals)
    }

    /// Start a search and run it to completion. Rejected requests come back
    /// in their terminal state, as from [`search`](Self::search).
    pub fn search_now<'a, E: Explorer>(
        &'a self,
        explorer: &'a E,
        start: Option<E::Node>,
        goals: impl IntoIterator<Item = E::Node>,
    ) -> SearchProcess<'a, E> {
        let mut process = self.search(explorer, start, goals);
        process.run();
        process
    }

    pub fn options(&self) -> SearchOptions {
        self.options
    }

    pub fn set_options(&mut self, options: SearchOptions) {
        self.options = options;
    }

    pub fn oracle(&self) -> &CapacityOracle {
        &self.oracle
    }
}
