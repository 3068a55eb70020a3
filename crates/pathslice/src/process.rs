//! The search state machine and its budgeted step function.

use crate::closed::ClosedSet;
use crate::entry;
use crate::open::OpenSet;
use crate::options::SearchOptions;
use crate::oracle::{CapacityOracle, experience_sample};
use crate::record::{NodeRecord, trace_back};
use crate::state::SearchState;
use crate::traits::Explorer;

/// Open-set room per closed slot when pre-sizing, roughly one grid
/// neighbourhood.
const OPEN_PER_CLOSED: usize = 8;

/// Pre-sizes for the closed set and for the arena and open set. The oracle
/// hint is capped by what `check_limit` lets a search touch.
fn capacities(oracle: &CapacityOracle, options: &SearchOptions) -> (usize, usize) {
    let hint = oracle.capacity_hint();
    let closed = (options.check_limit as usize).saturating_add(1);
    (
        hint.min(closed),
        hint.min(closed.saturating_mul(OPEN_PER_CLOSED)),
    )
}

/// One in-flight search over an [`Explorer`].
///
/// Created by [`find_path`](crate::find_path) or
/// [`Pathfinder::search`](crate::Pathfinder::search) and then driven by the
/// caller: [`poll`](Self::poll) performs one time slice sized by the
/// [`CapacityOracle`], [`step`](Self::step) takes an explicit budget and
/// [`run`](Self::run) goes to completion. Nothing happens between calls, so a
/// host loop decides the cadence and can drop the process at any time.
///
/// All node bookkeeping is owned by the process and released with it. A
/// finished process can be reused for another query against the same
/// explorer with [`restart`](Self::restart), keeping its allocations.
pub struct SearchProcess<'a, E: Explorer> {
    explorer: &'a E,
    oracle: &'a CapacityOracle,
    options: SearchOptions,
    state: SearchState,
    goals: Vec<E::Node>,
    records: Vec<NodeRecord<E::Node>>,
    open: OpenSet<E::Node>,
    closed: ClosedSet<E::Node>,
    path: Vec<E::Node>,
    // arena slot the current path leads to
    path_end: Option<usize>,
    iterations_per_poll: usize,
    nbuf: Vec<E::Node>,
}

impl<'a, E: Explorer> SearchProcess<'a, E> {
    pub(crate) fn new(explorer: &'a E, oracle: &'a CapacityOracle, options: SearchOptions) -> Self {
        let (closed, touched) = capacities(oracle, &options);
        Self {
            explorer,
            oracle,
            options,
            state: SearchState::Idle,
            goals: Vec::new(),
            records: Vec::with_capacity(touched),
            open: OpenSet::with_capacity(touched),
            closed: ClosedSet::with_capacity(closed),
            path: Vec::new(),
            path_end: None,
            iterations_per_poll: oracle.iteration_budget(),
            nbuf: Vec::with_capacity(8),
        }
    }

    /// Start a new query, discarding whatever this process held before.
    ///
    /// Arguments are validated exactly as in [`find_path`](crate::find_path):
    /// a missing start or an empty goal set yields
    /// [`SearchState::BadArguments`], and if no goal passes
    /// [`Explorer::reachable`] the result is [`SearchState::NotReachable`].
    /// Otherwise the process is left [`SearchState::Running`].
    pub fn restart(
        &mut self,
        start: Option<E::Node>,
        goals: impl IntoIterator<Item = E::Node>,
    ) -> SearchState {
        self.state = SearchState::Idle;
        self.path.clear();
        self.path_end = None;
        self.records.clear();

        // Re-size from the oracle: it may have learned since last time.
        let (closed, touched) = capacities(self.oracle, &self.options);
        self.iterations_per_poll = self.oracle.iteration_budget();
        self.records.reserve(touched);
        self.open.reset(touched);
        self.closed.reset(closed);

        match entry::admit(self.explorer, start, goals, &mut self.goals) {
            Ok(start) => self.begin(start),
            Err(rejected) => {
                log::debug!("search rejected: {rejected}");
                self.transition(rejected);
            }
        }
        self.state
    }

    fn begin(&mut self, start: E::Node) {
        self.records.push(NodeRecord::new(start, None, 0.0, 0.0));
        self.open.enqueue(&self.records, 0);
        self.transition(SearchState::Running);
        log::debug!(
            "search started: {} goal(s), check limit {}, {} iteration(s) per poll",
            self.goals.len(),
            self.options.check_limit,
            self.iterations_per_poll
        );
    }

    /// Perform up to `budget` iterations. Returns the state afterwards.
    ///
    /// Each iteration expands at most one node. Calling this on a process
    /// that is not running does nothing.
    pub fn step(&mut self, budget: usize) -> SearchState {
        let mut remaining = budget;
        while self.state == SearchState::Running && remaining > 0 {
            remaining -= 1;
            self.iterate();
        }
        self.state
    }

    /// Perform one time slice, sized from the oracle's average search size.
    pub fn poll(&mut self) -> SearchState {
        let state = self.step(self.iterations_per_poll);
        log::trace!(
            "poll: {state}, open {}, closed {}",
            self.open.len(),
            self.closed.len()
        );
        state
    }

    /// Run until a terminal state is reached.
    pub fn run(&mut self) -> SearchState {
        self.step(usize::MAX)
    }

    /// Cancel a running search. The closest-path fallback stays available.
    ///
    /// Interrupted searches are not reported to the oracle. Has no effect
    /// once the search is finished.
    pub fn interrupt(&mut self) -> SearchState {
        if self.state == SearchState::Running {
            self.transition(SearchState::Interrupted);
        }
        self.state
    }

    fn iterate(&mut self) {
        if self.open.is_empty() {
            self.transition(SearchState::NotReachable);
            return;
        }
        if self.closed.len() >= self.options.check_limit as usize {
            self.transition(SearchState::Overwhelm);
            return;
        }
        let Some(ci) = self.open.remove_min(&mut self.records) else {
            self.transition(SearchState::NotReachable);
            return;
        };

        let current = self.records[ci].master.clone();
        self.closed.insert(current.clone(), ci);

        if self.goals.contains(&current) {
            trace_back(&self.records, ci, &mut self.path);
            self.path_end = Some(ci);
            self.transition(SearchState::Found);
            return;
        }

        let current_g = self.records[ci].path_cost;
        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        self.explorer.neighbours(&current, &mut nbuf);

        for np in nbuf.drain(..) {
            if self.closed.contains(&np) || !self.explorer.passable(&np) {
                continue;
            }
            let tentative = current_g + self.explorer.path_cost(&current, &np);

            if let Some(ni) = self.open.find(&np) {
                if tentative < self.records[ni].path_cost {
                    self.records[ni].relax(ci, tentative);
                    self.open.update_priority(&self.records, ni);
                }
                continue;
            }

            let estimate = if self.options.use_heuristic {
                self.estimate(&np)
            } else {
                0.0
            };
            self.records
                .push(NodeRecord::new(np, Some(ci), tentative, estimate));
            let slot = self.records.len() - 1;
            self.open.enqueue(&self.records, slot);
        }

        self.nbuf = nbuf;
    }

    /// Heuristic distance from `node` to the nearest goal.
    fn estimate(&self, node: &E::Node) -> f32 {
        self.goals
            .iter()
            .map(|g| self.explorer.shortest_path(node, g))
            .fold(f32::INFINITY, f32::min)
    }

    /// Move to `next`, enforcing the lifecycle. An illegal transition is a
    /// bug in this module, not a recoverable condition.
    fn transition(&mut self, next: SearchState) {
        use SearchState::*;
        match (self.state, next) {
            (Idle, Running | BadArguments | NotReachable) => {}
            (Running, Found | NotReachable | Overwhelm | Interrupted) => {}
            (from, to) => panic!("invalid search transition: {from} -> {to}"),
        }
        self.state = next;
        if !next.is_terminal() {
            return;
        }

        log::debug!(
            "search finished: {next}, open {}, closed {}",
            self.open.len(),
            self.closed.len()
        );
        if next == Found {
            self.oracle
                .add_experience(experience_sample(self.open.len() + self.closed.len()));
        }
    }

    /// Best-effort path for a finished search.
    ///
    /// After [`SearchState::Found`] this is the found path. After any other
    /// terminal state the expanded node closest to a goal (by
    /// [`Explorer::shortest_path`]) is picked, earliest expansion first on
    /// ties, and the path to it is rebuilt. Empty while the search is still
    /// running or when nothing was expanded.
    pub fn build_closest_path(&mut self) -> &[E::Node] {
        if self.state == SearchState::Found || !self.state.is_terminal() {
            return &self.path;
        }

        let mut best: Option<(usize, f32)> = None;
        for &slot in self.closed.history() {
            let d = self.estimate(&self.records[slot].master);
            match best {
                Some((_, bd)) if bd <= d => {}
                _ => best = Some((slot, d)),
            }
        }

        if let Some((slot, _)) = best {
            trace_back(&self.records, slot, &mut self.path);
            self.path_end = Some(slot);
        }
        &self.path
    }

    /// Check the current path against the explorer.
    ///
    /// With `connection_check` every consecutive pair must be a neighbour
    /// edge; with `passable_check` every node must be passable. Useful when
    /// the explorer's world may have changed since the search ran.
    pub fn validate(&self, connection_check: bool, passable_check: bool) -> bool {
        if passable_check && !self.path.iter().all(|n| self.explorer.passable(n)) {
            return false;
        }
        if connection_check {
            let mut buf = Vec::with_capacity(8);
            for pair in self.path.windows(2) {
                buf.clear();
                self.explorer.neighbours(&pair[0], &mut buf);
                if !buf.contains(&pair[1]) {
                    return false;
                }
            }
        }
        true
    }

    // -----------------------------------------------------------------------
    // Diagnostics
    // -----------------------------------------------------------------------

    /// Current lifecycle state.
    #[inline]
    pub fn state(&self) -> SearchState {
        self.state
    }

    /// The path from start to goal, or the closest-path fallback once built.
    #[inline]
    pub fn path(&self) -> &[E::Node] {
        &self.path
    }

    /// Cost (g) of the current path, if there is one.
    pub fn path_cost(&self) -> Option<f32> {
        self.path_end.map(|slot| self.records[slot].path_cost)
    }

    /// Goals that passed the reachability pre-filter.
    pub fn goals(&self) -> &[E::Node] {
        &self.goals
    }

    pub fn options(&self) -> SearchOptions {
        self.options
    }

    pub fn open_len(&self) -> usize {
        self.open.len()
    }

    pub fn closed_len(&self) -> usize {
        self.closed.len()
    }

    /// Iterations a single [`poll`](Self::poll) performs.
    pub fn iterations_per_poll(&self) -> usize {
        self.iterations_per_poll
    }

    /// Nodes currently in the open set, in no particular order.
    pub fn open_nodes(&self) -> impl Iterator<Item = &E::Node> + '_ {
        self.open.slots().map(|slot| &self.records[slot].master)
    }

    /// Expanded nodes, in expansion order.
    pub fn closed_nodes(&self) -> impl Iterator<Item = &E::Node> + '_ {
        self.closed
            .history()
            .iter()
            .map(|&slot| &self.records[slot].master)
    }
}
