use std::hash::Hash;

/// Capability supplying the graph a search runs over.
///
/// The engine never mutates nodes; it only clones them into its own
/// bookkeeping. Implementations are borrowed for the lifetime of a
/// [`SearchProcess`](crate::SearchProcess).
pub trait Explorer {
    /// Domain node identity.
    type Node: Clone + Eq + Hash;

    /// Append the neighbours of `node` into `buf`. The caller clears `buf`
    /// before calling. Nodes that do not exist must simply not be pushed.
    fn neighbours(&self, node: &Self::Node, buf: &mut Vec<Self::Node>);

    /// Cost of the edge `from -> to`. Used for the path cost (g).
    fn path_cost(&self, from: &Self::Node, to: &Self::Node) -> f32;

    /// Heuristic estimate of the cost from `from` to `to` (h).
    /// Must never overestimate the true cost for optimal results.
    fn shortest_path(&self, from: &Self::Node, to: &Self::Node) -> f32;

    /// Cheap pre-filter run before a search starts. False positives are
    /// allowed, false negatives make a goal unreachable.
    fn reachable(&self, _from: &Self::Node, _to: &Self::Node) -> bool {
        true
    }

    /// Whether `node` may be entered.
    fn passable(&self, _node: &Self::Node) -> bool {
        true
    }
}
