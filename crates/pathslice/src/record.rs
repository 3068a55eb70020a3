//! Per-search bookkeeping for discovered nodes.
//!
//! Records live in a flat arena owned by the search process. Predecessor
//! links are arena slots rather than references, so the whole arena can be
//! cleared and reused by the next query.

/// Bookkeeping wrapper around one domain node for the duration of a search.
#[derive(Debug, Clone)]
pub(crate) struct NodeRecord<T> {
    pub(crate) master: T,
    /// Arena slot of the predecessor, `None` for the start node.
    pub(crate) came_from: Option<usize>,
    /// g: best known cost from the start.
    pub(crate) path_cost: f32,
    /// h: heuristic estimate to the nearest goal, 0 without heuristics.
    pub(crate) path_cost_estimated: f32,
    /// f = g + h, the open set key.
    pub(crate) cost: f32,
    /// Still in the open set. Cleared once, when the node is expanded.
    pub(crate) open: bool,
}

impl<T> NodeRecord<T> {
    pub(crate) fn new(master: T, came_from: Option<usize>, path_cost: f32, estimate: f32) -> Self {
        Self {
            master,
            came_from,
            path_cost,
            path_cost_estimated: estimate,
            cost: path_cost + estimate,
            open: true,
        }
    }

    /// Relax to a cheaper predecessor. The estimate is kept, so the key can
    /// only go down.
    pub(crate) fn relax(&mut self, came_from: usize, path_cost: f32) {
        debug_assert!(path_cost < self.path_cost);
        self.came_from = Some(came_from);
        self.path_cost = path_cost;
        self.cost = path_cost + self.path_cost_estimated;
    }
}

/// Walk `came_from` links from `slot` back to the start and write the nodes
/// into `out` in start-to-`slot` order.
pub(crate) fn trace_back<T: Clone>(records: &[NodeRecord<T>], slot: usize, out: &mut Vec<T>) {
    out.clear();
    let mut cur = Some(slot);
    while let Some(i) = cur {
        let rec = &records[i];
        out.push(rec.master.clone());
        cur = rec.came_from;
    }
    out.reverse();
}
