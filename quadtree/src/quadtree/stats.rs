/// Traversal counters for circle queries.
///
/// Counters accumulate across queries until `reset` is called, so one
/// instance can be threaded through a whole batch of queries.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct QueryStats {
    pub queries: usize,
    /// Nodes whose bounds intersected the query circle.
    pub node_visits: usize,
    /// Nodes rejected by the bounds test; their subtrees were skipped.
    pub pruned_nodes: usize,
    pub anchor_hits: usize,
}

impl QueryStats {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
