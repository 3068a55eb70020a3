/// Default maximum number of expansions per search.
pub const DEFAULT_CHECK_LIMIT: u32 = 256;

/// Per-search tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchOptions {
    /// Maximum number of expanded (closed) nodes before the search gives up
    /// with [`SearchState::Overwhelm`](crate::SearchState::Overwhelm).
    pub check_limit: u32,
    /// Use the explorer's heuristic (A*). When false the search degrades to
    /// Dijkstra.
    pub use_heuristic: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            check_limit: DEFAULT_CHECK_LIMIT,
            use_heuristic: true,
        }
    }
}

impl SearchOptions {
    /// Return a copy with a different expansion limit.
    pub const fn with_check_limit(mut self, check_limit: u32) -> Self {
        self.check_limit = check_limit;
        self
    }

    /// Return a copy with the heuristic switched on or off.
    pub const fn with_heuristic(mut self, use_heuristic: bool) -> Self {
        self.use_heuristic = use_heuristic;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let o = SearchOptions::default();
        assert_eq!(o.check_limit, 256);
        assert!(o.use_heuristic);
    }

    #[test]
    fn builders() {
        let o = SearchOptions::default()
            .with_check_limit(10)
            .with_heuristic(false);
        assert_eq!(o.check_limit, 10);
        assert!(!o.use_heuristic);
    }
}
