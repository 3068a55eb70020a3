use std::fmt;

/// Lifecycle of a [`SearchProcess`](crate::SearchProcess).
///
/// Transitions only go forward: `Idle -> Running -> terminal`, or straight
/// from `Idle` to `BadArguments`/`NotReachable` when a request is rejected
/// up front. Nothing leaves a terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchState {
    /// Not yet initialised.
    #[default]
    Idle,
    /// Initialised; more polls needed.
    Running,
    /// A goal was expanded and the path is available.
    Found,
    /// Cancelled by the caller through
    /// [`SearchProcess::interrupt`](crate::SearchProcess::interrupt).
    Interrupted,
    /// Missing start or empty goal set.
    BadArguments,
    /// The open set ran dry, or no goal passed the reachability pre-filter.
    NotReachable,
    /// The expansion limit was hit.
    Overwhelm,
}

impl SearchState {
    /// Whether the search has finished, successfully or not.
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Idle | Self::Running)
    }
}

impl fmt::Display for SearchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Found => "found",
            Self::Interrupted => "interrupted",
            Self::BadArguments => "bad arguments",
            Self::NotReachable => "not reachable",
            Self::Overwhelm => "overwhelm",
        };
        f.write_str(s)
    }
}
