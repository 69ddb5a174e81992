//! Explore session state
//!
//! A plain snapshot of one search session. The controller owns the live
//! state and hands out clones; observers never see a half-applied mutation.

use repo_search::Repository;

/// Immutable snapshot of a search session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExploreState {
    /// Accumulated results. Replaced on reload, appended to on load-more,
    /// never reordered.
    pub repositories: Vec<Repository>,

    /// The last successfully fetched page; 0 before the first success
    pub current_page: u32,

    /// Whether a reload is in flight
    pub is_reloading: bool,

    /// Whether a load-more is in flight
    pub is_loading_more: bool,

    /// Message from the most recent failed fetch; cleared by the next
    /// success of either kind
    pub last_error: Option<String>,
}

impl ExploreState {
    /// Whether any fetch is currently in flight
    pub fn is_busy(&self) -> bool {
        self.is_reloading || self.is_loading_more
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = ExploreState::default();
        assert!(state.repositories.is_empty());
        assert_eq!(state.current_page, 0);
        assert!(!state.is_reloading);
        assert!(!state.is_loading_more);
        assert!(state.last_error.is_none());
        assert!(!state.is_busy());
    }
}
