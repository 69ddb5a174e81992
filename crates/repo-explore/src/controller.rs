//! Explore session controller
//!
//! Owns the mutable session state for one search session and sequences the
//! two fetch kinds. Guarantees:
//!
//! - at most one in-flight reload and one in-flight load-more at a time;
//!   duplicate triggers of the same kind are no-ops, so callers may fire
//!   them redundantly (double-tap, scroll-threshold retriggers)
//! - state mutation is never concurrent with another mutation: the state
//!   lock is taken to guard-and-reset, released across the network await,
//!   and retaken to apply the outcome
//! - a load-more that was in flight when a reload started is discarded on
//!   completion (generation check), so a stale page can never append after
//!   the session was reset
//!
//! Observers either poll [`ExploreController::state`] or subscribe to a
//! watch channel holding the latest snapshot.

use std::sync::{Arc, Mutex};

use log::{debug, warn};
use tokio::sync::watch;

use repo_search::{FilterSet, RepositorySearch};

use crate::state::ExploreState;

/// Live session data behind the controller's lock
struct Session {
    filters: FilterSet,
    state: ExploreState,
    /// Bumped by each reload; fetches tagged with an older value are stale
    generation: u64,
}

/// Controller for one repository search session
///
/// Shared as `Arc<ExploreController>`; any task may trigger operations or
/// read state. Dropping the controller ends the session; results of fetches
/// still in flight at that point are never observed.
pub struct ExploreController {
    service: Arc<dyn RepositorySearch>,
    per_page: u32,
    session: Mutex<Session>,
    snapshot_tx: watch::Sender<ExploreState>,
}

impl ExploreController {
    /// Create a controller with the standard filter set
    pub fn new(service: Arc<dyn RepositorySearch>, per_page: u32) -> Self {
        Self::with_filters(service, FilterSet::default_set(), per_page)
    }

    /// Create a controller with a custom filter set
    pub fn with_filters(
        service: Arc<dyn RepositorySearch>,
        filters: FilterSet,
        per_page: u32,
    ) -> Self {
        let state = ExploreState::default();
        let (snapshot_tx, _) = watch::channel(state.clone());
        Self {
            service,
            per_page,
            session: Mutex::new(Session {
                filters,
                state,
                generation: 0,
            }),
            snapshot_tx,
        }
    }

    /// Current state snapshot
    pub fn state(&self) -> ExploreState {
        self.session.lock().unwrap().state.clone()
    }

    /// Subscribe to state snapshots.
    ///
    /// The receiver always holds the latest snapshot; every mutation
    /// publishes a new one.
    pub fn subscribe(&self) -> watch::Receiver<ExploreState> {
        self.snapshot_tx.subscribe()
    }

    /// Snapshot of the current filter selections
    pub fn filters(&self) -> FilterSet {
        self.session.lock().unwrap().filters.clone()
    }

    /// Select an option within a named filter category.
    ///
    /// Pure selection change; no fetch is triggered. Callers commit a
    /// filter change by calling [`reload`](Self::reload). Returns `false`
    /// when the category or option does not exist.
    pub fn select_filter(&self, category: &str, option: &str) -> bool {
        self.session.lock().unwrap().filters.select(category, option)
    }

    /// Reset every filter category to its default option
    pub fn reset_filters(&self) {
        self.session.lock().unwrap().filters.reset_all();
    }

    /// Whether any filter category is not at its default
    pub fn any_filter_applied(&self) -> bool {
        self.session.lock().unwrap().filters.any_applied()
    }

    /// Restart the session from page 1, discarding accumulated results.
    ///
    /// No-op when a reload is already in flight. Results are cleared and
    /// the page cursor reset before the fetch is issued, atomically with
    /// the in-flight flag flip. On failure the session stays empty: a
    /// reload discards prior results even when the fetch fails.
    pub async fn reload(&self) {
        let filters = {
            let mut session = self.session.lock().unwrap();
            if session.state.is_reloading {
                debug!("reload already in flight, ignoring trigger");
                return;
            }
            session.state.is_reloading = true;
            session.state.repositories.clear();
            session.state.current_page = 0;
            session.generation += 1;
            self.publish(&session.state);
            session.filters.clone()
        };

        let result = self.service.fetch_page(&filters, 1, self.per_page).await;

        let mut session = self.session.lock().unwrap();
        match result {
            Ok(repositories) => {
                debug!("reload fetched {} repositories", repositories.len());
                session.state.repositories = repositories;
                session.state.current_page = 1;
                session.state.last_error = None;
            }
            Err(err) => {
                warn!("reload failed: {err}");
                session.state.last_error = Some(err.to_string());
            }
        }
        session.state.is_reloading = false;
        self.publish(&session.state);
    }

    /// Fetch the next page and append it to the accumulated results.
    ///
    /// No-op when a load-more is already in flight. Uses the filters and
    /// page cursor in effect at the time of the call. On failure the
    /// accumulated results and page cursor are left untouched so earlier
    /// pages are not lost.
    pub async fn load_more(&self) {
        let (filters, page, generation) = {
            let mut session = self.session.lock().unwrap();
            if session.state.is_loading_more {
                debug!("load_more already in flight, ignoring trigger");
                return;
            }
            session.state.is_loading_more = true;
            self.publish(&session.state);
            (
                session.filters.clone(),
                session.state.current_page + 1,
                session.generation,
            )
        };

        let result = self.service.fetch_page(&filters, page, self.per_page).await;

        let mut session = self.session.lock().unwrap();
        if session.generation != generation {
            // A reload reset the session while this fetch was in flight.
            debug!("discarding stale page {page} fetched before a reload");
            session.state.is_loading_more = false;
            self.publish(&session.state);
            return;
        }
        match result {
            Ok(mut repositories) => {
                debug!("page {page} appended {} repositories", repositories.len());
                session.state.repositories.append(&mut repositories);
                session.state.current_page = page;
                session.state.last_error = None;
            }
            Err(err) => {
                warn!("load_more failed for page {page}: {err}");
                session.state.last_error = Some(err.to_string());
            }
        }
        session.state.is_loading_more = false;
        self.publish(&session.state);
    }

    fn publish(&self, state: &ExploreState) {
        self.snapshot_tx.send_replace(state.clone());
    }
}
