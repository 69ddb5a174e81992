//! Search session controller
//!
//! Sits between a presentation layer and [`repo_search`]: owns the
//! accumulated results, the page cursor, and the per-kind in-flight guards
//! for one search session, and publishes immutable state snapshots on every
//! mutation.
//!
//! # Example
//!
//! ```rust,no_run
//! use repo_explore::ExploreController;
//! use repo_search::{ReqwestTransport, SearchClient};
//! use std::sync::Arc;
//!
//! # async fn example() {
//! let transport = Arc::new(ReqwestTransport::new());
//! let service = Arc::new(SearchClient::new(transport));
//! let controller = Arc::new(ExploreController::new(service, 10));
//!
//! controller.select_filter("Language", "Rust");
//! controller.reload().await;
//!
//! for repo in &controller.state().repositories {
//!     println!("{}", repo.full_name);
//! }
//! # }
//! ```

pub mod controller;
pub mod state;

pub use controller::ExploreController;
pub use state::ExploreState;
