//! GitHub repository search client
//!
//! This crate provides a trait-based client for a paginated, filterable
//! repository search API. Filters compose into a single query string, the
//! transport classifies HTTP outcomes, and the service decodes the success
//! envelope into domain items.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │              RepositorySearch trait              │
//! │  - fetch_page(filters, page, per_page)           │
//! └──────────────────────────────────────────────────┘
//!                        │
//!                        ▼
//! ┌─────────────────┐        ┌─────────────────────┐
//! │  SearchClient   │───────▶│   Transport trait   │
//! │  (URL + decode) │        │ (one GET, classify) │
//! └─────────────────┘        └─────────────────────┘
//!          │                            ▲
//!          ▼                            │
//! ┌─────────────────┐        ┌─────────────────────┐
//! │  FilterSet +    │        │  ReqwestTransport   │
//! │  query::compose │        │  (direct HTTP)      │
//! └─────────────────┘        └─────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use repo_search::{FilterSet, ReqwestTransport, RepositorySearch, SearchClient};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), repo_search::SearchError> {
//! let transport = Arc::new(ReqwestTransport::new());
//! let client = SearchClient::new(transport);
//!
//! let mut filters = FilterSet::default_set();
//! filters.select("Language", "Rust");
//!
//! let repositories = client.fetch_page(&filters, 1, 10).await?;
//! # Ok(())
//! # }
//! ```

pub mod filters;
pub mod query;
pub mod service;
pub mod transport;
pub mod types;

/// Default search endpoint (public GitHub)
pub const DEFAULT_ENDPOINT: &str = "https://api.github.com/search/repositories";

pub use filters::{
    FilterCategory, FilterOption, FilterSet, LanguageOption, LicenseOption, StarsOption,
};
pub use service::{RepositorySearch, SearchClient, SearchError};
pub use transport::{ReqwestTransport, Transport, TransportError};
pub use types::{License, Owner, Repository, SearchResponse};
