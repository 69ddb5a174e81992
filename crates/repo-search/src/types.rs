//! Repository search API data transfer objects
//!
//! These types mirror the wire shape of the GitHub repository search API.
//! Field names match the API's snake_case convention directly, so no serde
//! renames are needed; unknown wire fields are ignored on decode.

use serde::{Deserialize, Serialize};

/// A repository returned by the search API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    /// Unique repository id
    pub id: i64,

    /// Short repository name (e.g., "rust")
    pub name: String,

    /// Full name including the owner (e.g., "rust-lang/rust")
    pub full_name: String,

    /// Repository description, if set
    #[serde(default)]
    pub description: Option<String>,

    /// Number of stargazers
    pub stargazers_count: i64,

    /// Primary programming language, if detected
    #[serde(default)]
    pub language: Option<String>,

    /// Topics assigned to the repository, in API order
    #[serde(default)]
    pub topics: Vec<String>,

    /// Repository owner
    pub owner: Owner,

    /// License information, if any
    #[serde(default)]
    pub license: Option<License>,
}

/// The owner of a repository
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Owner {
    /// Owner's login name
    pub login: String,

    /// URL to the owner's avatar image
    pub avatar_url: String,
}

/// License information for a repository
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct License {
    /// SPDX identifier (e.g., "MIT", "Apache-2.0")
    pub spdx_id: String,
}

/// Success envelope of the search endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    /// Repositories in server-provided order
    pub items: Vec<Repository>,
}

/// Error envelope returned by the API on 4xx/5xx responses
#[derive(Debug, Clone, Deserialize)]
pub struct FailureResponse {
    /// Human-readable error message from the server
    pub message: String,
}
