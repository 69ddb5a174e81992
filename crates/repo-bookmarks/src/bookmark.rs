//! Bookmark record
//!
//! The persisted shape of a saved repository: the repository fields the
//! store models, plus the time the bookmark was created. The license is
//! flattened to its SPDX identifier.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use repo_search::{License, Owner, Repository};

/// A saved repository
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    /// Repository id, the store's key
    pub id: i64,
    /// Short repository name
    pub name: String,
    /// Full name including the owner
    pub full_name: String,
    /// Repository description, if any
    pub description: Option<String>,
    /// Number of stargazers at bookmark time
    pub stargazers_count: i64,
    /// Primary language, if any
    pub language: Option<String>,
    /// Topics in API order
    pub topics: Vec<String>,
    /// Repository owner
    pub owner: Owner,
    /// SPDX license identifier, if licensed
    pub license: Option<String>,
    /// When the bookmark was created
    pub created_at: DateTime<Utc>,
}

impl Bookmark {
    /// Bookmark a repository, stamping the creation time
    pub fn new(repo: &Repository) -> Self {
        Self {
            id: repo.id,
            name: repo.name.clone(),
            full_name: repo.full_name.clone(),
            description: repo.description.clone(),
            stargazers_count: repo.stargazers_count,
            language: repo.language.clone(),
            topics: repo.topics.clone(),
            owner: repo.owner.clone(),
            license: repo.license.as_ref().map(|l| l.spdx_id.clone()),
            created_at: Utc::now(),
        }
    }

    /// Restore the domain repository this bookmark was created from
    pub fn to_repository(&self) -> Repository {
        Repository {
            id: self.id,
            name: self.name.clone(),
            full_name: self.full_name.clone(),
            description: self.description.clone(),
            stargazers_count: self.stargazers_count,
            language: self.language.clone(),
            topics: self.topics.clone(),
            owner: self.owner.clone(),
            license: self.license.clone().map(|spdx_id| License { spdx_id }),
        }
    }
}
