//! Bookmark persistence
//!
//! A JSON-file store keyed by repository id. The whole store is loaded at
//! open and written back on save; a missing or unparsable file yields an
//! empty store rather than an error so a corrupt file never blocks the app.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use repo_search::Repository;

use crate::bookmark::Bookmark;

const APP_NAME: &str = "repo-browser";
const STORE_FILE: &str = "bookmarks.json";

/// Default store location under the user's config directory
/// (e.g., `~/.config/repo-browser/bookmarks.json` on Linux)
pub fn default_store_path() -> Result<PathBuf> {
    let base = dirs::config_dir().context("could not determine config directory")?;
    Ok(base.join(APP_NAME).join(STORE_FILE))
}

/// File-backed store of bookmarked repositories, in insertion order
#[derive(Debug)]
pub struct BookmarkStore {
    path: PathBuf,
    bookmarks: Vec<Bookmark>,
}

impl BookmarkStore {
    /// Open the store at `path`.
    ///
    /// A missing file yields an empty store; an unparsable file is logged
    /// and also yields an empty store.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let bookmarks = match File::open(&path) {
            Ok(file) => {
                let reader = BufReader::new(file);
                match serde_json::from_reader(reader) {
                    Ok(bookmarks) => bookmarks,
                    Err(e) => {
                        log::warn!("failed to parse bookmark store {}: {e}", path.display());
                        Vec::new()
                    }
                }
            }
            Err(_) => {
                log::debug!("no bookmark store at {}, starting empty", path.display());
                Vec::new()
            }
        };
        Self { path, bookmarks }
    }

    /// Write the store back to its file, creating parent directories as
    /// needed
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("could not create {}", parent.display()))?;
        }
        let file = File::create(&self.path)
            .with_context(|| format!("could not create {}", self.path.display()))?;
        serde_json::to_writer_pretty(file, &self.bookmarks)?;
        log::info!(
            "saved {} bookmarks to {}",
            self.bookmarks.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Bookmark a repository.
    ///
    /// Returns `false` when the repository is already bookmarked.
    pub fn add(&mut self, repo: &Repository) -> bool {
        if self.contains(repo.id) {
            return false;
        }
        self.bookmarks.push(Bookmark::new(repo));
        true
    }

    /// Remove a bookmark by repository id.
    ///
    /// Returns `false` when no bookmark carries that id.
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.bookmarks.len();
        self.bookmarks.retain(|b| b.id != id);
        self.bookmarks.len() != before
    }

    pub fn contains(&self, id: i64) -> bool {
        self.bookmarks.iter().any(|b| b.id == id)
    }

    pub fn get(&self, id: i64) -> Option<&Bookmark> {
        self.bookmarks.iter().find(|b| b.id == id)
    }

    /// All bookmarks, oldest first
    pub fn all(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    pub fn len(&self) -> usize {
        self.bookmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }

    /// The file this store reads from and writes to
    pub fn path(&self) -> &Path {
        &self.path
    }
}
