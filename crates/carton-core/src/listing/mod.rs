//! Remote catalog directory listing.
//!
//! The pipeline consumes the listing through the [`CatalogLister`] trait so
//! everything downstream of the network call can run against canned entries
//! in tests. The production implementation lives in [`github`].

pub mod github;

use serde::Deserialize;

use crate::error::Result;

/// One entry returned by the remote contents listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentEntry {
    pub name: String,
    /// Entry type as reported by the remote service ("dir" or "file").
    #[serde(rename = "type")]
    pub kind: String,
}

/// A source that can enumerate the entries under a catalog path.
pub trait CatalogLister {
    /// List the entries under `path`, in the order the remote reports them.
    fn list(&self, path: &str) -> impl Future<Output = Result<Vec<ContentEntry>>> + Send;
}

/// Names of the directory-type entries, in listing order.
///
/// Plain files at the catalog path are skipped silently; each extension is
/// a sub-directory.
pub fn directory_names(entries: &[ContentEntry]) -> Vec<String> {
    entries
        .iter()
        .filter(|entry| {
            if entry.kind == "dir" {
                true
            } else {
                tracing::debug!(name = %entry.name, kind = %entry.kind, "skipping non-directory entry");
                false
            }
        })
        .map(|entry| entry.name.clone())
        .collect()
}
