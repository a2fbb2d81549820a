//! Catalog run configuration.
//!
//! The repository coordinates and directory layout were fixed literals in
//! earlier tooling; they live in an explicit config struct so the pipeline
//! can run against any checkout (and against tempdirs in tests).

use std::path::PathBuf;

/// Version tag of the catalog's first release, used as the floor of every
/// extension's supported range.
pub const FIRST_RELEASE: &str = "v0.1.0";

/// Source ref recorded for non-release runs.
pub const MAIN_BRANCH: &str = "main";

/// Output partition used for non-release runs.
pub const LATEST: &str = "latest";

/// Filename of the serialized catalog descriptor.
pub const METADATA_FILENAME: &str = "metadata.yaml";

/// Primary capability declaration filename looked for in each extension.
pub const PRIMARY_CAPABILITY_FILE: &str = "extension.yaml";

/// Fallback capability declaration filename used when the primary is absent.
pub const FALLBACK_CAPABILITY_FILE: &str = "addon.yaml";

/// Where the catalog lives and where run output lands.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Remote repository owner.
    pub owner: String,
    /// Remote repository name.
    pub repo: String,
    /// Path within the remote repository listed for extension directories.
    pub catalog_path: String,
    /// Local checkout of the same catalog tree, used for capability file
    /// lookups and as the staging copy source.
    pub catalog_dir: PathBuf,
    /// Root of the metadata output tree, partitioned by tag or "latest".
    pub metadata_root: PathBuf,
    /// Root of the offline mirror tree, partitioned by tag or "latest".
    pub offline_root: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            owner: "carton-project".to_string(),
            repo: "catalog".to_string(),
            catalog_path: "extensions".to_string(),
            catalog_dir: PathBuf::from("extensions"),
            metadata_root: PathBuf::from("metadata"),
            offline_root: PathBuf::from("offline"),
        }
    }
}

impl CatalogConfig {
    /// The `owner/repo` coordinate recorded in the descriptor.
    pub fn source_repo(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }

    /// Output partition for a run: the tag for releases, "latest" otherwise.
    pub fn partition<'a>(tag: &'a str, release: bool) -> &'a str {
        if release { tag } else { LATEST }
    }
}
