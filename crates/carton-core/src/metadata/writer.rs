//! Serialize the catalog descriptor to its on-disk document.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::METADATA_FILENAME;
use crate::error::{Error, Result};
use crate::types::CatalogDescriptor;

/// Write the descriptor as YAML to `<out_dir>/metadata.yaml`.
///
/// Any existing document at that path is truncated and overwritten. The
/// caller establishes `out_dir` (already partitioned by tag or "latest").
/// Returns the path of the written document.
pub fn write_descriptor(descriptor: &CatalogDescriptor, out_dir: &Path) -> Result<PathBuf> {
    let body = serde_yaml::to_string(descriptor)?;

    let path = out_dir.join(METADATA_FILENAME);
    fs::write(&path, body).map_err(|source| Error::io(&path, source))?;

    tracing::info!(path = %path.display(), extensions = descriptor.extensions.len(), "wrote catalog metadata");
    Ok(path)
}
