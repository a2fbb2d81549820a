//! The release metadata pipeline.
//!
//! A single linear batch job: list the remote catalog, build the descriptor,
//! write the metadata document, stage the offline mirror. Any stage failure
//! halts the run; stages never retry and partial output is left in place.

use std::fs;

use crate::config::CatalogConfig;
use crate::error::{Error, Result};
use crate::listing::{self, CatalogLister};
use crate::metadata::{build_descriptor, writer::write_descriptor};
use crate::stage::stage_offline;
use crate::types::CatalogDescriptor;

/// Run the full pipeline for one tag.
///
/// Returns the descriptor that was written and staged.
pub async fn run<L: CatalogLister>(
    config: &CatalogConfig,
    lister: &L,
    tag: &str,
    release: bool,
) -> Result<CatalogDescriptor> {
    if tag.is_empty() {
        return Err(Error::Precondition("version tag must not be empty".into()));
    }

    tracing::info!(tag, release, "listing catalog");
    let entries = lister.list(&config.catalog_path).await?;
    let names = listing::directory_names(&entries);

    tracing::info!(extensions = names.len(), "building catalog descriptor");
    let descriptor = build_descriptor(config, &names, tag, release)?;

    let out_dir = config
        .metadata_root
        .join(CatalogConfig::partition(tag, release));
    fs::create_dir_all(&out_dir).map_err(|source| Error::io(&out_dir, source))?;
    write_descriptor(&descriptor, &out_dir)?;

    stage_offline(config, &descriptor, release)?;

    Ok(descriptor)
}
