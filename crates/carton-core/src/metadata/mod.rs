//! Catalog descriptor construction.

pub mod writer;

use crate::config::{
    CatalogConfig, FALLBACK_CAPABILITY_FILE, FIRST_RELEASE, MAIN_BRANCH, PRIMARY_CAPABILITY_FILE,
};
use crate::error::{Error, Result};
use crate::types::{CapabilityFile, CatalogDescriptor, ExtensionRecord};

/// Build the catalog descriptor for one run.
///
/// Produces one record per extension name, in input order. Each record names
/// the extension's capability file: the primary filename if it exists under
/// the local catalog tree, otherwise the fallback filename. The fallback is
/// best effort and is never checked for existence; a missing fallback file
/// surfaces later as a staging copy failure.
pub fn build_descriptor(
    config: &CatalogConfig,
    names: &[String],
    tag: &str,
    release: bool,
) -> Result<CatalogDescriptor> {
    let mut extensions = Vec::with_capacity(names.len());

    for name in names {
        extensions.push(ExtensionRecord {
            name: name.clone(),
            version: tag.to_string(),
            min_supported: FIRST_RELEASE.to_string(),
            max_supported: tag.to_string(),
            files: vec![CapabilityFile::new(capability_filename(config, name)?)],
        });
    }

    let source_ref = if release { tag } else { MAIN_BRANCH };

    Ok(CatalogDescriptor {
        extensions,
        version: tag.to_string(),
        source_repo: Some(config.source_repo()),
        source_ref: source_ref.to_string(),
    })
}

/// Pick the capability filename for one extension.
fn capability_filename(config: &CatalogConfig, name: &str) -> Result<&'static str> {
    let primary = config.catalog_dir.join(name).join(PRIMARY_CAPABILITY_FILE);
    let exists = primary
        .try_exists()
        .map_err(|source| Error::io(&primary, source))?;

    if exists {
        Ok(PRIMARY_CAPABILITY_FILE)
    } else {
        tracing::warn!(
            extension = %name,
            missing = PRIMARY_CAPABILITY_FILE,
            fallback = FALLBACK_CAPABILITY_FILE,
            "primary capability file not found, recording fallback"
        );
        Ok(FALLBACK_CAPABILITY_FILE)
    }
}
