//! Offline mirror staging.

use std::fs;

use crate::config::CatalogConfig;
use crate::error::{Error, Result};
use crate::types::CatalogDescriptor;

/// Copy every extension's capability files into the offline mirror tree.
///
/// Destination layout is `<offline_root>/<partition>/<extension>/<filename>`,
/// where the partition is the descriptor's tag for release runs and "latest"
/// otherwise. Existing files are overwritten. The first copy failure aborts
/// the remaining loop; extensions staged by earlier iterations stay on disk.
pub fn stage_offline(
    config: &CatalogConfig,
    descriptor: &CatalogDescriptor,
    release: bool,
) -> Result<()> {
    let partition = CatalogConfig::partition(&descriptor.version, release);

    for extension in &descriptor.extensions {
        tracing::info!(extension = %extension.name, partition, "staging capability files");

        let dest_dir = config.offline_root.join(partition).join(&extension.name);
        fs::create_dir_all(&dest_dir).map_err(|source| Error::io(&dest_dir, source))?;

        for file in &extension.files {
            let src = config
                .catalog_dir
                .join(&extension.name)
                .join(&file.name);
            let dst = dest_dir.join(&file.name);

            fs::copy(&src, &dst).map_err(|source| Error::io(&src, source))?;
        }
    }

    Ok(())
}
