//! Carton Core Library
//!
//! Provides the domain logic for generating versioned release metadata for
//! an extension catalog and staging capability files into an offline mirror.

pub mod config;
pub mod error;
pub mod listing;
pub mod metadata;
pub mod pipeline;
pub mod stage;
pub mod types;

/// Re-exports of commonly used types
pub mod prelude {
    // Configuration
    pub use crate::config::CatalogConfig;

    // Errors
    pub use crate::error::{Error, Result};

    // Listing
    pub use crate::listing::{CatalogLister, ContentEntry, github::GitHubLister};

    // Metadata
    pub use crate::metadata::{build_descriptor, writer::write_descriptor};

    // Staging
    pub use crate::stage::stage_offline;

    // Types
    pub use crate::types::{CapabilityFile, CatalogDescriptor, ExtensionRecord};
}
