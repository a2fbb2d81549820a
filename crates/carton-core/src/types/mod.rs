//! Catalog descriptor types serialized into the release metadata document.
//!
//! Field names are fixed by the wire format existing consumers parse; the
//! serde renames are load-bearing, not cosmetic.

use serde::{Deserialize, Serialize};

/// A single capability declaration file shipped with an extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityFile {
    #[serde(rename = "filename")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CapabilityFile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }
}

/// One catalog entry: an extension and the files it ships.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionRecord {
    /// Directory name of the extension, unique within a run.
    pub name: String,
    /// Tag under which this record was generated.
    pub version: String,
    /// Oldest platform version this extension supports.
    #[serde(rename = "minsupported")]
    pub min_supported: String,
    /// Newest platform version this extension supports (the run's tag).
    #[serde(rename = "maxsupported")]
    pub max_supported: String,
    /// Capability files, in practice always a single entry.
    pub files: Vec<CapabilityFile>,
}

/// Top-level descriptor document enumerating every extension in the catalog.
///
/// Extension order follows the remote directory listing and is not sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDescriptor {
    pub extensions: Vec<ExtensionRecord>,
    /// The run's version tag.
    pub version: String,
    /// `owner/repo` coordinate of the source repository. Optional on read:
    /// documents produced by older tooling omit it.
    #[serde(rename = "repo", default, skip_serializing_if = "Option::is_none")]
    pub source_repo: Option<String>,
    /// Branch or tag the listing was taken from ("main" for non-release runs).
    #[serde(rename = "branch")]
    pub source_ref: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capability_file_serializes_with_wire_names() {
        let file = CapabilityFile::new("extension.yaml");
        let yaml = serde_yaml::to_string(&file).unwrap();
        assert!(yaml.contains("filename: extension.yaml"));
        assert!(!yaml.contains("description"));
    }

    #[test]
    fn extension_record_uses_supported_range_names() {
        let record = ExtensionRecord {
            name: "velero".to_string(),
            version: "v2.0.0".to_string(),
            min_supported: "v0.1.0".to_string(),
            max_supported: "v2.0.0".to_string(),
            files: vec![CapabilityFile::new("extension.yaml")],
        };
        let yaml = serde_yaml::to_string(&record).unwrap();
        assert!(yaml.contains("minsupported: v0.1.0"));
        assert!(yaml.contains("maxsupported: v2.0.0"));
    }

    #[test]
    fn descriptor_omits_repo_when_unset() {
        let descriptor = CatalogDescriptor {
            extensions: Vec::new(),
            version: "v1.0.0".to_string(),
            source_repo: None,
            source_ref: "main".to_string(),
        };
        let yaml = serde_yaml::to_string(&descriptor).unwrap();
        assert!(!yaml.contains("repo:"));
        assert!(yaml.contains("branch: main"));
    }
}
