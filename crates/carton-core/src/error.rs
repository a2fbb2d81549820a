use std::path::PathBuf;

/// Errors that can occur while generating catalog release metadata.
///
/// Every variant is fatal to the run: the pipeline halts at the stage where
/// the error occurred and performs no retries or cleanup of partial output.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Transport-level failure talking to the remote catalog listing.
    #[error("catalog listing request failed: {0}")]
    RemoteAccess(#[source] reqwest::Error),

    /// The remote catalog listing answered with a non-success status.
    #[error("catalog listing returned HTTP {status} for {url}")]
    RemoteStatus {
        status: reqwest::StatusCode,
        url: String,
    },

    /// I/O error reading, writing, or copying catalog files.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize the catalog descriptor.
    #[error("failed to serialize catalog metadata: {0}")]
    Serialization(#[from] serde_yaml::Error),

    /// A run precondition was not met (missing credential, empty tag).
    #[error("{0}")]
    Precondition(String),
}

impl Error {
    /// Attach a path to an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
