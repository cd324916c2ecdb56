//! Errors raised while loading catalog content from disk.

use camino::Utf8PathBuf;
use outing_core::SlugError;
use thiserror::Error;

/// Errors raised when reading or validating catalog files.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Opening a catalog file failed.
    #[error("failed to open catalog file at {path}: {source}")]
    Open {
        /// Location of the file on disk.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Inspecting a catalog file's metadata failed.
    #[error("failed to inspect catalog file at {path}: {source}")]
    Inspect {
        /// Location of the file on disk.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// A catalog file did not contain valid JSON of the expected shape.
    #[error("failed to parse catalog file at {path}: {source}")]
    Parse {
        /// Location of the file on disk.
        path: Utf8PathBuf,
        /// Decoder error returned by `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// A record carried a slug that failed validation.
    #[error("catalog record has invalid slug {slug:?}: {source}")]
    InvalidSlug {
        /// The rejected slug value.
        slug: String,
        /// Validation failure detail.
        #[source]
        source: SlugError,
    },
}
