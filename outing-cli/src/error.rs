//! Error types emitted by the outing CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use outing_catalog::CatalogError;
use thiserror::Error;

/// Errors emitted by the outing CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Name of the missing CLI flag.
        field: &'static str,
        /// Environment variable that can supply the value.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk or is not a file.
    #[error("{field} path {path:?} does not exist or is not a file")]
    MissingSourceFile {
        /// Name of the CLI flag the path came from.
        field: &'static str,
        /// The missing path.
        path: Utf8PathBuf,
    },
    /// Opening the answers file failed.
    #[error("failed to open answers file at {path:?}: {source}")]
    OpenAnswers {
        /// Location of the answers file.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Answers JSON could not be decoded.
    #[error("failed to parse answers JSON at {path:?}: {source}")]
    ParseAnswers {
        /// Location of the answers file.
        path: Utf8PathBuf,
        /// Decoder error returned by `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// Loading catalog content failed.
    #[error("failed to load catalog: {0}")]
    Catalog(#[from] CatalogError),
    /// The catalog failed consistency checks.
    #[error("catalog check found {problems} problem(s)")]
    CheckFailed {
        /// Number of problems reported.
        problems: usize,
    },
    /// Serializing the response failed.
    #[error("failed to serialize response: {0}")]
    SerializeResponse(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
