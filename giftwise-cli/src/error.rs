//! Error types emitted by the Giftwise CLI.
//!
//! Keep this error type reasonably small, as CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use giftwise_data::DataError;
use giftwise_scorer::RecommendError;
use thiserror::Error;

/// Errors emitted by the Giftwise CLI.
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
        /// Name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Option that named the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option that named the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option that named the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Reading a catalogue or recipient export failed.
    #[error(transparent)]
    LoadExport(#[from] DataError),
    /// The requested recipient is absent from the recipient export.
    #[error("recipient {id} not found in {path:?}")]
    UnknownRecipient {
        /// Requested identifier.
        id: u64,
        /// Recipient export that was searched.
        path: Utf8PathBuf,
    },
    /// The recommendation request was rejected.
    #[error(transparent)]
    Recommend(#[from] RecommendError),
    /// Serialising the recommendation response failed.
    #[error("failed to serialise recommendations: {0}")]
    SerialiseResponse(#[source] serde_json::Error),
    /// Writing the recommendations failed.
    #[error("failed to write recommendations: {0}")]
    WriteOutput(#[source] std::io::Error),
}
