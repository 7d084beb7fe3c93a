//! Primary error enum for layer loading flows.

use figment::Error as FigmentError;
use thiserror::Error;

use crate::declarative::LayerFailures;

/// Errors that can occur around a merge.
///
/// The merge itself is infallible; failures come from reading layers,
/// extracting options, parsing strategy assignments, and deserialising the
/// merged value.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LayerMergeError {
    /// Error reading or parsing a layer or options file.
    #[error("layer file error in '{path}': {source}")]
    File {
        /// Path that triggered the failure.
        path: std::path::PathBuf,
        /// Underlying error reported by the reader or parser.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Merge options could not be extracted from their providers.
    #[error("invalid merge options: {0}")]
    Options(Box<FigmentError>),

    /// The merged value does not match the requested type.
    #[error("failed to deserialise merged value: {0}")]
    Deserialize(#[from] serde_json::Error),

    /// A `PATH=STRATEGY` assignment was malformed.
    #[error("invalid strategy assignment '{spec}': {message}")]
    InvalidStrategy {
        /// The assignment as written.
        spec: String,
        /// Why it was rejected.
        message: String,
    },

    /// Several steps of one layer composition failed.
    #[error("{count} composition steps failed:\n{0}", count = .0.len())]
    Layers(Box<LayerFailures>),
}
