//! Error types for `layer-merge`.

use std::sync::Arc;

use layer_merge::LayerMergeError;
use thiserror::Error;

/// Errors surfaced by the `layer-merge` pipeline.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Layers(#[from] Arc<LayerMergeError>),

    #[error("failed to encode merged value: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
