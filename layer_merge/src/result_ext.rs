//! Extensions for mapping errors to `LayerMergeResult` concisely.
//!
//! These helpers replace repeated `.map_err(|e| Arc::new(e.into()))` calls
//! when converting external error types into the crate's
//! `LayerMergeResult<T>` alias (`Result<T, Arc<LayerMergeError>>`).
//!
//! # Examples
//!
//! ```
//! use layer_merge::{LayerMergeResult, LayerMergeResultExt};
//!
//! fn parse() -> LayerMergeResult<serde_json::Value> {
//!     // serde_json::Error implements Into<LayerMergeError>
//!     serde_json::from_str("[1, 2]").into_layer_merge()
//! }
//! # assert!(parse().is_ok());
//! ```

use std::sync::Arc;

use crate::{LayerMergeError, LayerMergeResult};

/// Map any `Result<T, E>` with `E: Into<LayerMergeError>` into a
/// `LayerMergeResult<T>`.
pub trait LayerMergeResultExt<T, E> {
    /// Convert `Result<T, E>` into `LayerMergeResult<T>`.
    ///
    /// # Errors
    ///
    /// Propagates the original error after conversion into
    /// `Arc<LayerMergeError>`.
    fn into_layer_merge(self) -> LayerMergeResult<T>;
}

impl<T, E> LayerMergeResultExt<T, E> for Result<T, E>
where
    E: Into<LayerMergeError>,
{
    fn into_layer_merge(self) -> LayerMergeResult<T> {
        self.map_err(|e| Arc::new(e.into()))
    }
}

/// Convert shared errors into `figment::Error` for code running inside
/// `figment::Jail` or other figment-facing integrations.
pub trait IntoFigmentError {
    /// Convert into a `figment::Error`, keeping the message text.
    fn into_figment(self) -> figment::Error;
}

impl IntoFigmentError for Arc<LayerMergeError> {
    fn into_figment(self) -> figment::Error {
        match Arc::try_unwrap(self) {
            // Options errors already are figment errors; keep their kind.
            Ok(LayerMergeError::Options(inner)) => *inner,
            Ok(other) => figment::Error::from(other.to_string()),
            Err(shared) => figment::Error::from(shared.to_string()),
        }
    }
}
