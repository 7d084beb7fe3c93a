//! Constructors for `LayerMergeError`.

use std::path::Path;
use std::sync::Arc;

use figment::Error as FigmentError;

use super::LayerMergeError;

impl LayerMergeError {
    /// Construct an options error from a [`figment::Error`].
    ///
    /// # Examples
    ///
    /// ```
    /// use layer_merge::LayerMergeError;
    /// let e = LayerMergeError::options(figment::Error::from("boom"));
    /// assert!(matches!(e, LayerMergeError::Options(_)));
    /// ```
    #[must_use]
    pub fn options(source: FigmentError) -> Self {
        Self::Options(Box::new(source))
    }

    /// Construct a shared [`LayerMergeError::File`] for `path`.
    pub(crate) fn file(
        path: &Path,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Arc<Self> {
        Arc::new(Self::File {
            path: path.to_path_buf(),
            source: source.into(),
        })
    }
}
