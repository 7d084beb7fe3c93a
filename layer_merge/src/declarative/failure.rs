//! Failures recorded while composing layers.

use std::fmt;
use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};

use crate::LayerMergeError;

use super::MergeProvenance;

/// Step of a composition that failed.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum FailureOrigin {
    /// A layer that could not be produced.
    Layer {
        /// Kind of source the layer came from.
        provenance: MergeProvenance,
        /// File backing the layer, when there is one.
        path: Option<Utf8PathBuf>,
    },
    /// Merging the loaded layers or extracting the result.
    Merge,
}

impl FailureOrigin {
    /// Origin for the file layer at `path`.
    #[must_use]
    pub fn file(path: impl Into<Utf8PathBuf>) -> Self {
        Self::Layer {
            provenance: MergeProvenance::File,
            path: Some(path.into()),
        }
    }

    /// Origin for a layer with no backing file, such as the environment.
    #[must_use]
    pub const fn layer(provenance: MergeProvenance) -> Self {
        Self::Layer {
            provenance,
            path: None,
        }
    }

    /// File backing the failed layer, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Utf8Path> {
        match self {
            Self::Layer { path, .. } => path.as_deref(),
            Self::Merge => None,
        }
    }
}

impl fmt::Display for FailureOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Layer {
                provenance,
                path: Some(path),
            } => write!(f, "{provenance} layer '{path}'"),
            Self::Layer {
                provenance,
                path: None,
            } => write!(f, "{provenance} layer"),
            Self::Merge => f.write_str("merge"),
        }
    }
}

/// A failed composition step and the error it produced.
#[derive(Clone, Debug)]
pub struct LayerFailure {
    origin: FailureOrigin,
    error: Arc<LayerMergeError>,
}

impl LayerFailure {
    /// Pair `error` with the step it came from.
    #[must_use]
    pub const fn new(origin: FailureOrigin, error: Arc<LayerMergeError>) -> Self {
        Self { origin, error }
    }

    /// Step that failed.
    #[must_use]
    pub const fn origin(&self) -> &FailureOrigin {
        &self.origin
    }

    /// Error reported by the step.
    #[must_use]
    pub fn error(&self) -> &LayerMergeError {
        &self.error
    }

    /// Discard the origin and keep the shared error.
    #[must_use]
    pub fn into_error(self) -> Arc<LayerMergeError> {
        self.error
    }
}

impl fmt::Display for LayerFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.origin, self.error)
    }
}

/// Every failure from one composition, in the order they occurred.
///
/// Carried by [`LayerMergeError::Layers`] when more than one step fails.
///
/// ```rust
/// use layer_merge::declarative::LayerComposition;
/// use layer_merge::{LayerMergeError, MergeOptions, merge_layers};
///
/// let composition = LayerComposition::load_files(["absent-a.toml", "absent-b.json"]);
/// let err = composition
///     .into_merge_result(|layers| Ok(merge_layers(layers, &MergeOptions::default())))
///     .unwrap_err();
/// let LayerMergeError::Layers(failures) = &*err else {
///     panic!("expected layer failures");
/// };
/// let paths: Vec<&str> = failures
///     .iter()
///     .filter_map(|failure| failure.origin().path())
///     .map(|path| path.as_str())
///     .collect();
/// assert_eq!(paths, ["absent-a.toml", "absent-b.json"]);
/// ```
#[derive(Debug)]
pub struct LayerFailures(Vec<LayerFailure>);

impl LayerFailures {
    pub(crate) const fn new(failures: Vec<LayerFailure>) -> Self {
        Self(failures)
    }

    /// Iterate over the failures in order.
    pub fn iter(&self) -> std::slice::Iter<'_, LayerFailure> {
        self.0.iter()
    }

    /// Number of failed steps.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no step failed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for LayerFailures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = self.0.iter();
        if let Some(first) = lines.next() {
            write!(f, "{first}")?;
        }
        for failure in lines {
            write!(f, "\n{failure}")?;
        }
        Ok(())
    }
}

impl std::error::Error for LayerFailures {}

impl<'a> IntoIterator for &'a LayerFailures {
    type Item = &'a LayerFailure;
    type IntoIter = std::slice::Iter<'a, LayerFailure>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for LayerFailures {
    type Item = LayerFailure;
    type IntoIter = std::vec::IntoIter<LayerFailure>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
