//! Layer composition helpers.

use std::borrow::Cow;
use std::path::Path;
use std::sync::Arc;

use camino::Utf8PathBuf;
use tracing::warn;

use crate::{LayerMergeError, LayerMergeResult, MergeValue, load_value};

use super::{FailureOrigin, LayerFailure, LayerFailures, MergeLayer};

/// Builder that accumulates [`MergeLayer`] instances in precedence order.
///
/// ```rust
/// use layer_merge::declarative::{MergeComposer, MergeProvenance};
/// use layer_merge::MergeValue;
/// use serde_json::json;
///
/// let mut composer = MergeComposer::new();
/// composer.push_defaults(MergeValue::from(json!({"port": 80})));
/// composer.push_environment(MergeValue::from(json!({"port": 8080})));
///
/// let provenances: Vec<_> = composer.into_iter().map(|layer| layer.provenance()).collect();
/// assert_eq!(provenances, [MergeProvenance::Defaults, MergeProvenance::Environment]);
/// ```
#[derive(Debug, Default)]
pub struct MergeComposer {
    layers: Vec<MergeLayer<'static>>,
}

impl MergeComposer {
    /// Create an empty composer.
    #[must_use]
    pub const fn new() -> Self {
        Self { layers: Vec::new() }
    }

    /// Create a composer with preallocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            layers: Vec::with_capacity(capacity),
        }
    }

    /// Push a defaults layer.
    pub fn push_defaults(&mut self, value: MergeValue) {
        self.push_layer(MergeLayer::defaults(Cow::Owned(value)));
    }

    /// Push a file layer.
    pub fn push_file(&mut self, value: MergeValue, path: Option<Utf8PathBuf>) {
        self.push_layer(MergeLayer::file(Cow::Owned(value), path));
    }

    /// Push an environment layer.
    pub fn push_environment(&mut self, value: MergeValue) {
        self.push_layer(MergeLayer::environment(Cow::Owned(value)));
    }

    /// Push a CLI layer.
    pub fn push_cli(&mut self, value: MergeValue) {
        self.push_layer(MergeLayer::cli(Cow::Owned(value)));
    }

    /// Push an arbitrary layer.
    pub fn push_layer(&mut self, layer: MergeLayer<'static>) {
        self.layers.push(layer);
    }

    /// Read `path` and push it as a file layer.
    ///
    /// # Errors
    ///
    /// Returns [`LayerMergeError::File`] when the file cannot be read or
    /// parsed; the composer is left unchanged.
    pub fn load_file(&mut self, path: &Path) -> LayerMergeResult<()> {
        let value = load_value(path)?;
        self.push_file(value, Some(utf8_path(path)));
        Ok(())
    }

    /// Number of layers collected so far.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.layers.len()
    }

    /// Whether no layers have been collected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Consume the composer and return the accumulated layers.
    #[must_use]
    pub fn layers(self) -> Vec<MergeLayer<'static>> {
        self.layers
    }
}

impl IntoIterator for MergeComposer {
    type Item = MergeLayer<'static>;
    type IntoIter = std::vec::IntoIter<MergeLayer<'static>>;

    fn into_iter(self) -> Self::IntoIter {
        self.layers.into_iter()
    }
}

/// Layers gathered from several sources alongside any failures hit on the
/// way.
///
/// Loading carries on past a failing source so every problem can be
/// reported at once, each tagged with the layer it came from.
#[derive(Debug)]
pub struct LayerComposition {
    layers: Vec<MergeLayer<'static>>,
    failures: Vec<LayerFailure>,
}

impl LayerComposition {
    /// Create a new composition from `layers` and `failures`.
    #[must_use]
    pub const fn new(layers: Vec<MergeLayer<'static>>, failures: Vec<LayerFailure>) -> Self {
        Self { layers, failures }
    }

    /// Load every path in order as a file layer, recording failures.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use layer_merge::declarative::LayerComposition;
    /// use layer_merge::{MergeOptions, merge_layers};
    /// use std::path::Path;
    ///
    /// # fn run() -> layer_merge::LayerMergeResult<()> {
    /// let composition = LayerComposition::load_files([Path::new("base.toml"), Path::new("local.json")]);
    /// let merged = composition.into_merge_result(|layers| {
    ///     Ok(merge_layers(layers, &MergeOptions::default()))
    /// })?;
    /// # let _ = merged;
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn load_files<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut composer = MergeComposer::new();
        let mut failures = Vec::new();
        for entry in paths {
            let path = entry.as_ref();
            if let Err(err) = composer.load_file(path) {
                warn!(path = %path.display(), error = %err, "skipping unreadable layer");
                failures.push(LayerFailure::new(FailureOrigin::file(utf8_path(path)), err));
            }
        }
        Self::new(composer.layers(), failures)
    }

    /// Record a failure from a source loaded outside this composition.
    pub fn record_failure(&mut self, origin: FailureOrigin, error: Arc<LayerMergeError>) {
        self.failures.push(LayerFailure::new(origin, error));
    }

    /// Decompose the composition into its constituent parts.
    #[must_use]
    pub fn into_parts(self) -> (Vec<MergeLayer<'static>>, Vec<LayerFailure>) {
        (self.layers, self.failures)
    }

    /// Indicates whether any failures were captured while composing layers.
    #[must_use]
    pub const fn has_errors(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Collapse `failures` into one error; a lone failure keeps its own error.
    fn failures_to_error(mut failures: Vec<LayerFailure>) -> Arc<LayerMergeError> {
        if failures.len() == 1
            && let Some(only) = failures.pop()
        {
            return only.into_error();
        }
        Arc::new(LayerMergeError::Layers(Box::new(LayerFailures::new(failures))))
    }

    /// Consume the composition and merge its layers using `merge`.
    ///
    /// Failures recorded while composing are reported together with any
    /// failure from `merge`; a single error is returned as is.
    ///
    /// # Errors
    ///
    /// Returns the recorded or merge error, or
    /// [`LayerMergeError::Layers`] when there are several.
    pub fn into_merge_result<T, F>(self, merge: F) -> LayerMergeResult<T>
    where
        F: FnOnce(Vec<MergeLayer<'static>>) -> LayerMergeResult<T>,
    {
        let (layers, mut failures) = self.into_parts();
        match merge(layers) {
            Ok(merged) if failures.is_empty() => Ok(merged),
            Ok(_) => Err(Self::failures_to_error(failures)),
            Err(err) => {
                failures.push(LayerFailure::new(FailureOrigin::Merge, err));
                Err(Self::failures_to_error(failures))
            }
        }
    }
}

/// UTF-8 form of `path`, replacing invalid sequences.
fn utf8_path(path: &Path) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(path.to_path_buf())
        .unwrap_or_else(|p| Utf8PathBuf::from(p.to_string_lossy().into_owned()))
}
