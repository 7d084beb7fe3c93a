//! Merge options and their configuration sources.
//!
//! [`MergeOptions`] can be built in code, deserialised from any serde
//! format, or extracted from a [`Figment`] so the options themselves can be
//! layered from files and environment variables.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use figment::Figment;
use figment::providers::Env;
use serde::{Deserialize, Serialize};

use crate::{LayerMergeError, LayerMergeResult, MergeStrategy, file};

/// Options controlling a merge.
///
/// # Examples
///
/// ```rust
/// use layer_merge::{MergeOptions, MergeStrategy};
///
/// let options = MergeOptions::default()
///     .with_strategy("server.tags", MergeStrategy::Combine)
///     .with_convert(true);
/// assert_eq!(options.merge_strategies.get("server.tags").map(String::as_str), Some("combine"));
/// assert!(options.convert);
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeOptions {
    /// Strategy names keyed by dotted path.
    ///
    /// Names are kept verbatim; unrecognised ones fall back to the
    /// collision's default strategy when the merge runs.
    #[serde(alias = "mergeStrategies")]
    pub merge_strategies: BTreeMap<String, String>,
    /// Coerce incoming text such as `"true"` or `"42"` into typed leaves.
    pub convert: bool,
}

impl MergeOptions {
    /// Set the strategy for `path`.
    #[must_use]
    pub fn with_strategy(self, path: impl Into<String>, strategy: MergeStrategy) -> Self {
        self.with_strategy_name(path, strategy.as_str())
    }

    /// Set the strategy for `path` by name, without validating the name.
    #[must_use]
    pub fn with_strategy_name(mut self, path: impl Into<String>, name: impl Into<String>) -> Self {
        self.merge_strategies.insert(path.into(), name.into());
        self
    }

    /// Enable or disable text coercion.
    #[must_use]
    pub const fn with_convert(mut self, convert: bool) -> Self {
        self.convert = convert;
        self
    }

    /// Extract options from `figment`.
    ///
    /// # Errors
    ///
    /// Returns [`LayerMergeError::Options`] when the figment's data cannot be
    /// deserialised into options.
    pub fn from_figment(figment: &Figment) -> LayerMergeResult<Self> {
        figment
            .extract()
            .map_err(|e| Arc::new(LayerMergeError::options(e)))
    }

    /// Load options from a TOML or JSON file, chosen by extension.
    ///
    /// ```rust,no_run
    /// use layer_merge::MergeOptions;
    /// use std::path::Path;
    ///
    /// # fn run() -> layer_merge::LayerMergeResult<()> {
    /// let options = MergeOptions::load(Path::new("merge.toml"))?;
    /// # let _ = options;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`LayerMergeError::File`] when the file cannot be read or
    /// parsed and [`LayerMergeError::Options`] when its contents are not
    /// valid options.
    pub fn load(path: &Path) -> LayerMergeResult<Self> {
        Self::from_figment(&file::load_figment(path)?)
    }

    /// Read options from environment variables starting with `prefix`.
    ///
    /// `<PREFIX>CONVERT` sets [`MergeOptions::convert`] and
    /// `<PREFIX>MERGE_STRATEGIES` accepts an inline table such as
    /// `{tags=combine}`.
    ///
    /// # Errors
    ///
    /// Returns [`LayerMergeError::Options`] when a variable holds a value of
    /// the wrong shape.
    pub fn from_env(prefix: &str) -> LayerMergeResult<Self> {
        Self::from_figment(&Figment::from(Env::prefixed(prefix)))
    }
}

/// Parse a `PATH=STRATEGY` assignment such as `server.tags=combine`.
///
/// Unlike option tables, assignments are validated eagerly so typos in
/// command-line flags surface immediately.
///
/// # Examples
///
/// ```rust
/// use layer_merge::{MergeStrategy, parse_strategy_assignment};
///
/// let (path, strategy) = parse_strategy_assignment("server.tags=combine")?;
/// assert_eq!(path, "server.tags");
/// assert_eq!(strategy, MergeStrategy::Combine);
/// assert!(parse_strategy_assignment("server.tags").is_err());
/// # Ok::<_, std::sync::Arc<layer_merge::LayerMergeError>>(())
/// ```
///
/// # Errors
///
/// Returns [`LayerMergeError::InvalidStrategy`] when the `=` separator or
/// the path is missing, or the strategy name is unknown.
pub fn parse_strategy_assignment(spec: &str) -> LayerMergeResult<(String, MergeStrategy)> {
    let invalid = |message: String| {
        Arc::new(LayerMergeError::InvalidStrategy {
            spec: spec.to_owned(),
            message,
        })
    };
    let (path, name) = spec
        .split_once('=')
        .ok_or_else(|| invalid(String::from("expected PATH=STRATEGY")))?;
    let trimmed_path = path.trim();
    if trimmed_path.is_empty() {
        return Err(invalid(String::from("path must not be empty")));
    }
    let strategy = name
        .trim()
        .parse::<MergeStrategy>()
        .map_err(|e| invalid(e.to_string()))?;
    Ok((trimmed_path.to_owned(), strategy))
}
