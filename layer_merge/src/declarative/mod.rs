//! Provenance-tagged layers and their composition.
//!
//! A configuration is usually assembled from defaults, one or more files,
//! the environment, and command-line flags, in that order. [`MergeComposer`]
//! collects those sources as [`MergeLayer`]s, [`merge_layers`] folds them
//! through the strategy-aware engine, and [`from_value`] turns the result
//! into a typed configuration.
//!
//! # Example
//!
//! ```rust
//! use layer_merge::declarative::{MergeComposer, from_value, merge_layers};
//! use layer_merge::{MergeOptions, MergeStrategy, MergeValue};
//! use serde::Deserialize;
//! use serde_json::json;
//!
//! #[derive(Debug, Deserialize)]
//! struct AppConfig {
//!     port: u16,
//!     plugins: Vec<String>,
//! }
//!
//! let mut composer = MergeComposer::new();
//! composer.push_defaults(MergeValue::from(json!({"port": 3000, "plugins": ["core"]})));
//! composer.push_cli(MergeValue::from(json!({"port": 4000, "plugins": ["extra"]})));
//!
//! let options = MergeOptions::default().with_strategy("plugins", MergeStrategy::Combine);
//! let merged = merge_layers(composer.layers(), &options);
//! let config: AppConfig = from_value(merged)?;
//! assert_eq!(config.port, 4000);
//! assert_eq!(config.plugins, ["core", "extra"]);
//! # Ok::<_, std::sync::Arc<layer_merge::LayerMergeError>>(())
//! ```

mod composer;
mod convert;
mod failure;
mod layer;
mod merge;

pub use composer::{LayerComposition, MergeComposer};
pub use convert::from_value;
pub use failure::{FailureOrigin, LayerFailure, LayerFailures};
pub use layer::{MergeLayer, MergeProvenance};
pub use merge::merge_layers;
