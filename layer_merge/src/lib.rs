//! Core crate for layered deep merging.
//!
//! `layer_merge` folds an ordered sequence of structured values into one
//! result. Objects always merge key by key; array collisions follow a
//! strategy chosen per dotted path through [`MergeOptions`], so a layered
//! configuration can replace some lists wholesale while combining and
//! deduplicating others.
//!
//! ```rust
//! use layer_merge::{MergeOptions, MergeStrategy, merge_json};
//! use serde_json::json;
//!
//! let options = MergeOptions::default().with_strategy("server.tags", MergeStrategy::Combine);
//! let merged = merge_json(
//!     vec![
//!         json!({"server": {"port": 80, "tags": ["web"]}}),
//!         json!({"server": {"port": 8080, "tags": ["web", "edge"]}}),
//!     ],
//!     &options,
//! );
//! assert_eq!(merged, json!({"server": {"port": 8080, "tags": ["web", "edge"]}}));
//! ```

mod coercion;
pub mod declarative;
mod engine;
mod equality;
mod error;
mod file;
mod options;
mod path;
pub mod primitive;
mod result_ext;
pub mod strategy;
mod value;

pub use coercion::coerce_text;
pub use declarative::{
    FailureOrigin, LayerComposition, LayerFailure, LayerFailures, MergeComposer, MergeLayer,
    MergeProvenance, from_value, merge_layers,
};
pub use engine::{merge, merge_into, merge_json};
pub use equality::structurally_equal;
pub use error::LayerMergeError;
pub use file::load_value;
pub use options::{MergeOptions, parse_strategy_assignment};
pub use path::{PathFrame, PathTracker};
pub use primitive::{Customizer, Key, Resolution, Visit, merge_with};
pub use result_ext::{IntoFigmentError, LayerMergeResultExt};
pub use strategy::{MergeStrategy, StrategyResolver, UnknownStrategy};
pub use value::MergeValue;

/// Result type alias used throughout the crate.
///
/// Errors are shared so a single failure can be reported both on its own
/// and inside [`LayerFailures`].
pub type LayerMergeResult<T> = Result<T, std::sync::Arc<LayerMergeError>>;
