//! Error types produced while loading layers and options.

mod constructors;
mod types;

pub use types::LayerMergeError;
