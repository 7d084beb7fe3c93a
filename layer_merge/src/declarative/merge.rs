//! Folding layers through the merge engine.

use std::slice;

use camino::Utf8Path;
use tracing::debug;

use crate::{MergeOptions, MergeValue, merge_into};

use super::MergeLayer;

/// Merge `layers` in order into a single value.
///
/// The first layer seeds the result and each later layer is merged on top
/// with `options`. No layers yields an empty object.
///
/// # Examples
///
/// ```rust
/// use layer_merge::declarative::{MergeLayer, merge_layers};
/// use layer_merge::{MergeOptions, MergeValue};
/// use serde_json::json;
/// use std::borrow::Cow;
///
/// let base = MergeValue::from(json!({"a": {"b": 1}}));
/// let env = MergeValue::from(json!({"a": {"c": "2"}}));
/// let merged = merge_layers(
///     [MergeLayer::defaults(Cow::Borrowed(&base)), MergeLayer::environment(Cow::Borrowed(&env))],
///     &MergeOptions::default().with_convert(true),
/// );
/// assert_eq!(serde_json::Value::from(merged), json!({"a": {"b": 1, "c": 2}}));
/// ```
#[must_use]
pub fn merge_layers<'a, I>(layers: I, options: &MergeOptions) -> MergeValue
where
    I: IntoIterator<Item = MergeLayer<'a>>,
{
    let mut merged: Option<MergeValue> = None;
    for layer in layers {
        debug!(
            provenance = %layer.provenance(),
            path = layer.path().map(Utf8Path::as_str),
            "merging layer"
        );
        match merged.as_mut() {
            Some(target) => merge_into(target, slice::from_ref(layer.value()), options),
            None => merged = Some(layer.into_value()),
        }
    }
    merged.unwrap_or_default()
}
