//! Typed extraction of merged values.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{LayerMergeResult, LayerMergeResultExt, MergeValue};

/// Deserialise a merged value into `T`.
///
/// Sets are presented to `T` as sequences.
///
/// # Errors
///
/// Returns [`crate::LayerMergeError::Deserialize`] when the value does not
/// match `T`.
///
/// # Examples
///
/// ```rust
/// use layer_merge::{LayerMergeError, MergeValue, from_value};
/// use serde::Deserialize;
/// use serde_json::json;
///
/// #[derive(Debug, Deserialize, PartialEq)]
/// struct App { port: u16 }
///
/// let app: App = from_value(MergeValue::from(json!({"port": 8080}))).expect("value deserialises");
/// assert_eq!(app.port, 8080);
///
/// let err = from_value::<App>(MergeValue::from(json!({"port": "high"}))).unwrap_err();
/// assert!(matches!(&*err, LayerMergeError::Deserialize(_)));
/// ```
pub fn from_value<T: DeserializeOwned>(value: MergeValue) -> LayerMergeResult<T> {
    serde_json::from_value(Value::from(value)).into_layer_merge()
}
