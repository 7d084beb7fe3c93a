//! Structured value model shared by every merge stage.
//!
//! [`MergeValue`] mirrors [`serde_json::Value`] and adds a [`MergeValue::Set`]
//! container. Sets only exist on the way into a merge: they serialise as JSON
//! arrays and JSON input never produces one.

use std::num::FpCategory;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::equality::structurally_equal;

/// A node in a structured value tree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum MergeValue {
    /// Absent or explicitly empty value.
    Null,
    /// Boolean leaf.
    Bool(bool),
    /// Numeric leaf.
    Number(Number),
    /// Text leaf.
    String(String),
    /// Ordered sequence merged positionally or by strategy.
    Array(Vec<Self>),
    /// Unordered collection of distinct members.
    Set(Vec<Self>),
    /// Key-value structure merged key by key, in first-insertion order.
    Object(IndexMap<String, Self>),
}

impl MergeValue {
    /// An empty object, the identity element for merging.
    #[must_use]
    pub fn empty_object() -> Self {
        Self::Object(IndexMap::new())
    }

    /// Build a set, keeping the first structurally-equal occurrence of each
    /// member.
    ///
    /// ```rust
    /// use layer_merge::MergeValue;
    /// use serde_json::json;
    ///
    /// let set = MergeValue::set([json!(1), json!(2), json!(1)].map(MergeValue::from));
    /// assert_eq!(set.as_members().map(<[MergeValue]>::len), Some(2));
    /// ```
    #[must_use]
    pub fn set<I>(members: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        let mut distinct: Vec<Self> = Vec::new();
        for member in members {
            if !distinct.iter().any(|kept| structurally_equal(kept, &member)) {
                distinct.push(member);
            }
        }
        Self::Set(distinct)
    }

    /// Returns `true` for objects, arrays, and sets.
    #[must_use]
    pub const fn is_composite(&self) -> bool {
        matches!(self, Self::Array(_) | Self::Set(_) | Self::Object(_))
    }

    /// Truthiness used when filtering combined arrays.
    ///
    /// `null`, `false`, zero, and the empty string are falsy; every composite
    /// value is truthy, including empty ones.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(flag) => *flag,
            Self::Number(number) => number
                .as_f64()
                .is_some_and(|n| !matches!(n.classify(), FpCategory::Zero | FpCategory::Nan)),
            Self::String(text) => !text.is_empty(),
            Self::Array(_) | Self::Set(_) | Self::Object(_) => true,
        }
    }

    /// Members of an array or set.
    #[must_use]
    pub const fn as_members(&self) -> Option<&[Self]> {
        match self {
            Self::Array(items) | Self::Set(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Borrow the entries of an object.
    #[must_use]
    pub const fn as_object(&self) -> Option<&IndexMap<String, Self>> {
        match self {
            Self::Object(entries) => Some(entries),
            _ => None,
        }
    }

    /// Borrow the text of a string leaf.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }

    /// Short name of the value's kind for diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Set(_) => "set",
            Self::Object(_) => "object",
        }
    }

    /// Empty container of the same kind as `self`.
    ///
    /// Leaves have no empty form and return [`MergeValue::Null`].
    pub(crate) fn empty_like(&self) -> Self {
        match self {
            Self::Array(_) => Self::Array(Vec::new()),
            Self::Set(_) => Self::Set(Vec::new()),
            Self::Object(_) => Self::Object(IndexMap::new()),
            Self::Null | Self::Bool(_) | Self::Number(_) | Self::String(_) => Self::Null,
        }
    }
}

impl Default for MergeValue {
    fn default() -> Self {
        Self::empty_object()
    }
}

impl From<Value> for MergeValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(flag) => Self::Bool(flag),
            Value::Number(number) => Self::Number(number),
            Value::String(text) => Self::String(text),
            Value::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            Value::Object(entries) => Self::Object(
                entries
                    .into_iter()
                    .map(|(key, entry)| (key, Self::from(entry)))
                    .collect(),
            ),
        }
    }
}

impl From<MergeValue> for Value {
    fn from(value: MergeValue) -> Self {
        match value {
            MergeValue::Null => Self::Null,
            MergeValue::Bool(flag) => Self::Bool(flag),
            MergeValue::Number(number) => Self::Number(number),
            MergeValue::String(text) => Self::String(text),
            MergeValue::Array(items) | MergeValue::Set(items) => {
                Self::Array(items.into_iter().map(Self::from).collect())
            }
            MergeValue::Object(entries) => Self::Object(
                entries
                    .into_iter()
                    .map(|(key, entry)| (key, Self::from(entry)))
                    .collect(),
            ),
        }
    }
}

impl From<bool> for MergeValue {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<&str> for MergeValue {
    fn from(text: &str) -> Self {
        Self::String(text.to_owned())
    }
}

impl From<String> for MergeValue {
    fn from(text: String) -> Self {
        Self::String(text)
    }
}

impl From<i64> for MergeValue {
    fn from(number: i64) -> Self {
        Self::Number(number.into())
    }
}

impl FromIterator<Self> for MergeValue {
    fn from_iter<I: IntoIterator<Item = Self>>(iter: I) -> Self {
        Self::Array(iter.into_iter().collect())
    }
}
