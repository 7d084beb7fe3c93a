//! Generic recursive merge driven by a customizer callback.
//!
//! [`merge_with`] walks every key of a source object (and every index of a
//! source array), asks a [`Customizer`] how to treat it, and either assigns
//! the customizer's replacement verbatim or applies the built-in rule:
//!
//! - objects and arrays recurse into the matching target slot, starting from
//!   an empty container when the slot holds anything else;
//! - sets and leaves overwrite the target slot.
//!
//! Arrays merged by the built-in rule are therefore combined positionally and
//! keep the longer length. The primitive knows nothing about paths or
//! strategies; the engine layers those on through its customizer.

use std::fmt;

use crate::MergeValue;

/// Key of the entry currently being visited.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Key<'a> {
    /// Object field name.
    Field(&'a str),
    /// Array position.
    Index(usize),
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => f.write_str(name),
            Self::Index(index) => write!(f, "{index}"),
        }
    }
}

/// One entry reported to a [`Customizer`].
#[derive(Clone, Copy, Debug)]
pub struct Visit<'t, 's> {
    /// Key of the entry within its parent.
    pub key: Key<'s>,
    /// Value already accumulated under `key`, if any.
    pub target: Option<&'t MergeValue>,
    /// Incoming value under `key`.
    pub source: &'s MergeValue,
    /// Source node that owns `source`.
    pub parent: &'s MergeValue,
}

/// Outcome of a customizer call.
#[derive(Clone, Debug, PartialEq)]
pub enum Resolution {
    /// Assign this value verbatim and skip the built-in rule.
    Replace(MergeValue),
    /// Apply the built-in rule for this entry.
    UseDefault,
}

/// Callback consulted for every entry of every source node.
///
/// Source references carry the lifetime `'s` of the whole source tree, so an
/// implementation may retain them (for example to compare node identity)
/// across calls.
pub trait Customizer<'s> {
    /// Decide how the entry described by `visit` is merged.
    fn customize(&mut self, visit: Visit<'_, 's>) -> Resolution;
}

impl<'s, F> Customizer<'s> for F
where
    F: FnMut(Visit<'_, 's>) -> Resolution,
{
    fn customize(&mut self, visit: Visit<'_, 's>) -> Resolution {
        self(visit)
    }
}

/// Merge `source` into `target`, consulting `customizer` for each entry.
///
/// Object sources require an object target and array sources an array
/// target; any other target is replaced by an empty container first. Leaf
/// and set sources have no entries and leave `target` untouched.
///
/// # Examples
///
/// ```rust
/// use layer_merge::{MergeValue, Resolution, Visit, merge_with};
/// use serde_json::json;
///
/// let mut target = MergeValue::from(json!({"a": [1, 2, 3], "b": {"c": 1}}));
/// let source = MergeValue::from(json!({"a": [9], "b": {"d": 2}}));
/// merge_with(&mut target, &source, &mut |_: Visit<'_, '_>| Resolution::UseDefault);
/// assert_eq!(
///     serde_json::Value::from(target),
///     json!({"a": [9, 2, 3], "b": {"c": 1, "d": 2}})
/// );
/// ```
pub fn merge_with<'s, C>(target: &mut MergeValue, source: &'s MergeValue, customizer: &mut C)
where
    C: Customizer<'s> + ?Sized,
{
    match source {
        MergeValue::Object(entries) => {
            if !matches!(target, MergeValue::Object(_)) {
                *target = MergeValue::empty_object();
            }
            let MergeValue::Object(slots) = target else {
                return;
            };
            for (key, value) in entries {
                let resolution = customizer.customize(Visit {
                    key: Key::Field(key),
                    target: slots.get(key),
                    source: value,
                    parent: source,
                });
                match resolution {
                    Resolution::Replace(replacement) => {
                        slots.insert(key.clone(), replacement);
                    }
                    Resolution::UseDefault if recurses(value) => {
                        let slot = slots
                            .entry(key.clone())
                            .or_insert_with(|| value.empty_like());
                        merge_with(slot, value, customizer);
                    }
                    Resolution::UseDefault => {
                        slots.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        MergeValue::Array(items) => {
            if !matches!(target, MergeValue::Array(_)) {
                *target = MergeValue::Array(Vec::new());
            }
            let MergeValue::Array(slots) = target else {
                return;
            };
            for (index, value) in items.iter().enumerate() {
                let resolution = customizer.customize(Visit {
                    key: Key::Index(index),
                    target: slots.get(index),
                    source: value,
                    parent: source,
                });
                match resolution {
                    Resolution::Replace(replacement) => assign(slots, index, replacement),
                    Resolution::UseDefault if recurses(value) => {
                        if index >= slots.len() {
                            slots.push(value.empty_like());
                        }
                        if let Some(slot) = slots.get_mut(index) {
                            merge_with(slot, value, customizer);
                        }
                    }
                    Resolution::UseDefault => assign(slots, index, value.clone()),
                }
            }
        }
        MergeValue::Null
        | MergeValue::Bool(_)
        | MergeValue::Number(_)
        | MergeValue::String(_)
        | MergeValue::Set(_) => {}
    }
}

/// Whether the built-in rule descends into `value` rather than copying it.
const fn recurses(value: &MergeValue) -> bool {
    matches!(value, MergeValue::Object(_) | MergeValue::Array(_))
}

/// Write `value` at `index`, growing `slots` by one when `index` is the end.
fn assign(slots: &mut Vec<MergeValue>, index: usize, value: MergeValue) {
    match slots.get_mut(index) {
        Some(slot) => *slot = value,
        None => slots.push(value),
    }
}
