//! Named strategies for combining colliding arrays.
//!
//! A strategy applies where an array already present in the accumulated
//! value meets an incoming array or set. [`StrategyResolver`] selects one per
//! dotted path and [`MergeStrategy::apply`] turns the choice into a
//! [`Resolution`] for the merge primitive.

mod handlers;
mod resolver;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{MergeValue, Resolution};

pub use handlers::{combine, override_with};
pub use resolver::StrategyResolver;

/// How two colliding arrays are combined.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeStrategy {
    /// Concatenate, drop falsy members, and keep the first structurally-equal
    /// occurrence of each member.
    Combine,
    /// Replace the existing array with the incoming one.
    Override,
    /// Merge positionally: index `i` of the incoming array merges into index
    /// `i` of the existing one and the longer length wins.
    Index,
}

impl MergeStrategy {
    /// Every strategy, in documentation order.
    pub const ALL: [Self; 3] = [Self::Combine, Self::Override, Self::Index];

    /// Name used in configuration tables.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Combine => "combine",
            Self::Override => "override",
            Self::Index => "index",
        }
    }

    /// Apply the strategy to an existing array and incoming members.
    ///
    /// [`MergeStrategy::Index`] defers to the primitive's positional merge
    /// and therefore yields [`Resolution::UseDefault`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use layer_merge::{MergeStrategy, MergeValue, Resolution};
    ///
    /// let existing = [MergeValue::from(1_i64), MergeValue::from(2_i64)];
    /// let incoming = [MergeValue::from(2_i64), MergeValue::from(3_i64)];
    /// let Resolution::Replace(combined) = MergeStrategy::Combine.apply(&existing, &incoming) else {
    ///     panic!("combine always replaces");
    /// };
    /// let expected: MergeValue = [1_i64, 2, 3].into_iter().map(MergeValue::from).collect();
    /// assert_eq!(combined, expected);
    /// ```
    #[must_use]
    pub fn apply(self, existing: &[MergeValue], incoming: &[MergeValue]) -> Resolution {
        match self {
            Self::Combine => Resolution::Replace(MergeValue::Array(combine(existing, incoming))),
            Self::Override => {
                Resolution::Replace(MergeValue::Array(override_with(existing, incoming)))
            }
            Self::Index => Resolution::UseDefault,
        }
    }
}

impl fmt::Display for MergeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a strategy name is not recognised.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unknown merge strategy '{name}'; expected one of: combine, override, index")]
pub struct UnknownStrategy {
    /// The rejected name.
    pub name: String,
}

impl FromStr for MergeStrategy {
    type Err = UnknownStrategy;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == name)
            .ok_or_else(|| UnknownStrategy {
                name: name.to_owned(),
            })
    }
}
