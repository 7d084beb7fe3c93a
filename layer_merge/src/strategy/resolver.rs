//! Lookup of the strategy governing a dotted path.

use std::collections::BTreeMap;

use tracing::debug;

use super::MergeStrategy;

/// Maps dotted paths to strategies using a caller-supplied table.
///
/// Table values are raw names so that configuration loaded from files keeps
/// unrecognised entries; they degrade to the call-site fallback here instead
/// of failing the load.
#[derive(Clone, Copy, Debug)]
pub struct StrategyResolver<'a> {
    table: &'a BTreeMap<String, String>,
}

impl<'a> StrategyResolver<'a> {
    /// Create a resolver over `table`.
    #[must_use]
    pub const fn new(table: &'a BTreeMap<String, String>) -> Self {
        Self { table }
    }

    /// Whether the table has no entries, in which case path tracking is
    /// pointless.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Strategy for `path`, or `fallback` when the path is unknown, untracked,
    /// or names an unrecognised strategy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use layer_merge::{MergeStrategy, StrategyResolver};
    /// use std::collections::BTreeMap;
    ///
    /// let table = BTreeMap::from([
    ///     (String::from("a.b"), String::from("combine")),
    ///     (String::from("a.c"), String::from("append")),
    /// ]);
    /// let resolver = StrategyResolver::new(&table);
    /// assert_eq!(resolver.resolve(Some("a.b"), MergeStrategy::Override), MergeStrategy::Combine);
    /// assert_eq!(resolver.resolve(Some("a.c"), MergeStrategy::Override), MergeStrategy::Override);
    /// assert_eq!(resolver.resolve(None, MergeStrategy::Combine), MergeStrategy::Combine);
    /// ```
    #[must_use]
    pub fn resolve(&self, path: Option<&str>, fallback: MergeStrategy) -> MergeStrategy {
        let Some(name) = path.and_then(|p| self.table.get(p)) else {
            return fallback;
        };
        name.parse().unwrap_or_else(|_| {
            debug!(
                path = path.unwrap_or_default(),
                strategy = %name,
                %fallback,
                "unknown merge strategy; using fallback"
            );
            fallback
        })
    }
}
