//! Public merge entry points.
//!
//! The engine drives [`merge_with`] over the ordered sources with a
//! customizer that tracks dotted paths, dispatches array collisions to the
//! configured [`MergeStrategy`], and optionally coerces textual leaves.

use serde_json::Value;
use tracing::{debug, trace};

use crate::{
    Customizer, MergeOptions, MergeStrategy, MergeValue, PathTracker, Resolution,
    StrategyResolver, Visit, coerce_text, merge_with,
};

/// Customizer combining path tracking, strategy dispatch, and coercion.
struct StrategyCustomizer<'s, 'o> {
    resolver: StrategyResolver<'o>,
    /// `None` when the strategy table is empty and no path can match.
    tracker: Option<PathTracker<'s>>,
    convert: bool,
}

impl<'o> StrategyCustomizer<'_, 'o> {
    fn new(options: &'o MergeOptions) -> Self {
        let resolver = StrategyResolver::new(&options.merge_strategies);
        let tracker = (!resolver.is_empty()).then(PathTracker::new);
        Self {
            resolver,
            tracker,
            convert: options.convert,
        }
    }

    fn resolve_collision(
        &self,
        path: Option<&str>,
        existing: &[MergeValue],
        incoming: &MergeValue,
    ) -> Resolution {
        let (fallback, members) = match incoming {
            MergeValue::Array(items) => (MergeStrategy::Override, items),
            MergeValue::Set(members) => (MergeStrategy::Combine, members),
            _ => return Resolution::UseDefault,
        };
        let strategy = self.resolver.resolve(path, fallback);
        trace!(
            path = path.unwrap_or_default(),
            %strategy,
            incoming = incoming.kind(),
            "resolved array collision"
        );
        strategy.apply(existing, members)
    }
}

impl<'s> Customizer<'s> for StrategyCustomizer<'s, '_> {
    fn customize(&mut self, visit: Visit<'_, 's>) -> Resolution {
        let path = self
            .tracker
            .as_mut()
            .map(|tracker| tracker.visit(&visit.key.to_string(), visit.parent, visit.source));

        if let Some(MergeValue::Array(existing)) = visit.target
            && visit.source.is_truthy()
        {
            return self.resolve_collision(path.as_deref(), existing, visit.source);
        }

        if self.convert
            && let MergeValue::String(text) = visit.source
            && let Some(coerced) = coerce_text(text)
        {
            return Resolution::Replace(coerced);
        }

        Resolution::UseDefault
    }
}

/// Merge `sources` into `target` from left to right.
///
/// `target` is the accumulator: its entries are updated in place and
/// `sources` are only borrowed.
///
/// # Examples
///
/// ```rust
/// use layer_merge::{MergeOptions, MergeValue, merge_into};
/// use serde_json::json;
///
/// let mut target = MergeValue::from(json!({"a": [1, 2]}));
/// let sources = [MergeValue::from(json!({"a": [2, 3]}))];
/// merge_into(&mut target, &sources, &MergeOptions::default().with_strategy_name("a", "combine"));
/// assert_eq!(serde_json::Value::from(target), json!({"a": [1, 2, 3]}));
/// ```
pub fn merge_into(target: &mut MergeValue, sources: &[MergeValue], options: &MergeOptions) {
    debug!(
        sources = sources.len(),
        strategies = options.merge_strategies.len(),
        convert = options.convert,
        "merging sources"
    );
    let mut customizer = StrategyCustomizer::new(options);
    for source in sources {
        merge_with(target, source, &mut customizer);
    }
}

/// Merge `objects` from left to right into a single value.
///
/// The first object becomes the accumulator; later objects win scalar
/// collisions. An empty sequence yields an empty object.
///
/// # Examples
///
/// ```rust
/// use layer_merge::{MergeOptions, MergeValue, merge};
/// use serde_json::json;
///
/// let merged = merge(
///     vec![
///         MergeValue::from(json!({"a": {"b": 1}})),
///         MergeValue::from(json!({"a": {"c": 2}})),
///     ],
///     &MergeOptions::default(),
/// );
/// assert_eq!(serde_json::Value::from(merged), json!({"a": {"b": 1, "c": 2}}));
/// ```
#[must_use]
pub fn merge(objects: Vec<MergeValue>, options: &MergeOptions) -> MergeValue {
    let mut remaining = objects.into_iter();
    let Some(mut target) = remaining.next() else {
        return MergeValue::empty_object();
    };
    let sources: Vec<MergeValue> = remaining.collect();
    merge_into(&mut target, &sources, options);
    target
}

/// [`merge`] for [`serde_json::Value`] inputs and output.
#[must_use]
pub fn merge_json(objects: Vec<Value>, options: &MergeOptions) -> Value {
    let values = objects.into_iter().map(MergeValue::from).collect();
    Value::from(merge(values, options))
}
