//! Array combination handlers behind each [`super::MergeStrategy`].

use crate::{MergeValue, structurally_equal};

/// Concatenate `existing` and `incoming`, dropping falsy members and later
/// structural duplicates.
///
/// Order of first occurrence is preserved. Falsy members (`null`, `false`,
/// zero, and the empty string) are treated as gaps rather than data.
#[must_use]
pub fn combine(existing: &[MergeValue], incoming: &[MergeValue]) -> Vec<MergeValue> {
    let mut combined: Vec<MergeValue> = Vec::with_capacity(existing.len() + incoming.len());
    for member in existing.iter().chain(incoming) {
        if member.is_truthy() && !combined.iter().any(|kept| structurally_equal(kept, member)) {
            combined.push(member.clone());
        }
    }
    combined
}

/// Discard `existing` and take `incoming` wholesale.
#[must_use]
pub fn override_with(_existing: &[MergeValue], incoming: &[MergeValue]) -> Vec<MergeValue> {
    incoming.to_vec()
}
