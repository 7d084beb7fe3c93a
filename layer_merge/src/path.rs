//! Reconstruction of dotted paths from node identity.
//!
//! The merge primitive reports each entry together with the source node that
//! owns it, but never the path leading there. [`PathTracker`] rebuilds that
//! path by replaying the recursion on an explicit stack of frames tagged
//! with node identity: an entry whose parent is the top frame's node is a
//! child of that frame; any other parent means the walk has returned from a
//! deeper branch, so frames are popped until one matches.
//!
//! Identity is address equality of nodes borrowed from the source trees,
//! which stays stable for the whole merge. If one node were reachable from
//! two branches the replay could attribute a child to the wrong branch;
//! owned trees cannot share nodes, so this only arises when the tracker is
//! fed by hand.

use std::ptr;

use crate::MergeValue;

/// One level of the replayed recursion.
#[derive(Clone, Debug)]
pub struct PathFrame<'s> {
    source: &'s MergeValue,
    path: Vec<String>,
}

impl<'s> PathFrame<'s> {
    const fn root(source: &'s MergeValue) -> Self {
        Self {
            source,
            path: Vec::new(),
        }
    }

    /// Node whose entries this frame covers.
    #[must_use]
    pub const fn source(&self) -> &'s MergeValue {
        self.source
    }

    /// Key segments from the source root to this frame's node.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.path
    }
}

/// Stack of [`PathFrame`]s rebuilding the path of each visited entry.
///
/// # Examples
///
/// ```rust
/// use layer_merge::{MergeValue, PathTracker};
/// use serde_json::json;
///
/// let root = MergeValue::from(json!({"x": {"y": [1]}, "z": 2}));
/// let x = root.as_object().and_then(|o| o.get("x")).expect("x present");
/// let y = x.as_object().and_then(|o| o.get("y")).expect("y present");
/// let z = root.as_object().and_then(|o| o.get("z")).expect("z present");
///
/// let mut tracker = PathTracker::new();
/// assert_eq!(tracker.visit("x", &root, x), "x");
/// assert_eq!(tracker.visit("y", x, y), "x.y");
/// assert_eq!(tracker.visit("z", &root, z), "z");
/// ```
#[derive(Clone, Debug, Default)]
pub struct PathTracker<'s> {
    stack: Vec<PathFrame<'s>>,
}

impl<'s> PathTracker<'s> {
    /// Create an empty tracker.
    #[must_use]
    pub const fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Record a visit to `key` of `parent`, whose value is `value`, and
    /// return the entry's dotted path.
    ///
    /// Frames whose node is not `parent` are popped first; when none is left
    /// `parent` becomes a fresh root. A frame for `value` is then pushed so
    /// entries of `value` resolve beneath `key`.
    pub fn visit(&mut self, key: &str, parent: &'s MergeValue, value: &'s MergeValue) -> String {
        loop {
            match self.stack.last() {
                Some(top) if ptr::eq(top.source, parent) => break,
                Some(_) => {
                    self.stack.pop();
                }
                None => self.stack.push(PathFrame::root(parent)),
            }
        }
        let mut path = self
            .stack
            .last()
            .map(|frame| frame.path.clone())
            .unwrap_or_default();
        path.push(key.to_owned());
        let dotted = path.join(".");
        self.stack.push(PathFrame {
            source: value,
            path,
        });
        dotted
    }

    /// Number of frames currently on the stack.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Innermost frame, if any entry has been visited.
    #[must_use]
    pub fn top(&self) -> Option<&PathFrame<'s>> {
        self.stack.last()
    }
}
