//! Layer metadata and transport values.

use std::borrow::Cow;
use std::fmt;

use camino::{Utf8Path, Utf8PathBuf};

use crate::MergeValue;

/// Provenance of a merge layer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum MergeProvenance {
    /// Baseline values supplied by the application.
    Defaults,
    /// Values loaded from a file.
    File,
    /// Values collected from environment variables.
    Environment,
    /// Values supplied on the command line.
    Cli,
}

impl MergeProvenance {
    /// Short lowercase label used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Defaults => "defaults",
            Self::File => "file",
            Self::Environment => "environment",
            Self::Cli => "cli",
        }
    }
}

impl fmt::Display for MergeProvenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One input to a layered merge.
#[derive(Clone, Debug)]
pub struct MergeLayer<'a> {
    provenance: MergeProvenance,
    value: Cow<'a, MergeValue>,
    path: Option<Utf8PathBuf>,
}

impl<'a> MergeLayer<'a> {
    /// Construct a layer of default values.
    #[must_use]
    pub const fn defaults(value: Cow<'a, MergeValue>) -> Self {
        Self {
            provenance: MergeProvenance::Defaults,
            value,
            path: None,
        }
    }

    /// Construct a layer loaded from a file.
    #[must_use]
    pub const fn file(value: Cow<'a, MergeValue>, path: Option<Utf8PathBuf>) -> Self {
        Self {
            provenance: MergeProvenance::File,
            value,
            path,
        }
    }

    /// Construct a layer from environment variables.
    #[must_use]
    pub const fn environment(value: Cow<'a, MergeValue>) -> Self {
        Self {
            provenance: MergeProvenance::Environment,
            value,
            path: None,
        }
    }

    /// Construct a layer from command-line arguments.
    #[must_use]
    pub const fn cli(value: Cow<'a, MergeValue>) -> Self {
        Self {
            provenance: MergeProvenance::Cli,
            value,
            path: None,
        }
    }

    /// Returns the provenance of the layer.
    #[must_use]
    pub const fn provenance(&self) -> MergeProvenance {
        self.provenance
    }

    /// Returns the associated path if this layer was read from a file.
    #[must_use]
    pub fn path(&self) -> Option<&Utf8Path> {
        self.path.as_deref()
    }

    /// Borrow the layer's value.
    #[must_use]
    pub fn value(&self) -> &MergeValue {
        &self.value
    }

    /// Returns the layer's value, cloning it if borrowed.
    #[must_use]
    pub fn into_value(self) -> MergeValue {
        self.value.into_owned()
    }

    /// Convert this layer into a `'static` owned variant.
    #[must_use]
    pub fn into_owned(self) -> MergeLayer<'static> {
        MergeLayer {
            provenance: self.provenance,
            value: Cow::Owned(self.value.into_owned()),
            path: self.path,
        }
    }
}
