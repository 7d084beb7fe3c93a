//! Format selection and parsing for layer files.

use std::path::Path;

use figment::Figment;
use figment::providers::{Format as _, Json, Toml};

use crate::{LayerMergeError, LayerMergeResult, MergeValue};

/// Supported on-disk formats.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Format {
    Json,
    Toml,
}

impl Format {
    /// Pick a format from the file extension; TOML is the default.
    pub(super) fn of(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Self::Json,
            _ => Self::Toml,
        }
    }

    pub(super) fn figment(self, data: &str) -> Figment {
        match self {
            Self::Json => Figment::from(Json::string(data)),
            Self::Toml => Figment::from(Toml::string(data)),
        }
    }
}

/// Parse `data` read from `path` in the given format.
pub(super) fn parse_value(path: &Path, format: Format, data: &str) -> LayerMergeResult<MergeValue> {
    let value = match format {
        Format::Json => serde_json::from_str::<serde_json::Value>(data)
            .map_err(|e| LayerMergeError::file(path, e))?,
        Format::Toml => toml::from_str::<serde_json::Value>(data)
            .map_err(|e| LayerMergeError::file(path, e))?,
    };
    Ok(MergeValue::from(value))
}
