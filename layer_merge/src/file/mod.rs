//! Reading layers and option files from disk.

mod parser;

use std::path::Path;

use figment::Figment;

use crate::{LayerMergeError, LayerMergeResult, MergeValue};

use parser::{Format, parse_value};

/// Read `path` and parse it as a [`MergeValue`].
///
/// Files ending in `.json` are parsed as JSON; anything else as TOML.
///
/// # Examples
///
/// ```rust,no_run
/// use layer_merge::load_value;
/// use std::path::Path;
///
/// # fn run() -> layer_merge::LayerMergeResult<()> {
/// let base = load_value(Path::new("base.toml"))?;
/// assert!(base.as_object().is_some());
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns [`LayerMergeError::File`] when the file cannot be read or its
/// contents do not parse.
pub fn load_value(path: &Path) -> LayerMergeResult<MergeValue> {
    let data = read(path)?;
    parse_value(path, Format::of(path), &data)
}

/// Read `path` into a [`Figment`] for option extraction.
///
/// Parse failures are reported against the file before figment sees the
/// data so the error names the path.
pub(crate) fn load_figment(path: &Path) -> LayerMergeResult<Figment> {
    let data = read(path)?;
    let format = Format::of(path);
    parse_value(path, format, &data)?;
    Ok(format.figment(&data))
}

fn read(path: &Path) -> LayerMergeResult<String> {
    std::fs::read_to_string(path).map_err(|e| LayerMergeError::file(path, e))
}

#[cfg(test)]
mod tests;
