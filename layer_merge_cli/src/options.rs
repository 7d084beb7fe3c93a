//! Resolution of merge options from file, environment, and flags.

use std::collections::BTreeMap;

use figment::Figment;
use figment::providers::{Env, Serialized};
use layer_merge::{LayerMergeResult, MergeOptions};
use serde::Serialize;
use tracing::debug;

use crate::cli::Args;

/// Prefix for option environment variables such as `LAYER_MERGE_CONVERT`.
pub const ENV_PREFIX: &str = "LAYER_MERGE_";

/// Options set explicitly on the command line.
///
/// Absent flags are skipped so they do not mask lower layers.
#[derive(Debug, Default, Serialize)]
struct FlagOverrides {
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    merge_strategies: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    convert: Option<bool>,
}

impl From<&Args> for FlagOverrides {
    fn from(args: &Args) -> Self {
        Self {
            merge_strategies: args
                .strategies
                .iter()
                .map(|(path, strategy)| (path.clone(), strategy.as_str().to_owned()))
                .collect(),
            convert: args.convert.then_some(true),
        }
    }
}

/// Layer the options file, `LAYER_MERGE_*` variables, and flags, in that
/// order of increasing precedence.
pub fn resolve_options(args: &Args) -> LayerMergeResult<MergeOptions> {
    let base = match &args.options {
        Some(path) => MergeOptions::load(path.as_std_path())?,
        None => MergeOptions::default(),
    };
    let figment = Figment::from(Serialized::defaults(base))
        .merge(Env::prefixed(ENV_PREFIX))
        .merge(Serialized::defaults(FlagOverrides::from(args)));
    let options = MergeOptions::from_figment(&figment)?;
    debug!(
        strategies = options.merge_strategies.len(),
        convert = options.convert,
        "resolved merge options"
    );
    Ok(options)
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use layer_merge::{IntoFigmentError, MergeOptions, MergeStrategy};

    use super::resolve_options;
    use crate::cli::Args;

    #[allow(deprecated, reason = "figment::Jail is used for test isolation only")]
    fn jail_expect_with<F>(f: F)
    where
        F: FnOnce(&mut figment::Jail) -> figment::error::Result<()>,
    {
        figment::Jail::expect_with(f);
    }

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(["layer-merge"].iter().chain(argv).copied()).expect("valid arguments")
    }

    #[test]
    fn defaults_without_sources() {
        jail_expect_with(|j| {
            j.clear_env();
            let options = resolve_options(&args(&["a.toml"])).map_err(IntoFigmentError::into_figment)?;
            assert_eq!(options, MergeOptions::default());
            Ok(())
        });
    }

    #[test]
    fn flags_override_environment_and_file() {
        jail_expect_with(|j| {
            j.clear_env();
            j.create_file(
                "merge.toml",
                "[merge_strategies]\ntags = \"override\"\nlist = \"index\"\n",
            )?;
            j.set_env("LAYER_MERGE_MERGE_STRATEGIES", "{tags=index,extra=combine}");
            let options = resolve_options(&args(&[
                "--options",
                "merge.toml",
                "--strategy",
                "tags=combine",
                "a.toml",
            ]))
            .map_err(IntoFigmentError::into_figment)?;
            let expected = MergeOptions::default()
                .with_strategy("tags", MergeStrategy::Combine)
                .with_strategy("list", MergeStrategy::Index)
                .with_strategy("extra", MergeStrategy::Combine);
            assert_eq!(options, expected);
            Ok(())
        });
    }

    #[test]
    fn environment_enables_convert() {
        jail_expect_with(|j| {
            j.clear_env();
            j.set_env("LAYER_MERGE_CONVERT", "true");
            let options = resolve_options(&args(&["a.toml"])).map_err(IntoFigmentError::into_figment)?;
            assert!(options.convert);
            Ok(())
        });
    }

    #[test]
    fn absent_flag_keeps_file_convert() {
        jail_expect_with(|j| {
            j.clear_env();
            j.create_file("merge.json", r#"{"convert": true}"#)?;
            let options = resolve_options(&args(&["--options", "merge.json", "a.toml"]))
                .map_err(IntoFigmentError::into_figment)?;
            assert!(options.convert);
            Ok(())
        });
    }
}
