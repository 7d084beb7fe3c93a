//! Command-line interface definitions for `layer-merge`.

use camino::Utf8PathBuf;
use clap::Parser;
use layer_merge::{MergeStrategy, parse_strategy_assignment};

/// Parsed CLI arguments for `layer-merge`.
#[derive(Debug, Parser)]
#[command(name = "layer-merge")]
#[command(about = "Deep-merge JSON and TOML layers with per-path array strategies")]
#[command(version)]
pub struct Args {
    /// Array strategy for a dotted path (repeatable), e.g. `server.tags=combine`.
    #[arg(long = "strategy", value_name = "PATH=STRATEGY", value_parser = parse_strategy)]
    pub strategies: Vec<(String, MergeStrategy)>,
    /// Coerce textual leaves such as "true" or "8080" into typed values.
    #[arg(long)]
    pub convert: bool,
    /// TOML or JSON file holding merge options.
    #[arg(long, value_name = "path")]
    pub options: Option<Utf8PathBuf>,
    /// Pretty-print the merged JSON.
    #[arg(long)]
    pub pretty: bool,
    /// Layers to merge, lowest precedence first.
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<Utf8PathBuf>,
}

fn parse_strategy(spec: &str) -> Result<(String, MergeStrategy), String> {
    parse_strategy_assignment(spec).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use clap::error::ErrorKind;
    use rstest::rstest;

    use super::Args;
    use layer_merge::MergeStrategy;

    #[test]
    fn parses_files_and_flags() {
        let args = Args::try_parse_from([
            "layer-merge",
            "--strategy",
            "server.tags=combine",
            "--strategy=list=index",
            "--convert",
            "--pretty",
            "--options",
            "merge.toml",
            "base.toml",
            "local.json",
        ])
        .expect("valid arguments");
        assert_eq!(
            args.strategies,
            [
                (String::from("server.tags"), MergeStrategy::Combine),
                (String::from("list"), MergeStrategy::Index),
            ]
        );
        assert!(args.convert);
        assert!(args.pretty);
        assert_eq!(args.options.as_deref().map(|p| p.as_str()), Some("merge.toml"));
        assert_eq!(args.files, ["base.toml", "local.json"]);
    }

    #[test]
    fn flags_default_off() {
        let args = Args::try_parse_from(["layer-merge", "only.toml"]).expect("valid arguments");
        assert!(args.strategies.is_empty());
        assert!(!args.convert);
        assert!(!args.pretty);
        assert!(args.options.is_none());
    }

    #[rstest]
    #[case::no_files(&["layer-merge"], ErrorKind::MissingRequiredArgument)]
    #[case::unknown_strategy(&["layer-merge", "--strategy", "a=append", "x.toml"], ErrorKind::ValueValidation)]
    #[case::missing_separator(&["layer-merge", "--strategy", "a", "x.toml"], ErrorKind::ValueValidation)]
    fn rejects_invalid_arguments(#[case] argv: &[&str], #[case] kind: ErrorKind) {
        let err = Args::try_parse_from(argv).expect_err("invalid arguments");
        assert_eq!(err.kind(), kind);
    }
}
