//! End-to-end composition of file, environment, and CLI layers.

use std::path::Path;

use anyhow::Result;
use camino::Utf8Path;
use layer_merge::{
    IntoFigmentError, LayerComposition, LayerMergeError, MergeOptions, MergeProvenance,
    MergeValue, from_value, merge_layers,
};
use rstest::rstest;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize, PartialEq)]
struct Settings {
    server: Server,
    features: Vec<String>,
}

#[derive(Debug, Deserialize, PartialEq)]
struct Server {
    host: String,
    port: u16,
    tags: Vec<String>,
}

#[rstest]
fn layers_files_env_options_and_cli() -> Result<()> {
    figment::Jail::try_with(|jail| {
        jail.clear_env();
        jail.create_file(
            "base.toml",
            "features = [\"auth\"]\n[server]\nhost = \"localhost\"\nport = 80\ntags = [\"web\"]\n",
        )?;
        jail.create_file(
            "local.json",
            r#"{"server": {"port": "8080", "tags": ["web", "edge"]}, "features": ["metrics"]}"#,
        )?;
        jail.create_file(
            "merge.toml",
            "[merge_strategies]\n\"server.tags\" = \"combine\"\n",
        )?;
        jail.set_env("LAYER_MERGE_CONVERT", "true");

        let file_options = MergeOptions::load(Path::new("merge.toml")).map_err(IntoFigmentError::into_figment)?;
        let env_options = MergeOptions::from_env("LAYER_MERGE_").map_err(IntoFigmentError::into_figment)?;
        let options = MergeOptions {
            convert: env_options.convert,
            ..file_options
        };

        let (mut layers, errors) = LayerComposition::load_files(["base.toml", "local.json"]).into_parts();
        if !errors.is_empty() {
            return Err(figment::Error::from("expected both files to load"));
        }
        layers.push(layer_merge::MergeLayer::cli(std::borrow::Cow::Owned(MergeValue::from(
            json!({"server": {"host": "0.0.0.0"}}),
        ))));

        let provenances: Vec<_> = layers.iter().map(|layer| layer.provenance()).collect();
        if provenances != [MergeProvenance::File, MergeProvenance::File, MergeProvenance::Cli] {
            return Err(figment::Error::from("unexpected provenance ordering"));
        }

        let settings: Settings = from_value(merge_layers(layers, &options)).map_err(IntoFigmentError::into_figment)?;
        let expected = Settings {
            server: Server {
                host: String::from("0.0.0.0"),
                port: 8080,
                tags: vec![String::from("web"), String::from("edge")],
            },
            features: vec![String::from("metrics")],
        };
        if settings != expected {
            return Err(figment::Error::from(format!("unexpected settings: {settings:?}")));
        }
        Ok(())
    })?;
    Ok(())
}

#[rstest]
fn unreadable_layers_are_all_reported() -> Result<()> {
    figment::Jail::try_with(|jail| {
        jail.create_file("broken.toml", "server = \n")?;
        jail.create_file("good.json", r#"{"a": 1}"#)?;

        let composition = LayerComposition::load_files(["broken.toml", "good.json", "missing.json"]);
        let Err(err) = composition.into_merge_result(|layers| {
            Ok(merge_layers(layers, &MergeOptions::default()))
        }) else {
            return Err(figment::Error::from("expected composition to fail"));
        };
        let LayerMergeError::Layers(failures) = &*err else {
            return Err(figment::Error::from(format!("expected layer failures, got {err:?}")));
        };
        let failed: Vec<&str> = failures
            .iter()
            .filter(|failure| matches!(failure.error(), LayerMergeError::File { .. }))
            .filter_map(|failure| failure.origin().path())
            .map(Utf8Path::as_str)
            .collect();
        if failed != ["broken.toml", "missing.json"] {
            return Err(figment::Error::from(format!("unexpected failures: {failures}")));
        }
        Ok(())
    })?;
    Ok(())
}
