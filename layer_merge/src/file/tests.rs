//! Tests for reading layer files.

use std::fs;
use std::path::PathBuf;

use rstest::rstest;
use serde_json::json;
use tempfile::TempDir;

use super::{load_figment, load_value};
use crate::{LayerMergeError, MergeValue};

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write layer file");
    path
}

#[rstest]
#[case::toml("base.toml", "port = 80\n[server]\ntags = [\"web\"]\n")]
#[case::json("base.json", r#"{"port": 80, "server": {"tags": ["web"]}}"#)]
#[case::upper_case_extension("BASE.JSON", r#"{"port": 80, "server": {"tags": ["web"]}}"#)]
#[case::unknown_extension_is_toml("base.conf", "port = 80\nserver = { tags = [\"web\"] }\n")]
fn loads_supported_formats(#[case] name: &str, #[case] contents: &str) {
    let dir = TempDir::new().expect("create temp dir");
    let path = write(&dir, name, contents);
    let value = load_value(&path).expect("load layer");
    assert_eq!(
        value,
        MergeValue::from(json!({"port": 80, "server": {"tags": ["web"]}}))
    );
}

#[rstest]
#[case::bad_toml("broken.toml", "port = \n")]
#[case::bad_json("broken.json", "{\"port\": }")]
fn parse_failures_name_the_file(#[case] name: &str, #[case] contents: &str) {
    let dir = TempDir::new().expect("create temp dir");
    let path = write(&dir, name, contents);
    let err = load_value(&path).expect_err("invalid contents");
    match &*err {
        LayerMergeError::File { path: reported, .. } => assert_eq!(reported, &path),
        other => panic!("expected File error, got {other:?}"),
    }
}

#[test]
fn missing_file_is_reported() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("absent.toml");
    let err = load_value(&path).expect_err("file is missing");
    assert!(matches!(&*err, LayerMergeError::File { .. }));
}

#[test]
fn figment_reflects_file_contents() {
    let dir = TempDir::new().expect("create temp dir");
    let path = write(&dir, "merge.json", r#"{"convert": true}"#);
    let figment = load_figment(&path).expect("load figment");
    let convert: bool = figment.extract_inner("convert").expect("convert key");
    assert!(convert);
}

#[rstest]
#[case::toml("order.toml", "zeta = 1\nalpha = 2\n[mid]\ny = 3\nb = 4\n")]
#[case::json("order.json", r#"{"zeta": 1, "alpha": 2, "mid": {"y": 3, "b": 4}}"#)]
fn keys_keep_document_order(#[case] name: &str, #[case] contents: &str) {
    let dir = TempDir::new().expect("create temp dir");
    let path = write(&dir, name, contents);
    let value = load_value(&path).expect("load layer");
    let rendered = serde_json::to_string(&value).expect("serialises");
    assert_eq!(rendered, r#"{"zeta":1,"alpha":2,"mid":{"y":3,"b":4}}"#);
}
