//! End-to-end tests for resolving query files.
//!
//! These tests drive the file-based adapters through the application use
//! cases, and run the `querybind` binary against fixtures on disk.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::path::Path;
use std::process::Command;

use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tempfile::tempdir;

use querybind_application::ports::{QueryRepository, VariableRepository};
use querybind_application::{ResolveQueryFile, ResolveQueryFileInput};
use querybind_domain::query::{DataSourceRef, QueryType};
use querybind_domain::settings::ResolverSettings;
use querybind_domain::variable::TemplateVariable;
use querybind_infrastructure::{FileQueryRepository, FileVariableRepository, TokioFileSystem};

const VARIABLES_YAML: &str = "\
variables:
  - name: subs
    kind: subscriptionList
    currentValue: [sub-foo, sub-baz]
  - name: var1
    currentValue: var1-foo
  - name: var3
    label: Names
    kind: multi
    currentValue: [var3-foo, var3-baz]
";

fn queries_document() -> Value {
    json!([
        {
            "refId": "A",
            "queryType": "Azure Resource Graph",
            "subscriptions": ["$subs"],
            "azureResourceGraph": {
                "query": "resources | where $__contains(name, $var3) | where type == '$var1'",
                "resultFormat": "table"
            }
        },
        {
            "refId": "B",
            "queryType": "Azure Monitor",
            "subscriptions": ["$subs"],
            "azureMonitor": {"metricName": "$var1"}
        },
        {
            "refId": "C",
            "queryType": "Azure Resource Graph",
            "subscriptions": ["sub-literal"],
            "azureResourceGraph": {"query": "Resources | $nope", "resultFormat": "table"}
        }
    ])
}

fn write_fixtures(dir: &Path) {
    std::fs::write(dir.join("variables.yaml"), VARIABLES_YAML).unwrap();
    std::fs::write(dir.join("queries.json"), queries_document().to_string()).unwrap();
}

#[tokio::test]
async fn test_resolve_query_file() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    write_fixtures(temp_dir.path());
    let output_path = temp_dir.path().join("out/resolved.json");

    let fs = TokioFileSystem::new();
    let settings = ResolverSettings::default()
        .with_datasource(DataSourceRef::new("grafana-azure-monitor-datasource", "azure"));
    let use_case = ResolveQueryFile::new(
        FileVariableRepository::new(fs),
        FileQueryRepository::new(fs),
        settings,
    );

    let output = use_case
        .execute(ResolveQueryFileInput {
            variables_path: temp_dir.path().join("variables.yaml"),
            queries_path: temp_dir.path().join("queries.json"),
            output_path: Some(output_path.clone()),
            ..ResolveQueryFileInput::default()
        })
        .await
        .expect("Failed to resolve queries");

    assert_eq!(output.variable_count, 3);
    let ids: Vec<_> = output.queries.iter().map(|q| q.ref_id.as_str()).collect();
    assert_eq!(ids, vec!["A", "B", "C"]);

    let first = &output.queries[0];
    assert_eq!(first.subscriptions(), vec!["sub-foo", "sub-baz"]);
    assert_eq!(
        first.payload().unwrap()["query"],
        "resources | where $__contains(name, 'var3-foo','var3-baz') | where type == 'var1-foo'"
    );

    let second = &output.queries[1];
    assert_eq!(second.query_type, Some(QueryType::AzureMonitor));
    assert_eq!(second.subscriptions(), vec!["$subs"]);
    assert_eq!(second.payload().unwrap()["metricName"], "$var1");

    assert_eq!(output.queries[2].payload().unwrap()["query"], "Resources | $nope");
    assert!(output.queries.iter().all(|q| q.datasource.is_some()));

    let saved = FileQueryRepository::new(fs).load(&output_path).await.unwrap();
    assert_eq!(saved, output.queries);
}

#[tokio::test]
async fn test_variables_load_alike_from_yaml_and_json() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    write_fixtures(temp_dir.path());
    let json_path = temp_dir.path().join("variables.json");
    let document = json!({"variables": [
        {"name": "subs", "kind": "subscriptionList", "currentValue": ["sub-foo", "sub-baz"]},
        {"name": "var1", "currentValue": "var1-foo"},
        {"name": "var3", "label": "Names", "kind": "multi", "currentValue": ["var3-foo", "var3-baz"]}
    ]});
    std::fs::write(&json_path, document.to_string()).unwrap();

    let repo = FileVariableRepository::new(TokioFileSystem::new());
    let from_yaml = repo.load(&temp_dir.path().join("variables.yaml")).await.unwrap();
    let from_json = repo.load(&json_path).await.unwrap();

    assert_eq!(from_json, from_yaml);
    assert_eq!(from_json[1], TemplateVariable::single("var1", "var1-foo"));
}

fn querybind(args: &[&str]) -> Value {
    let output = Command::new(env!("CARGO_BIN_EXE_querybind"))
        .args(args)
        .env_remove("QUERYBIND_SETTINGS")
        .output()
        .expect("Failed to run querybind");
    assert!(
        output.status.success(),
        "querybind failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

#[test]
fn test_cli_resolve_to_stdout() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    write_fixtures(temp_dir.path());
    let scoped = temp_dir.path().join("scoped.json");
    std::fs::write(&scoped, r#"{"var1": {"text": "panel", "value": "panel-value"}}"#).unwrap();

    let variables = temp_dir.path().join("variables.yaml");
    let queries = temp_dir.path().join("queries.json");
    let resolved = querybind(&[
        "resolve",
        "--variables",
        variables.to_str().unwrap(),
        "--queries",
        queries.to_str().unwrap(),
        "--scoped",
        scoped.to_str().unwrap(),
    ]);

    assert_eq!(resolved.as_array().unwrap().len(), 3);
    assert_eq!(resolved[0]["subscriptions"], json!(["sub-foo", "sub-baz"]));
    assert_eq!(
        resolved[0]["azureResourceGraph"]["query"],
        "resources | where $__contains(name, 'var3-foo','var3-baz') | where type == 'panel-value'"
    );
}

#[test]
fn test_cli_resolve_output_keeps_untouched_queries() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    write_fixtures(temp_dir.path());
    let queries = temp_dir.path().join("untyped.json");
    let document = json!([
        {"refId": "A", "hide": false, "someField": {"x": "$var1"}},
        {
            "refId": "B",
            "queryType": "Azure Resource Graph",
            "azureResourceGraph": {"query": "Resources | $var1", "resultFormat": ""}
        }
    ]);
    std::fs::write(&queries, document.to_string()).unwrap();
    let output = temp_dir.path().join("resolved.json");

    let status = Command::new(env!("CARGO_BIN_EXE_querybind"))
        .args(["resolve", "--variables"])
        .arg(temp_dir.path().join("variables.yaml"))
        .arg("--queries")
        .arg(&queries)
        .arg("--output")
        .arg(&output)
        .env_remove("QUERYBIND_SETTINGS")
        .status()
        .expect("Failed to run querybind");
    assert!(status.success());

    let resolved: Value = serde_json::from_slice(&std::fs::read(&output).unwrap()).unwrap();
    assert_eq!(resolved[0], document[0]);
    assert_eq!(
        resolved[1]["azureResourceGraph"],
        json!({"query": "Resources | var1-foo", "resultFormat": "table"})
    );
}

#[test]
fn test_cli_validate_range() {
    let report = querybind(&["validate-range", "--from", "-5", "--to", "ten"]);

    assert_eq!(
        report,
        json!({
            "valid": false,
            "invalid": {"from": false, "to": true},
            "errors": ["To: Value needs to be an integer or a variable"]
        })
    );

    let report = querybind(&["validate-range", "--from", "$low", "--to", "[[high]]"]);
    assert_eq!(report["valid"], true);
}

#[test]
fn test_cli_suggest() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    write_fixtures(temp_dir.path());
    let variables = temp_dir.path().join("variables.yaml");

    let suggestions = querybind(&["suggest", "--variables", variables.to_str().unwrap()]);
    assert_eq!(
        suggestions,
        json!([
            {"value": "subs", "label": "subs", "origin": "template"},
            {"value": "var1", "label": "var1", "origin": "template"},
            {"value": "var3", "label": "Names", "origin": "template"}
        ])
    );
}
