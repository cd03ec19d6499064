use account_tag_mapper::{AccountzClient, LocalStorage, MapperConfig, MapperEngine, MapperError};
use httpmock::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn account_detail(name: &str) -> serde_json::Value {
    serde_json::json!({
        "server_id": "NCXQ",
        "account_detail": {
            "account_name": "ignored",
            "decoded_jwt": {"name": name, "sub": "ignored"}
        }
    })
}

fn engine(server: &MockServer, output: &Path) -> MapperEngine<AccountzClient, LocalStorage, MapperConfig> {
    let config = MapperConfig::new(server.base_url(), output.to_str().unwrap());
    let client = AccountzClient::from_config(&config).unwrap();
    MapperEngine::new(client, LocalStorage::new(), config)
}

fn temp_path(output: &Path) -> String {
    format!("{}.tmp", output.to_str().unwrap())
}

#[tokio::test]
async fn test_end_to_end_generates_starlark_script() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("add_account_name.star");

    let server = MockServer::start();
    // per-account mocks first: they are more specific than the discovery mock
    let acme_mock = server.mock(|when, then| {
        when.method(GET).path("/accountz").query_param("acc", "A1");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(account_detail("Acme"));
    });
    let nameless_mock = server.mock(|when, then| {
        when.method(GET).path("/accountz").query_param("acc", "A2");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"account_detail": {"account_name": "A2"}}));
    });
    let discovery_mock = server.mock(|when, then| {
        when.method(GET).path("/accountz");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"accounts": ["A2", "A1"]}));
    });

    let summary = engine(&server, &output).run().await.unwrap();

    discovery_mock.assert();
    acme_mock.assert();
    nameless_mock.assert();
    assert_eq!(summary.mappings_written, 2);
    assert_eq!(summary.accounts_skipped, 0);
    assert_eq!(summary.output_path, output.to_str().unwrap());

    let script = fs::read_to_string(&output).unwrap();
    let expected = "\
# Generated by account-tag-mapper. Do not edit.
# 2 account mappings
def apply(metric):
    mapping = {
        \"A1\": \"Acme\",
        \"A2\": \"unknown\",
    }
    if \"account\" in metric.tags:
        account_id = metric.tags[\"account\"]
        if account_id in mapping:
            metric.tags[\"account_name\"] = mapping[account_id]
    return metric
";
    assert_eq!(script, expected);
    assert!(!Path::new(&temp_path(&output)).exists());
}

#[tokio::test]
async fn test_end_to_end_empty_account_list() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("add_account_name.star");

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/accountz");
        then.status(200).json_body(serde_json::json!({"accounts": []}));
    });

    let summary = engine(&server, &output).run().await.unwrap();

    assert_eq!(summary.mappings_written, 0);
    let script = fs::read_to_string(&output).unwrap();
    assert!(script.contains("def apply(metric):\n    mapping = {\n    }\n"));
    assert!(script.ends_with("    return metric\n"));
}

#[tokio::test]
async fn test_end_to_end_one_failed_account_is_left_out() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("add_account_name.star");

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/accountz").query_param("acc", "A1");
        then.status(200).json_body(account_detail("Acme"));
    });
    let failing_mock = server.mock(|when, then| {
        when.method(GET).path("/accountz").query_param("acc", "A2");
        then.status(500).body("internal error");
    });
    server.mock(|when, then| {
        when.method(GET).path("/accountz").query_param("acc", "A3");
        then.status(200).json_body(account_detail("Initech"));
    });
    server.mock(|when, then| {
        when.method(GET).path("/accountz");
        then.status(200)
            .json_body(serde_json::json!({"accounts": ["A1", "A2", "A3"]}));
    });

    let summary = engine(&server, &output).run().await.unwrap();

    failing_mock.assert();
    assert_eq!(summary.mappings_written, 2);
    assert_eq!(summary.accounts_skipped, 1);

    let script = fs::read_to_string(&output).unwrap();
    assert!(script.contains("        \"A1\": \"Acme\",\n"));
    assert!(script.contains("        \"A3\": \"Initech\",\n"));
    assert!(!script.contains("\"A2\""));
}

#[tokio::test]
async fn test_end_to_end_discovery_unreachable_keeps_previous_file() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("add_account_name.star");
    fs::write(&output, "# previous run\n").unwrap();

    // nothing listens on port 1
    let config = MapperConfig::new("http://127.0.0.1:1", output.to_str().unwrap());
    let client = AccountzClient::from_config(&config).unwrap();
    let engine = MapperEngine::new(client, LocalStorage::new(), config);

    let err = engine.run().await.unwrap_err();

    assert!(matches!(err, MapperError::DiscoveryError { .. }));
    assert_eq!(err.exit_code(), 2);
    assert_eq!(fs::read_to_string(&output).unwrap(), "# previous run\n");
    assert!(!Path::new(&temp_path(&output)).exists());
}

#[tokio::test]
async fn test_end_to_end_discovery_error_status_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("add_account_name.star");

    let server = MockServer::start();
    let discovery_mock = server.mock(|when, then| {
        when.method(GET).path("/accountz");
        then.status(404);
    });

    let result = engine(&server, &output).run().await;

    discovery_mock.assert();
    assert!(result.is_err());
    assert!(!output.exists());
}

#[tokio::test]
async fn test_end_to_end_names_with_quotes_are_escaped() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("add_account_name.star");

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/accountz").query_param("acc", "A1");
        then.status(200).json_body(account_detail("Bobby \"Tables\""));
    });
    server.mock(|when, then| {
        when.method(GET).path("/accountz");
        then.status(200).json_body(serde_json::json!({"accounts": ["A1"]}));
    });

    engine(&server, &output).run().await.unwrap();

    let script = fs::read_to_string(&output).unwrap();
    assert!(script.contains(r#"        "A1": "Bobby \"Tables\"","#));
}
