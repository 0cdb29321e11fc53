use assert_cmd::Command;
use predicates::prelude::*;

fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);
    url
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("intent-embed").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Generate averaged intent embeddings"));
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("intent-embed").unwrap();
    cmd.arg("--version").assert().success().stdout(predicate::str::contains("intent-embed"));
}

#[test]
fn test_cli_rejects_unknown_arguments() {
    let mut cmd = Command::cargo_bin("intent-embed").unwrap();
    cmd.arg("--force").assert().failure();
}

#[test]
fn test_cli_unreachable_service_fails_before_database() {
    let mut cmd = Command::cargo_bin("intent-embed").unwrap();
    cmd.env("INTENT_EMBED_SERVICE_URL", unreachable_url())
        .env("INTENT_EMBED_DB_HOST", "db.invalid")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Intent Embeddings Generator"))
        .stderr(predicate::str::contains("❌ Error: embedding service unavailable"))
        .stderr(predicate::str::contains("Make sure Ollama is running"))
        .stderr(predicate::str::contains("PostgreSQL").not());
}
