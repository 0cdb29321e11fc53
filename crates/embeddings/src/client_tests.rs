use std::time::Duration;

use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::{EmbeddingError, EmbeddingProvider, OllamaClient};

const MODEL: &str = "mxbai-embed-large";

fn client_for(server: &MockServer) -> OllamaClient {
    OllamaClient::new(&server.uri(), MODEL, Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_embed_sends_model_and_prompt() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/embeddings"))
        .and(body_json(serde_json::json!({ "model": MODEL, "prompt": "hola" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "embedding": [0.5, -1.25, 3] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let embedding = client_for(&server).embed("hola").await.unwrap();
    assert_eq!(embedding, vec![0.5, -1.25, 3.0]);
}

#[tokio::test]
async fn test_embed_non_success_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/embeddings"))
        .respond_with(ResponseTemplate::new(404).set_body_string("model not found"))
        .mount(&server)
        .await;

    let err = client_for(&server).embed("hola").await.unwrap_err();
    match err {
        EmbeddingError::HttpStatus { code, body } => {
            assert_eq!(code, 404);
            assert_eq!(body, "model not found");
        },
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_embed_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/embeddings"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    assert!(client_for(&server).embed("hola").await.is_err());
}

#[tokio::test]
async fn test_embed_missing_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/embeddings"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "vector": [1.0] })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).embed("hola").await.unwrap_err();
    assert!(matches!(err, EmbeddingError::JsonParse { .. }), "got {err:?}");
}

#[tokio::test]
async fn test_embed_empty_vector() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/embeddings"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "embedding": [] })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).embed("hola").await.unwrap_err();
    assert!(matches!(err, EmbeddingError::EmptyResult), "got {err:?}");
}

#[tokio::test]
async fn test_check_available_ok() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "models": [] })))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).check_available().await.unwrap();
}

#[tokio::test]
async fn test_check_available_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server).check_available().await.unwrap_err();
    assert!(matches!(err, EmbeddingError::HttpStatus { code: 500, .. }), "got {err:?}");
    assert!(!err.is_connect());
}

#[tokio::test]
async fn test_check_available_connection_refused() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let uri = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let client = OllamaClient::new(&uri, MODEL, Duration::from_secs(5)).unwrap();
    let err = client.check_available().await.unwrap_err();
    assert!(err.is_connect(), "got {err:?}");
}

#[test]
fn test_trailing_slash_trimmed() {
    let client =
        OllamaClient::new("http://localhost:11434/", MODEL, Duration::from_secs(5)).unwrap();
    assert_eq!(client.base_url(), "http://localhost:11434");
    assert_eq!(client.model(), MODEL);
}
