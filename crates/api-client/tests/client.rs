use std::time::Duration;

use api_client::{EmotionClient, ANALYZE_BATCH_PATH, ANALYZE_PATH};
use emotion::{EmotionAnalyzer, EmotionError, EmotionResult, EmotionScore, ErrorKind};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> EmotionClient {
    EmotionClient::builder()
        .base_url(server.uri())
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}

fn joy_body() -> serde_json::Value {
    json!({
        "primary_emotion": "joy",
        "confidence": 0.9,
        "all_emotions": [{ "emotion": "joy", "score": 0.9 }]
    })
}

fn joy_result() -> EmotionResult {
    EmotionResult {
        primary_emotion: "joy".into(),
        confidence: 0.9,
        all_emotions: vec![EmotionScore::new("joy", 0.9)],
    }
}

// ---------------------------------------------------------------------------
// Success paths
// ---------------------------------------------------------------------------

#[tokio::test]
async fn analyze_posts_trimmed_text_and_maps_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ANALYZE_PATH))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "text": "I am so happy today" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(joy_body()))
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server)
        .analyze("   I am so happy today \n")
        .await
        .unwrap();

    assert_eq!(result, joy_result());
}

#[tokio::test]
async fn analyze_batch_posts_trimmed_texts_and_keeps_order() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ANALYZE_BATCH_PATH))
        .and(body_json(json!({ "texts": ["great news", "terrible news"] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                joy_body(),
                {
                    "primary_emotion": "sadness",
                    "confidence": 0.8,
                    "all_emotions": [
                        { "emotion": "sadness", "score": 0.8 },
                        { "emotion": "joy", "score": 0.2 }
                    ]
                }
            ],
            "count": 2
        })))
        .expect(1)
        .mount(&server)
        .await;

    let batch = client_for(&server)
        .analyze_batch(&[" great news", "terrible news "])
        .await
        .unwrap();

    assert_eq!(batch.count, 2);
    assert_eq!(batch.count, batch.results.len());
    assert_eq!(batch.results[0], joy_result());
    assert_eq!(batch.results[1].primary_emotion, "sadness");
    assert_eq!(batch.results[1].all_emotions.len(), 2);
}

#[tokio::test]
async fn trait_object_dispatches_to_http_client() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ANALYZE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(joy_body()))
        .mount(&server)
        .await;

    let analyzer: Box<dyn EmotionAnalyzer> = Box::new(client_for(&server));
    assert_eq!(analyzer.analyze("hello").await.unwrap(), joy_result());
}

#[tokio::test]
async fn concurrent_calls_on_one_client_are_independent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ANALYZE_PATH))
        .and(body_json(json!({ "text": "fine" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(joy_body()))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(ANALYZE_PATH))
        .and(body_json(json!({ "text": "broken" })))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "detail": "boom" })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let other = client.clone();
    let (ok, failed) = tokio::join!(client.analyze("fine"), other.analyze("broken"));

    assert_eq!(ok.unwrap(), joy_result());
    assert_eq!(failed.unwrap_err().kind(), ErrorKind::Api);
}

// ---------------------------------------------------------------------------
// Validation never reaches the network
// ---------------------------------------------------------------------------

#[tokio::test]
async fn invalid_input_is_rejected_before_any_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(joy_body()))
        .expect(0)
        .mount(&server)
        .await;
    let client = client_for(&server);

    for text in ["", "   "] {
        let err = client.analyze(text).await.unwrap_err();
        assert_eq!(err.field(), Some("text"), "input {text:?}");
    }

    let too_long = vec!["word"; 101].join(" ");
    let err = client.analyze(&too_long).await.unwrap_err();
    assert_eq!(err.field(), Some("text"));

    let err = client.analyze_batch::<&str>(&[]).await.unwrap_err();
    assert_eq!(err.field(), Some("texts"));

    let err = client.analyze_batch(&["ok"; 11]).await.unwrap_err();
    assert_eq!(err.field(), Some("texts"));
    assert!(err.message().contains("11"));

    let err = client.analyze_batch(&["ok", "", "ok"]).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(err.message().contains("index 1"), "{}", err.message());
}

// ---------------------------------------------------------------------------
// HTTP failures
// ---------------------------------------------------------------------------

#[tokio::test]
async fn rate_limit_carries_retry_after_seconds() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ANALYZE_PATH))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "5"))
        .mount(&server)
        .await;

    let err = client_for(&server).analyze("hello").await.unwrap_err();

    assert!(matches!(
        err,
        EmotionError::RateLimit {
            retry_after: Some(5),
            ..
        }
    ));
}

#[tokio::test]
async fn rate_limit_without_header_has_no_retry_after() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ANALYZE_BATCH_PATH))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({ "detail": "slow down" })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .analyze_batch(&["hello"])
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::RateLimit);
    assert_eq!(err.retry_after(), None);
}

#[tokio::test]
async fn api_error_uses_detail_from_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ANALYZE_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string(r#"{"detail":"boom"}"#))
        .mount(&server)
        .await;

    let err = client_for(&server).analyze("hello").await.unwrap_err();

    match err {
        EmotionError::Api {
            status,
            body,
            message,
        } => {
            assert_eq!(status, 500);
            assert_eq!(message, "boom");
            assert_eq!(body, r#"{"detail":"boom"}"#);
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn api_error_without_json_body_reports_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ANALYZE_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&server)
        .await;

    let err = client_for(&server).analyze("hello").await.unwrap_err();

    assert_eq!(err.status_code(), Some(503));
    assert_eq!(err.message(), "request failed with status 503");
    assert!(matches!(err, EmotionError::Api { ref body, .. } if body == "Service Unavailable"));
}

#[tokio::test]
async fn api_error_falls_back_to_message_then_error_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ANALYZE_PATH))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "error": "bad", "message": "invalid text" })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).analyze("hello").await.unwrap_err();

    assert_eq!(err.status_code(), Some(400));
    assert_eq!(err.message(), "invalid text");
}

// ---------------------------------------------------------------------------
// Timeouts and transport failures
// ---------------------------------------------------------------------------

#[tokio::test]
async fn slow_response_times_out_with_configured_deadline() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ANALYZE_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(joy_body())
                .set_delay(Duration::from_millis(200)),
        )
        .mount(&server)
        .await;

    let client = EmotionClient::builder()
        .base_url(server.uri())
        .timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let err = client.analyze("hello").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Timeout);
    assert_eq!(err.timeout_ms(), Some(50));
}

#[tokio::test]
async fn undecodable_success_body_is_a_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ANALYZE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server).analyze("hello").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Network);
    assert!(std::error::Error::source(&err).is_some());
}

#[tokio::test]
async fn refused_connection_is_a_network_error() {
    // Bind then drop a listener so the port is known to be closed.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = EmotionClient::builder()
        .base_url(format!("http://127.0.0.1:{port}"))
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();

    let err = client.analyze("hello").await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Network);
    assert!(std::error::Error::source(&err).is_some());
}
