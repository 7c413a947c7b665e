use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};

use gemini_client::{GeminiClient, GeminiError};

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn text_reply(text: &str) -> Value {
    json!({ "candidates": [{ "content": { "parts": [{ "text": text }] } }] })
}

#[tokio::test]
async fn analyze_round_trip() {
    let app = Router::new().route(
        "/models/{action}",
        post(|Path(action): Path<String>, Json(body): Json<Value>| async move {
            assert!(action.starts_with("gemini-1.5-pro-latest:generateContent"));
            assert_eq!(
                body["generationConfig"]["responseMimeType"],
                "application/json"
            );
            Json(text_reply(
                r#"{"packaging": 80.0, "delivery": 75.5, "admin_response": 60.0, "product_condition": 90.25}"#,
            ))
        }),
    );
    let client = GeminiClient::new("test-key").with_base_url(&serve(app).await);

    let scores = client.analyze("pengiriman cepat\nkemasan rapi\n").await.unwrap();
    assert_eq!(scores.delivery, 75.5);
    assert_eq!(scores.product_condition, 90.25);
}

#[tokio::test]
async fn summarize_round_trip() {
    let app = Router::new().route(
        "/models/{action}",
        post(|| async { Json(text_reply(r#"{"summary": "Produk memuaskan."}"#)) }),
    );
    let client = GeminiClient::new("test-key").with_base_url(&serve(app).await);

    let summary = client.summarize("mantap\n").await.unwrap();
    assert_eq!(summary, "Produk memuaskan.");
}

#[tokio::test]
async fn api_error_carries_status() {
    let app = Router::new().route(
        "/models/{action}",
        post(|| async { (StatusCode::TOO_MANY_REQUESTS, "quota exceeded") }),
    );
    let client = GeminiClient::new("test-key").with_base_url(&serve(app).await);

    let err = client.summarize("mantap\n").await.unwrap_err();
    assert!(matches!(err, GeminiError::Api { status: 429, .. }));
}

#[tokio::test]
async fn reply_that_is_not_the_expected_json_is_a_decode_error() {
    let app = Router::new().route(
        "/models/{action}",
        post(|| async { Json(text_reply("maaf, saya tidak bisa")) }),
    );
    let client = GeminiClient::new("test-key").with_base_url(&serve(app).await);

    let err = client.analyze("mantap\n").await.unwrap_err();
    assert!(matches!(err, GeminiError::Decode(_)));
}

#[tokio::test]
async fn empty_candidates_is_an_empty_error() {
    let app = Router::new().route(
        "/models/{action}",
        post(|| async { Json(json!({ "candidates": [] })) }),
    );
    let client = GeminiClient::new("test-key").with_base_url(&serve(app).await);

    let err = client.summarize("mantap\n").await.unwrap_err();
    assert!(matches!(err, GeminiError::Empty));
}
