//! Drives the router end to end with in-process doubles behind the
//! analyzer's trait seams: routing, auth, status mapping, and the wire
//! field names of the composed result.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use ulascan_api::auth::issue_token;
use ulascan_api::{create_app, AppState};
use ulascan_common::{AspectScores, Product, ProductRef, Review, SentimentCounts};
use ulascan_engine::{
    Analyzer, MemoryHistoryStore, ProductLinkResolver, ReviewInsights, ReviewSource,
    SentimentModel,
};

const JWT_SECRET: &str = "test-secret";

struct StubResolver;

#[async_trait]
impl ProductLinkResolver for StubResolver {
    async fn resolve(&self, raw_url: &str) -> tokopedia_client::Result<ProductRef> {
        if raw_url.is_empty() {
            return Err(tokopedia_client::TokopediaError::MissingUrl);
        }
        Ok(ProductRef {
            shop_domain: "someshop".to_string(),
            product_key: "somekey".to_string(),
            url: "https://www.tokopedia.com/someshop/somekey".to_string(),
        })
    }
}

struct StubSource;

#[async_trait]
impl ReviewSource for StubSource {
    async fn product(&self, _product: &ProductRef) -> tokopedia_client::Result<Product> {
        Ok(Product {
            product_id: "777".to_string(),
            name: "Sepatu Lari".to_string(),
            description: "Ringan.".to_string(),
            shop_name: "Toko Maju".to_string(),
            image_urls: vec![],
        })
    }

    async fn reviews(
        &self,
        _product_id: &str,
        _product_url: &str,
    ) -> tokopedia_client::Result<Vec<Review>> {
        Ok(vec![
            Review {
                message: "mantap".to_string(),
                rating: 5,
            },
            Review {
                message: "oke".to_string(),
                rating: 4,
            },
        ])
    }

    async fn shop_avatar(&self, _shop_domain: &str) -> tokopedia_client::Result<String> {
        Ok("https://img.example/ava.jpg".to_string())
    }
}

struct StubSentiment;

#[async_trait]
impl SentimentModel for StubSentiment {
    async fn predict(&self, _statements: &[String]) -> sentiment_client::Result<SentimentCounts> {
        Ok(SentimentCounts {
            positive: 2,
            negative: 0,
        })
    }
}

struct StubInsights;

#[async_trait]
impl ReviewInsights for StubInsights {
    async fn analyze(&self, _reviews: &str) -> gemini_client::Result<AspectScores> {
        Ok(AspectScores {
            packaging: 80.0,
            delivery: 70.0,
            admin_response: 60.0,
            product_condition: 90.0,
        })
    }

    async fn summarize(&self, _reviews: &str) -> gemini_client::Result<String> {
        Ok("Produk memuaskan.".to_string())
    }
}

fn test_app() -> axum::Router {
    let history = Arc::new(MemoryHistoryStore::new());
    let analyzer = Analyzer::new(
        Arc::new(StubResolver),
        Arc::new(StubSource),
        Arc::new(StubSentiment),
        Arc::new(StubInsights),
        history.clone(),
    );
    create_app(Arc::new(AppState {
        analyzer,
        history,
        jwt_secret: JWT_SECRET.to_string(),
    }))
}

async fn response_json(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn get_authed(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn health_check() {
    let response = test_app().oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn guest_analysis_returns_the_composed_result() {
    let response = test_app()
        .oneshot(get(
            "/api/ml/guest/analysis?product_url=https://www.tokopedia.com/someshop/somekey",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response.into_body()).await;
    assert_eq!(body["product_name"], "Sepatu Lari");
    assert_eq!(body["rating"], 2);
    assert_eq!(body["ulasan"], 2);
    assert_eq!(body["bintang"], 4.5);
    assert_eq!(body["shop_avatar"], "https://img.example/ava.jpg");
    assert_eq!(body["count_positive"], 2);
    assert_eq!(body["packaging"], 80.0);
    assert_eq!(body["summary"], "Produk memuaskan.");
}

#[tokio::test]
async fn guest_analysis_without_url_is_a_bad_request() {
    let response = test_app()
        .oneshot(get("/api/ml/guest/analysis"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn user_analysis_requires_a_token() {
    let response = test_app()
        .oneshot(get("/api/ml/analysis?product_url=https://www.tokopedia.com/s/k"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn garbage_token_is_rejected() {
    let response = test_app()
        .oneshot(get_authed(
            "/api/ml/analysis?product_url=https://www.tokopedia.com/s/k",
            "not-a-token",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn user_analysis_persists_history() {
    let app = test_app();
    let user = Uuid::new_v4();
    let token = issue_token(user, JWT_SECRET).unwrap();

    let response = app
        .clone()
        .oneshot(get_authed(
            "/api/ml/analysis?product_url=https://www.tokopedia.com/someshop/somekey",
            &token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(get_authed("/api/history", &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response.into_body()).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["histories"][0]["product_id"], "777");
    assert_eq!(body["histories"][0]["product_name"], "Sepatu Lari");
}

#[tokio::test]
async fn history_is_empty_for_a_fresh_user() {
    let token = issue_token(Uuid::new_v4(), JWT_SECRET).unwrap();
    let response = test_app()
        .oneshot(get_authed("/api/history?page=2&limit=5", &token))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response.into_body()).await;
    assert_eq!(body["total"], 0);
    assert_eq!(body["page"], 2);
    assert_eq!(body["limit"], 5);
}

#[tokio::test]
async fn unknown_history_record_is_not_found() {
    let token = issue_token(Uuid::new_v4(), JWT_SECRET).unwrap();
    let response = test_app()
        .oneshot(get_authed(
            &format!("/api/history/{}", Uuid::new_v4()),
            &token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
