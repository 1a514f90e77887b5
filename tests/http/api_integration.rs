//! Integration tests for the Ishtar REST API
//!
//! Tests the search endpoints end to end through the router.

use std::sync::Arc;

use axum::{
    body::{Body, Bytes},
    http::{Request, StatusCode},
    Router,
};
use ishtar::core::content::ContentSource;
use ishtar::core::search::BuildReport;
use ishtar::core::types::*;
use ishtar::http;
use tower::ServiceExt as TowerServiceExt;

use crate::common::{
    create_services_with_sources, create_test_services, FailingSource, StaticSource,
};

/// Create a test application over the site's content
fn create_test_app() -> Router {
    http::router(Arc::new(create_test_services()))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Bytes) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), 1_000_000)
        .await
        .unwrap();
    (status, body)
}

#[tokio::test]
async fn test_health_endpoint() {
    let (status, body) = get(create_test_app(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    let health: HealthResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(health.status, "ok");
    assert!(!health.version.is_empty());
}

#[tokio::test]
async fn test_search_endpoint() {
    let (status, body) = get(create_test_app(), "/api/v1/search?q=rag%20copilots").await;

    assert_eq!(status, StatusCode::OK);
    let response: SearchResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(response.query, "rag copilots");
    assert_eq!(response.count, response.results.len());
    assert!(!response.results.is_empty());
    assert!(response
        .results
        .windows(2)
        .all(|w| w[0].score >= w[1].score));
}

#[tokio::test]
async fn test_search_result_uses_type_key() {
    let (_, body) = get(create_test_app(), "/api/v1/search?q=ai&limit=1").await;

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let first = &json["results"][0];
    assert!(first["type"].is_string());
    assert!(first["excerpt"].is_string());
    assert!(first.get("doc_type").is_none());
}

#[tokio::test]
async fn test_search_type_filter() {
    let (status, body) = get(create_test_app(), "/api/v1/search?q=ai&type=faq").await;

    assert_eq!(status, StatusCode::OK);
    let response: SearchResponse = serde_json::from_slice(&body).unwrap();
    assert!(response.results.iter().all(|r| r.doc_type == "faq"));
}

#[tokio::test]
async fn test_search_unknown_type_searches_everything() {
    let (_, filtered) = get(create_test_app(), "/api/v1/search?q=ai&type=podcast").await;
    let (_, unfiltered) = get(create_test_app(), "/api/v1/search?q=ai").await;

    let filtered: SearchResponse = serde_json::from_slice(&filtered).unwrap();
    let unfiltered: SearchResponse = serde_json::from_slice(&unfiltered).unwrap();
    assert_eq!(filtered.results, unfiltered.results);
}

#[tokio::test]
async fn test_search_limit_is_capped() {
    let (_, body) = get(create_test_app(), "/api/v1/search?q=a&limit=1000").await;

    let response: SearchResponse = serde_json::from_slice(&body).unwrap();
    assert!(response.count <= 50);
}

#[tokio::test]
async fn test_search_blank_query_is_empty() {
    for uri in ["/api/v1/search", "/api/v1/search?q=", "/api/v1/search?q=%20%20"] {
        let (status, body) = get(create_test_app(), uri).await;

        assert_eq!(status, StatusCode::OK, "{uri}");
        let response: SearchResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response.count, 0, "{uri}");
    }
}

#[tokio::test]
async fn test_search_query_too_long() {
    let uri = format!("/api/v1/search?q={}", "a".repeat(501));
    let (status, body) = get(create_test_app(), &uri).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], 400);
    assert!(json["error"].as_str().unwrap().contains("500"));
}

#[tokio::test]
async fn test_index_endpoint_reports_failed_source() {
    let mut sources: Vec<Arc<dyn ContentSource>> = ishtar::core::content::default_sources();
    sources.push(Arc::new(FailingSource("webinars")));
    let app = http::router(Arc::new(create_services_with_sources(sources)));

    let (status, body) = get(app, "/api/v1/index").await;

    assert_eq!(status, StatusCode::OK);
    let report: BuildReport = serde_json::from_slice(&body).unwrap();
    assert_eq!(report.sources.len(), 6);
    assert_eq!(report.succeeded(), 5);
    assert_eq!(report.failed()[0].source, "webinars");

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["sources"][5]["status"], "failed");
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let (status, _) = get(create_test_app(), "/api/v1/sessions").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_search_without_limit_returns_up_to_max() {
    let posts = (0..60)
        .map(|i| {
            NewDocument::new(
                format!("Agents part {i}"),
                "agents in production",
                format!("/blog/agents-{i}"),
                DocType::Blog,
            )
        })
        .collect();
    let services = create_services_with_sources(vec![Arc::new(StaticSource::new("blog", posts))]);
    let app = http::router(Arc::new(services));

    let (_, body) = get(app.clone(), "/api/v1/search?q=agents").await;
    let response: SearchResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(response.count, 50);

    let (_, body) = get(app, "/api/v1/search?q=agents&limit=5").await;
    let response: SearchResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(response.count, 5);
}
