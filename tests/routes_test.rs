// ABOUTME: HTTP-level tests for the ingredient, condition, recipe, and suggestion routes
// ABOUTME: Drives the full router with tower oneshot over in-memory stores and mocks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use common::{feed_recipe, test_resources};
use okawari_server::external::MockRecipeFeed;
use okawari_server::llm::MockLlmProvider;
use okawari_server::routes;
use serde_json::{json, Value};
use tower::ServiceExt;

fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let resources =
        test_resources(MockRecipeFeed::default(), MockLlmProvider::failing()).await;
    let app = routes::router(resources);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_ready_reports_feed_configuration() {
    // Test resources carry no feed application ID, so readiness degrades.
    let resources =
        test_resources(MockRecipeFeed::default(), MockLlmProvider::failing()).await;
    let app = routes::router(resources);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/ready")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["feed_configured"], false);
    assert_eq!(body["status"], "degraded");
}

#[tokio::test]
async fn test_create_and_list_ingredients() {
    let resources =
        test_resources(MockRecipeFeed::default(), MockLlmProvider::failing()).await;
    let app = routes::router(resources);

    let create = json_request(
        Method::POST,
        "/api/foods",
        &json!({
            "name": "キャベツ",
            "quantity": "1玉",
            "date": "2999-12-31",
            "expiry_type": "消費期限"
        }),
    );
    let response = app.clone().oneshot(create).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/foods")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["ingredients"][0]["name"], "キャベツ");
    assert_eq!(body["ingredients"][0]["expiry_type"], "消費期限");
}

#[tokio::test]
async fn test_past_expiry_date_is_rejected() {
    let resources =
        test_resources(MockRecipeFeed::default(), MockLlmProvider::failing()).await;
    let app = routes::router(resources);

    let create = json_request(
        Method::POST,
        "/api/foods",
        &json!({"name": "牛乳", "date": "2000-01-01"}),
    );
    let response = app.oneshot(create).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("今日以降"));
}

#[tokio::test]
async fn test_latest_condition_and_empty_404() {
    let resources =
        test_resources(MockRecipeFeed::default(), MockLlmProvider::failing()).await;
    let app = routes::router(resources);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/conditions/latest")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    for status in ["少し疲れている", "元気"] {
        let create = json_request(Method::POST, "/api/conditions", &json!({"status": status}));
        let response = app.clone().oneshot(create).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/conditions/latest")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], "元気");
}

#[tokio::test]
async fn test_save_and_list_recipes_passthrough() {
    let resources =
        test_resources(MockRecipeFeed::default(), MockLlmProvider::failing()).await;
    let app = routes::router(resources);

    let save = json_request(
        Method::POST,
        "/api/recipes",
        &json!({
            "recipeId": "123",
            "title": "回鍋肉",
            "ingredients": ["キャベツ 1/4玉", "豚肉 150g"]
        }),
    );
    let response = app.clone().oneshot(save).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/recipes")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = response_json(response).await;
    assert_eq!(body["recipes"][0]["title"], "回鍋肉");
    // All canonical fields come back, defaulted where unset.
    assert_eq!(body["recipes"][0]["catchCopy"], "");
}

#[tokio::test]
async fn test_suggestion_endpoint_fallback_contract() {
    let feed = MockRecipeFeed::new(vec![feed_recipe("回鍋肉", &["キャベツ", "豚肉", "塩"])]);
    let resources = test_resources(feed, MockLlmProvider::failing()).await;
    let app = routes::router(resources);

    let request = json_request(
        Method::POST,
        "/api/suggestions",
        &json!({"ingredients": ["キャベツ", "豚肉"], "condition": "元気"}),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    let recipes = body["recipes"].as_array().unwrap();
    assert!(!recipes.is_empty());
    assert!(recipes.len() <= 5);
    for recipe in recipes {
        assert!(!recipe["instructions"].as_array().unwrap().is_empty());
        for used in recipe["usedIngredients"].as_array().unwrap() {
            let used = used.as_str().unwrap();
            assert!(used == "キャベツ" || used == "豚肉");
        }
    }
}

#[tokio::test]
async fn test_suggestion_endpoint_feed_failure_returns_503() {
    let resources =
        test_resources(MockRecipeFeed::failing(), MockLlmProvider::failing()).await;
    let app = routes::router(resources);

    let request = json_request(
        Method::POST,
        "/api/suggestions",
        &json!({"ingredients": ["キャベツ"], "condition": ""}),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = response_json(response).await;
    assert!(body["error"].as_str().is_some());
}
