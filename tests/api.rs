//! End-to-end HTTP tests exercising the full router

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use place_review_api::api::create_router_with_state;
use place_review_api::config::AppConfig;
use place_review_api::create_app_state;

async fn test_app() -> Router {
    let state = create_app_state(&AppConfig::default(), None)
        .await
        .expect("state");
    create_router_with_state(state)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: Value, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    builder.body(Body::from(body.to_string())).unwrap()
}

fn get_authed(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

/// Register a user and return their token
async fn register(app: &Router, name: &str, phone: &str) -> String {
    let response = app
        .clone()
        .oneshot(post_json(
            "/api/register/",
            json!({ "name": name, "phone_number": phone }),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    body["token"].as_str().unwrap().to_string()
}

/// Submit a review and return the response body
async fn submit_review(
    app: &Router,
    token: &str,
    place_name: &str,
    place_address: &str,
    rating: i64,
    text: &str,
) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(post_json(
            "/api/reviews/",
            json!({
                "place_name": place_name,
                "place_address": place_address,
                "rating": rating,
                "text": text,
            }),
            Some(token),
        ))
        .await
        .unwrap();

    let status = response.status();
    (status, body_json(response).await)
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = test_app().await;

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_ready_endpoint_reports_healthy() {
    let app = test_app().await;

    let response = app
        .oneshot(Request::get("/ready").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"][0]["name"], "place_query_service");
}

#[tokio::test]
async fn test_register_and_login() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/register/",
            json!({ "name": "Alice", "phone_number": "+15551234567" }),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert!(body["token"].is_string());
    assert_eq!(body["user"]["name"], "Alice");
    assert_eq!(body["user"]["phone_number"], "+15551234567");

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/login/",
            json!({ "phone_number": "+15551234567" }),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["token"].is_string());
}

#[tokio::test]
async fn test_login_unknown_phone_rejected() {
    let app = test_app().await;

    let response = app
        .oneshot(post_json(
            "/api/login/",
            json!({ "phone_number": "+15550000000" }),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_register_duplicate_phone_rejected() {
    let app = test_app().await;

    register(&app, "Alice", "+15551234567").await;

    let response = app
        .oneshot(post_json(
            "/api/register/",
            json!({ "name": "Imposter", "phone_number": "+15551234567" }),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_invalid_phone_rejected() {
    let app = test_app().await;

    let response = app
        .oneshot(post_json(
            "/api/register/",
            json!({ "name": "Alice", "phone_number": "012345" }),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_review_creates_place() {
    let app = test_app().await;
    let token = register(&app, "Alice", "+15551234567").await;

    let (status, body) =
        submit_review(&app, &token, "Joe's Diner", "1 Main St", 4, "Solid breakfast").await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Review submitted successfully");
    assert_eq!(body["review"]["rating"], 4);
    assert_eq!(body["review"]["user_name"], "Alice");
    assert!(body["place_id"].is_i64());
}

#[tokio::test]
async fn test_duplicate_review_rejected_across_casing() {
    let app = test_app().await;
    let token = register(&app, "Alice", "+15551234567").await;

    let (status, _) = submit_review(&app, &token, "Joe's Diner", "1 Main St", 4, "First").await;
    assert_eq!(status, StatusCode::CREATED);

    // Different casing resolves to the same place
    let (status, body) =
        submit_review(&app, &token, "JOE'S DINER", "1 MAIN ST", 5, "Second").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"]["message"],
        "You have already reviewed this place"
    );
}

#[tokio::test]
async fn test_two_users_can_review_same_place() {
    let app = test_app().await;
    let alice = register(&app, "Alice", "+15551234567").await;
    let bob = register(&app, "Bob", "+15557654321").await;

    let (status, alice_body) =
        submit_review(&app, &alice, "Joe's Diner", "1 Main St", 4, "Good").await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, bob_body) =
        submit_review(&app, &bob, "Joe's Diner", "1 Main St", 2, "Meh").await;
    assert_eq!(status, StatusCode::CREATED);

    // Same place for both reviews
    assert_eq!(alice_body["place_id"], bob_body["place_id"]);
}

#[tokio::test]
async fn test_search_returns_average_rating() {
    let app = test_app().await;
    let alice = register(&app, "Alice", "+15551234567").await;
    let bob = register(&app, "Bob", "+15557654321").await;

    submit_review(&app, &alice, "Joe's Diner", "1 Main St", 4, "Good").await;
    submit_review(&app, &bob, "Joe's Diner", "1 Main St", 2, "Meh").await;

    let response = app
        .clone()
        .oneshot(get_authed("/api/places/search/?name=Joe's", &alice))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let results = body.as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["name"], "Joe's Diner");
    assert_eq!(results[0]["average_rating"], 3.0);
}

#[tokio::test]
async fn test_search_exact_match_ranked_first() {
    let app = test_app().await;
    let token = register(&app, "Alice", "+15551234567").await;
    let bob = register(&app, "Bob", "+15557654321").await;
    let carol = register(&app, "Carol", "+15559876543").await;

    // Three places; only one is an exact (case-insensitive) match for "cafe"
    submit_review(&app, &token, "Cafe Aroma", "2 Oak Ave", 4, "Nice").await;
    submit_review(&app, &bob, "cafe", "3 Elm St", 5, "Tiny but great").await;
    submit_review(&app, &carol, "Big Cafe", "4 Park Rd", 3, "Okay").await;

    let response = app
        .clone()
        .oneshot(get_authed("/api/places/search/?name=cafe", &token))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let results = body.as_array().unwrap();
    assert_eq!(results.len(), 3);
    // Exact match first, then partial matches alphabetically
    assert_eq!(results[0]["name"], "cafe");
    assert_eq!(results[1]["name"], "Big Cafe");
    assert_eq!(results[2]["name"], "Cafe Aroma");
}

#[tokio::test]
async fn test_search_min_rating_filter() {
    let app = test_app().await;
    let alice = register(&app, "Alice", "+15551234567").await;
    let bob = register(&app, "Bob", "+15557654321").await;

    submit_review(&app, &alice, "High Bar", "1 Main St", 5, "Great").await;
    submit_review(&app, &bob, "Low Bar", "2 Main St", 2, "Poor").await;

    let response = app
        .clone()
        .oneshot(get_authed("/api/places/search/?min_rating=4", &alice))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let results = body.as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["name"], "High Bar");
}

#[tokio::test]
async fn test_search_malformed_min_rating_ignored() {
    let app = test_app().await;
    let alice = register(&app, "Alice", "+15551234567").await;

    submit_review(&app, &alice, "Joe's Diner", "1 Main St", 2, "Meh").await;

    let response = app
        .clone()
        .oneshot(get_authed("/api/places/search/?min_rating=abc", &alice))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_place_detail_own_review_first() {
    let app = test_app().await;
    let alice = register(&app, "Alice", "+15551234567").await;
    let bob = register(&app, "Bob", "+15557654321").await;
    let carol = register(&app, "Carol", "+15559876543").await;

    let (_, body) = submit_review(&app, &alice, "Joe's Diner", "1 Main St", 4, "Good").await;
    let place_id = body["place_id"].as_i64().unwrap();
    submit_review(&app, &bob, "Joe's Diner", "1 Main St", 2, "Meh").await;
    submit_review(&app, &carol, "Joe's Diner", "1 Main St", 3, "Fine").await;

    // Carol views the place; her review must come first
    let response = app
        .clone()
        .oneshot(get_authed(&format!("/api/places/{}/", place_id), &carol))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["name"], "Joe's Diner");
    assert_eq!(body["average_rating"], 3.0);

    let reviews = body["reviews"].as_array().unwrap();
    assert_eq!(reviews.len(), 3);
    assert_eq!(reviews[0]["user_name"], "Carol");
}

#[tokio::test]
async fn test_place_detail_unknown_place() {
    let app = test_app().await;
    let token = register(&app, "Alice", "+15551234567").await;

    let response = app
        .oneshot(get_authed("/api/places/9999/", &token))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_search_reflects_new_reviews() {
    let app = test_app().await;
    let alice = register(&app, "Alice", "+15551234567").await;
    let bob = register(&app, "Bob", "+15557654321").await;

    submit_review(&app, &alice, "Joe's Diner", "1 Main St", 4, "Good").await;

    // Warm the cache
    let response = app
        .clone()
        .oneshot(get_authed("/api/places/search/?name=Joe's", &alice))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap()[0]["average_rating"], 4.0);

    // A new review clears cached results
    submit_review(&app, &bob, "Joe's Diner", "1 Main St", 2, "Meh").await;

    let response = app
        .clone()
        .oneshot(get_authed("/api/places/search/?name=Joe's", &alice))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap()[0]["average_rating"], 3.0);
}

#[tokio::test]
async fn test_endpoints_require_authentication() {
    let app = test_app().await;

    let review = app
        .clone()
        .oneshot(post_json(
            "/api/reviews/",
            json!({
                "place_name": "Joe's Diner",
                "place_address": "1 Main St",
                "rating": 4,
                "text": "Good",
            }),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(review.status(), StatusCode::UNAUTHORIZED);

    let search = app
        .clone()
        .oneshot(
            Request::get("/api/places/search/?name=Joe")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(search.status(), StatusCode::UNAUTHORIZED);

    let detail = app
        .oneshot(Request::get("/api/places/1/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(detail.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_invalid_rating_rejected() {
    let app = test_app().await;
    let token = register(&app, "Alice", "+15551234567").await;

    let (status, _) = submit_review(&app, &token, "Joe's Diner", "1 Main St", 6, "Too good").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = submit_review(&app, &token, "Joe's Diner", "1 Main St", 0, "Too bad").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_api_root_lists_endpoints() {
    let app = test_app().await;

    let response = app
        .oneshot(Request::get("/api/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["endpoints"]["search_places"].is_string());
}

#[tokio::test]
async fn test_me_returns_current_user() {
    let app = test_app().await;
    let token = register(&app, "Alice", "+15551234567").await;

    let response = app
        .oneshot(get_authed("/api/me/", &token))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["name"], "Alice");
}
