// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Router-level tests for the search page.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
	body::Body,
	http::{header, Request, StatusCode},
	Router,
};
use imagefinder_common_secret::Secret;
use imagefinder_search_pexels::{ImageResult, ImageSearchClient, PexelsError};
use imagefinder_server::{create_app_state, create_router, AppState, ServerConfig};
use serde_json::json;
use tower::ServiceExt;
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Counts calls and returns a fixed set of photos.
struct CountingClient {
	calls: AtomicUsize,
	images: Vec<ImageResult>,
}

impl CountingClient {
	fn with_images(images: Vec<ImageResult>) -> Arc<Self> {
		Arc::new(Self {
			calls: AtomicUsize::new(0),
			images,
		})
	}

	fn calls(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}
}

#[async_trait]
impl ImageSearchClient for CountingClient {
	async fn search(&self, _query: &str) -> Result<Vec<ImageResult>, PexelsError> {
		self.calls.fetch_add(1, Ordering::SeqCst);
		Ok(self.images.clone())
	}
}

fn two_photos() -> Vec<ImageResult> {
	vec![
		ImageResult::new(
			"https://www.pexels.com/photo/1/",
			"https://images.pexels.com/photos/1/tiny.jpeg",
			"Ada",
		),
		ImageResult::new(
			"https://www.pexels.com/photo/2/",
			"https://images.pexels.com/photos/2/tiny.jpeg",
			"Grace",
		),
	]
}

fn app_with(client: Arc<CountingClient>) -> Router {
	create_router(AppState::new(client, true))
}

fn form_post(body: &'static str) -> Request<Body> {
	Request::builder()
		.method("POST")
		.uri("/")
		.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
		.body(Body::from(body))
		.unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
	let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
		.await
		.unwrap();
	String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn get_renders_empty_form_without_searching() {
	let client = CountingClient::with_images(two_photos());
	let app = app_with(client.clone());

	let response = app
		.oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::OK);
	let html = body_string(response).await;
	assert!(html.contains("<form method=\"post\""));
	assert!(!html.contains("tiny.jpeg"));
	assert_eq!(client.calls(), 0);
}

#[tokio::test]
async fn post_empty_query_renders_error_without_searching() {
	let client = CountingClient::with_images(two_photos());
	let app = app_with(client.clone());

	let response = app.oneshot(form_post("query=")).await.unwrap();

	assert_eq!(response.status(), StatusCode::OK);
	let html = body_string(response).await;
	assert!(html.contains("This field is required."));
	assert!(!html.contains("tiny.jpeg"));
	assert_eq!(client.calls(), 0);
}

#[tokio::test]
async fn post_missing_field_renders_error_without_searching() {
	let client = CountingClient::with_images(two_photos());
	let app = app_with(client.clone());

	let response = app.oneshot(form_post("")).await.unwrap();

	assert_eq!(response.status(), StatusCode::OK);
	assert_eq!(client.calls(), 0);
}

#[tokio::test]
async fn post_without_form_body_renders_error_without_searching() {
	let client = CountingClient::with_images(two_photos());
	let app = app_with(client.clone());

	let response = app
		.oneshot(
			Request::builder()
				.method("POST")
				.uri("/")
				.body(Body::empty())
				.unwrap(),
		)
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::OK);
	let html = body_string(response).await;
	assert!(html.contains("This field is required."));
	assert!(!html.contains("tiny.jpeg"));
	assert_eq!(client.calls(), 0);
}

#[tokio::test]
async fn post_with_json_body_is_treated_as_missing_query() {
	let client = CountingClient::with_images(two_photos());
	let app = app_with(client.clone());

	let response = app
		.oneshot(
			Request::builder()
				.method("POST")
				.uri("/")
				.header(header::CONTENT_TYPE, "application/json")
				.body(Body::from(r#"{"query":"cats"}"#))
				.unwrap(),
		)
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::OK);
	assert!(body_string(response).await.contains("This field is required."));
	assert_eq!(client.calls(), 0);
}

#[tokio::test]
async fn post_query_renders_results() {
	let client = CountingClient::with_images(two_photos());
	let app = app_with(client.clone());

	let response = app.oneshot(form_post("query=cats")).await.unwrap();

	assert_eq!(response.status(), StatusCode::OK);
	let html = body_string(response).await;
	assert_eq!(html.matches("<li>").count(), 2);
	assert!(html.contains("https://images.pexels.com/photos/1/tiny.jpeg"));
	assert!(html.contains("Grace"));
	assert!(html.contains("value=\"cats\""));
	assert_eq!(client.calls(), 1);
}

#[tokio::test]
async fn health_reports_configuration() {
	let app = create_router(AppState::new(CountingClient::with_images(vec![]), false));

	let response = app
		.oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::OK);
	let health: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
	assert_eq!(health["status"], "ok");
	assert_eq!(health["pexels_configured"], false);
}

fn config_for(server: &MockServer) -> ServerConfig {
	let mut config = ServerConfig::default();
	config.pexels.api_key = Some(Secret::new("test-key".to_string()));
	config.pexels.base_url = format!("{}/v1/search", server.uri());
	config
}

#[tokio::test]
async fn end_to_end_search_through_pexels_client() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(query_param("query", "red fox"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({
			"photos": [{
				"url": "https://www.pexels.com/photo/fox-1/",
				"photographer": "Vix",
				"src": { "tiny": "https://images.pexels.com/photos/fox/tiny.jpeg" },
			}],
		})))
		.expect(1)
		.mount(&server)
		.await;

	let app = create_router(create_app_state(&config_for(&server)).unwrap());
	let response = app.oneshot(form_post("query=red+fox")).await.unwrap();

	assert_eq!(response.status(), StatusCode::OK);
	let html = body_string(response).await;
	assert!(html.contains("https://images.pexels.com/photos/fox/tiny.jpeg"));
	assert!(html.contains("Vix"));
}

#[tokio::test]
async fn upstream_rejection_is_bad_gateway() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.respond_with(ResponseTemplate::new(401))
		.expect(1)
		.mount(&server)
		.await;

	let app = create_router(create_app_state(&config_for(&server)).unwrap());
	let response = app.oneshot(form_post("query=cats")).await.unwrap();

	assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
	let error: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
	assert_eq!(error["error"], "upstream_error");
	assert!(error["message"].as_str().unwrap().contains("401"));
}

#[tokio::test]
async fn malformed_upstream_body_is_bad_gateway() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({ "photos": "none" })))
		.mount(&server)
		.await;

	let app = create_router(create_app_state(&config_for(&server)).unwrap());
	let response = app.oneshot(form_post("query=cats")).await.unwrap();

	assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn get_never_reaches_upstream() {
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.respond_with(ResponseTemplate::new(200).set_body_json(json!({ "photos": [] })))
		.expect(0)
		.mount(&server)
		.await;

	let app = create_router(create_app_state(&config_for(&server)).unwrap());
	let response = app
		.oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::OK);
}
