// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! End-to-end tests for the fact-check route against mocked providers.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use verity_llm_groq::GroqClient;
use verity_search_newsapi::NewsApiClient;
use verity_server::{create_router, AppState};
use verity_server_config::PathsConfig;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_app(news_url: &str, llm_url: &str) -> Router {
	let state = AppState {
		news_client: Arc::new(NewsApiClient::new("news-key").with_base_url(news_url)),
		llm_client: Arc::new(GroqClient::new("groq-key").with_base_url(llm_url)),
		llm_model: "llama3-8b-8192".to_string(),
		llm_max_tokens: 300,
		news_configured: true,
		llm_configured: true,
	};
	create_router(state, &PathsConfig::default())
}

fn fact_check_request(query: &str) -> Request<Body> {
	Request::builder()
		.method("POST")
		.uri("/api/fact-check")
		.header("content-type", "application/json")
		.body(Body::from(
			serde_json::json!({ "query": query }).to_string(),
		))
		.unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
	let bytes = response.into_body().collect().await.unwrap().to_bytes();
	serde_json::from_slice(&bytes).unwrap()
}

fn news_article(title: &str, description: Option<&str>) -> serde_json::Value {
	serde_json::json!({
		"source": {"id": null, "name": "Example"},
		"author": "Reporter",
		"title": title,
		"description": description,
		"url": "https://example.com/article",
		"urlToImage": null,
		"publishedAt": "2024-11-02T10:00:00Z",
		"content": "..."
	})
}

fn verdict_response(text: &str) -> ResponseTemplate {
	ResponseTemplate::new(200).set_body_json(serde_json::json!({
		"id": "chatcmpl-1",
		"model": "llama3-8b-8192",
		"choices": [
			{"index": 0, "message": {"role": "assistant", "content": text}}
		]
	}))
}

#[tokio::test]
async fn truncates_to_three_articles_in_provider_order() {
	let news = MockServer::start().await;
	let llm = MockServer::start().await;

	Mock::given(method("GET"))
		.and(path("/everything"))
		.respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
			"status": "ok",
			"totalResults": 5,
			"articles": [
				news_article("One", Some("a")),
				news_article("Two", Some("b")),
				news_article("Three", Some("c")),
				news_article("Four", Some("d")),
				news_article("Five", Some("e"))
			]
		})))
		.mount(&news)
		.await;
	Mock::given(method("POST"))
		.and(path("/chat/completions"))
		.respond_with(verdict_response("Likely true."))
		.mount(&llm)
		.await;

	let response = test_app(&news.uri(), &llm.uri())
		.oneshot(fact_check_request("sea levels are rising"))
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::OK);
	let body = body_json(response).await;
	assert_eq!(body["result"], "Likely true.");

	let articles = body["articles"].as_array().unwrap();
	assert_eq!(articles.len(), 3);
	assert_eq!(articles[0]["title"], "One");
	assert_eq!(articles[1]["title"], "Two");
	assert_eq!(articles[2]["title"], "Three");

	// The prompt must only carry the first three articles.
	let requests = llm.received_requests().await.unwrap();
	assert_eq!(requests.len(), 1);
	let sent: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
	let user_prompt = sent["messages"][1]["content"].as_str().unwrap();
	assert!(user_prompt.contains("Three: c"));
	assert!(!user_prompt.contains("Four: d"));
}

#[tokio::test]
async fn prompt_embeds_claim_and_article_lines_in_order() {
	let news = MockServer::start().await;
	let llm = MockServer::start().await;

	Mock::given(method("GET"))
		.and(path("/everything"))
		.and(query_param("q", "the earth is flat"))
		.and(query_param("apiKey", "news-key"))
		.respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
			"status": "ok",
			"totalResults": 2,
			"articles": [
				news_article("NASA photos", Some("Earth imagery from orbit")),
				news_article("Shape of the world", Some("A history of geodesy"))
			]
		})))
		.mount(&news)
		.await;
	Mock::given(method("POST"))
		.and(path("/chat/completions"))
		.respond_with(verdict_response("The claim is false."))
		.mount(&llm)
		.await;

	let response = test_app(&news.uri(), &llm.uri())
		.oneshot(fact_check_request("the earth is flat"))
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::OK);
	let body = body_json(response).await;
	assert_eq!(body["articles"].as_array().unwrap().len(), 2);
	assert!(!body["result"].as_str().unwrap().is_empty());

	let requests = llm.received_requests().await.unwrap();
	let sent: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();

	assert_eq!(sent["model"], "llama3-8b-8192");
	assert_eq!(sent["max_tokens"], 300);
	assert_eq!(
		sent["messages"][0]["content"],
		"You are a helpful assistant that fact-checks news articles."
	);
	assert_eq!(
		sent["messages"][1]["content"],
		"Based on the following articles, fact-check the statement: \"the earth is flat\". \
		 Here are the articles:\nNASA photos: Earth imagery from orbit\n\
		 Shape of the world: A history of geodesy"
	);
}

#[tokio::test]
async fn zero_articles_still_produce_a_verdict() {
	let news = MockServer::start().await;
	let llm = MockServer::start().await;

	Mock::given(method("GET"))
		.and(path("/everything"))
		.respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
			"status": "ok",
			"totalResults": 0,
			"articles": []
		})))
		.mount(&news)
		.await;
	Mock::given(method("POST"))
		.and(path("/chat/completions"))
		.respond_with(verdict_response("Unverifiable without sources."))
		.mount(&llm)
		.await;

	let response = test_app(&news.uri(), &llm.uri())
		.oneshot(fact_check_request("anything"))
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::OK);
	let body = body_json(response).await;
	assert_eq!(body["articles"].as_array().unwrap().len(), 0);

	let requests = llm.received_requests().await.unwrap();
	let sent: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
	let user_prompt = sent["messages"][1]["content"].as_str().unwrap();
	assert!(user_prompt.ends_with("Here are the articles:\n"));
}

#[tokio::test]
async fn news_failure_short_circuits_without_calling_the_model() {
	let news = MockServer::start().await;
	let llm = MockServer::start().await;

	Mock::given(method("GET"))
		.respond_with(ResponseTemplate::new(500))
		.mount(&news)
		.await;
	// The model provider must never be called.
	Mock::given(method("POST"))
		.respond_with(verdict_response("unreachable"))
		.expect(0)
		.mount(&llm)
		.await;

	let response = test_app(&news.uri(), &llm.uri())
		.oneshot(fact_check_request("anything"))
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
	let bytes = response.into_body().collect().await.unwrap().to_bytes();
	assert_eq!(
		std::str::from_utf8(&bytes).unwrap(),
		r#"{"error":"Failed to process your request."}"#
	);
}

#[tokio::test]
async fn model_failure_yields_the_same_generic_error() {
	let news = MockServer::start().await;
	let llm = MockServer::start().await;

	Mock::given(method("GET"))
		.and(path("/everything"))
		.respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
			"status": "ok",
			"totalResults": 1,
			"articles": [news_article("One", Some("a"))]
		})))
		.mount(&news)
		.await;
	Mock::given(method("POST"))
		.respond_with(ResponseTemplate::new(429))
		.mount(&llm)
		.await;

	let response = test_app(&news.uri(), &llm.uri())
		.oneshot(fact_check_request("anything"))
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
	let bytes = response.into_body().collect().await.unwrap().to_bytes();
	assert_eq!(
		std::str::from_utf8(&bytes).unwrap(),
		r#"{"error":"Failed to process your request."}"#
	);
}

#[tokio::test]
async fn empty_completion_is_an_upstream_failure() {
	let news = MockServer::start().await;
	let llm = MockServer::start().await;

	Mock::given(method("GET"))
		.respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
			"status": "ok",
			"totalResults": 1,
			"articles": [news_article("One", Some("a"))]
		})))
		.mount(&news)
		.await;
	Mock::given(method("POST"))
		.respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
			"id": "chatcmpl-1",
			"choices": []
		})))
		.mount(&llm)
		.await;

	let response = test_app(&news.uri(), &llm.uri())
		.oneshot(fact_check_request("anything"))
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn article_provider_fields_round_trip_to_the_caller() {
	let news = MockServer::start().await;
	let llm = MockServer::start().await;

	Mock::given(method("GET"))
		.respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
			"status": "ok",
			"totalResults": 1,
			"articles": [news_article("One", Some("a"))]
		})))
		.mount(&news)
		.await;
	Mock::given(method("POST"))
		.respond_with(verdict_response("OK."))
		.mount(&llm)
		.await;

	let response = test_app(&news.uri(), &llm.uri())
		.oneshot(fact_check_request("anything"))
		.await
		.unwrap();

	let body = body_json(response).await;
	let article = &body["articles"][0];
	assert_eq!(article["source"]["name"], "Example");
	assert_eq!(article["url"], "https://example.com/article");
	assert_eq!(article["publishedAt"], "2024-11-02T10:00:00Z");
	assert_eq!(article["author"], "Reporter");
}

#[tokio::test]
async fn health_reports_ok() {
	let news = MockServer::start().await;
	let llm = MockServer::start().await;

	let response = test_app(&news.uri(), &llm.uri())
		.oneshot(
			Request::builder()
				.method("GET")
				.uri("/health")
				.body(Body::empty())
				.unwrap(),
		)
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::OK);
	let body = body_json(response).await;
	assert_eq!(body["status"], "ok");
	assert_eq!(body["news_configured"], true);
	assert_eq!(body["llm_configured"], true);
}
