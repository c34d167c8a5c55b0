// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Router construction and shared application state.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::services::{ServeDir, ServeFile};
use verity_llm_groq::GroqClient;
use verity_search_newsapi::NewsApiClient;
use verity_server_config::{PathsConfig, ServerConfig};

use crate::{fact_check, health};

/// Application state shared across handlers.
///
/// Constructed once at process entry from the resolved configuration;
/// handlers never read the environment mid-request.
#[derive(Clone)]
pub struct AppState {
	pub news_client: Arc<NewsApiClient>,
	pub llm_client: Arc<GroqClient>,
	pub llm_model: String,
	pub llm_max_tokens: u32,
	pub news_configured: bool,
	pub llm_configured: bool,
}

/// Creates the application state from resolved configuration.
///
/// Missing API keys are passed through as empty strings so the upstream
/// rejects at call time rather than failing startup.
pub fn create_app_state(config: &ServerConfig) -> AppState {
	let news_key = config
		.news
		.api_key
		.as_ref()
		.map(|key| key.expose().clone())
		.unwrap_or_default();
	let llm_key = config
		.llm
		.api_key
		.as_ref()
		.map(|key| key.expose().clone())
		.unwrap_or_default();

	let news_client = NewsApiClient::new(news_key).with_base_url(config.news.base_url.clone());
	let llm_client = GroqClient::new(llm_key).with_base_url(config.llm.base_url.clone());

	AppState {
		news_client: Arc::new(news_client),
		llm_client: Arc::new(llm_client),
		llm_model: config.llm.model.clone(),
		llm_max_tokens: config.llm.max_tokens,
		news_configured: config.news.is_configured(),
		llm_configured: config.llm.is_configured(),
	}
}

/// Builds the router: the fact-check API route, the liveness endpoint, and
/// static hosting with the entry page at `/`.
pub fn create_router(state: AppState, paths: &PathsConfig) -> Router {
	Router::new()
		.route("/api/fact-check", post(fact_check::fact_check))
		.route("/health", get(health::health_check))
		.route_service("/", ServeFile::new(paths.index_file()))
		.fallback_service(ServeDir::new(&paths.static_dir))
		.with_state(state)
}
