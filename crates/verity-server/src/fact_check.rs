// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Fact-check HTTP handler.
//!
//! Linear flow: article search, prompt construction, chat completion. Both
//! outbound calls are strictly sequential; any failure short-circuits to
//! the generic 500 boundary in [`crate::error`].

use axum::extract::{Json, State};
use serde::{Deserialize, Serialize};
use tracing::info;
use verity_llm_groq::{GroqMessage, GroqRequest};
use verity_search_newsapi::{Article, NewsRequest};

use crate::api::AppState;
use crate::error::UpstreamError;
use crate::prompt;

/// Articles forwarded to the model and returned to the caller.
const MAX_ARTICLES: usize = 3;

/// The user-submitted claim to fact-check. No validation of emptiness,
/// length, or encoding is performed.
#[derive(Debug, Clone, Deserialize)]
pub struct ClaimRequest {
	pub query: String,
}

/// The model's verdict alongside the source articles, in provider order.
#[derive(Debug, Clone, Serialize)]
pub struct FactCheckResponse {
	pub result: String,
	pub articles: Vec<Article>,
}

/// POST /api/fact-check
pub async fn fact_check(
	State(state): State<AppState>,
	Json(request): Json<ClaimRequest>,
) -> Result<Json<FactCheckResponse>, UpstreamError> {
	info!(query = %request.query, "Handling fact-check request");

	let search = state
		.news_client
		.search(NewsRequest::new(request.query.clone()))
		.await?;

	let mut articles = search.articles;
	articles.truncate(MAX_ARTICLES);

	let context = prompt::build_context(&articles);
	let user_prompt = prompt::build_user_prompt(&request.query, &context);

	let completion = state
		.llm_client
		.chat_completion(
			GroqRequest::new(
				state.llm_model.clone(),
				vec![
					GroqMessage::system(prompt::SYSTEM_PROMPT),
					GroqMessage::user(user_prompt),
				],
			)
			.with_max_tokens(state.llm_max_tokens),
		)
		.await?;

	let result = completion.first_content().unwrap_or_default().to_string();
	if result.is_empty() {
		return Err(UpstreamError::EmptyCompletion);
	}

	info!(articles = articles.len(), "Fact-check completed");

	Ok(Json(FactCheckResponse { result, articles }))
}
