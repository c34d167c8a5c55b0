// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Upstream error boundary.
//!
//! Every failure from either provider collapses into one fixed 500
//! response. The underlying cause is logged server-side and never surfaces
//! to the caller.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

/// Fixed message returned to the caller for any upstream failure.
pub const GENERIC_ERROR_MESSAGE: &str = "Failed to process your request.";

/// Failure in either outbound call of the fact-check flow.
#[derive(Debug, Error)]
pub enum UpstreamError {
	#[error("article search failed: {0}")]
	Search(#[from] verity_search_newsapi::NewsApiError),

	#[error("verdict generation failed: {0}")]
	Llm(#[from] verity_llm_groq::GroqError),

	/// The model provider answered without any completion text.
	#[error("model returned an empty completion")]
	EmptyCompletion,
}

impl IntoResponse for UpstreamError {
	fn into_response(self) -> Response {
		error!(error = %self, "Upstream failure while processing fact-check request");
		(
			StatusCode::INTERNAL_SERVER_ERROR,
			Json(serde_json::json!({ "error": GENERIC_ERROR_MESSAGE })),
		)
			.into_response()
	}
}
