// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Groq API client implementation.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, error, instrument, trace};

use crate::error::GroqError;
use crate::types::{GroqRequest, GroqResponse};

const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Client for the Groq chat-completions endpoint.
///
/// Requests are made exactly once; failures are not retried.
#[derive(Debug, Clone)]
pub struct GroqClient {
	http_client: Client,
	api_key: String,
	base_url: String,
}

impl GroqClient {
	/// Creates a new Groq client with the given API key.
	pub fn new(api_key: impl Into<String>) -> Self {
		let http_client = verity_common_http::builder()
			.timeout(REQUEST_TIMEOUT)
			.build()
			.expect("Failed to create HTTP client");

		Self {
			http_client,
			api_key: api_key.into(),
			base_url: DEFAULT_BASE_URL.to_string(),
		}
	}

	/// Sets a custom base URL for the API (useful for testing).
	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = base_url.into();
		self
	}

	/// Sends a chat-completion request.
	#[instrument(skip(self, request), fields(model = %request.model))]
	pub async fn chat_completion(&self, request: GroqRequest) -> Result<GroqResponse, GroqError> {
		let url = format!("{}/chat/completions", self.base_url);

		debug!(url = %url, "Sending chat-completion request to Groq");

		let response = self
			.http_client
			.post(&url)
			.bearer_auth(&self.api_key)
			.json(&request)
			.send()
			.await
			.map_err(|e| {
				if e.is_timeout() {
					error!("Request timed out");
					return GroqError::Timeout;
				}
				error!(error = %e, "Network error during Groq request");
				GroqError::Network(e)
			})?;

		let status = response.status();
		debug!(status = %status, "Received response from Groq");

		if !status.is_success() {
			let status_code = status.as_u16();
			let body = response.text().await.unwrap_or_default();

			if status_code == 401 || status_code == 403 {
				error!(status = status_code, "Unauthorized request");
				return Err(GroqError::Unauthorized);
			}

			if status_code == 429 {
				error!(status = status_code, "Rate limit exceeded");
				return Err(GroqError::RateLimited);
			}

			error!(status = status_code, body = %body, "Groq API error");
			return Err(GroqError::ApiError {
				status: status_code,
				message: body,
			});
		}

		let body = response.text().await.map_err(|e| {
			error!(error = %e, "Failed to read response body");
			GroqError::Network(e)
		})?;

		trace!(body = %body, "Response body");

		let completion: GroqResponse = serde_json::from_str(&body).map_err(|e| {
			error!(error = %e, "Failed to parse Groq response");
			GroqError::InvalidResponse(format!("JSON parse error: {e}"))
		})?;

		debug!(
			choices = completion.choices.len(),
			"Chat completion received successfully"
		);

		Ok(completion)
	}
}
