// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! NewsAPI client implementation.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error, instrument, trace};

use crate::error::NewsApiError;
use crate::types::{Article, NewsRequest, NewsResponse};

const DEFAULT_BASE_URL: &str = "https://newsapi.org/v2";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the NewsAPI `everything` endpoint.
///
/// Requests are made exactly once; failures are not retried.
#[derive(Debug, Clone)]
pub struct NewsApiClient {
	http_client: Client,
	api_key: String,
	base_url: String,
}

#[derive(Debug, Deserialize)]
struct NewsApiEnvelope {
	status: String,
	#[serde(default)]
	articles: Vec<Article>,
	#[serde(default)]
	message: Option<String>,
}

impl NewsApiClient {
	/// Creates a new NewsAPI client with the given API key.
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

	/// Searches articles matching the query, in provider order.
	#[instrument(skip(self), fields(query = %request.query))]
	pub async fn search(&self, request: NewsRequest) -> Result<NewsResponse, NewsApiError> {
		let url = format!("{}/everything", self.base_url);

		debug!(url = %url, "Sending article search request to NewsAPI");

		let response = self
			.http_client
			.get(&url)
			.query(&[("q", request.query.as_str()), ("apiKey", &self.api_key)])
			.send()
			.await
			.map_err(|e| {
				if e.is_timeout() {
					error!("Request timed out");
					return NewsApiError::Timeout;
				}
				error!(error = %e, "Network error during NewsAPI request");
				NewsApiError::Network(e)
			})?;

		let status = response.status();
		debug!(status = %status, "Received response from NewsAPI");

		if !status.is_success() {
			let status_code = status.as_u16();
			let body = response.text().await.unwrap_or_default();

			if status_code == 401 || status_code == 403 {
				error!(status = status_code, "Unauthorized request");
				return Err(NewsApiError::Unauthorized);
			}

			if status_code == 429 {
				error!(status = status_code, "Rate limit exceeded");
				return Err(NewsApiError::RateLimited);
			}

			error!(status = status_code, body = %body, "NewsAPI error");
			return Err(NewsApiError::ApiError {
				status: status_code,
				message: body,
			});
		}

		let body = response.text().await.map_err(|e| {
			error!(error = %e, "Failed to read response body");
			NewsApiError::Network(e)
		})?;

		trace!(body = %body, "Response body");

		let envelope: NewsApiEnvelope = serde_json::from_str(&body).map_err(|e| {
			error!(error = %e, "Failed to parse NewsAPI response");
			NewsApiError::InvalidResponse(format!("JSON parse error: {e}"))
		})?;

		// NewsAPI can report errors inside a 2xx envelope.
		if envelope.status != "ok" {
			let message = envelope.message.unwrap_or_default();
			error!(message = %message, "NewsAPI reported an error envelope");
			return Err(NewsApiError::ApiError {
				status: status.as_u16(),
				message,
			});
		}

		debug!(
			result_count = envelope.articles.len(),
			"Article search completed successfully"
		);

		Ok(NewsResponse {
			query: request.query,
			articles: envelope.articles,
		})
	}
}
