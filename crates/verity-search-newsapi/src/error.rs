// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Error types for the NewsAPI client.

use thiserror::Error;

/// Errors that can occur when interacting with NewsAPI.
///
/// The fact-check handler treats all of these uniformly as an upstream
/// failure; the variants exist for server-side logging.
#[derive(Debug, Error)]
pub enum NewsApiError {
	/// Network-level error during HTTP communication.
	#[error("Network error: {0}")]
	Network(#[from] reqwest::Error),

	/// Request timed out.
	#[error("Request timed out")]
	Timeout,

	/// Rate limit exceeded.
	#[error("Rate limit exceeded")]
	RateLimited,

	/// Invalid or missing API key.
	#[error("Invalid API key")]
	Unauthorized,

	/// Invalid or unparseable response from NewsAPI.
	#[error("Invalid response from NewsAPI: {0}")]
	InvalidResponse(String),

	/// NewsAPI returned an error status.
	#[error("NewsAPI error: {status} - {message}")]
	ApiError { status: u16, message: String },
}
