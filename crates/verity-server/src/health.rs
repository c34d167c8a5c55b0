// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Liveness HTTP handler.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
	pub status: &'static str,
	pub version: &'static str,
	pub news_configured: bool,
	pub llm_configured: bool,
}

/// GET /health - liveness check.
///
/// Reports whether provider keys are configured; does not probe the
/// upstreams themselves.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
	Json(HealthResponse {
		status: "ok",
		version: env!("CARGO_PKG_VERSION"),
		news_configured: state.news_configured,
		llm_configured: state.llm_configured,
	})
}
