// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Verity fact-check server.
//!
//! This crate provides the HTTP surface of the service: a single
//! `POST /api/fact-check` route that chains a NewsAPI article search and a
//! Groq chat completion, static hosting for the frontend entry page, and a
//! liveness endpoint.

pub mod api;
pub mod error;
pub mod fact_check;
pub mod health;
pub mod prompt;

pub use api::{create_app_state, create_router, AppState};
pub use error::UpstreamError;
pub use fact_check::{ClaimRequest, FactCheckResponse};
pub use verity_server_config::ServerConfig;
