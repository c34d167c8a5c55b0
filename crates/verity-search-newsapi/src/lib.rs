// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! NewsAPI.org article search client for Verity.
//!
//! This crate provides a typed Rust client for the NewsAPI `everything`
//! endpoint, encapsulating HTTP communication and response parsing.

pub mod client;
pub mod error;
pub mod types;

pub use client::NewsApiClient;
pub use error::NewsApiError;
pub use types::{Article, ArticleSource, NewsRequest, NewsResponse};
