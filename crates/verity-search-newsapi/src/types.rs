// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! NewsAPI request and response types.

use serde::{Deserialize, Serialize};

/// An article search request.
#[derive(Debug, Clone)]
pub struct NewsRequest {
	/// Free-text query, matched across all sources and dates with the
	/// provider's default (relevance) ordering.
	pub query: String,
}

impl NewsRequest {
	pub fn new(query: impl Into<String>) -> Self {
		Self {
			query: query.into(),
		}
	}
}

/// A completed article search.
#[derive(Debug, Clone)]
pub struct NewsResponse {
	pub query: String,
	/// Articles in provider order, untruncated.
	pub articles: Vec<Article>,
}

/// Publisher attribution for an article.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleSource {
	pub id: Option<String>,
	pub name: Option<String>,
}

/// A single news article as returned by NewsAPI.
///
/// The full provider shape round-trips to the caller in the provider's
/// camelCase field names; only `title` and `description` feed the model
/// prompt.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Article {
	#[serde(default)]
	pub source: ArticleSource,
	#[serde(default)]
	pub author: Option<String>,
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub description: Option<String>,
	#[serde(default)]
	pub url: Option<String>,
	#[serde(default)]
	pub url_to_image: Option<String>,
	#[serde(default)]
	pub published_at: Option<String>,
	#[serde(default)]
	pub content: Option<String>,
}
