// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Top-level configuration layer for merging across sources.

use serde::{Deserialize, Serialize};

use crate::sections::{
	HttpConfigLayer, LlmConfigLayer, LoggingConfigLayer, NewsConfigLayer, PathsConfigLayer,
};

/// Partial configuration as read from a single source.
///
/// All sections are optional so that a TOML file or the environment can
/// override only the fields it names. Layers merge with later sources
/// taking precedence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfigLayer {
	#[serde(default)]
	pub http: Option<HttpConfigLayer>,
	#[serde(default)]
	pub news: Option<NewsConfigLayer>,
	#[serde(default)]
	pub llm: Option<LlmConfigLayer>,
	#[serde(default)]
	pub paths: Option<PathsConfigLayer>,
	#[serde(default)]
	pub logging: Option<LoggingConfigLayer>,
}

impl ServerConfigLayer {
	/// Merges another layer on top of this one.
	/// Values from `other` take precedence when present.
	pub fn merge(&mut self, other: Self) {
		if let Some(other_http) = other.http {
			let http = self.http.get_or_insert_with(Default::default);
			http.merge(other_http);
		}
		if let Some(other_news) = other.news {
			let news = self.news.get_or_insert_with(Default::default);
			news.merge(other_news);
		}
		if let Some(other_llm) = other.llm {
			let llm = self.llm.get_or_insert_with(Default::default);
			llm.merge(other_llm);
		}
		if let Some(other_paths) = other.paths {
			let paths = self.paths.get_or_insert_with(Default::default);
			paths.merge(other_paths);
		}
		if let Some(other_logging) = other.logging {
			let logging = self.logging.get_or_insert_with(Default::default);
			logging.merge(other_logging);
		}
	}
}
