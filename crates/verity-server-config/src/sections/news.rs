// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! News search provider configuration section.

use serde::{Deserialize, Serialize};
use verity_common_secret::SecretString;

const DEFAULT_BASE_URL: &str = "https://newsapi.org/v2";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewsConfigLayer {
	pub api_key: Option<SecretString>,
	pub base_url: Option<String>,
}

impl NewsConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.api_key.is_some() {
			self.api_key = other.api_key;
		}
		if other.base_url.is_some() {
			self.base_url = other.base_url;
		}
	}

	pub fn finalize(self) -> NewsConfig {
		NewsConfig {
			api_key: self.api_key,
			base_url: self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
		}
	}
}

/// News search provider configuration (runtime, resolved).
///
/// An absent API key is not an error; the upstream rejects the request at
/// call time instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsConfig {
	pub api_key: Option<SecretString>,
	pub base_url: String,
}

impl NewsConfig {
	pub fn is_configured(&self) -> bool {
		self.api_key.is_some()
	}
}

impl Default for NewsConfig {
	fn default() -> Self {
		NewsConfigLayer::default().finalize()
	}
}
