// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! LLM provider configuration section.

use serde::{Deserialize, Serialize};
use verity_common_secret::SecretString;

const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
const DEFAULT_MODEL: &str = "llama3-8b-8192";
const DEFAULT_MAX_TOKENS: u32 = 300;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LlmConfigLayer {
	pub api_key: Option<SecretString>,
	pub base_url: Option<String>,
	pub model: Option<String>,
	pub max_tokens: Option<u32>,
}

impl LlmConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.api_key.is_some() {
			self.api_key = other.api_key;
		}
		if other.base_url.is_some() {
			self.base_url = other.base_url;
		}
		if other.model.is_some() {
			self.model = other.model;
		}
		if other.max_tokens.is_some() {
			self.max_tokens = other.max_tokens;
		}
	}

	pub fn finalize(self) -> LlmConfig {
		LlmConfig {
			api_key: self.api_key,
			base_url: self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
			model: self.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
			max_tokens: self.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
		}
	}
}

/// LLM provider configuration (runtime, resolved).
///
/// An absent API key is not an error; the upstream rejects the request at
/// call time instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
	pub api_key: Option<SecretString>,
	pub base_url: String,
	pub model: String,
	pub max_tokens: u32,
}

impl LlmConfig {
	pub fn is_configured(&self) -> bool {
		self.api_key.is_some()
	}
}

impl Default for LlmConfig {
	fn default() -> Self {
		LlmConfigLayer::default().finalize()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use verity_common_secret::Secret;

	#[test]
	fn test_defaults() {
		let config = LlmConfig::default();
		assert!(!config.is_configured());
		assert_eq!(config.base_url, "https://api.groq.com/openai/v1");
		assert_eq!(config.model, "llama3-8b-8192");
		assert_eq!(config.max_tokens, 300);
	}

	#[test]
	fn test_merge_model_override() {
		let mut base = LlmConfigLayer {
			model: Some("llama3-8b-8192".to_string()),
			..Default::default()
		};
		base.merge(LlmConfigLayer {
			model: Some("llama3-70b-8192".to_string()),
			..Default::default()
		});
		assert_eq!(base.model, Some("llama3-70b-8192".to_string()));
	}

	#[test]
	fn test_merge_preserves_base_when_overlay_is_none() {
		let mut base = LlmConfigLayer {
			api_key: Some(Secret::new("base-key".to_string())),
			max_tokens: Some(512),
			..Default::default()
		};
		base.merge(LlmConfigLayer::default());
		assert_eq!(base.api_key.unwrap().expose(), "base-key");
		assert_eq!(base.max_tokens, Some(512));
	}

	#[test]
	fn test_debug_redacts_api_key() {
		let layer = LlmConfigLayer {
			api_key: Some(Secret::new("gsk-super-secret".to_string())),
			..Default::default()
		};
		let debug_output = format!("{layer:?}");
		assert!(!debug_output.contains("gsk-super-secret"));
		assert!(debug_output.contains("[REDACTED]"));
	}

	proptest! {
		#[test]
		fn finalize_preserves_explicit_max_tokens(max_tokens in 1u32..100_000) {
			let config = LlmConfigLayer {
				max_tokens: Some(max_tokens),
				..Default::default()
			}
			.finalize();
			prop_assert_eq!(config.max_tokens, max_tokens);
		}
	}
}
