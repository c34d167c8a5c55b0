// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Groq chat-completion API types (OpenAI-compatible subset).

use serde::{Deserialize, Serialize};

/// Groq chat completion request.
#[derive(Debug, Clone, Serialize)]
pub struct GroqRequest {
	pub model: String,
	pub messages: Vec<GroqMessage>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub max_tokens: Option<u32>,
}

impl GroqRequest {
	pub fn new(model: impl Into<String>, messages: Vec<GroqMessage>) -> Self {
		Self {
			model: model.into(),
			messages,
			max_tokens: None,
		}
	}

	pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
		self.max_tokens = Some(max_tokens);
		self
	}
}

/// Chat message, used in both requests and response choices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroqMessage {
	pub role: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub content: Option<String>,
}

impl GroqMessage {
	pub fn system(content: impl Into<String>) -> Self {
		Self {
			role: "system".to_string(),
			content: Some(content.into()),
		}
	}

	pub fn user(content: impl Into<String>) -> Self {
		Self {
			role: "user".to_string(),
			content: Some(content.into()),
		}
	}
}

/// Groq chat completion response.
#[derive(Debug, Clone, Deserialize)]
pub struct GroqResponse {
	#[serde(default)]
	pub id: Option<String>,
	#[serde(default)]
	pub model: Option<String>,
	#[serde(default)]
	pub choices: Vec<GroqChoice>,
	#[serde(default)]
	pub usage: Option<GroqUsage>,
}

impl GroqResponse {
	/// Text content of the first choice, verbatim.
	pub fn first_content(&self) -> Option<&str> {
		self.choices
			.first()
			.and_then(|choice| choice.message.content.as_deref())
	}
}

/// Response choice.
#[derive(Debug, Clone, Deserialize)]
pub struct GroqChoice {
	#[serde(default)]
	pub index: u32,
	pub message: GroqMessage,
	#[serde(default)]
	pub finish_reason: Option<String>,
}

/// Token usage statistics.
#[derive(Debug, Clone, Deserialize)]
pub struct GroqUsage {
	pub prompt_tokens: u32,
	pub completion_tokens: u32,
	pub total_tokens: u32,
}
