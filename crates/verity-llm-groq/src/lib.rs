// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Groq chat-completions API client for Verity.
//!
//! Groq exposes an OpenAI-compatible chat-completion schema; this crate
//! covers the non-streaming subset the fact-check service consumes.

pub mod client;
pub mod error;
pub mod types;

pub use client::GroqClient;
pub use error::GroqError;
pub use types::{GroqChoice, GroqMessage, GroqRequest, GroqResponse, GroqUsage};
