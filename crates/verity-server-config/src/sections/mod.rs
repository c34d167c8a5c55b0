// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sections.

mod http;
mod llm;
mod logging;
mod news;
mod paths;

pub use http::{HttpConfig, HttpConfigLayer};
pub use llm::{LlmConfig, LlmConfigLayer};
pub use logging::{LoggingConfig, LoggingConfigLayer};
pub use news::{NewsConfig, NewsConfigLayer};
pub use paths::{PathsConfig, PathsConfigLayer};
