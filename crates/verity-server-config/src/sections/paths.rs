// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Filesystem paths configuration section.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const DEFAULT_STATIC_DIR: &str = "public";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfigLayer {
	pub static_dir: Option<PathBuf>,
}

impl PathsConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.static_dir.is_some() {
			self.static_dir = other.static_dir;
		}
	}

	pub fn finalize(self) -> PathsConfig {
		PathsConfig {
			static_dir: self
				.static_dir
				.unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
		}
	}
}

/// Filesystem paths configuration (runtime, resolved).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
	/// Directory holding the frontend entry page and assets.
	pub static_dir: PathBuf,
}

impl PathsConfig {
	/// Path of the entry page served at `/`.
	pub fn index_file(&self) -> PathBuf {
		self.static_dir.join("main.html")
	}
}

impl Default for PathsConfig {
	fn default() -> Self {
		PathsConfigLayer::default().finalize()
	}
}
