// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Secret loading from environment variables with `*_FILE` support.
//!
//! A secret named `FOO` can be supplied either directly as `FOO=value` or
//! indirectly as `FOO_FILE=/run/secrets/foo`, where the file contains the
//! value. The indirect form is what container orchestrators mount.

use std::path::PathBuf;

use thiserror::Error;
use verity_common_secret::SecretString;

/// Errors from [`load_secret_env`].
#[derive(Debug, Error)]
pub enum SecretEnvError {
	/// Both `VAR` and `VAR_FILE` were set; the intent is ambiguous.
	#[error("both {var} and {var}_FILE are set; use only one")]
	Conflicting { var: String },

	/// The file referenced by `VAR_FILE` could not be read.
	#[error("failed to read secret file {path} for {var}: {source}")]
	FileRead {
		var: String,
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

/// Loads an optional secret from `var` or `{var}_FILE`.
///
/// Returns `Ok(None)` when neither is set or the direct value is empty.
/// File contents are trimmed of trailing whitespace, since mounted secret
/// files conventionally end with a newline.
pub fn load_secret_env(var: &str) -> Result<Option<SecretString>, SecretEnvError> {
	let direct = std::env::var(var).ok().filter(|v| !v.is_empty());
	let file_var = format!("{var}_FILE");
	let indirect = std::env::var(&file_var).ok().filter(|v| !v.is_empty());

	match (direct, indirect) {
		(Some(_), Some(_)) => Err(SecretEnvError::Conflicting {
			var: var.to_string(),
		}),
		(Some(value), None) => Ok(Some(SecretString::new(value))),
		(None, Some(path)) => {
			let path = PathBuf::from(path);
			let contents =
				std::fs::read_to_string(&path).map_err(|source| SecretEnvError::FileRead {
					var: var.to_string(),
					path: path.clone(),
					source,
				})?;
			Ok(Some(SecretString::new(contents.trim_end().to_string())))
		}
		(None, None) => Ok(None),
	}
}
