// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Secret wrapper type that prevents accidental logging of sensitive values.
//!
//! Wrapping an API key in [`Secret`] makes its `Debug` and `Display` output
//! `[REDACTED]`, so keys cannot leak through tracing fields or error
//! messages. The inner value is zeroized on drop and only reachable through
//! an explicit [`Secret::expose`] call.

use std::fmt;

use zeroize::Zeroize;

/// Placeholder emitted in place of any secret value.
pub const REDACTED: &str = "[REDACTED]";

/// Wrapper that redacts its contents from `Debug`/`Display` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret<T: Zeroize>(T);

/// Convenience alias for the common case of secret strings (API keys).
pub type SecretString = Secret<String>;

impl<T: Zeroize> Secret<T> {
	/// Wraps a sensitive value.
	pub fn new(value: T) -> Self {
		Self(value)
	}

	/// Grants access to the wrapped value.
	///
	/// Call sites are expected to pass the result directly into a request
	/// builder rather than storing it in an unprotected location.
	pub fn expose(&self) -> &T {
		&self.0
	}
}

impl<T: Zeroize> Drop for Secret<T> {
	fn drop(&mut self) {
		self.0.zeroize();
	}
}

impl<T: Zeroize> fmt::Debug for Secret<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(REDACTED)
	}
}

impl<T: Zeroize> fmt::Display for Secret<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(REDACTED)
	}
}

impl<T: Zeroize + Default> Default for Secret<T> {
	fn default() -> Self {
		Self(T::default())
	}
}

impl From<String> for SecretString {
	fn from(value: String) -> Self {
		Self::new(value)
	}
}

impl From<&str> for SecretString {
	fn from(value: &str) -> Self {
		Self::new(value.to_string())
	}
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Secret<T>
where
	T: serde::Deserialize<'de> + Zeroize,
{
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		T::deserialize(deserializer).map(Secret::new)
	}
}

#[cfg(feature = "serde")]
impl<T> serde::Serialize for Secret<T>
where
	T: serde::Serialize + Zeroize,
{
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		self.0.serialize(serializer)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn debug_is_redacted() {
		let secret = SecretString::new("sk-super-secret".to_string());
		assert_eq!(format!("{secret:?}"), REDACTED);
	}

	#[test]
	fn display_is_redacted() {
		let secret = SecretString::new("sk-super-secret".to_string());
		assert_eq!(format!("{secret}"), REDACTED);
	}

	#[test]
	fn expose_returns_inner_value() {
		let secret = SecretString::new("sk-super-secret".to_string());
		assert_eq!(secret.expose(), "sk-super-secret");
	}

	#[test]
	fn equality_compares_inner_values() {
		let a = SecretString::from("same");
		let b = SecretString::from("same");
		let c = SecretString::from("different");
		assert_eq!(a, b);
		assert_ne!(a, c);
	}

	#[cfg(feature = "serde")]
	#[test]
	fn deserializes_from_plain_string() {
		let secret: SecretString = serde_json::from_str("\"from-config\"").unwrap();
		assert_eq!(secret.expose(), "from-config");
	}

	#[cfg(feature = "serde")]
	#[test]
	fn serde_roundtrip() {
		let secret = SecretString::from("roundtrip");
		let json = serde_json::to_string(&secret).unwrap();
		let back: SecretString = serde_json::from_str(&json).unwrap();
		assert_eq!(secret, back);
	}

	proptest! {
		#[test]
		fn debug_never_contains_secret(value in "[a-zA-Z0-9]{1,64}") {
			let secret = SecretString::new(value);
			prop_assert_eq!(format!("{:?}", secret), REDACTED);
		}
	}
}
