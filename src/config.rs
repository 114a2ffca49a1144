//! Validated configuration for the router.
//!
//! This module provides [`BaseUrl`], a validated newtype wrapping the root
//! URL that all resource and query URLs are resolved against. Invalid values
//! are rejected with clear error messages at construction, so a [`Router`]
//! holding a `BaseUrl` never has to re-check it on the hot path.
//!
//! [`Router`]: crate::Router

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use url::Url;

use crate::error::ConfigError;

/// A validated base URL for a JSON:API-style server.
///
/// All URLs produced by a [`Router`](crate::Router) are resolved against this
/// value. Construction validates that the input is an absolute, non-opaque
/// URL, and normalizes it so that URL construction behaves predictably:
///
/// - the path is put in directory form (trailing `/`), so joining a resource
///   type appends a segment instead of replacing the last one;
/// - any query string or fragment is removed, since resolution per
///   RFC 3986 would discard them anyway.
///
/// The normalization makes collection URLs identical whether or not the
/// caller's input carried a trailing slash.
///
/// # Serialization
///
/// `BaseUrl` serializes to and deserializes from its normalized string form:
///
/// ```rust
/// use jsonapi_router::BaseUrl;
///
/// let base = BaseUrl::new("https://api.example.com/v1").unwrap();
/// let json = serde_json::to_string(&base).unwrap();
/// assert_eq!(json, r#""https://api.example.com/v1/""#);
/// ```
///
/// # Example
///
/// ```rust
/// use jsonapi_router::BaseUrl;
///
/// // Trailing slash variations normalize to the same value
/// let a = BaseUrl::new("https://api.example.com/v1").unwrap();
/// let b = BaseUrl::new("https://api.example.com/v1/").unwrap();
/// assert_eq!(a, b);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(Url);

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyBaseUrl`] if the input is empty,
    /// [`ConfigError::InvalidBaseUrl`] if it is not a parseable absolute URL,
    /// and [`ConfigError::OpaqueBaseUrl`] if it parses but has no path to
    /// append resource segments to (e.g., `mailto:`).
    pub fn new(url: impl AsRef<str>) -> Result<Self, ConfigError> {
        let raw = url.as_ref().trim();

        if raw.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }

        let mut parsed = Url::parse(raw).map_err(|_| ConfigError::InvalidBaseUrl {
            url: raw.to_string(),
        })?;

        if parsed.cannot_be_a_base() {
            return Err(ConfigError::OpaqueBaseUrl {
                url: raw.to_string(),
            });
        }

        parsed.set_query(None);
        parsed.set_fragment(None);

        if !parsed.path().ends_with('/') {
            let directory_path = format!("{}/", parsed.path());
            parsed.set_path(&directory_path);
        }

        Ok(Self(parsed))
    }

    /// Returns the normalized base URL.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.0
    }

    /// Returns the normalized base URL as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl FromStr for BaseUrl {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for BaseUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for BaseUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

// Verify BaseUrl is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BaseUrl>();
};
