//! Error types for the router configuration.
//!
//! This module contains the error type returned when validating the base URL
//! a [`Router`](crate::Router) is configured with.
//!
//! # Error Handling
//!
//! Configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and
//! actionable.
//!
//! Note that build operations on an already-constructed router do not use
//! this channel: a malformed query descriptor or an unaddressable resource is
//! a caller bug, not an environmental failure, and those operations panic.
//! See the `# Panics` sections on [`Router`](crate::Router).
//!
//! # Example
//!
//! ```rust
//! use jsonapi_router::{BaseUrl, ConfigError};
//!
//! let result = BaseUrl::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyBaseUrl)));
//! ```

use thiserror::Error;

/// Errors that can occur while validating router configuration.
///
/// Each variant provides a clear, actionable error message. All variants are
/// surfaced immediately at construction and are never retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Base URL cannot be empty.
    #[error("Base URL cannot be empty. Please provide an absolute URL such as 'https://api.example.com'.")]
    EmptyBaseUrl,

    /// Base URL is not a valid absolute URL.
    #[error("Invalid base URL '{url}'. Expected an absolute URL with a scheme (e.g., 'https://api.example.com/v1').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Base URL is opaque and cannot serve as a base for resource paths.
    #[error("Base URL '{url}' cannot be used as a base. Opaque URLs (e.g., 'mailto:', 'data:') have no path to append resource segments to.")]
    OpaqueBaseUrl {
        /// The opaque URL that was provided.
        url: String,
    },
}
