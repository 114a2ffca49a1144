//! # JSON:API Router
//!
//! Request-URL construction for JSON:API-style resource servers.
//!
//! ## Overview
//!
//! This crate provides:
//! - A validated [`BaseUrl`] newtype all produced URLs resolve against
//! - A [`Router`] that builds collection URLs, relationship link URLs, and
//!   query URLs deterministically
//! - A caller-owned [`Query`] descriptor for includes, filters, sparse
//!   fieldsets, sorting, and paging
//! - A pluggable [`FilterTranslator`] strategy for filter-to-parameter
//!   translation, defaulting to the equality-only [`EqualityTranslator`]
//!
//! Transport, response parsing, model definitions, persistence, and
//! authentication are deliberately out of scope; the router produces URLs
//! for whatever HTTP client the application already uses.
//!
//! ## Quick Start
//!
//! ```rust
//! use jsonapi_router::{BaseUrl, Filter, Query, Router, Sort};
//!
//! let router = Router::new(BaseUrl::new("https://api.example.com/v1").unwrap());
//!
//! // Collection URL
//! let articles = router.collection_url("articles");
//! assert_eq!(articles.as_str(), "https://api.example.com/v1/articles");
//!
//! // Query URL
//! let url = router.query_url(
//!     &Query::new("articles")
//!         .include("author")
//!         .filter(Filter::equals("category", "rust"))
//!         .fields("articles", ["title", "body"])
//!         .sort(Sort::descending("created"))
//!         .page(2)
//!         .page_size(20),
//! );
//! assert_eq!(
//!     url.as_str(),
//!     "https://api.example.com/v1/articles?include=author&filter[category]=rust\
//!      &fields[articles]=title,body&sort=-created&page=2&page_size=20"
//! );
//! ```
//!
//! ## Relationship URLs
//!
//! Resources are defined by the application; the router reads them through
//! the [`Resource`] trait:
//!
//! ```rust
//! use jsonapi_router::{BaseUrl, Relationship, Resource, Router};
//! use url::Url;
//!
//! struct Article {
//!     id: Option<String>,
//!     url: Option<Url>,
//! }
//!
//! impl Resource for Article {
//!     fn resource_type(&self) -> &str {
//!         "articles"
//!     }
//!     fn id(&self) -> Option<&str> {
//!         self.id.as_deref()
//!     }
//!     fn url(&self) -> Option<&Url> {
//!         self.url.as_ref()
//!     }
//! }
//!
//! let router = Router::new(BaseUrl::new("https://api.example.com").unwrap());
//! let article = Article {
//!     id: Some("17".to_string()),
//!     url: None,
//! };
//!
//! let url = router.relationship_url(&Relationship::new("author"), &article);
//! assert_eq!(url.as_str(), "https://api.example.com/articles/17/links/author");
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: the base URL is validated once and passed
//!   explicitly at construction
//! - **Pure construction**: build operations are synchronous, side-effect
//!   free, and hold no per-call state
//! - **Fail-fast contracts**: malformed descriptors and unaddressable
//!   resources are caller bugs and panic; only configuration validation
//!   uses the `Result` channel
//! - **Extension by composition**: filter translation is a strategy value,
//!   not a subclass hook
//! - **Thread-safe**: all public types are `Send + Sync`

pub mod config;
pub mod error;
pub mod query;
pub mod resource;
pub mod router;

// Re-export public types at crate root for convenience
pub use config::BaseUrl;
pub use error::ConfigError;
pub use query::{ComparisonOperator, Filter, Query, Sort, SortDirection};
pub use resource::{Relationship, Resource};
pub use router::{EqualityTranslator, FilterTranslator, Router};
