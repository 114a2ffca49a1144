//! Interfaces to caller-defined resource models.
//!
//! This crate does not define resource models; they belong to the caller.
//! The [`Resource`] trait is the seam between the two: it exposes the three
//! facts the router needs to address a resource — its type, its id (if it
//! has one), and a previously known canonical URL (if it has one).
//!
//! # Implementing `Resource`
//!
//! ```rust
//! use jsonapi_router::Resource;
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
//!
//!     fn id(&self) -> Option<&str> {
//!         self.id.as_deref()
//!     }
//!
//!     fn url(&self) -> Option<&Url> {
//!         self.url.as_ref()
//!     }
//! }
//! ```

use serde::{Deserialize, Serialize};
use url::Url;

/// An addressable resource, as seen by the router.
///
/// Implementors are the caller's model types. The router reads a resource's
/// canonical URL when one is known (e.g., from a previous response) and
/// otherwise derives one from the resource's type and id.
pub trait Resource {
    /// The resource's type name, as it appears in collection paths.
    fn resource_type(&self) -> &str;

    /// The resource's id, if it has been assigned one.
    ///
    /// Returns `None` for resources that have not been persisted yet.
    fn id(&self) -> Option<&str>;

    /// The resource's canonical URL, if one is already known.
    ///
    /// When present, the router uses it verbatim and ignores the type and
    /// id.
    fn url(&self) -> Option<&Url>;
}

/// A named to-one or to-many link owned by a resource.
///
/// The name is the relationship's serialized form, used verbatim as the last
/// path segment of the relationship's link URL.
///
/// # Example
///
/// ```rust
/// use jsonapi_router::Relationship;
///
/// let author = Relationship::new("author");
/// assert_eq!(author.name(), "author");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Relationship {
    name: String,
}

impl Relationship {
    /// Creates a relationship descriptor from its serialized name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the relationship's serialized name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
