//! The query descriptor passed to [`Router::query_url`].
//!
//! A [`Query`] describes a collection request: which resource type (or
//! pre-built URL) to address, which resources to restrict to, and which
//! includes, filters, sparse fieldsets, sorts, and paging to apply. It is
//! constructed and owned entirely by the caller; the router only reads it.
//!
//! # Example
//!
//! ```rust
//! use jsonapi_router::{Filter, Query, Sort};
//!
//! let query = Query::new("articles")
//!     .include("author")
//!     .include("comments")
//!     .filter(Filter::equals("category", "rust"))
//!     .fields("articles", ["title", "body"])
//!     .sort(Sort::descending("created"))
//!     .page(2)
//!     .page_size(20);
//!
//! assert_eq!(query.resource_type(), Some("articles"));
//! assert_eq!(query.includes(), ["author", "comments"]);
//! ```
//!
//! [`Router::query_url`]: crate::Router::query_url

mod filter;
mod sort;

pub use filter::{ComparisonOperator, Filter};
pub use sort::{Sort, SortDirection};

use serde::{Deserialize, Serialize};

/// A structured description of a collection query.
///
/// Every attribute is optional except that a query must carry either a
/// resource type ([`Query::new`]) or a pre-built URL ([`Query::from_url`]);
/// [`Router::query_url`](crate::Router::query_url) panics otherwise.
///
/// All list-shaped attributes preserve insertion order, and that order is
/// what the router renders into the URL.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Query {
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    resource_type: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    includes: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    filters: Vec<Filter>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    fields: Vec<(String, Vec<String>)>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    sorts: Vec<Sort>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page_number: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page_size: Option<u64>,
}

impl Query {
    /// Creates a query addressing the collection of `resource_type`.
    pub fn new(resource_type: impl Into<String>) -> Self {
        Self {
            resource_type: Some(resource_type.into()),
            ..Self::default()
        }
    }

    /// Creates a query from a pre-built URL.
    ///
    /// The URL may be absolute or relative; the router resolves it against
    /// its base. Path construction is short-circuited for such queries: any
    /// [`ids`](Self::ids) are ignored, and include/filter/field/sort/page
    /// parameters are merged onto the URL's existing query string.
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    /// Restricts the query to the given resource ids, in order.
    ///
    /// Exactly one id addresses the single resource directly in the URL
    /// path; more than one renders as a `filter[id]` parameter.
    #[must_use]
    pub fn ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ids = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Appends a relationship path to include in the response.
    ///
    /// Paths are rendered verbatim, comma-joined, in insertion order.
    #[must_use]
    pub fn include(mut self, path: impl Into<String>) -> Self {
        self.includes.push(path.into());
        self
    }

    /// Appends a filter expression.
    ///
    /// Filters are translated in insertion order; if two filters translate
    /// to the same parameter name, the later one wins.
    #[must_use]
    pub fn filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Restricts `resource_type` responses to the given fields.
    ///
    /// Entries render as one `fields[<type>]` parameter per type, in
    /// first-seen entry order. Calling this again for a type already present
    /// extends that type's field list in place.
    #[must_use]
    pub fn fields<I, S>(mut self, resource_type: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let resource_type = resource_type.into();
        let new_fields = fields.into_iter().map(Into::into);

        if let Some((_, existing)) = self
            .fields
            .iter_mut()
            .find(|(name, _)| *name == resource_type)
        {
            existing.extend(new_fields);
        } else {
            self.fields.push((resource_type, new_fields.collect()));
        }
        self
    }

    /// Appends a sort descriptor.
    #[must_use]
    pub fn sort(mut self, sort: Sort) -> Self {
        self.sorts.push(sort);
        self
    }

    /// Sets the page number to request.
    ///
    /// Independent of [`page_size`](Self::page_size); either may be set
    /// without the other.
    #[must_use]
    pub const fn page(mut self, number: u64) -> Self {
        self.page_number = Some(number);
        self
    }

    /// Sets the page size to request.
    #[must_use]
    pub const fn page_size(mut self, size: u64) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Returns the pre-built URL, if this query carries one.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Returns the resource type, if this query carries one.
    #[must_use]
    pub fn resource_type(&self) -> Option<&str> {
        self.resource_type.as_deref()
    }

    /// Returns the resource ids the query is restricted to.
    #[must_use]
    pub fn resource_ids(&self) -> &[String] {
        &self.ids
    }

    /// Returns the include paths, in insertion order.
    #[must_use]
    pub fn includes(&self) -> &[String] {
        &self.includes
    }

    /// Returns the filter expressions, in insertion order.
    #[must_use]
    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    /// Returns the sparse-fieldset entries, in first-seen entry order.
    #[must_use]
    pub fn sparse_fields(&self) -> &[(String, Vec<String>)] {
        &self.fields
    }

    /// Returns the sort descriptors, in insertion order.
    #[must_use]
    pub fn sorts(&self) -> &[Sort] {
        &self.sorts
    }

    /// Returns the requested page number, if any.
    #[must_use]
    pub const fn page_number(&self) -> Option<u64> {
        self.page_number
    }

    /// Returns the requested page size, if any.
    #[must_use]
    pub const fn requested_page_size(&self) -> Option<u64> {
        self.page_size
    }
}

// Verify Query is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Query>();
};
