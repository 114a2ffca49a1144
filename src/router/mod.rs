//! Request-URL construction for JSON:API-style servers.
//!
//! This module provides the [`Router`], the deterministic translator from
//! resource types, resource identities, relationship names, and [`Query`]
//! descriptors into fully formed request URLs resolved against a validated
//! [`BaseUrl`].
//!
//! # URL Conventions
//!
//! The router produces three URL shapes:
//!
//! - **Collection URLs**: `{base}/{type}` — all members of a resource type.
//! - **Relationship link URLs**: `{resource}/links/{name}` — a named link
//!   owned by one resource instance.
//! - **Query URLs**: a collection (or single-resource) URL carrying the
//!   query string a [`Query`] describes — `filter[id]`, `include`,
//!   `filter[<field>]`, `fields[<type>]`, `sort`, `page`, `page_size`.
//!
//! Query-string text is produced byte-for-byte in the convention's format:
//! comma-joined values with no spaces, one leading sign character per sort
//! entry, literal `[` and `]` in parameter names.
//!
//! # Example
//!
//! ```rust
//! use jsonapi_router::{BaseUrl, Query, Router, Sort};
//!
//! let router = Router::new(BaseUrl::new("https://api.example.com").unwrap());
//!
//! let url = router.query_url(
//!     &Query::new("articles")
//!         .include("author")
//!         .sort(Sort::descending("created"))
//!         .page(2),
//! );
//!
//! assert_eq!(
//!     url.as_str(),
//!     "https://api.example.com/articles?include=author&sort=-created&page=2"
//! );
//! ```
//!
//! # Failure Semantics
//!
//! Build operations either return a complete, correct URL or panic. Every
//! failure mode is a caller-contract violation (a malformed descriptor, an
//! unaddressable resource, an unsupported filter), not an environmental
//! condition, so there is no recoverable-error channel and no partial
//! success. See the `# Panics` section on each operation.

mod filter_translator;
mod params;

pub use filter_translator::{EqualityTranslator, FilterTranslator};

use url::Url;

use crate::config::BaseUrl;
use crate::query::Query;
use crate::resource::{Relationship, Resource};
use params::QueryParams;

/// Builds request URLs for a JSON:API-style server.
///
/// A router owns its [`BaseUrl`] for its whole lifetime; reconfiguring the
/// base means constructing a new router. All build operations are pure and
/// synchronous, and the router holds no per-call state, so a shared
/// reference can be used freely from concurrent contexts.
///
/// The second type parameter is the filter-translation strategy, defaulting
/// to the equality-only [`EqualityTranslator`]. See
/// [`with_filter_translator`](Self::with_filter_translator).
#[derive(Debug, Clone)]
pub struct Router<F = EqualityTranslator> {
    base_url: BaseUrl,
    filter_translator: F,
}

// Verify the default router is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Router>();
};

impl Router {
    /// Creates a router with the default equality-only filter translation.
    #[must_use]
    pub const fn new(base_url: BaseUrl) -> Self {
        Self {
            base_url,
            filter_translator: EqualityTranslator,
        }
    }
}

impl<F: FilterTranslator> Router<F> {
    /// Creates a router with a custom filter-translation strategy.
    ///
    /// # Example
    ///
    /// ```rust
    /// use jsonapi_router::{BaseUrl, Filter, FilterTranslator, Router};
    ///
    /// struct SuffixedOperators;
    ///
    /// impl FilterTranslator for SuffixedOperators {
    ///     fn filter_parameter(&self, filter: &Filter) -> (String, String) {
    ///         let name = format!("filter[{}][{:?}]", filter.field(), filter.operator());
    ///         (name, filter.value().to_string())
    ///     }
    /// }
    ///
    /// let router = Router::with_filter_translator(
    ///     BaseUrl::new("https://api.example.com").unwrap(),
    ///     SuffixedOperators,
    /// );
    /// ```
    pub const fn with_filter_translator(base_url: BaseUrl, filter_translator: F) -> Self {
        Self {
            base_url,
            filter_translator,
        }
    }

    /// Returns the base URL this router resolves against.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the URL addressing the collection of `resource_type`.
    ///
    /// The resource type is appended to the base as exactly one path
    /// segment, regardless of trailing slash variations in the configured
    /// base.
    ///
    /// # Panics
    ///
    /// Panics if `resource_type` is empty or does not form a valid path
    /// segment.
    #[must_use]
    pub fn collection_url(&self, resource_type: &str) -> Url {
        assert!(
            !resource_type.is_empty(),
            "resource type must not be empty"
        );

        let url = self
            .base_url
            .url()
            .join(resource_type)
            .unwrap_or_else(|err| {
                panic!("resource type '{resource_type}' does not form a valid path segment: {err}")
            });

        tracing::debug!(url = %url, resource_type, "built collection URL");
        url
    }

    /// Returns the link URL of `relationship` on `resource`.
    ///
    /// If the resource carries a canonical URL, it is used verbatim and the
    /// resource's type and id are ignored. Otherwise the resource's own URL
    /// is derived as `{base}/{type}/{id}`. The relationship's serialized
    /// name is then appended under a `links` segment.
    ///
    /// # Panics
    ///
    /// Panics if the resource has neither an id nor a canonical URL; such a
    /// resource cannot be addressed.
    #[must_use]
    pub fn relationship_url<R: Resource + ?Sized>(
        &self,
        relationship: &Relationship,
        resource: &R,
    ) -> Url {
        let resource_url = self.resource_url(resource);

        let link = format!(
            "{}/links/{}",
            resource_url.as_str().trim_end_matches('/'),
            relationship.name()
        );
        let url = Url::parse(&link).unwrap_or_else(|err| {
            panic!("relationship '{}' does not form a valid URL: {err}", relationship.name())
        });

        tracing::debug!(url = %url, relationship = relationship.name(), "built relationship URL");
        url
    }

    /// Returns the request URL a [`Query`] describes.
    ///
    /// The URL path addresses the query's resource type (or, for exactly one
    /// requested id, the single resource). A query carrying a pre-built URL
    /// short-circuits path construction: the URL is resolved against the
    /// base and used as-is, requested ids are ignored, and merged parameters
    /// are laid over its existing query string.
    ///
    /// Parameters merge with last-write-wins semantics: each name appears at
    /// most once, a later write replaces the earlier value in its
    /// first-introduced position. Two filters translating to the same
    /// parameter name therefore do not compose; the later filter wins.
    ///
    /// # Panics
    ///
    /// Panics if the query carries neither a pre-built URL nor a resource
    /// type, if its pre-built URL cannot be resolved against the base, or if
    /// the configured filter translation rejects one of its filters.
    #[must_use]
    pub fn query_url(&self, query: &Query) -> Url {
        let mut params = QueryParams::new();

        let mut url = if let Some(raw) = query.url() {
            let mut resolved = self.base_url.url().join(raw).unwrap_or_else(|err| {
                panic!(
                    "query URL '{raw}' cannot be resolved against base '{}': {err}",
                    self.base_url
                )
            });
            if let Some(existing) = resolved.query() {
                params.extend_from_raw(existing);
            }
            resolved.set_query(None);
            resolved
        } else if let Some(resource_type) = query.resource_type() {
            match query.resource_ids() {
                [] => self.collection_url(resource_type),
                [id] => self.single_resource_url(resource_type, id),
                ids => {
                    params.set("filter[id]", ids.join(","));
                    self.collection_url(resource_type)
                }
            }
        } else {
            panic!("query has neither a URL nor a resource type; one of the two is required");
        };

        if !query.includes().is_empty() {
            params.set("include", query.includes().join(","));
        }

        for filter in query.filters() {
            let (name, value) = self.filter_translator.filter_parameter(filter);
            params.set(name, value);
        }

        for (resource_type, fields) in query.sparse_fields() {
            params.set(format!("fields[{resource_type}]"), fields.join(","));
        }

        if !query.sorts().is_empty() {
            let rendered: Vec<String> = query.sorts().iter().map(ToString::to_string).collect();
            params.set("sort", rendered.join(","));
        }

        if let Some(number) = query.page_number() {
            params.set("page", number.to_string());
        }

        if let Some(size) = query.requested_page_size() {
            params.set("page_size", size.to_string());
        }

        if !params.is_empty() {
            url.set_query(Some(&params.encode()));
        }

        tracing::debug!(url = %url, "built query URL");
        url
    }

    /// Derives the URL of one resource instance: `{base}/{type}/{id}`, or
    /// the resource's canonical URL when it already carries one.
    fn resource_url<R: Resource + ?Sized>(&self, resource: &R) -> Url {
        if let Some(url) = resource.url() {
            return url.clone();
        }

        let resource_type = resource.resource_type();
        let Some(id) = resource.id() else {
            panic!("cannot address a '{resource_type}' resource with neither an id nor a URL");
        };

        self.single_resource_url(resource_type, id)
    }

    /// Resolves `id` as a child segment of the directory-form collection
    /// path, so the result carries no trailing slash.
    fn single_resource_url(&self, resource_type: &str, id: &str) -> Url {
        assert!(
            !resource_type.is_empty(),
            "resource type must not be empty"
        );

        let collection = self
            .base_url
            .url()
            .join(&format!("{resource_type}/"))
            .unwrap_or_else(|err| {
                panic!("resource type '{resource_type}' does not form a valid path segment: {err}")
            });

        collection.join(id).unwrap_or_else(|err| {
            panic!("resource id '{id}' does not form a valid path segment: {err}")
        })
    }
}
