//! Filter-to-parameter translation strategies.
//!
//! Translating a [`Filter`] into a query parameter is the router's one
//! extensibility point. The router holds a [`FilterTranslator`] supplied at
//! construction; the default, [`EqualityTranslator`], implements the
//! convention's guaranteed subset (equality only) and fails loudly on
//! anything else. Callers targeting servers with richer filter conventions
//! inject their own strategy via
//! [`Router::with_filter_translator`](crate::Router::with_filter_translator).

use crate::query::{ComparisonOperator, Filter};

/// A strategy turning one filter expression into one query parameter.
///
/// Implementations must be pure: the same filter always produces the same
/// `(name, value)` pair. When two filters produce the same name, the router
/// applies last-write-wins; a translator that needs to compose constraints
/// on one field must encode the composition in the value itself.
///
/// # Example
///
/// ```rust
/// use jsonapi_router::{Filter, FilterTranslator};
///
/// /// Translates every operator using a `filter[field][op]` convention.
/// struct BracketedOperators;
///
/// impl FilterTranslator for BracketedOperators {
///     fn filter_parameter(&self, filter: &Filter) -> (String, String) {
///         let name = format!("filter[{}][{:?}]", filter.field(), filter.operator());
///         (name, filter.value().to_string())
///     }
/// }
/// ```
pub trait FilterTranslator {
    /// Translates `filter` into a `(name, value)` query-parameter pair.
    ///
    /// # Panics
    ///
    /// Implementations panic when handed a filter they do not support;
    /// an unsupported filter is a caller bug, not a recoverable condition.
    fn filter_parameter(&self, filter: &Filter) -> (String, String);
}

/// The default translation strategy: equality comparisons only.
///
/// An equality filter on `field` becomes the parameter `filter[<field>]`
/// with the value's string form. JSON strings render without surrounding
/// quotes; other scalars render as their JSON text.
///
/// # Example
///
/// ```rust
/// use jsonapi_router::{EqualityTranslator, Filter, FilterTranslator};
///
/// let translator = EqualityTranslator;
/// let (name, value) = translator.filter_parameter(&Filter::equals("author.name", "Ursula"));
/// assert_eq!(name, "filter[author.name]");
/// assert_eq!(value, "Ursula");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EqualityTranslator;

impl FilterTranslator for EqualityTranslator {
    /// # Panics
    ///
    /// Panics if the filter's operator is anything other than
    /// [`ComparisonOperator::Equal`]. Supply a custom [`FilterTranslator`]
    /// to support other operators.
    fn filter_parameter(&self, filter: &Filter) -> (String, String) {
        assert!(
            filter.operator() == ComparisonOperator::Equal,
            "the default filter translation supports equality only, got operator '{}' for field '{}'; \
             supply a custom FilterTranslator to translate other comparisons",
            filter.operator(),
            filter.field(),
        );

        let name = format!("filter[{}]", filter.field());
        let value = match filter.value() {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        };

        (name, value)
    }
}

// Verify EqualityTranslator is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<EqualityTranslator>();
};
