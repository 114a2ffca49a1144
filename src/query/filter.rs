//! Filter expressions for resource queries.
//!
//! A [`Filter`] is an opaque comparison predicate: a field path on the left,
//! a [`ComparisonOperator`], and a JSON scalar value on the right. The router
//! does not interpret filters itself; it hands each one to its configured
//! [`FilterTranslator`](crate::router::FilterTranslator), which turns it into
//! exactly one query parameter.
//!
//! The full operator set exists so custom translation strategies can support
//! richer conventions. The default strategy accepts equality only.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The comparison kind of a [`Filter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComparisonOperator {
    /// Field equals value.
    Equal,
    /// Field does not equal value.
    NotEqual,
    /// Field is less than value.
    LessThan,
    /// Field is less than or equal to value.
    LessThanOrEqual,
    /// Field is greater than value.
    GreaterThan,
    /// Field is greater than or equal to value.
    GreaterThanOrEqual,
}

impl ComparisonOperator {
    /// Returns the conventional symbol for this operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::LessThan => "<",
            Self::LessThanOrEqual => "<=",
            Self::GreaterThan => ">",
            Self::GreaterThanOrEqual => ">=",
        }
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A comparison predicate restricting the results of a query.
///
/// Construct filters with the per-operator constructors and attach them to a
/// query with [`Query::filter`](crate::Query::filter):
///
/// ```rust
/// use jsonapi_router::Filter;
///
/// let by_author = Filter::equals("author.name", "Ursula");
/// let recent = Filter::greater_than("year", 2020);
/// ```
///
/// Values are JSON scalars ([`serde_json::Value`]); strings, numbers, and
/// booleans all convert via `Into`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    field: String,
    operator: ComparisonOperator,
    value: serde_json::Value,
}

impl Filter {
    /// Creates a filter with an explicit operator.
    pub fn new(
        field: impl Into<String>,
        operator: ComparisonOperator,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        Self {
            field: field.into(),
            operator,
            value: value.into(),
        }
    }

    /// Creates an equality filter (`field == value`).
    pub fn equals(field: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Self::new(field, ComparisonOperator::Equal, value)
    }

    /// Creates an inequality filter (`field != value`).
    pub fn not_equals(field: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Self::new(field, ComparisonOperator::NotEqual, value)
    }

    /// Creates a less-than filter (`field < value`).
    pub fn less_than(field: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Self::new(field, ComparisonOperator::LessThan, value)
    }

    /// Creates a less-than-or-equal filter (`field <= value`).
    pub fn less_than_or_equal(
        field: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        Self::new(field, ComparisonOperator::LessThanOrEqual, value)
    }

    /// Creates a greater-than filter (`field > value`).
    pub fn greater_than(field: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Self::new(field, ComparisonOperator::GreaterThan, value)
    }

    /// Creates a greater-than-or-equal filter (`field >= value`).
    pub fn greater_than_or_equal(
        field: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        Self::new(field, ComparisonOperator::GreaterThanOrEqual, value)
    }

    /// Returns the field path this filter applies to.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Returns the comparison operator.
    #[must_use]
    pub const fn operator(&self) -> ComparisonOperator {
        self.operator
    }

    /// Returns the right-hand value.
    #[must_use]
    pub const fn value(&self) -> &serde_json::Value {
        &self.value
    }
}
