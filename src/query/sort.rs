//! Sort descriptors for resource queries.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The direction of a [`Sort`] descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    /// Smallest value first. Renders as a leading `+`.
    Ascending,
    /// Largest value first. Renders as a leading `-`.
    Descending,
}

impl SortDirection {
    /// Returns the sign character this direction renders as.
    #[must_use]
    pub const fn sign(&self) -> char {
        match self {
            Self::Ascending => '+',
            Self::Descending => '-',
        }
    }
}

/// A single sort descriptor: a field name and a direction.
///
/// Sorts render into the `sort` query parameter with exactly one leading sign
/// character per entry, in the order they were attached to the query:
///
/// ```rust
/// use jsonapi_router::Sort;
///
/// let newest_first = Sort::descending("created");
/// assert_eq!(newest_first.to_string(), "-created");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    field: String,
    direction: SortDirection,
}

impl Sort {
    /// Creates a sort descriptor with an explicit direction.
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    /// Creates an ascending sort on `field`.
    pub fn ascending(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Ascending)
    }

    /// Creates a descending sort on `field`.
    pub fn descending(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Descending)
    }

    /// Returns the field name being sorted on.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Returns the sort direction.
    #[must_use]
    pub const fn direction(&self) -> SortDirection {
        self.direction
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.direction.sign(), self.field)
    }
}
