//! Ordered query-parameter accumulation.
//!
//! The router accumulates `(name, value)` pairs while walking a query
//! descriptor. The accumulator enforces the convention's merge rule: each
//! parameter name appears at most once, a later write of an existing name
//! replaces the earlier value in its first-introduced position, and names
//! first introduced keep their insertion order in the output.

/// An ordered collection of query parameters with at-most-once names.
#[derive(Debug, Default)]
pub(crate) struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Sets `name` to `value`, replacing the value in place if the name is
    /// already present (last write wins, position of the first write kept).
    pub(crate) fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();

        if let Some(pair) = self.pairs.iter_mut().find(|(existing, _)| *existing == name) {
            pair.1 = value;
        } else {
            self.pairs.push((name, value));
        }
    }

    /// Seeds the accumulator from a raw query string.
    ///
    /// Pairs are split on `&` and the first `=` without any decoding, so a
    /// pre-built URL's existing parameters survive byte-for-byte unless a
    /// later `set` replaces them.
    pub(crate) fn extend_from_raw(&mut self, raw_query: &str) {
        for piece in raw_query.split('&').filter(|piece| !piece.is_empty()) {
            match piece.split_once('=') {
                Some((name, value)) => self.set(name, value),
                None => self.set(piece, ""),
            }
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Renders the accumulated pairs as a raw query string.
    pub(crate) fn encode(&self) -> String {
        let pieces: Vec<String> = self
            .pairs
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect();
        pieces.join("&")
    }
}
