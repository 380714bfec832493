//! Search types for the issue search API
//!
//! This module provides the query type sent to the search endpoint and
//! the result type decoded from its response.

use serde::{Deserialize, Serialize};

use super::Issue;

/// Represents a search text string.
///
/// Wraps the search text for type safety. Built from command-line terms
/// joined with single spaces; percent-encoded on its way into the URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery(pub String);

impl SearchQuery {
    pub fn new<T: Into<String>>(query: T) -> Self {
        Self(query.into())
    }

    /// Build a query from free-text search terms, joined with single spaces
    pub fn from_terms<T: AsRef<str>>(terms: &[T]) -> Self {
        Self(
            terms
                .iter()
                .map(|term| term.as_ref())
                .collect::<Vec<_>>()
                .join(" "),
        )
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Percent-encoded form, safe for inclusion in a URL query parameter
    pub fn encoded(&self) -> String {
        urlencoding::encode(&self.0).into_owned()
    }
}

impl std::fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The decoded search API response: total match count plus the returned
/// page of issues.
///
/// The API may paginate; this client fetches only the first page, so
/// `items.len() <= total_count` always holds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub total_count: u64,
    pub items: Vec<Issue>,
}
