#![deny(missing_docs)]

//! # Endpoint Lookup
//!
//! Lookup and free-text search over a transformed `ApiModel`.

use crate::oas::models::{ApiModel, Endpoint, HttpMethod};

/// Search terms shorter than this do not filter.
pub const MIN_SEARCH_LEN: usize = 2;

impl ApiModel {
    /// All endpoints, in category order.
    pub fn endpoints(&self) -> impl Iterator<Item = &Endpoint> {
        self.categories.iter().flat_map(|c| c.endpoints.iter())
    }

    /// Total number of endpoints across categories.
    pub fn endpoint_count(&self) -> usize {
        self.categories.iter().map(|c| c.endpoints.len()).sum()
    }

    /// Finds the endpoint for a (method, path template) pair.
    pub fn find_endpoint(&self, method: HttpMethod, path: &str) -> Option<&Endpoint> {
        self.endpoints()
            .find(|e| e.method == method && e.path == path)
    }

    /// Case-insensitive search over path, summary, description and parameter
    /// names/descriptions.
    ///
    /// Returns `None` when the trimmed term is shorter than `MIN_SEARCH_LEN`,
    /// meaning the caller should keep showing its current category.
    pub fn search(&self, term: &str) -> Option<Vec<&Endpoint>> {
        let term = term.trim().to_lowercase();
        if term.chars().count() < MIN_SEARCH_LEN {
            return None;
        }
        Some(self.endpoints().filter(|e| matches(e, &term)).collect())
    }
}

fn matches(endpoint: &Endpoint, term: &str) -> bool {
    let contains = |text: &str| text.to_lowercase().contains(term);
    contains(&endpoint.path)
        || contains(&endpoint.summary)
        || contains(&endpoint.description)
        || endpoint
            .parameters
            .iter()
            .any(|p| contains(&p.name) || contains(&p.description))
}
