//! Search lifecycle state machine.
//!
//! ```text
//! Idle | Success | Error --submit(q)--> Loading      (q non-blank, not already Loading)
//! Loading --resolve(result)--> Success(result, q)
//! Loading --reject(err)-----> Error(APOLOGY_PREFIX + err)
//! ```
//!
//! Nothing ever returns to `Idle`. Submissions while `Loading` are dropped
//! without feedback, so at most one search is in flight per controller.

use crate::search::{SearchError, SearchResult};
use std::fmt;

/// User-facing sentence put in front of every search failure
pub const APOLOGY_PREFIX: &str = "Sorry, we couldn't complete your search. ";

/// A non-blank, trimmed search query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    /// `None` for empty or whitespace-only input
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What the page shows. Exactly one variant is active.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SearchState {
    #[default]
    Idle,
    /// A search for `query` is in flight
    Loading { query: Query },
    Success { result: SearchResult, query: Query },
    Error { message: String },
}

impl SearchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SearchState::Loading { .. })
    }
}

/// Sole owner and mutator of [`SearchState`]
#[derive(Debug, Default)]
pub struct SearchController {
    state: SearchState,
    has_searched: bool,
}

impl SearchController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Becomes true with the first accepted submission and never resets
    pub fn has_searched(&self) -> bool {
        self.has_searched
    }

    /// Try to start a search. Returns the query to dispatch when accepted.
    ///
    /// Any previous result or error is discarded before the caller awaits
    /// the client.
    pub fn submit(&mut self, raw: &str) -> Option<Query> {
        if self.state.is_loading() {
            tracing::debug!("submission dropped, search already in flight");
            return None;
        }
        let query = Query::parse(raw)?;

        self.has_searched = true;
        self.state = SearchState::Loading {
            query: query.clone(),
        };
        tracing::info!(query_len = query.as_str().len(), "search started");
        Some(query)
    }

    /// Apply the client's outcome to the in-flight search.
    ///
    /// Returns `false` (and leaves state untouched) when nothing is loading.
    pub fn complete(&mut self, outcome: Result<SearchResult, SearchError>) -> bool {
        let query = match &self.state {
            SearchState::Loading { query } => query.clone(),
            _ => {
                tracing::warn!("search outcome arrived with no search in flight");
                return false;
            }
        };

        self.state = match outcome {
            Ok(result) => {
                tracing::info!(citations = result.citations.len(), "search succeeded");
                SearchState::Success { result, query }
            }
            Err(err) => {
                tracing::info!(error = %err, "search failed");
                SearchState::Error {
                    message: format!("{APOLOGY_PREFIX}{err}"),
                }
            }
        };
        true
    }
}
