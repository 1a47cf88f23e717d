pub mod providers;

/// Answer source abstraction, so the controller can be driven by any backend
#[async_trait::async_trait]
pub trait SearchClient: Send + Sync {
    /// Answer `query`. The query is passed through as typed; callers validate it.
    async fn search(&self, query: &str) -> Result<SearchResult, SearchError>;
}

/// A generated answer plus the web sources it was grounded on
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResult {
    /// Answer text, lightly marked up with `**bold**` and `*italic*`
    pub answer: String,
    /// Sources in the order the service returned them
    pub citations: Vec<Citation>,
}

impl SearchResult {
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            citations: Vec::new(),
        }
    }

    pub fn with_citation(mut self, title: impl Into<String>, uri: impl Into<String>) -> Self {
        self.citations.push(Citation {
            title: title.into(),
            uri: uri.into(),
        });
        self
    }
}

/// One cited web page. Either field may be empty when the service omitted it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Citation {
    pub title: String,
    pub uri: String,
}

impl Citation {
    /// Both title and URI are present
    pub fn is_displayable(&self) -> bool {
        !self.title.is_empty() && !self.uri.is_empty()
    }
}

/// The one failure kind a search can produce.
///
/// Auth, quota, network and malformed-response failures are not told apart.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct SearchError {
    message: String,
}

impl SearchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
