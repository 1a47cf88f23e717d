use crate::llm::types::{GenerateContentRequest, GenerateContentResponse};
use crate::llm::{GeminiClient, GeminiError};
use crate::search::{Citation, SearchClient, SearchError, SearchResult};

/// Prefix marking a failure as coming from the Gemini service
pub const SERVICE_ERROR_PREFIX: &str = "Gemini API Error: ";
/// Message used when a failure carries no message of its own
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred while contacting the Gemini API.";

/// Search backed by Gemini with Google Search grounding enabled
///
/// The model decides on its own whether and how to search. No retry and no
/// timeout are applied on top of reqwest's defaults.
pub struct GeminiSearchClient {
    client: GeminiClient,
}

impl GeminiSearchClient {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl SearchClient for GeminiSearchClient {
    async fn search(&self, query: &str) -> Result<SearchResult, SearchError> {
        let request = GenerateContentRequest::new(query).with_web_search_grounding();

        match self.client.generate_content(&request).await {
            Ok(response) => Ok(into_search_result(&response)),
            Err(err) => {
                tracing::error!(
                    model = %self.client.model(),
                    error = %err,
                    "error during gemini api call"
                );
                Err(err.into())
            }
        }
    }
}

impl From<GeminiError> for SearchError {
    fn from(err: GeminiError) -> Self {
        match err {
            GeminiError::Unexplained { .. } => SearchError::new(UNKNOWN_ERROR_MESSAGE),
            other => SearchError::new(format!("{SERVICE_ERROR_PREFIX}{other}")),
        }
    }
}

/// Flatten a response into answer text and web citations.
///
/// Chunks without a `web` source are skipped; missing titles or URIs become
/// empty strings and are filtered at render time.
pub fn into_search_result(response: &GenerateContentResponse) -> SearchResult {
    let citations = response
        .grounding_chunks()
        .iter()
        .filter_map(|chunk| chunk.web.as_ref())
        .map(|web| Citation {
            title: web.title.clone().unwrap_or_default(),
            uri: web.uri.clone().unwrap_or_default(),
        })
        .collect();

    SearchResult {
        answer: response.text(),
        citations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_errors_keep_original_message_behind_prefix() {
        let err: SearchError = GeminiError::Api {
            status: 403,
            message: "API key not valid".to_string(),
        }
        .into();
        assert_eq!(err.message(), "Gemini API Error: API key not valid");
    }

    #[test]
    fn unexplained_errors_become_unknown() {
        let err: SearchError = GeminiError::Unexplained { status: 500 }.into();
        assert_eq!(err.message(), UNKNOWN_ERROR_MESSAGE);
    }

    #[test]
    fn flattens_text_parts_and_web_chunks() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": "Paris is " }, { "text": "the capital." }] },
                "groundingMetadata": {
                    "groundingChunks": [
                        { "web": { "uri": "https://en.wikipedia.org/wiki/Paris", "title": "Paris" } },
                        { "web": { "uri": "https://example.org" } },
                        {}
                    ]
                }
            }]
        }))
        .unwrap();

        let result = into_search_result(&response);
        assert_eq!(result.answer, "Paris is the capital.");
        assert_eq!(
            result.citations,
            vec![
                Citation {
                    title: "Paris".to_string(),
                    uri: "https://en.wikipedia.org/wiki/Paris".to_string(),
                },
                Citation {
                    title: String::new(),
                    uri: "https://example.org".to_string(),
                },
            ]
        );
    }

    #[test]
    fn empty_response_has_empty_answer() {
        let result = into_search_result(&GenerateContentResponse::default());
        assert_eq!(result, SearchResult::default());
    }
}
