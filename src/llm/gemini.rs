use crate::config::ModelSettings;
use crate::llm::types::{ErrorEnvelope, GenerateContentRequest, GenerateContentResponse};
use reqwest::Client;

/// Errors from a single `generateContent` round trip
#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The service failed without saying why
    #[error("request failed with status {status} and no error message")]
    Unexplained { status: u16 },
}

/// Gemini REST client
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    settings: ModelSettings,
    api_key: String,
}

impl GeminiClient {
    pub fn new(settings: ModelSettings, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            settings,
            api_key: api_key.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.settings.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.settings.api_base.trim_end_matches('/'),
            self.settings.model
        )
    }

    /// Run one non-streaming generation
    pub async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let url = self.endpoint();

        tracing::debug!(
            api_base = %self.settings.api_base,
            model = %self.settings.model,
            tool_count = request.tools.len(),
            "gemini generate_content request"
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(
                status = %status,
                error = %crate::logging::redact_secrets(&body),
                "gemini api returned error"
            );
            return Err(api_error(status.as_u16(), &body));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body)?;
        tracing::debug!(
            candidates = parsed.candidates.len(),
            grounding_chunks = parsed.grounding_chunks().len(),
            web_search_queries = ?parsed.web_search_queries(),
            "gemini generate_content response"
        );
        Ok(parsed)
    }
}

fn api_error(status: u16, body: &str) -> GeminiError {
    let message = match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) => body.trim().to_string(),
    };

    if message.trim().is_empty() {
        GeminiError::Unexplained { status }
    } else {
        GeminiError::Api { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_prefers_envelope_message() {
        let body = r#"{"error":{"code":429,"message":"quota exceeded","status":"RESOURCE_EXHAUSTED"}}"#;
        match api_error(429, body) {
            GeminiError::Api { status, message } => {
                assert_eq!(status, 429);
                assert_eq!(message, "quota exceeded");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn api_error_falls_back_to_raw_body() {
        let err = api_error(502, "Bad Gateway\n");
        assert_eq!(err.to_string(), "Bad Gateway");
    }

    #[test]
    fn api_error_without_message_is_unexplained() {
        assert!(matches!(
            api_error(500, "  "),
            GeminiError::Unexplained { status: 500 }
        ));
    }

    #[test]
    fn response_exposes_grounding_queries_of_first_candidate() {
        let parsed: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"groundingMetadata":{"webSearchQueries":["rust 2024 edition"]}},{"groundingMetadata":{"webSearchQueries":["ignored"]}}]}"#,
        )
        .unwrap();
        assert_eq!(parsed.web_search_queries(), ["rust 2024 edition".to_string()]);
        assert!(GenerateContentResponse::default().web_search_queries().is_empty());
    }

    #[test]
    fn endpoint_joins_base_and_model() {
        let client = GeminiClient::new(
            ModelSettings {
                api_base: "http://localhost:9000/".to_string(),
                model: "gemini-2.5-flash".to_string(),
            },
            "key",
        );
        assert_eq!(
            client.endpoint(),
            "http://localhost:9000/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }
}
