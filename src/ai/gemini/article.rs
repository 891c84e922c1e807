use super::client::GeminiHttpClient;
use super::types::{GenerateContentRequest, GenerateContentResponse};
use crate::ai::{ArticleService, GenerationMode};
use crate::{Error, Result};
use async_trait::async_trait;

/// Generates satirical articles and previews through Gemini.
pub struct GeminiArticleClient {
    http: GeminiHttpClient,
}

impl GeminiArticleClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self::new_with_client(api_key, model, reqwest::Client::new())
    }

    pub fn new_with_client(api_key: String, model: String, client: reqwest::Client) -> Self {
        Self {
            http: GeminiHttpClient::new_with_client(api_key, model, client),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.http = self.http.with_base_url(base_url);
        self
    }

    pub fn with_timeout(mut self, timeout: Option<std::time::Duration>) -> Self {
        self.http = self.http.with_timeout(timeout);
        self
    }

    pub fn model(&self) -> &str {
        self.http.model()
    }
}

#[async_trait]
impl ArticleService for GeminiArticleClient {
    async fn generate(&self, mode: GenerationMode, title: &str) -> Result<String> {
        tracing::debug!(?mode, "Sending generateContent request to Gemini");

        let request = GenerateContentRequest::from_text(mode.instruction(title));
        let response: GenerateContentResponse = self.http.generate_content(&request).await?;

        response
            .first_text()
            .map(str::to_string)
            .ok_or(Error::NoContent)
    }
}
