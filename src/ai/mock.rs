use super::{ArticleService, GenerationMode};
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// In-memory [`ArticleService`] that records calls and replays canned text.
#[derive(Clone)]
pub struct MockArticleClient {
    article_response: Option<String>,
    preview_response: Option<String>,
    fail: bool,
    calls: Arc<Mutex<Vec<(GenerationMode, String)>>>,
}

impl MockArticleClient {
    pub fn new() -> Self {
        Self {
            article_response: None,
            preview_response: None,
            fail: false,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_article_response(mut self, response: String) -> Self {
        self.article_response = Some(response);
        self
    }

    pub fn with_preview_response(mut self, response: String) -> Self {
        self.preview_response = Some(response);
        self
    }

    /// Every call returns [`Error::NoContent`].
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    pub fn get_call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls(&self) -> Vec<(GenerationMode, String)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockArticleClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArticleService for MockArticleClient {
    async fn generate(&self, mode: GenerationMode, title: &str) -> Result<String> {
        self.calls.lock().unwrap().push((mode, title.to_string()));

        if self.fail {
            return Err(Error::NoContent);
        }

        let canned = match mode {
            GenerationMode::Article => &self.article_response,
            GenerationMode::Preview => &self.preview_response,
        };
        Ok(canned.clone().unwrap_or_else(|| match mode {
            GenerationMode::Article => format!("<article><h1>{}</h1></article>", title),
            GenerationMode::Preview => format!("Preview of {}.", title),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_default_responses_mention_title() {
        let client = MockArticleClient::new();

        let article = client.generate_article("Pigs Fly").await.unwrap();
        assert!(article.contains("Pigs Fly"));

        let preview = client.generate_preview("Pigs Fly").await.unwrap();
        assert!(preview.contains("Pigs Fly"));
    }

    #[tokio::test]
    async fn test_mock_records_calls() {
        let client = MockArticleClient::new().with_preview_response("Short.".to_string());

        assert_eq!(client.get_call_count(), 0);
        assert_eq!(client.generate_preview("A").await.unwrap(), "Short.");
        client.generate_article("B").await.unwrap();

        assert_eq!(
            client.calls(),
            vec![
                (GenerationMode::Preview, "A".to_string()),
                (GenerationMode::Article, "B".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_mock_failing() {
        let client = MockArticleClient::new().failing();
        assert!(matches!(
            client.generate_article("x").await,
            Err(Error::NoContent)
        ));
        assert_eq!(client.get_call_count(), 1);
    }
}
