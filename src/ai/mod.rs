//! AI service integration for satirical article generation
//!
//! Provides the [`ArticleService`] seam used by the HTTP routes, backed by
//! Gemini's `generateContent` API in production and [`MockArticleClient`] in tests.

pub mod gemini;
pub mod mock;

pub use gemini::GeminiArticleClient;
pub use mock::MockArticleClient;

use crate::prompts;
use crate::Result;
use async_trait::async_trait;

/// Which instruction template a prompt is embedded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    /// Full HTML article.
    Article,
    /// A couple of sentences of teaser text.
    Preview,
}

impl GenerationMode {
    /// Build the instruction sent upstream. The title is interpolated verbatim.
    pub fn instruction(self, title: &str) -> String {
        let template = match self {
            GenerationMode::Article => prompts::ARTICLE,
            GenerationMode::Preview => prompts::PREVIEW,
        };
        prompts::render(template, &[("title", title)])
    }
}

#[async_trait]
pub trait ArticleService: Send + Sync {
    async fn generate(&self, mode: GenerationMode, title: &str) -> Result<String>;

    async fn generate_article(&self, title: &str) -> Result<String> {
        self.generate(GenerationMode::Article, title).await
    }

    async fn generate_preview(&self, title: &str) -> Result<String> {
        self.generate(GenerationMode::Preview, title).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_instruction_quotes_title() {
        let instruction = GenerationMode::Article.instruction("Test Title");
        assert!(instruction.contains("`Test Title`"));
        assert!(instruction.starts_with("Generate a satirical news article"));
        assert!(instruction.ends_with("Style it like a real news website."));
    }

    #[test]
    fn test_preview_instruction_quotes_title() {
        let instruction = GenerationMode::Preview.instruction("Test Title");
        assert!(instruction.contains("`Test Title`"));
        assert!(instruction.ends_with("Just a couple sentences."));
    }

    #[test]
    fn test_instruction_does_not_escape_title() {
        let instruction = GenerationMode::Article.instruction("<b>\"Hi\"</b>");
        assert!(instruction.contains("`<b>\"Hi\"</b>`"));
    }
}
