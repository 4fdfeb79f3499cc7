use crate::application::generation::generate_structured;
use crate::domain::entities::news::NewsSummary;
use crate::domain::error::DomainError;
use crate::domain::ports::generative_model::GenerativeModel;
use crate::domain::ports::page_fetcher::PageFetcher;
use crate::infrastructure::web::article::{extract_article_text, ARTICLE_UNAVAILABLE};
use crate::prompts::news::{NewsPromptInput, NEWS_SUMMARY};
use std::sync::Arc;

const MIN_ARTICLE_CHARS: usize = 100;

pub struct SummarizeNewsUseCase {
    fetcher: Arc<dyn PageFetcher>,
    model: Arc<dyn GenerativeModel>,
}

impl SummarizeNewsUseCase {
    pub fn new(fetcher: Arc<dyn PageFetcher>, model: Arc<dyn GenerativeModel>) -> Self {
        Self { fetcher, model }
    }

    /// Article text, or the unavailable sentinel when fetch or extraction fails.
    pub async fn article_content(&self, url: &str) -> String {
        match self.fetcher.fetch_html(url).await {
            Ok(html) => extract_article_text(&html),
            Err(e) => {
                tracing::error!(url, error = %e, "error fetching article content");
                ARTICLE_UNAVAILABLE.to_string()
            }
        }
    }

    pub async fn execute(&self, url: &str) -> Result<NewsSummary, DomainError> {
        let article = self.article_content(url).await;
        if article == ARTICLE_UNAVAILABLE || article.trim().chars().count() < MIN_ARTICLE_CHARS {
            return Ok(NewsSummary::insufficient_content());
        }
        let request = NEWS_SUMMARY.request(&NewsPromptInput { article: &article })?;
        generate_structured(self.model.as_ref(), &request).await
    }
}
