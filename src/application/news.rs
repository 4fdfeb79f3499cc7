use crate::domain::entities::news::NewsItem;
use crate::domain::ports::market_data::MarketDataProvider;
use std::sync::Arc;

pub const DEFAULT_NEWS_QUERY: &str = "market news";
pub const NEWS_COUNT: usize = 40;

pub struct NewsUseCase {
    market: Arc<dyn MarketDataProvider>,
}

impl NewsUseCase {
    pub fn new(market: Arc<dyn MarketDataProvider>) -> Self {
        Self { market }
    }

    /// Provider failures yield an empty list.
    pub async fn execute(&self, query: Option<&str>) -> Vec<NewsItem> {
        let query = query
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .unwrap_or(DEFAULT_NEWS_QUERY);
        match self.market.search_news(query, NEWS_COUNT).await {
            Ok(items) => items,
            Err(e) => {
                tracing::error!(query, error = %e, "failed to fetch news");
                Vec::new()
            }
        }
    }
}
