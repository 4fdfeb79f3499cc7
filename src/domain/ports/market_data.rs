use crate::domain::entities::news::NewsItem;
use crate::domain::entities::stock::{HistoricalBar, MarketQuote, QuoteSummary};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MarketDataError {
    /// The provider has no data for the symbol (unknown, delisted, 404).
    #[error("No data found for {0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// External finance-data provider.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    fn name(&self) -> &str;

    async fn quote(&self, symbol: &str) -> Result<MarketQuote, MarketDataError>;

    async fn quote_summary(&self, symbol: &str) -> Result<QuoteSummary, MarketDataError>;

    /// Bars from `start` to now at the given interval (`1d`, `1wk`, `1mo`).
    async fn historical(
        &self,
        symbol: &str,
        start: DateTime<Utc>,
        interval: &str,
    ) -> Result<Vec<HistoricalBar>, MarketDataError>;

    /// Quotes for the symbols trending in `region`.
    async fn trending(&self, region: &str, count: usize) -> Result<Vec<MarketQuote>, MarketDataError>;

    async fn search_news(&self, query: &str, count: usize) -> Result<Vec<NewsItem>, MarketDataError>;
}
