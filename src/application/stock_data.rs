use crate::domain::entities::stock::{StockData, StockDetails};
use crate::domain::error::DomainError;
use crate::domain::ports::market_data::{MarketDataError, MarketDataProvider};
use crate::domain::values::recommendation::humanize_recommendation;
use crate::domain::values::symbol::Symbol;
use crate::domain::values::timeframe::Timeframe;
use chrono::Utc;
use std::sync::Arc;

pub struct StockDataUseCase {
    market: Arc<dyn MarketDataProvider>,
}

impl StockDataUseCase {
    pub fn new(market: Arc<dyn MarketDataProvider>) -> Self {
        Self { market }
    }

    /// Details plus history for `timeframe`. Provider failures come back as
    /// user-readable messages.
    pub async fn execute(&self, symbol: &Symbol, timeframe: Timeframe) -> Result<StockData, DomainError> {
        self.fetch(symbol, timeframe).await.map_err(|e| {
            tracing::error!(%symbol, error = %e, "failed to fetch stock data");
            user_message(symbol, &e)
        })
    }

    async fn fetch(&self, symbol: &Symbol, timeframe: Timeframe) -> Result<StockData, MarketDataError> {
        let sym = symbol.as_str();
        let summary = self.market.quote_summary(sym).await?;

        let start = timeframe.start_date(Utc::now());
        let (quote, history) = tokio::try_join!(
            self.market.quote(sym),
            self.market.historical(sym, start, timeframe.interval()),
        )?;

        if history.is_empty() {
            return Err(MarketDataError::NotFound(sym.to_string()));
        }

        let detail = summary.summary_detail.unwrap_or_default();
        let details = StockDetails {
            name: quote
                .long_name
                .unwrap_or_else(|| format!("{sym} Company")),
            description: summary
                .summary_profile
                .and_then(|p| p.long_business_summary)
                .unwrap_or_else(|| format!("Description for {sym}.")),
            exchange: quote
                .full_exchange_name
                .unwrap_or_else(|| "N/A".to_string()),
            market_cap: detail.market_cap,
            pe_ratio: detail.trailing_pe,
            dividend_yield: detail.dividend_yield,
            analyst_recommendation: summary
                .financial_data
                .and_then(|f| f.recommendation_key)
                .map(|k| humanize_recommendation(&k)),
        };

        Ok(StockData {
            symbol: sym.to_string(),
            details,
            historical: history,
        })
    }
}

fn user_message(symbol: &Symbol, err: &MarketDataError) -> DomainError {
    match err {
        MarketDataError::NotFound(_) => DomainError::MarketData(format!(
            "Could not find stock data for symbol: {symbol}. Please check if the symbol is correct."
        )),
        _ => DomainError::MarketData(
            "An external service error occurred while fetching stock data.".to_string(),
        ),
    }
}
