use crate::domain::entities::stock::{ComparisonRow, QuoteSummary};
use crate::domain::ports::market_data::MarketDataProvider;
use crate::domain::values::comparison_request::ComparisonRequest;
use crate::domain::values::recommendation::humanize_recommendation;
use futures::future::join_all;
use std::sync::Arc;

pub struct CompareUseCase {
    market: Arc<dyn MarketDataProvider>,
}

impl CompareUseCase {
    pub fn new(market: Arc<dyn MarketDataProvider>) -> Self {
        Self { market }
    }

    /// One row per requested symbol, in request order. A symbol that fails
    /// becomes a placeholder row instead of failing the batch.
    pub async fn execute(&self, request: &ComparisonRequest) -> Vec<ComparisonRow> {
        let fetches = request
            .symbols()
            .iter()
            .map(|s| self.market.quote_summary(s.as_str()));
        let results = join_all(fetches).await;

        request
            .symbols()
            .iter()
            .zip(results)
            .map(|(symbol, result)| match result {
                Ok(summary) => to_row(symbol.as_str(), summary),
                Err(e) => {
                    tracing::warn!(%symbol, error = %e, "comparison data unavailable");
                    ComparisonRow::not_found(symbol.as_str())
                }
            })
            .collect()
    }
}

fn to_row(symbol: &str, summary: QuoteSummary) -> ComparisonRow {
    let (Some(price), Some(detail), Some(financial)) =
        (summary.price, summary.summary_detail, summary.financial_data)
    else {
        return ComparisonRow::not_found(symbol);
    };
    let name = price
        .long_name
        .or(price.short_name)
        .unwrap_or_else(|| price.symbol.clone());
    ComparisonRow {
        symbol: price.symbol,
        name,
        price: price.regular_market_price,
        market_cap: detail.market_cap,
        pe_ratio: detail.trailing_pe,
        dividend_yield: detail.dividend_yield,
        analyst_recommendation: financial
            .recommendation_key
            .map(|k| humanize_recommendation(&k)),
    }
}
